// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec2;
pub use spade::Point2;

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Vec2;
pub type SpadePoint = Point2<f64>;

/// Konvertiert einen Brett-Punkt in die f64-Darstellung von spade.
pub fn to_spade(point: Point2D) -> SpadePoint {
    Point2::new(point.x as f64, point.y as f64)
}

/// Konvertiert einen spade-Punkt zurück in Brett-Koordinaten.
pub fn from_spade(point: SpadePoint) -> Point2D {
    Vec2::new(point.x as f32, point.y as f32)
}
