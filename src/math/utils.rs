// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    /// Unterhalb dieser Fläche (px²) gilt eine Zelle als entartet.
    pub const DEGENERATE_AREA: f64 = 1e-6;
    /// Voronoi-Ecken näher als diese Distanz (px) werden zusammengeführt.
    pub const VERTEX_MERGE_DISTANCE: f64 = 1e-6;
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use bevy::math::Vec2;

    /// Berechnet den quadrierten Abstand zwischen zwei Punkten
    pub fn distance_sq(p1: Vec2, p2: Vec2) -> f32 {
        (p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)
    }

    /// Berechnet das Kreuzprodukt zweier 2D-Vektoren (Skalar)
    pub fn cross_product_2d(a: Vec2, b: Vec2) -> f32 {
        a.x * b.y - a.y * b.x
    }

    /// Prüft ob `point` im Kreis um `center` mit `radius` liegt (Rand inklusive).
    pub fn within_radius(point: Vec2, center: Vec2, radius: f32) -> bool {
        distance_sq(point, center) <= radius * radius
    }
}
