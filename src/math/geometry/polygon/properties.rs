// src/math/geometry/polygon/properties.rs

use crate::math::types::*;
use geo::{Area, LineString, Polygon};

/// Arithmetisches Mittel der Eckpunkte (kein Flächenschwerpunkt).
///
/// Gibt `None` für ein leeres Polygon zurück.
pub fn vertex_centroid(vertices: &[Point2D]) -> Option<Point2D> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices.iter().fold(Point2D::ZERO, |acc, v| acc + *v);
    Some(sum / vertices.len() as f32)
}

/// Wandelt die Eckpunkte in ein `geo::Polygon` um. Der Ring wird von `geo` geschlossen.
pub fn to_geo_polygon(vertices: &[Point2D]) -> Polygon<f64> {
    let exterior: LineString<f64> = vertices
        .iter()
        .map(|v| (v.x as f64, v.y as f64))
        .collect::<Vec<_>>()
        .into();
    Polygon::new(exterior, vec![])
}

/// Fläche des Polygons (immer positiv).
pub fn polygon_area(vertices: &[Point2D]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    to_geo_polygon(vertices).unsigned_area()
}

/// Prüft ob das Polygon konvex ist (kollineare Ecken erlaubt).
#[cfg(test)]
pub fn is_convex(vertices: &[Point2D]) -> bool {
    use geo::IsConvex;

    if vertices.len() < 3 {
        return false;
    }
    to_geo_polygon(vertices).exterior().is_convex()
}

/// Sortiert Punkte nach ihrem Winkel um `center`.
pub fn sort_counter_clockwise(center: SpadePoint, points: &mut [SpadePoint]) {
    points.sort_by(|a, b| {
        let angle_a = (a.y - center.y).atan2(a.x - center.x);
        let angle_b = (b.y - center.y).atan2(b.x - center.x);
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
