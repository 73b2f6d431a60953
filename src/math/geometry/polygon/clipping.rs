// src/math/geometry/polygon/clipping.rs

use crate::math::{
    types::*,
    utils::{constants, simple_geometry::cross_product_2d},
};

/// Clippt ein Polygon gegen eine achsenparallele Box (Sutherland-Hodgman).
///
/// Die Eckpunkte müssen gegen den Uhrzeigersinn (mathematisch) sortiert sein.
/// Liegt das Polygon komplett außerhalb, ist das Ergebnis leer.
pub fn clip_to_bounds(vertices: &[Point2D], bounds: &Bounds2D) -> Vec<Point2D> {
    let corners = bounds.corners();
    let mut clipped = vertices.to_vec();

    for i in 0..corners.len() {
        if clipped.is_empty() {
            break;
        }
        let edge_start = corners[i];
        let edge_end = corners[(i + 1) % corners.len()];

        let input_vertices = std::mem::take(&mut clipped);
        let mut s = input_vertices[input_vertices.len() - 1];

        for e in input_vertices {
            if is_inside_edge(e, edge_start, edge_end) {
                if !is_inside_edge(s, edge_start, edge_end) {
                    if let Some(intersection) = line_intersection(s, e, edge_start, edge_end) {
                        clipped.push(intersection);
                    }
                }
                clipped.push(e);
            } else if is_inside_edge(s, edge_start, edge_end) {
                if let Some(intersection) = line_intersection(s, e, edge_start, edge_end) {
                    clipped.push(intersection);
                }
            }
            s = e;
        }
    }

    clipped
}

fn is_inside_edge(point: Point2D, edge_start: Point2D, edge_end: Point2D) -> bool {
    cross_product_2d(edge_end - edge_start, point - edge_start) >= 0.0
}

fn line_intersection(p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> Option<Point2D> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denominator = cross_product_2d(d1, d2);
    if denominator.abs() < constants::EPSILON {
        return None;
    }

    let t = cross_product_2d(p3 - p1, d2) / denominator;
    Some(p1 + d1 * t)
}
