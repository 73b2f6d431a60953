// src/math/types/bounds.rs

use crate::math::types::*;

/// Achsenparalleles Rechteck in Brett-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Rechteck, das von zwei beliebigen Ecken aufgespannt wird.
    pub fn from_points(a: Point2D, b: Point2D) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Kleinstes Rechteck um alle Punkte; `None` ohne Punkte.
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_points(first, first), |bounds, p| {
            Self::from_points(bounds.min.min(p), bounds.max.max(p))
        }))
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn size(&self) -> Point2D {
        Point2D::new(self.width(), self.height())
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Rand inklusive.
    #[cfg(test)]
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Die vier Ecken gegen den Uhrzeigersinn (mathematisch), beginnend bei `min`.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }
}
