// src/math/geometry/polygon/stripes.rs

use crate::math::{error::*, types::*};

/// Ein einzelner Schraffur-Strich innerhalb eines Polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripeSegment {
    pub start: Point2D,
    pub end: Point2D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanAxis {
    /// Senkrechte Striche, Scanlinien laufen entlang x.
    Vertical,
    /// Waagerechte Striche, Scanlinien laufen entlang y.
    Horizontal,
}

impl ScanAxis {
    /// Koordinate entlang der Scanrichtung.
    fn along(self, p: Point2D) -> f32 {
        match self {
            ScanAxis::Vertical => p.x,
            ScanAxis::Horizontal => p.y,
        }
    }

    /// Koordinate quer zur Scanrichtung.
    fn across(self, p: Point2D) -> f32 {
        match self {
            ScanAxis::Vertical => p.y,
            ScanAxis::Horizontal => p.x,
        }
    }

    fn point(self, along: f32, across: f32) -> Point2D {
        match self {
            ScanAxis::Vertical => Point2D::new(along, across),
            ScanAxis::Horizontal => Point2D::new(across, along),
        }
    }
}

/// Füllt Polygone näherungsweise mit parallelen Strichen statt einer Fläche.
///
/// Zwei unabhängige Durchgänge: senkrechte Striche im Abstand `pitch` von
/// `min_x` bis (exklusiv) `max_x`, danach waagerechte Striche von `min_y` bis
/// `max_y`. Eine Scanlinie erzeugt nur dann einen Strich, wenn sie genau zwei
/// Polygonkanten schneidet; bei konkaven Polygonen entfallen Linien mit mehr
/// Schnittpunkten.
///
/// Mit [`StripeFill::within`] werden nur Scanlinien innerhalb eines Fensters
/// erzeugt. Das Raster bleibt dabei am Polygon ausgerichtet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripeFill {
    pitch: f32,
    window: Option<Bounds2D>,
}

impl StripeFill {
    pub fn new(pitch: f32) -> MathResult<Self> {
        if !pitch.is_finite() || pitch <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Stripe pitch must be positive, got {pitch}"),
            });
        }
        Ok(Self {
            pitch,
            window: None,
        })
    }

    pub fn within(mut self, window: Bounds2D) -> Self {
        self.window = Some(window);
        self
    }

    /// Alle Striche: erst der senkrechte, dann der waagerechte Durchgang.
    pub fn segments(&self, polygon: &[Point2D]) -> Vec<StripeSegment> {
        let mut segments = self.vertical_segments(polygon);
        segments.extend(self.horizontal_segments(polygon));
        segments
    }

    pub fn vertical_segments(&self, polygon: &[Point2D]) -> Vec<StripeSegment> {
        self.scan(polygon, ScanAxis::Vertical)
    }

    pub fn horizontal_segments(&self, polygon: &[Point2D]) -> Vec<StripeSegment> {
        self.scan(polygon, ScanAxis::Horizontal)
    }

    fn scan(&self, polygon: &[Point2D], axis: ScanAxis) -> Vec<StripeSegment> {
        let Some(bounds) = Bounds2D::from_points_iter(polygon.iter().copied()) else {
            return Vec::new();
        };
        let min = axis.along(bounds.min);
        let max = axis.along(bounds.max);

        // Wie ein halboffenes `arange(min, max, pitch)`: Werte per Index statt aufsummiert.
        let line_count = ((max - min) / self.pitch).ceil().max(0.0) as usize;
        let (first, end) = match self.window {
            Some(window) => {
                let lo = ((axis.along(window.min) - min) / self.pitch).ceil().max(0.0) as usize;
                let hi = ((axis.along(window.max) - min) / self.pitch).floor() + 1.0;
                let end = line_count.min(hi.max(0.0) as usize);
                (lo.min(end), end)
            }
            None => (0, line_count),
        };

        let mut segments = Vec::with_capacity(end - first);
        for i in first..end {
            let value = min + i as f32 * self.pitch;
            let crossings = Self::crossings(polygon, axis, value);
            if let &[a, b] = crossings.as_slice() {
                segments.push(StripeSegment {
                    start: axis.point(value, a.min(b)),
                    end: axis.point(value, a.max(b)),
                });
            }
        }
        segments
    }

    /// Schnittpunkte der Scanlinie mit allen Kanten, die nicht parallel zu ihr liegen.
    fn crossings(polygon: &[Point2D], axis: ScanAxis, value: f32) -> Vec<f32> {
        let mut crossings = Vec::new();
        for (i, &p1) in polygon.iter().enumerate() {
            let p2 = polygon[(i + 1) % polygon.len()];
            let (a1, a2) = (axis.along(p1), axis.along(p2));
            if a1 == a2 {
                continue;
            }
            if (a1 <= value && value <= a2) || (a2 <= value && value <= a1) {
                let (c1, c2) = (axis.across(p1), axis.across(p2));
                crossings.push(c1 + (c2 - c1) * (value - a1) / (a2 - a1));
            }
        }
        crossings
    }
}
