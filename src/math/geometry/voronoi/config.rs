// src/math/geometry/voronoi/config.rs
use crate::math::{error::*, types::*};

/// Feste Randanker und Optionen für das begrenzte Voronoi-Diagramm.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiConfig {
    /// Vier Generatoren, die ein Rechteck um das Spielfeld bilden. Sie sorgen
    /// nur dafür, dass die Zellen am Spielfeldrand geschlossen sind.
    pub anchors: [Point2D; 4],
    /// Beschränkte Zellen zusätzlich auf das Anker-Rechteck zuschneiden.
    pub clip_to_anchors: bool,
}

impl VoronoiConfig {
    /// Anker in den Ecken des Spielfelds, jeweils `inset` Pixel vom Fensterrand entfernt.
    pub fn from_pitch(width: f32, height: f32, inset: f32) -> Self {
        Self {
            anchors: [
                Point2D::new(inset, inset),
                Point2D::new(width - inset, inset),
                Point2D::new(width - inset, height - inset),
                Point2D::new(inset, height - inset),
            ],
            clip_to_anchors: false,
        }
    }

    pub fn with_clipping(mut self, clip_to_anchors: bool) -> Self {
        self.clip_to_anchors = clip_to_anchors;
        self
    }

    /// Das von den Ankern aufgespannte Rechteck.
    pub fn anchor_bounds(&self) -> Bounds2D {
        let first = Bounds2D::from_points(self.anchors[0], self.anchors[0]);
        self.anchors[1..].iter().fold(first, |bounds, anchor| {
            Bounds2D::from_points(bounds.min.min(*anchor), bounds.max.max(*anchor))
        })
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.anchors.iter().any(|a| !a.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: "Boundary anchors must be finite".to_string(),
            });
        }

        let bounds = self.anchor_bounds();

        if bounds.area() <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Boundary anchors span no area: {:?}", self.anchors),
            });
        }

        let corners = bounds.corners();
        let every_corner_used = corners.iter().all(|c| self.anchors.contains(c));
        if !every_corner_used {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Boundary anchors must be the corners of an axis-aligned rectangle: {:?}",
                    self.anchors
                ),
            });
        }

        Ok(())
    }
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self::from_pitch(1200.0, 800.0, 50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_anchors_match_pitch() {
        let config = VoronoiConfig::default();
        assert_eq!(
            config.anchors,
            [
                Point2D::new(50.0, 50.0),
                Point2D::new(1150.0, 50.0),
                Point2D::new(1150.0, 750.0),
                Point2D::new(50.0, 750.0),
            ]
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.anchor_bounds().size(), Point2D::new(1100.0, 700.0));
    }

    #[test]
    fn test_validate_rejects_non_rectangles() {
        let skewed = VoronoiConfig {
            anchors: [
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 1.0),
                Point2D::new(10.0, 10.0),
                Point2D::new(0.0, 10.0),
            ],
            ..VoronoiConfig::default()
        };
        assert!(skewed.validate().is_err());

        let flat = VoronoiConfig {
            anchors: [Point2D::new(5.0, 5.0); 4],
            ..VoronoiConfig::default()
        };
        assert!(flat.validate().is_err());

        let nan = VoronoiConfig {
            anchors: [
                Point2D::new(f32::NAN, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(10.0, 10.0),
                Point2D::new(0.0, 10.0),
            ],
            ..VoronoiConfig::default()
        };
        assert!(nan.validate().is_err());
    }
}
