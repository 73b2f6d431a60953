// src/math/geometry/voronoi/triangulation.rs

use super::config::VoronoiConfig;
use crate::math::geometry::polygon::{clip_to_bounds, polygon_area, sort_counter_clockwise};
use crate::math::{error::*, types::*, utils::constants};
use bevy::log::debug;
use spade::handles::{FixedVertexHandle, VertexHandle};
use spade::{DelaunayTriangulation, Triangulation};
use std::collections::HashMap;

type Delaunay = DelaunayTriangulation<SpadePoint>;

/// Herkunft eines Generatorpunktes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generator {
    /// Index in der übergebenen Spielerliste.
    Player(usize),
    /// Index in `VoronoiConfig::anchors`.
    Anchor(usize),
}

/// Form einer Voronoi-Zelle.
#[derive(Debug, Clone, PartialEq)]
pub enum CellShape {
    /// Geschlossenes Polygon, Ecken gegen den Uhrzeigersinn (mathematisch) sortiert.
    Bounded(Vec<Point2D>),
    /// Die Zelle grenzt an die äußere Fläche der Triangulation.
    Unbounded,
    /// Weniger als drei verschiedene Ecken oder keine Fläche.
    Degenerate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    pub generator: Generator,
    pub shape: CellShape,
}

impl VoronoiCell {
    /// Eckpunkte, falls die Zelle beschränkt ist.
    pub fn vertices(&self) -> Option<&[Point2D]> {
        match &self.shape {
            CellShape::Bounded(vertices) => Some(vertices),
            CellShape::Unbounded | CellShape::Degenerate => None,
        }
    }
}

/// Endliche Kante zwischen zwei benachbarten Zellen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiRidge {
    pub start: Point2D,
    pub end: Point2D,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoronoiDiagram {
    /// Sortiert nach Generator: erst Spieler in Eingabereihenfolge, dann Anker.
    pub cells: Vec<VoronoiCell>,
    pub ridges: Vec<VoronoiRidge>,
}

impl VoronoiDiagram {
    /// Beschränkte Zellen, die zu einem Spieler gehören (Ankerzellen ausgeschlossen).
    pub fn player_cells(&self) -> impl Iterator<Item = (usize, &[Point2D])> + '_ {
        self.cells.iter().filter_map(|cell| match cell.generator {
            Generator::Player(index) => Some((index, cell.vertices()?)),
            Generator::Anchor(_) => None,
        })
    }
}

/// Baut das begrenzte Voronoi-Diagramm als Dual der Delaunay-Triangulation.
///
/// Die Spieler und die vier Randanker werden gemeinsam trianguliert. Die Ecken
/// einer Zelle sind die Umkreismittelpunkte der angrenzenden inneren Dreiecke;
/// grenzt ein Generator an die äußere Fläche, ist seine Zelle unbeschränkt.
pub struct TessellationBuilder {
    config: VoronoiConfig,
}

impl TessellationBuilder {
    pub fn new(config: VoronoiConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn build(&self, players: &[Point2D]) -> MathResult<VoronoiDiagram> {
        if players.is_empty() {
            debug!("TessellationBuilder: no player positions, empty diagram.");
            return Ok(VoronoiDiagram::default());
        }

        let mut triangulation = Delaunay::new();
        // Doppelte Positionen ergeben denselben Vertex; der zuerst eingefügte Generator gewinnt.
        let mut generators: HashMap<FixedVertexHandle, Generator> = HashMap::new();

        let player_sites = players
            .iter()
            .enumerate()
            .map(|(i, p)| (Generator::Player(i), *p));
        let anchor_sites = self
            .config
            .anchors
            .iter()
            .enumerate()
            .map(|(i, a)| (Generator::Anchor(i), *a));

        for (generator, site) in player_sites.chain(anchor_sites) {
            let handle = triangulation.insert(to_spade(site)).map_err(|err| {
                MathError::GeometricFailure {
                    operation: format!(
                        "Failed to insert {:?} at {:?} into triangulation: {:?}",
                        generator, site, err
                    ),
                }
            })?;
            generators.entry(handle).or_insert(generator);
        }

        let mut cells: Vec<VoronoiCell> = triangulation
            .vertices()
            .filter_map(|vertex| {
                let generator = *generators.get(&vertex.fix())?;
                Some(self.extract_cell(vertex, generator))
            })
            .collect();
        cells.sort_by_key(|cell| cell.generator);

        let ridges = Self::extract_ridges(&triangulation);

        Ok(VoronoiDiagram { cells, ridges })
    }

    fn extract_cell(&self, vertex: VertexHandle<'_, SpadePoint>, generator: Generator) -> VoronoiCell {
        let site = vertex.position();
        let mut circumcenters = Vec::new();

        for edge in vertex.out_edges() {
            match edge.face().as_inner() {
                Some(face) => circumcenters.push(face.circumcenter()),
                None => {
                    return VoronoiCell {
                        generator,
                        shape: CellShape::Unbounded,
                    };
                }
            }
        }

        sort_counter_clockwise(site, &mut circumcenters);

        // Kozirkuläre Generatoren liefern mehrfach denselben Umkreismittelpunkt
        circumcenters.dedup_by(|a, b| spade_distance(*a, *b) < constants::VERTEX_MERGE_DISTANCE);
        if circumcenters.len() > 1 {
            let (first, last) = (circumcenters[0], circumcenters[circumcenters.len() - 1]);
            if spade_distance(first, last) < constants::VERTEX_MERGE_DISTANCE {
                circumcenters.pop();
            }
        }

        let mut vertices: Vec<Point2D> = circumcenters.into_iter().map(from_spade).collect();

        if self.config.clip_to_anchors && vertices.len() >= 3 {
            vertices = clip_to_bounds(&vertices, &self.config.anchor_bounds());
        }

        let shape = if vertices.len() < 3 || polygon_area(&vertices) < constants::DEGENERATE_AREA {
            debug!(
                "TessellationBuilder: degenerate cell for {:?} at {} with {} vertices.",
                generator,
                from_spade(site),
                vertices.len()
            );
            CellShape::Degenerate
        } else {
            CellShape::Bounded(vertices)
        };

        VoronoiCell { generator, shape }
    }

    /// Kanten zwischen zwei inneren Dreiecken; Strahlen ins Unendliche entfallen.
    fn extract_ridges(triangulation: &Delaunay) -> Vec<VoronoiRidge> {
        triangulation
            .undirected_edges()
            .filter_map(|edge| {
                let directed = edge.as_directed();
                let left = directed.face().as_inner()?.circumcenter();
                let right = directed.rev().face().as_inner()?.circumcenter();
                if spade_distance(left, right) < constants::VERTEX_MERGE_DISTANCE {
                    return None;
                }
                Some(VoronoiRidge {
                    start: from_spade(left),
                    end: from_spade(right),
                })
            })
            .collect()
    }
}

fn spade_distance(a: SpadePoint, b: SpadePoint) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::{is_convex, to_geo_polygon};
    use approx::assert_relative_eq;
    use geo::Contains;

    fn builder() -> TessellationBuilder {
        TessellationBuilder::new(VoronoiConfig::default()).unwrap()
    }

    fn cell_for(diagram: &VoronoiDiagram, generator: Generator) -> Option<&VoronoiCell> {
        diagram.cells.iter().find(|cell| cell.generator == generator)
    }

    #[test]
    fn test_single_player_gets_the_only_bounded_cell() {
        let diagram = builder().build(&[Point2D::new(600.0, 400.0)]).unwrap();

        assert_eq!(diagram.cells.len(), 5);
        let bounded: Vec<_> = diagram.cells.iter().filter(|c| c.vertices().is_some()).collect();
        assert_eq!(bounded.len(), 1);
        assert_eq!(bounded[0].generator, Generator::Player(0));

        for i in 0..4 {
            let anchor = cell_for(&diagram, Generator::Anchor(i)).unwrap();
            assert_eq!(anchor.shape, CellShape::Unbounded);
        }

        let vertices = bounded[0].vertices().unwrap();
        assert_eq!(vertices.len(), 4);
        let polygon = to_geo_polygon(vertices);
        assert!(polygon.contains(&geo::Point::new(600.0, 400.0)));

        // Umkreismittelpunkt des unteren Dreiecks (50,50), (1150,50), (600,400)
        let lowest = vertices
            .iter()
            .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap())
            .unwrap();
        assert_relative_eq!(lowest.x, 600.0, epsilon = 1e-3);
        assert_relative_eq!(lowest.y, -207.142_86, epsilon = 1e-2);

        // Die vier Speichen vom Spieler zu den Ankern trennen je zwei innere Dreiecke
        assert_eq!(diagram.ridges.len(), 4);
    }

    #[test]
    fn test_empty_players_yield_empty_diagram() {
        let diagram = builder().build(&[]).unwrap();
        assert!(diagram.cells.is_empty());
        assert!(diagram.ridges.is_empty());
        assert_eq!(diagram.player_cells().count(), 0);
    }

    #[test]
    fn test_bounded_cells_are_convex_and_contain_their_site() {
        let players = vec![
            Point2D::new(200.0, 150.0),
            Point2D::new(420.0, 610.0),
            Point2D::new(555.0, 333.0),
            Point2D::new(700.0, 480.0),
            Point2D::new(910.0, 220.0),
            Point2D::new(1010.0, 690.0),
            Point2D::new(330.0, 380.0),
        ];
        let diagram = builder().build(&players).unwrap();

        let cells: Vec<_> = diagram.player_cells().collect();
        assert_eq!(cells.len(), players.len());

        for (index, vertices) in cells {
            assert!(is_convex(vertices), "cell {index} is not convex");
            let site = players[index];
            let polygon = to_geo_polygon(vertices);
            assert!(polygon.contains(&geo::Point::new(site.x as f64, site.y as f64)));
        }
    }

    #[test]
    fn test_cocircular_players_share_a_merged_vertex() {
        let players = vec![
            Point2D::new(500.0, 300.0),
            Point2D::new(700.0, 300.0),
            Point2D::new(700.0, 500.0),
            Point2D::new(500.0, 500.0),
        ];
        let diagram = builder().build(&players).unwrap();

        let cells: Vec<_> = diagram.player_cells().collect();
        assert_eq!(cells.len(), 4);

        for (_, vertices) in cells {
            let centre_hits = vertices
                .iter()
                .filter(|v| v.distance(Point2D::new(600.0, 400.0)) < 1e-2)
                .count();
            assert_eq!(centre_hits, 1);
            for (i, v) in vertices.iter().enumerate() {
                let next = vertices[(i + 1) % vertices.len()];
                assert!(v.distance(next) > 1e-3);
            }
            assert!(is_convex(vertices));
        }
    }

    #[test]
    fn test_duplicate_positions_attribute_cell_to_first_player() {
        let players = vec![
            Point2D::new(300.0, 300.0),
            Point2D::new(300.0, 300.0),
            Point2D::new(800.0, 500.0),
        ];
        let diagram = builder().build(&players).unwrap();

        assert!(cell_for(&diagram, Generator::Player(0)).is_some());
        assert!(cell_for(&diagram, Generator::Player(1)).is_none());
        assert!(cell_for(&diagram, Generator::Player(2)).is_some());
    }

    #[test]
    fn test_clipping_keeps_cells_inside_anchor_rectangle() {
        let config = VoronoiConfig::default().with_clipping(true);
        let bounds = config.anchor_bounds();
        let clipped = TessellationBuilder::new(config)
            .unwrap()
            .build(&[Point2D::new(600.0, 400.0)])
            .unwrap();
        let unclipped = builder().build(&[Point2D::new(600.0, 400.0)]).unwrap();

        let (_, clipped_vertices) = clipped.player_cells().next().unwrap();
        let (_, raw_vertices) = unclipped.player_cells().next().unwrap();

        let tolerant = Bounds2D::from_points(
            bounds.min - Point2D::splat(1e-2),
            bounds.max + Point2D::splat(1e-2),
        );
        assert!(clipped_vertices.iter().all(|v| tolerant.contains_point(*v)));
        assert!(polygon_area(clipped_vertices) < polygon_area(raw_vertices));
    }

    #[test]
    fn test_non_finite_player_is_an_error() {
        let result = builder().build(&[Point2D::new(f32::NAN, 10.0)]);
        assert!(matches!(result, Err(MathError::GeometricFailure { .. })));
    }
}
