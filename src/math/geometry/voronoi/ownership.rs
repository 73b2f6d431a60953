// src/math/geometry/voronoi/ownership.rs

use super::triangulation::VoronoiDiagram;
use crate::math::geometry::polygon::vertex_centroid;
use crate::math::types::*;

/// Eine beschränkte Zelle samt dem Spieler, dem sie zugeordnet wurde.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedRegion<K> {
    pub polygon: Vec<Point2D>,
    /// Mittelwert der Eckpunkte, gegen den der nächste Spieler gesucht wurde.
    pub centroid: Point2D,
    pub owner: K,
}

/// Ordnet jede beschränkte Spielerzelle dem Spieler zu, der ihrem Schwerpunkt am nächsten ist.
///
/// `K` ist ein eindeutiger Schlüssel pro Spieler (z.B. Team + Index). Bei
/// gleichem Abstand gewinnt der zuerst aufgeführte Spieler; verglichen wird
/// nur über den Schlüssel, nie über Koordinaten.
pub struct OwnershipResolver;

impl OwnershipResolver {
    pub fn resolve<K: Copy>(diagram: &VoronoiDiagram, players: &[(K, Point2D)]) -> Vec<OwnedRegion<K>> {
        if players.is_empty() {
            return Vec::new();
        }

        diagram
            .player_cells()
            .filter_map(|(_, vertices)| {
                let centroid = vertex_centroid(vertices)?;
                let owner = Self::nearest(centroid, players)?;
                Some(OwnedRegion {
                    polygon: vertices.to_vec(),
                    centroid,
                    owner,
                })
            })
            .collect()
    }

    /// Schlüssel des Spielers mit minimalem euklidischem Abstand zu `point`.
    pub fn nearest<K: Copy>(point: Point2D, players: &[(K, Point2D)]) -> Option<K> {
        let mut closest: Option<(K, f32)> = None;
        for &(key, position) in players {
            let distance = position.distance_squared(point);
            // strikt kleiner: der zuerst gesehene Spieler behält den Gleichstand
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((key, distance));
            }
        }
        closest.map(|(key, _)| key)
    }
}
