// src/board/territory.rs
use bevy::prelude::Resource;

use super::frame::{Frame, PlayerKey, Team};
use crate::math::error::MathResult;
use crate::math::geometry::voronoi::{
    OwnedRegion, OwnershipResolver, TessellationBuilder, VoronoiConfig, VoronoiRidge,
};
use crate::math::types::Point2D;

/// Besitzregionen und Voronoi-Kanten eines Frames.
#[derive(Resource, Debug, Clone, Default)]
pub struct TerritoryDiagram {
    pub regions: Vec<OwnedRegion<PlayerKey>>,
    pub ridges: Vec<VoronoiRidge>,
    /// Revision und Zuschnitt, aus denen das Diagramm zuletzt berechnet wurde.
    pub source: Option<(u64, bool)>,
}

impl TerritoryDiagram {
    /// Tessellation über alle Spieler (Team 1 vor Team 2), danach Besitzauflösung.
    pub fn compute(frame: &Frame, config: &VoronoiConfig) -> MathResult<Self> {
        let keyed = frame.keyed_positions();
        let positions: Vec<Point2D> = keyed.iter().map(|(_, position)| *position).collect();

        let diagram = TessellationBuilder::new(config.clone())?.build(&positions)?;
        let regions = OwnershipResolver::resolve(&diagram, &keyed);

        Ok(Self {
            regions,
            ridges: diagram.ridges,
            source: None,
        })
    }

    pub fn is_stale(&self, revision: u64, clipped: bool) -> bool {
        self.source != Some((revision, clipped))
    }

    pub fn regions_of(&self, team: Team) -> impl Iterator<Item = &OwnedRegion<PlayerKey>> + '_ {
        self.regions.iter().filter(move |region| region.owner.team == team)
    }

    pub fn clear(&mut self) {
        self.regions.clear();
        self.ridges.clear();
    }
}
