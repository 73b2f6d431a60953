// src/math/geometry/voronoi/mod.rs

pub mod config;
pub mod ownership;
pub mod triangulation;

pub use self::config::VoronoiConfig;
pub use self::ownership::{OwnedRegion, OwnershipResolver};
pub use self::triangulation::{
    CellShape, Generator, TessellationBuilder, VoronoiCell, VoronoiDiagram, VoronoiRidge,
};
