// src/math/geometry/mod.rs

pub mod polygon;
pub mod voronoi;

pub use self::polygon::{StripeFill, StripeSegment};
pub use self::voronoi::{
    CellShape, Generator, OwnedRegion, OwnershipResolver, TessellationBuilder, VoronoiCell,
    VoronoiConfig, VoronoiDiagram, VoronoiRidge,
};
