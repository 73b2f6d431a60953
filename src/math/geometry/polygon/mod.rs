// src/math/geometry/polygon/mod.rs

pub mod clipping;
pub mod properties;
pub mod stripes;

pub use clipping::clip_to_bounds;
#[cfg(test)]
pub use properties::is_convex;
pub use properties::{polygon_area, sort_counter_clockwise, to_geo_polygon, vertex_centroid};
pub use stripes::{StripeFill, StripeSegment};
