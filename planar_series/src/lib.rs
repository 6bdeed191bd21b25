//! 2D point series geometry library for computing bounding extents, winding direction,
//! convexity, and fast segment queries (rectangle intersection and nearest segment) backed by a
//! compact serialized quadtree index.

#[macro_use]
mod macros;
pub mod core;
pub mod series;
