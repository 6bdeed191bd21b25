//! Internal modules with the segment index algorithm implementations.
pub mod dist_queue;
pub mod quad_build;
pub mod quad_search;
pub mod varint;
