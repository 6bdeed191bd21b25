//! Supporting public types used by [Series](crate::series::Series) and
//! [SeriesSource](crate::series::SeriesSource) methods.

use crate::core::{math::Segment, traits::Real};
use std::fmt;
use thiserror::Error;

/// Number of bytes in the serialized index header: one kind byte followed by the total blob
/// length as a little-endian unsigned 32 bit integer.
pub const INDEX_HEADER_LEN: usize = 5;

/// Default minimum number of points required before a series builds its segment index.
pub const DEFAULT_MIN_POINTS: usize = 64;

/// The kind of segment index a series builds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// No index; queries fall back to linear scans over the segments.
    None,
    /// Compressed quadtree over the segment bounding rectangles.
    QuadTree,
}

impl IndexKind {
    /// Discriminator byte stored at offset zero of the serialized index.
    pub(crate) fn as_byte(self) -> u8 {
        match self {
            IndexKind::None => 0,
            IndexKind::QuadTree => 1,
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::None => write!(f, "None"),
            IndexKind::QuadTree => write!(f, "QuadTree"),
        }
    }
}

/// Segment indexing options used when constructing a [Series](crate::series::Series).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Kind of index to build.
    pub kind: IndexKind,
    /// Minimum number of points required before the index is built. Zero disables indexing
    /// unconditionally.
    pub min_points: usize,
}

impl IndexOptions {
    pub fn new(kind: IndexKind, min_points: usize) -> Self {
        Self { kind, min_points }
    }

    /// Options that disable indexing unconditionally.
    pub fn no_indexing() -> Self {
        Self::new(IndexKind::None, 0)
    }
}

impl Default for IndexOptions {
    #[inline]
    fn default() -> Self {
        Self::new(IndexKind::QuadTree, DEFAULT_MIN_POINTS)
    }
}

/// Result from [SeriesSource::nearest_segment](crate::series::SeriesSource::nearest_segment).
#[derive(Debug, Copy, Clone)]
pub struct NearestSegment<T>
where
    T: Real,
{
    /// The nearest segment found.
    pub segment: Segment<T>,
    /// Index of the segment within the series.
    pub index: usize,
    /// Distance reported by the caller's segment distance functional.
    pub distance: T,
}

/// Error raised when decoding a corrupt or truncated serialized segment index. Queries surface
/// these instead of empty results so corruption is never silently ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A varint continuation run exceeded the maximum of 10 bytes.
    #[error("segment index varint run exceeds 10 bytes")]
    InvalidVarint,
    /// A node payload or quadrant size would overrun the end of the blob.
    #[error("segment index blob is truncated")]
    Truncated,
    /// The header length does not match the actual blob length.
    #[error("segment index header states {stated} bytes but blob is {actual} bytes")]
    LengthMismatch { stated: usize, actual: usize },
    /// The header kind byte is not a recognized index kind.
    #[error("unknown segment index kind byte {0}")]
    UnknownKind(u8),
    /// A decoded item refers to a segment index outside the series.
    #[error("segment index refers to out of range segment {0}")]
    SegmentOutOfRange(usize),
}
