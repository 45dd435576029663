//! Error types for geometry construction, contour validation and offsetting.
//!
//! Intersect, distance and predicate queries never fail, they return empty or sentinel results.
//! Errors are only raised where a value cannot be constructed or an algorithm cannot finish.

use thiserror::Error;

/// Errors raised while constructing or validating geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Arc parameters are missing or inconsistent, e.g. two points with no radius or center, or a
    /// radius smaller than half the chord.
    #[error("malformed arc construction: {reason}")]
    MalformedArc { reason: &'static str },
    /// Segment has zero length where a direction is required.
    #[error("segment {index} has zero length")]
    DegenerateSegment { index: usize },
    /// Segment does not start where the previous one ends.
    #[error("segment {index} does not start at the end of the previous segment")]
    Disconnected { index: usize },
}

/// Errors raised by the offset engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffsetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Offset distance is zero, negative or not a number.
    #[error("offset distance must be a positive number")]
    InvalidDistance,
    /// Pairwise interference search around a reflex vertex did not settle.
    #[error(
        "interference search around element {vertex_index} did not settle within {iterations} \
         iterations"
    )]
    UnresolvedInterference {
        vertex_index: usize,
        iterations: usize,
    },
    /// Raw offsets of the trim partners found for a reflex vertex do not intersect.
    #[error("raw offsets of elements {backward} and {forward} do not intersect")]
    NoIntersectionOnTrim { forward: usize, backward: usize },
}

pub type Result<T, E = OffsetError> = std::result::Result<T, E>;
