//! 2D contour offsetting for line/arc paths.
//!
//! A [contour::Contour] is an open or closed sequence of line and arc segments. Offsetting
//! normalizes it (clockwise, colinear lines joined), splits it into edge and vertex elements, and
//! removes the locally invalid regions that appear around reflex vertices by searching for the
//! nearest pair of elements whose offsets can be intersected (pairwise interference detection).
//! The result is the ordered sequence of raw offset lines and arcs, see
//! [offset::OffsetEngine].
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod contour;
pub mod core;
pub mod error;
pub mod geometry;
pub mod offset;

pub use static_aabb2d_index::AABB;
