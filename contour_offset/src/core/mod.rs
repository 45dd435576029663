//! Core module has the shared numeric traits and the low level math used by the geometry types.
pub mod math;
pub mod traits;
