//! Contours of line and arc segments and their normalization.
mod normalize;
mod shape;

pub use shape::*;
