//! Contour offsetting: classification into edge and vertex elements, pairwise interference
//! search and trimming of locally invalid regions.
mod element;
mod engine;
mod interference;
mod options;
mod self_intersect;

pub use element::*;
pub use engine::*;
pub use interference::*;
pub use options::*;
pub use self_intersect::*;
