//! Segment primitives (line, arc, bounding box) and their intersect, distance and nearest point
//! queries. [Segment] dispatches the pairwise queries on the variant pair.
mod arc;
mod bounding_box;
mod geo_types;
mod line;
mod segment;

pub use arc::{ArcBuilder, ArcGeo};
pub use bounding_box::BoundingBox;
pub use geo_types::{ArcDirection, IntersectMode, IntersectPoints, KeepSide};
pub use line::LineGeo;
pub use segment::{Segment, VertexGeo, VertexKind};
