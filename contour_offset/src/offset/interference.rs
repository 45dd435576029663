use super::OffsetElement;
use crate::{
    core::traits::Real,
    geometry::{Segment, VertexGeo, VertexKind},
};

/// How a candidate trim partner interferes with the element on the other side of a reflex
/// vertex.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InterferenceRelation {
    /// The candidate's offset end point lies within the offset distance of the opposite element,
    /// its offset is entirely swallowed and the search must move past it.
    Full,
    /// Only part of the candidate's offset comes within the offset distance, it is a trim partner.
    Partial,
    /// The candidate's offset stays clear of the opposite element, the opposite index moves
    /// instead.
    Reverse,
}

/// Direction a candidate was reached in, walking away from the reflex vertex.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WalkDirection {
    /// Candidate follows the vertex, its end faces away from it.
    Forward,
    /// Candidate precedes the vertex, its start faces away from it.
    Backward,
}

/// Interference of `candidate` with `opposite` for the signed offset `s`.
///
/// Reflex vertices are always [InterferenceRelation::Full]. Otherwise the offset point at the
/// candidate's far end (end for [WalkDirection::Forward], start for [WalkDirection::Backward])
/// is tested against `opposite`, then the whole raw offset of the candidate.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::Vector2;
/// # use contour_offset::geometry::*;
/// # use contour_offset::offset::*;
/// let up = OffsetElement {
///     segment: LineGeo::new(Vector2::new(0.0, 0.0), Vector2::new(0.0, 4.0)).into(),
///     normals: Normals { start: Vector2::new(1.0, 0.0), end: Vector2::new(1.0, 0.0) },
/// };
/// let left = OffsetElement {
///     segment: LineGeo::new(Vector2::new(4.0, 0.0), Vector2::new(0.0, 0.0)).into(),
///     normals: Normals { start: Vector2::new(0.0, 1.0), end: Vector2::new(0.0, 1.0) },
/// };
/// let r = relation(&up, WalkDirection::Forward, &left, 1.0, 1e-9);
/// assert_eq!(r, InterferenceRelation::Partial);
/// let r = relation(&up, WalkDirection::Forward, &left, 5.0, 1e-9);
/// assert_eq!(r, InterferenceRelation::Full);
/// ```
pub fn relation<T>(
    candidate: &OffsetElement<T>,
    walk: WalkDirection,
    opposite: &OffsetElement<T>,
    s: T,
    eps: T,
) -> InterferenceRelation
where
    T: Real,
{
    if candidate.is_reflex() {
        return InterferenceRelation::Full;
    }

    let reach = s.abs() + eps;
    let far_point = match walk {
        WalkDirection::Forward => candidate.offset_end(s),
        WalkDirection::Backward => candidate.offset_start(s),
    };

    if opposite.segment.distance_to_point(far_point) <= reach {
        return InterferenceRelation::Full;
    }

    let raw = candidate.raw_offset(s, eps).unwrap_or_else(|| {
        Segment::Vertex(VertexGeo::new(far_point, VertexKind::Convex))
    });

    if opposite.segment.distance(&raw, eps) <= reach {
        InterferenceRelation::Partial
    } else {
        InterferenceRelation::Reverse
    }
}
