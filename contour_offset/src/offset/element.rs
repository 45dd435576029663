use super::OffsetSide;
use crate::{
    contour::Contour,
    core::{
        math::{Orientation, Vector2},
        traits::Real,
    },
    error::GeometryError,
    geometry::{ArcDirection, ArcGeo, KeepSide, LineGeo, Segment, VertexGeo, VertexKind},
};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit normals at the start and end of an element, on the right hand side of travel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Normals<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

/// Contour edge or vertex prepared for offsetting.
///
/// Edges carry the normals of their segment. Vertex elements carry the end normal of the edge
/// before them as their start normal and the start normal of the edge after them as their end
/// normal, so their raw offset is the arc connecting the offsets of the two edges.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OffsetElement<T = f64> {
    pub segment: Segment<T>,
    pub normals: Normals<T>,
}

impl<T> OffsetElement<T>
where
    T: Real,
{
    /// Returns true if this is a vertex whose adjacent edge offsets still overlap.
    #[inline]
    pub fn is_reflex(&self) -> bool {
        matches!(
            self.segment,
            Segment::Vertex(VertexGeo {
                kind: VertexKind::Reflex,
                ..
            })
        )
    }

    /// Start point moved by the signed offset `s` along the start normal.
    #[inline]
    pub fn offset_start(&self, s: T) -> Vector2<T> {
        self.segment.start() + self.normals.start.scale(s)
    }

    /// End point moved by the signed offset `s` along the end normal.
    #[inline]
    pub fn offset_end(&self, s: T) -> Vector2<T> {
        self.segment.end() + self.normals.end.scale(s)
    }

    /// Raw offset primitive for the signed offset `s`.
    ///
    /// Lines are translated, arcs become concentric arcs (or a line between the offset end points
    /// if the radius collapses) and vertices become the arc of radius `|s|` around the vertex
    /// between the two offset points. Returns `None` where the offset points coincide: for
    /// vertices that is a smooth joint, for a collapsed arc (e.g. a full circle offset through
    /// its center) the edge has no offset at all.
    pub fn raw_offset(&self, s: T, eps: T) -> Option<Segment<T>> {
        let start = self.offset_start(s);
        let end = self.offset_end(s);
        match &self.segment {
            Segment::Line(_) => Some(Segment::Line(LineGeo::new(start, end))),
            Segment::Arc(a) => {
                let radius = if a.direction().is_ccw() {
                    a.radius() + s
                } else {
                    a.radius() - s
                };
                match a.with_radius(radius) {
                    Some(arc) => Some(Segment::Arc(arc)),
                    None if start.fuzzy_eq_eps(end, eps) => None,
                    None => Some(Segment::Line(LineGeo::new(start, end))),
                }
            }
            Segment::Vertex(v) => {
                if start.fuzzy_eq_eps(end, eps) {
                    return None;
                }
                ArcGeo::from_points_center(start, end, v.pos, ArcDirection::from_sign(s))
                    .ok()
                    .map(Segment::Arc)
            }
        }
    }

    /// This element cut at `point`, keeping the `keep` side, for the signed offset `s`.
    ///
    /// Lines are cut at the perpendicular projection of `point` and keep their normals, arcs are
    /// cut at the radial projection and re-derive the normal at the cut. A vertex keeps its
    /// position, the normal on the cut side is turned towards `point` so its offset arc ends
    /// there, and it stops being reflex.
    pub fn trimmed(&self, point: Vector2<T>, keep: KeepSide, s: T) -> Self {
        let mut result = *self;
        match &self.segment {
            Segment::Line(l) => {
                result.segment = Segment::Line(l.trim(point, keep));
            }
            Segment::Arc(a) => {
                let arc = a.trim(point, keep);
                match keep {
                    KeepSide::Start => {
                        result.normals.end = arc.normal_at(arc.end()).unwrap_or(self.normals.end);
                    }
                    KeepSide::End => {
                        result.normals.start =
                            arc.normal_at(arc.start()).unwrap_or(self.normals.start);
                    }
                }
                result.segment = Segment::Arc(arc);
            }
            Segment::Vertex(v) => {
                let sign = if s < T::zero() { -T::one() } else { T::one() };
                if let Some(dir) = v.pos.unit_vector_to(point) {
                    let n = dir.scale(sign);
                    match keep {
                        KeepSide::Start => result.normals.end = n,
                        KeepSide::End => result.normals.start = n,
                    }
                }
                result.segment = Segment::Vertex(VertexGeo::new(v.pos, VertexKind::Convex));
            }
        }

        result
    }
}

/// Kind of vertex element needed at the joint from a segment ending with unit tangent `t1` into
/// one starting with unit tangent `t2`, `None` for tangent continuous joints.
///
/// `bend` is the sum of the signed curvatures of both segments at the joint. It only matters
/// where the path doubles back: both segments then leave `pos` in the same direction and the
/// wedge between them lies on the left of travel of the second segment if `bend` is negative,
/// on its right if positive.
fn vertex_kind_at<T>(
    pos: Vector2<T>,
    t1: Vector2<T>,
    t2: Vector2<T>,
    bend: T,
    side: OffsetSide,
    eps: T,
) -> Option<VertexKind>
where
    T: Real,
{
    let turn = Vector2::ccw(pos - t1, pos, pos + t2, eps);
    match (turn, side) {
        (Orientation::Colinear, _) => {
            if t1.dot(t2) > T::zero() {
                None
            } else if bend * side.sign() > eps {
                // cusp pointing into the offset side, the offsets overlap inside the wedge
                Some(VertexKind::Reflex)
            } else {
                Some(VertexKind::Convex)
            }
        }
        (Orientation::CounterClockwise, OffsetSide::Inward)
        | (Orientation::Clockwise, OffsetSide::Outward) => Some(VertexKind::Convex),
        (Orientation::Clockwise, OffsetSide::Inward)
        | (Orientation::CounterClockwise, OffsetSide::Outward) => Some(VertexKind::Reflex),
    }
}

fn edge_element<T>(segment: &Segment<T>, index: usize) -> Result<OffsetElement<T>, GeometryError>
where
    T: Real,
{
    match (segment.start_normal(), segment.end_normal()) {
        (Some(start), Some(end)) => Ok(OffsetElement {
            segment: *segment,
            normals: Normals { start, end },
        }),
        _ => Err(GeometryError::DegenerateSegment { index }),
    }
}

/// Vertex element at the joint between `prev` and `next`, `None` for smooth joints.
fn vertex_element<T>(
    prev: &OffsetElement<T>,
    next: &OffsetElement<T>,
    side: OffsetSide,
    eps: T,
) -> Option<OffsetElement<T>>
where
    T: Real,
{
    let t1 = prev.segment.end_tangent()?;
    let t2 = next.segment.start_tangent()?;
    let pos = next.segment.start();
    let bend = prev.segment.curvature() + next.segment.curvature();
    let kind = vertex_kind_at(pos, t1, t2, bend, side, eps)?;
    Some(OffsetElement {
        segment: Segment::Vertex(VertexGeo::new(pos, kind)),
        normals: Normals {
            start: prev.normals.end,
            end: next.normals.start,
        },
    })
}

/// Split a (normalized) contour into edge and vertex elements for offsetting towards `side`.
///
/// Closed contours give `[V0, E0, V1, E1, ...]` where `Vi` is the vertex at the start of edge
/// `Ei`, open contours give `[E0, V1, E1, ..., En-1]`. Vertices are only present where the
/// tangent direction changes.
///
/// # Errors
///
/// [GeometryError::DegenerateSegment] if a segment has no length.
///
/// # Examples
///
/// ```
/// # use contour_offset::contour_closed;
/// # use contour_offset::offset::*;
/// let mut square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// square.make_clockwise();
/// let inward = classify(&square, OffsetSide::Inward, 1e-9).unwrap();
/// assert_eq!(inward.len(), 8);
/// assert!(inward.iter().filter(|e| e.segment.is_vertex()).all(|e| e.is_reflex()));
/// let outward = classify(&square, OffsetSide::Outward, 1e-9).unwrap();
/// assert!(outward.iter().all(|e| !e.is_reflex()));
/// ```
pub fn classify<T>(
    contour: &Contour<T>,
    side: OffsetSide,
    eps: T,
) -> Result<Vec<OffsetElement<T>>, GeometryError>
where
    T: Real,
{
    let segments = contour.segments();
    let n = segments.len();

    let mut edges = Vec::with_capacity(n);
    for (i, s) in segments.iter().enumerate() {
        if s.is_vertex() || s.length().fuzzy_eq_zero_eps(eps) {
            return Err(GeometryError::DegenerateSegment { index: i });
        }
        edges.push(edge_element(s, i)?);
    }

    let mut result = Vec::with_capacity(2 * n);
    for i in 0..n {
        let prev = if i > 0 {
            Some(i - 1)
        } else if contour.is_closed() {
            Some(n - 1)
        } else {
            None
        };

        if let Some(p) = prev {
            if let Some(v) = vertex_element(&edges[p], &edges[i], side, eps) {
                result.push(v);
            }
        }
        result.push(edges[i]);
    }

    debug!(
        edges = n,
        elements = result.len(),
        reflex = result.iter().filter(|e| e.is_reflex()).count(),
        ?side,
        "classified contour"
    );

    Ok(result)
}
