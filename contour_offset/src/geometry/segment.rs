use super::{ArcGeo, BoundingBox, IntersectMode, IntersectPoints, LineGeo};
use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a contour vertex relative to the side being offset.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Edges turn away from the offset side, their offsets leave a gap that is filled by an arc.
    Convex,
    /// Edges turn towards the offset side (the corner is concave seen from that side), their
    /// offsets overlap and form a locally invalid region that must be trimmed.
    Reflex,
}

/// Zero length element standing for a contour vertex.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexGeo<T = f64> {
    pub pos: Vector2<T>,
    pub kind: VertexKind,
}

impl<T> VertexGeo<T>
where
    T: Real,
{
    #[inline]
    pub fn new(pos: Vector2<T>, kind: VertexKind) -> Self {
        Self { pos, kind }
    }
}

/// One element of a contour: a line, an arc or (inside the offset engine) a vertex.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment<T = f64> {
    Line(LineGeo<T>),
    Arc(ArcGeo<T>),
    Vertex(VertexGeo<T>),
}

impl<T> From<LineGeo<T>> for Segment<T> {
    #[inline]
    fn from(value: LineGeo<T>) -> Self {
        Segment::Line(value)
    }
}

impl<T> From<ArcGeo<T>> for Segment<T> {
    #[inline]
    fn from(value: ArcGeo<T>) -> Self {
        Segment::Arc(value)
    }
}

impl<T> Segment<T>
where
    T: Real,
{
    #[inline]
    pub fn start(&self) -> Vector2<T> {
        match self {
            Segment::Line(l) => l.start(),
            Segment::Arc(a) => a.start(),
            Segment::Vertex(v) => v.pos,
        }
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        match self {
            Segment::Line(l) => l.end(),
            Segment::Arc(a) => a.end(),
            Segment::Vertex(v) => v.pos,
        }
    }

    #[inline]
    pub fn length(&self) -> T {
        match self {
            Segment::Line(l) => l.length(),
            Segment::Arc(a) => a.length(),
            Segment::Vertex(_) => T::zero(),
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<T> {
        match self {
            Segment::Line(l) => l.bounding_box(),
            Segment::Arc(a) => a.bounding_box(),
            Segment::Vertex(v) => BoundingBox::from_point(v.pos),
        }
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        match self {
            Segment::Line(l) => Segment::Line(l.reverse()),
            Segment::Arc(a) => Segment::Arc(a.reverse()),
            Segment::Vertex(v) => Segment::Vertex(*v),
        }
    }

    #[inline]
    pub fn is_vertex(&self) -> bool {
        matches!(self, Segment::Vertex(_))
    }

    /// Unit tangent in the direction of travel at the start, `None` for vertices and degenerate
    /// segments.
    #[inline]
    pub fn start_tangent(&self) -> Option<Vector2<T>> {
        match self {
            Segment::Line(l) => l.direction(),
            Segment::Arc(a) => a.tangent_at(a.start()),
            Segment::Vertex(_) => None,
        }
    }

    /// Unit tangent in the direction of travel at the end.
    #[inline]
    pub fn end_tangent(&self) -> Option<Vector2<T>> {
        match self {
            Segment::Line(l) => l.direction(),
            Segment::Arc(a) => a.tangent_at(a.end()),
            Segment::Vertex(_) => None,
        }
    }

    /// Unit normal on the right hand side of travel at the start.
    #[inline]
    pub fn start_normal(&self) -> Option<Vector2<T>> {
        match self {
            Segment::Line(l) => l.unit_normal(),
            Segment::Arc(a) => a.normal_at(a.start()),
            Segment::Vertex(_) => None,
        }
    }

    /// Unit normal on the right hand side of travel at the end.
    #[inline]
    pub fn end_normal(&self) -> Option<Vector2<T>> {
        match self {
            Segment::Line(l) => l.unit_normal(),
            Segment::Arc(a) => a.normal_at(a.end()),
            Segment::Vertex(_) => None,
        }
    }

    /// Signed curvature, positive for counter clockwise arcs and zero for lines and vertices.
    #[inline]
    pub fn curvature(&self) -> T {
        match self {
            Segment::Arc(a) if a.radius() > T::zero() => {
                if a.direction().is_ccw() {
                    a.radius().recip()
                } else {
                    -a.radius().recip()
                }
            }
            _ => T::zero(),
        }
    }

    #[inline]
    pub fn nearest_point_to_point(&self, point: Vector2<T>) -> Vector2<T> {
        match self {
            Segment::Line(l) => l.nearest_point_to_point(point),
            Segment::Arc(a) => a.nearest_point_to_point(point),
            Segment::Vertex(v) => v.pos,
        }
    }

    #[inline]
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        point.distance_to(self.nearest_point_to_point(point))
    }

    /// Returns true if `point` lies on this segment.
    #[inline]
    pub fn intersects_point(&self, point: Vector2<T>, eps: T) -> bool {
        match self {
            Segment::Line(l) => l.intersects_point(point, eps),
            Segment::Arc(a) => a.intersects_point(point, eps),
            Segment::Vertex(v) => v.pos.fuzzy_eq_eps(point, eps),
        }
    }

    /// Minimum distance between two segments, zero if they intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::Vector2;
    /// # use contour_offset::core::traits::*;
    /// # use contour_offset::geometry::*;
    /// let line = Segment::from(LineGeo::new(Vector2::new(-2.0, 3.0), Vector2::new(2.0, 3.0)));
    /// let arc = Segment::from(
    ///     ArcGeo::from_center_angles(
    ///         Vector2::new(0.0, 0.0),
    ///         0.0,
    ///         std::f64::consts::PI,
    ///         1.0,
    ///         ArcDirection::CounterClockwise,
    ///     )
    ///     .unwrap(),
    /// );
    /// assert!(line.distance(&arc, 1e-9).fuzzy_eq(2.0));
    /// assert!(arc.distance(&line, 1e-9).fuzzy_eq(2.0));
    /// ```
    pub fn distance(&self, other: &Self, eps: T) -> T {
        use Segment::*;
        match (self, other) {
            (Vertex(v), s) | (s, Vertex(v)) => s.distance_to_point(v.pos),
            (Line(a), Line(b)) => a.distance_to_line(b, eps),
            (Line(l), Arc(a)) | (Arc(a), Line(l)) => l.distance_to_arc(a, eps),
            (Arc(a), Arc(b)) => a.distance_to_arc(b, eps),
        }
    }

    /// Returns true if the segments cross or touch.
    pub fn intersects(&self, other: &Self, eps: T) -> bool {
        use Segment::*;
        match (self, other) {
            (Vertex(v), s) | (s, Vertex(v)) => s.intersects_point(v.pos, eps),
            (Line(a), Line(b)) => a.intersects_line(b, eps),
            (Line(l), Arc(a)) | (Arc(a), Line(l)) => l.intersects_arc(a, eps),
            (Arc(a), Arc(b)) => a.intersects_arc(b, eps),
        }
    }

    /// Intersect points between the segments, see [IntersectMode].
    pub fn find_intersects(&self, other: &Self, mode: IntersectMode, eps: T) -> IntersectPoints<T> {
        use Segment::*;
        match (self, other) {
            (Vertex(v), s) | (s, Vertex(v)) => {
                if s.intersects_point(v.pos, eps) {
                    IntersectPoints::One(v.pos)
                } else {
                    IntersectPoints::NoIntersect
                }
            }
            (Line(a), Line(b)) => a.find_intersects_line(b, mode, eps),
            (Line(l), Arc(a)) | (Arc(a), Line(l)) => l.find_intersects_arc(a, mode, eps),
            (Arc(a), Arc(b)) => a.find_intersects_arc(b, mode, eps),
        }
    }

    /// Point on this segment nearest to `other`.
    pub fn nearest_point(&self, other: &Self, eps: T) -> Vector2<T> {
        use Segment::*;
        match (self, other) {
            (Vertex(v), _) => v.pos,
            (s, Vertex(v)) => s.nearest_point_to_point(v.pos),
            (Line(a), Line(b)) => a.nearest_point_to_line(b, eps),
            (Line(l), Arc(a)) => l.nearest_point_to_arc(a, eps),
            (Arc(a), Line(l)) => a.nearest_point_to_line(l, eps),
            (Arc(a), Arc(b)) => a.nearest_point_to_arc(b, eps),
        }
    }
}
