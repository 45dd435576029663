use super::{ArcGeo, BoundingBox, IntersectMode, IntersectPoints, KeepSide};
use crate::core::{
    math::{
        line_circle_intr, line_line_intr, line_seg_closest_point, point_from_parametric,
        projected_parametric, LineCircleIntr, LineLineIntr, Orientation, Vector2,
    },
    traits::Real,
};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight line segment from `start` to `end`.
///
/// Length and bounding box are derived once at construction. A degenerate line (start equal to
/// end) is allowed, it never intersects anything and has no direction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineGeo<T = f64> {
    start: Vector2<T>,
    end: Vector2<T>,
    length: T,
    bounding_box: BoundingBox<T>,
}

impl<T> LineGeo<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self {
            start,
            end,
            length: end.distance_to(start),
            bounding_box: BoundingBox::new(start, end),
        }
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        self.end
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<T> {
        self.bounding_box
    }

    /// Returns true if the line is shorter than `eps`.
    #[inline]
    pub fn is_degenerate(&self, eps: T) -> bool {
        self.length.fuzzy_eq_zero_eps(eps)
    }

    /// Unit direction of travel, `None` for a degenerate line.
    #[inline]
    pub fn direction(&self) -> Option<Vector2<T>> {
        self.start.unit_vector_to(self.end)
    }

    /// Unit normal on the right hand side of travel, `None` for a degenerate line.
    #[inline]
    pub fn unit_normal(&self) -> Option<Vector2<T>> {
        self.start.normal_vector_to(self.end, T::one())
    }

    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        point_from_parametric(self.start, self.end, t)
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Orientation of `point` relative to the direction of this line, tolerance is a distance.
    #[inline]
    pub fn orientation_of(&self, point: Vector2<T>, eps: T) -> Orientation {
        Vector2::ccw(self.start, self.end, point, eps * self.length)
    }

    /// Returns true if `point` lies on the carrier line (within `eps` distance).
    #[inline]
    pub fn colinear_with_point(&self, point: Vector2<T>, eps: T) -> bool {
        self.orientation_of(point, eps) == Orientation::Colinear
    }

    /// Returns true if both lines lie on the same carrier line.
    #[inline]
    pub fn colinear(&self, other: &Self, eps: T) -> bool {
        self.colinear_with_point(other.start, eps) && self.colinear_with_point(other.end, eps)
    }

    /// Returns true if the lines are colinear and share more than a single point.
    pub fn colinear_overlapping(&self, other: &Self, eps: T) -> bool {
        if !self.colinear(other, eps) {
            return false;
        }

        // project onto this line's direction, the overlap must have positive length
        let Some(dir) = self.direction() else {
            return false;
        };
        let (a0, a1) = (T::zero(), self.length);
        let b0 = (other.start - self.start).dot(dir);
        let b1 = (other.end - self.start).dot(dir);
        let (b_min, b_max) = crate::core::math::min_max(b0, b1);
        let lo = num_traits::real::Real::max(a0, b_min);
        let hi = num_traits::real::Real::min(a1, b_max);
        hi - lo > eps
    }

    /// Returns true if the lines are colinear and touch at an end point.
    pub fn colinear_connected(&self, other: &Self, eps: T) -> bool {
        if !self.colinear(other, eps) {
            return false;
        }

        self.start.fuzzy_eq_eps(other.start, eps)
            || self.start.fuzzy_eq_eps(other.end, eps)
            || self.end.fuzzy_eq_eps(other.start, eps)
            || self.end.fuzzy_eq_eps(other.end, eps)
    }

    /// Merge two colinear lines that touch or overlap into one line spanning the extreme points.
    ///
    /// Extreme points are picked with the canonical (x, then y) ordering so the merged extent does
    /// not depend on argument order, the merged line runs in the direction of `self`. Returns
    /// `None` if the lines can not be merged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::Vector2;
    /// # use contour_offset::geometry::LineGeo;
    /// let a = LineGeo::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0));
    /// let b = LineGeo::new(Vector2::new(2.0, 0.0), Vector2::new(5.0, 0.0));
    /// let joined = a.join_colinear_line(&b, 1e-9).unwrap();
    /// assert_eq!(joined.start(), Vector2::new(0.0, 0.0));
    /// assert_eq!(joined.end(), Vector2::new(5.0, 0.0));
    /// ```
    pub fn join_colinear_line(&self, other: &Self, eps: T) -> Option<Self> {
        if !self.colinear_connected(other, eps) && !self.colinear_overlapping(other, eps) {
            return None;
        }

        let points = [self.start, self.end, other.start, other.end];
        let mut min_pt = points[0];
        let mut max_pt = points[0];
        for p in &points[1..] {
            if p.cmp_xy(&min_pt) == Ordering::Less {
                min_pt = *p;
            }
            if p.cmp_xy(&max_pt) == Ordering::Greater {
                max_pt = *p;
            }
        }

        if self.start.cmp_xy(&self.end) == Ordering::Greater {
            Some(Self::new(max_pt, min_pt))
        } else {
            Some(Self::new(min_pt, max_pt))
        }
    }

    /// Foot of the perpendicular from `point` onto the carrier line (not clamped to the segment).
    #[inline]
    pub fn perpendicular_foot(&self, point: Vector2<T>) -> Vector2<T> {
        self.point_at(projected_parametric(self.start, self.end, point))
    }

    /// Closest point on the segment to `point`.
    #[inline]
    pub fn nearest_point_to_point(&self, point: Vector2<T>) -> Vector2<T> {
        line_seg_closest_point(self.start, self.end, point)
    }

    #[inline]
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        point.distance_to(self.nearest_point_to_point(point))
    }

    /// Returns true if `point` lies on the segment.
    #[inline]
    pub fn intersects_point(&self, point: Vector2<T>, eps: T) -> bool {
        if self.is_degenerate(eps) {
            return self.start.fuzzy_eq_eps(point, eps);
        }
        self.colinear_with_point(point, eps) && point.between(self.start, self.end, eps)
    }

    /// Returns true if the segments cross or touch.
    ///
    /// Each segment's end points must lie on different sides of (or on) the other segment. Two
    /// colinear overlapping segments are not considered intersecting.
    pub fn intersects_line(&self, other: &Self, eps: T) -> bool {
        if !self.bounding_box.has_intersection(&other.bounding_box, eps) {
            return false;
        }
        if self.is_degenerate(eps) || other.is_degenerate(eps) {
            return false;
        }

        let a_side = other.orientation_of(self.start, eps);
        let b_side = other.orientation_of(self.end, eps);
        let c_side = self.orientation_of(other.start, eps);
        let d_side = self.orientation_of(other.end, eps);
        a_side != b_side && c_side != d_side
    }

    /// Returns true if the segment crosses or touches the arc.
    #[inline]
    pub fn intersects_arc(&self, arc: &ArcGeo<T>, eps: T) -> bool {
        if !self.bounding_box.has_intersection(&arc.bounding_box(), eps) {
            return false;
        }
        !self.find_intersects_arc(arc, IntersectMode::Clamped, eps).is_empty()
    }

    /// Intersect point with another line. Colinear lines report no intersect.
    pub fn find_intersects_line(
        &self,
        other: &Self,
        mode: IntersectMode,
        eps: T,
    ) -> IntersectPoints<T> {
        match line_line_intr(self.start, self.end, other.start, other.end, eps) {
            LineLineIntr::TrueIntersect { seg1_t, .. } => {
                IntersectPoints::One(self.point_at(seg1_t))
            }
            LineLineIntr::FalseIntersect { seg1_t, .. } if mode == IntersectMode::Ray => {
                IntersectPoints::One(self.point_at(seg1_t))
            }
            _ => IntersectPoints::NoIntersect,
        }
    }

    /// Intersect points with an arc.
    ///
    /// In [IntersectMode::Clamped] points must lie within the segment and within the arc's sweep,
    /// in [IntersectMode::Ray] the carrier line is intersected with the full circle.
    pub fn find_intersects_arc(
        &self,
        arc: &ArcGeo<T>,
        mode: IntersectMode,
        eps: T,
    ) -> IntersectPoints<T> {
        let ts = match line_circle_intr(self.start, self.end, arc.radius(), arc.center(), eps) {
            LineCircleIntr::NoIntersect => return IntersectPoints::NoIntersect,
            LineCircleIntr::TangentIntersect { t0 } => [Some(t0), None],
            LineCircleIntr::TwoIntersects { t0, t1 } => [Some(t0), Some(t1)],
        };

        let candidates = ts.into_iter().flatten().filter_map(|t| {
            let p = self.point_at(t);
            match mode {
                IntersectMode::Ray => Some(p),
                IntersectMode::Clamped => {
                    let on_line = (t * self.length).fuzzy_in_range_eps(T::zero(), self.length, eps);
                    (on_line && arc.point_angle_within_arc(p, eps)).then_some(p)
                }
            }
        });

        IntersectPoints::from_candidates(candidates, eps)
    }

    /// Minimum distance between the segments, zero if they intersect.
    pub fn distance_to_line(&self, other: &Self, eps: T) -> T {
        if self.intersects_line(other, eps) {
            return T::zero();
        }

        let d1 = num_traits::real::Real::min(
            self.distance_to_point(other.start),
            self.distance_to_point(other.end),
        );
        let d2 = num_traits::real::Real::min(
            other.distance_to_point(self.start),
            other.distance_to_point(self.end),
        );
        num_traits::real::Real::min(d1, d2)
    }

    /// Minimum distance between the segment and an arc, zero if they intersect.
    pub fn distance_to_arc(&self, arc: &ArcGeo<T>, eps: T) -> T {
        let (line_pt, arc_pt) = self.closest_pair_with_arc(arc, eps);
        line_pt.distance_to(arc_pt)
    }

    /// Point on this segment nearest to the other segment.
    pub fn nearest_point_to_line(&self, other: &Self, eps: T) -> Vector2<T> {
        if let Some(p) = self
            .find_intersects_line(other, IntersectMode::Clamped, eps)
            .points()
            .next()
        {
            return p;
        }

        let mut best = (self.start, other.distance_to_point(self.start));
        let mut consider = |p: Vector2<T>, d: T| {
            if d < best.1 {
                best = (p, d);
            }
        };
        consider(self.end, other.distance_to_point(self.end));
        for q in [other.start, other.end] {
            let p = self.nearest_point_to_point(q);
            consider(p, q.distance_to(p));
        }

        best.0
    }

    /// Point on this segment nearest to the arc.
    #[inline]
    pub fn nearest_point_to_arc(&self, arc: &ArcGeo<T>, eps: T) -> Vector2<T> {
        self.closest_pair_with_arc(arc, eps).0
    }

    /// Closest pair of points `(on self, on arc)`.
    ///
    /// Candidates are the intersects, every end point against the other primitive, and the two
    /// points of the arc's circle on the normal of the line through the center (the only interior
    /// critical points of the distance between a line and a circle).
    pub(crate) fn closest_pair_with_arc(
        &self,
        arc: &ArcGeo<T>,
        eps: T,
    ) -> (Vector2<T>, Vector2<T>) {
        if let Some(p) = self
            .find_intersects_arc(arc, IntersectMode::Clamped, eps)
            .points()
            .next()
        {
            return (p, p);
        }

        let mut best = (self.start, arc.nearest_point_to_point(self.start));
        let mut best_dist = best.0.distance_to(best.1);
        let mut consider = |line_pt: Vector2<T>, arc_pt: Vector2<T>| {
            let d = line_pt.distance_to(arc_pt);
            if d < best_dist {
                best = (line_pt, arc_pt);
                best_dist = d;
            }
        };

        consider(self.end, arc.nearest_point_to_point(self.end));
        for arc_pt in [arc.start(), arc.end()] {
            consider(self.nearest_point_to_point(arc_pt), arc_pt);
        }

        if let Some(n) = self.unit_normal() {
            for sign in [T::one(), -T::one()] {
                let arc_pt = arc.center() + n.scale(sign * arc.radius());
                if !arc.point_angle_within_arc(arc_pt, eps) {
                    continue;
                }
                let t = projected_parametric(self.start, self.end, arc_pt);
                if t >= T::zero() && t <= T::one() {
                    consider(self.point_at(t), arc_pt);
                }
            }
        }

        best
    }

    /// Split at the perpendicular projection of `point`.
    #[inline]
    pub fn split_at(&self, point: Vector2<T>) -> (Self, Self) {
        let p = self.perpendicular_foot(point);
        (Self::new(self.start, p), Self::new(p, self.end))
    }

    /// Trim at the perpendicular projection of `point`, keeping the `keep` side.
    #[inline]
    pub fn trim(&self, point: Vector2<T>, keep: KeepSide) -> Self {
        let p = self.perpendicular_foot(point);
        match keep {
            KeepSide::Start => Self::new(self.start, p),
            KeepSide::End => Self::new(p, self.end),
        }
    }
}
