use super::{ArcDirection, BoundingBox, IntersectMode, IntersectPoints, KeepSide, LineGeo};
use crate::{
    core::{
        math::{
            angle, angle_is_within_sweep_eps, circle_circle_intr, midpoint, point_on_circle,
            sweep_angle, CircleCircleIntr, Vector2,
        },
        traits::Real,
    },
    error::GeometryError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circular arc defined by center, radius and a signed sweep from a start angle.
///
/// Positive sweep is counter clockwise, a full circle has a sweep of `+/- 2PI` with coincident
/// start and end points. All derived values (angles, length, bounding box) are computed on
/// construction and can only be read.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcGeo<T = f64> {
    center: Vector2<T>,
    radius: T,
    start: Vector2<T>,
    end: Vector2<T>,
    start_angle: T,
    end_angle: T,
    sweep: T,
    length: T,
    bounding_box: BoundingBox<T>,
}

impl<T> ArcGeo<T>
where
    T: Real,
{
    /// All constructors funnel through here, `sweep` is taken as given.
    fn from_parts(
        center: Vector2<T>,
        radius: T,
        start: Vector2<T>,
        end: Vector2<T>,
        start_angle: T,
        sweep: T,
    ) -> Self {
        let end_angle = start_angle + sweep;
        let mut arc = Self {
            center,
            radius,
            start,
            end,
            start_angle,
            end_angle,
            sweep,
            length: radius * sweep.abs(),
            bounding_box: BoundingBox::new(start, end),
        };
        arc.bounding_box = arc.compute_bounding_box();
        arc
    }

    /// Arc from `start` to `end` around `center` going in `direction`.
    ///
    /// Radius is the distance from the center to `start`. Coincident start and end points give a
    /// full circle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::Vector2;
    /// # use contour_offset::core::traits::*;
    /// # use contour_offset::geometry::*;
    /// use std::f64::consts::PI;
    /// let arc = ArcGeo::from_points_center(
    ///     Vector2::new(1.0, 0.0),
    ///     Vector2::new(0.0, 1.0),
    ///     Vector2::new(0.0, 0.0),
    ///     ArcDirection::Clockwise,
    /// )
    /// .unwrap();
    /// assert!(arc.sweep().fuzzy_eq(-1.5 * PI));
    /// assert!(arc.length().fuzzy_eq(1.5 * PI));
    /// ```
    pub fn from_points_center(
        start: Vector2<T>,
        end: Vector2<T>,
        center: Vector2<T>,
        direction: ArcDirection,
    ) -> Result<Self, GeometryError> {
        let radius = start.distance_to(center);
        if radius.fuzzy_eq_zero() {
            return Err(GeometryError::MalformedArc {
                reason: "start point coincides with the center",
            });
        }

        let start_angle = angle(center, start);
        let sweep = if start.fuzzy_eq(end) {
            if direction.is_ccw() {
                T::tau()
            } else {
                -T::tau()
            }
        } else {
            sweep_angle(start_angle, angle(center, end), direction.is_ccw())
        };

        Ok(Self::from_parts(center, radius, start, end, start_angle, sweep))
    }

    /// Arc from `start` to `end` with the given `radius`.
    ///
    /// The center is placed on the perpendicular bisector of the chord on the side picked by
    /// `direction`, giving the minor arc between the points (a half circle when the radius equals
    /// half the chord).
    pub fn from_points_radius(
        start: Vector2<T>,
        end: Vector2<T>,
        radius: T,
        direction: ArcDirection,
    ) -> Result<Self, GeometryError> {
        if start.fuzzy_eq(end) {
            return Err(GeometryError::MalformedArc {
                reason: "coincident end points need a center",
            });
        }

        let half_chord = end.distance_to(start) / T::two();
        let eps = T::from(1e-4).unwrap();
        if radius < half_chord - eps {
            return Err(GeometryError::MalformedArc {
                reason: "radius is smaller than half the chord",
            });
        }

        let apothem = if (radius - half_chord).abs() < eps {
            T::zero()
        } else {
            (radius * radius - half_chord * half_chord).sqrt()
        };

        // left normal of the chord for counter clockwise, right normal for clockwise
        let Some(normal) = start.normal_vector_to(end, apothem) else {
            return Err(GeometryError::MalformedArc {
                reason: "coincident end points need a center",
            });
        };
        let center = match direction {
            ArcDirection::CounterClockwise => midpoint(start, end) - normal,
            ArcDirection::Clockwise => midpoint(start, end) + normal,
        };

        Self::from_points_center(start, end, center, direction)
    }

    /// Arc around `center` from `start_angle` to `end_angle` going in `direction`.
    pub fn from_center_angles(
        center: Vector2<T>,
        start_angle: T,
        end_angle: T,
        radius: T,
        direction: ArcDirection,
    ) -> Result<Self, GeometryError> {
        if !(radius > T::zero()) {
            return Err(GeometryError::MalformedArc {
                reason: "radius must be positive",
            });
        }

        let mut sweep = sweep_angle(start_angle, end_angle, direction.is_ccw());
        if sweep.fuzzy_eq_zero() {
            sweep = if direction.is_ccw() { T::tau() } else { -T::tau() };
        }

        let start = point_on_circle(radius, center, start_angle);
        let end = point_on_circle(radius, center, start_angle + sweep);
        Ok(Self::from_parts(center, radius, start, end, start_angle, sweep))
    }

    /// Full circle starting and ending at `start_angle`.
    pub fn full_circle(
        center: Vector2<T>,
        radius: T,
        start_angle: T,
        direction: ArcDirection,
    ) -> Result<Self, GeometryError> {
        Self::from_center_angles(center, start_angle, start_angle, radius, direction)
    }

    /// Concentric arc with the same angles and a radius of `radius`, `None` if the radius is not
    /// positive (the arc collapsed through its center).
    pub fn with_radius(&self, radius: T) -> Option<Self> {
        if radius < T::zero() || radius.fuzzy_eq_zero() {
            return None;
        }

        let start = point_on_circle(radius, self.center, self.start_angle);
        let end = if self.is_full_circle() {
            start
        } else {
            point_on_circle(radius, self.center, self.end_angle)
        };
        Some(Self::from_parts(self.center, radius, start, end, self.start_angle, self.sweep))
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        self.end
    }

    /// Polar angle of the start point as seen from the center, in `(-PI, PI]` unless the arc was
    /// built from angles.
    #[inline]
    pub fn start_angle(&self) -> T {
        self.start_angle
    }

    /// `start_angle + sweep`, not wrapped.
    #[inline]
    pub fn end_angle(&self) -> T {
        self.end_angle
    }

    /// Signed sweep angle, positive is counter clockwise.
    #[inline]
    pub fn sweep(&self) -> T {
        self.sweep
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<T> {
        self.bounding_box
    }

    #[inline]
    pub fn direction(&self) -> ArcDirection {
        ArcDirection::from_sign(self.sweep)
    }

    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.sweep.abs().fuzzy_eq(T::tau())
    }

    fn compute_bounding_box(&self) -> BoundingBox<T> {
        let mut bb = BoundingBox::new(self.start, self.end);
        // axis extremes at 0, PI/2, PI, 3PI/2 that the sweep passes through
        let mut axis_angle = T::zero();
        for _ in 0..4 {
            if angle_is_within_sweep_eps(axis_angle, self.start_angle, self.sweep, T::zero()) {
                bb = bb.include_point(point_on_circle(self.radius, self.center, axis_angle));
            }
            axis_angle = axis_angle + T::half_pi();
        }

        bb
    }

    /// Point on the circle at polar `angle`.
    #[inline]
    pub fn point_at_angle(&self, angle: T) -> Vector2<T> {
        point_on_circle(self.radius, self.center, angle)
    }

    /// Point halfway along the sweep.
    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        self.point_at_angle(self.start_angle + self.sweep / T::two())
    }

    /// Angle going from the start to the polar angle of `point`, resolved in the arc's direction.
    ///
    /// Result is in `[0, 2PI)` for counter clockwise arcs and `(-2PI, 0]` for clockwise arcs.
    #[inline]
    pub fn sweep_to(&self, point: Vector2<T>) -> T {
        sweep_angle(self.start_angle, angle(self.center, point), self.direction().is_ccw())
    }

    /// [ArcGeo::sweep_to] as a fraction of the sweep, in `[0, 1]` for points within the arc.
    #[inline]
    pub fn angle_fraction(&self, point: Vector2<T>) -> T {
        self.sweep_to(point) / self.sweep
    }

    /// Returns true if the polar angle of `point` lies within the arc's sweep, that is its
    /// [ArcGeo::angle_fraction] is in `[0, 1]`.
    ///
    /// `eps` is a distance tolerance at the arc's radius. Points slightly before the start wrap
    /// around to almost a full turn and are still accepted.
    pub fn point_angle_within_arc(&self, point: Vector2<T>, eps: T) -> bool {
        if point.fuzzy_eq_eps(self.center, eps) {
            return false;
        }

        let angle_eps = eps / self.radius;
        let sweep = self.sweep.abs();
        if sweep >= T::tau() - angle_eps {
            return true;
        }
        if sweep <= angle_eps {
            let test_angle = angle(self.center, point);
            return angle_is_within_sweep_eps(test_angle, self.start_angle, self.sweep, angle_eps);
        }

        let fraction = self.angle_fraction(point);
        fraction.fuzzy_in_range_eps(T::zero(), T::one(), angle_eps / sweep)
            || fraction > (T::tau() - angle_eps) / sweep
    }

    /// Unit radial vector from the center towards `point`.
    #[inline]
    fn radial(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        self.center.unit_vector_to(point)
    }

    /// Unit tangent in the direction of travel at `point` (assumed on the circle).
    #[inline]
    pub fn tangent_at(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        let r = self.radial(point)?;
        Some(if self.direction().is_ccw() {
            r.perp()
        } else {
            r.right_perp()
        })
    }

    /// Unit normal on the right hand side of travel at `point`. Points away from the center for
    /// counter clockwise arcs and towards the center for clockwise arcs.
    #[inline]
    pub fn normal_at(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        let r = self.radial(point)?;
        Some(if self.direction().is_ccw() { r } else { -r })
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        Self::from_parts(
            self.center,
            self.radius,
            self.end,
            self.start,
            self.end_angle,
            -self.sweep,
        )
    }

    /// Radial projection of `point` onto the circle (start point if `point` is the center).
    #[inline]
    fn project(&self, point: Vector2<T>) -> Vector2<T> {
        match self.radial(point) {
            Some(r) => self.center + r.scale(self.radius),
            None => self.start,
        }
    }

    /// Sweep from the start to `point`, clamped into the arc's sweep.
    fn clamped_sweep_to(&self, point: Vector2<T>) -> T {
        let s = self.sweep_to(point);
        if s.abs() <= self.sweep.abs() {
            return s;
        }

        // outside the arc, snap to whichever end is angularly nearer
        let past_end = s.abs() - self.sweep.abs();
        let before_start = T::tau() - s.abs();
        if before_start < past_end {
            T::zero()
        } else {
            self.sweep
        }
    }

    fn sub_arc(&self, from_sweep: T, to_sweep: T, start: Vector2<T>, end: Vector2<T>) -> Self {
        Self::from_parts(
            self.center,
            self.radius,
            start,
            end,
            self.start_angle + from_sweep,
            to_sweep - from_sweep,
        )
    }

    /// Split at the radial projection of `point`. The sweeps of the two parts sum to the sweep of
    /// this arc.
    pub fn split_at(&self, point: Vector2<T>) -> (Self, Self) {
        let p = self.project(point);
        let s = self.clamped_sweep_to(p);
        (
            self.sub_arc(T::zero(), s, self.start, p),
            self.sub_arc(s, self.sweep, p, self.end),
        )
    }

    /// Trim at the radial projection of `point`, keeping the `keep` side.
    pub fn trim(&self, point: Vector2<T>, keep: KeepSide) -> Self {
        let p = self.project(point);
        let s = self.clamped_sweep_to(p);
        match keep {
            KeepSide::Start => self.sub_arc(T::zero(), s, self.start, p),
            KeepSide::End => self.sub_arc(s, self.sweep, p, self.end),
        }
    }

    /// Closest point on the arc to `point`.
    pub fn nearest_point_to_point(&self, point: Vector2<T>) -> Vector2<T> {
        if self.point_angle_within_arc(point, T::zero()) {
            return self.project(point);
        }

        if point.distance_to(self.start) <= point.distance_to(self.end) {
            self.start
        } else {
            self.end
        }
    }

    #[inline]
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        point.distance_to(self.nearest_point_to_point(point))
    }

    /// Returns true if `point` lies on the arc.
    #[inline]
    pub fn intersects_point(&self, point: Vector2<T>, eps: T) -> bool {
        point.distance_to(self.center).fuzzy_eq_eps(self.radius, eps)
            && self.point_angle_within_arc(point, eps)
    }

    #[inline]
    pub fn intersects_line(&self, line: &LineGeo<T>, eps: T) -> bool {
        line.intersects_arc(self, eps)
    }

    pub fn intersects_arc(&self, other: &Self, eps: T) -> bool {
        if !self.bounding_box.has_intersection(&other.bounding_box, eps) {
            return false;
        }
        !self.find_intersects_arc(other, IntersectMode::Clamped, eps).is_empty()
    }

    #[inline]
    pub fn find_intersects_line(
        &self,
        line: &LineGeo<T>,
        mode: IntersectMode,
        eps: T,
    ) -> IntersectPoints<T> {
        line.find_intersects_arc(self, mode, eps)
    }

    /// Intersect points with another arc.
    ///
    /// Arcs on the same circle report this arc's own end points, whatever their overlap. Callers
    /// that care about coincident arcs must check for it first.
    pub fn find_intersects_arc(
        &self,
        other: &Self,
        mode: IntersectMode,
        eps: T,
    ) -> IntersectPoints<T> {
        let within_both = |p: &Vector2<T>| match mode {
            IntersectMode::Ray => true,
            IntersectMode::Clamped => {
                self.point_angle_within_arc(*p, eps) && other.point_angle_within_arc(*p, eps)
            }
        };

        match circle_circle_intr(self.radius, self.center, other.radius, other.center, eps) {
            CircleCircleIntr::NoIntersect => IntersectPoints::NoIntersect,
            CircleCircleIntr::Coincident => {
                IntersectPoints::from_candidates([self.start, self.end], eps)
            }
            CircleCircleIntr::TangentIntersect { point } => {
                IntersectPoints::from_candidates(Some(point).into_iter().filter(within_both), eps)
            }
            CircleCircleIntr::TwoIntersects { point1, point2 } => {
                let points = [point1, point2].into_iter().filter(within_both);
                IntersectPoints::from_candidates(points, eps)
            }
        }
    }

    #[inline]
    pub fn distance_to_line(&self, line: &LineGeo<T>, eps: T) -> T {
        line.distance_to_arc(self, eps)
    }

    /// Minimum distance between the arcs, zero if they intersect.
    pub fn distance_to_arc(&self, other: &Self, eps: T) -> T {
        let (a, b) = self.closest_pair_with_arc(other, eps);
        a.distance_to(b)
    }

    #[inline]
    pub fn nearest_point_to_line(&self, line: &LineGeo<T>, eps: T) -> Vector2<T> {
        line.closest_pair_with_arc(self, eps).1
    }

    #[inline]
    pub fn nearest_point_to_arc(&self, other: &Self, eps: T) -> Vector2<T> {
        self.closest_pair_with_arc(other, eps).0
    }

    /// Closest pair of points `(on self, on other)`.
    ///
    /// Candidates are the intersects, every end point against the other arc, and the points where
    /// the line through both centers meets each circle (interior critical points of the distance
    /// between two circles).
    fn closest_pair_with_arc(&self, other: &Self, eps: T) -> (Vector2<T>, Vector2<T>) {
        if let Some(p) = self
            .find_intersects_arc(other, IntersectMode::Clamped, eps)
            .points()
            .next()
        {
            if self.intersects_point(p, eps) && other.intersects_point(p, eps) {
                return (p, p);
            }
        }

        let mut best = (self.start, other.nearest_point_to_point(self.start));
        let mut best_dist = best.0.distance_to(best.1);
        let mut consider = |a: Vector2<T>, b: Vector2<T>| {
            let d = a.distance_to(b);
            if d < best_dist {
                best = (a, b);
                best_dist = d;
            }
        };

        consider(self.end, other.nearest_point_to_point(self.end));
        for b in [other.start, other.end] {
            consider(self.nearest_point_to_point(b), b);
        }

        if let Some(u) = self.center.unit_vector_to(other.center) {
            for s1 in [T::one(), -T::one()] {
                let a = self.center + u.scale(s1 * self.radius);
                if !self.point_angle_within_arc(a, eps) {
                    continue;
                }
                for s2 in [T::one(), -T::one()] {
                    let b = other.center + u.scale(s2 * other.radius);
                    if other.point_angle_within_arc(b, eps) {
                        consider(a, b);
                    }
                }
            }
        }

        best
    }
}

/// Arc construction from any subset of parameters.
///
/// Accepted parameter sets, tried in order:
/// 1. center with start and end points,
/// 2. center with start and end angles and radius,
/// 3. start and end points with radius,
/// 4. start point with radius and start and end angles (center derived from the start point).
///
/// Anything else fails with [GeometryError::MalformedArc].
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::Vector2;
/// # use contour_offset::geometry::*;
/// let arc = ArcBuilder::new()
///     .center(Vector2::new(0.0, 0.0))
///     .radius(2.0)
///     .angles(0.0, std::f64::consts::PI)
///     .build()
///     .unwrap();
/// assert!(arc.end().fuzzy_eq(Vector2::new(-2.0, 0.0)));
///
/// assert!(ArcBuilder::<f64>::new().start(Vector2::new(1.0, 0.0)).build().is_err());
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct ArcBuilder<T = f64> {
    start: Option<Vector2<T>>,
    end: Option<Vector2<T>>,
    center: Option<Vector2<T>>,
    radius: Option<T>,
    angles: Option<(T, T)>,
    direction: Option<ArcDirection>,
}

impl<T> ArcBuilder<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            center: None,
            radius: None,
            angles: None,
            direction: None,
        }
    }

    #[inline]
    pub fn start(mut self, start: Vector2<T>) -> Self {
        self.start = Some(start);
        self
    }

    #[inline]
    pub fn end(mut self, end: Vector2<T>) -> Self {
        self.end = Some(end);
        self
    }

    #[inline]
    pub fn center(mut self, center: Vector2<T>) -> Self {
        self.center = Some(center);
        self
    }

    #[inline]
    pub fn radius(mut self, radius: T) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Start and end polar angles in radians.
    #[inline]
    pub fn angles(mut self, start_angle: T, end_angle: T) -> Self {
        self.angles = Some((start_angle, end_angle));
        self
    }

    /// Defaults to counter clockwise.
    #[inline]
    pub fn direction(mut self, direction: ArcDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn build(self) -> Result<ArcGeo<T>, GeometryError> {
        let direction = self.direction.unwrap_or(ArcDirection::CounterClockwise);
        match (self.start, self.end, self.center, self.radius, self.angles) {
            (Some(start), Some(end), Some(center), _, _) => {
                ArcGeo::from_points_center(start, end, center, direction)
            }
            (_, _, Some(center), Some(radius), Some((sa, ea))) => {
                ArcGeo::from_center_angles(center, sa, ea, radius, direction)
            }
            (Some(start), Some(end), None, Some(radius), _) => {
                ArcGeo::from_points_radius(start, end, radius, direction)
            }
            (Some(start), None, None, Some(radius), Some((sa, ea))) => {
                let center = start - Vector2::new(sa.cos(), sa.sin()).scale(radius);
                ArcGeo::from_center_angles(center, sa, ea, radius, direction)
            }
            _ => Err(GeometryError::MalformedArc {
                reason: "parameters do not determine an arc",
            }),
        }
    }
}
