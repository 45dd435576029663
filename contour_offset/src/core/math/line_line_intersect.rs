use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// Lines are parallel and not on the same carrier line, or a segment is degenerate.
    NoIntersect,
    /// Lines lie on the same carrier line (they may or may not overlap).
    Colinear,
    /// Segments cross each other within their extents.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Carrier lines cross but one or both segments must be extended to reach the point.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

/// Finds the intersect between the line segments `v1->v2` and `u1->u2`.
///
/// Parametric values are for the equation `P(t) = p0 + t * (p1 - p0)` of each segment. Parallel
/// detection uses the sine of the angle between the segments so it is scale independent, and the
/// in-segment check is done on length scaled parametric values so `epsilon` is a distance.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let v1 = Vector2::new(0.0, 0.0);
/// let v2 = Vector2::new(1.0, 0.0);
/// let u1 = Vector2::new(0.5, -1.0);
/// let u2 = Vector2::new(0.5, 1.0);
/// if let LineLineIntr::TrueIntersect { seg1_t, seg2_t } = line_line_intr(v1, v2, u1, u2, 1e-9) {
///     assert_eq!(seg1_t, 0.5);
///     assert_eq!(seg2_t, 0.5);
/// } else {
///     unreachable!("expected true intersect");
/// }
/// ```
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    use LineLineIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let seg1_length = v.length();
    let seg2_length = u.length();
    if seg1_length.fuzzy_eq_zero_eps(epsilon) || seg2_length.fuzzy_eq_zero_eps(epsilon) {
        return NoIntersect;
    }

    let w = u1 - v1;
    let denom = v.cross(u);
    if (denom / (seg1_length * seg2_length)).fuzzy_eq_zero_eps(epsilon) {
        // parallel, colinear when u1 lies on the carrier line of v
        if (w.cross(v) / seg1_length).fuzzy_eq_zero_eps(epsilon) {
            return Colinear;
        }
        return NoIntersect;
    }

    let seg1_t = w.cross(u) / denom;
    let seg2_t = w.cross(v) / denom;
    if (seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, epsilon)
        && (seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, epsilon)
    {
        return TrueIntersect { seg1_t, seg2_t };
    }

    FalseIntersect { seg1_t, seg2_t }
}
