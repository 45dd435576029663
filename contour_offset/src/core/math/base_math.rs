use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Wrap radians into `[0, 2PI)`, e.g. `-PI/4` becomes `7PI/4` and `2PI` becomes `0`.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// # use contour_offset::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(wrap_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(wrap_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// assert!(wrap_radians(2.0 * PI).fuzzy_eq(0.0));
/// assert!(wrap_radians(PI).fuzzy_eq(PI));
/// ```
#[inline]
pub fn wrap_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle < T::tau() {
        return angle;
    }

    let wrapped = angle - (angle / T::tau()).floor() * T::tau();
    // floor rounding can land exactly on 2PI for tiny negative inputs
    if wrapped >= T::tau() {
        T::zero()
    } else {
        wrapped
    }
}

/// Signed sweep going from `start_angle` to `end_angle` in the given rotational direction.
///
/// Counter clockwise sweeps are in `[0, 2PI)`, clockwise sweeps are in `(-2PI, 0]`.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// # use contour_offset::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(sweep_angle(0.0, 0.5 * PI, true).fuzzy_eq(0.5 * PI));
/// assert!(sweep_angle(0.0, 0.5 * PI, false).fuzzy_eq(-1.5 * PI));
/// assert!(sweep_angle(PI, -0.5 * PI, true).fuzzy_eq(0.5 * PI));
/// ```
#[inline]
pub fn sweep_angle<T>(start_angle: T, end_angle: T, counter_clockwise: bool) -> T
where
    T: Real,
{
    if counter_clockwise {
        wrap_radians(end_angle - start_angle)
    } else {
        -wrap_radians(start_angle - end_angle)
    }
}

/// Tests if `test_angle` is within the `sweep` starting at `start_angle`.
///
/// Positive `sweep` is counter clockwise, negative is clockwise. `epsilon` is an angular tolerance
/// applied at both ends of the sweep.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// use std::f64::consts::PI;
/// assert!(angle_is_within_sweep_eps(0.25 * PI, 0.0, 0.5 * PI, 1e-9));
/// assert!(angle_is_within_sweep_eps(-0.25 * PI, 0.0, -0.5 * PI, 1e-9));
/// assert!(!angle_is_within_sweep_eps(-0.25 * PI, 0.0, 0.5 * PI, 1e-9));
/// // end points are inclusive
/// assert!(angle_is_within_sweep_eps(0.5 * PI, 0.0, 0.5 * PI, 1e-9));
/// assert!(angle_is_within_sweep_eps(0.0, 0.0, 0.5 * PI, 1e-9));
/// ```
#[inline]
pub fn angle_is_within_sweep_eps<T>(test_angle: T, start_angle: T, sweep: T, epsilon: T) -> bool
where
    T: Real,
{
    if sweep.abs() >= T::tau() - epsilon {
        return true;
    }

    let counter_clockwise = sweep >= T::zero();
    let test_sweep = sweep_angle(start_angle, test_angle, counter_clockwise).abs();
    // a point just "before" the start wraps to almost a full turn
    test_sweep < sweep.abs() + epsilon || test_sweep > T::tau() - epsilon
}

/// Returns the solutions to the quadratic equation `a * t^2 + b * t + c = 0`.
///
/// `sqrt_discriminant` is `sqrt(b * b - 4 * a * c)`. The larger magnitude root is computed first
/// and the second is derived from the product of roots to avoid cancellation.
#[inline]
pub fn quadratic_solutions<T>(a: T, b: T, c: T, sqrt_discriminant: T) -> (T, T)
where
    T: Real,
{
    let denom = T::two() * a;
    let sol1 = if b < T::zero() {
        (-b + sqrt_discriminant) / denom
    } else {
        (-b - sqrt_discriminant) / denom
    };

    if sol1 == T::zero() {
        // b == 0 and c == 0, both roots are zero
        return (sol1, sol1);
    }

    let sol2 = (c / a) / sol1;
    min_max(sol1, sol2)
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Angle of the direction vector described by `p0` to `p1`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(p1.y - p0.y, p1.x - p0.x)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the circle with `radius`, `center`, and polar `angle` in radians given.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    Vector2::new(center.x + radius * c, center.y + radius * s)
}

/// Returns the point on the line going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Parametric value of the perpendicular projection of `point` onto the line through `p0` and
/// `p1`, not clamped. Returns zero for a degenerate line.
#[inline]
pub fn projected_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let v = p1 - p0;
    let len2 = v.length_squared();
    if len2 == T::zero() {
        return T::zero();
    }

    (point - p0).dot(v) / len2
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let t = projected_parametric(p0, p1, point);
    if t <= T::zero() {
        return p0;
    }

    if t >= T::one() {
        return p1;
    }

    point_from_parametric(p0, p1, t)
}

/// Returns true if `point` is strictly left of the direction vector `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Vector2::new(1.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    (p1 - p0).cross(point - p0) > T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::PI;

    #[test]
    fn wrap_radians_stays_half_open() {
        assert!(wrap_radians(-1e-20f64) < 2.0 * PI);
        assert!(wrap_radians(-2.0 * PI).fuzzy_eq(0.0));
        assert!(wrap_radians(7.0 * PI / 2.0).fuzzy_eq(3.0 * PI / 2.0));
    }

    #[test]
    fn quadratic_roots_ordered() {
        // (t - 1)(t - 3) = t^2 - 4t + 3
        let (t0, t1) = quadratic_solutions(1.0, -4.0, 3.0, (16.0f64 - 12.0).sqrt());
        assert!(t0.fuzzy_eq(1.0));
        assert!(t1.fuzzy_eq(3.0));
    }

    #[test]
    fn closest_point_clamps() {
        let p0 = Vector2::new(0.0, 0.0);
        let p1 = Vector2::new(2.0, 0.0);
        assert!(line_seg_closest_point(p0, p1, Vector2::new(-1.0, 1.0)).fuzzy_eq(p0));
        assert!(line_seg_closest_point(p0, p1, Vector2::new(3.0, 1.0)).fuzzy_eq(p1));
        assert!(
            line_seg_closest_point(p0, p1, Vector2::new(1.5, 1.0)).fuzzy_eq(Vector2::new(1.5, 0.0))
        );
    }

    #[test]
    fn within_sweep_wraps_near_start() {
        // just before the start of a counter clockwise sweep is accepted within epsilon
        assert!(angle_is_within_sweep_eps(-1e-12, 0.0, PI / 2.0, 1e-9));
        assert!(!angle_is_within_sweep_eps(-1e-3, 0.0, PI / 2.0, 1e-9));
        assert!(angle_is_within_sweep_eps(1.0, 3.0, 2.0 * PI, 1e-9));
    }
}
