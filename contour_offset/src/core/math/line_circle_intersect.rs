use super::{quadratic_solutions, Vector2};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between a line and a circle.
#[derive(Debug, Copy, Clone)]
pub enum LineCircleIntr<T>
where
    T: Real,
{
    /// No intersects found.
    NoIntersect,
    /// Line touches the circle at one point.
    TangentIntersect {
        /// Line parametric value of the touch point.
        t0: T,
    },
    /// Line crosses the circle.
    TwoIntersects {
        /// Smaller parametric value.
        t0: T,
        /// Larger parametric value.
        t1: T,
    },
}

/// Finds the intersects between the infinite line through `p0` and `p1` and a circle.
///
/// Substitutes `P(t) = p0 + t * (p1 - p0)` into `|P - center|^2 = radius^2` and solves the
/// resulting quadratic `a t^2 + b t + c = 0` with `a = |d|^2`, `b = 2 d.(p0 - center)` and
/// `c = |p0 - center|^2 - radius^2`. Values of `t` outside `[0, 1]` are on the extension of the
/// segment, the caller decides whether those count. The tangent case is decided on the distance
/// from the center to the line (within `epsilon`) so near tangent lines "snap" to one point.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let p0 = Vector2::new(-2.0, 0.0);
/// let p1 = Vector2::new(2.0, 0.0);
/// match line_circle_intr(p0, p1, 1.0, Vector2::new(0.0, 0.0), 1e-9) {
///     LineCircleIntr::TwoIntersects { t0, t1 } => {
///         assert_eq!(t0, 0.25);
///         assert_eq!(t1, 0.75);
///     }
///     r => unreachable!("unexpected result {:?}", r),
/// }
/// ```
pub fn line_circle_intr<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    radius: T,
    circle_center: Vector2<T>,
    epsilon: T,
) -> LineCircleIntr<T>
where
    T: Real,
{
    use LineCircleIntr::*;

    let d = p1 - p0;
    let f = p0 - circle_center;
    let a = d.length_squared();
    let length = a.sqrt();

    if length.fuzzy_eq_zero_eps(epsilon) {
        if f.length().fuzzy_eq_eps(radius, epsilon) {
            return TangentIntersect { t0: T::zero() };
        }
        return NoIntersect;
    }

    // perpendicular distance from the center to the carrier line
    let h = f.cross(d).abs() / length;
    if h > radius + epsilon {
        return NoIntersect;
    }

    let b = T::two() * f.dot(d);
    if h.fuzzy_eq_eps(radius, epsilon) {
        return TangentIntersect {
            t0: -b / (T::two() * a),
        };
    }

    let c = f.length_squared() - radius * radius;
    let discriminant = b * b - T::four() * a * c;
    // clamp tiny negative values caused by rounding
    let sqrt_discriminant = num_traits::real::Real::max(discriminant, T::zero()).sqrt();
    let (t0, t1) = quadratic_solutions(a, b, c, sqrt_discriminant);
    TwoIntersects { t0, t1 }
}
