use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two circles.
#[derive(Debug, Copy, Clone)]
pub enum CircleCircleIntr<T>
where
    T: Real,
{
    /// No intersects found (includes concentric circles of different radius).
    NoIntersect,
    /// Circles touch at one point.
    TangentIntersect {
        /// Holds the tangent intersect point.
        point: Vector2<T>,
    },
    /// Circles cross at two points.
    TwoIntersects {
        /// Holds the first intersect point.
        point1: Vector2<T>,
        /// Holds the second intersect point.
        point2: Vector2<T>,
    },
    /// Circles are the same circle.
    Coincident,
}

/// Finds the intersects between two circles using the radical line of the pair.
///
/// The radical line is perpendicular to the center line at distance
/// `a = (r1^2 - r2^2 + d^2) / 2d` from `center1`, the intersects lie on it at `+/- h` where
/// `h = sqrt(r1^2 - a^2)`.
pub fn circle_circle_intr<T>(
    radius1: T,
    center1: Vector2<T>,
    radius2: T,
    center2: Vector2<T>,
    epsilon: T,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    use CircleCircleIntr::*;

    let cv = center2 - center1;
    let d2 = cv.length_squared();
    let d = d2.sqrt();

    if d.fuzzy_eq_zero_eps(epsilon) {
        if radius1.fuzzy_eq_eps(radius2, epsilon) {
            return Coincident;
        }
        return NoIntersect;
    }

    if d > radius1 + radius2 + epsilon || d < (radius1 - radius2).abs() - epsilon {
        return NoIntersect;
    }

    let rad1_sq = radius1 * radius1;
    let a = (rad1_sq - radius2 * radius2 + d2) / (T::two() * d);
    let radical_point = center1 + cv.scale(a / d);
    let h_sq = rad1_sq - a * a;

    if h_sq <= T::zero() {
        return TangentIntersect {
            point: radical_point,
        };
    }

    let h = h_sq.sqrt();
    if h.fuzzy_eq_zero_eps(epsilon) {
        return TangentIntersect {
            point: radical_point,
        };
    }

    // offset along the radical line (perpendicular to the center line)
    let offset = Vector2::new(-cv.y, cv.x).scale(h / d);
    TwoIntersects {
        point1: radical_point + offset,
        point2: radical_point - offset,
    }
}
