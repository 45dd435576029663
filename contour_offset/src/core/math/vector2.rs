use crate::core::traits::Real;
use std::cmp::Ordering;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of the orientation test of three points, see [Vector2::ccw].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Points turn clockwise (right turn).
    Clockwise,
    /// Points are colinear within tolerance.
    Colinear,
    /// Points turn counter clockwise (left turn).
    CounterClockwise,
}

impl Orientation {
    /// Sign of the orientation: `-1`, `0` or `1`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Colinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }
}

/// 2D vector, also used as the point type for all geometry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Vector2::new(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the cross product of the two vectors lifted into 3D
    /// (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Self) -> T {
        (other - self).length()
    }

    /// Unit vector pointing in the same direction, `None` if the vector has zero length.
    #[inline]
    pub fn normalize(&self) -> Option<Self> {
        let l = self.length();
        if l == T::zero() {
            return None;
        }

        Some(self.scale(T::one() / l))
    }

    /// Unit vector pointing from `self` to `other`, `None` if the points are identical.
    #[inline]
    pub fn unit_vector_to(&self, other: Self) -> Option<Self> {
        (other - self).normalize()
    }

    /// Vector of signed length `length` normal to the direction `self -> other`.
    ///
    /// The normal is the unit direction rotated 90° clockwise (right hand side of travel), so a
    /// positive `length` points to the right of `self -> other`. Returns `None` if the points are
    /// identical.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::*;
    /// let n = Vector2::new(0.0, 0.0).normal_vector_to(Vector2::new(2.0, 0.0), 3.0).unwrap();
    /// assert!(n.fuzzy_eq(Vector2::new(0.0, -3.0)));
    /// ```
    #[inline]
    pub fn normal_vector_to(&self, other: Self, length: T) -> Option<Self> {
        let u = self.unit_vector_to(other)?;
        Some(Vector2::new(u.y * length, -u.x * length))
    }

    /// Right hand perpendicular of this vector (rotated 90° clockwise).
    #[inline]
    pub fn right_perp(&self) -> Self {
        Vector2::new(self.y, -self.x)
    }

    /// Left hand perpendicular of this vector (rotated 90° counter clockwise).
    #[inline]
    pub fn perp(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    /// Orientation of the turn `a -> b -> c` using the sign of twice the signed triangle area,
    /// values within `eps` of zero are colinear.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::*;
    /// let a = Vector2::new(0.0, 0.0);
    /// let b = Vector2::new(1.0, 0.0);
    /// assert_eq!(Vector2::ccw(a, b, Vector2::new(1.0, 1.0), 1e-9), Orientation::CounterClockwise);
    /// assert_eq!(Vector2::ccw(a, b, Vector2::new(1.0, -1.0), 1e-9), Orientation::Clockwise);
    /// assert_eq!(Vector2::ccw(a, b, b, 1e-9), Orientation::Colinear);
    /// ```
    #[inline]
    pub fn ccw(a: Self, b: Self, c: Self, eps: T) -> Orientation {
        let area2 = (b - a).cross(c - a);
        if area2 > eps {
            Orientation::CounterClockwise
        } else if area2 < -eps {
            Orientation::Clockwise
        } else {
            Orientation::Colinear
        }
    }

    /// Returns true if `self` lies in the axis aligned box spanned by `a` and `b` (inclusive,
    /// widened by `eps`). Combined with a colinear test this answers "is on segment".
    #[inline]
    pub fn between(&self, a: Self, b: Self, eps: T) -> bool {
        let (min_x, max_x) = super::min_max(a.x, b.x);
        let (min_y, max_y) = super::min_max(a.y, b.y);
        self.x.fuzzy_in_range_eps(min_x, max_x, eps) && self.y.fuzzy_in_range_eps(min_y, max_y, eps)
    }

    /// Point from `points` nearest to `self`, the first one wins ties. `None` if `points` is empty.
    pub fn nearest<I>(&self, points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut result: Option<(Self, T)> = None;
        for p in points {
            let d = super::dist_squared(*self, p);
            match result {
                Some((_, best)) if best <= d => {}
                _ => result = Some((p, d)),
            }
        }

        result.map(|(p, _)| p)
    }

    /// Polar angle of the direction `self -> other` in radians (-π, π].
    #[inline]
    pub fn angle_to(&self, other: Self) -> T {
        super::angle(*self, other)
    }

    /// Canonical ordering used to make merges independent of argument order: compare x, then y.
    /// Incomparable (NaN) components are treated as equal.
    #[inline]
    pub fn cmp_xy(&self, other: &Self) -> Ordering {
        match self.x.partial_cmp(&other.x) {
            Some(Ordering::Equal) | None => self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal),
            Some(ord) => ord,
        }
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Neg for &Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = Vector2::new(4.0, 5.0);
        let v2 = Vector2::new(1.0, 2.0);
        test_binary_op!(v1, v2, +, Vector2::new(5.0, 7.0));
        test_binary_op!(v1, v2, -, Vector2::new(3.0, 3.0));
        assert!((-v1).fuzzy_eq(Vector2::new(-4.0, -5.0)));
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)),
            (Vector2::new(-2.5, 1.0), Vector2::new(7.0, -3.25)),
            (Vector2::new(1e6, 1e-6), Vector2::new(1e6 + 0.1, 0.0)),
        ];
        for (p, q) in pairs {
            assert_eq!(p.distance_to(q), q.distance_to(p));
        }
        assert!(pairs[0].0.distance_to(pairs[0].1).fuzzy_eq(5.0));
        assert_eq!(pairs[1].0.distance_to(pairs[1].0), 0.0);
    }

    #[test]
    fn unit_vector_of_zero_length_is_none() {
        let p = Vector2::new(1.0, 1.0);
        assert!(p.unit_vector_to(p).is_none());
        assert!(p.normal_vector_to(p, 1.0).is_none());
    }

    #[test]
    fn ccw_degenerate_is_colinear() {
        let p = Vector2::new(0.5, -2.0);
        let q = Vector2::new(3.0, 7.0);
        assert_eq!(Vector2::ccw(p, q, q, 1e-9), Orientation::Colinear);
        assert_eq!(Vector2::ccw(p, p, q, 1e-9), Orientation::Colinear);
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let p = Vector2::new(0.0, 0.0);
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        let c = Vector2::new(5.0, 5.0);
        assert_eq!(p.nearest([c, a, b]), Some(a));
        assert_eq!(p.nearest(std::iter::empty()), None);
    }

    #[test]
    fn polar_angle() {
        let o = Vector2::new(1.0, 1.0);
        assert!(o.angle_to(Vector2::new(1.0, 3.0)).fuzzy_eq(std::f64::consts::FRAC_PI_2));
        assert!(o.angle_to(Vector2::new(0.0, 1.0)).fuzzy_eq(std::f64::consts::PI));
    }

    #[test]
    fn canonical_ordering() {
        let a = Vector2::new(1.0, 5.0);
        let b = Vector2::new(1.0, 2.0);
        let c = Vector2::new(0.0, 9.0);
        assert_eq!(a.cmp_xy(&b), Ordering::Greater);
        assert_eq!(c.cmp_xy(&b), Ordering::Less);
        assert_eq!(a.cmp_xy(&a), Ordering::Equal);
    }
}
