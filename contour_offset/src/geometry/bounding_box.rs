use crate::core::{
    math::{min_max, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box, used as a conservative fast reject before exact tests.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox<T = f64> {
    /// Minimum corner.
    pub min: Vector2<T>,
    /// Maximum corner.
    pub max: Vector2<T>,
}

impl<T> BoundingBox<T>
where
    T: Real,
{
    /// Box spanned by two corner points in any order.
    #[inline]
    pub fn new(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        let (min_x, max_x) = min_max(p1.x, p2.x);
        let (min_y, max_y) = min_max(p1.y, p2.y);
        Self {
            min: Vector2::new(min_x, min_y),
            max: Vector2::new(max_x, max_y),
        }
    }

    /// Zero sized box at `point`.
    #[inline]
    pub fn from_point(point: Vector2<T>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn join(&self, other: &Self) -> Self {
        Self {
            min: Vector2::new(
                num_traits::real::Real::min(self.min.x, other.min.x),
                num_traits::real::Real::min(self.min.y, other.min.y),
            ),
            max: Vector2::new(
                num_traits::real::Real::max(self.max.x, other.max.x),
                num_traits::real::Real::max(self.max.y, other.max.y),
            ),
        }
    }

    /// Grow the box to include `point`.
    #[inline]
    pub fn include_point(&self, point: Vector2<T>) -> Self {
        self.join(&Self::from_point(point))
    }

    /// Returns true if the boxes overlap or touch, with `tol` added on every side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::Vector2;
    /// # use contour_offset::geometry::BoundingBox;
    /// let a = BoundingBox::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
    /// let b = BoundingBox::new(Vector2::new(1.0, 0.5), Vector2::new(2.0, 2.0));
    /// let c = BoundingBox::new(Vector2::new(1.5, 0.5), Vector2::new(2.0, 2.0));
    /// assert!(a.has_intersection(&b, 1e-9));
    /// assert!(!a.has_intersection(&c, 1e-9));
    /// assert!(a.has_intersection(&c, 0.6));
    /// ```
    #[inline]
    pub fn has_intersection(&self, other: &Self, tol: T) -> bool {
        self.max.x + tol > other.min.x
            && self.min.x - tol < other.max.x
            && self.max.y + tol > other.min.y
            && self.min.y - tol < other.max.y
    }

    /// Returns true if `point` lies inside the box widened by `tol`.
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>, tol: T) -> bool {
        point.x.fuzzy_in_range_eps(self.min.x, self.max.x, tol)
            && point.y.fuzzy_in_range_eps(self.min.y, self.max.y, tol)
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    /// Convert to the box type used by the spatial index, expanded by `tol` on every side.
    #[inline]
    pub fn to_aabb(&self, tol: T) -> AABB<T> {
        AABB::new(
            self.min.x - tol,
            self.min.y - tol,
            self.max.x + tol,
            self.max.y + tol,
        )
    }
}
