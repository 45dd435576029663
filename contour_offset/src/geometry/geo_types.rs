use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which extents count when searching for intersects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntersectMode {
    /// Intersects must lie on both primitives (line segment extents and arc sweeps).
    Clamped,
    /// Primitives are extended: lines to infinite lines, arcs to full circles.
    Ray,
}

/// Which part of a primitive survives a trim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KeepSide {
    /// Keep the part from the start up to the trim point.
    Start,
    /// Keep the part from the trim point up to the end.
    End,
}

/// Rotational direction of an arc.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArcDirection {
    CounterClockwise,
    Clockwise,
}

impl ArcDirection {
    /// Direction from the sign of `value`, zero counts as counter clockwise.
    #[inline]
    pub fn from_sign<T: Real>(value: T) -> Self {
        if value < T::zero() {
            ArcDirection::Clockwise
        } else {
            ArcDirection::CounterClockwise
        }
    }

    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, ArcDirection::CounterClockwise)
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            ArcDirection::CounterClockwise => ArcDirection::Clockwise,
            ArcDirection::Clockwise => ArcDirection::CounterClockwise,
        }
    }
}

/// Intersect points found between two primitives (at most two for line/arc geometry).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IntersectPoints<T = f64> {
    NoIntersect,
    One(Vector2<T>),
    Two(Vector2<T>, Vector2<T>),
}

impl<T> IntersectPoints<T>
where
    T: Real,
{
    /// Collect up to two distinct (by `eps`) points from `candidates`, extras are ignored.
    pub fn from_candidates<I>(candidates: I, eps: T) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        let mut result = IntersectPoints::NoIntersect;
        for p in candidates {
            result = match result {
                IntersectPoints::NoIntersect => IntersectPoints::One(p),
                IntersectPoints::One(a) if !a.fuzzy_eq_eps(p, eps) => IntersectPoints::Two(a, p),
                r => r,
            };
        }

        result
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, IntersectPoints::NoIntersect)
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            IntersectPoints::NoIntersect => 0,
            IntersectPoints::One(_) => 1,
            IntersectPoints::Two(_, _) => 2,
        }
    }

    /// Iterate the points in the order found.
    pub fn points(&self) -> impl Iterator<Item = Vector2<T>> {
        let (a, b) = match *self {
            IntersectPoints::NoIntersect => (None, None),
            IntersectPoints::One(p) => (Some(p), None),
            IntersectPoints::Two(p, q) => (Some(p), Some(q)),
        };
        a.into_iter().chain(b)
    }

    /// The point nearest to `target`, `None` if there are no points.
    #[inline]
    pub fn nearest_to(&self, target: Vector2<T>) -> Option<Vector2<T>> {
        target.nearest(self.points())
    }
}
