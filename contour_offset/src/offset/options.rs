use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of a (clockwise normalized) contour to offset towards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OffsetSide {
    /// Towards the enclosed region, along the right hand normals of travel.
    Inward,
    /// Away from the enclosed region, along the left hand normals of travel.
    Outward,
}

impl OffsetSide {
    /// Sign applied to the offset distance along right hand normals.
    #[inline]
    pub fn sign<T>(self) -> T
    where
        T: Real,
    {
        match self {
            OffsetSide::Inward => T::one(),
            OffsetSide::Outward => -T::one(),
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            OffsetSide::Inward => OffsetSide::Outward,
            OffsetSide::Outward => OffsetSide::Inward,
        }
    }
}

/// Cutter radius compensation side as used by G-code (G41/G42), relative to the direction of
/// travel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CutterCompensation {
    /// Tool to the left of the path (G41).
    Left,
    /// Tool to the right of the path (G42).
    Right,
}

impl CutterCompensation {
    /// The compensation to use when the direction of travel is reversed.
    #[inline]
    pub fn switched(self) -> Self {
        match self {
            CutterCompensation::Left => CutterCompensation::Right,
            CutterCompensation::Right => CutterCompensation::Left,
        }
    }

    /// Offset side the compensation corresponds to on a clockwise contour.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::offset::*;
    /// assert_eq!(CutterCompensation::Left.offset_side(), OffsetSide::Outward);
    /// assert_eq!(CutterCompensation::Left.switched().offset_side(), OffsetSide::Inward);
    /// ```
    #[inline]
    pub fn offset_side(self) -> OffsetSide {
        match self {
            CutterCompensation::Left => OffsetSide::Outward,
            CutterCompensation::Right => OffsetSide::Inward,
        }
    }

    /// Compensation that produces `side` on a clockwise contour.
    #[inline]
    pub fn from_offset_side(side: OffsetSide) -> Self {
        match side {
            OffsetSide::Outward => CutterCompensation::Left,
            OffsetSide::Inward => CutterCompensation::Right,
        }
    }
}

/// Options for the offset engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OffsetOptions<T> {
    /// Fuzzy comparison epsilon used for determining if two positions are equal and for the
    /// geometric predicates used while trimming.
    pub pos_equal_eps: T,
    /// Maximum number of steps the pairwise interference search may take around one reflex
    /// vertex before giving up.
    pub max_interference_iterations: usize,
}

impl<T> OffsetOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-9).unwrap(),
            max_interference_iterations: 100,
        }
    }
}

impl<T> Default for OffsetOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
