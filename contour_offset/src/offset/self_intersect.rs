use crate::{
    core::{math::Vector2, traits::Real},
    geometry::{IntersectMode, Segment},
};
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};

/// Intersect between two non-adjacent segments of a sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentIntersect<T = f64> {
    /// Index of the first segment, always less than `index2`.
    pub index1: usize,
    pub index2: usize,
    pub point: Vector2<T>,
}

impl<T> SegmentIntersect<T> {
    #[inline]
    pub fn new(index1: usize, index2: usize, point: Vector2<T>) -> Self {
        Self {
            index1,
            index2,
            point,
        }
    }
}

fn build_index<T>(segments: &[Segment<T>], eps: T) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    let mut builder = StaticAABB2DIndexBuilder::new(segments.len());
    for s in segments {
        let bb = s.bounding_box().to_aabb(eps);
        builder.add(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
    }

    match builder.build() {
        Ok(index) => index,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast numeric type: {e}")
            }
        },
    }
}

/// Find all intersects between segments of the sequence that are not neighbors (segments `i` and
/// `i + 1`, and for closed sequences the last and first segment, share an end point and are
/// skipped).
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::Vector2;
/// # use contour_offset::geometry::*;
/// # use contour_offset::offset::find_self_intersects;
/// let bow_tie: Vec<Segment> = vec![
///     LineGeo::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0)).into(),
///     LineGeo::new(Vector2::new(2.0, 2.0), Vector2::new(2.0, 0.0)).into(),
///     LineGeo::new(Vector2::new(2.0, 0.0), Vector2::new(0.0, 2.0)).into(),
///     LineGeo::new(Vector2::new(0.0, 2.0), Vector2::new(0.0, 0.0)).into(),
/// ];
/// let intrs = find_self_intersects(&bow_tie, true, 1e-9);
/// assert_eq!(intrs.len(), 1);
/// assert_eq!((intrs[0].index1, intrs[0].index2), (0, 2));
/// assert!(intrs[0].point.fuzzy_eq(Vector2::new(1.0, 1.0)));
/// ```
pub fn find_self_intersects<T>(
    segments: &[Segment<T>],
    closed: bool,
    eps: T,
) -> Vec<SegmentIntersect<T>>
where
    T: Real,
{
    let n = segments.len();
    let mut result = Vec::new();
    if n < 3 {
        return result;
    }

    let index = build_index(segments, eps);
    let is_neighbor = |i: usize, j: usize| j == i + 1 || (closed && i == 0 && j == n - 1);

    let mut query_stack = Vec::with_capacity(8);
    for (i, seg) in segments.iter().enumerate() {
        let bb = seg.bounding_box().to_aabb(eps);
        let mut query_visitor = |j: usize| {
            if j <= i || is_neighbor(i, j) {
                return;
            }

            for p in seg.find_intersects(&segments[j], IntersectMode::Clamped, eps).points() {
                result.push(SegmentIntersect::new(i, j, p));
            }
        };

        index.visit_query_with_stack(
            bb.min_x,
            bb.min_y,
            bb.max_x,
            bb.max_y,
            &mut query_visitor,
            &mut query_stack,
        );
    }

    result.sort_by(|a, b| (a.index1, a.index2).cmp(&(b.index1, b.index2)));
    result
}
