use contour_offset::{
    contour::Contour,
    core::{math::Vector2, traits::FuzzyEq},
    geometry::Segment,
};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a segment sequence for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct ContourProperties {
    pub segment_count: usize,
    pub area: f64,
    pub path_length: f64,
    pub extents: AABB<f64>,
}

impl ContourProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-6;

    pub fn new(
        segment_count: usize,
        area: f64,
        path_length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            segment_count,
            area,
            path_length,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_segments(segments: &[Segment], closed: bool) -> Self {
        let contour = Contour::from_segments(segments.iter().copied(), closed);
        let bb = contour.bounding_box().unwrap();
        Self {
            segment_count: contour.len(),
            area: contour.area(),
            path_length: contour.length(),
            extents: AABB::new(bb.min.x, bb.min.y, bb.max.x, bb.max.y),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.segment_count == other.segment_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.path_length.fuzzy_eq_eps(other.path_length, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

/// Assert the sequence is connected end to start (and closes if `closed`).
pub fn assert_connected(segments: &[Segment], closed: bool) {
    for (i, w) in segments.windows(2).enumerate() {
        assert!(
            w[0].end().fuzzy_eq_eps(w[1].start(), 1e-7),
            "segment {} ends at {:?} but segment {} starts at {:?}",
            i,
            w[0].end(),
            i + 1,
            w[1].start()
        );
    }

    if closed {
        if let (Some(first), Some(last)) = (segments.first(), segments.last()) {
            assert!(
                last.end().fuzzy_eq_eps(first.start(), 1e-7),
                "sequence does not close: {:?} != {:?}",
                last.end(),
                first.start()
            );
        }
    }
}

/// Assert the segments are lines with the start points given, in order.
pub fn assert_line_starts(segments: &[Segment], starts: &[(f64, f64)]) {
    assert_eq!(segments.len(), starts.len(), "segment count");
    for (i, (s, &(x, y))) in segments.iter().zip(starts).enumerate() {
        assert!(matches!(s, Segment::Line(_)), "segment {i} is not a line: {s:?}");
        assert!(
            s.start().fuzzy_eq_eps(Vector2::new(x, y), 1e-7),
            "segment {i} starts at {:?}, expected ({x}, {y})",
            s.start()
        );
    }
}
