use super::Contour;
use crate::{
    core::traits::Real,
    geometry::{LineGeo, Segment},
};
use tracing::debug;

impl<T> Contour<T>
where
    T: Real,
{
    /// Reverse a closed contour if it runs counter clockwise (by
    /// [Contour::sampled_winding_sum]), returns true if it was reversed. Open contours are left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::contour_closed;
    /// # use contour_offset::contour::ContourOrientation;
    /// let mut square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    /// assert!(square.make_clockwise());
    /// assert_eq!(square.orientation(), ContourOrientation::Clockwise);
    /// assert!(!square.make_clockwise());
    /// ```
    pub fn make_clockwise(&mut self) -> bool {
        if !self.closed || self.segments.is_empty() {
            return false;
        }

        let sum = self.sampled_winding_sum();
        if sum > T::zero() {
            debug!(segments = self.segments.len(), ?sum, "reversing counter clockwise contour");
            self.reverse();
            return true;
        }

        false
    }

    /// Merge runs of consecutive colinear lines travelling in the same direction into single
    /// lines and drop zero length lines. For closed contours the last line is also merged with
    /// the first. Returns the number of segments removed.
    pub fn join_colinear_lines(&mut self, eps: T) -> usize {
        let initial_len = self.segments.len();

        let mut joined: Vec<Segment<T>> = Vec::with_capacity(initial_len);
        for s in self.segments.drain(..) {
            if let Segment::Line(l) = s {
                if l.is_degenerate(eps) {
                    continue;
                }
            }

            let merged = match (joined.last(), &s) {
                (Some(Segment::Line(prev)), Segment::Line(curr)) => {
                    join_in_sequence(prev, curr, eps)
                }
                _ => None,
            };

            match merged {
                Some(m) => {
                    let last = joined.len() - 1;
                    joined[last] = Segment::Line(m);
                }
                None => joined.push(s),
            }
        }

        if self.closed && joined.len() > 1 {
            let last = joined.len() - 1;
            if let (Segment::Line(first), Segment::Line(prev)) = (joined[0], joined[last]) {
                if let Some(merged) = join_in_sequence(&prev, &first, eps) {
                    joined[0] = Segment::Line(merged);
                    joined.pop();
                }
            }
        }

        self.segments = joined;
        self.recompute_length();

        let removed = initial_len - self.segments.len();
        if removed > 0 {
            debug!(removed, "joined colinear lines");
        }
        removed
    }

    /// Winding fix followed by the colinear merge.
    pub fn normalize(&mut self, eps: T) {
        self.make_clockwise();
        self.join_colinear_lines(eps);
    }
}

/// Merge `prev` followed by `curr` if they are colinear, connected end to start and continue in
/// the same direction. A line doubling back over `prev` is not merged, the merged extent would
/// no longer end where `curr` ends.
fn join_in_sequence<T>(prev: &LineGeo<T>, curr: &LineGeo<T>, eps: T) -> Option<LineGeo<T>>
where
    T: Real,
{
    if !prev.end().fuzzy_eq_eps(curr.start(), eps) {
        return None;
    }

    let same_direction = match (prev.direction(), curr.direction()) {
        (Some(a), Some(b)) => a.dot(b) > T::zero(),
        _ => false,
    };
    if !same_direction {
        return None;
    }

    prev.join_colinear_line(curr, eps)
}
