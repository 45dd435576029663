use crate::{
    core::{
        math::{is_left, Vector2},
        traits::Real,
    },
    error::GeometryError,
    geometry::{ArcGeo, BoundingBox, LineGeo, Segment},
};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a contour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContourOrientation {
    /// Contour is open (has no orientation).
    Open,
    /// Contour is closed and directionally clockwise.
    Clockwise,
    /// Contour is closed and directionally counter clockwise.
    CounterClockwise,
}

/// Ordered sequence of line and arc segments, open or closed.
///
/// Consecutive segments are expected to share end points and a closed contour's last segment
/// ends where the first one starts. The cached total length is updated when segments are added
/// through the contour's own methods but is not re-validated otherwise, see
/// [Contour::recompute_length].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Contour<T = f64> {
    pub(crate) segments: Vec<Segment<T>>,
    pub(crate) closed: bool,
    pub(crate) length: T,
}

impl<T> Default for Contour<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T> Contour<T>
where
    T: Real,
{
    /// Create a new empty contour.
    #[inline]
    pub fn new(closed: bool) -> Self {
        Self::with_capacity(0, closed)
    }

    /// Create a new empty contour with `capacity` reserved for segments.
    #[inline]
    pub fn with_capacity(capacity: usize, closed: bool) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            closed,
            length: T::zero(),
        }
    }

    /// Contour from segments in travel order.
    pub fn from_segments<I>(segments: I, closed: bool) -> Self
    where
        I: IntoIterator<Item = Segment<T>>,
    {
        let segments: Vec<_> = segments.into_iter().collect();
        let mut result = Self {
            segments,
            closed,
            length: T::zero(),
        };
        result.recompute_length();
        result
    }

    /// Polygon contour through `points`. For closed contours a closing line back to the first
    /// point is added unless the last point already repeats it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::Vector2;
    /// # use contour_offset::contour::*;
    /// let square = Contour::from_points(
    ///     &[
    ///         Vector2::new(0.0, 0.0),
    ///         Vector2::new(1.0, 0.0),
    ///         Vector2::new(1.0, 1.0),
    ///         Vector2::new(0.0, 1.0),
    ///     ],
    ///     true,
    /// );
    /// assert_eq!(square.len(), 4);
    /// assert_eq!(square.length(), 4.0);
    /// ```
    pub fn from_points(points: &[Vector2<T>], closed: bool) -> Self {
        let mut result = Self::with_capacity(points.len(), closed);
        for w in points.windows(2) {
            result.add_line(w[0], w[1]);
        }

        if closed && points.len() > 2 {
            let first = points[0];
            let last = points[points.len() - 1];
            if !first.fuzzy_eq(last) {
                result.add_line(last, first);
            }
        }

        result
    }

    #[inline]
    pub fn add_segment(&mut self, segment: Segment<T>) {
        self.length = self.length + segment.length();
        self.segments.push(segment);
    }

    #[inline]
    pub fn add_line(&mut self, start: Vector2<T>, end: Vector2<T>) {
        self.add_segment(Segment::Line(LineGeo::new(start, end)));
    }

    #[inline]
    pub fn add_arc(&mut self, arc: ArcGeo<T>) {
        self.add_segment(Segment::Arc(arc));
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn set_is_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Segment<T>> {
        self.segments.iter()
    }

    /// Cached total length.
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// Recompute the cached total length from the segments and return it.
    pub fn recompute_length(&mut self) -> T {
        self.length = self
            .segments
            .iter()
            .fold(T::zero(), |acc, s| acc + s.length());
        self.length
    }

    /// Reverse the direction of travel (segment order and every segment).
    pub fn reverse(&mut self) {
        self.segments.reverse();
        for s in self.segments.iter_mut() {
            *s = s.reverse();
        }
    }

    /// Start point and travel angle (radians) at the start of the contour.
    pub fn start_tangent(&self) -> Option<(Vector2<T>, T)> {
        let first = self.segments.first()?;
        let t = first.start_tangent()?;
        Some((first.start(), T::atan2(t.y, t.x)))
    }

    /// End point and travel angle (radians) at the end of the contour.
    pub fn end_tangent(&self) -> Option<(Vector2<T>, T)> {
        let last = self.segments.last()?;
        let t = last.end_tangent()?;
        Some((last.end(), T::atan2(t.y, t.x)))
    }

    /// Bounding box of all segments, `None` if the contour is empty.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        let mut iter = self.segments.iter();
        let first = iter.next()?.bounding_box();
        Some(iter.fold(first, |acc, s| acc.join(&s.bounding_box())))
    }

    /// Exact signed area enclosed, positive if counter clockwise. Zero for open contours.
    ///
    /// Sums the shoelace term of every chord plus the signed circular segment area between each
    /// arc and its chord.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::Vector2;
    /// # use contour_offset::core::traits::*;
    /// # use contour_offset::contour::*;
    /// # use contour_offset::geometry::*;
    /// let mut circle = Contour::new(true);
    /// circle.add_arc(
    ///     ArcGeo::full_circle(Vector2::new(1.0, 1.0), 2.0, 0.0, ArcDirection::CounterClockwise).unwrap(),
    /// );
    /// assert!(circle.area().fuzzy_eq(4.0 * std::f64::consts::PI));
    /// ```
    pub fn area(&self) -> T {
        if !self.closed {
            return T::zero();
        }

        let mut double_area = T::zero();
        for s in &self.segments {
            let (p0, p1) = (s.start(), s.end());
            double_area = double_area + p0.cross(p1);
            if let Segment::Arc(a) = s {
                let theta = a.sweep().abs();
                let cap = a.radius() * a.radius() * (theta - theta.sin());
                double_area = if a.sweep() < T::zero() {
                    double_area - cap
                } else {
                    double_area + cap
                };
            }
        }

        double_area / T::two()
    }

    /// Orientation from the sign of the enclosed area.
    pub fn orientation(&self) -> ContourOrientation {
        if !self.closed {
            return ContourOrientation::Open;
        }

        if self.area() < T::zero() {
            ContourOrientation::Clockwise
        } else {
            ContourOrientation::CounterClockwise
        }
    }

    /// Winding number of the closed contour around `point`, zero for open contours. Points on
    /// the contour give an unspecified (but finite) result.
    ///
    /// Lines use the upward/downward crossing rule. An arc contributes the crossing of its chord
    /// plus one turn (signed by its direction) when `point` lies in the circular segment between
    /// the arc and the chord.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::contour_closed;
    /// # use contour_offset::core::math::Vector2;
    /// let mut square = contour_closed![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// assert_eq!(square.winding_number(Vector2::new(1.0, 1.0)), 1);
    /// assert_eq!(square.winding_number(Vector2::new(3.0, 1.0)), 0);
    /// square.reverse();
    /// assert_eq!(square.winding_number(Vector2::new(1.0, 1.0)), -1);
    /// ```
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        if !self.closed || self.segments.is_empty() {
            return 0;
        }

        let chord_winding = |v1: Vector2<T>, v2: Vector2<T>| -> i32 {
            if v1.y <= point.y {
                if v2.y > point.y && is_left(v1, v2, point) {
                    // left and upward crossing
                    return 1;
                }
            } else if v2.y <= point.y && !is_left(v1, v2, point) {
                // right and downward crossing
                return -1;
            }
            0
        };

        let mut winding = 0;
        for s in &self.segments {
            match s {
                Segment::Line(l) => winding += chord_winding(l.start(), l.end()),
                Segment::Arc(a) => {
                    winding += chord_winding(a.start(), a.end());
                    let in_circle = point.distance_to(a.center()) < a.radius();
                    let same_side_as_arc = is_left(a.start(), a.end(), point)
                        == is_left(a.start(), a.end(), a.midpoint());
                    let in_cap = in_circle && (a.is_full_circle() || same_side_as_arc);
                    if in_cap {
                        winding += if a.sweep() < T::zero() { -1 } else { 1 };
                    }
                }
                Segment::Vertex(_) => {}
            }
        }

        winding
    }

    /// Returns true if `point` is inside the closed contour (non-zero winding number).
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.winding_number(point) != 0
    }

    /// Sum used by the winding fix: shoelace terms `(x0 + x1) * (y1 - y0) / 2` over lines, with
    /// arcs sampled by one chord per started quarter turn of sweep. Positive for counter clockwise
    /// contours.
    pub fn sampled_winding_sum(&self) -> T {
        let quarter_turn_degrees = T::from(90.0).unwrap();
        let term = |p0: Vector2<T>, p1: Vector2<T>| (p0.x + p1.x) * (p1.y - p0.y) / T::two();

        let mut sum = T::zero();
        for s in &self.segments {
            match s {
                Segment::Line(l) => sum = sum + term(l.start(), l.end()),
                Segment::Arc(a) => {
                    let chords = (a.sweep().abs().to_degrees() / quarter_turn_degrees)
                        .floor()
                        .to_usize()
                        .unwrap_or(0)
                        + 1;
                    let step = a.sweep() / T::from(chords).unwrap();
                    let mut prev = a.start();
                    for i in 1..=chords {
                        let next = if i == chords {
                            a.end()
                        } else {
                            a.point_at_angle(a.start_angle() + step * T::from(i).unwrap())
                        };
                        sum = sum + term(prev, next);
                        prev = next;
                    }
                }
                Segment::Vertex(_) => {}
            }
        }

        sum
    }

    /// Check that every segment has length and starts where the previous one ends (and that a
    /// closed contour closes).
    pub fn validate(&self, eps: T) -> Result<(), GeometryError> {
        for (i, s) in self.segments.iter().enumerate() {
            if s.is_vertex() || s.length().fuzzy_eq_zero_eps(eps) {
                return Err(GeometryError::DegenerateSegment { index: i });
            }
            if i > 0 && !self.segments[i - 1].end().fuzzy_eq_eps(s.start(), eps) {
                return Err(GeometryError::Disconnected { index: i });
            }
        }

        if self.closed {
            if let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) {
                if !last.end().fuzzy_eq_eps(first.start(), eps) {
                    return Err(GeometryError::Disconnected { index: 0 });
                }
            }
        }

        Ok(())
    }
}

impl<T> Index<usize> for Contour<T> {
    type Output = Segment<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}
