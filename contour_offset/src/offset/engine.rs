use super::{
    classify, find_self_intersects, relation, InterferenceRelation, OffsetElement, OffsetOptions,
    OffsetSide, SegmentIntersect, WalkDirection,
};
use crate::{
    contour::Contour,
    core::{math::Vector2, traits::Real},
    error::{GeometryError, OffsetError, Result},
    geometry::{IntersectMode, KeepSide, Segment},
};
use tracing::{debug, trace, warn};

/// Offset of a single contour by a fixed distance towards one side.
///
/// All work happens in [OffsetEngine::new]: the contour is copied and normalized (clockwise,
/// colinear lines joined), split into edge and vertex elements, the locally invalid regions
/// around reflex vertices are trimmed away and the raw offset primitives of the surviving
/// elements are collected. The engine is read only afterwards.
///
/// Trimming stops early if the interference search around a reflex vertex does not settle or
/// the trim partners found do not intersect. In that case the raw offset holds the best effort
/// result and [OffsetEngine::failure] tells what went wrong.
///
/// # Examples
///
/// ```
/// # use contour_offset::contour_closed;
/// # use contour_offset::core::math::Vector2;
/// # use contour_offset::offset::*;
/// let square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// let engine = OffsetEngine::new(&square, 1.0, OffsetSide::Inward, &OffsetOptions::new()).unwrap();
/// assert!(engine.is_complete());
/// assert_eq!(engine.raw_offset().len(), 4);
/// assert!(engine.raw_offset()[0].start().fuzzy_eq(Vector2::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone)]
pub struct OffsetEngine<T = f64> {
    distance: T,
    side: OffsetSide,
    options: OffsetOptions<T>,
    closed: bool,
    elements: Vec<OffsetElement<T>>,
    raw_offset: Vec<Segment<T>>,
    reflex_count: usize,
    trim_iterations: usize,
    failure: Option<OffsetError>,
}

impl<T> OffsetEngine<T>
where
    T: Real,
{
    /// Offset `contour` by `distance` towards `side`. The contour is not modified.
    ///
    /// # Errors
    ///
    /// [OffsetError::InvalidDistance] if `distance` is not a positive number and
    /// [OffsetError::Geometry] if the contour has a degenerate segment.
    pub fn new(
        contour: &Contour<T>,
        distance: T,
        side: OffsetSide,
        options: &OffsetOptions<T>,
    ) -> Result<Self> {
        // also rejects NaN
        if !(distance > T::zero()) {
            return Err(OffsetError::InvalidDistance);
        }

        let mut working = contour.clone();
        working.normalize(options.pos_equal_eps);

        let elements = classify(&working, side, options.pos_equal_eps)?;
        let reflex_count = elements.iter().filter(|e| e.is_reflex()).count();

        let mut engine = Self {
            distance,
            side,
            options: *options,
            closed: working.is_closed(),
            elements,
            raw_offset: Vec::new(),
            reflex_count,
            trim_iterations: 0,
            failure: None,
        };

        engine.trim();
        engine.emit();

        Ok(engine)
    }

    /// Offset distance (always positive).
    #[inline]
    pub fn distance(&self) -> T {
        self.distance
    }

    #[inline]
    pub fn side(&self) -> OffsetSide {
        self.side
    }

    /// Offset distance signed for the right hand normals of the normalized contour.
    #[inline]
    pub fn signed_distance(&self) -> T {
        self.distance * self.side.sign()
    }

    #[inline]
    pub fn options(&self) -> &OffsetOptions<T> {
        &self.options
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Elements left after trimming.
    #[inline]
    pub fn elements(&self) -> &[OffsetElement<T>] {
        &self.elements
    }

    /// Raw offset primitives (lines and arcs only) in contour order.
    #[inline]
    pub fn raw_offset(&self) -> &[Segment<T>] {
        &self.raw_offset
    }

    /// Number of reflex vertices found when classifying.
    #[inline]
    pub fn reflex_count(&self) -> usize {
        self.reflex_count
    }

    /// Number of locally invalid regions removed.
    #[inline]
    pub fn trim_iterations(&self) -> usize {
        self.trim_iterations
    }

    /// Reason the raw offset is incomplete, if it is: trimming stopped early, or an edge collapsed
    /// to a point ([GeometryError::DegenerateSegment] with the index into
    /// [OffsetEngine::elements]).
    #[inline]
    pub fn failure(&self) -> Option<&OffsetError> {
        self.failure.as_ref()
    }

    /// Returns true if every reflex vertex was resolved and no edge collapsed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// The raw offset, or the failure if trimming stopped early.
    pub fn into_raw_offset(self) -> Result<Vec<Segment<T>>> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.raw_offset),
        }
    }

    /// Intersects left between non-adjacent raw offset primitives.
    pub fn find_self_intersects(&self) -> Vec<SegmentIntersect<T>> {
        find_self_intersects(&self.raw_offset, self.closed, self.options.pos_equal_eps)
    }

    fn trim(&mut self) {
        let s = self.signed_distance();
        let eps = self.options.pos_equal_eps;
        let max_rounds = self.elements.len();

        while let Some(vertex_index) = self.elements.iter().position(|e| e.is_reflex()) {
            if self.trim_iterations >= max_rounds {
                self.abort(OffsetError::UnresolvedInterference {
                    vertex_index,
                    iterations: self.trim_iterations,
                });
                return;
            }

            let (forward, backward) = match self.find_trim_partners(vertex_index) {
                Ok(pair) => pair,
                Err(e) => {
                    self.abort(e);
                    return;
                }
            };

            let vertex_pos = self.elements[vertex_index].segment.start();
            let f_raw = self.elements[forward].raw_offset(s, eps);
            let b_raw = self.elements[backward].raw_offset(s, eps);
            let point = match (f_raw, b_raw) {
                (Some(f), Some(b)) => f
                    .find_intersects(&b, IntersectMode::Clamped, eps)
                    .nearest_to(vertex_pos),
                _ => None,
            };

            let Some(point) = point else {
                self.abort(OffsetError::NoIntersectionOnTrim { forward, backward });
                return;
            };

            debug!(
                iteration = self.trim_iterations,
                vertex_index,
                forward,
                backward,
                x = ?point.x,
                y = ?point.y,
                "trimming locally invalid region"
            );
            self.remove_lir(forward, backward, point);
            self.trim_iterations += 1;
        }
    }

    fn abort(&mut self, error: OffsetError) {
        warn!(
            %error,
            trim_iterations = self.trim_iterations,
            "stopped trimming, keeping partial offset"
        );
        self.failure = Some(error);
    }

    fn emit(&mut self) {
        let s = self.signed_distance();
        let eps = self.options.pos_equal_eps;
        let mut collapsed = None;
        self.raw_offset = self
            .elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                let raw = e.raw_offset(s, eps);
                if raw.is_none() && !e.segment.is_vertex() && collapsed.is_none() {
                    collapsed = Some(i);
                }
                raw
            })
            .collect();

        if let Some(index) = collapsed {
            warn!(index, "edge offset collapsed to a point");
            if self.failure.is_none() {
                self.failure = Some(GeometryError::DegenerateSegment { index }.into());
            }
        }
    }

    /// Resolve a walk index, wrapping for closed contours. `None` if it leaves an open contour.
    fn resolve(&self, index: isize) -> Option<usize> {
        let n = self.elements.len() as isize;
        if self.closed {
            Some(index.rem_euclid(n) as usize)
        } else if (0..n).contains(&index) {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Pairwise interference search: walk forward and backward from the reflex vertex at
    /// `vertex_index` until both candidates only partially interfere with each other. Returns
    /// `(forward, backward)` element indexes.
    ///
    /// On open contours the walk stops at the contour ends and returns the pair reached.
    fn find_trim_partners(&self, vertex_index: usize) -> Result<(usize, usize)> {
        use InterferenceRelation::*;
        let s = self.signed_distance();
        let eps = self.options.pos_equal_eps;
        let max_iterations = self.options.max_interference_iterations;

        let mut forward = vertex_index as isize + 1;
        let mut backward = vertex_index as isize - 1;
        let (Some(mut f), Some(mut b)) = (self.resolve(forward), self.resolve(backward)) else {
            return Err(OffsetError::UnresolvedInterference {
                vertex_index,
                iterations: 0,
            });
        };

        for iteration in 0..max_iterations {
            if f == b {
                return Err(OffsetError::UnresolvedInterference {
                    vertex_index,
                    iterations: iteration,
                });
            }

            let fe = &self.elements[f];
            let be = &self.elements[b];
            if fe.segment.end().fuzzy_eq_eps(be.segment.start(), eps) {
                return Ok((f, b));
            }

            let l1 = relation(fe, WalkDirection::Forward, be, s, eps);
            let l2 = relation(be, WalkDirection::Backward, fe, s, eps);
            trace!(vertex_index, forward = f, backward = b, ?l1, ?l2, "interference");

            match (l1, l2) {
                (Partial, Partial) => return Ok((f, b)),
                (Full, _) => forward += 1,
                (Reverse, _) => forward -= 1,
                (_, Full) => backward -= 1,
                (_, Reverse) => backward += 1,
            }

            match (self.resolve(forward), self.resolve(backward)) {
                (Some(next_f), Some(next_b)) => {
                    f = next_f;
                    b = next_b;
                }
                _ => return Ok((f, b)),
            }
        }

        Err(OffsetError::UnresolvedInterference {
            vertex_index,
            iterations: max_iterations,
        })
    }

    /// Cut the trim partners at `point` and drop every element strictly between them.
    fn remove_lir(&mut self, forward: usize, backward: usize, point: Vector2<T>) {
        let s = self.signed_distance();
        self.elements[forward] = self.elements[forward].trimmed(point, KeepSide::End, s);
        self.elements[backward] = self.elements[backward].trimmed(point, KeepSide::Start, s);

        let n = self.elements.len();
        let mut doomed = Vec::new();
        if self.closed {
            let mut i = (backward + 1) % n;
            while i != forward && i != backward {
                doomed.push(i);
                i = (i + 1) % n;
            }
        } else if backward < forward {
            doomed.extend(backward + 1..forward);
        }

        doomed.sort_unstable();
        for i in doomed.into_iter().rev() {
            self.elements.remove(i);
        }
    }
}

impl<T> Contour<T>
where
    T: Real,
{
    /// Raw offset of the contour by `distance` towards `side` using default options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::contour_closed;
    /// # use contour_offset::offset::OffsetSide;
    /// let square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    /// let outward = square.parallel_offset(1.0, OffsetSide::Outward).unwrap();
    /// // four sides and four rounded corners
    /// assert_eq!(outward.len(), 8);
    /// ```
    pub fn parallel_offset(&self, distance: T, side: OffsetSide) -> Result<Vec<Segment<T>>> {
        self.parallel_offset_opt(distance, side, &Default::default())
    }

    /// Raw offset of the contour by `distance` towards `side` with the options given.
    pub fn parallel_offset_opt(
        &self,
        distance: T,
        side: OffsetSide,
        options: &OffsetOptions<T>,
    ) -> Result<Vec<Segment<T>>> {
        OffsetEngine::new(self, distance, side, options)?.into_raw_offset()
    }
}
