use super::internal::quad_search::{nearest_compressed, search_compressed, validate_header};
use super::{IndexError, NearestSegment, INDEX_HEADER_LEN};
use crate::core::{
    math::{Point, Rect, Segment},
    traits::{ControlFlow, Real},
};

/// Trait representing a readonly source of series data: an ordered sequence of 2D points with a
/// closed/open flag, derived metadata, and an optional serialized segment index. All the query
/// operations are provided as default methods on top of the small required capability set.
///
/// A closed series forms a segment between its last and first point; an open series does not.
/// See [Series](crate::series::Series) for the concrete type implementing this trait.
pub trait SeriesSource {
    /// Numeric type used for the series.
    type Num: Real;

    /// Total number of points.
    fn point_count(&self) -> usize;

    /// Whether the series is closed (true) or open (false).
    fn is_closed(&self) -> bool;

    /// Get the point at given `index` position. Returns `None` if `index` out of bounds.
    fn get(&self, index: usize) -> Option<Point<Self::Num>>;

    /// Same as [SeriesSource::get] but panics if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn at(&self, index: usize) -> Point<Self::Num>;

    /// Minimum bounding rectangle of all points. Undefined (zero rectangle) when
    /// [SeriesSource::is_empty] is true.
    fn bounding_rect(&self) -> Rect<Self::Num>;

    /// True if consecutive edge cross products never change sign (traversed cyclically when
    /// closed, linearly when open).
    fn is_convex(&self) -> bool;

    /// True if the signed winding sum over consecutive point pairs is positive.
    fn is_clockwise(&self) -> bool;

    /// Serialized segment index bytes; empty when the series carries no index and queries run as
    /// linear scans.
    #[inline]
    fn index_bytes(&self) -> &[u8] {
        &[]
    }

    /// Returns true if the series does not take up space: fewer than 2 points, or fewer than 3
    /// for a closed series.
    #[inline]
    fn is_empty(&self) -> bool {
        (self.is_closed() && self.point_count() < 3) || self.point_count() < 2
    }

    /// Total number of segments in the series.
    ///
    /// Open series with `n` points have `n - 1` segments, closed series have `n` (the last
    /// segment wrapping back to the first point) unless the last point exactly equals the first
    /// (explicit closure), in which case the wrap segment is suppressed and there are `n - 1`.
    /// Degenerate series have zero segments.
    #[inline]
    fn segment_count(&self) -> usize {
        let pc = self.point_count();
        if self.is_closed() {
            if pc < 3 {
                return 0;
            }
            if self.at(pc - 1) == self.at(0) {
                return pc - 1;
            }
            return pc;
        }
        if pc < 2 {
            return 0;
        }
        pc - 1
    }

    /// Get the segment at given `index` position, observing the wrap rule for closed series.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [SeriesSource::segment_count].
    #[inline]
    fn segment_at(&self, index: usize) -> Segment<Self::Num> {
        let a = self.at(index);
        let b = if index == self.point_count() - 1 {
            self.at(0)
        } else {
            self.at(index + 1)
        };
        Segment::new(a, b)
    }

    /// Return iterator over all the series segments.
    #[inline]
    fn iter_segments(&self) -> SegmentIter<'_, Self> {
        SegmentIter::new(self)
    }

    /// Visit every segment whose bounding rectangle intersects `query`, generically over the
    /// visitor's [ControlFlow] return type.
    ///
    /// Without an index this is a linear scan; with one it is a pruned descent over the
    /// serialized quadtree. Either way delivery order is fully determined: all items of a node in
    /// ascending segment order before its children, children in quadrant order 0 to 3 (a linear
    /// scan is simply ascending order). Decode failures on a corrupt index surface as
    /// `Err`; a visitor break is not an error.
    fn visit_intersected_segments<C, F>(
        &self,
        query: Rect<Self::Num>,
        visitor: &mut F,
    ) -> Result<C, IndexError>
    where
        C: ControlFlow,
        F: FnMut(Segment<Self::Num>, usize) -> C,
    {
        let index = self.index_bytes();
        if index.is_empty() {
            for i in 0..self.segment_count() {
                let seg = self.segment_at(i);
                if seg.bounding_rect().intersects(query) {
                    let c = visitor(seg, i);
                    if c.should_break() {
                        return Ok(c);
                    }
                }
            }
            Ok(C::continuing())
        } else {
            validate_header(index)?;
            search_compressed(
                index,
                INDEX_HEADER_LEN,
                self,
                self.bounding_rect(),
                query,
                visitor,
            )
        }
    }

    /// Search for segments whose bounding rectangle intersects `query`. The visitor returns
    /// `true` to continue and `false` to stop enumeration early.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_series::series_closed;
    /// # use planar_series::series::SeriesSource;
    /// # use planar_series::core::math::rect;
    /// let octagon = series_closed![
    ///     (0.0, 3.0), (3.0, 0.0), (7.0, 0.0), (10.0, 3.0),
    ///     (10.0, 7.0), (7.0, 10.0), (3.0, 10.0), (0.0, 7.0),
    /// ];
    /// let mut found = Vec::new();
    /// octagon
    ///     .search(rect(0.0, 0.0, 0.0, 0.0), &mut |_seg, index| {
    ///         found.push(index);
    ///         true
    ///     })
    ///     .unwrap();
    /// assert_eq!(found, vec![0]);
    /// ```
    #[inline]
    fn search<F>(&self, query: Rect<Self::Num>, visitor: &mut F) -> Result<(), IndexError>
    where
        F: FnMut(Segment<Self::Num>, usize) -> bool,
    {
        self.visit_intersected_segments::<bool, _>(query, visitor)
            .map(|_| ())
    }

    /// Find the segment minimizing `dist_to_segment`, searching best-first over the serialized
    /// index when one is present and falling back to a linear scan otherwise. Returns `Ok(None)`
    /// when the series has no segments.
    ///
    /// `dist_to_rect` must be a lower bound for `dist_to_segment`: for any rectangle `r` and any
    /// segment `s` fully contained in `r`, `dist_to_rect(r) <= dist_to_segment(s)` must hold, and
    /// neither functional may return NaN. Violating this contract gives wrong results (never
    /// memory unsafety). Distance from a fixed query point is the typical instantiation, see
    /// [SeriesSource::nearest_segment_to_point].
    ///
    /// Ties are deterministic: equal segment distances resolve to the traversal's first
    /// candidate, which for the linear scan is the lowest segment index.
    fn nearest_segment<DR, DS>(
        &self,
        dist_to_rect: DR,
        dist_to_segment: DS,
    ) -> Result<Option<NearestSegment<Self::Num>>, IndexError>
    where
        DR: Fn(Rect<Self::Num>) -> Self::Num,
        DS: Fn(Segment<Self::Num>) -> Self::Num,
    {
        let index = self.index_bytes();
        if index.is_empty() {
            let mut nearest: Option<NearestSegment<Self::Num>> = None;
            for i in 0..self.segment_count() {
                let seg = self.segment_at(i);
                let dist = dist_to_segment(seg);
                if nearest.as_ref().map_or(true, |near| dist < near.distance) {
                    nearest = Some(NearestSegment {
                        segment: seg,
                        index: i,
                        distance: dist,
                    });
                }
            }
            Ok(nearest)
        } else {
            validate_header(index)?;
            nearest_compressed(
                index,
                INDEX_HEADER_LEN,
                self,
                self.bounding_rect(),
                &dist_to_rect,
                &dist_to_segment,
            )
        }
    }

    /// Find the segment nearest to `point` by Euclidean distance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_series::series_closed;
    /// # use planar_series::series::SeriesSource;
    /// # use planar_series::core::math::point;
    /// # use planar_series::core::traits::FuzzyEq;
    /// let octagon = series_closed![
    ///     (0.0, 3.0), (3.0, 0.0), (7.0, 0.0), (10.0, 3.0),
    ///     (10.0, 7.0), (7.0, 10.0), (3.0, 10.0), (0.0, 7.0),
    /// ];
    /// let nearest = octagon
    ///     .nearest_segment_to_point(point(-1.0, 5.0))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(nearest.index, 7);
    /// assert!(nearest.distance.fuzzy_eq(1.0));
    /// ```
    #[inline]
    fn nearest_segment_to_point(
        &self,
        point: Point<Self::Num>,
    ) -> Result<Option<NearestSegment<Self::Num>>, IndexError> {
        self.nearest_segment(
            move |rect: Rect<Self::Num>| rect.distance_to_point(point),
            move |seg: Segment<Self::Num>| seg.distance_to_point(point),
        )
    }
}

/// An iterator over series segments, observing the wrap suppression rule for explicitly closed
/// series.
pub struct SegmentIter<'a, S>
where
    S: ?Sized,
{
    series: &'a S,
    pos: usize,
    count: usize,
}

impl<'a, S> SegmentIter<'a, S>
where
    S: SeriesSource + ?Sized,
{
    #[inline]
    pub fn new(series: &'a S) -> Self {
        Self {
            series,
            pos: 0,
            count: series.segment_count(),
        }
    }
}

impl<S> Clone for SegmentIter<'_, S>
where
    S: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            series: self.series,
            pos: self.pos,
            count: self.count,
        }
    }
}

impl<S> Iterator for SegmentIter<'_, S>
where
    S: SeriesSource + ?Sized,
{
    type Item = Segment<S::Num>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.count {
            return None;
        }
        let seg = self.series.segment_at(self.pos);
        self.pos += 1;
        Some(seg)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.pos;
        (remaining, Some(remaining))
    }
}

impl<S> ExactSizeIterator for SegmentIter<'_, S>
where
    S: SeriesSource + ?Sized,
{
    #[inline]
    fn len(&self) -> usize {
        self.count - self.pos
    }
}
