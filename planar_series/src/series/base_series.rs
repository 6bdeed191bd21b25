use super::internal::quad_build::QuadNode;
use super::{IndexKind, IndexOptions, SeriesSource};
use crate::core::{
    math::{Point, Rect},
    traits::Real,
};

/// Concrete series data representation: an ordered sequence of 2D points with a closed/open
/// flag, metadata derived once at construction (bounding rectangle, convexity, winding
/// direction), and an optional frozen segment index. Implements [SeriesSource], which provides
/// all the query operations.
///
/// Fields are private because the derived metadata and the serialized index must stay consistent
/// with the points; a fully constructed series is immutable and safe to share across threads.
///
/// # Examples
///
/// ```
/// # use planar_series::core::math::{point, rect};
/// # use planar_series::series::{IndexOptions, Series, SeriesSource};
/// let series = Series::new(
///     vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0), point(0.0, 10.0)],
///     true,
///     &IndexOptions::default(),
/// );
/// assert_eq!(series.bounding_rect(), rect(0.0, 0.0, 10.0, 10.0));
/// assert_eq!(series.segment_count(), 4);
/// assert!(series.is_convex());
/// assert!(!series.is_clockwise());
/// ```
#[derive(Debug, Clone)]
pub struct Series<T = f64> {
    points: Vec<Point<T>>,
    is_closed: bool,
    is_clockwise: bool,
    is_convex: bool,
    index_kind: IndexKind,
    index: Vec<u8>,
    rect: Rect<T>,
}

impl<T> Series<T>
where
    T: Real,
{
    /// Create a new series taking ownership of `points`. The metadata sweep runs once here; the
    /// segment index is built and frozen when `options` requests one, `options.min_points` is
    /// non-zero, and the series has at least that many points.
    pub fn new(points: Vec<Point<T>>, is_closed: bool, options: &IndexOptions) -> Self {
        let (is_convex, rect, is_clockwise) = process_points(&points, is_closed);
        let mut series = Series {
            points,
            is_closed,
            is_clockwise,
            is_convex,
            index_kind: IndexKind::None,
            index: Vec::new(),
            rect,
        };
        if options.kind == IndexKind::QuadTree
            && options.min_points != 0
            && series.points.len() >= options.min_points
        {
            series.index_kind = options.kind;
            series.build_index();
        }
        series
    }

    /// Same as [Series::new] but copies the points from a slice.
    pub fn from_points(points: &[Point<T>], is_closed: bool, options: &IndexOptions) -> Self {
        Series::new(points.to_vec(), is_closed, options)
    }

    /// View of the underlying points.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Kind of segment index this series carries. Always in sync with
    /// [SeriesSource::index_bytes]: [IndexKind::QuadTree] if and only if a serialized index was
    /// built (a series below the build threshold stays [IndexKind::None]).
    #[inline]
    pub fn index_kind(&self) -> IndexKind {
        self.index_kind
    }

    /// Create a new series with all points offset by `dx` and `dy`. The metadata is recomputed
    /// and the segment index is rebuilt if and only if this series has one.
    pub fn translate(&self, dx: T, dy: T) -> Series<T> {
        let points = self
            .points
            .iter()
            .map(|p| p.translate(dx, dy))
            .collect::<Vec<_>>();
        let mut moved = Series::new(points, self.is_closed, &IndexOptions::no_indexing());
        moved.index_kind = self.index_kind;
        if !self.index.is_empty() {
            moved.build_index();
        }
        moved
    }

    fn build_index(&mut self) {
        if !self.index.is_empty() {
            // already built
            return;
        }
        let bounds = self.rect;
        let mut root = QuadNode::default();
        for i in 0..self.segment_count() {
            let seg_rect = self.segment_at(i).bounding_rect();
            root.insert(&*self, bounds, seg_rect, i, 0);
        }
        let mut data = vec![self.index_kind.as_byte(), 0, 0, 0, 0];
        root.compress(&mut data);
        let total = data.len() as u32;
        data[1..5].copy_from_slice(&total.to_le_bytes());
        self.index = data;
    }
}

impl<T> SeriesSource for Series<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Point<T>> {
        self.points.get(index).copied()
    }

    #[inline]
    fn at(&self, index: usize) -> Point<T> {
        self.points[index]
    }

    #[inline]
    fn bounding_rect(&self) -> Rect<T> {
        self.rect
    }

    #[inline]
    fn is_convex(&self) -> bool {
        self.is_convex
    }

    #[inline]
    fn is_clockwise(&self) -> bool {
        self.is_clockwise
    }

    #[inline]
    fn index_bytes(&self) -> &[u8] {
        &self.index
    }
}

/// Single pass over the points computing convexity, the bounding rectangle, and the winding
/// direction. Closed series are traversed cyclically (the pair and triple selection wraps at the
/// tail); open series are traversed linearly. Counts below the segment threshold return the zero
/// rectangle and false flags.
fn process_points<T>(points: &[Point<T>], is_closed: bool) -> (bool, Rect<T>, bool)
where
    T: Real,
{
    let n = points.len();
    if (is_closed && n < 3) || n < 2 {
        return (false, Rect::default(), false);
    }
    let mut rect = Rect::from_point(points[0]);
    let mut winding_sum = T::zero();
    let mut concave = false;
    let mut dir = 0i8;
    for i in 0..n {
        let a = points[i];
        rect.expand_to_include(a);
        let wraps = i + 1 == n;
        if wraps && !is_closed {
            break;
        }
        let b = if wraps { points[0] } else { points[i + 1] };

        winding_sum = winding_sum + (b.x - a.x) * (b.y + a.y);

        if concave {
            continue;
        }
        let c = if wraps {
            points[1]
        } else if i + 2 == n {
            if !is_closed {
                // open series have no triple ending at the wrap
                continue;
            }
            points[0]
        } else {
            points[i + 2]
        };
        let z_cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
        if dir == 0 {
            if z_cross < T::zero() {
                dir = -1;
            } else if z_cross > T::zero() {
                dir = 1;
            }
        } else if z_cross < T::zero() {
            if dir == 1 {
                concave = true;
            }
        } else if z_cross > T::zero() && dir == -1 {
            concave = true;
        }
    }
    (!concave, rect, winding_sum > T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{point, rect};

    #[test]
    fn sweep_degenerate() {
        let two = [point(5.0, 5.0), point(10.0, 10.0)];
        assert_eq!(process_points(&two, true), (false, Rect::default(), false));
        let one = [point(5.0, 5.0)];
        assert_eq!(process_points(&one, false), (false, Rect::default(), false));
    }

    #[test]
    fn sweep_square() {
        let ccw = [
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
        ];
        let (convex, bounds, clockwise) = process_points(&ccw, true);
        assert!(convex);
        assert_eq!(bounds, rect(0.0, 0.0, 10.0, 10.0));
        assert!(!clockwise);

        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        let (convex, bounds, clockwise) = process_points(&cw, true);
        assert!(convex);
        assert_eq!(bounds, rect(0.0, 0.0, 10.0, 10.0));
        assert!(clockwise);
    }

    #[test]
    fn sweep_concave_ring() {
        let dented = [
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 4.0),
            point(2.0, 1.0),
            point(0.0, 4.0),
        ];
        let (convex, _, _) = process_points(&dented, true);
        assert!(!convex);
    }

    #[test]
    fn sweep_collinear_triples_ignored() {
        let with_collinear = [
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 4.0),
            point(0.0, 4.0),
        ];
        let (convex, _, _) = process_points(&with_collinear, true);
        assert!(convex);
    }

    #[test]
    fn sweep_open_is_linear() {
        // bends one way only; the wrap triples that would flip the sign are not taken for open
        // series
        let arc = [
            point(0.0, 0.0),
            point(2.0, 2.0),
            point(4.0, 3.0),
            point(6.0, 3.5),
        ];
        let (convex, _, _) = process_points(&arc, false);
        assert!(convex);
    }
}
