use super::{Point, Rect};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Directed line segment from `a` to `b`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Segment<T = f64> {
    pub a: Point<T>,
    pub b: Point<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    /// Create a new segment from endpoints `a` and `b`.
    pub fn new(a: Point<T>, b: Point<T>) -> Self {
        Segment { a, b }
    }

    /// Minimum bounding rectangle of the two endpoints.
    pub fn bounding_rect(&self) -> Rect<T> {
        let mut rect = Rect::new(self.a, self.b);
        if rect.min.x > rect.max.x {
            std::mem::swap(&mut rect.min.x, &mut rect.max.x);
        }
        if rect.min.y > rect.max.y {
            std::mem::swap(&mut rect.min.y, &mut rect.max.y);
        }
        rect
    }

    /// Create a new segment offset by `dx` and `dy`.
    pub fn translate(&self, dx: T, dy: T) -> Self {
        Segment::new(self.a.translate(dx, dy), self.b.translate(dx, dy))
    }

    /// Closest point on the segment to `p`, clamped to the segment endpoints. Degenerate segments
    /// (`a == b`) return `a`.
    pub fn closest_point_to(&self, p: Point<T>) -> Point<T> {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        let length_squared = dx * dx + dy * dy;
        if length_squared == T::zero() {
            return self.a;
        }
        let t = ((p.x - self.a.x) * dx + (p.y - self.a.y) * dy) / length_squared;
        let t = t.max(T::zero()).min(T::one());
        Point::new(self.a.x + t * dx, self.a.y + t * dy)
    }

    /// Euclidean distance from `p` to the closest point on the segment.
    pub fn distance_to_point(&self, p: Point<T>) -> T {
        self.closest_point_to(p).distance_to(p)
    }

    /// Fuzzy equal comparison with another segment using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.a.fuzzy_eq_eps(other.a, fuzzy_epsilon) && self.b.fuzzy_eq_eps(other.b, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another segment using `T::fuzzy_epsilon()`.
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
