use super::{point, Point};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed axis-aligned rectangle defined by `min` and `max` corners with `min.x <= max.x` and
/// `min.y <= max.y`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect<T = f64> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl<T> Rect<T>
where
    T: Real,
{
    /// Create a new rectangle from `min` and `max` corners.
    pub fn new(min: Point<T>, max: Point<T>) -> Self {
        Rect { min, max }
    }

    /// Create a degenerate rectangle covering the single point given.
    pub fn from_point(p: Point<T>) -> Self {
        Rect { min: p, max: p }
    }

    /// Grow the rectangle just enough to cover `p`.
    pub fn expand_to_include(&mut self, p: Point<T>) {
        if p.x < self.min.x {
            self.min.x = p.x;
        } else if p.x > self.max.x {
            self.max.x = p.x;
        }
        if p.y < self.min.y {
            self.min.y = p.y;
        } else if p.y > self.max.y {
            self.max.y = p.y;
        }
    }

    /// Closed interval overlap test on both axes (rectangles sharing only an edge or corner still
    /// intersect).
    pub fn intersects(&self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns true if `p` lies inside the rectangle or on its boundary.
    pub fn contains_point(&self, p: Point<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns true if `other` lies fully inside this rectangle (boundaries included).
    pub fn contains_rect(&self, other: Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Create a new rectangle offset by `dx` and `dy`.
    pub fn translate(&self, dx: T, dy: T) -> Self {
        Rect::new(self.min.translate(dx, dy), self.max.translate(dx, dy))
    }

    /// Euclidean distance from `p` to the rectangle, zero if `p` is inside or on the boundary.
    pub fn distance_to_point(&self, p: Point<T>) -> T {
        if self.contains_point(p) {
            return T::zero();
        }
        let mut dist_squared = T::zero();
        let dx = p.x.max(self.min.x) - p.x.min(self.max.x);
        if dx > T::zero() {
            dist_squared = dist_squared + dx * dx;
        }
        let dy = p.y.max(self.min.y) - p.y.min(self.max.y);
        if dy > T::zero() {
            dist_squared = dist_squared + dy * dy;
        }
        dist_squared.sqrt()
    }
}

/// Shorthand [Rect] constructor from corner coordinates.
#[inline(always)]
pub fn rect<T>(min_x: T, min_y: T, max_x: T, max_y: T) -> Rect<T>
where
    T: Real,
{
    Rect::new(point(min_x, min_y), point(max_x, max_y))
}
