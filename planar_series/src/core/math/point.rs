use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D position. Comparison with `==` is exact, which the series segment enumeration rules rely
/// on; use [Point::fuzzy_eq] for tolerance based comparison.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Real,
{
    /// Create a new point with x and y coordinates.
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Create the origin point (x = 0, y = 0).
    pub fn origin() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Create a new point offset from this one by `dx` and `dy`.
    pub fn translate(&self, dx: T, dy: T) -> Self {
        point(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared_to(&self, other: Self) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using `T::fuzzy_epsilon()`.
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn point<T>(x: T, y: T) -> Point<T>
where
    T: Real,
{
    Point::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Point<T>> for &'a Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &'b Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);
