/// Tolerance based equality for the floating point coordinates and distances this crate derives.
///
/// Sweep results such as bounding corners, winding sums, and point to segment distances come out
/// of chains of float arithmetic, so exact `==` rarely holds between values that are
/// geometrically the same. [Point](crate::core::math::Point) and
/// [Segment](crate::core::math::Segment) build their `fuzzy_eq` comparisons on this trait.
///
/// Series construction itself never compares fuzzily: the explicit closure rule of
/// [SeriesSource::segment_count](crate::series::SeriesSource::segment_count) is defined on exact
/// point equality.
///
/// # Examples
///
/// ```
/// # use planar_series::core::traits::FuzzyEq;
/// let run = 0.1 + 0.2;
/// assert_ne!(run, 0.3);
/// assert!(run.fuzzy_eq(0.3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon used by [FuzzyEq::fuzzy_eq].
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using the default [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

impl FuzzyEq for f32 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1.0e-8
    }

    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
        (*self - other).abs() < fuzzy_epsilon
    }
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1.0e-8
    }

    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
        (*self - other).abs() < fuzzy_epsilon
    }
}
