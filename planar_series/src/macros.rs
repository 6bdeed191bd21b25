/// Macro used for implementing series macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct an open [Series](crate::series::Series) with default index options from a list of
/// (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use planar_series::series_open;
/// # use planar_series::core::math::point;
/// # use planar_series::series::SeriesSource;
/// let series = series_open![(5.0, 5.0), (10.0, 10.0)];
/// assert!(!series.is_closed());
/// assert_eq!(series.segment_count(), 1);
/// assert_eq!(series.at(1), point(10.0, 10.0));
/// ```
#[macro_export]
macro_rules! series_open {
    ($( $p:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($p) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                points.push($crate::core::math::point($p.0, $p.1));
            )*
            $crate::series::Series::new(
                points,
                false,
                &$crate::series::IndexOptions::default(),
            )
        }
    };
}

/// Construct a closed [Series](crate::series::Series) with default index options from a list of
/// (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use planar_series::series_closed;
/// # use planar_series::series::SeriesSource;
/// let series = series_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
/// assert!(series.is_closed());
/// assert_eq!(series.segment_count(), 3);
/// ```
#[macro_export]
macro_rules! series_closed {
    ($( $p:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($p) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                points.push($crate::core::math::point($p.0, $p.1));
            )*
            $crate::series::Series::new(
                points,
                true,
                &$crate::series::IndexOptions::default(),
            )
        }
    };
}
