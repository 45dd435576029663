/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing contour macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct an open polygon contour through the points given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use contour_offset::contour_open;
/// # use contour_offset::core::math::Vector2;
/// let contour = contour_open![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0)];
/// assert!(!contour.is_closed());
/// assert_eq!(contour.len(), 2);
/// assert_eq!(contour[1].end(), Vector2::new(2.0, 1.0));
/// ```
#[macro_export]
macro_rules! contour_open {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                points.push($crate::core::math::Vector2::new($x.0, $x.1));
            )*
            $crate::contour::Contour::from_points(&points, false)
        }
    };
}

/// Construct a closed polygon contour through the points given as a list of (x, y) tuples, the
/// closing line back to the first point is added.
///
/// # Examples
///
/// ```
/// # use contour_offset::contour_closed;
/// # use contour_offset::core::math::Vector2;
/// let contour = contour_closed![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0)];
/// assert!(contour.is_closed());
/// assert_eq!(contour.len(), 3);
/// assert_eq!(contour[2].end(), Vector2::new(0.0, 0.0));
/// ```
#[macro_export]
macro_rules! contour_closed {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                points.push($crate::core::math::Vector2::new($x.0, $x.1));
            )*
            $crate::contour::Contour::from_points(&points, true)
        }
    };
}
