/// Captures the current call site as a [`Site`].
///
/// Expands to the file, line and the unqualified name of the enclosing
/// function. Inside closures and `async` blocks the name of the function
/// that contains them is used.
///
/// [`Site`]: crate::Site
///
/// # Examples
///
/// ```
/// use calltrail::site;
///
/// fn connect() -> calltrail::Site {
///     site!()
/// }
///
/// let site = connect();
/// assert_eq!(site.function(), "connect");
/// assert_eq!(site.file(), file!());
/// ```
#[macro_export]
macro_rules! site {
    () => {
        $crate::Site::new(
            $crate::__private::file!(),
            $crate::__private::line!(),
            {
                fn __calltrail_marker() {}
                $crate::__private::function_name($crate::__private::type_name_of_val(
                    &__calltrail_marker,
                ))
            },
        )
    };
}

/// Creates a fresh [`Trail`] at the current call site.
///
/// Without arguments the trail holds only the provenance record. Any
/// arguments are interpreted like [`format!()`] and appended as free text
/// behind the record.
///
/// [`Trail`]: crate::Trail
/// [`format!()`]: alloc::format
///
/// # Examples
///
/// ```
/// use calltrail::trail;
///
/// fn inverse(i: i32) -> Result<f64, calltrail::Trail> {
///     if i == 0 {
///         return Err(trail!("Error: I can't take the inverse of {}!", i));
///     }
///     Ok(1.0 / f64::from(i))
/// }
///
/// let trail = inverse(0).unwrap_err();
/// assert!(trail.as_str().ends_with(" , in inverse() )    ->  Error: I can't take the inverse of 0!"));
/// ```
#[macro_export]
macro_rules! trail {
    () => {
        $crate::Trail::new($crate::site!())
    };
    ($($arg:tt)+) => {
        $crate::Trail::new($crate::site!()).with($crate::__private::format_args!($($arg)+))
    };
}

/// Return early with a fresh [`Trail`].
///
/// Takes the same arguments as [`trail!`] and is equivalent to writing
/// `return Err(trail!(...).into());`
///
/// [`Trail`]: crate::Trail
/// [`trail!`]: crate::trail!
///
/// # Examples
///
/// ```
/// use calltrail::{Trail, bail};
///
/// fn check(value: i32) -> Result<(), Trail> {
///     if value < 0 {
///         bail!("Value must be non-negative, got {}", value);
///     }
///     Ok(())
/// }
///
/// assert!(check(-1).is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::trail!($($args)*).into())
    };
}

/// Creates a new [`Trail`] absorbing an error at the current call site.
///
/// The first argument is the error value (it is borrowed, not moved). Any
/// further arguments are interpreted like [`format!()`] and appended behind
/// the record of this site.
///
/// A [`Trail`] is copied verbatim; any other error gets a record of its own
/// around its message before the record of this site, see
/// [`Trail::absorbing`].
///
/// [`Trail`]: crate::Trail
/// [`Trail::absorbing`]: crate::Trail::absorbing
/// [`format!()`]: alloc::format
///
/// # Examples
///
/// ```
/// use calltrail::{Trail, trail, trail_absorb};
///
/// fn inverse(i: i32) -> Result<f64, Trail> {
///     if i == 0 {
///         return Err(trail!("Error: I can't take the inverse of 0!"));
///     }
///     Ok(1.0 / f64::from(i))
/// }
///
/// fn multiply_inverse(a: i32, b: i32) -> Result<f64, Trail> {
///     let product = inverse(a).and_then(|x| Ok(x * inverse(b)?));
///     product.map_err(|e| trail_absorb!(e, "Called from multiply_inverse: a = {a} b = {b}"))
/// }
///
/// let trail = multiply_inverse(3, 0).unwrap_err();
/// let text = trail.as_str();
/// assert!(text.find("inverse of 0!").unwrap() < text.find("a = 3 b = 0").unwrap());
/// ```
#[macro_export]
macro_rules! trail_absorb {
    ($error:expr $(,)?) => {
        $crate::Trail::absorbing(&$error, $crate::site!())
    };
    ($error:expr, $($arg:tt)+) => {
        $crate::Trail::absorbing(&$error, $crate::site!())
            .with($crate::__private::format_args!($($arg)+))
    };
}

/// Appends to an existing [`Trail`] at the current call site.
///
/// - `trail_append!(trail)` appends a provenance record and evaluates to
///   `&mut Trail` so free text can be chained.
/// - `trail_append!(trail, "fmt", args...)` appends a record followed by
///   the formatted text.
/// - `trail_append!(trail, absorb error)` absorbs `error` into `trail`, see
///   [`Trail::absorb`].
///
/// None of the forms return or raise anything.
///
/// [`Trail`]: crate::Trail
/// [`Trail::absorb`]: crate::Trail::absorb
///
/// # Examples
///
/// ```
/// use calltrail::{Trail, TrailOptions, site, trail_append};
///
/// let mut trail = Trail::with_options(site!(), TrailOptions::message_only());
/// trail.push("Error parsing your numbers!");
/// trail_append!(trail, "Error parsing integer '{}'", 'a');
/// trail_append!(trail).push("Error parsing integer 'b'");
/// assert_eq!(
///     trail.as_str(),
///     "\nError parsing your numbers!\nError parsing integer 'a'\nError parsing integer 'b'"
/// );
/// ```
#[macro_export]
macro_rules! trail_append {
    ($trail:expr $(,)?) => {
        $trail.push_site($crate::site!())
    };
    ($trail:expr, absorb $error:expr $(,)?) => {
        $trail.absorb(&$error, $crate::site!())
    };
    ($trail:expr, $($arg:tt)+) => {
        $trail
            .push_site($crate::site!())
            .push($crate::__private::format_args!($($arg)+))
    };
}
