//! Call-site provenance.
//!
//! A [`Site`] names the place in the source where a trail was raised,
//! re-raised or appended to. Sites are supplied explicitly by the caller,
//! usually through the [`site!`] macro which captures the file, line and
//! enclosing function at the point of expansion.
//!
//! ```
//! use calltrail::{Site, site};
//!
//! fn load() -> Site {
//!     site!()
//! }
//!
//! let here = load();
//! assert_eq!(here.function(), "load");
//! assert!(here.file().ends_with(".rs"));
//! ```
//!
//! [`site!`]: crate::site!

use core::fmt;

/// Source code location of a raise, re-raise or append.
///
/// Renders (through [`Display`]) as the provenance record
/// `( <file>:<line> , in <function>() )    ->  `.
///
/// [`Display`]: core::fmt::Display
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Site {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl Site {
    /// Creates a site from explicit parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use calltrail::Site;
    ///
    /// let site = Site::new("main.rs", 12, "main");
    /// assert_eq!(site.to_string(), "( main.rs:12 , in main() )    ->  ");
    /// ```
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Creates a site from the location of the caller.
    ///
    /// `core::panic::Location` has no notion of the enclosing function, so
    /// the function has to be passed in. Prefer [`site!`] which fills in all
    /// three parts.
    ///
    /// [`site!`]: crate::site!
    #[must_use]
    #[track_caller]
    pub fn caller(function: &'static str) -> Self {
        let location = core::panic::Location::caller();
        Self::new(location.file(), location.line(), function)
    }

    /// The source file path.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The unqualified name of the enclosing function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }
}

impl fmt::Display for Site {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "( {}:{} , in {}() )    ->  ",
            self.file, self.line, self.function
        )
    }
}

/// Reduces the type name of the marker fn generated by [`site!`] to the
/// unqualified name of the function it was declared in.
///
/// `my_crate::module::parse::{{closure}}::__calltrail_marker` becomes
/// `parse`.
///
/// [`site!`]: crate::site!
pub(crate) fn function_name(marker: &'static str) -> &'static str {
    let mut path = marker.strip_suffix("::__calltrail_marker").unwrap_or(marker);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rsplit_once("::") {
        Some((_, name)) => name,
        None => path,
    }
}
