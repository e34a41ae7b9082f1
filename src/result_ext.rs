//! Extension methods for turning `Err` values into trails at a call site.
//!
//! ```
//! use calltrail::{Trail, prelude::*};
//!
//! fn parse(input: &str) -> Result<i32, Trail> {
//!     input
//!         .trim()
//!         .parse::<i32>()
//!         .trail_context(site!(), format_args!("while parsing {input:?}"))
//! }
//!
//! let trail = parse("x").unwrap_err();
//! assert!(trail.as_str().contains("invalid digit found in string"));
//! assert!(trail.as_str().ends_with("while parsing \"x\""));
//! ```

use core::fmt;

use crate::{Site, Trail, absorb::Absorb};

mod sealed {
    pub trait Sealed {}
    impl<A, E> Sealed for Result<A, E> {}
}

/// Extension methods on [`Result`] for wrapping the error in a [`Trail`].
///
/// Every method leaves `Ok` values untouched and only does work on `Err`.
pub trait ResultExt<V, E>: sealed::Sealed {
    /// Replaces the error with a new [`Trail`] absorbing it at `site`.
    #[must_use]
    fn absorb_err(self, site: Site) -> Result<V, Trail>
    where
        E: Absorb;

    /// Like [`ResultExt::absorb_err`], then appends `text` behind the record
    /// for `site`.
    #[must_use]
    fn trail_context<T>(self, site: Site, text: T) -> Result<V, Trail>
    where
        E: Absorb,
        T: fmt::Display;

    /// Like [`ResultExt::trail_context`], computing the text only on error.
    #[must_use]
    fn trail_context_lazy<T, F>(self, site: Site, text: F) -> Result<V, Trail>
    where
        E: Absorb,
        F: FnOnce() -> T,
        T: fmt::Display;
}

impl<V, E> ResultExt<V, E> for Result<V, E> {
    #[inline(always)]
    fn absorb_err(self, site: Site) -> Result<V, Trail>
    where
        E: Absorb,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Trail::absorbing(&e, site)),
        }
    }

    #[inline(always)]
    fn trail_context<T>(self, site: Site, text: T) -> Result<V, Trail>
    where
        E: Absorb,
        T: fmt::Display,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Trail::absorbing(&e, site).with(text)),
        }
    }

    #[inline(always)]
    fn trail_context_lazy<T, F>(self, site: Site, text: F) -> Result<V, Trail>
    where
        E: Absorb,
        F: FnOnce() -> T,
        T: fmt::Display,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Trail::absorbing(&e, site).with(text())),
        }
    }
}

/// Extension methods on `Result<T, Trail>` that append to the trail in
/// place instead of copying it.
pub trait TrailResultExt<V>: sealed::Sealed {
    /// Appends a record for `site` followed by `text` to the error trail.
    #[must_use]
    fn push_context<T>(self, site: Site, text: T) -> Result<V, Trail>
    where
        T: fmt::Display;
}

impl<V> TrailResultExt<V> for Result<V, Trail> {
    #[inline(always)]
    fn push_context<T>(self, site: Site, text: T) -> Result<V, Trail>
    where
        T: fmt::Display,
    {
        self.map_err(|trail| trail.at(site).with(text))
    }
}
