//! The [`Trail`] error type and its text buffer.

use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::{
    Site, TrailOptions,
    absorb::{Absorb, Absorbed},
};

/// An error value that accumulates a human-readable call-site trail.
///
/// A [`Trail`] owns a single text buffer. Each raise, re-raise or append
/// site adds a provenance record (see [`Site`]) and free text follows the
/// most recent record. The rendered output is the buffer itself:
///
/// ```text
/// \n( <file>:<line> , in <function>() )    ->  <free text>
/// \n( <file>:<line> , in <function>() )    ->  <free text>
/// ```
///
/// The buffer only ever grows. Nothing is inserted or rewritten at render
/// time, so [`Display`], [`Debug`] and [`Trail::as_str`] all produce the
/// same text.
///
/// # Examples
///
/// ```
/// use calltrail::{Site, Trail};
///
/// let mut trail = Trail::new(Site::new("math.rs", 20, "inverse"));
/// trail.push("Error: I can't take the inverse of ").push(0);
///
/// let caller = Trail::absorbing(&trail, Site::new("math.rs", 31, "multiply_inverse"))
///     .with("Called from multiply_inverse");
///
/// assert_eq!(
///     caller.to_string(),
///     "\n( math.rs:20 , in inverse() )    ->  Error: I can't take the inverse of 0\
///      \n( math.rs:31 , in multiply_inverse() )    ->  Called from multiply_inverse"
/// );
/// ```
///
/// [`Display`]: core::fmt::Display
/// [`Debug`]: core::fmt::Debug
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Trail {
    text: String,
    options: TrailOptions,
}

impl Trail {
    /// Creates a trail seeded with one provenance record for `site`.
    ///
    /// Uses [`TrailOptions::default()`], so whether the record carries the
    /// source location is decided by the `source-location` feature.
    #[must_use]
    pub fn new(site: Site) -> Self {
        Self::with_options(site, TrailOptions::default())
    }

    /// Creates a trail seeded with one provenance record for `site`, using
    /// explicit `options`.
    ///
    /// ```
    /// use calltrail::{Site, Trail, TrailOptions};
    ///
    /// let trail = Trail::with_options(Site::new("a.rs", 1, "f"), TrailOptions::message_only());
    /// assert_eq!(trail.as_str(), "\n");
    /// ```
    #[must_use]
    pub fn with_options(site: Site, options: TrailOptions) -> Self {
        let mut trail = Self {
            text: String::new(),
            options,
        };
        trail.push_site(site);
        trail
    }

    /// Creates a trail from another error, recorded at `site`.
    ///
    /// If `error` holds a [`Trail`] its whole text is copied verbatim and a
    /// single record for `site` follows. Any other error only offers its
    /// description, so a record for `site` is written in front of that
    /// description and then another record for `site` follows it. The second
    /// record keeps the layout of the same-type case: free text appended
    /// afterwards always lands behind the record of the absorbing site.
    ///
    /// ```
    /// use calltrail::{Site, Trail};
    ///
    /// #[derive(Debug)]
    /// struct Boom;
    /// impl core::fmt::Display for Boom {
    ///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    ///         f.write_str("boom")
    ///     }
    /// }
    /// impl core::error::Error for Boom {}
    ///
    /// let trail = Trail::absorbing(&Boom, Site::new("F", 7, "g"));
    /// assert_eq!(
    ///     trail.as_str(),
    ///     "\n( F:7 , in g() )    ->  boom\n( F:7 , in g() )    ->  "
    /// );
    /// ```
    #[must_use]
    pub fn absorbing<E>(error: &E, site: Site) -> Self
    where
        E: Absorb + ?Sized,
    {
        Self::absorbing_with_options(error, site, TrailOptions::default())
    }

    /// Same as [`Trail::absorbing`], using explicit `options` for the records
    /// this trail writes. Copied chains keep whatever records they already
    /// contain.
    #[must_use]
    pub fn absorbing_with_options<E>(error: &E, site: Site, options: TrailOptions) -> Self
    where
        E: Absorb + ?Sized,
    {
        let mut trail = Self {
            text: String::new(),
            options,
        };
        trail.absorb(error, site);
        trail
    }

    /// Appends a provenance record for `site`.
    ///
    /// The record is a newline followed, when source locations are enabled,
    /// by `( <file>:<line> , in <function>() )    ->  `. Returns `self` so
    /// free text can be chained directly behind the record.
    pub fn push_site(&mut self, site: Site) -> &mut Self {
        self.text.push('\n');
        if self.options.include_source_location {
            // Writing into a `String` cannot fail.
            let _ = write!(self.text, "{site}");
        }
        self
    }

    /// Appends the [`Display`] rendering of `value` without any separator.
    ///
    /// ```
    /// use calltrail::{Site, Trail, TrailOptions};
    ///
    /// let mut trail = Trail::with_options(Site::new("a.rs", 1, "f"), TrailOptions::message_only());
    /// trail.push("a = ").push(3).push(", ok = ").push(false);
    /// assert_eq!(trail.as_str(), "\na = 3, ok = false");
    /// ```
    ///
    /// [`Display`]: core::fmt::Display
    pub fn push(&mut self, value: impl fmt::Display) -> &mut Self {
        let _ = write!(self.text, "{value}");
        self
    }

    /// Absorbs `error` into this trail at `site`.
    ///
    /// Follows the same rules as [`Trail::absorbing`]: a chain is copied as is,
    /// a plain message gets a record of its own, and one more record for
    /// `site` is always appended at the end.
    pub fn absorb<E>(&mut self, error: &E, site: Site) -> &mut Self
    where
        E: Absorb + ?Sized,
    {
        match error.absorbed() {
            Absorbed::Chain(chain) => self.text.push_str(chain),
            Absorbed::Message(message) => {
                self.push_site(site).text.push_str(&message);
            }
        }
        self.push_site(site)
    }

    /// Consuming form of [`Trail::push`], for use in raise expressions.
    ///
    /// ```
    /// use calltrail::{Site, Trail};
    ///
    /// fn check(b: i32) -> Result<i32, Trail> {
    ///     if b == 0 {
    ///         return Err(Trail::new(Site::new("c.rs", 2, "check")).with("b is zero"));
    ///     }
    ///     Ok(b)
    /// }
    ///
    /// assert!(check(0).is_err());
    /// ```
    #[must_use]
    pub fn with(mut self, value: impl fmt::Display) -> Self {
        self.push(value);
        self
    }

    /// Consuming form of [`Trail::push_site`].
    #[must_use]
    pub fn at(mut self, site: Site) -> Self {
        self.push_site(site);
        self
    }

    /// The accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the trail and returns the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// The options this trail writes its records with.
    #[must_use]
    pub fn options(&self) -> TrailOptions {
        self.options
    }

    /// Length of the accumulated text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if nothing has been written yet.
    ///
    /// Every constructor writes at least one record, so a trail is never
    /// empty in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Write for Trail {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

impl fmt::Debug for Trail {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

impl core::error::Error for Trail {}

impl AsRef<str> for Trail {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Trail> for String {
    fn from(trail: Trail) -> Self {
        trail.text
    }
}

#[cfg(feature = "std")]
impl From<Trail> for std::io::Error {
    fn from(trail: Trail) -> Self {
        std::io::Error::other(trail)
    }
}
