//! Deciding what a trail takes from another error.
//!
//! When a [`Trail`] absorbs an error it either copies an existing chain
//! verbatim (the error is, or wraps, another [`Trail`]) or it only gets a
//! rendered message to work with. The [`Absorb`] trait makes that decision
//! per error family and reports it as an [`Absorbed`] value.
//!
//! Every sized [`core::error::Error`] implements [`Absorb`] through a
//! downcast to [`Trail`]. Boxed error trait objects are covered in
//! [`compat::boxed_error`], and the `compat-*` features add the wrapper
//! types of other error libraries.
//!
//! [`Trail`]: crate::Trail
//! [`compat::boxed_error`]: crate::compat::boxed_error

use alloc::{
    borrow::Cow,
    string::{String, ToString},
};
use core::fmt;

use crate::Trail;

/// What an absorbed error contributes to a trail.
///
/// Collaborators that know up front what they hold can build this directly
/// instead of going through a downcast:
///
/// ```
/// use calltrail::{Absorbed, Site, Trail};
///
/// let site = Site::new("io.rs", 7, "read");
/// let trail = Trail::absorbing(&Absorbed::Message("disk full".into()), site);
/// assert_eq!(
///     trail.as_str(),
///     "\n( io.rs:7 , in read() )    ->  disk full\n( io.rs:7 , in read() )    ->  "
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Absorbed<'a> {
    /// The full rendered text of an existing [`Trail`], copied verbatim.
    ///
    /// [`Trail`]: crate::Trail
    Chain(&'a str),
    /// The textual description of an error that carries no chain.
    Message(Cow<'a, str>),
}

impl Absorbed<'_> {
    /// Builds the message variant from anything displayable.
    #[must_use]
    pub fn message(description: impl fmt::Display) -> Self {
        Absorbed::Message(Cow::Owned(description.to_string()))
    }

    /// Extracts the chain of a [`Trail`] if `error` is one, and falls back to
    /// the error's [`Display`] text otherwise.
    ///
    /// [`Trail`]: crate::Trail
    /// [`Display`]: core::fmt::Display
    #[must_use]
    pub fn from_dyn<'a>(error: &'a (dyn core::error::Error + 'static)) -> Absorbed<'a> {
        match error.downcast_ref::<Trail>() {
            Some(trail) => Absorbed::Chain(trail.as_str()),
            None => Absorbed::message(error),
        }
    }

    /// Returns `true` for [`Absorbed::Chain`].
    #[must_use]
    pub fn is_chain(&self) -> bool {
        matches!(self, Absorbed::Chain(_))
    }

    /// The text this value contributes, without any provenance record.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Absorbed::Chain(chain) => chain,
            Absorbed::Message(message) => message,
        }
    }

    /// Converts borrowed message text into an owned value.
    #[must_use]
    pub fn into_owned_message(self) -> String {
        match self {
            Absorbed::Chain(chain) => String::from(chain),
            Absorbed::Message(message) => message.into_owned(),
        }
    }
}

/// An error (or error-like value) that can be absorbed into a [`Trail`].
///
/// Implementations return [`Absorbed::Chain`] when the value holds a
/// [`Trail`], and [`Absorbed::Message`] with the outermost description
/// otherwise.
///
/// ```
/// use calltrail::{Absorb, Absorbed, Site, Trail};
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl core::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl core::error::Error for Timeout {}
///
/// assert_eq!(Timeout.absorbed(), Absorbed::Message("timed out".into()));
///
/// let trail = Trail::new(Site::new("net.rs", 3, "poll"));
/// assert!(trail.absorbed().is_chain());
/// ```
///
/// [`Trail`]: crate::Trail
pub trait Absorb {
    /// Reports what absorbing `self` contributes.
    fn absorbed(&self) -> Absorbed<'_>;
}

impl Absorb for Absorbed<'_> {
    fn absorbed(&self) -> Absorbed<'_> {
        match self {
            Absorbed::Chain(chain) => Absorbed::Chain(*chain),
            Absorbed::Message(message) => Absorbed::Message(Cow::Borrowed(message.as_ref())),
        }
    }
}

impl<E> Absorb for E
where
    E: core::error::Error + 'static,
{
    fn absorbed(&self) -> Absorbed<'_> {
        Absorbed::from_dyn(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Site, TrailOptions};

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_foreign_error_yields_message() {
        assert_eq!(Boom.absorbed(), Absorbed::Message(Cow::Borrowed("boom")));
        assert!(!Boom.absorbed().is_chain());
    }

    #[test]
    fn test_trail_yields_chain() {
        let mut trail =
            Trail::with_options(Site::new("a.rs", 1, "f"), TrailOptions::with_source_location());
        trail.push("inner");
        assert_eq!(trail.absorbed(), Absorbed::Chain("\n( a.rs:1 , in f() )    ->  inner"));
    }

    #[test]
    fn test_from_dyn_sees_trail_behind_trait_object() {
        let trail = Trail::new(Site::new("a.rs", 1, "f")).with("x");
        let error: &(dyn core::error::Error + 'static) = &trail;
        assert_eq!(Absorbed::from_dyn(error).text(), trail.as_str());
    }

    #[test]
    fn test_absorbed_is_its_own_absorb() {
        let tagged = Absorbed::message(42);
        assert_eq!(tagged.absorbed(), Absorbed::Message(Cow::Borrowed("42")));
        assert_eq!(tagged.into_owned_message(), "42");
    }
}
