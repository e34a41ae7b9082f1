//! Absorb [`anyhow::Error`] values.
//!
//! This module specifically supports `anyhow` version 1.x. To enable this
//! integration, add the `compat-anyhow1` feature flag to your `Cargo.toml`.
//!
//! [`anyhow::Error`] does not implement [`core::error::Error`], so it goes
//! through [`Absorbed`]: an error that was created from a [`Trail`] still
//! holds it and contributes the trail verbatim, any other error contributes
//! its outermost message, the same text `{}` prints for it. A trail wrapped
//! in [`anyhow::Context`] is still found by anyhow's downcast, so it is
//! copied as is and the context message is not part of the copy.
//!
//! ```
//! use calltrail::{Absorbed, Site, Trail, TrailOptions};
//!
//! fn legacy() -> anyhow::Result<()> {
//!     anyhow::bail!("socket closed");
//! }
//!
//! let error = legacy().unwrap_err();
//! let trail = Trail::absorbing_with_options(
//!     &Absorbed::from(&error),
//!     Site::new("net.rs", 9, "sync"),
//!     TrailOptions::message_only(),
//! );
//! assert_eq!(trail.as_str(), "\nsocket closed\n");
//! ```
//!
//! Since [`Trail`] is an error, `?` converts it into [`anyhow::Error`]:
//!
//! ```
//! use calltrail::{Trail, site};
//!
//! fn calltrail_function() -> Result<(), Trail> {
//!     Err(Trail::new(site!()).with("bad header"))
//! }
//!
//! fn anyhow_function() -> anyhow::Result<()> {
//!     calltrail_function()?;
//!     Ok(())
//! }
//!
//! assert!(anyhow_function().unwrap_err().downcast_ref::<Trail>().is_some());
//! ```
//!
//! [`Trail`]: crate::Trail
//! [`Absorbed`]: crate::Absorbed

use crate::{Trail, absorb::Absorbed};

impl<'a> From<&'a anyhow::Error> for Absorbed<'a> {
    fn from(error: &'a anyhow::Error) -> Self {
        match error.downcast_ref::<Trail>() {
            Some(trail) => Absorbed::Chain(trail.as_str()),
            None => Absorbed::message(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::{Absorbed, Site, Trail, TrailOptions};

    const SITE: Site = Site::new("x.rs", 3, "bridge");

    #[test]
    fn test_plain_anyhow_error_is_summarized() {
        let error = anyhow::anyhow!("refused");
        let trail = Trail::absorbing_with_options(
            &Absorbed::from(&error),
            SITE,
            TrailOptions::with_source_location(),
        );
        assert_eq!(
            trail.as_str(),
            "\n( x.rs:3 , in bridge() )    ->  refused\n( x.rs:3 , in bridge() )    ->  "
        );
    }

    #[test]
    fn test_wrapped_trail_is_copied() {
        let inner = Trail::with_options(
            Site::new("y.rs", 8, "inner"),
            TrailOptions::with_source_location(),
        )
        .with("bad");
        let expected = format!("{inner}\n( x.rs:3 , in bridge() )    ->  ");

        let error = anyhow::Error::from(inner);
        let trail = Trail::absorbing_with_options(
            &Absorbed::from(&error),
            SITE,
            TrailOptions::with_source_location(),
        );
        assert_eq!(trail.as_str(), expected);
    }

    #[test]
    fn test_trail_below_context_is_still_found() {
        let inner =
            Trail::with_options(Site::new("y.rs", 8, "inner"), TrailOptions::message_only())
                .with("bad");
        let error = anyhow::Error::from(inner).context("while syncing");
        assert_eq!(Absorbed::from(&error), Absorbed::Chain("\nbad"));
    }
}
