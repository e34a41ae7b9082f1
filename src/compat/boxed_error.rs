//! Absorb boxed error trait objects.
//!
//! The blanket implementation of [`Absorb`] only covers sized error types.
//! This module adds the unsized `dyn Error` variants, so a boxed error is
//! absorbed by dereferencing the box:
//!
//! ```
//! use calltrail::{Site, Trail};
//!
//! fn parse() -> Result<u8, Box<dyn core::error::Error + Send + Sync>> {
//!     Ok("300".parse::<u8>()?)
//! }
//!
//! let error = parse().unwrap_err();
//! let trail = Trail::absorbing(&*error, Site::new("cfg.rs", 4, "load"));
//! assert!(trail.as_str().contains("number too large"));
//! ```
//!
//! A trail that was boxed on its way up is recognised again and copied
//! verbatim instead of being summarized.
//!
//! [`Absorb`]: crate::Absorb

use crate::absorb::{Absorb, Absorbed};

impl Absorb for dyn core::error::Error + 'static {
    fn absorbed(&self) -> Absorbed<'_> {
        Absorbed::from_dyn(self)
    }
}

impl Absorb for dyn core::error::Error + Send + 'static {
    fn absorbed(&self) -> Absorbed<'_> {
        Absorbed::from_dyn(self)
    }
}

impl Absorb for dyn core::error::Error + Send + Sync + 'static {
    fn absorbed(&self) -> Absorbed<'_> {
        Absorbed::from_dyn(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, format};

    use crate::{Site, Trail, TrailOptions};

    const SITE: Site = Site::new("b.rs", 5, "outer");

    #[derive(Debug, derive_more::Display, derive_more::Error)]
    #[display("connection reset")]
    struct Reset;

    #[test]
    fn test_boxed_foreign_error_is_summarized() {
        let boxed: Box<dyn core::error::Error + Send + Sync> = Box::new(Reset);
        let trail =
            Trail::absorbing_with_options(&*boxed, SITE, TrailOptions::with_source_location());
        assert_eq!(
            trail.as_str(),
            "\n( b.rs:5 , in outer() )    ->  connection reset\n( b.rs:5 , in outer() )    ->  "
        );
    }

    #[test]
    fn test_boxed_trail_is_copied() {
        let inner = Trail::with_options(
            Site::new("a.rs", 1, "inner"),
            TrailOptions::with_source_location(),
        )
        .with("first");
        let expected = format!("{inner}\n( b.rs:5 , in outer() )    ->  ");

        let boxed: Box<dyn core::error::Error> = Box::new(inner);
        let trail =
            Trail::absorbing_with_options(&*boxed, SITE, TrailOptions::with_source_location());
        assert_eq!(trail.as_str(), expected);
    }

    #[test]
    fn test_send_only_trait_object() {
        let boxed: Box<dyn core::error::Error + Send> = Box::new(Reset);
        let trail = Trail::absorbing_with_options(&*boxed, SITE, TrailOptions::message_only());
        assert_eq!(trail.as_str(), "\nconnection reset\n");
    }
}
