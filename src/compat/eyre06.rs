//! Absorb [`eyre::Report`] values.
//!
//! This module specifically supports `eyre` version 0.6.x. To enable this
//! integration, add the `compat-eyre06` feature flag to your `Cargo.toml`.
//!
//! Works like the [`anyhow1`](super::anyhow1) integration: a report that
//! wraps a [`Trail`] contributes the trail's chain, any other report
//! contributes its outermost message.
//!
//! ```
//! use calltrail::{Absorbed, Site, Trail, TrailOptions};
//!
//! let report = eyre::eyre!("quota exceeded");
//! let trail = Trail::absorbing_with_options(
//!     &Absorbed::from(&report),
//!     Site::new("api.rs", 40, "upload"),
//!     TrailOptions::message_only(),
//! );
//! assert_eq!(trail.as_str(), "\nquota exceeded\n");
//! ```
//!
//! [`Trail`]: crate::Trail

use crate::{Trail, absorb::Absorbed};

impl<'a> From<&'a eyre::Report> for Absorbed<'a> {
    fn from(report: &'a eyre::Report) -> Self {
        match report.downcast_ref::<Trail>() {
            Some(trail) => Absorbed::Chain(trail.as_str()),
            None => Absorbed::message(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::{Absorbed, Site, Trail, TrailOptions};

    const SITE: Site = Site::new("e.rs", 12, "report");

    #[test]
    fn test_plain_eyre_report_is_summarized() {
        let report = eyre::eyre!("stale handle");
        let trail = Trail::absorbing_with_options(
            &Absorbed::from(&report),
            SITE,
            TrailOptions::message_only(),
        );
        assert_eq!(trail.as_str(), "\nstale handle\n");
    }

    #[test]
    fn test_wrapped_trail_is_copied() {
        let inner = Trail::with_options(
            Site::new("f.rs", 2, "inner"),
            TrailOptions::with_source_location(),
        )
        .with("bad");
        let expected = format!("{inner}\n( e.rs:12 , in report() )    ->  ");

        let report = eyre::Report::new(inner);
        let trail = Trail::absorbing_with_options(
            &Absorbed::from(&report),
            SITE,
            TrailOptions::with_source_location(),
        );
        assert_eq!(trail.as_str(), expected);
    }
}
