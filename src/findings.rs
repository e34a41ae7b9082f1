//! Collecting several failures into one trail before deciding to fail.
//!
//! Input validation often wants to report every problem at once rather than
//! bail out on the first one. A [`Findings`] collector owns a [`Trail`]
//! seeded up front, lets the caller [`record`](Findings::record) any number
//! of findings, and only turns into an error if at least one was recorded.
//!
//! ```
//! use calltrail::{Findings, site};
//!
//! fn validate(a: &str, b: &str) -> Result<(i32, i32), calltrail::Trail> {
//!     let mut findings = Findings::headline(site!(), "Error parsing your numbers!");
//!
//!     let parsed_a = a.parse::<i32>();
//!     if let Err(e) = &parsed_a {
//!         findings.record(site!()).push("Error parsing integer 'a': ").push(e);
//!     }
//!     let parsed_b = b.parse::<i32>();
//!     if let Err(e) = &parsed_b {
//!         findings.record(site!()).push("Error parsing integer 'b': ").push(e);
//!     }
//!
//!     findings.finish()?;
//!     Ok((parsed_a.unwrap_or_default(), parsed_b.unwrap_or_default()))
//! }
//!
//! assert_eq!(validate("3", "4").ok(), Some((3, 4)));
//! let trail = validate("x", "y").unwrap_err();
//! assert!(trail.as_str().contains("'a'") && trail.as_str().contains("'b'"));
//! ```

use core::fmt;

use crate::{Site, Trail, TrailOptions};

/// A [`Trail`] under construction that counts the findings recorded in it.
#[derive(Clone, Debug)]
pub struct Findings {
    trail: Trail,
    count: usize,
}

impl Findings {
    /// Starts a collector seeded with a record for `site`.
    #[must_use]
    pub fn new(site: Site) -> Self {
        Self::with_options(site, TrailOptions::default())
    }

    /// Starts a collector seeded with a record for `site` followed by
    /// `headline`, which describes the failure as a whole.
    #[must_use]
    pub fn headline(site: Site, headline: impl fmt::Display) -> Self {
        let mut findings = Self::new(site);
        findings.note(headline);
        findings
    }

    /// Starts a collector whose trail uses explicit `options`.
    #[must_use]
    pub fn with_options(site: Site, options: TrailOptions) -> Self {
        Self {
            trail: Trail::with_options(site, options),
            count: 0,
        }
    }

    /// Appends free text to the trail without recording a finding.
    pub fn note(&mut self, value: impl fmt::Display) -> &mut Self {
        self.trail.push(value);
        self
    }

    /// Records a finding at `site` and returns the trail for its text.
    pub fn record(&mut self, site: Site) -> &mut Trail {
        self.count += 1;
        self.trail.push_site(site)
    }

    /// Number of findings recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no finding has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The trail as built so far.
    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Returns the trail as an error if any finding was recorded.
    pub fn finish(self) -> Result<(), Trail> {
        if self.count == 0 {
            Ok(())
        } else {
            Err(self.trail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: Site = Site::new("main.rs", 50, "main");
    const A: Site = Site::new("main.rs", 61, "main");
    const B: Site = Site::new("main.rs", 67, "main");

    #[test]
    fn test_no_findings_is_ok() {
        let mut findings = Findings::with_options(HEAD, TrailOptions::with_source_location());
        findings.note("Error parsing your numbers!");
        assert!(findings.is_empty());
        assert!(findings.finish().is_ok());
    }

    #[test]
    fn test_findings_are_raised_in_order() {
        let mut findings = Findings::with_options(HEAD, TrailOptions::with_source_location());
        findings.note("Error parsing your numbers!");
        findings
            .record(A)
            .push("Error parsing integer 'a': bad, fail, eof = ")
            .push(0)
            .push(1)
            .push(0);
        findings
            .record(B)
            .push("Error parsing integer 'b': bad, fail, eof = ")
            .push("010");
        assert_eq!(findings.len(), 2);

        let trail = findings.finish().unwrap_err();
        assert_eq!(
            trail.as_str(),
            "\n( main.rs:50 , in main() )    ->  Error parsing your numbers!\
             \n( main.rs:61 , in main() )    ->  Error parsing integer 'a': bad, fail, eof = 010\
             \n( main.rs:67 , in main() )    ->  Error parsing integer 'b': bad, fail, eof = 010"
        );
    }

    #[test]
    fn test_headline_follows_seed_record() {
        let findings = Findings::headline(HEAD, "oops");
        assert_eq!(findings.trail(), &Trail::new(HEAD).with("oops"));
    }
}
