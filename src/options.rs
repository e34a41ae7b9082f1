//! Per-trail configuration.
//!
//! The build-time `source-location` feature (on by default) decides what
//! [`TrailOptions::default()`] returns. Options can also be passed to the
//! `*_with_options` constructors of [`Trail`], which makes message-only
//! trails available regardless of the feature set.
//!
//! [`Trail`]: crate::Trail

/// Controls how provenance records are written into a [`Trail`].
///
/// [`Trail`]: crate::Trail
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrailOptions {
    /// When `true`, every provenance record carries
    /// `( <file>:<line> , in <function>() )    ->  ` after its newline.
    /// When `false`, a record is only the newline separator.
    pub include_source_location: bool,
}

impl TrailOptions {
    /// The options selected by the enabled cargo features.
    pub const DEFAULT: Self = Self {
        include_source_location: cfg!(feature = "source-location"),
    };

    /// Options that always write file, line and function.
    #[must_use]
    pub const fn with_source_location() -> Self {
        Self {
            include_source_location: true,
        }
    }

    /// Options that write message-only trails.
    #[must_use]
    pub const fn message_only() -> Self {
        Self {
            include_source_location: false,
        }
    }
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_follows_feature() {
        assert_eq!(
            TrailOptions::default().include_source_location,
            cfg!(feature = "source-location")
        );
    }

    #[test]
    fn test_explicit_constructors() {
        assert!(TrailOptions::with_source_location().include_source_location);
        assert!(!TrailOptions::message_only().include_source_location);
    }
}
