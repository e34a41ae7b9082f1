use core::fmt;

use crate::{Site, Trail};

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for Option<T> {}
}

/// Extension methods on [`Option`] for raising a [`Trail`] on `None`.
///
/// ```
/// use calltrail::{Trail, prelude::*};
///
/// fn port(config: &[(&str, u16)]) -> Result<u16, Trail> {
///     config
///         .iter()
///         .find(|(key, _)| *key == "port")
///         .map(|(_, value)| *value)
///         .ok_or_trail(site!(), "missing key: port")
/// }
///
/// assert_eq!(port(&[("port", 80)]).ok(), Some(80));
/// assert!(port(&[]).unwrap_err().as_str().ends_with("missing key: port"));
/// ```
pub trait OptionExt<T>: sealed::Sealed {
    /// Converts `None` into a fresh [`Trail`] raised at `site` with `text`.
    fn ok_or_trail<M>(self, site: Site, text: M) -> Result<T, Trail>
    where
        M: fmt::Display;

    /// Like [`OptionExt::ok_or_trail`], computing the text only on `None`.
    fn ok_or_trail_lazy<M, F>(self, site: Site, text: F) -> Result<T, Trail>
    where
        F: FnOnce() -> M,
        M: fmt::Display;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline(always)]
    fn ok_or_trail<M>(self, site: Site, text: M) -> Result<T, Trail>
    where
        M: fmt::Display,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(Trail::new(site).with(text)),
        }
    }

    #[inline(always)]
    fn ok_or_trail_lazy<M, F>(self, site: Site, text: F) -> Result<T, Trail>
    where
        F: FnOnce() -> M,
        M: fmt::Display,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(Trail::new(site).with(text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: Site = Site::new("o.rs", 6, "lookup");

    #[test]
    fn test_some_passes_through() {
        assert_eq!(Some(5).ok_or_trail(SITE, "missing").ok(), Some(5));
        assert_eq!(
            Some(5)
                .ok_or_trail_lazy(SITE, || -> &str { panic!("evaluated") })
                .ok(),
            Some(5)
        );
    }

    #[test]
    fn test_none_raises_fresh_trail() {
        let trail = None::<u8>.ok_or_trail(SITE, "missing").unwrap_err();
        assert_eq!(trail, Trail::new(SITE).with("missing"));

        let lazy = None::<u8>.ok_or_trail_lazy(SITE, || "missing").unwrap_err();
        assert_eq!(lazy, trail);
    }
}
