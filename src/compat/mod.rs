//! Absorbing errors from other error handling libraries.
//!
//! # Overview
//!
//! A [`Trail`] can absorb any sized [`core::error::Error`] out of the box.
//! Boxed trait objects get their own [`Absorb`] implementations, and the
//! wrapper types of other libraries convert into [`Absorbed`]. Every
//! integration follows the same rule: if the wrapper holds a [`Trail`] (for instance
//! because a trail was converted into it with `?`), its chain is copied
//! verbatim. Otherwise the wrapper's outermost `Display` text is absorbed
//! as a plain message.
//!
//! # Available Integrations
//!
//! - [`boxed_error`] - Boxed error trait objects (`Box<dyn Error>` and
//!   friends). Always available.
//! - [`anyhow1`] - The `anyhow` 1.x error handling library (requires the
//!   `compat-anyhow1` feature flag)
//! - [`eyre06`] - The `eyre` 0.6.x error handling library (requires the
//!   `compat-eyre06` feature flag)
//!
//! # Going the Other Way
//!
//! [`Trail`] implements [`core::error::Error`] and is `Send + Sync`, so the
//! usual `From` conversions of those libraries already accept it:
//!
//! ```
//! use calltrail::{Trail, site};
//!
//! fn inner() -> Result<(), Trail> {
//!     Err(Trail::new(site!()).with("disk full"))
//! }
//!
//! fn boxed() -> Result<(), Box<dyn core::error::Error + Send + Sync>> {
//!     inner()?;
//!     Ok(())
//! }
//!
//! assert!(boxed().unwrap_err().to_string().ends_with("disk full"));
//! ```
//!
//! [`Trail`]: crate::Trail
//! [`Absorb`]: crate::Absorb
//! [`Absorbed`]: crate::Absorbed

#[cfg(feature = "compat-anyhow1")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-anyhow1")))]
pub mod anyhow1;
pub mod boxed_error;
#[cfg(feature = "compat-eyre06")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-eyre06")))]
pub mod eyre06;
