#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Human-readable call-site trails, accumulated inside the error value as it
//! propagates.
//!
//! ## Overview
//!
//! A [`Trail`] is an error that carries its own backtrace as text. There is
//! no stack unwinding and no symbolication: every place in the code that
//! raises, re-raises or inspects the error appends a provenance record for
//! its call site and, optionally, a free-form message. What the user finally
//! sees is exactly the accumulated text.
//!
//! ## Quick Example
//!
//! ```
//! use calltrail::prelude::*;
//!
//! fn inverse(i: i32) -> Result<f64, Trail> {
//!     if i == 0 {
//!         bail!("Error: I can't take the inverse of 0!");
//!     }
//!     Ok(1.0 / f64::from(i))
//! }
//!
//! fn multiply_inverse(a: i32, b: i32) -> Result<f64, Trail> {
//!     let product = inverse(a).and_then(|x| Ok(x * inverse(b)?));
//!     product.trail_context_lazy(site!(), || format!("Called from multiply_inverse: a = {a} b = {b}"))
//! }
//!
//! let trail = multiply_inverse(3, 0).unwrap_err();
//! println!("Exception! what() = {trail}");
//! ```
//!
//! prints something like
//!
//! ```text
//! Exception! what() =
//! ( src/main.rs:5 , in inverse() )    ->  Error: I can't take the inverse of 0!
//! ( src/main.rs:12 , in multiply_inverse() )    ->  Called from multiply_inverse: a = 3 b = 0
//! ```
//!
//! ## The Text Format
//!
//! A trail is a sequence of records, each of the form
//!
//! ```text
//! \n( <file>:<line> , in <function>() )    ->  <free text>
//! ```
//!
//! with no terminating newline. The free text is whatever was appended after
//! the most recent record and may be empty. With source locations turned
//! off (see [`TrailOptions`]) each record shrinks to `\n<free text>`.
//!
//! ## Absorbing Other Errors
//!
//! A trail can be built from another error through [`Trail::absorbing`],
//! [`Trail::absorb`], [`trail_absorb!`] or [`ResultExt`]:
//!
//! - If the error is (or wraps) a [`Trail`], its text is copied verbatim and
//!   one record for the absorbing site follows.
//! - Any other error only has a message to offer. A record for the absorbing
//!   site is written in front of that message, and then a second record for
//!   the same site follows, so the site appears twice. Existing golden
//!   outputs depend on this shape, and it is kept as is.
//!
//! What an error contributes is decided by the [`Absorb`] trait, see the
//! [`absorb`] and [`compat`] modules.
//!
//! ## Features
//!
//! - `source-location` (default): records carry file, line and function.
//!   Without it [`TrailOptions::default()`] produces message-only trails.
//! - `std`: `From<Trail> for std::io::Error`.
//! - `compat-anyhow1`, `compat-eyre06`: absorb `anyhow::Error` and
//!   `eyre::Report`.
//!
//! ## Threads
//!
//! A [`Trail`] is a plain owned value without internal synchronization. It
//! is `Send + Sync`, so it can cross threads as a finished error, but a
//! trail under construction belongs to one owner at a time.
//!
//! ## Ecosystem
//!
//! - **[`calltrail-tracing`]** - Emit rendered trails as `tracing` events
//!   and append the active span path to a trail.
//!
//! [`calltrail-tracing`]: https://docs.rs/calltrail-tracing

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod absorb;
pub mod compat;
mod findings;
mod option_ext;
pub mod options;
pub mod prelude;
mod result_ext;
pub mod site;
mod trail;

pub use self::{
    absorb::{Absorb, Absorbed},
    findings::Findings,
    option_ext::OptionExt,
    options::TrailOptions,
    result_ext::{ResultExt, TrailResultExt},
    site::Site,
    trail::Trail,
};

/// A [`Result`](core::result::Result) with [`Trail`] as the error type.
///
/// ```
/// fn load() -> calltrail::Result<u8> {
///     Ok(1)
/// }
/// ```
pub type Result<T, E = Trail> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use core::{any::type_name_of_val, file, format_args, line, result::Result::Err};

    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub fn function_name(marker: &'static str) -> &'static str {
        crate::site::function_name(marker)
    }
}
