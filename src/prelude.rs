//! Commonly used items for convenient importing.
//!
//! ```rust
//! use calltrail::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> Result<i32, Trail> {
//!     if b == 0 {
//!         bail!("cannot divide {} by zero", a);
//!     }
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).ok(), Some(5));
//! ```
//!
//! This prelude includes:
//!
//! - **[`Trail`]** and **[`Site`]**
//! - **[`ResultExt`]**, **[`TrailResultExt`]** and **[`OptionExt`]**
//! - **[`site!`]**, **[`trail!`]**, **[`bail!`]**, **[`trail_absorb!`]**
//!   and **[`trail_append!`]**

pub use crate::{
    OptionExt, ResultExt, Site, Trail, TrailResultExt, bail, site, trail, trail_absorb,
    trail_append,
};
