//! # ijk-core
//!
//! Core types for the ijk real-time math library.
//!
//! - [`Element`], [`Number`], [`Real`], [`Integer`] and friends - the element
//!   trait hierarchy every vector operation is written against
//! - [`Error`], [`Result`] - precondition violations on runtime-sized inputs
//!
//! ## Crate Structure
//!
//! ```text
//! ijk-core (this crate)
//!    ^
//!    |
//!    +-- ijk-math (vectors, geometry, curves)
//!    +-- ijk-cli  (curve evaluation tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::*;

/// Prelude module for convenient imports.
///
/// ```
/// use ijk_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{Bits, Element, Integer, Negate, Number, Real, Signed};
}
