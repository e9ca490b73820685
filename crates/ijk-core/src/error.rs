//! Error types for ijk operations.
//!
//! Numeric faults (division by zero, zero-length normalization) are never
//! errors in this library: the plain operations inherit IEEE/integer
//! behavior and the `*_safe` operations substitute a defined fallback.
//!
//! The [`Error`] enum covers the other category: broken caller contracts on
//! runtime-sized inputs, such as empty control lists, parallel tables of
//! different lengths, or a zero sample count. Fixed-size buffers are
//! `[T; N]` and cannot be undersized, so they never appear here.
//!
//! # Usage
//!
//! ```rust
//! use ijk_core::{Error, Result};
//!
//! fn check_table(params: &[f32], values: &[f32]) -> Result<()> {
//!     if params.len() != values.len() {
//!         return Err(Error::length_mismatch("values", params.len(), values.len()));
//!     }
//!     Ok(())
//! }
//! assert!(check_table(&[0.0, 1.0], &[2.0]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations signalled by ijk operations.
///
/// # Categories
///
/// - **Input shape**: [`EmptyInput`](Error::EmptyInput), [`LengthMismatch`](Error::LengthMismatch)
/// - **Sampling**: [`ZeroDivisions`](Error::ZeroDivisions), [`InvalidStep`](Error::InvalidStep)
/// - **Swizzle**: [`ComponentOutOfRange`](Error::ComponentOutOfRange), [`AliasedSwizzle`](Error::AliasedSwizzle)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A list input that must hold at least one element was empty.
    #[error("{what} must not be empty")]
    EmptyInput {
        /// Name of the offending input
        what: &'static str,
    },

    /// Two parallel inputs (or an input and an output) differ in length.
    #[error("{what}: expected length {expected}, got {got}")]
    LengthMismatch {
        /// Name of the offending input
        what: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// A reparameterization was requested with zero divisions.
    #[error("number of divisions must be non-zero")]
    ZeroDivisions,

    /// A table search was started with a zero step.
    #[error("table search step must be non-zero")]
    InvalidStep,

    /// A swizzle or component index exceeds the vector's dimension.
    #[error("component index {index} out of range for {dim}-component vector")]
    ComponentOutOfRange {
        /// Requested component
        index: usize,
        /// Vector dimension
        dim: usize,
    },

    /// A write through a swizzle names the same component more than once.
    #[error("swizzle writes component {index} more than once")]
    AliasedSwizzle {
        /// Repeated component
        index: usize,
    },
}

impl Error {
    /// Creates an [`Error::EmptyInput`] error.
    #[inline]
    pub fn empty(what: &'static str) -> Self {
        Self::EmptyInput { what }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(what: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            got,
        }
    }

    /// Creates an [`Error::ComponentOutOfRange`] error.
    #[inline]
    pub fn out_of_range(index: usize, dim: usize) -> Self {
        Self::ComponentOutOfRange { index, dim }
    }

    /// Returns `true` if this error describes the shape of a list input.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::LengthMismatch { .. })
    }

    /// Returns `true` if this error comes from swizzle validation.
    #[inline]
    pub fn is_swizzle_error(&self) -> bool {
        matches!(
            self,
            Self::ComponentOutOfRange { .. } | Self::AliasedSwizzle { .. }
        )
    }
}
