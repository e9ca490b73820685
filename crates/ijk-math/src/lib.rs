//! # ijk-math
//!
//! Generic fixed-size vector algebra for real-time rendering, physics and
//! animation code.
//!
//! This crate provides:
//!
//! - [`Vector<T, N>`] - 2D/3D/4D vectors over `f32 f64 i32 i64 u32 u64 bool`
//!   with glam-style aliases ([`Vec3`], [`DVec4`], [`IVec2`], [`BVec3`], ...)
//! - Component-wise arithmetic, comparisons, logical and bitwise operators
//! - Geometry: length, normalize, projection, Gram-Schmidt, reflection, slerp
//! - Interpolation: lerp, Bezier, Hermite, Catmull-Rom
//! - Curve [`Segment`]s with arc-length reparameterization tables
//! - Named components and index swizzles with write-back
//! - An [`array`] interface over plain `[T; N]` buffers
//! - [`simd`] batch kernels over `f32` 4-vectors
//!
//! # Design
//!
//! Every algorithm is written once, generically over the element type and a
//! const dimension. Which methods a vector offers depends on the element
//! trait it satisfies (see [`ijk_core::scalar`]): `normalize` exists only
//! for floating-point vectors, shifts only for integer vectors.
//!
//! Division has two forms. The operators (`/`, `%`) behave like the element
//! type, while the `*_safe` methods return zero wherever the divisor or
//! length is zero.
//!
//! # Usage
//!
//! ```rust
//! use ijk_math::{vec2, vec3, Vec3};
//!
//! let a = vec3(1.0f32, 0.0, 0.0);
//! let b = vec3(0.0f32, 1.0, 0.0);
//! assert_eq!(a.cross(b), vec3(0.0, 0.0, 1.0));
//!
//! let (n, len) = vec2(3.0f32, 4.0).normalize_get_length();
//! assert_eq!((n, len), (vec2(0.6, 0.8), 5.0));
//!
//! let mut v = Vec3::splat(1.0);
//! v.set_swizzle([2, 0], vec2(5.0, 7.0)).unwrap();
//! assert_eq!(v, vec3(7.0, 1.0, 5.0));
//! ```
//!
//! # Dependencies
//!
//! - [`ijk_core`] - Element traits and error types
//! - [`glam`] - Conversions to and from glam's concrete vectors
//! - [`wide`] - Portable SIMD for the batch kernels
//! - `rayon` - Parallel batch kernels (`parallel` feature)
//!
//! # Used By
//!
//! - `ijk-cli` - Curve evaluation and reparameterization tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod geom;
mod interp;
mod logic;
mod ops;
mod swizzle;
mod vector;

pub mod array;
pub mod kernel;
pub mod simd;

pub use curve::*;
pub use interp::*;
pub use swizzle::SwizzleMut;
pub use vector::*;

pub use ijk_core::{Bits, Element, Error, Integer, Negate, Number, Real, Result, Signed};
