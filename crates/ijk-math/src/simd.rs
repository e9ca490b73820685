//! SIMD batch kernels for `f32` 4-vectors.
//!
//! A [`Vec4`] maps onto one `f32x4` lane group from the `wide` crate, so
//! interpolation, dot products and normalization run as single portable
//! SIMD operations on stable Rust. The `batch_*` functions apply them over
//! slices; with the `parallel` feature the `par_*` forms split the work
//! across the rayon thread pool.
//!
//! # Example
//!
//! ```rust
//! use ijk_math::simd::{batch_lerp, lerp_x4};
//! use ijk_math::vec4;
//!
//! let a = vec4(0.0, 0.0, 0.0, 0.0);
//! let b = vec4(2.0, 4.0, 6.0, 8.0);
//! assert_eq!(lerp_x4(a, b, 0.5), vec4(1.0, 2.0, 3.0, 4.0));
//!
//! let out = batch_lerp(&[a, b], &[b, a], 0.25).unwrap();
//! assert_eq!(out[1], vec4(1.5, 3.0, 4.5, 6.0));
//! ```

use crate::vector::{Vec4, Vector};
use ijk_core::{Error, Result};
use wide::f32x4;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline]
fn lanes(v: Vec4) -> f32x4 {
    f32x4::from(v.0)
}

#[inline]
fn hsum(v: f32x4) -> f32 {
    let [a, b, c, d] = v.to_array();
    (a + b) + (c + d)
}

fn check_pair(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(Error::length_mismatch("rhs", a, b));
    }
    Ok(())
}

/// Linear interpolation of two 4-vectors in one SIMD operation.
#[inline]
pub fn lerp_x4(a: Vec4, b: Vec4, u: f32) -> Vec4 {
    let va = lanes(a);
    let vb = lanes(b);
    Vector((va + (vb - va) * f32x4::splat(u)).to_array())
}

/// Dot product of two 4-vectors.
#[inline]
pub fn dot_x4(a: Vec4, b: Vec4) -> f32 {
    hsum(lanes(a) * lanes(b))
}

/// Unit vector, or the zero vector for zero input.
#[inline]
pub fn normalize_safe_x4(v: Vec4) -> Vec4 {
    let l = lanes(v);
    let len_sq = hsum(l * l);
    if len_sq == 0.0 {
        return Vec4::ZERO;
    }
    Vector((l * f32x4::splat(len_sq.sqrt().recip())).to_array())
}

/// Pairwise interpolation `lerp(a[i], b[i], u)`.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the slices differ in length.
pub fn batch_lerp(a: &[Vec4], b: &[Vec4], u: f32) -> Result<Vec<Vec4>> {
    check_pair(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(&x, &y)| lerp_x4(x, y, u)).collect())
}

/// Pairwise dot products.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the slices differ in length.
pub fn batch_dot(a: &[Vec4], b: &[Vec4]) -> Result<Vec<f32>> {
    check_pair(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(&x, &y)| dot_x4(x, y)).collect())
}

/// Normalizes every vector in place; zero vectors stay zero.
pub fn batch_normalize_safe(values: &mut [Vec4]) {
    for v in values.iter_mut() {
        *v = normalize_safe_x4(*v);
    }
}

/// Parallel [`batch_lerp`].
#[cfg(feature = "parallel")]
pub fn par_batch_lerp(a: &[Vec4], b: &[Vec4], u: f32) -> Result<Vec<Vec4>> {
    check_pair(a.len(), b.len())?;
    Ok(a.par_iter().zip(b.par_iter()).map(|(&x, &y)| lerp_x4(x, y, u)).collect())
}

/// Parallel [`batch_dot`].
#[cfg(feature = "parallel")]
pub fn par_batch_dot(a: &[Vec4], b: &[Vec4]) -> Result<Vec<f32>> {
    check_pair(a.len(), b.len())?;
    Ok(a.par_iter().zip(b.par_iter()).map(|(&x, &y)| dot_x4(x, y)).collect())
}

/// Parallel [`batch_normalize_safe`].
#[cfg(feature = "parallel")]
pub fn par_batch_normalize_safe(values: &mut [Vec4]) {
    values.par_iter_mut().for_each(|v| *v = normalize_safe_x4(*v));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec4;
    use approx::assert_abs_diff_eq;

    fn data(n: usize) -> Vec<Vec4> {
        (0..n)
            .map(|i| {
                let f = i as f32;
                vec4(f, 1.0 - f, 0.5 * f, 2.0)
            })
            .collect()
    }

    #[test]
    fn test_x4_matches_scalar_path() {
        let a = vec4(1.0f32, -2.0, 3.0, 0.5);
        let b = vec4(-4.0f32, 8.0, 0.25, 1.0);
        let l = lerp_x4(a, b, 0.3);
        let s = crate::interp::lerp(a, b, 0.3);
        for i in 0..4 {
            assert_abs_diff_eq!(l[i], s[i], epsilon = 1e-6);
        }
        assert_abs_diff_eq!(dot_x4(a, b), a.dot(b), epsilon = 1e-5);
    }

    #[test]
    fn test_normalize_safe_x4() {
        let n = normalize_safe_x4(vec4(0.0, 3.0, 0.0, 4.0));
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n.y(), 0.6, epsilon = 1e-6);
        assert_eq!(normalize_safe_x4(Vec4::ZERO), Vec4::ZERO);
    }

    #[test]
    fn test_batch_length_mismatch() {
        let a = data(3);
        let b = data(2);
        assert_eq!(batch_lerp(&a, &b, 0.5), Err(Error::length_mismatch("rhs", 3, 2)));
        assert!(batch_dot(&a, &b).is_err());
    }

    #[test]
    fn test_batch_normalize() {
        let mut v = data(5);
        v.push(Vec4::ZERO);
        batch_normalize_safe(&mut v);
        for x in &v[..5] {
            assert_abs_diff_eq!(x.length(), 1.0, epsilon = 1e-6);
        }
        assert_eq!(v[5], Vec4::ZERO);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let a = data(1000);
        let b: Vec<Vec4> = a.iter().rev().copied().collect();
        assert_eq!(par_batch_lerp(&a, &b, 0.7).unwrap(), batch_lerp(&a, &b, 0.7).unwrap());
        assert_eq!(par_batch_dot(&a, &b).unwrap(), batch_dot(&a, &b).unwrap());
        let mut s = a.clone();
        let mut p = a;
        batch_normalize_safe(&mut s);
        par_batch_normalize_safe(&mut p);
        assert_eq!(s, p);
    }
}
