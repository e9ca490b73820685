//! Scalar kernel: 1D versions of the vector operations.
//!
//! In one dimension a "vector" is a plain number, so dot products collapse
//! to multiplication and normalization collapses to the sign. These
//! functions are also the per-component building blocks used by the
//! vector types.
//!
//! ```rust
//! use ijk_math::kernel::{length1, normalize1, normalize_get_length1};
//!
//! assert_eq!(length1(-3.0f32), 3.0);
//! assert_eq!(normalize1(-3.0f32), -1.0);
//! assert_eq!(normalize_get_length1(-3.0f32), (-1.0, 3.0));
//! ```

use ijk_core::{Number, Real};

/// `s >= 0 ? s : -s`.
#[inline]
pub fn abs1<T: Number>(s: T) -> T {
    s.abs1()
}

/// `0` for zero, otherwise `+1`/`-1`.
#[inline]
pub fn sgn1<T: Number>(s: T) -> T {
    s.sgn1()
}

/// 1D dot product: the product `a * b`.
#[inline]
pub fn dot1<T: Number>(a: T, b: T) -> T {
    a * b
}

/// `s * s`.
#[inline]
pub fn length_sq1<T: Number>(s: T) -> T {
    s * s
}

/// `|s|`.
#[inline]
pub fn length1<T: Number>(s: T) -> T {
    s.abs1()
}

/// `1 / (s * s)`. Infinite for zero.
#[inline]
pub fn length_sq_inv1<T: Real>(s: T) -> T {
    (s * s).recip()
}

/// `1 / |s|`. Infinite for zero.
#[inline]
pub fn length_inv1<T: Real>(s: T) -> T {
    s.abs1().recip()
}

/// The 1D unit vector: the sign of `s`.
#[inline]
pub fn normalize1<T: Number>(s: T) -> T {
    s.sgn1()
}

/// Returns `(sgn(s), |s|)`.
#[inline]
pub fn normalize_get_length1<T: Number>(s: T) -> (T, T) {
    (s.sgn1(), s.abs1())
}

/// Returns `(sgn(s), 1 / |s|)`.
#[inline]
pub fn normalize_get_length_inv1<T: Real>(s: T) -> (T, T) {
    (s.sgn1(), s.abs1().recip())
}

/// `lh / rh`, or zero when `rh` is zero. Integer overflow wraps.
#[inline]
pub fn div_safe1<T: Number>(lh: T, rh: T) -> T {
    if rh == T::ZERO { T::ZERO } else { lh.wrapping_div(rh) }
}

/// `lh % rh`, or zero when `rh` is zero. Integer overflow wraps.
#[inline]
pub fn rem_safe1<T: Number>(lh: T, rh: T) -> T {
    if rh == T::ZERO { T::ZERO } else { lh.wrapping_rem(rh) }
}

/// `1 / s`, or zero when `s` is zero.
#[inline]
pub(crate) fn recip_safe1<T: Real>(s: T) -> T {
    if s == T::ZERO { T::ZERO } else { s.recip() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_length() {
        assert_eq!(sgn1(0i32), 0);
        assert_eq!(sgn1(-7i64), -1);
        assert_eq!(sgn1(7u32), 1);
        assert_eq!(abs1(-7i32), 7);
        assert_eq!(length_sq1(-3i32), 9);
        assert_eq!(dot1(3.0f64, -2.0), -6.0);
    }

    #[test]
    fn test_inverse_lengths() {
        assert_eq!(length_inv1(-4.0f32), 0.25);
        assert_eq!(length_sq_inv1(2.0f64), 0.25);
        assert!(length_inv1(0.0f32).is_infinite());
        assert_eq!(normalize_get_length_inv1(-4.0f64), (-1.0, 0.25));
    }

    #[test]
    fn test_safe_division() {
        assert_eq!(div_safe1(5.0f32, 0.0), 0.0);
        assert_eq!(div_safe1(6i32, 3), 2);
        assert_eq!(rem_safe1(7u64, 0), 0);
        assert_eq!(rem_safe1(7u64, 4), 3);
        assert_eq!(rem_safe1(7.5f64, 2.0), 1.5);
    }

    #[test]
    fn test_safe_division_min_by_minus_one() {
        assert_eq!(div_safe1(i32::MIN, -1), i32::MIN);
        assert_eq!(rem_safe1(i32::MIN, -1), 0);
        assert_eq!(div_safe1(i64::MIN, -1), i64::MIN);
        assert_eq!(rem_safe1(i64::MIN, -1), 0);
    }
}
