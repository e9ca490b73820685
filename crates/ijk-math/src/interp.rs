//! Interpolation and curve evaluation.
//!
//! Every function here works on any [`Interpolant`]: a plain `f32`/`f64`
//! or a floating-point [`Vector`](crate::Vector). Parameters are never
//! clamped; values in `[0, 1]` interpolate and anything else extrapolates.
//!
//! - Linear: [`lerp`], [`lerp_inv`], [`lerp_rev_init`], [`lerp_rev_term`], [`remap`]
//! - Nearest: [`nearest`], [`binearest`]; bilinear: [`bilerp`]
//! - Bezier: [`bezier0`] to [`bezier3`] and any order with [`bezier_n`]
//! - Cubic Hermite: [`hermite`], [`hermite_handles`]
//! - Catmull-Rom: [`catmull_rom`], [`bicubic_catmull_rom`]
//!
//! # Usage
//!
//! ```rust
//! use ijk_math::{bezier2, lerp, vec2};
//!
//! assert_eq!(lerp(vec2(0.0f64, 0.0), vec2(10.0, 0.0), 0.5), vec2(5.0, 0.0));
//! assert_eq!(bezier2(vec2(0.0f64, 0.0), vec2(1.0, 2.0), vec2(2.0, 0.0), 0.5), vec2(1.0, 1.0));
//! assert_eq!(lerp(0.0f32, 10.0, 1.5), 15.0);
//! ```

use ijk_core::{Error, Real, Result};
use std::ops::{Add, Div, Mul, Sub};

/// A value that can be blended with parameter type `T`.
///
/// Implemented automatically for anything closed under `+`, `-` and
/// scaling by `T`, which covers `f32`, `f64` and every `Vector<T, N>` of
/// those.
pub trait Interpolant<T: Real>:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<T, Output = Self>
{
}

impl<T: Real, V> Interpolant<T> for V where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>
{
}

/// Linear interpolation: `v0 + u * (v1 - v0)`.
///
/// # Example
///
/// ```rust
/// use ijk_math::lerp;
///
/// assert_eq!(lerp(0.0f64, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0f64, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0f64, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp<T: Real, V: Interpolant<T>>(v0: V, v1: V, u: T) -> V {
    v0 + (v1 - v0) * u
}

/// Inverse linear interpolation: the `u` for which `lerp(v0, v1, u) == v`.
///
/// Component-wise `(v - v0) / (v1 - v0)`; components where `v0 == v1`
/// follow plain floating-point division.
///
/// ```rust
/// use ijk_math::{lerp_inv, vec2};
///
/// assert_eq!(lerp_inv(vec2(0.0f64, 10.0), vec2(4.0, 20.0), vec2(1.0, 15.0)), vec2(0.25, 0.5));
/// ```
#[inline]
pub fn lerp_inv<V>(v0: V, v1: V, v: V) -> V
where
    V: Copy + Sub<Output = V> + Div<Output = V>,
{
    (v - v0) / (v1 - v0)
}

/// Recovers the initial value `v0` from `v1`, `v = lerp(v0, v1, u)` and `u`.
///
/// Undefined (division by zero) at `u == 1`.
#[inline]
pub fn lerp_rev_init<T: Real, V: Interpolant<T>>(v1: V, v: V, u: T) -> V {
    (v - v1 * u) * (T::ONE - u).recip()
}

/// Recovers the terminal value `v1` from `v0`, `v = lerp(v0, v1, u)` and `u`.
///
/// Undefined (division by zero) at `u == 0`.
#[inline]
pub fn lerp_rev_term<T: Real, V: Interpolant<T>>(v0: V, v: V, u: T) -> V {
    v0 + (v - v0) * u.recip()
}

/// Nearest-neighbor: `v0` for `u < 0.5`, otherwise `v1`.
#[inline]
pub fn nearest<T: Real, V>(v0: V, v1: V, u: T) -> V {
    if u < T::HALF { v0 } else { v1 }
}

/// Nearest-neighbor of two nearest-neighbor results.
///
/// `u0` picks within `(v00, v01)`, `u1` within `(v10, v11)`, and `u`
/// between the two picks.
#[inline]
pub fn binearest<T: Real, V>(v00: V, v01: V, v10: V, v11: V, u0: T, u1: T, u: T) -> V {
    nearest(nearest(v00, v01, u0), nearest(v10, v11, u1), u)
}

/// Linear interpolation of two linear interpolations.
#[inline]
pub fn bilerp<T: Real, V: Interpolant<T>>(v00: V, v01: V, v10: V, v11: V, u0: T, u1: T, u: T) -> V {
    lerp(lerp(v00, v01, u0), lerp(v10, v11, u1), u)
}

/// Maps `v_src` from the range `[v0_src, v1_src]` to `[v0_dst, v1_dst]`.
///
/// ```rust
/// use ijk_math::remap;
///
/// // 0.5 in [0, 1] lands at 50 in [0, 100]
/// assert_eq!(remap(0.0f64, 100.0, 0.0, 1.0, 0.5), 50.0);
/// ```
#[inline]
pub fn remap<V>(v0_dst: V, v1_dst: V, v0_src: V, v1_src: V, v_src: V) -> V
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<Output = V> + Div<Output = V>,
{
    let u = lerp_inv(v0_src, v1_src, v_src);
    v0_dst + (v1_dst - v0_dst) * u
}

/// Order-0 Bezier: the single control value.
#[inline]
pub fn bezier0<T: Real, V>(v0: V, _u: T) -> V {
    v0
}

/// Order-1 Bezier, identical to [`lerp`].
#[inline]
pub fn bezier1<T: Real, V: Interpolant<T>>(v0: V, v1: V, u: T) -> V {
    lerp(v0, v1, u)
}

/// Quadratic Bezier through three controls.
#[inline]
pub fn bezier2<T: Real, V: Interpolant<T>>(v0: V, v1: V, v2: V, u: T) -> V {
    lerp(lerp(v0, v1, u), lerp(v1, v2, u), u)
}

/// Cubic Bezier through four controls.
#[inline]
pub fn bezier3<T: Real, V: Interpolant<T>>(v0: V, v1: V, v2: V, v3: V, u: T) -> V {
    lerp(bezier2(v0, v1, v2, u), bezier2(v1, v2, v3, u), u)
}

/// Bezier of order `controls.len() - 1` by De Casteljau reduction.
///
/// # Errors
///
/// [`Error::EmptyInput`] if `controls` is empty.
///
/// ```rust
/// use ijk_math::{bezier3, bezier_n};
///
/// let c = [0.0f64, 1.0, 3.0, 2.0];
/// assert_eq!(bezier_n(&c, 0.25).unwrap(), bezier3(c[0], c[1], c[2], c[3], 0.25));
/// ```
pub fn bezier_n<T: Real, V: Interpolant<T>>(controls: &[V], u: T) -> Result<V> {
    if controls.is_empty() {
        return Err(Error::empty("controls"));
    }
    let mut work = controls.to_vec();
    for order in (1..work.len()).rev() {
        for i in 0..order {
            work[i] = lerp(work[i], work[i + 1], u);
        }
    }
    Ok(work[0])
}

/// Cubic Hermite from endpoint values and tangents.
///
/// `v0 * h00 + dv0 * h10 + v1 * h01 + dv1 * h11` with the standard basis
/// `h00 = 2u³ - 3u² + 1`, `h10 = u³ - 2u² + u`, `h01 = -2u³ + 3u²`,
/// `h11 = u³ - u²`.
#[inline]
pub fn hermite<T: Real, V: Interpolant<T>>(v0: V, dv0: V, v1: V, dv1: V, u: T) -> V {
    let three = T::TWO + T::ONE;
    let u2 = u * u;
    let u3 = u2 * u;
    let h00 = T::TWO * u3 - three * u2 + T::ONE;
    let h10 = u3 - T::TWO * u2 + u;
    let h01 = three * u2 - T::TWO * u3;
    let h11 = u3 - u2;
    v0 * h00 + dv0 * h10 + v1 * h01 + dv1 * h11
}

/// Cubic Hermite from endpoint values and control-handle positions.
///
/// The tangent at each endpoint is `handle - endpoint`.
#[inline]
pub fn hermite_handles<T: Real, V: Interpolant<T>>(v0: V, c0: V, v1: V, c1: V, u: T) -> V {
    hermite(v0, c0 - v0, v1, c1 - v1, u)
}

/// Catmull-Rom segment between `v0` and `v1`, with `vp` before and `vn`
/// after.
///
/// ```rust
/// use ijk_math::catmull_rom;
///
/// assert_eq!(catmull_rom(0.0f64, 1.0, 2.0, 3.0, 0.5), 1.5);
/// ```
#[inline]
pub fn catmull_rom<T: Real, V: Interpolant<T>>(vp: V, v0: V, v1: V, vn: V, u: T) -> V {
    let three = T::TWO + T::ONE;
    let four = T::TWO + T::TWO;
    let five = four + T::ONE;
    let u2 = u * u;
    let u3 = u2 * u;
    let c0 = v0 * T::TWO;
    let c1 = v1 - vp;
    let c2 = vp * T::TWO - v0 * five + v1 * four - vn;
    let c3 = v0 * three - vp - v1 * three + vn;
    (c0 + c1 * u + c2 * u2 + c3 * u3) * T::HALF
}

/// Bi-cubic Catmull-Rom over a 4x4 grid.
///
/// Row `i` is evaluated with `row_params[i]`, then the four row results
/// are blended with `u`.
pub fn bicubic_catmull_rom<T: Real, V: Interpolant<T>>(grid: &[[V; 4]; 4], row_params: [T; 4], u: T) -> V {
    let row = |i: usize| {
        let [p, a, b, n] = grid[i];
        catmull_rom(p, a, b, n, row_params[i])
    };
    catmull_rom(row(0), row(1), row(2), row(3), u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec2, vec3, DVec2, Vec2};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_boundaries() {
        let a = vec3(1.0f32, -2.0, 3.5);
        let b = vec3(-4.0f32, 8.0, 0.25);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(vec2(0.0f64, 0.0), vec2(10.0, 0.0), 0.5), vec2(5.0, 0.0));
        assert_eq!(lerp(0.0f64, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_lerp_inverse_and_reversal() {
        let v0 = vec2(1.0f64, -3.0);
        let v1 = vec2(5.0f64, 9.0);
        let u = 0.3;
        let v = lerp(v0, v1, u);
        let back = lerp_inv(v0, v1, v);
        assert_abs_diff_eq!(back[0], u, epsilon = 1e-12);
        assert_abs_diff_eq!(back[1], u, epsilon = 1e-12);
        let r0 = lerp_rev_init(v1, v, u);
        let r1 = lerp_rev_term(v0, v, u);
        assert_abs_diff_eq!(r0[0], v0[0], epsilon = 1e-12);
        assert_abs_diff_eq!(r0[1], v0[1], epsilon = 1e-12);
        assert_abs_diff_eq!(r1[0], v1[0], epsilon = 1e-12);
        assert_abs_diff_eq!(r1[1], v1[1], epsilon = 1e-12);
    }

    #[test]
    fn test_lerp_inv_degenerate_component() {
        let r = lerp_inv(vec2(1.0f32, 0.0), vec2(1.0, 2.0), vec2(1.0, 1.0));
        assert!(r[0].is_nan());
        assert_eq!(r[1], 0.5);
    }

    #[test]
    fn test_nearest() {
        assert_eq!(nearest(1, 2, 0.49f32), 1);
        assert_eq!(nearest(1, 2, 0.5f32), 2);
        assert_eq!(nearest(1, 2, -3.0f64), 1);
        assert_eq!(binearest('a', 'b', 'c', 'd', 0.7, 0.2, 0.9f32), 'c');
        assert_eq!(binearest('a', 'b', 'c', 'd', 0.7, 0.2, 0.1f32), 'b');
    }

    #[test]
    fn test_bilerp() {
        let v = bilerp(0.0f64, 1.0, 10.0, 20.0, 0.5, 0.5, 0.5);
        assert_eq!(v, 7.75);
    }

    #[test]
    fn test_remap_vectors() {
        let r = remap(
            vec2(0.0f32, 100.0),
            vec2(10.0, 200.0),
            Vec2::ZERO,
            vec2(2.0, 4.0),
            vec2(1.0, 1.0),
        );
        assert_eq!(r, vec2(5.0, 125.0));
    }

    #[test]
    fn test_bezier_endpoints() {
        let c = [vec2(0.0f64, 0.0), vec2(1.0, 3.0), vec2(4.0, -1.0), vec2(6.0, 2.0), vec2(7.0, 7.0)];
        assert_eq!(bezier0(c[0], 0.7), c[0]);
        assert_eq!(bezier1(c[0], c[1], 1.0), c[1]);
        assert_eq!(bezier2(c[0], c[1], c[2], 0.0), c[0]);
        assert_eq!(bezier2(c[0], c[1], c[2], 1.0), c[2]);
        assert_eq!(bezier3(c[0], c[1], c[2], c[3], 1.0), c[3]);
        for n in 1..=c.len() {
            assert_eq!(bezier_n(&c[..n], 0.0).unwrap(), c[0]);
            assert_eq!(bezier_n(&c[..n], 1.0).unwrap(), c[n - 1]);
        }
    }

    #[test]
    fn test_bezier_n_matches_closed_forms() {
        let c = [vec2(0.0f64, 0.0), vec2(1.0, 3.0), vec2(4.0, -1.0), vec2(6.0, 2.0)];
        for u in [0.1, 0.35, 0.8] {
            let a = bezier_n(&c, u).unwrap();
            let b = bezier3(c[0], c[1], c[2], c[3], u);
            assert_abs_diff_eq!(a[0], b[0], epsilon = 1e-12);
            assert_abs_diff_eq!(a[1], b[1], epsilon = 1e-12);
        }
        assert_eq!(bezier_n::<f64, DVec2>(&[], 0.5), Err(Error::empty("controls")));
    }

    #[test]
    fn test_hermite() {
        let v0 = vec2(0.0f64, 0.0);
        let v1 = vec2(4.0f64, 0.0);
        let t = vec2(4.0f64, 0.0);
        assert_eq!(hermite(v0, t, v1, t, 0.0), v0);
        assert_eq!(hermite(v0, t, v1, t, 1.0), v1);
        // Matching tangents on a straight line reproduce the line.
        assert_abs_diff_eq!(hermite(v0, t, v1, t, 0.25)[0], 1.0, epsilon = 1e-12);
        let h = hermite_handles(v0, v0 + t, v1, v1 + t, 0.6);
        assert_eq!(h, hermite(v0, t, v1, t, 0.6));
    }

    #[test]
    fn test_catmull_rom() {
        let (p, a, b, n) = (vec2(-1.0f64, 0.0), vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(2.0, 1.0));
        assert_eq!(catmull_rom(p, a, b, n, 0.0), a);
        assert_eq!(catmull_rom(p, a, b, n, 1.0), b);
        assert_abs_diff_eq!(catmull_rom(0.0f64, 1.0, 2.0, 3.0, 0.3), 1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_bicubic_catmull_rom() {
        let grid = [
            [0.0f64, 1.0, 2.0, 3.0],
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 3.0, 4.0, 5.0],
            [3.0, 4.0, 5.0, 6.0],
        ];
        // A linear field is reproduced exactly.
        let v = bicubic_catmull_rom(&grid, [0.5f64; 4], 0.5);
        assert_abs_diff_eq!(v, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bicubic_catmull_rom(&grid, [0.0f64; 4], 0.0), 2.0, epsilon = 1e-12);
    }
}
