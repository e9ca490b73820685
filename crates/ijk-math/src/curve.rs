//! Curve segments, arc-length reparameterization and table sampling.
//!
//! A [`Segment`] evaluates a cubic curve at a parameter `u`. Sampling a
//! segment at evenly spaced parameters and accumulating chord lengths
//! gives a [`ReparamTable`], which maps arc length back to parameter and
//! position:
//!
//! ```rust
//! use ijk_math::{vec2, Segment};
//!
//! let seg = Segment::Hermite {
//!     v0: vec2(0.0f64, 0.0),
//!     dv0: vec2(4.0, 0.0),
//!     v1: vec2(4.0, 0.0),
//!     dv1: vec2(4.0, 0.0),
//! };
//! let table = seg.reparam(8, true).unwrap();
//! assert!((table.total_length - 4.0).abs() < 1e-9);
//! assert_eq!(*table.arc_lengths.last().unwrap(), 1.0);
//!
//! let mid = table.sample_at_arc_length(0.5).unwrap();
//! assert!((mid.x() - 2.0).abs() < 1e-9);
//! ```
//!
//! Table lookups walk linearly from a start index instead of bisecting.
//! For the small tables built here that is predictable and cheap, and a
//! caller stepping through a table in order can pass the previous hit as
//! `start`.

use crate::interp::{bicubic_catmull_rom, catmull_rom, hermite, hermite_handles, lerp, Interpolant};
use crate::vector::Vector;
use ijk_core::{Error, Real, Result};
use tracing::{debug, trace};

/// A single cubic curve segment over `u` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment<T, const N: usize> {
    /// Endpoints with tangents.
    Hermite {
        /// Start point
        v0: Vector<T, N>,
        /// Tangent at start
        dv0: Vector<T, N>,
        /// End point
        v1: Vector<T, N>,
        /// Tangent at end
        dv1: Vector<T, N>,
    },
    /// Endpoints with control-handle positions.
    HermiteHandles {
        /// Start point
        v0: Vector<T, N>,
        /// Handle leaving the start point
        c0: Vector<T, N>,
        /// End point
        v1: Vector<T, N>,
        /// Handle leaving the end point
        c1: Vector<T, N>,
    },
    /// The span `v0..v1` of a Catmull-Rom spline.
    CatmullRom {
        /// Point before `v0`
        prev: Vector<T, N>,
        /// Start point
        v0: Vector<T, N>,
        /// End point
        v1: Vector<T, N>,
        /// Point after `v1`
        next: Vector<T, N>,
    },
    /// A bi-cubic patch slice: each grid row is evaluated at its fixed
    /// parameter and the rows are blended by `u`.
    BicubicCatmullRom {
        /// Control rows
        grid: [[Vector<T, N>; 4]; 4],
        /// Parameter per row
        row_params: [T; 4],
    },
}

impl<T: Real, const N: usize> Segment<T, N> {
    /// Point on the segment at `u`. No clamping.
    pub fn eval(&self, u: T) -> Vector<T, N> {
        match *self {
            Segment::Hermite { v0, dv0, v1, dv1 } => hermite(v0, dv0, v1, dv1, u),
            Segment::HermiteHandles { v0, c0, v1, c1 } => hermite_handles(v0, c0, v1, c1, u),
            Segment::CatmullRom { prev, v0, v1, next } => catmull_rom(prev, v0, v1, next, u),
            Segment::BicubicCatmullRom { ref grid, row_params } => {
                bicubic_catmull_rom(grid, row_params, u)
            }
        }
    }

    /// Short name of the segment kind, for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Hermite { .. } => "hermite",
            Segment::HermiteHandles { .. } => "hermite_handles",
            Segment::CatmullRom { .. } => "catmull_rom",
            Segment::BicubicCatmullRom { .. } => "bicubic_catmull_rom",
        }
    }

    /// Samples the segment at `num_divisions + 1` evenly spaced parameters.
    ///
    /// See [`reparam_into`](Self::reparam_into) for the table layout.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroDivisions`] if `num_divisions` is zero and
    /// [`Error::LengthMismatch`] if `num_divisions + 1` overflows `usize`.
    pub fn reparam(&self, num_divisions: usize, normalize: bool) -> Result<ReparamTable<T, N>> {
        if num_divisions == 0 {
            return Err(Error::ZeroDivisions);
        }
        let len = num_divisions
            .checked_add(1)
            .ok_or(Error::length_mismatch("params", usize::MAX, num_divisions))?;
        let mut params = vec![T::ZERO; len];
        let mut arc_lengths = vec![T::ZERO; len];
        let mut samples = vec![Vector::ZERO; len];
        let total_length = self.reparam_into(
            &mut params,
            &mut arc_lengths,
            &mut samples,
            num_divisions,
            normalize,
        )?;
        Ok(ReparamTable {
            params,
            arc_lengths,
            samples,
            total_length,
            normalized: normalize,
        })
    }

    /// Fills caller-owned tables and returns the total chord length.
    ///
    /// Entry `i` holds `params[i] = i / num_divisions`, the curve point at
    /// that parameter, and the chord length accumulated up to it. With
    /// `normalize`, arc lengths are divided by the total so the last entry
    /// is `1`; a zero-length segment leaves them all zero.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroDivisions`] if `num_divisions` is zero
    /// - [`Error::LengthMismatch`] if any table is not `num_divisions + 1` long
    pub fn reparam_into(
        &self,
        params: &mut [T],
        arc_lengths: &mut [T],
        samples: &mut [Vector<T, N>],
        num_divisions: usize,
        normalize: bool,
    ) -> Result<T> {
        let samples_len = samples.len();
        self.reparam_with(params, arc_lengths, samples_len, num_divisions, normalize, |i, p| {
            samples[i] = p;
        })
    }

    // Shared by the vector and array table layouts; `store` receives each
    // sample as it is produced.
    pub(crate) fn reparam_with(
        &self,
        params: &mut [T],
        arc_lengths: &mut [T],
        samples_len: usize,
        num_divisions: usize,
        normalize: bool,
        mut store: impl FnMut(usize, Vector<T, N>),
    ) -> Result<T> {
        if num_divisions == 0 {
            return Err(Error::ZeroDivisions);
        }
        let len = num_divisions
            .checked_add(1)
            .ok_or(Error::length_mismatch("params", usize::MAX, params.len()))?;
        for (what, got) in [
            ("params", params.len()),
            ("arc_lengths", arc_lengths.len()),
            ("samples", samples_len),
        ] {
            if got != len {
                return Err(Error::length_mismatch(what, len, got));
            }
        }

        let n = T::from_f64(num_divisions as f64);
        let mut total = T::ZERO;
        let mut prev = Vector::ZERO;
        for i in 0..len {
            let u = T::from_f64(i as f64) / n;
            let p = self.eval(u);
            if i > 0 {
                total = total + p.distance(prev);
            }
            params[i] = u;
            arc_lengths[i] = total;
            store(i, p);
            prev = p;
        }

        if normalize && total > T::ZERO {
            for s in arc_lengths.iter_mut() {
                *s = *s / total;
            }
        }

        debug!(
            kind = self.kind(),
            num_divisions,
            normalize,
            total = total.to_f64(),
            "reparameterized segment"
        );
        Ok(total)
    }
}

/// Parameter, arc-length and position tables for one segment.
///
/// The three tables are parallel and `arc_lengths` is non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReparamTable<T, const N: usize> {
    /// Evenly spaced parameters from `0` to `1`
    pub params: Vec<T>,
    /// Accumulated chord length at each parameter
    pub arc_lengths: Vec<T>,
    /// Curve point at each parameter
    pub samples: Vec<Vector<T, N>>,
    /// Chord length of the whole segment, before normalization
    pub total_length: T,
    /// Whether `arc_lengths` runs from `0` to `1`
    pub normalized: bool,
}

impl<T: Real, const N: usize> ReparamTable<T, N> {
    /// Number of table entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Curve parameter at arc length `s`, in the table's length units.
    pub fn param_at_arc_length(&self, s: T) -> Result<T> {
        sample_table_inc(&self.arc_lengths, &self.params, s, 0, 1)
    }

    /// Position at arc length `s`, interpolated between table samples.
    pub fn sample_at_arc_length(&self, s: T) -> Result<Vector<T, N>> {
        sample_table_inc(&self.arc_lengths, &self.samples, s, 0, 1)
    }
}

/// Sort order of a parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    Ascending,
    Descending,
}

impl Order {
    // Whether the query lies at or past table entry `p`.
    #[inline]
    fn ahead<T: Real>(self, p: T, u: T) -> bool {
        match self {
            Order::Ascending => p <= u,
            Order::Descending => p >= u,
        }
    }
}

/// Finds the table entries around `u` and the blend factor between them.
///
/// Returns `(lo, hi, t)`; `lo == hi` when no blending is needed.
pub(crate) fn bracket<T: Real>(
    params: &[T],
    values_len: usize,
    u: T,
    start: usize,
    step: isize,
    order: Order,
) -> Result<(usize, usize, T)> {
    if params.is_empty() {
        return Err(Error::empty("params"));
    }
    if values_len != params.len() {
        return Err(Error::length_mismatch("values", params.len(), values_len));
    }
    if step == 0 {
        return Err(Error::InvalidStep);
    }
    let last = params.len() - 1;
    if last == 0 {
        return Ok((0, 0, T::ZERO));
    }

    let stride = step.unsigned_abs();
    let mut i = start.min(last);
    if step > 0 {
        while i + stride <= last && order.ahead(params[i + stride], u) {
            i += stride;
        }
    } else {
        while i >= stride && !order.ahead(params[i], u) {
            i -= stride;
        }
    }
    while i < last && order.ahead(params[i + 1], u) {
        i += 1;
    }
    while i > 0 && !order.ahead(params[i], u) {
        i -= 1;
    }

    let lo = i.min(last - 1);
    let hi = lo + 1;
    trace!(start, step, lo, hi, "table bracket");

    let width = params[hi] - params[lo];
    if width == T::ZERO {
        return Ok((hi, hi, T::ZERO));
    }
    Ok((lo, hi, (u - params[lo]) / width))
}

fn sample_table<T: Real, V: Interpolant<T>>(
    params: &[T],
    values: &[V],
    u: T,
    start: usize,
    step: isize,
    order: Order,
) -> Result<V> {
    let (lo, hi, t) = bracket(params, values.len(), u, start, step, order)?;
    if lo == hi {
        return Ok(values[lo]);
    }
    Ok(lerp(values[lo], values[hi], t))
}

/// Interpolates `values` at `u` over an ascending `params` table.
///
/// The search starts at index `start` and moves `step` entries at a time
/// (negative steps walk backwards) before settling on the bracketing
/// pair. Queries outside the table extrapolate from the end pair.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `params` is empty
/// - [`Error::LengthMismatch`] if the tables differ in length
/// - [`Error::InvalidStep`] if `step` is zero
///
/// # Example
///
/// ```rust
/// use ijk_math::sample_table_inc;
///
/// let params = [0.0f64, 0.25, 0.5, 1.0];
/// let values = [0.0f64, 10.0, 20.0, 40.0];
/// assert_eq!(sample_table_inc(&params, &values, 0.75, 0, 1).unwrap(), 30.0);
/// ```
pub fn sample_table_inc<T: Real, V: Interpolant<T>>(
    params: &[T],
    values: &[V],
    u: T,
    start: usize,
    step: isize,
) -> Result<V> {
    sample_table(params, values, u, start, step, Order::Ascending)
}

/// Interpolates `values` at `u` over a descending `params` table.
///
/// Same search and errors as [`sample_table_inc`].
pub fn sample_table_dec<T: Real, V: Interpolant<T>>(
    params: &[T],
    values: &[V],
    u: T,
    start: usize,
    step: isize,
) -> Result<V> {
    sample_table(params, values, u, start, step, Order::Descending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec2, vec3, DVec2, Vec3};
    use approx::assert_abs_diff_eq;

    fn line() -> Segment<f64, 2> {
        Segment::Hermite {
            v0: vec2(0.0, 0.0),
            dv0: vec2(4.0, 0.0),
            v1: vec2(4.0, 0.0),
            dv1: vec2(4.0, 0.0),
        }
    }

    fn segments() -> Vec<Segment<f32, 3>> {
        let a = vec3(0.0f32, 0.0, 0.0);
        let b = vec3(1.0f32, 2.0, 0.5);
        let c = vec3(3.0f32, -1.0, 1.0);
        let d = vec3(4.0f32, 0.0, 2.0);
        vec![
            Segment::Hermite { v0: a, dv0: b, v1: c, dv1: d },
            Segment::HermiteHandles { v0: a, c0: b, v1: d, c1: c },
            Segment::CatmullRom { prev: a, v0: b, v1: c, next: d },
            Segment::BicubicCatmullRom {
                grid: [[a, b, c, d], [b, c, d, a], [c, d, a, b], [d, a, b, c]],
                row_params: [0.1, 0.4, 0.6, 0.9],
            },
        ]
    }

    #[test]
    fn test_eval_endpoints() {
        for seg in segments() {
            match seg {
                Segment::Hermite { v0, v1, .. } | Segment::HermiteHandles { v0, v1, .. } => {
                    assert_eq!(seg.eval(0.0), v0);
                    assert_eq!(seg.eval(1.0), v1);
                }
                Segment::CatmullRom { v0, v1, .. } => {
                    assert_eq!(seg.eval(0.0), v0);
                    assert_eq!(seg.eval(1.0), v1);
                }
                Segment::BicubicCatmullRom { .. } => {}
            }
        }
    }

    #[test]
    fn test_reparam_monotonic() {
        for seg in segments() {
            for normalize in [false, true] {
                let t = seg.reparam(16, normalize).unwrap();
                assert_eq!(t.len(), 17);
                assert_eq!(t.params[0], 0.0);
                assert_eq!(t.params[16], 1.0);
                assert_eq!(t.arc_lengths[0], 0.0);
                assert!(t.arc_lengths.windows(2).all(|w| w[0] <= w[1]), "{}", seg.kind());
                if normalize {
                    assert_abs_diff_eq!(t.arc_lengths[16], 1.0);
                } else {
                    assert_eq!(t.arc_lengths[16], t.total_length);
                }
            }
        }
    }

    #[test]
    fn test_reparam_straight_line() {
        let t = line().reparam(8, false).unwrap();
        assert_abs_diff_eq!(t.total_length, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.param_at_arc_length(1.0).unwrap(), 0.25, epsilon = 1e-9);
        let p = t.sample_at_arc_length(3.0).unwrap();
        assert_abs_diff_eq!(p.x(), 3.0, epsilon = 1e-9);
        assert_eq!(p.y(), 0.0);
    }

    #[test]
    fn test_reparam_degenerate_segment() {
        let p = Vec3::splat(2.0);
        let seg = Segment::Hermite { v0: p, dv0: Vec3::ZERO, v1: p, dv1: Vec3::ZERO };
        let t = seg.reparam(4, true).unwrap();
        assert_eq!(t.total_length, 0.0);
        assert!(t.arc_lengths.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_reparam_into_validates() {
        let seg = line();
        let mut params = [0.0; 5];
        let mut arcs = [0.0; 5];
        let mut samples = [DVec2::ZERO; 4];
        assert_eq!(
            seg.reparam_into(&mut params, &mut arcs, &mut samples, 4, false),
            Err(Error::length_mismatch("samples", 5, 4))
        );
        assert_eq!(
            seg.reparam_into(&mut params, &mut arcs, &mut samples, 0, false),
            Err(Error::ZeroDivisions)
        );
        assert_eq!(seg.reparam(0, true), Err(Error::ZeroDivisions));
        assert_eq!(
            seg.reparam(usize::MAX, false),
            Err(Error::length_mismatch("params", usize::MAX, usize::MAX))
        );
        assert_eq!(
            seg.reparam_into(&mut params, &mut arcs, &mut samples, usize::MAX, false),
            Err(Error::length_mismatch("params", usize::MAX, 5))
        );

        let mut samples = [DVec2::ZERO; 5];
        let total = seg.reparam_into(&mut params, &mut arcs, &mut samples, 4, true).unwrap();
        assert_abs_diff_eq!(total, 4.0, epsilon = 1e-12);
        assert_eq!(arcs[4], 1.0);
    }

    #[test]
    fn test_sample_table_inc() {
        let params = [0.0f64, 0.25, 0.5, 1.0];
        let values = [0.0f64, 10.0, 20.0, 40.0];
        assert_eq!(sample_table_inc(&params, &values, 0.75, 0, 1).unwrap(), 30.0);
        assert_eq!(sample_table_inc(&params, &values, 0.5, 0, 1).unwrap(), 20.0);
        // Backwards walk from the end; coarse stride.
        assert_abs_diff_eq!(sample_table_inc(&params, &values, 0.1, 3, -1).unwrap(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sample_table_inc(&params, &values, 0.3, 0, 2).unwrap(), 12.0, epsilon = 1e-12);
        // Outside the table: extrapolate from the end pairs.
        assert_abs_diff_eq!(sample_table_inc(&params, &values, 1.5, 0, 1).unwrap(), 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sample_table_inc(&params, &values, -0.25, 2, 1).unwrap(), -10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_table_dec() {
        let params = [1.0f64, 0.5, 0.25, 0.0];
        let values = [vec2(40.0f64, 0.0), vec2(20.0, 1.0), vec2(10.0, 2.0), vec2(0.0, 3.0)];
        let v = sample_table_dec(&params, &values, 0.75, 0, 1).unwrap();
        assert_abs_diff_eq!(v.x(), 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y(), 0.5, epsilon = 1e-12);
        let v = sample_table_dec(&params, &values, 0.125, 3, -2).unwrap();
        assert_abs_diff_eq!(v.x(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_table_edge_cases() {
        let params = [0.0f32, 0.5, 0.5, 1.0];
        let values = [0.0f32, 1.0, 2.0, 3.0];
        assert_eq!(sample_table_inc(&params, &values, 0.5, 0, 1).unwrap(), 2.0);
        assert_eq!(sample_table_inc(&[0.3f32], &[7.0f32], 9.0, 0, 1).unwrap(), 7.0);
        assert_eq!(
            sample_table_inc::<f32, f32>(&[], &[], 0.0, 0, 1),
            Err(Error::empty("params"))
        );
        assert_eq!(
            sample_table_inc(&params, &values[..3], 0.0, 0, 1),
            Err(Error::length_mismatch("values", 4, 3))
        );
        assert_eq!(sample_table_dec(&params, &values, 0.0, 0, 0), Err(Error::InvalidStep));
    }
}
