//! Geometric operations on floating-point vectors.
//!
//! Lengths, normalization, projection, Gram-Schmidt orthogonalization,
//! reflection and resizing, plus normalized and spherical interpolation.
//!
//! # Safe variants
//!
//! The plain forms divide by the length and produce NaN or infinity for a
//! zero vector. The `*_safe` forms return zero (the zero vector, or a zero
//! length inverse) in that case instead.
//!
//! ```rust
//! use ijk_math::{vec2, Vec2};
//!
//! let (unit, len) = vec2(3.0f32, 4.0).normalize_get_length();
//! assert_eq!(unit, vec2(0.6, 0.8));
//! assert_eq!(len, 5.0);
//! assert_eq!(Vec2::ZERO.normalize_safe(), Vec2::ZERO);
//! ```

use crate::kernel::recip_safe1;
use crate::vector::Vector;
use ijk_core::Real;
use tracing::trace;

impl<T: Real, const N: usize> Vector<T, N> {
    /// Squared length, `dot(v, v)`.
    #[inline]
    pub fn length_sq(self) -> T {
        self.dot(self)
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> T {
        self.length_sq().sqrt()
    }

    /// `1 / length_sq`.
    #[inline]
    pub fn length_sq_inv(self) -> T {
        self.length_sq().recip()
    }

    /// `1 / length`.
    #[inline]
    pub fn length_inv(self) -> T {
        self.length().recip()
    }

    /// `1 / length_sq`, or zero for the zero vector.
    #[inline]
    pub fn length_sq_inv_safe(self) -> T {
        recip_safe1(self.length_sq())
    }

    /// `1 / length`, or zero for the zero vector.
    #[inline]
    pub fn length_inv_safe(self) -> T {
        recip_safe1(self.length())
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, rhs: Self) -> T {
        (rhs - self).length()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance_sq(self, rhs: Self) -> T {
        (rhs - self).length_sq()
    }

    /// Unit vector in the direction of `self`.
    #[inline]
    pub fn normalize(self) -> Self {
        self * self.length_inv()
    }

    /// Unit vector, or the zero vector if `self` is zero.
    #[inline]
    pub fn normalize_safe(self) -> Self {
        self * self.length_inv_safe()
    }

    /// Returns `(normalize(self), length(self))`.
    #[inline]
    pub fn normalize_get_length(self) -> (Self, T) {
        let len = self.length();
        (self * len.recip(), len)
    }

    /// Returns `(normalize(self), 1 / length(self))`.
    #[inline]
    pub fn normalize_get_length_inv(self) -> (Self, T) {
        let inv = self.length_inv();
        (self * inv, inv)
    }

    /// Safe form of [`normalize_get_length`](Self::normalize_get_length).
    #[inline]
    pub fn normalize_safe_get_length(self) -> (Self, T) {
        let len = self.length();
        (self * recip_safe1(len), len)
    }

    /// Safe form of [`normalize_get_length_inv`](Self::normalize_get_length_inv).
    #[inline]
    pub fn normalize_safe_get_length_inv(self) -> (Self, T) {
        let inv = self.length_inv_safe();
        (self * inv, inv)
    }

    /// Scalar projection ratio `dot(base, v) / dot(base, base)`.
    #[inline]
    pub fn proj_ratio(base: Self, v: Self) -> T {
        base.dot(v) / base.dot(base)
    }

    /// Projection of `v` onto `base`.
    #[inline]
    pub fn proj(base: Self, v: Self) -> Self {
        base * Self::proj_ratio(base, v)
    }

    /// Component of `v` perpendicular to `base` (one Gram-Schmidt step).
    ///
    /// ```rust
    /// use ijk_math::{vec2, Vec2};
    ///
    /// assert_eq!(Vec2::ortho(vec2(2.0, 0.0), vec2(3.0, 4.0)), vec2(0.0, 4.0));
    /// ```
    #[inline]
    pub fn ortho(base: Self, v: Self) -> Self {
        v - Self::proj(base, v)
    }

    /// Returns `(normalize(ortho(base, v)), normalize(base))`.
    #[inline]
    pub fn ortho_norm(base: Self, v: Self) -> (Self, Self) {
        (Self::ortho(base, v).normalize(), base.normalize())
    }

    /// Sequential Gram-Schmidt: each input is orthogonalized against `base`
    /// and every previously produced output.
    ///
    /// The result has the same length as `inputs`. An input that depends
    /// linearly on the ones before it yields the zero vector, and zero
    /// outputs are skipped when orthogonalizing later inputs.
    ///
    /// ```rust
    /// use ijk_math::{vec3, Vec3};
    ///
    /// let out = Vec3::ortho_list(vec3(1.0, 0.0, 0.0), &[vec3(1.0, 1.0, 0.0), vec3(1.0, 1.0, 1.0)]);
    /// assert_eq!(out, vec![vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0)]);
    /// ```
    pub fn ortho_list(base: Self, inputs: &[Self]) -> Vec<Self> {
        trace!(count = inputs.len(), dim = N, "gram-schmidt list");
        let mut out: Vec<Self> = Vec::with_capacity(inputs.len());
        for &v in inputs {
            let mut r = Self::ortho(base, v);
            for &prev in &out {
                if prev.length_sq() != T::ZERO {
                    r = Self::ortho(prev, r);
                }
            }
            out.push(r);
        }
        out
    }

    /// Normalized sequential Gram-Schmidt.
    ///
    /// Returns `(normalize(base), outputs)` where every output is unit
    /// length and perpendicular to the base and all earlier outputs. A
    /// linearly dependent input yields the zero vector.
    pub fn ortho_norm_list(base: Self, inputs: &[Self]) -> (Self, Vec<Self>) {
        trace!(count = inputs.len(), dim = N, "normalized gram-schmidt list");
        let base_n = base.normalize();
        let mut out: Vec<Self> = Vec::with_capacity(inputs.len());
        for &v in inputs {
            let mut r = v - base_n * base_n.dot(v);
            for &prev in &out {
                r = r - prev * prev.dot(r);
            }
            out.push(r.normalize_safe());
        }
        (base_n, out)
    }

    /// Reflects `self` across the plane perpendicular to `normal`:
    /// `v - 2 * proj(normal, v)`.
    ///
    /// ```rust
    /// use ijk_math::vec2;
    ///
    /// assert_eq!(vec2(1.0, -1.0).reflect(vec2(0.0, 2.0)), vec2(1.0, 1.0));
    /// ```
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - Self::proj(normal, self) * T::TWO
    }

    /// Reflection scaled by `length_sq(normal)`, computed without dividing.
    ///
    /// Equals `reflect(self, normal) * dot(normal, normal)`.
    #[inline]
    pub fn reflect_scale(self, normal: Self) -> Self {
        self * normal.dot(normal) - normal * (T::TWO * normal.dot(self))
    }

    /// Reflection assuming `normal` is already unit length.
    #[inline]
    pub fn unit_reflect(self, normal: Self) -> Self {
        self - normal * (T::TWO * normal.dot(self))
    }

    /// `normalize(self) * new_length`.
    #[inline]
    pub fn resize(self, new_length: T) -> Self {
        self * (new_length * self.length_inv())
    }

    /// Resize, or the zero vector if `self` is zero.
    #[inline]
    pub fn resize_safe(self, new_length: T) -> Self {
        self * (new_length * self.length_inv_safe())
    }

    /// Normalized linear interpolation between unit vectors.
    #[inline]
    pub fn nlerp(self, rhs: Self, u: T) -> Self {
        self.lerp(rhs, u).normalize()
    }

    /// Spherical linear interpolation between unit vectors.
    ///
    /// Falls back to [`nlerp`](Self::nlerp) when the vectors are too close
    /// to parallel for a stable `sin`. Antiparallel inputs rotate through
    /// an axis perpendicular to `self`, chosen along its smallest component.
    ///
    /// ```rust
    /// use ijk_math::vec2;
    ///
    /// let mid = vec2(1.0f64, 0.0).slerp(vec2(-1.0, 0.0), 0.5);
    /// assert!((mid.length() - 1.0).abs() < 1e-12);
    /// ```
    pub fn slerp(self, rhs: Self, u: T) -> Self {
        let mut d = self.dot(rhs);
        if d > T::ONE {
            d = T::ONE;
        } else if d < -T::ONE {
            d = -T::ONE;
        }
        let angle = d.acos();
        let s = angle.sin();
        if s.abs1() <= T::EPSILON * T::from_f64(64.0) {
            if d >= T::ZERO {
                return self.nlerp(rhs, u);
            }
            let perp = self.perpendicular();
            let theta = u * angle;
            return self * theta.cos() + perp * theta.sin();
        }
        let s_inv = s.recip();
        self * ((T::ONE - u) * angle).sin() * s_inv + rhs * (u * angle).sin() * s_inv
    }

    /// Unit vector perpendicular to `self`, from the basis axis along the
    /// smallest component. Zero for one-dimensional vectors.
    fn perpendicular(self) -> Self {
        let mut axis = Self::ZERO;
        let best = (1..N).fold(0, |b, i| if self.0[i].abs1() < self.0[b].abs1() { i } else { b });
        if N > 0 {
            axis.0[best] = T::ONE;
        }
        Self::ortho(self, axis).normalize_safe()
    }

    /// Linear interpolation `self + u * (rhs - self)`.
    #[inline]
    pub fn lerp(self, rhs: Self, u: T) -> Self {
        self + (rhs - self) * u
    }
}

macro_rules! impl_cross_geom {
    ($($n:literal),*) => {$(
        impl<T: Real> Vector<T, $n> {
            /// Normalized cross product.
            #[inline]
            pub fn cross_normalize(self, rhs: Self) -> Self {
                self.cross(rhs).normalize()
            }

            /// Normalized cross product, or zero for parallel inputs.
            #[inline]
            pub fn cross_normalize_safe(self, rhs: Self) -> Self {
                self.cross(rhs).normalize_safe()
            }

            /// Returns `(normalize(cross), length(cross))`.
            #[inline]
            pub fn cross_normalize_get_length(self, rhs: Self) -> (Self, T) {
                self.cross(rhs).normalize_get_length()
            }

            /// Returns `(normalize(cross), 1 / length(cross))`.
            #[inline]
            pub fn cross_normalize_get_length_inv(self, rhs: Self) -> (Self, T) {
                self.cross(rhs).normalize_get_length_inv()
            }

            /// Safe form of `cross_normalize_get_length`.
            #[inline]
            pub fn cross_normalize_safe_get_length(self, rhs: Self) -> (Self, T) {
                self.cross(rhs).normalize_safe_get_length()
            }

            /// Safe form of `cross_normalize_get_length_inv`.
            #[inline]
            pub fn cross_normalize_safe_get_length_inv(self, rhs: Self) -> (Self, T) {
                self.cross(rhs).normalize_safe_get_length_inv()
            }

            /// Cross product resized to `new_length`.
            #[inline]
            pub fn cross_resize(self, rhs: Self, new_length: T) -> Self {
                self.cross(rhs).resize(new_length)
            }

            /// Cross product resized to `new_length`, or zero for parallel
            /// inputs.
            #[inline]
            pub fn cross_resize_safe(self, rhs: Self, new_length: T) -> Self {
                self.cross(rhs).resize_safe(new_length)
            }
        }
    )*};
}

impl_cross_geom!(3, 4);

impl<T: Real> Vector<T, 2> {
    /// Sign of the 2D cross product (its 1D normalization).
    #[inline]
    pub fn cross_normalize(self, rhs: Self) -> T {
        self.cross(rhs).sgn1()
    }

    /// Returns `(sgn(cross), |cross|)`.
    #[inline]
    pub fn cross_normalize_get_length(self, rhs: Self) -> (T, T) {
        crate::kernel::normalize_get_length1(self.cross(rhs))
    }

    /// Sign of the 2D cross product; zero for parallel inputs.
    #[inline]
    pub fn cross_normalize_safe(self, rhs: Self) -> T {
        self.cross(rhs).sgn1()
    }

    /// Returns `(sgn(cross), 1 / |cross|)`.
    #[inline]
    pub fn cross_normalize_get_length_inv(self, rhs: Self) -> (T, T) {
        crate::kernel::normalize_get_length_inv1(self.cross(rhs))
    }

    /// Returns `(sgn(cross), |cross|)`; both zero for parallel inputs.
    #[inline]
    pub fn cross_normalize_safe_get_length(self, rhs: Self) -> (T, T) {
        crate::kernel::normalize_get_length1(self.cross(rhs))
    }

    /// Returns `(sgn(cross), 1 / |cross|)`; both zero for parallel inputs.
    #[inline]
    pub fn cross_normalize_safe_get_length_inv(self, rhs: Self) -> (T, T) {
        let c = self.cross(rhs);
        (c.sgn1(), recip_safe1(c.abs1()))
    }

    /// `sgn(cross) * new_length`.
    #[inline]
    pub fn cross_resize(self, rhs: Self, new_length: T) -> T {
        self.cross(rhs).sgn1() * new_length
    }

    /// `sgn(cross) * new_length`; zero for parallel inputs.
    #[inline]
    pub fn cross_resize_safe(self, rhs: Self, new_length: T) -> T {
        self.cross(rhs).sgn1() * new_length
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::{vec2, vec3, vec4, DVec3, Vec2, Vec3, Vec4};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lengths() {
        let v = vec2(3.0f32, 4.0);
        assert_eq!(v.length_sq(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_inv(), 0.2);
        assert_eq!(v.length_sq_inv(), 0.04);
        assert!(Vec2::ZERO.length_inv().is_infinite());
        assert_eq!(Vec2::ZERO.length_inv_safe(), 0.0);
        assert_eq!(Vec2::ZERO.length_sq_inv_safe(), 0.0);
        assert_eq!(vec2(1.0f32, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        for v in [vec3(1.0f64, 2.0, 3.0), vec3(-1e-3, 5.0, 0.0), vec3(1e6, -1e6, 3.0)] {
            assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
        }
        let (n, inv) = vec3(0.0f64, 0.0, 2.0).normalize_get_length_inv();
        assert_eq!(n, vec3(0.0, 0.0, 1.0));
        assert_eq!(inv, 0.5);
    }

    #[test]
    fn test_normalize_safe_zero() {
        assert_eq!(Vec4::ZERO.normalize_safe(), Vec4::ZERO);
        assert!(Vec4::ZERO.normalize().iter().all(|c| c.is_nan()));
        assert_eq!(Vec3::ZERO.normalize_safe_get_length(), (Vec3::ZERO, 0.0));
        assert_eq!(Vec3::ZERO.normalize_safe_get_length_inv(), (Vec3::ZERO, 0.0));
        assert_eq!(Vec3::ZERO.resize_safe(3.0), Vec3::ZERO);
    }

    #[test]
    fn test_projection() {
        let base = vec3(2.0f64, 0.0, 0.0);
        let v = vec3(3.0f64, 4.0, 5.0);
        assert_eq!(DVec3::proj_ratio(base, v), 1.5);
        assert_eq!(DVec3::proj(base, v), vec3(3.0, 0.0, 0.0));
        assert_eq!(DVec3::ortho(base, v), vec3(0.0, 4.0, 5.0));
        let (o, b) = DVec3::ortho_norm(base, vec3(1.0, 3.0, 0.0));
        assert_eq!(o, vec3(0.0, 1.0, 0.0));
        assert_eq!(b, vec3(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ortho_norm_list() {
        let base = vec3(1.0f64, 1.0, 0.0);
        let inputs = [vec3(1.0, 0.0, 0.0), vec3(0.3, 0.2, 1.0)];
        let (b, out) = DVec3::ortho_norm_list(base, &inputs);
        assert_eq!(out.len(), inputs.len());
        assert_abs_diff_eq!(b.length(), 1.0, epsilon = 1e-12);
        for (i, a) in out.iter().enumerate() {
            assert_abs_diff_eq!(a.length(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(a.dot(b), 0.0, epsilon = 1e-12);
            for c in &out[..i] {
                assert_abs_diff_eq!(a.dot(*c), 0.0, epsilon = 1e-12);
            }
        }
        assert!(DVec3::ortho_list(base, &[]).is_empty());
    }

    #[test]
    fn test_ortho_list_dependent_input() {
        let x = vec3(1.0f64, 0.0, 0.0);
        let inputs = [vec3(1.0, 1.0, 0.0), vec3(2.0, 2.0, 0.0), vec3(0.0, 0.0, 1.0)];
        let out = DVec3::ortho_list(x, &inputs);
        assert_eq!(out, vec![vec3(0.0, 1.0, 0.0), DVec3::ZERO, vec3(0.0, 0.0, 1.0)]);

        let (_, unit) = DVec3::ortho_norm_list(x, &inputs);
        assert_eq!(unit, vec![vec3(0.0, 1.0, 0.0), DVec3::ZERO, vec3(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_reflection() {
        let v = vec3(1.0f32, -2.0, 0.0);
        let n = vec3(0.0f32, 3.0, 0.0);
        assert_eq!(v.reflect(n), vec3(1.0, 2.0, 0.0));
        assert_eq!(v.reflect_scale(n), vec3(9.0, 18.0, 0.0));
        assert_eq!(v.unit_reflect(vec3(0.0, 1.0, 0.0)), vec3(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_resize() {
        assert_eq!(vec2(3.0f32, 4.0).resize(10.0), vec2(6.0, 8.0));
        assert_eq!(vec2(3.0f32, 4.0).resize_safe(10.0), vec2(6.0, 8.0));
    }

    #[test]
    fn test_cross_variants() {
        let x = vec3(2.0f32, 0.0, 0.0);
        let y = vec3(0.0f32, 3.0, 0.0);
        assert_eq!(x.cross_normalize(y), vec3(0.0, 0.0, 1.0));
        assert_eq!(x.cross_normalize_get_length(y), (vec3(0.0, 0.0, 1.0), 6.0));
        assert_eq!(x.cross_resize(y, 2.0), vec3(0.0, 0.0, 2.0));
        assert_eq!(x.cross_normalize_safe(x), Vec3::ZERO);
        assert_eq!(x.cross_resize_safe(x, 2.0), Vec3::ZERO);
        let x4 = vec4(2.0f32, 0.0, 0.0, 5.0);
        let y4 = vec4(0.0f32, 3.0, 0.0, 1.0);
        assert_eq!(x4.cross_normalize(y4), vec4(0.0, 0.0, 1.0, 0.0));
        assert_eq!(vec2(0.0f32, 2.0).cross_normalize(vec2(3.0, 0.0)), -1.0);
        assert_eq!(vec2(0.0f32, 2.0).cross_normalize_get_length(vec2(3.0, 0.0)), (-1.0, 6.0));
    }

    #[test]
    fn test_cross_variants_2d() {
        let a = vec2(0.0f32, 2.0);
        let b = vec2(4.0f32, 0.0);
        assert_eq!(a.cross_normalize_safe(b), -1.0);
        assert_eq!(a.cross_normalize_get_length_inv(b), (-1.0, 0.125));
        assert_eq!(a.cross_normalize_safe_get_length(b), (-1.0, 8.0));
        assert_eq!(a.cross_normalize_safe_get_length_inv(b), (-1.0, 0.125));
        assert_eq!(a.cross_resize_safe(b, 3.0), -3.0);

        let p = vec2(1.0f32, 2.0);
        let q = vec2(2.0f32, 4.0);
        assert_eq!(p.cross_normalize_safe(q), 0.0);
        assert_eq!(p.cross_normalize_safe_get_length(q), (0.0, 0.0));
        assert_eq!(p.cross_normalize_safe_get_length_inv(q), (0.0, 0.0));
        assert_eq!(p.cross_resize_safe(q, 3.0), 0.0);
        assert!(p.cross_normalize_get_length_inv(q).1.is_infinite());
    }

    #[test]
    fn test_slerp_nlerp() {
        let a = vec2(1.0f64, 0.0);
        let b = vec2(0.0f64, 1.0);
        let mid = a.slerp(b, 0.5);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(mid[0], h, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[1], h, epsilon = 1e-12);
        let q = a.slerp(b, 1.0 / 3.0);
        assert_abs_diff_eq!(q[0], (std::f64::consts::PI / 6.0).cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.nlerp(b, 0.5).length(), 1.0, epsilon = 1e-12);
        assert_eq!(a.slerp(a, 0.3), a);
    }

    #[test]
    fn test_slerp_antiparallel() {
        let a = vec2(1.0f64, 0.0);
        let mid = a.slerp(-a, 0.5);
        assert!(mid.iter().all(|c| c.is_finite()));
        assert_abs_diff_eq!(mid.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.dot(a), 0.0, epsilon = 1e-12);
        let end = a.slerp(-a, 1.0);
        assert_abs_diff_eq!(end[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end[1], 0.0, epsilon = 1e-12);

        let z = vec3(0.0f64, 0.0, 1.0);
        let q = z.slerp(-z, 0.25);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.dot(z), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }
}
