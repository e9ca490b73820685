//! Component-wise arithmetic and vector products.
//!
//! Every operator comes in vector-vector, vector-scalar and scalar-vector
//! form:
//!
//! ```rust
//! use ijk_math::vec3;
//!
//! let v = vec3(2.0f32, 4.0, 8.0);
//! assert_eq!(v + v, vec3(4.0, 8.0, 16.0));
//! assert_eq!(v / 2.0, vec3(1.0, 2.0, 4.0));
//! assert_eq!(8.0 / v, vec3(4.0, 2.0, 1.0));
//! ```
//!
//! # Division by zero
//!
//! The plain `/` and `%` operators behave like the element type does:
//! floats produce infinity or NaN and integers panic. The `*_safe`
//! methods instead produce **zero** in every component whose divisor is
//! zero.

use crate::kernel::{div_safe1, rem_safe1};
use crate::vector::{vec3, vec4, Vector};
use ijk_core::{Negate, Number, Signed};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

macro_rules! impl_binary_op {
    ($($op:ident::$f:ident, $opa:ident::$fa:ident;)*) => {$(
        impl<T: Number, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a.$f(b))
            }
        }

        impl<T: Number, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: T) -> Self {
                self.map(|a| a.$f(rhs))
            }
        }

        impl<T: Number, const N: usize> $opa for Vector<T, N> {
            #[inline]
            fn $fa(&mut self, rhs: Self) {
                *self = (*self).$f(rhs);
            }
        }

        impl<T: Number, const N: usize> $opa<T> for Vector<T, N> {
            #[inline]
            fn $fa(&mut self, rhs: T) {
                *self = (*self).$f(rhs);
            }
        }
    )*};
}

impl_binary_op! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
}

// Scalar on the left: `2.0 * v`. Coherence rules out a generic impl.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl_scalar_lhs!(@op $t, Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
    )*};
    (@op $t:ty, $($op:ident::$f:ident),*) => {$(
        impl<const N: usize> $op<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $f(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|b| self.$f(b))
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i32, i64, u32, u64);

impl<T: Signed, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    /// Integer components wrap, so `-MIN == MIN`.
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| a.negate())
    }
}

impl<T: Negate, const N: usize> Vector<T, N> {
    /// Negates every component, promoting unsigned types to signed.
    ///
    /// ```rust
    /// use ijk_math::vec2;
    ///
    /// assert_eq!(vec2(1u32, 2).negate(), vec2(-1i32, -2));
    /// ```
    #[inline]
    pub fn negate(self) -> Vector<T::Signed, N> {
        self.map(|a| a.negate())
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// All components one.
    pub const ONE: Self = Self([T::ONE; N]);

    /// Component-wise division; zero wherever `rhs` is zero.
    ///
    /// ```rust
    /// use ijk_math::vec3;
    ///
    /// let q = vec3(1.0f32, 2.0, 3.0).div_safe(vec3(2.0, 0.0, 3.0));
    /// assert_eq!(q, vec3(0.5, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn div_safe(self, rhs: Self) -> Self {
        self.zip_map(rhs, div_safe1)
    }

    /// Divides by a scalar; the zero vector if `rhs` is zero.
    #[inline]
    pub fn div_scalar_safe(self, rhs: T) -> Self {
        self.map(|a| div_safe1(a, rhs))
    }

    /// Divides a scalar by each component; zero wherever `rhs` is zero.
    #[inline]
    pub fn scalar_div_safe(lhs: T, rhs: Self) -> Self {
        rhs.map(|b| div_safe1(lhs, b))
    }

    /// Component-wise remainder; zero wherever `rhs` is zero.
    #[inline]
    pub fn rem_safe(self, rhs: Self) -> Self {
        self.zip_map(rhs, rem_safe1)
    }

    /// Remainder by a scalar; the zero vector if `rhs` is zero.
    #[inline]
    pub fn rem_scalar_safe(self, rhs: T) -> Self {
        self.map(|a| rem_safe1(a, rhs))
    }

    /// Remainder of a scalar by each component; zero wherever `rhs` is zero.
    #[inline]
    pub fn scalar_rem_safe(lhs: T, rhs: Self) -> Self {
        rhs.map(|b| rem_safe1(lhs, b))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(Number::abs1)
    }

    /// Component-wise sign.
    #[inline]
    pub fn sgn(self) -> Self {
        self.map(Number::sgn1)
    }

    /// Dot product `Σ aᵢ·bᵢ`.
    ///
    /// ```rust
    /// use ijk_math::vec3;
    ///
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
    /// ```
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }
}

impl<T: Number> Vector<T, 2> {
    /// 2D cross product: the signed magnitude `a.x*b.y - a.y*b.x` of the
    /// perpendicular axis.
    ///
    /// ```rust
    /// use ijk_math::vec2;
    ///
    /// assert_eq!(vec2(1, 0).cross(vec2(0, 1)), 1);
    /// ```
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
    }
}

impl<T: Number> Vector<T, 3> {
    /// Cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Number> Vector<T, 4> {
    /// Cross product of the first three components; `w` of the result is
    /// zero.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let c = self.truncate().cross(rhs.truncate());
        vec4(c.0[0], c.0[1], c.0[2], T::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec2, IVec3, UVec3, Vec3};

    #[test]
    fn test_operator_forms() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(4.0f32, 5.0, 6.0);
        assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * b, vec3(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, vec3(2.0, 4.0, 6.0));
        assert_eq!(10.0 - a, vec3(9.0, 8.0, 7.0));
        assert_eq!(vec3(7, 8, 9) % 4, vec3(3, 0, 1));
        assert_eq!(10 % vec3(3, 4, 6), vec3(1, 2, 4));
    }

    #[test]
    fn test_compound_assign() {
        let mut v = vec3(1, 2, 3);
        v += vec3(1, 1, 1);
        v *= 3;
        v -= 1;
        assert_eq!(v, vec3(5, 8, 11));
        v /= vec3(5, 4, 11);
        assert_eq!(v, IVec3::ONE + vec3(0, 1, 0));
    }

    #[test]
    fn test_safe_division_totality() {
        let lh = vec4(1.0f64, -2.0, 0.0, 4.0);
        let rh = vec4(0.0f64, 2.0, 0.0, -0.0);
        let q = lh.div_safe(rh);
        assert!(q.iter().all(|c| c.is_finite()));
        assert_eq!(q, vec4(0.0, -1.0, 0.0, 0.0));
        assert!((lh / rh).iter().any(|c| !c.is_finite()));

        assert_eq!(vec3(5, 6, 7).rem_safe(vec3(0, 4, 7)), vec3(0, 2, 0));
        assert_eq!(vec3(5u32, 6, 7).div_scalar_safe(0), UVec3::ZERO);
        assert_eq!(vec2(i32::MIN, 1).div_safe(vec2(-1, 1)), vec2(i32::MIN, 1));
        assert_eq!(vec2(i64::MIN, 7).rem_safe(vec2(-1, 0)), vec2(0, 0));
        assert_eq!(-vec2(i32::MIN, 3), vec2(i32::MIN, -3));
        assert_eq!(Vec3::scalar_div_safe(1.0, vec3(0.0, 2.0, 4.0)), vec3(0.0, 0.5, 0.25));
        assert_eq!(IVec3::scalar_rem_safe(9, vec3(0, 2, 4)), vec3(0, 1, 1));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-vec3(1, -2, 3), vec3(-1, 2, -3));
        assert_eq!(vec3(1u64, 2, 3).negate(), vec3(-1i64, -2, -3));
        assert_eq!(vec2(0.5f32, -0.5).negate(), vec2(-0.5, 0.5));
    }

    #[test]
    fn test_cross_products() {
        assert_eq!(vec2(1.0, 0.0).cross(vec2(0.0, 1.0)), 1.0);
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
        assert_eq!(vec4(1, 0, 0, 7).cross(vec4(0, 1, 0, 9)), vec4(0, 0, 1, 0));
    }

    #[test]
    fn test_abs_sgn_dot() {
        assert_eq!(vec3(-2, 0, 5).abs(), vec3(2, 0, 5));
        assert_eq!(vec3(-2.0, 0.0, 5.0).sgn(), vec3(-1.0, 0.0, 1.0));
        assert_eq!(vec4(1u32, 2, 3, 4).dot(UVec3::ONE.extend(1)), 10);
    }
}
