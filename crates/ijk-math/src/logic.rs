//! Comparisons, logical and bitwise operations.
//!
//! Comparisons are component-wise and return a [`BVec`] of the same
//! dimension, never a single aggregate boolean; reduce with
//! [`all`](Vector::all) or [`any`](Vector::any) when one is needed.
//!
//! ```rust
//! use ijk_math::{vec3, BVec3};
//!
//! let a = vec3(1, 5, 3);
//! let b = vec3(2, 5, 1);
//! assert_eq!(a.cmplt(b), vec3(true, false, false));
//! assert_eq!(a.cmple(b), vec3(true, true, false));
//! assert!(a.cmpne(b).any());
//! assert!(!BVec3::ZERO.any());
//! ```
//!
//! Logical operations treat any non-zero component as `true`. Bitwise
//! operations use the `std::ops` operators on integer and `bool` vectors.
//! Shift amounts wrap to the bit width of the element type.

use crate::vector::{BVec, Vector};
use ijk_core::{Bits, Element, Integer, Number};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

impl<T: Element, const N: usize> Vector<T, N> {
    /// Component-wise `==`.
    #[inline]
    pub fn cmpeq(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a == b)
    }

    /// Component-wise `!=`.
    #[inline]
    pub fn cmpne(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a != b)
    }

    /// Component-wise logical and.
    #[inline]
    pub fn logical_and(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a.truthy() && b.truthy())
    }

    /// Component-wise logical nand.
    #[inline]
    pub fn logical_nand(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| !(a.truthy() && b.truthy()))
    }

    /// Component-wise logical or.
    #[inline]
    pub fn logical_or(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a.truthy() || b.truthy())
    }

    /// Component-wise logical nor.
    #[inline]
    pub fn logical_nor(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| !(a.truthy() || b.truthy()))
    }

    /// Component-wise logical not.
    #[inline]
    pub fn logical_not(self) -> BVec<N> {
        self.map(|a| !a.truthy())
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Component-wise `<`.
    #[inline]
    pub fn cmplt(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a < b)
    }

    /// Component-wise `<=`.
    #[inline]
    pub fn cmple(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a <= b)
    }

    /// Component-wise `>`.
    #[inline]
    pub fn cmpgt(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a > b)
    }

    /// Component-wise `>=`.
    #[inline]
    pub fn cmpge(self, rhs: Self) -> BVec<N> {
        self.zip_map(rhs, |a, b| a >= b)
    }
}

impl<const N: usize> BVec<N> {
    /// `true` if every component is `true`.
    #[inline]
    pub fn all(self) -> bool {
        self.0.iter().all(|&b| b)
    }

    /// `true` if any component is `true`.
    #[inline]
    pub fn any(self) -> bool {
        self.0.iter().any(|&b| b)
    }

    /// Picks `if_true[i]` where `self[i]` is set, else `if_false[i]`.
    #[inline]
    pub fn select<T: Element>(self, if_true: Vector<T, N>, if_false: Vector<T, N>) -> Vector<T, N> {
        Vector(std::array::from_fn(|i| {
            if self.0[i] { if_true.0[i] } else { if_false.0[i] }
        }))
    }
}

macro_rules! impl_bit_op {
    ($bound:ident: $($op:ident::$f:ident, $opa:ident::$fa:ident;)*) => {$(
        impl<T: $bound, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a.$f(b))
            }
        }

        impl<T: $bound, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: T) -> Self {
                self.map(|a| a.$f(rhs))
            }
        }

        impl<T: $bound, const N: usize> $opa for Vector<T, N> {
            #[inline]
            fn $fa(&mut self, rhs: Self) {
                *self = (*self).$f(rhs);
            }
        }
    )*};
}

impl_bit_op! {
    Bits:
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
}

impl<T: Integer, const N: usize> Shl for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a.wrapping_shl(b))
    }
}

impl<T: Integer, const N: usize> Shl<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: T) -> Self {
        self.map(|a| a.wrapping_shl(rhs))
    }
}

impl<T: Integer, const N: usize> Shr for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a.wrapping_shr(b))
    }
}

impl<T: Integer, const N: usize> Shr<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: T) -> Self {
        self.map(|a| a.wrapping_shr(rhs))
    }
}

impl<T: Bits, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|a| !a)
    }
}

impl<T: Bits, const N: usize> Vector<T, N> {
    /// Component-wise bitwise nand.
    #[inline]
    pub fn nand(self, rhs: Self) -> Self {
        !(self & rhs)
    }

    /// Component-wise bitwise nor.
    #[inline]
    pub fn nor(self, rhs: Self) -> Self {
        !(self | rhs)
    }

    /// Component-wise bitwise xnor.
    #[inline]
    pub fn xnor(self, rhs: Self) -> Self {
        !(self ^ rhs)
    }
}

// Scalar on the left: `0xff & v`, `1 << v`.
macro_rules! impl_bits_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize> BitAnd<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn bitand(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|b| self & b)
            }
        }

        impl<const N: usize> BitOr<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn bitor(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|b| self | b)
            }
        }

        impl<const N: usize> BitXor<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn bitxor(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|b| self ^ b)
            }
        }
    )*};
}

macro_rules! impl_shift_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize> Shl<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn shl(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|b| Integer::wrapping_shl(self, b))
            }
        }

        impl<const N: usize> Shr<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn shr(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|b| Integer::wrapping_shr(self, b))
            }
        }
    )*};
}

impl_bits_scalar_lhs!(i32, i64, u32, u64, bool);
impl_shift_scalar_lhs!(i32, i64, u32, u64);
