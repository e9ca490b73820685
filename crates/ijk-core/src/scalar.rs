//! Element types for ijk vectors.
//!
//! Every vector operation is written once, generically, against the trait
//! hierarchy in this module. Which operations a vector offers follows from
//! which traits its element type implements:
//!
//! | Trait       | Types                                  | Unlocks                          |
//! |-------------|----------------------------------------|----------------------------------|
//! | [`Element`] | `f32 f64 i32 i64 u32 u64 bool`         | storage, swizzles, logical ops   |
//! | [`Number`]  | `f32 f64 i32 i64 u32 u64`              | arithmetic, comparisons, dot     |
//! | [`Signed`]  | `f32 f64 i32 i64`                      | `Neg`                            |
//! | [`Negate`]  | `f32 f64 i32 i64 u32 u64`              | sign-promoting negation          |
//! | [`Bits`]    | `i32 i64 u32 u64 bool`                 | bitwise and/or/xor/not           |
//! | [`Integer`] | `i32 i64 u32 u64`                      | shifts                           |
//! | [`Real`]    | `f32 f64`                              | length, normalize, curves        |
//!
//! # Example
//!
//! ```
//! use ijk_core::{Negate, Number, Real};
//!
//! assert_eq!((-3i32).abs1(), 3);
//! assert_eq!(7u32.sgn1(), 1);
//! assert_eq!(5u32.negate(), -5i32);
//! assert_eq!(4.0f64.sqrt(), 2.0);
//! ```

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

/// Anything that can be stored in a vector component.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The zero (or `false`) value.
    const ZERO: Self;

    /// Truth value used by the logical operations: non-zero is `true`.
    fn truthy(self) -> bool;
}

/// Numeric element types: closed under the five arithmetic operators.
pub trait Number:
    Element
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// The multiplicative identity.
    const ONE: Self;

    /// Absolute value. Identity for unsigned types.
    fn abs1(self) -> Self;

    /// Sign: `0` for zero, otherwise `+1` or `-1`. Never negative for
    /// unsigned types.
    fn sgn1(self) -> Self;

    /// Division that wraps on integer overflow (`MIN / -1 == MIN`).
    /// Plain `/` for floats. Still panics on an integer zero divisor.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// Remainder that wraps on integer overflow (`MIN % -1 == 0`).
    /// Plain `%` for floats.
    fn wrapping_rem(self, rhs: Self) -> Self;
}

/// Numbers with a native negation.
///
/// [`Negate::negate`] is the wrapping form (`i32::MIN` negates to itself).
pub trait Signed: Number + Neg<Output = Self> + Negate<Signed = Self> {}

/// Negation that promotes unsigned types to their signed counterpart.
///
/// `u32` negates into `i32` and `u64` into `i64` with two's-complement
/// wrapping; signed and floating types negate into themselves.
pub trait Negate: Number {
    /// Result type of negation.
    type Signed: Number;

    /// Returns `-self` in the signed counterpart type.
    fn negate(self) -> Self::Signed;
}

/// Element types supporting bitwise logic.
pub trait Bits:
    Element + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self> + Not<Output = Self>
{
}

/// Integer element types: bitwise logic plus shifts by the same type.
pub trait Integer: Number + Bits + Eq + Ord + Shl<Self, Output = Self> + Shr<Self, Output = Self> {
    /// `self << rhs` with the shift amount masked to the bit width.
    fn wrapping_shl(self, rhs: Self) -> Self;

    /// `self >> rhs` with the shift amount masked to the bit width.
    fn wrapping_shr(self, rhs: Self) -> Self;
}

/// Floating-point element types.
///
/// Carries the square-root and trigonometric collaborators the geometric
/// and curve layers need.
pub trait Real: Signed {
    /// One half.
    const HALF: Self;
    /// Two.
    const TWO: Self;
    /// Machine epsilon.
    const EPSILON: Self;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Reciprocal, `1 / self`.
    fn recip(self) -> Self;
    /// Arc cosine in radians.
    fn acos(self) -> Self;
    /// Sine of an angle in radians.
    fn sin(self) -> Self;
    /// Cosine of an angle in radians.
    fn cos(self) -> Self;
    /// Converts from `f64`, rounding if needed.
    fn from_f64(v: f64) -> Self;
    /// Widens to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn truthy(self) -> bool {
                self != 0.0
            }
        }

        impl Number for $t {
            const ONE: Self = 1.0;

            #[inline]
            fn abs1(self) -> Self {
                if self >= 0.0 { self } else { -self }
            }

            #[inline]
            fn sgn1(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn wrapping_rem(self, rhs: Self) -> Self {
                self % rhs
            }
        }

        impl Signed for $t {}

        impl Negate for $t {
            type Signed = $t;

            #[inline]
            fn negate(self) -> $t {
                -self
            }
        }

        impl Real for $t {
            const HALF: Self = 0.5;
            const TWO: Self = 2.0;
            const EPSILON: Self = <$t>::EPSILON;

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn recip(self) -> Self {
                1.0 / self
            }

            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_signed_int {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const ZERO: Self = 0;

            #[inline]
            fn truthy(self) -> bool {
                self != 0
            }
        }

        impl Number for $t {
            const ONE: Self = 1;

            #[inline]
            fn abs1(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn sgn1(self) -> Self {
                self.signum()
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }

            #[inline]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }
        }

        impl Signed for $t {}

        impl Negate for $t {
            type Signed = $t;

            #[inline]
            fn negate(self) -> $t {
                self.wrapping_neg()
            }
        }

        impl Bits for $t {}

        impl Integer for $t {
            #[inline]
            fn wrapping_shl(self, rhs: Self) -> Self {
                <$t>::wrapping_shl(self, rhs as u32)
            }

            #[inline]
            fn wrapping_shr(self, rhs: Self) -> Self {
                <$t>::wrapping_shr(self, rhs as u32)
            }
        }
    )*};
}

macro_rules! impl_unsigned_int {
    ($($t:ty => $s:ty),*) => {$(
        impl Element for $t {
            const ZERO: Self = 0;

            #[inline]
            fn truthy(self) -> bool {
                self != 0
            }
        }

        impl Number for $t {
            const ONE: Self = 1;

            #[inline]
            fn abs1(self) -> Self {
                self
            }

            #[inline]
            fn sgn1(self) -> Self {
                if self == 0 { 0 } else { 1 }
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }

            #[inline]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }
        }

        impl Negate for $t {
            type Signed = $s;

            #[inline]
            fn negate(self) -> $s {
                (self as $s).wrapping_neg()
            }
        }

        impl Bits for $t {}

        impl Integer for $t {
            #[inline]
            fn wrapping_shl(self, rhs: Self) -> Self {
                <$t>::wrapping_shl(self, rhs as u32)
            }

            #[inline]
            fn wrapping_shr(self, rhs: Self) -> Self {
                <$t>::wrapping_shr(self, rhs as u32)
            }
        }
    )*};
}

impl_float!(f32, f64);
impl_signed_int!(i32, i64);
impl_unsigned_int!(u32 => i32, u64 => i64);

impl Element for bool {
    const ZERO: Self = false;

    #[inline]
    fn truthy(self) -> bool {
        self
    }
}

impl Bits for bool {}
