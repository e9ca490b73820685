//! Array-based interface.
//!
//! The same operations as the [`Vector`] methods, written for plain
//! `[T; N]` buffers: inputs are borrowed, the result is written into the
//! caller's `out` array, and `out` is returned so calls can be chained.
//! Nothing here allocates except the list and Bezier helpers that take
//! runtime-sized slices.
//!
//! ```rust
//! use ijk_math::array;
//!
//! let mut out = [0.0f32; 3];
//! array::add(&mut out, &[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]);
//! assert_eq!(out, [2.0, 3.0, 4.0]);
//!
//! let len = array::length(array::mul_scalar(&mut out, &[3.0, 0.0, 4.0], 2.0));
//! assert_eq!(len, 10.0);
//! ```
//!
//! Slice-based functions check their lengths and return
//! [`Error`](ijk_core::Error) on a mismatch.

use crate::curve::{bracket, Order, Segment};
use crate::interp;
use crate::vector::Vector;
use ijk_core::{Bits, Element, Error, Integer, Negate, Number, Real, Result, Signed};

#[inline]
fn put<T, const N: usize>(out: &mut [T; N], r: Vector<T, N>) -> &mut [T; N] {
    *out = r.0;
    out
}

/// Fills `out` with zeros.
#[inline]
pub fn zero<T: Element, const N: usize>(out: &mut [T; N]) -> &mut [T; N] {
    put(out, Vector::ZERO)
}

/// Fills `out` with `s`.
#[inline]
pub fn splat<T: Element, const N: usize>(out: &mut [T; N], s: T) -> &mut [T; N] {
    put(out, Vector::splat(s))
}

/// Copies `a` into `out`.
#[inline]
pub fn set<'a, T: Element, const N: usize>(out: &'a mut [T; N], a: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a))
}

/// `out = (v.x, v.y, z)`.
#[inline]
pub fn from_vec2_z<'a, T: Element>(out: &'a mut [T; 3], v: &[T; 2], z: T) -> &'a mut [T; 3] {
    put(out, Vector::<T, 3>::from_vec2_z(Vector(*v), z))
}

/// `out = (x, v.x, v.y)`.
#[inline]
pub fn from_x_vec2<'a, T: Element>(out: &'a mut [T; 3], x: T, v: &[T; 2]) -> &'a mut [T; 3] {
    put(out, Vector::<T, 3>::from_x_vec2(x, Vector(*v)))
}

/// `out = (v.x, v.y, v.z, w)`.
#[inline]
pub fn from_vec3_w<'a, T: Element>(out: &'a mut [T; 4], v: &[T; 3], w: T) -> &'a mut [T; 4] {
    put(out, Vector::<T, 4>::from_vec3_w(Vector(*v), w))
}

/// `out = (x, v.x, v.y, v.z)`.
#[inline]
pub fn from_x_vec3<'a, T: Element>(out: &'a mut [T; 4], x: T, v: &[T; 3]) -> &'a mut [T; 4] {
    put(out, Vector::<T, 4>::from_x_vec3(x, Vector(*v)))
}

/// `out = (v.x, v.y, z, w)`.
#[inline]
pub fn from_vec2_zw<'a, T: Element>(out: &'a mut [T; 4], v: &[T; 2], z: T, w: T) -> &'a mut [T; 4] {
    put(out, Vector::<T, 4>::from_vec2_zw(Vector(*v), z, w))
}

/// `out = (x, v.x, v.y, w)`.
#[inline]
pub fn from_x_vec2_w<'a, T: Element>(out: &'a mut [T; 4], x: T, v: &[T; 2], w: T) -> &'a mut [T; 4] {
    put(out, Vector::<T, 4>::from_x_vec2_w(x, Vector(*v), w))
}

/// `out = (x, y, v.x, v.y)`.
#[inline]
pub fn from_xy_vec2<'a, T: Element>(out: &'a mut [T; 4], x: T, y: T, v: &[T; 2]) -> &'a mut [T; 4] {
    put(out, Vector::<T, 4>::from_xy_vec2(x, y, Vector(*v)))
}

/// `out = (a.x, a.y, b.x, b.y)`.
#[inline]
pub fn from_vec2_vec2<'a, T: Element>(out: &'a mut [T; 4], a: &[T; 2], b: &[T; 2]) -> &'a mut [T; 4] {
    put(out, Vector::<T, 4>::from_vec2_vec2(Vector(*a), Vector(*b)))
}

/// Widens a 2D array to 3D by appending `z`.
#[inline]
pub fn extend2<'a, T: Element>(out: &'a mut [T; 3], a: &[T; 2], z: T) -> &'a mut [T; 3] {
    put(out, Vector(*a).extend(z))
}

/// Widens a 3D array to 4D by appending `w`.
#[inline]
pub fn extend3<'a, T: Element>(out: &'a mut [T; 4], a: &[T; 3], w: T) -> &'a mut [T; 4] {
    put(out, Vector(*a).extend(w))
}

/// Drops the last component of a 3D array.
#[inline]
pub fn truncate3<'a, T: Element>(out: &'a mut [T; 2], a: &[T; 3]) -> &'a mut [T; 2] {
    put(out, Vector(*a).truncate())
}

/// Drops the last component of a 4D array.
#[inline]
pub fn truncate4<'a, T: Element>(out: &'a mut [T; 3], a: &[T; 4]) -> &'a mut [T; 3] {
    put(out, Vector(*a).truncate())
}

/// Copies the shared prefix of `a` into `out` and zero-fills the rest.
#[inline]
pub fn reshape<'a, T: Element, const M: usize, const N: usize>(out: &'a mut [T; M], a: &[T; N]) -> &'a mut [T; M] {
    put(out, Vector(*a).reshape::<M>())
}

macro_rules! binary {
    ($bound:ident: $($f:ident, $fs:ident, $sf:ident => $op:tt;)*) => {$(
        #[doc = concat!("`out = a ", stringify!($op), " b`, component-wise.")]
        #[inline]
        pub fn $f<'a, T: $bound, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N]) -> &'a mut [T; N] {
            put(out, Vector(*a) $op Vector(*b))
        }

        #[doc = concat!("`out = a ", stringify!($op), " s` for every component of `a`.")]
        #[inline]
        pub fn $fs<'a, T: $bound, const N: usize>(out: &'a mut [T; N], a: &[T; N], s: T) -> &'a mut [T; N] {
            put(out, Vector(*a) $op s)
        }

        #[doc = concat!("`out = s ", stringify!($op), " b` for every component of `b`.")]
        #[inline]
        pub fn $sf<'a, T: $bound, const N: usize>(out: &'a mut [T; N], s: T, b: &[T; N]) -> &'a mut [T; N] {
            put(out, Vector(*b).map(|c| s $op c))
        }
    )*};
}

binary! {
    Number:
    add, add_scalar, scalar_add => +;
    sub, sub_scalar, scalar_sub => -;
    mul, mul_scalar, scalar_mul => *;
    div, div_scalar, scalar_div => /;
    rem, rem_scalar, scalar_rem => %;
}

binary! {
    Bits:
    bit_and, bit_and_scalar, scalar_bit_and => &;
    bit_or, bit_or_scalar, scalar_bit_or => |;
    bit_xor, bit_xor_scalar, scalar_bit_xor => ^;
}

binary! {
    Integer:
    shl, shl_scalar, scalar_shl => <<;
    shr, shr_scalar, scalar_shr => >>;
}

/// Component-wise division; zero wherever `b` is zero.
#[inline]
pub fn div_safe<'a, T: Number, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).div_safe(Vector(*b)))
}

/// Division by a scalar; all zeros if `s` is zero.
#[inline]
pub fn div_scalar_safe<'a, T: Number, const N: usize>(out: &'a mut [T; N], a: &[T; N], s: T) -> &'a mut [T; N] {
    put(out, Vector(*a).div_scalar_safe(s))
}

/// Scalar divided by each component; zero wherever `b` is zero.
#[inline]
pub fn scalar_div_safe<'a, T: Number, const N: usize>(out: &'a mut [T; N], s: T, b: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector::scalar_div_safe(s, Vector(*b)))
}

/// Component-wise remainder; zero wherever `b` is zero.
#[inline]
pub fn rem_safe<'a, T: Number, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).rem_safe(Vector(*b)))
}

/// Remainder by a scalar; all zeros if `s` is zero.
#[inline]
pub fn rem_scalar_safe<'a, T: Number, const N: usize>(out: &'a mut [T; N], a: &[T; N], s: T) -> &'a mut [T; N] {
    put(out, Vector(*a).rem_scalar_safe(s))
}

/// Remainder of a scalar by each component; zero wherever `b` is zero.
#[inline]
pub fn scalar_rem_safe<'a, T: Number, const N: usize>(out: &'a mut [T; N], s: T, b: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector::scalar_rem_safe(s, Vector(*b)))
}

/// `out = -a`.
#[inline]
pub fn neg<'a, T: Signed, const N: usize>(out: &'a mut [T; N], a: &[T; N]) -> &'a mut [T; N] {
    put(out, -Vector(*a))
}

/// `out = -a`, promoting unsigned components to signed.
#[inline]
pub fn negate<'a, T: Negate, const N: usize>(out: &'a mut [T::Signed; N], a: &[T; N]) -> &'a mut [T::Signed; N] {
    put(out, Vector(*a).negate())
}

/// Component-wise absolute value.
#[inline]
pub fn abs<'a, T: Number, const N: usize>(out: &'a mut [T; N], a: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).abs())
}

/// Component-wise sign.
#[inline]
pub fn sgn<'a, T: Number, const N: usize>(out: &'a mut [T; N], a: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).sgn())
}

/// Component-wise bitwise not.
#[inline]
pub fn bit_not<'a, T: Bits, const N: usize>(out: &'a mut [T; N], a: &[T; N]) -> &'a mut [T; N] {
    put(out, !Vector(*a))
}

/// Bitwise `!(a & b)`.
#[inline]
pub fn bit_nand<'a, T: Bits, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).nand(Vector(*b)))
}

/// Bitwise `!(a | b)`.
#[inline]
pub fn bit_nor<'a, T: Bits, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).nor(Vector(*b)))
}

/// Bitwise `!(a ^ b)`.
#[inline]
pub fn bit_xnor<'a, T: Bits, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).xnor(Vector(*b)))
}

/// `true` where a component is zero (or `false`).
#[inline]
pub fn logical_not<'a, T: Element, const N: usize>(out: &'a mut [bool; N], a: &[T; N]) -> &'a mut [bool; N] {
    put(out, Vector(*a).logical_not())
}

macro_rules! compare {
    ($bound:ident: $($f:ident),*) => {$(
        #[doc = concat!("Component-wise `", stringify!($f), "` into a `bool` mask.")]
        #[inline]
        pub fn $f<'a, T: $bound, const N: usize>(out: &'a mut [bool; N], a: &[T; N], b: &[T; N]) -> &'a mut [bool; N] {
            put(out, Vector(*a).$f(Vector(*b)))
        }
    )*};
}

compare!(Element: cmpeq, cmpne, logical_and, logical_or, logical_nand, logical_nor);
compare!(Number: cmplt, cmple, cmpgt, cmpge);

/// Dot product.
#[inline]
pub fn dot<T: Number, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    Vector(*a).dot(Vector(*b))
}

/// 2D cross product (a scalar).
#[inline]
pub fn cross2<T: Number>(a: &[T; 2], b: &[T; 2]) -> T {
    Vector(*a).cross(Vector(*b))
}

/// 3D cross product.
#[inline]
pub fn cross3<'a, T: Number>(out: &'a mut [T; 3], a: &[T; 3], b: &[T; 3]) -> &'a mut [T; 3] {
    put(out, Vector(*a).cross(Vector(*b)))
}

/// Cross product of the `xyz` parts; `out[3]` is zero.
#[inline]
pub fn cross4<'a, T: Number>(out: &'a mut [T; 4], a: &[T; 4], b: &[T; 4]) -> &'a mut [T; 4] {
    put(out, Vector(*a).cross(Vector(*b)))
}

macro_rules! cross_normalize {
    ($($n:literal => $cn:ident, $cns:ident, $cngl:ident, $cngli:ident, $cnsgl:ident, $cnsgli:ident, $cr:ident, $crs:ident;)*) => {$(
        #[doc = concat!("Normalized ", stringify!($n), "D cross product.")]
        #[inline]
        pub fn $cn<'a, T: Real>(out: &'a mut [T; $n], a: &[T; $n], b: &[T; $n]) -> &'a mut [T; $n] {
            put(out, Vector(*a).cross_normalize(Vector(*b)))
        }

        #[doc = concat!("Normalized ", stringify!($n), "D cross product, or zeros for parallel inputs.")]
        #[inline]
        pub fn $cns<'a, T: Real>(out: &'a mut [T; $n], a: &[T; $n], b: &[T; $n]) -> &'a mut [T; $n] {
            put(out, Vector(*a).cross_normalize_safe(Vector(*b)))
        }

        /// Normalized cross product; the cross product's length goes to `len`.
        #[inline]
        pub fn $cngl<'a, T: Real>(out: &'a mut [T; $n], len: &mut T, a: &[T; $n], b: &[T; $n]) -> &'a mut [T; $n] {
            let (n, l) = Vector(*a).cross_normalize_get_length(Vector(*b));
            *len = l;
            put(out, n)
        }

        /// Normalized cross product; `1 / length(cross)` goes to `len_inv`.
        #[inline]
        pub fn $cngli<'a, T: Real>(out: &'a mut [T; $n], len_inv: &mut T, a: &[T; $n], b: &[T; $n]) -> &'a mut [T; $n] {
            let (n, l) = Vector(*a).cross_normalize_get_length_inv(Vector(*b));
            *len_inv = l;
            put(out, n)
        }

        #[doc = concat!("Safe form of [`", stringify!($cngl), "`].")]
        #[inline]
        pub fn $cnsgl<'a, T: Real>(out: &'a mut [T; $n], len: &mut T, a: &[T; $n], b: &[T; $n]) -> &'a mut [T; $n] {
            let (n, l) = Vector(*a).cross_normalize_safe_get_length(Vector(*b));
            *len = l;
            put(out, n)
        }

        #[doc = concat!("Safe form of [`", stringify!($cngli), "`].")]
        #[inline]
        pub fn $cnsgli<'a, T: Real>(out: &'a mut [T; $n], len_inv: &mut T, a: &[T; $n], b: &[T; $n]) -> &'a mut [T; $n] {
            let (n, l) = Vector(*a).cross_normalize_safe_get_length_inv(Vector(*b));
            *len_inv = l;
            put(out, n)
        }

        #[doc = concat!(stringify!($n), "D cross product resized to `new_length`.")]
        #[inline]
        pub fn $cr<'a, T: Real>(out: &'a mut [T; $n], a: &[T; $n], b: &[T; $n], new_length: T) -> &'a mut [T; $n] {
            put(out, Vector(*a).cross_resize(Vector(*b), new_length))
        }

        #[doc = concat!(stringify!($n), "D cross product resized to `new_length`, or zeros for parallel inputs.")]
        #[inline]
        pub fn $crs<'a, T: Real>(out: &'a mut [T; $n], a: &[T; $n], b: &[T; $n], new_length: T) -> &'a mut [T; $n] {
            put(out, Vector(*a).cross_resize_safe(Vector(*b), new_length))
        }
    )*};
}

cross_normalize! {
    3 => cross_normalize3, cross_normalize_safe3, cross_normalize_get_length3, cross_normalize_get_length_inv3,
        cross_normalize_safe_get_length3, cross_normalize_safe_get_length_inv3, cross_resize3, cross_resize_safe3;
    4 => cross_normalize4, cross_normalize_safe4, cross_normalize_get_length4, cross_normalize_get_length_inv4,
        cross_normalize_safe_get_length4, cross_normalize_safe_get_length_inv4, cross_resize4, cross_resize_safe4;
}

/// Sign of the 2D cross product.
#[inline]
pub fn cross_normalize2<T: Real>(a: &[T; 2], b: &[T; 2]) -> T {
    Vector(*a).cross_normalize(Vector(*b))
}

/// Sign of the 2D cross product; zero for parallel inputs.
#[inline]
pub fn cross_normalize_safe2<T: Real>(a: &[T; 2], b: &[T; 2]) -> T {
    Vector(*a).cross_normalize_safe(Vector(*b))
}

/// Sign of the 2D cross product; its magnitude goes to `len`.
#[inline]
pub fn cross_normalize_get_length2<T: Real>(len: &mut T, a: &[T; 2], b: &[T; 2]) -> T {
    let (n, l) = Vector(*a).cross_normalize_get_length(Vector(*b));
    *len = l;
    n
}

/// Sign of the 2D cross product; `1 / |cross|` goes to `len_inv`.
#[inline]
pub fn cross_normalize_get_length_inv2<T: Real>(len_inv: &mut T, a: &[T; 2], b: &[T; 2]) -> T {
    let (n, l) = Vector(*a).cross_normalize_get_length_inv(Vector(*b));
    *len_inv = l;
    n
}

/// Safe form of [`cross_normalize_get_length2`].
#[inline]
pub fn cross_normalize_safe_get_length2<T: Real>(len: &mut T, a: &[T; 2], b: &[T; 2]) -> T {
    let (n, l) = Vector(*a).cross_normalize_safe_get_length(Vector(*b));
    *len = l;
    n
}

/// Safe form of [`cross_normalize_get_length_inv2`].
#[inline]
pub fn cross_normalize_safe_get_length_inv2<T: Real>(len_inv: &mut T, a: &[T; 2], b: &[T; 2]) -> T {
    let (n, l) = Vector(*a).cross_normalize_safe_get_length_inv(Vector(*b));
    *len_inv = l;
    n
}

/// `sgn(cross(a, b)) * new_length`.
#[inline]
pub fn cross_resize2<T: Real>(a: &[T; 2], b: &[T; 2], new_length: T) -> T {
    Vector(*a).cross_resize(Vector(*b), new_length)
}

/// `sgn(cross(a, b)) * new_length`; zero for parallel inputs.
#[inline]
pub fn cross_resize_safe2<T: Real>(a: &[T; 2], b: &[T; 2], new_length: T) -> T {
    Vector(*a).cross_resize_safe(Vector(*b), new_length)
}

/// Length of `a`.
#[inline]
pub fn length<T: Real, const N: usize>(a: &[T; N]) -> T {
    Vector(*a).length()
}

/// Squared length of `a`.
#[inline]
pub fn length_sq<T: Real, const N: usize>(a: &[T; N]) -> T {
    Vector(*a).length_sq()
}

/// `1 / length(a)`.
#[inline]
pub fn length_inv<T: Real, const N: usize>(a: &[T; N]) -> T {
    Vector(*a).length_inv()
}

/// `1 / length(a)`, or zero for the zero vector.
#[inline]
pub fn length_inv_safe<T: Real, const N: usize>(a: &[T; N]) -> T {
    Vector(*a).length_inv_safe()
}

/// `1 / length_sq(a)`.
#[inline]
pub fn length_sq_inv<T: Real, const N: usize>(a: &[T; N]) -> T {
    Vector(*a).length_sq_inv()
}

/// `1 / length_sq(a)`, or zero for the zero vector.
#[inline]
pub fn length_sq_inv_safe<T: Real, const N: usize>(a: &[T; N]) -> T {
    Vector(*a).length_sq_inv_safe()
}

/// Distance between two points.
#[inline]
pub fn distance<T: Real, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    Vector(*a).distance(Vector(*b))
}

/// Unit vector in the direction of `a`.
#[inline]
pub fn normalize<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).normalize())
}

/// Unit vector in the direction of `a`, or zeros.
#[inline]
pub fn normalize_safe<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).normalize_safe())
}

/// Normalizes `a` into `out` and stores its original length in `len`.
#[inline]
pub fn normalize_get_length<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    len: &mut T,
    a: &[T; N],
) -> &'a mut [T; N] {
    let (n, l) = Vector(*a).normalize_get_length();
    *len = l;
    put(out, n)
}

/// Safe form of [`normalize_get_length`].
#[inline]
pub fn normalize_safe_get_length<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    len: &mut T,
    a: &[T; N],
) -> &'a mut [T; N] {
    let (n, l) = Vector(*a).normalize_safe_get_length();
    *len = l;
    put(out, n)
}

/// Normalizes `a` into `out` and stores `1 / length(a)` in `len_inv`.
#[inline]
pub fn normalize_get_length_inv<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    len_inv: &mut T,
    a: &[T; N],
) -> &'a mut [T; N] {
    let (n, l) = Vector(*a).normalize_get_length_inv();
    *len_inv = l;
    put(out, n)
}

/// Safe form of [`normalize_get_length_inv`].
#[inline]
pub fn normalize_safe_get_length_inv<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    len_inv: &mut T,
    a: &[T; N],
) -> &'a mut [T; N] {
    let (n, l) = Vector(*a).normalize_safe_get_length_inv();
    *len_inv = l;
    put(out, n)
}

/// Scalar projection ratio `dot(base, v) / dot(base, base)`.
#[inline]
pub fn proj_ratio<T: Real, const N: usize>(base: &[T; N], v: &[T; N]) -> T {
    Vector::proj_ratio(Vector(*base), Vector(*v))
}

/// Projection of `v` onto `base`.
#[inline]
pub fn proj<'a, T: Real, const N: usize>(out: &'a mut [T; N], base: &[T; N], v: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector::proj(Vector(*base), Vector(*v)))
}

/// Component of `v` perpendicular to `base`.
#[inline]
pub fn ortho<'a, T: Real, const N: usize>(out: &'a mut [T; N], base: &[T; N], v: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector::ortho(Vector(*base), Vector(*v)))
}

/// Normalized [`ortho`]; the normalized base goes to `out_base`.
#[inline]
pub fn ortho_norm<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    out_base: &mut [T; N],
    base: &[T; N],
    v: &[T; N],
) -> &'a mut [T; N] {
    let (r, b) = Vector::ortho_norm(Vector(*base), Vector(*v));
    *out_base = b.0;
    put(out, r)
}

/// Orthogonalizes each of `inputs` against `base` and the earlier
/// outputs, writing into `out`. Linearly dependent inputs come out as
/// zeros.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `out` and `inputs` differ in length.
pub fn ortho_list<'a, T: Real, const N: usize>(
    out: &'a mut [[T; N]],
    base: &[T; N],
    inputs: &[[T; N]],
) -> Result<&'a mut [[T; N]]> {
    if out.len() != inputs.len() {
        return Err(Error::length_mismatch("out", inputs.len(), out.len()));
    }
    let base = Vector(*base);
    for i in 0..inputs.len() {
        let mut r = Vector::ortho(base, Vector(inputs[i]));
        for prev in &out[..i] {
            let p = Vector(*prev);
            if p.length_sq() != T::ZERO {
                r = Vector::ortho(p, r);
            }
        }
        out[i] = r.0;
    }
    Ok(out)
}

/// Normalized form of [`ortho_list`]; the normalized base goes to
/// `out_base`.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `out` and `inputs` differ in length.
pub fn ortho_norm_list<'a, T: Real, const N: usize>(
    out_base: &mut [T; N],
    out: &'a mut [[T; N]],
    base: &[T; N],
    inputs: &[[T; N]],
) -> Result<&'a mut [[T; N]]> {
    if out.len() != inputs.len() {
        return Err(Error::length_mismatch("out", inputs.len(), out.len()));
    }
    let base_n = Vector(*base).normalize();
    *out_base = base_n.0;
    for i in 0..inputs.len() {
        let v = Vector(inputs[i]);
        let mut r = v - base_n * base_n.dot(v);
        for prev in &out[..i] {
            let p = Vector(*prev);
            r = r - p * p.dot(r);
        }
        out[i] = r.normalize_safe().0;
    }
    Ok(out)
}

/// Reflection of `a` across the plane perpendicular to `normal`.
#[inline]
pub fn reflect<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N], normal: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).reflect(Vector(*normal)))
}

/// Reflection scaled by `length_sq(normal)`.
#[inline]
pub fn reflect_scale<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N], normal: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).reflect_scale(Vector(*normal)))
}

/// Reflection across a unit `normal`.
#[inline]
pub fn unit_reflect<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N], normal: &[T; N]) -> &'a mut [T; N] {
    put(out, Vector(*a).unit_reflect(Vector(*normal)))
}

/// `a` rescaled to `new_length`.
#[inline]
pub fn resize<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N], new_length: T) -> &'a mut [T; N] {
    put(out, Vector(*a).resize(new_length))
}

/// `a` rescaled to `new_length`, or zeros.
#[inline]
pub fn resize_safe<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N], new_length: T) -> &'a mut [T; N] {
    put(out, Vector(*a).resize_safe(new_length))
}

/// Normalized linear interpolation.
#[inline]
pub fn nlerp<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, Vector(*a).nlerp(Vector(*b), u))
}

/// Spherical linear interpolation.
#[inline]
pub fn slerp<'a, T: Real, const N: usize>(out: &'a mut [T; N], a: &[T; N], b: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, Vector(*a).slerp(Vector(*b), u))
}

/// Linear interpolation.
#[inline]
pub fn lerp<'a, T: Real, const N: usize>(out: &'a mut [T; N], v0: &[T; N], v1: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, interp::lerp(Vector(*v0), Vector(*v1), u))
}

/// Inverse linear interpolation, component-wise.
#[inline]
pub fn lerp_inv<'a, T: Real, const N: usize>(out: &'a mut [T; N], v0: &[T; N], v1: &[T; N], v: &[T; N]) -> &'a mut [T; N] {
    put(out, interp::lerp_inv(Vector(*v0), Vector(*v1), Vector(*v)))
}

/// Initial value `v0` such that `lerp(v0, v1, u) == v`.
#[inline]
pub fn lerp_rev_init<'a, T: Real, const N: usize>(out: &'a mut [T; N], v1: &[T; N], v: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, interp::lerp_rev_init(Vector(*v1), Vector(*v), u))
}

/// Terminal value `v1` such that `lerp(v0, v1, u) == v`.
#[inline]
pub fn lerp_rev_term<'a, T: Real, const N: usize>(out: &'a mut [T; N], v0: &[T; N], v: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, interp::lerp_rev_term(Vector(*v0), Vector(*v), u))
}

/// Nearest of `v0` and `v1`.
#[inline]
pub fn nearest<'a, T: Real, const N: usize>(out: &'a mut [T; N], v0: &[T; N], v1: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, interp::nearest(Vector(*v0), Vector(*v1), u))
}

/// Nearest-neighbor of two nearest-neighbor picks.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn binearest<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    v00: &[T; N],
    v01: &[T; N],
    v10: &[T; N],
    v11: &[T; N],
    u0: T,
    u1: T,
    u: T,
) -> &'a mut [T; N] {
    let r = interp::binearest(Vector(*v00), Vector(*v01), Vector(*v10), Vector(*v11), u0, u1, u);
    put(out, r)
}

/// Bilinear interpolation.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn bilerp<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    v00: &[T; N],
    v01: &[T; N],
    v10: &[T; N],
    v11: &[T; N],
    u0: T,
    u1: T,
    u: T,
) -> &'a mut [T; N] {
    let r = interp::bilerp(Vector(*v00), Vector(*v01), Vector(*v10), Vector(*v11), u0, u1, u);
    put(out, r)
}

/// Maps `v_src` from `[v0_src, v1_src]` onto `[v0_dst, v1_dst]`.
#[inline]
pub fn remap<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    v0_dst: &[T; N],
    v1_dst: &[T; N],
    v0_src: &[T; N],
    v1_src: &[T; N],
    v_src: &[T; N],
) -> &'a mut [T; N] {
    let r = interp::remap(
        Vector(*v0_dst),
        Vector(*v1_dst),
        Vector(*v0_src),
        Vector(*v1_src),
        Vector(*v_src),
    );
    put(out, r)
}

/// Constant (order-0) Bezier: copies `v0`.
#[inline]
pub fn bezier0<'a, T: Real, const N: usize>(out: &'a mut [T; N], v0: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, interp::bezier0(Vector(*v0), u))
}

/// Linear Bezier.
#[inline]
pub fn bezier1<'a, T: Real, const N: usize>(out: &'a mut [T; N], v0: &[T; N], v1: &[T; N], u: T) -> &'a mut [T; N] {
    put(out, interp::bezier1(Vector(*v0), Vector(*v1), u))
}

/// Quadratic Bezier.
#[inline]
pub fn bezier2<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    v0: &[T; N],
    v1: &[T; N],
    v2: &[T; N],
    u: T,
) -> &'a mut [T; N] {
    put(out, interp::bezier2(Vector(*v0), Vector(*v1), Vector(*v2), u))
}

/// Cubic Bezier.
#[inline]
pub fn bezier3<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    v0: &[T; N],
    v1: &[T; N],
    v2: &[T; N],
    v3: &[T; N],
    u: T,
) -> &'a mut [T; N] {
    put(out, interp::bezier3(Vector(*v0), Vector(*v1), Vector(*v2), Vector(*v3), u))
}

/// Bezier of any order over `controls`.
///
/// # Errors
///
/// [`Error::EmptyInput`] if `controls` is empty.
pub fn bezier_n<'a, T: Real, const N: usize>(out: &'a mut [T; N], controls: &[[T; N]], u: T) -> Result<&'a mut [T; N]> {
    let controls: Vec<Vector<T, N>> = controls.iter().copied().map(Vector).collect();
    let r = interp::bezier_n(&controls, u)?;
    Ok(put(out, r))
}

/// Cubic Hermite from endpoints and tangents.
#[inline]
pub fn hermite<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    v0: &[T; N],
    dv0: &[T; N],
    v1: &[T; N],
    dv1: &[T; N],
    u: T,
) -> &'a mut [T; N] {
    put(out, interp::hermite(Vector(*v0), Vector(*dv0), Vector(*v1), Vector(*dv1), u))
}

/// Cubic Hermite from endpoints and handle positions.
#[inline]
pub fn hermite_handles<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    v0: &[T; N],
    c0: &[T; N],
    v1: &[T; N],
    c1: &[T; N],
    u: T,
) -> &'a mut [T; N] {
    put(out, interp::hermite_handles(Vector(*v0), Vector(*c0), Vector(*v1), Vector(*c1), u))
}

/// Catmull-Rom span between `v0` and `v1`.
#[inline]
pub fn catmull_rom<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    vp: &[T; N],
    v0: &[T; N],
    v1: &[T; N],
    vn: &[T; N],
    u: T,
) -> &'a mut [T; N] {
    put(out, interp::catmull_rom(Vector(*vp), Vector(*v0), Vector(*v1), Vector(*vn), u))
}

/// Bi-cubic Catmull-Rom over a row-major 4x4 grid.
#[inline]
pub fn bicubic_catmull_rom<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    grid: &[[[T; N]; 4]; 4],
    row_params: [T; 4],
    u: T,
) -> &'a mut [T; N] {
    let grid = grid.map(|row| row.map(Vector));
    put(out, interp::bicubic_catmull_rom(&grid, row_params, u))
}

/// Arc-length tables for `segment` written into caller slices, each
/// `num_divisions + 1` long. Returns the total chord length.
///
/// # Errors
///
/// See [`Segment::reparam_into`].
pub fn reparam<T: Real, const N: usize>(
    params: &mut [T],
    arc_lengths: &mut [T],
    samples: &mut [[T; N]],
    segment: &Segment<T, N>,
    num_divisions: usize,
    normalize: bool,
) -> Result<T> {
    let samples_len = samples.len();
    segment.reparam_with(params, arc_lengths, samples_len, num_divisions, normalize, |i, p| {
        samples[i] = p.0;
    })
}

fn sample_table<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    params: &[T],
    values: &[[T; N]],
    u: T,
    start: usize,
    step: isize,
    order: Order,
) -> Result<&'a mut [T; N]> {
    let (lo, hi, t) = bracket(params, values.len(), u, start, step, order)?;
    let r = if lo == hi {
        Vector(values[lo])
    } else {
        interp::lerp(Vector(values[lo]), Vector(values[hi]), t)
    };
    Ok(put(out, r))
}

/// Table lookup over ascending `params`; see
/// [`sample_table_inc`](crate::sample_table_inc).
pub fn sample_table_inc<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    params: &[T],
    values: &[[T; N]],
    u: T,
    start: usize,
    step: isize,
) -> Result<&'a mut [T; N]> {
    sample_table(out, params, values, u, start, step, Order::Ascending)
}

/// Table lookup over descending `params`; see
/// [`sample_table_dec`](crate::sample_table_dec).
pub fn sample_table_dec<'a, T: Real, const N: usize>(
    out: &'a mut [T; N],
    params: &[T],
    values: &[[T; N]],
    u: T,
    start: usize,
    step: isize,
) -> Result<&'a mut [T; N]> {
    sample_table(out, params, values, u, start, step, Order::Descending)
}

/// Copies the components of `a` at `idx` into `out`.
///
/// # Errors
///
/// [`Error::ComponentOutOfRange`] for an index `>= N`.
pub fn swizzle<'a, T: Element, const N: usize, const K: usize>(
    out: &'a mut [T; K],
    a: &[T; N],
    idx: [usize; K],
) -> Result<&'a mut [T; K]> {
    let r = Vector(*a).try_swizzle(idx)?;
    Ok(put(out, r))
}

/// Writes `value[k]` into `out[idx[k]]` for every `k`.
///
/// # Errors
///
/// [`Error::ComponentOutOfRange`] for an index `>= N` and
/// [`Error::AliasedSwizzle`] for a repeated index. `out` is untouched on
/// error.
pub fn set_swizzle<'a, T: Element, const N: usize, const K: usize>(
    out: &'a mut [T; N],
    idx: [usize; K],
    value: &[T; K],
) -> Result<&'a mut [T; N]> {
    let mut r = Vector(*out);
    r.set_swizzle(idx, Vector(*value))?;
    Ok(put(out, r))
}
