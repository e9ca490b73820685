//! Fixed-size vector storage.
//!
//! [`Vector<T, N>`] is a single `[T; N]` array with value semantics. Named
//! components, swizzles, arithmetic and geometry are all layered on top of
//! that one array; nothing here owns heap memory.
//!
//! # Usage
//!
//! ```rust
//! use ijk_math::{vec2, vec3, Vec4};
//!
//! let xy = vec2(1.0f32, 2.0);
//! let xyz = vec3(1.0f32, 2.0, 3.0);
//! let point = Vec4::from_vec3_w(xyz, 1.0);
//! assert_eq!(point.to_array(), [1.0, 2.0, 3.0, 1.0]);
//! assert_eq!(point.truncate().truncate(), xy);
//! ```

use ijk_core::Element;
use std::array;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An `N`-component vector of `T`.
///
/// The storage is a plain array, so `Vector<f32, 3>` has the layout of
/// `[f32; 3]`. Copies are independent; a vector never aliases another.
///
/// # Components
///
/// Access by index `v[0]`, by name (`v.x()`, `v.r()`, `v.s()` all read
/// offset 0), or through a swizzle (`v.swizzle([2, 1, 0])`).
///
/// # Example
///
/// ```rust
/// use ijk_math::{IVec3, Vector};
///
/// let v: IVec3 = Vector::new([4, 5, 6]);
/// assert_eq!(v[1], 5);
/// assert_eq!(v.y(), 5);
/// assert_eq!(v.g(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

/// 2D `f32` vector.
pub type Vec2 = Vector<f32, 2>;
/// 3D `f32` vector.
pub type Vec3 = Vector<f32, 3>;
/// 4D `f32` vector.
pub type Vec4 = Vector<f32, 4>;
/// 2D `f64` vector.
pub type DVec2 = Vector<f64, 2>;
/// 3D `f64` vector.
pub type DVec3 = Vector<f64, 3>;
/// 4D `f64` vector.
pub type DVec4 = Vector<f64, 4>;
/// 2D `i32` vector.
pub type IVec2 = Vector<i32, 2>;
/// 3D `i32` vector.
pub type IVec3 = Vector<i32, 3>;
/// 4D `i32` vector.
pub type IVec4 = Vector<i32, 4>;
/// 2D `i64` vector.
pub type I64Vec2 = Vector<i64, 2>;
/// 3D `i64` vector.
pub type I64Vec3 = Vector<i64, 3>;
/// 4D `i64` vector.
pub type I64Vec4 = Vector<i64, 4>;
/// 2D `u32` vector.
pub type UVec2 = Vector<u32, 2>;
/// 3D `u32` vector.
pub type UVec3 = Vector<u32, 3>;
/// 4D `u32` vector.
pub type UVec4 = Vector<u32, 4>;
/// 2D `u64` vector.
pub type U64Vec2 = Vector<u64, 2>;
/// 3D `u64` vector.
pub type U64Vec3 = Vector<u64, 3>;
/// 4D `u64` vector.
pub type U64Vec4 = Vector<u64, 4>;
/// Boolean vector of any dimension, the result of comparisons.
pub type BVec<const N: usize> = Vector<bool, N>;
/// 2D boolean vector.
pub type BVec2 = BVec<2>;
/// 3D boolean vector.
pub type BVec3 = BVec<3>;
/// 4D boolean vector.
pub type BVec4 = BVec<4>;

/// Returns a 2D vector with components `x` and `y`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    Vector([x, y])
}

/// Returns a 3D vector with components `x`, `y` and `z`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector([x, y, z])
}

/// Returns a 4D vector with components `x`, `y`, `z` and `w`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector([x, y, z, w])
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// All components zero (or `false`).
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// Creates a vector with every component set to `v`.
    ///
    /// ```rust
    /// use ijk_math::{Vec3, vec3};
    ///
    /// assert_eq!(Vec3::splat(0.5), vec3(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self([v; N])
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; N]) -> Self {
        Self(a)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the backing array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Iterates over the components in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U: Element>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Combines two vectors component by component.
    #[inline]
    pub fn zip_map<U: Element, R: Element>(
        self,
        rhs: Vector<U, N>,
        mut f: impl FnMut(T, U) -> R,
    ) -> Vector<R, N> {
        Vector(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    /// Copies into a vector of another dimension.
    ///
    /// The first `min(N, M)` components are copied; widening fills the
    /// remainder with zero.
    ///
    /// ```rust
    /// use ijk_math::{vec2, vec4};
    ///
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.reshape::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).reshape::<4>(), vec4(1, 2, 0, 0));
    /// ```
    #[inline]
    pub fn reshape<const M: usize>(self) -> Vector<T, M> {
        Vector(array::from_fn(|i| if i < N { self.0[i] } else { T::ZERO }))
    }
}

impl<T: Element> Vector<T, 2> {
    /// Widens to 3D by appending `z`.
    #[inline]
    pub const fn extend(self, z: T) -> Vector<T, 3> {
        vec3(self.0[0], self.0[1], z)
    }
}

impl<T: Element> Vector<T, 3> {
    /// Builds `(v.x, v.y, z)`.
    #[inline]
    pub const fn from_vec2_z(v: Vector<T, 2>, z: T) -> Self {
        vec3(v.0[0], v.0[1], z)
    }

    /// Builds `(x, v.x, v.y)`.
    #[inline]
    pub const fn from_x_vec2(x: T, v: Vector<T, 2>) -> Self {
        vec3(x, v.0[0], v.0[1])
    }

    /// Widens to 4D by appending `w`.
    #[inline]
    pub const fn extend(self, w: T) -> Vector<T, 4> {
        vec4(self.0[0], self.0[1], self.0[2], w)
    }

    /// Drops the last component.
    #[inline]
    pub const fn truncate(self) -> Vector<T, 2> {
        vec2(self.0[0], self.0[1])
    }
}

impl<T: Element> Vector<T, 4> {
    /// Builds `(v.x, v.y, v.z, w)`.
    #[inline]
    pub const fn from_vec3_w(v: Vector<T, 3>, w: T) -> Self {
        vec4(v.0[0], v.0[1], v.0[2], w)
    }

    /// Builds `(x, v.x, v.y, v.z)`.
    #[inline]
    pub const fn from_x_vec3(x: T, v: Vector<T, 3>) -> Self {
        vec4(x, v.0[0], v.0[1], v.0[2])
    }

    /// Builds `(v.x, v.y, z, w)`.
    #[inline]
    pub const fn from_vec2_zw(v: Vector<T, 2>, z: T, w: T) -> Self {
        vec4(v.0[0], v.0[1], z, w)
    }

    /// Builds `(x, v.x, v.y, w)`.
    #[inline]
    pub const fn from_x_vec2_w(x: T, v: Vector<T, 2>, w: T) -> Self {
        vec4(x, v.0[0], v.0[1], w)
    }

    /// Builds `(x, y, v.x, v.y)`.
    #[inline]
    pub const fn from_xy_vec2(x: T, y: T, v: Vector<T, 2>) -> Self {
        vec4(x, y, v.0[0], v.0[1])
    }

    /// Builds `(a.x, a.y, b.x, b.y)`.
    #[inline]
    pub const fn from_vec2_vec2(a: Vector<T, 2>, b: Vector<T, 2>) -> Self {
        vec4(a.0[0], a.0[1], b.0[0], b.0[1])
    }

    /// Drops the last component.
    #[inline]
    pub const fn truncate(self) -> Vector<T, 3> {
        vec3(self.0[0], self.0[1], self.0[2])
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(a: [T; N]) -> Self {
        Self(a)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> [T; N] {
        v.0
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            c.fmt(f)?;
        }
        write!(f, ")")
    }
}

// glam interop, for every element type glam has a vector for.
macro_rules! impl_glam {
    ($($t:ty, $n:literal => $g:ty;)*) => {$(
        impl From<$g> for Vector<$t, $n> {
            #[inline]
            fn from(v: $g) -> Self {
                Self(v.to_array())
            }
        }

        impl From<Vector<$t, $n>> for $g {
            #[inline]
            fn from(v: Vector<$t, $n>) -> $g {
                <$g>::from_array(v.0)
            }
        }
    )*};
}

impl_glam! {
    f32, 2 => glam::Vec2;
    f32, 3 => glam::Vec3;
    f32, 4 => glam::Vec4;
    f64, 2 => glam::DVec2;
    f64, 3 => glam::DVec3;
    f64, 4 => glam::DVec4;
    i32, 2 => glam::IVec2;
    i32, 3 => glam::IVec3;
    i32, 4 => glam::IVec4;
    i64, 2 => glam::I64Vec2;
    i64, 3 => glam::I64Vec3;
    i64, 4 => glam::I64Vec4;
    u32, 2 => glam::UVec2;
    u32, 3 => glam::UVec3;
    u32, 4 => glam::UVec4;
    u64, 2 => glam::U64Vec2;
    u64, 3 => glam::U64Vec3;
    u64, 4 => glam::U64Vec4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_default() {
        assert_eq!(Vec3::default(), vec3(0.0, 0.0, 0.0));
        assert_eq!(BVec2::ZERO, vec2(false, false));
        assert_eq!(U64Vec4::DIM, 4);
    }

    #[test]
    fn test_widen_placements() {
        let a = vec2(1, 2);
        let b = vec2(3, 4);
        assert_eq!(IVec3::from_vec2_z(a, 9), vec3(1, 2, 9));
        assert_eq!(IVec3::from_x_vec2(9, a), vec3(9, 1, 2));
        assert_eq!(IVec4::from_vec2_zw(a, 7, 8), vec4(1, 2, 7, 8));
        assert_eq!(IVec4::from_x_vec2_w(7, a, 8), vec4(7, 1, 2, 8));
        assert_eq!(IVec4::from_xy_vec2(7, 8, a), vec4(7, 8, 1, 2));
        assert_eq!(IVec4::from_vec2_vec2(a, b), vec4(1, 2, 3, 4));
        assert_eq!(IVec4::from_x_vec3(0, vec3(1, 2, 3)), vec4(0, 1, 2, 3));
        assert_eq!(a.extend(5).extend(6), vec4(1, 2, 5, 6));
    }

    #[test]
    fn test_narrow() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.truncate(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v.reshape::<2>(), vec2(1.0, 2.0));
        assert_eq!(v.reshape::<4>(), v);
    }

    #[test]
    fn test_copies_are_independent() {
        let a = vec3(1u32, 2, 3);
        let mut b = a;
        b[0] = 10;
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 10);
    }

    #[test]
    fn test_map_zip() {
        let v = vec3(1, -2, 3);
        assert_eq!(v.map(|c| c > 0), vec3(true, false, true));
        assert_eq!(v.zip_map(vec3(1, 1, 1), |a, b| a * 10 + b), vec3(11, -19, 31));
    }

    #[test]
    fn test_display() {
        assert_eq!(vec3(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn test_glam_roundtrip() {
        let g = glam::Vec3::new(1.0, 2.0, 3.0);
        let v: Vec3 = g.into();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
        let back: glam::Vec3 = v.into();
        assert_eq!(back, g);
        let u: U64Vec2 = glam::U64Vec2::new(5, 6).into();
        assert_eq!(u.to_array(), [5, 6]);
    }
}
