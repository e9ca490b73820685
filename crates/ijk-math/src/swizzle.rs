//! Named components and swizzles.
//!
//! Three naming schemes address the same storage: spatial `x y z w`,
//! color `r g b a` and parametric `s t p q`. `v.x()`, `v.r()` and `v.s()`
//! all read offset 0.
//!
//! A swizzle selects components by index, in any order and with
//! repetition, producing a vector of up to four components:
//!
//! ```rust
//! use ijk_math::{vec3, vec4};
//!
//! let v = vec4(1, 2, 3, 4);
//! assert_eq!(v.swizzle([2, 1, 0]), vec3(3, 2, 1));
//! assert_eq!(v.swizzle([0, 0]), ijk_math::vec2(1, 1));
//! ```
//!
//! Writing through a swizzle is only allowed when no component repeats,
//! since a repeated target would be ambiguous:
//!
//! ```rust
//! use ijk_math::{vec2, vec3, vec4};
//!
//! let mut v = vec3(0, 0, 0);
//! v.set_swizzle([2, 1, 0], vec3(7, 8, 9)).unwrap();
//! assert_eq!(v, vec3(9, 8, 7));
//! assert!(v.set_swizzle([0, 0], vec2(1, 2)).is_err());
//!
//! let mut p = vec4(1, 2, 3, 4);
//! p.swizzle_mut([3, 0]).unwrap().set(vec2(0, 0));
//! assert_eq!(p, vec4(0, 2, 3, 0));
//! ```

use crate::vector::Vector;
use ijk_core::{Element, Error, Result};
use std::array;
use std::ops::{Index, IndexMut};

fn check_range<const N: usize, const K: usize>(idx: &[usize; K]) -> Result<()> {
    match idx.iter().find(|&&i| i >= N) {
        Some(&i) => Err(Error::out_of_range(i, N)),
        None => Ok(()),
    }
}

fn check_distinct<const K: usize>(idx: &[usize; K]) -> Result<()> {
    for (k, &i) in idx.iter().enumerate() {
        if idx[..k].contains(&i) {
            return Err(Error::AliasedSwizzle { index: i });
        }
    }
    Ok(())
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Reads the components at `idx`, in order.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= N`, like slice indexing.
    #[inline]
    pub fn swizzle<const K: usize>(&self, idx: [usize; K]) -> Vector<T, K> {
        Vector(array::from_fn(|k| self.0[idx[k]]))
    }

    /// Checked form of [`swizzle`](Self::swizzle).
    #[inline]
    pub fn try_swizzle<const K: usize>(&self, idx: [usize; K]) -> Result<Vector<T, K>> {
        check_range::<N, K>(&idx)?;
        Ok(self.swizzle(idx))
    }

    /// Writes `value[k]` into component `idx[k]`; other components keep
    /// their values.
    ///
    /// Fails without writing anything if an index is out of range or
    /// repeated.
    pub fn set_swizzle<const K: usize>(&mut self, idx: [usize; K], value: Vector<T, K>) -> Result<()> {
        check_range::<N, K>(&idx)?;
        check_distinct(&idx)?;
        for (k, &i) in idx.iter().enumerate() {
            self.0[i] = value.0[k];
        }
        Ok(())
    }

    /// Borrows the components at `idx` as an assignable view.
    pub fn swizzle_mut<const K: usize>(&mut self, idx: [usize; K]) -> Result<SwizzleMut<'_, T, N, K>> {
        check_range::<N, K>(&idx)?;
        check_distinct(&idx)?;
        Ok(SwizzleMut { target: self, idx })
    }
}

/// A writable window onto some components of a vector.
///
/// Indices are validated on creation: all in range, none repeated. Index
/// `k` of the view is component `idx[k]` of the target.
#[derive(Debug)]
pub struct SwizzleMut<'a, T, const N: usize, const K: usize> {
    target: &'a mut Vector<T, N>,
    idx: [usize; K],
}

impl<T: Element, const N: usize, const K: usize> SwizzleMut<'_, T, N, K> {
    /// Current values of the viewed components.
    #[inline]
    pub fn get(&self) -> Vector<T, K> {
        self.target.swizzle(self.idx)
    }

    /// Overwrites the viewed components.
    #[inline]
    pub fn set(&mut self, value: Vector<T, K>) {
        for (k, &i) in self.idx.iter().enumerate() {
            self.target.0[i] = value.0[k];
        }
    }

    /// Applies `f` to the viewed components and writes the result back.
    #[inline]
    pub fn update(&mut self, f: impl FnOnce(Vector<T, K>) -> Vector<T, K>) {
        let v = f(self.get());
        self.set(v);
    }
}

impl<T, const N: usize, const K: usize> Index<usize> for SwizzleMut<'_, T, N, K> {
    type Output = T;

    #[inline]
    fn index(&self, k: usize) -> &T {
        &self.target.0[self.idx[k]]
    }
}

impl<T, const N: usize, const K: usize> IndexMut<usize> for SwizzleMut<'_, T, N, K> {
    #[inline]
    fn index_mut(&mut self, k: usize) -> &mut T {
        &mut self.target.0[self.idx[k]]
    }
}

macro_rules! component {
    ($i:literal: $($get:ident $set:ident),*) => {$(
        #[doc = concat!("Component ", stringify!($i), ".")]
        #[inline]
        pub const fn $get(&self) -> T {
            self.0[$i]
        }

        #[doc = concat!("Sets component ", stringify!($i), ".")]
        #[inline]
        pub fn $set(&mut self, v: T) {
            self.0[$i] = v;
        }
    )*};
}

macro_rules! named_swizzle {
    ($($name:ident: $k:literal => [$($i:literal),+];)*) => {$(
        #[doc = concat!("Swizzle `.", stringify!($name), "`.")]
        #[inline]
        pub fn $name(&self) -> Vector<T, $k> {
            self.swizzle([$($i),+])
        }
    )*};
}

impl<T: Element> Vector<T, 2> {
    component!(0: x set_x, r set_r, s set_s);
    component!(1: y set_y, g set_g, t set_t);
    named_swizzle! {
        xy: 2 => [0, 1];
        yx: 2 => [1, 0];
        st: 2 => [0, 1];
    }
}

impl<T: Element> Vector<T, 3> {
    component!(0: x set_x, r set_r, s set_s);
    component!(1: y set_y, g set_g, t set_t);
    component!(2: z set_z, b set_b, p set_p);
    named_swizzle! {
        xy: 2 => [0, 1];
        yx: 2 => [1, 0];
        xz: 2 => [0, 2];
        yz: 2 => [1, 2];
        xyz: 3 => [0, 1, 2];
        zyx: 3 => [2, 1, 0];
        rgb: 3 => [0, 1, 2];
        bgr: 3 => [2, 1, 0];
        st: 2 => [0, 1];
        stp: 3 => [0, 1, 2];
    }
}

impl<T: Element> Vector<T, 4> {
    component!(0: x set_x, r set_r, s set_s);
    component!(1: y set_y, g set_g, t set_t);
    component!(2: z set_z, b set_b, p set_p);
    component!(3: w set_w, a set_a, q set_q);
    named_swizzle! {
        xy: 2 => [0, 1];
        yx: 2 => [1, 0];
        xz: 2 => [0, 2];
        yz: 2 => [1, 2];
        xyz: 3 => [0, 1, 2];
        zyx: 3 => [2, 1, 0];
        rgb: 3 => [0, 1, 2];
        bgr: 3 => [2, 1, 0];
        st: 2 => [0, 1];
        stp: 3 => [0, 1, 2];
        xyzw: 4 => [0, 1, 2, 3];
        wzyx: 4 => [3, 2, 1, 0];
        rgba: 4 => [0, 1, 2, 3];
        bgra: 4 => [2, 1, 0, 3];
    }
}
