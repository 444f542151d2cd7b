//! 4D vector types.
//!
//! [`Vec4f`], [`Vec4d`] and [`Vec4i`] are ordered quadruples with
//! component-wise arithmetic and (for the float flavors) lengths,
//! normalization and interpolation. The quaternion types in `vecmat-rot`
//! are a separate algebra and do not reuse these.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

macro_rules! vec4_common {
    ($name:ident, $t:ident, $zero:literal, $one:literal) => {
        /// An ordered quadruple of scalars.
        ///
        /// Components are accessed via `.x`/`.y`/`.z`/`.w` or by index
        /// `[0]`..`[3]`. Indexing out of bounds panics.
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// X component.
            pub x: $t,
            /// Y component.
            pub y: $t,
            /// Z component.
            pub z: $t,
            /// W component.
            pub w: $t,
        }

        impl $name {
            /// Zero vector (0, 0, 0, 0).
            pub const ZERO: Self = Self::new($zero, $zero, $zero, $zero);

            /// One vector (1, 1, 1, 1).
            pub const ONE: Self = Self::new($one, $one, $one, $one);

            /// Creates a new vector.
            #[inline]
            pub const fn new(x: $t, y: $t, z: $t, w: $t) -> Self {
                Self { x, y, z, w }
            }

            /// Creates a vector with all components set to `v`.
            #[inline]
            pub const fn splat(v: $t) -> Self {
                Self::new(v, v, v, v)
            }

            /// Creates a vector from an array.
            #[inline]
            pub const fn from_array(a: [$t; 4]) -> Self {
                Self::new(a[0], a[1], a[2], a[3])
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [$t; 4] {
                [self.x, self.y, self.z, self.w]
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, other: Self) -> $t {
                self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
            }

            /// Squared length.
            #[inline]
            pub fn length_squared(self) -> $t {
                self.dot(self)
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
            }

            /// Component-wise sign: -1, 0 or 1 per component.
            #[inline]
            pub fn sign(self) -> Self {
                #[inline]
                fn s(v: $t) -> $t {
                    if v > $zero {
                        $one
                    } else if v < $zero {
                        -$one
                    } else {
                        $zero
                    }
                }
                Self::new(s(self.x), s(self.y), s(self.z), s(self.w))
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self::new(
                    self.x.min(other.x),
                    self.y.min(other.y),
                    self.z.min(other.z),
                    self.w.min(other.w),
                )
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self::new(
                    self.x.max(other.x),
                    self.y.max(other.y),
                    self.z.max(other.z),
                    self.w.max(other.w),
                )
            }

            /// Clamps each component between the matching components of
            /// `min` and `max`.
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                self.max(min).min(max)
            }
        }

        impl Index<usize> for $name {
            type Output = $t;

            #[inline]
            fn index(&self, i: usize) -> &$t {
                match i {
                    0 => &self.x,
                    1 => &self.y,
                    2 => &self.z,
                    3 => &self.w,
                    _ => panic!("{} index out of bounds: {}", stringify!($name), i),
                }
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut $t {
                match i {
                    0 => &mut self.x,
                    1 => &mut self.y,
                    2 => &mut self.z,
                    3 => &mut self.w,
                    _ => panic!("{} index out of bounds: {}", stringify!($name), i),
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(
                    self.x + rhs.x,
                    self.y + rhs.y,
                    self.z + rhs.z,
                    self.w + rhs.w,
                )
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(
                    self.x - rhs.x,
                    self.y - rhs.y,
                    self.z - rhs.z,
                    self.w - rhs.w,
                )
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.x, -self.y, -self.z, -self.w)
            }
        }

        // Component-wise product
        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new(
                    self.x * rhs.x,
                    self.y * rhs.y,
                    self.z * rhs.z,
                    self.w * rhs.w,
                )
            }
        }

        impl Mul<$t> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
            }
        }

        impl Mul<$name> for $t {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        // Component-wise quotient
        impl Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self::new(
                    self.x / rhs.x,
                    self.y / rhs.y,
                    self.z / rhs.z,
                    self.w / rhs.w,
                )
            }
        }

        impl Div<$t> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
            }
        }

        impl From<[$t; 4]> for $name {
            #[inline]
            fn from(a: [$t; 4]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$name> for [$t; 4] {
            #[inline]
            fn from(v: $name) -> [$t; 4] {
                v.to_array()
            }
        }
    };
}

macro_rules! vec4_float {
    ($name:ident, $t:ident) => {
        impl $name {
            /// Length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> $t {
                self.length_squared().sqrt()
            }

            /// Returns this vector scaled to unit length.
            ///
            /// Normalizing the zero vector divides by zero and yields NaN
            /// components.
            #[inline]
            pub fn normalized(self) -> Self {
                self / self.length()
            }

            /// Returns true if the vector has unit length, within tolerance.
            #[inline]
            pub fn is_normalized(self) -> bool {
                vecmat_core::$t::approx_eq(self.length_squared(), 1.0)
            }

            /// Linear interpolation toward `to`.
            #[inline]
            pub fn lerp(self, to: Self, weight: $t) -> Self {
                self + (to - self) * weight
            }

            /// Returns true if each component is within tolerance of the
            /// matching component of `other`.
            #[inline]
            pub fn approx_eq(self, other: Self) -> bool {
                vecmat_core::$t::approx_eq(self.x, other.x)
                    && vecmat_core::$t::approx_eq(self.y, other.y)
                    && vecmat_core::$t::approx_eq(self.z, other.z)
                    && vecmat_core::$t::approx_eq(self.w, other.w)
            }

            /// Returns true if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.x.is_finite()
                    && self.y.is_finite()
                    && self.z.is_finite()
                    && self.w.is_finite()
            }

            /// Returns true if any component is NaN.
            #[inline]
            pub fn is_nan(self) -> bool {
                self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
            }
        }
    };
}

vec4_common!(Vec4f, f32, 0.0, 1.0);
vec4_float!(Vec4f, f32);

vec4_common!(Vec4d, f64, 0.0, 1.0);
vec4_float!(Vec4d, f64);

vec4_common!(Vec4i, i32, 0, 1);

impl From<Vec4f> for Vec4d {
    #[inline]
    fn from(v: Vec4f) -> Self {
        Self::new(v.x as f64, v.y as f64, v.z as f64, v.w as f64)
    }
}

impl From<Vec4i> for Vec4f {
    #[inline]
    fn from(v: Vec4i) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32, v.w as f32)
    }
}

impl From<Vec4i> for Vec4d {
    #[inline]
    fn from(v: Vec4i) -> Self {
        Self::new(v.x as f64, v.y as f64, v.z as f64, v.w as f64)
    }
}

impl Vec4d {
    /// Converts to single precision, rounding each component to the nearest
    /// representable `f32`.
    #[inline]
    pub fn as_vec4f(self) -> Vec4f {
        Vec4f::new(self.x as f32, self.y as f32, self.z as f32, self.w as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vec4d::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4d::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Vec4d::splat(5.0));
        assert_eq!(a - b, Vec4d::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a * 2.0, Vec4d::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a * b, Vec4d::new(4.0, 6.0, 6.0, 4.0));
    }

    #[test]
    fn test_dot() {
        let a = Vec4d::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4d::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a.dot(b), 20.0);
        assert_eq!(a.length_squared(), 30.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vec4d::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert!(v.normalized().is_normalized());
    }

    #[test]
    fn test_index() {
        let v = Vec4i::new(1, 2, 3, 4);
        assert_eq!(v[0], 1);
        assert_eq!(v[3], 4);
    }
}
