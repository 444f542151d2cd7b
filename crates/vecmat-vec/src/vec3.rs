//! 3D vector types.
//!
//! [`Vec3f`], [`Vec3d`] and [`Vec3i`] are ordered triples with
//! component-wise arithmetic, dot and cross products, and (for the float
//! flavors) lengths, normalization and interpolation.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_vec::Vec3d;
//!
//! let v = Vec3d::new(1.0, 2.0, 3.0);
//! assert_eq!(v.cross(Vec3d::UNIT_X), Vec3d::new(0.0, 3.0, -2.0));
//! assert!(Vec3d::UNIT_Y.is_normalized());
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

macro_rules! vec3_common {
    ($name:ident, $t:ident, $zero:literal, $one:literal) => {
        /// An ordered triple of scalars.
        ///
        /// Components are accessed via `.x`/`.y`/`.z` or by index
        /// `[0]`/`[1]`/`[2]`. Indexing out of bounds panics.
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
        }

        impl $name {
            /// Zero vector (0, 0, 0).
            pub const ZERO: Self = Self::new($zero, $zero, $zero);

            /// One vector (1, 1, 1).
            pub const ONE: Self = Self::new($one, $one, $one);

            /// Unit vector along X (1, 0, 0).
            pub const UNIT_X: Self = Self::new($one, $zero, $zero);

            /// Unit vector along Y (0, 1, 0).
            pub const UNIT_Y: Self = Self::new($zero, $one, $zero);

            /// Unit vector along Z (0, 0, 1).
            pub const UNIT_Z: Self = Self::new($zero, $zero, $one);

            /// Creates a new vector.
            #[inline]
            pub const fn new(x: $t, y: $t, z: $t) -> Self {
                Self { x, y, z }
            }

            /// Creates a vector with all components set to `v`.
            #[inline]
            pub const fn splat(v: $t) -> Self {
                Self::new(v, v, v)
            }

            /// Creates a vector from an array.
            #[inline]
            pub const fn from_array(a: [$t; 3]) -> Self {
                Self::new(a[0], a[1], a[2])
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [$t; 3] {
                [self.x, self.y, self.z]
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, other: Self) -> $t {
                self.x * other.x + self.y * other.y + self.z * other.z
            }

            /// Cross product.
            #[inline]
            pub fn cross(self, other: Self) -> Self {
                Self::new(
                    self.y * other.z - self.z * other.y,
                    self.z * other.x - self.x * other.z,
                    self.x * other.y - self.y * other.x,
                )
            }

            /// Squared length. Avoids the square root of
            /// length computations; exact for the integer flavor.
            #[inline]
            pub fn length_squared(self) -> $t {
                self.dot(self)
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self::new(self.x.abs(), self.y.abs(), self.z.abs())
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
                Self::new(s(self.x), s(self.y), s(self.z))
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self::new(
                    self.x.min(other.x),
                    self.y.min(other.y),
                    self.z.min(other.z),
                )
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self::new(
                    self.x.max(other.x),
                    self.y.max(other.y),
                    self.z.max(other.z),
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
                    _ => panic!("{} index out of bounds: {}", stringify!($name), i),
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.x, -self.y, -self.z)
            }
        }

        // Component-wise product
        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
            }
        }

        impl Mul<$t> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
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
                Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
            }
        }

        impl Div<$t> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
            }
        }

        impl From<[$t; 3]> for $name {
            #[inline]
            fn from(a: [$t; 3]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$name> for [$t; 3] {
            #[inline]
            fn from(v: $name) -> [$t; 3] {
                v.to_array()
            }
        }
    };
}

macro_rules! vec3_float {
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

            /// Distance to another point.
            #[inline]
            pub fn distance_to(self, other: Self) -> $t {
                (other - self).length()
            }

            /// Squared distance to another point.
            #[inline]
            pub fn distance_squared_to(self, other: Self) -> $t {
                (other - self).length_squared()
            }

            /// Unit vector pointing from this point to `other`.
            #[inline]
            pub fn direction_to(self, other: Self) -> Self {
                (other - self).normalized()
            }

            /// Linear interpolation toward `to`.
            #[inline]
            pub fn lerp(self, to: Self, weight: $t) -> Self {
                self + (to - self) * weight
            }

            /// Moves toward `to` by at most `delta`, without overshooting.
            #[inline]
            pub fn move_toward(self, to: Self, delta: $t) -> Self {
                let offset = to - self;
                let len = offset.length();
                if len <= delta || len < vecmat_core::$t::EPSILON {
                    to
                } else {
                    self + offset / len * delta
                }
            }

            /// Component-wise floor.
            #[inline]
            pub fn floor(self) -> Self {
                Self::new(self.x.floor(), self.y.floor(), self.z.floor())
            }

            /// Component-wise ceiling.
            #[inline]
            pub fn ceil(self) -> Self {
                Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
            }

            /// Component-wise rounding to the nearest integer.
            #[inline]
            pub fn round(self) -> Self {
                Self::new(self.x.round(), self.y.round(), self.z.round())
            }

            /// Returns true if each component is within tolerance of the
            /// matching component of `other`.
            ///
            /// Inherits the scalar rules: equal infinities match, NaN never
            /// matches.
            #[inline]
            pub fn approx_eq(self, other: Self) -> bool {
                vecmat_core::$t::approx_eq(self.x, other.x)
                    && vecmat_core::$t::approx_eq(self.y, other.y)
                    && vecmat_core::$t::approx_eq(self.z, other.z)
            }

            /// Returns true if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
            }

            /// Returns true if any component is NaN.
            #[inline]
            pub fn is_nan(self) -> bool {
                self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
            }
        }
    };
}

vec3_common!(Vec3f, f32, 0.0, 1.0);
vec3_float!(Vec3f, f32);

vec3_common!(Vec3d, f64, 0.0, 1.0);
vec3_float!(Vec3d, f64);

vec3_common!(Vec3i, i32, 0, 1);

impl From<Vec3f> for Vec3d {
    #[inline]
    fn from(v: Vec3f) -> Self {
        Self::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Vec3i> for Vec3f {
    #[inline]
    fn from(v: Vec3i) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

impl From<Vec3i> for Vec3d {
    #[inline]
    fn from(v: Vec3i) -> Self {
        Self::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl Vec3d {
    /// Converts to single precision, rounding each component to the nearest
    /// representable `f32`.
    #[inline]
    pub fn as_vec3f(self) -> Vec3f {
        Vec3f::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl Vec3f {
    /// Converts to an integer vector, truncating each component.
    #[inline]
    pub fn as_vec3i(self) -> Vec3i {
        Vec3i::new(self.x as i32, self.y as i32, self.z as i32)
    }
}
