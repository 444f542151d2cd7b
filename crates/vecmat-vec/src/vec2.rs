//! 2D vector types.
//!
//! [`Vec2f`], [`Vec2d`] and [`Vec2i`] are ordered pairs with component-wise
//! arithmetic and (for the float flavors) lengths, normalization and
//! interpolation.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

macro_rules! vec2_common {
    ($name:ident, $t:ident, $zero:literal, $one:literal) => {
        /// An ordered pair of scalars.
        ///
        /// Components are accessed via `.x`/`.y` or by index `[0]`/`[1]`.
        /// Indexing out of bounds panics.
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// X component.
            pub x: $t,
            /// Y component.
            pub y: $t,
        }

        impl $name {
            /// Zero vector (0, 0).
            pub const ZERO: Self = Self::new($zero, $zero);

            /// One vector (1, 1).
            pub const ONE: Self = Self::new($one, $one);

            /// Unit vector along X (1, 0).
            pub const UNIT_X: Self = Self::new($one, $zero);

            /// Unit vector along Y (0, 1).
            pub const UNIT_Y: Self = Self::new($zero, $one);

            /// Creates a new vector.
            #[inline]
            pub const fn new(x: $t, y: $t) -> Self {
                Self { x, y }
            }

            /// Creates a vector with both components set to `v`.
            #[inline]
            pub const fn splat(v: $t) -> Self {
                Self::new(v, v)
            }

            /// Creates a vector from an array.
            #[inline]
            pub const fn from_array(a: [$t; 2]) -> Self {
                Self::new(a[0], a[1])
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [$t; 2] {
                [self.x, self.y]
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, other: Self) -> $t {
                self.x * other.x + self.y * other.y
            }

            /// Squared length.
            #[inline]
            pub fn length_squared(self) -> $t {
                self.dot(self)
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self::new(self.x.abs(), self.y.abs())
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
                Self::new(s(self.x), s(self.y))
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self::new(self.x.min(other.x), self.y.min(other.y))
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self::new(self.x.max(other.x), self.y.max(other.y))
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
                    _ => panic!("{} index out of bounds: {}", stringify!($name), i),
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(self.x + rhs.x, self.y + rhs.y)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.x - rhs.x, self.y - rhs.y)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.x, -self.y)
            }
        }

        // Component-wise product
        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new(self.x * rhs.x, self.y * rhs.y)
            }
        }

        impl Mul<$t> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.x * rhs, self.y * rhs)
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
                Self::new(self.x / rhs.x, self.y / rhs.y)
            }
        }

        impl Div<$t> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.x / rhs, self.y / rhs)
            }
        }

        impl From<[$t; 2]> for $name {
            #[inline]
            fn from(a: [$t; 2]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$name> for [$t; 2] {
            #[inline]
            fn from(v: $name) -> [$t; 2] {
                v.to_array()
            }
        }
    };
}

macro_rules! vec2_float {
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
                Self::new(self.x.floor(), self.y.floor())
            }

            /// Component-wise ceiling.
            #[inline]
            pub fn ceil(self) -> Self {
                Self::new(self.x.ceil(), self.y.ceil())
            }

            /// Component-wise rounding to the nearest integer.
            #[inline]
            pub fn round(self) -> Self {
                Self::new(self.x.round(), self.y.round())
            }

            /// Returns true if each component is within tolerance of the
            /// matching component of `other`.
            #[inline]
            pub fn approx_eq(self, other: Self) -> bool {
                vecmat_core::$t::approx_eq(self.x, other.x)
                    && vecmat_core::$t::approx_eq(self.y, other.y)
            }

            /// Returns true if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.x.is_finite() && self.y.is_finite()
            }

            /// Returns true if any component is NaN.
            #[inline]
            pub fn is_nan(self) -> bool {
                self.x.is_nan() || self.y.is_nan()
            }
        }
    };
}

vec2_common!(Vec2f, f32, 0.0, 1.0);
vec2_float!(Vec2f, f32);

vec2_common!(Vec2d, f64, 0.0, 1.0);
vec2_float!(Vec2d, f64);

vec2_common!(Vec2i, i32, 0, 1);

impl From<Vec2f> for Vec2d {
    #[inline]
    fn from(v: Vec2f) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }
}

impl From<Vec2i> for Vec2f {
    #[inline]
    fn from(v: Vec2i) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<Vec2i> for Vec2d {
    #[inline]
    fn from(v: Vec2i) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }
}

impl Vec2d {
    /// Converts to single precision, rounding each component to the nearest
    /// representable `f32`.
    #[inline]
    pub fn as_vec2f(self) -> Vec2f {
        Vec2f::new(self.x as f32, self.y as f32)
    }
}

impl Vec2f {
    /// Converts to an integer vector, truncating each component.
    #[inline]
    pub fn as_vec2i(self) -> Vec2i {
        Vec2i::new(self.x as i32, self.y as i32)
    }
}
