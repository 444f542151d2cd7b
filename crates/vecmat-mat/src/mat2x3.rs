//! 2x3 matrix types (2 rows, 3 columns).
//!
//! Useful as the linear part of an affine 2D transform. Products with the
//! square shapes keep the 2x3 shape: `Mat2 * Mat2x3` and `Mat2x3 * Mat3`
//! both yield a 2x3 matrix.

use crate::{Mat2d, Mat2f, Mat2i, Mat3d, Mat3f, Mat3i};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use vecmat_vec::{Vec2d, Vec2f, Vec2i, Vec3d, Vec3f, Vec3i};

macro_rules! mat2x3_common {
    ($name:ident, $t:ident, $vec2:ident, $vec3:ident, $mat2:ident, $mat3:ident, $zero:literal) => {
        /// A 2x3 matrix (2 rows, 3 columns) stored in row-major order.
        ///
        /// Element access is `m[row][col]`; `m[row]` yields the row array.
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Matrix elements in row-major order: `[row0, row1]`.
            pub m: [[$t; 3]; 2],
        }

        impl $name {
            /// Zero matrix.
            pub const ZERO: Self = Self { m: [[$zero; 3]; 2] };

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[$t; 3]; 2]) -> Self {
                Self { m: rows }
            }

            /// Returns a row as a 3-vector.
            #[inline]
            pub fn row(&self, i: usize) -> $vec3 {
                $vec3::from_array(self.m[i])
            }

            /// Returns a column as a 2-vector.
            #[inline]
            pub fn col(&self, i: usize) -> $vec2 {
                $vec2::new(self.m[0][i], self.m[1][i])
            }

            /// Transforms a 3-vector into a 2-vector (`matrix * vector`).
            #[inline]
            pub fn transform(&self, v: $vec3) -> $vec2 {
                $vec2::new(self.row(0).dot(v), self.row(1).dot(v))
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..2 {
                    for j in 0..3 {
                        result.m[i][j] = self.m[i][j] + rhs.m[i][j];
                    }
                }
                result
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..2 {
                    for j in 0..3 {
                        result.m[i][j] = self.m[i][j] - rhs.m[i][j];
                    }
                }
                result
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..2 {
                    for j in 0..3 {
                        result.m[i][j] = -self.m[i][j];
                    }
                }
                result
            }
        }

        impl Mul<$t> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                let mut result = Self::ZERO;
                for i in 0..2 {
                    for j in 0..3 {
                        result.m[i][j] = self.m[i][j] * rhs;
                    }
                }
                result
            }
        }

        impl Div<$t> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                let mut result = Self::ZERO;
                for i in 0..2 {
                    for j in 0..3 {
                        result.m[i][j] = self.m[i][j] / rhs;
                    }
                }
                result
            }
        }

        impl Mul<$vec3> for $name {
            type Output = $vec2;

            #[inline]
            fn mul(self, rhs: $vec3) -> $vec2 {
                self.transform(rhs)
            }
        }

        // Mat2 * Mat2x3 -> Mat2x3
        impl Mul<$name> for $mat2 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                let mut result = $name::ZERO;
                for i in 0..2 {
                    for j in 0..3 {
                        result.m[i][j] =
                            self.m[i][0] * rhs.m[0][j] + self.m[i][1] * rhs.m[1][j];
                    }
                }
                result
            }
        }

        // Mat2x3 * Mat3 -> Mat2x3
        impl Mul<$mat3> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $mat3) -> Self {
                let mut result = Self::ZERO;
                for i in 0..2 {
                    for j in 0..3 {
                        result.m[i][j] = self.m[i][0] * rhs.m[0][j]
                            + self.m[i][1] * rhs.m[1][j]
                            + self.m[i][2] * rhs.m[2][j];
                    }
                }
                result
            }
        }

        impl Index<usize> for $name {
            type Output = [$t; 3];

            #[inline]
            fn index(&self, i: usize) -> &[$t; 3] {
                &self.m[i]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut [$t; 3] {
                &mut self.m[i]
            }
        }
    };
}

macro_rules! mat2x3_float {
    ($name:ident, $t:ident) => {
        impl $name {
            /// Returns true if each element is within tolerance of the
            /// matching element of `other`.
            #[inline]
            pub fn approx_eq(&self, other: &Self) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| vecmat_core::$t::approx_eq(*a, *b))
            }
        }
    };
}

mat2x3_common!(Mat2x3f, f32, Vec2f, Vec3f, Mat2f, Mat3f, 0.0);
mat2x3_float!(Mat2x3f, f32);

mat2x3_common!(Mat2x3d, f64, Vec2d, Vec3d, Mat2d, Mat3d, 0.0);
mat2x3_float!(Mat2x3d, f64);

mat2x3_common!(Mat2x3i, i32, Vec2i, Vec3i, Mat2i, Mat3i, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let m = Mat2x3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m * Vec3d::new(1.0, 1.0, 1.0), Vec2d::new(6.0, 15.0));
    }

    #[test]
    fn test_square_products_keep_shape() {
        let a = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let m = Mat2x3d::from_rows([[1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]);
        let left = a * m;
        assert_eq!(left, Mat2x3d::from_rows([[1.0, 2.0, 3.0], [3.0, 4.0, 7.0]]));

        let right = m * Mat3d::IDENTITY;
        assert_eq!(right, m);
    }

    #[test]
    fn test_arithmetic() {
        let m = Mat2x3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m + m, m * 2.0);
        assert_eq!(m - m, Mat2x3d::ZERO);
        assert_eq!((m * 2.0) / 2.0, m);
    }

    #[test]
    fn test_int_flavor() {
        let m = Mat2x3i::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m * Vec3i::new(1, 1, 1), Vec2i::new(6, 15));
    }
}
