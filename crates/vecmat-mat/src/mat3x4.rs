//! 3x4 matrix types (3 rows, 4 columns).
//!
//! Useful as the linear part of an affine 3D transform. Products with the
//! square shapes keep the 3x4 shape: `Mat3 * Mat3x4` and `Mat3x4 * Mat4`
//! both yield a 3x4 matrix.

use crate::{Mat3d, Mat3f, Mat3i, Mat4d, Mat4f, Mat4i};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use vecmat_vec::{Vec3d, Vec3f, Vec3i, Vec4d, Vec4f, Vec4i};

macro_rules! mat3x4_common {
    ($name:ident, $t:ident, $vec3:ident, $vec4:ident, $mat3:ident, $mat4:ident, $zero:literal) => {
        /// A 3x4 matrix (3 rows, 4 columns) stored in row-major order.
        ///
        /// Element access is `m[row][col]`; `m[row]` yields the row array.
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Matrix elements in row-major order: `[row0, row1, row2]`.
            pub m: [[$t; 4]; 3],
        }

        impl $name {
            /// Zero matrix.
            pub const ZERO: Self = Self { m: [[$zero; 4]; 3] };

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[$t; 4]; 3]) -> Self {
                Self { m: rows }
            }

            /// Returns a row as a 4-vector.
            #[inline]
            pub fn row(&self, i: usize) -> $vec4 {
                $vec4::from_array(self.m[i])
            }

            /// Returns a column as a 3-vector.
            #[inline]
            pub fn col(&self, i: usize) -> $vec3 {
                $vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
            }

            /// Transforms a 4-vector into a 3-vector (`matrix * vector`).
            #[inline]
            pub fn transform(&self, v: $vec4) -> $vec3 {
                $vec3::new(
                    self.row(0).dot(v),
                    self.row(1).dot(v),
                    self.row(2).dot(v),
                )
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..3 {
                    for j in 0..4 {
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
                for i in 0..3 {
                    for j in 0..4 {
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
                for i in 0..3 {
                    for j in 0..4 {
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
                for i in 0..3 {
                    for j in 0..4 {
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
                for i in 0..3 {
                    for j in 0..4 {
                        result.m[i][j] = self.m[i][j] / rhs;
                    }
                }
                result
            }
        }

        impl Mul<$vec4> for $name {
            type Output = $vec3;

            #[inline]
            fn mul(self, rhs: $vec4) -> $vec3 {
                self.transform(rhs)
            }
        }

        // Mat3 * Mat3x4 -> Mat3x4
        impl Mul<$name> for $mat3 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                let mut result = $name::ZERO;
                for i in 0..3 {
                    for j in 0..4 {
                        result.m[i][j] = self.m[i][0] * rhs.m[0][j]
                            + self.m[i][1] * rhs.m[1][j]
                            + self.m[i][2] * rhs.m[2][j];
                    }
                }
                result
            }
        }

        // Mat3x4 * Mat4 -> Mat3x4
        impl Mul<$mat4> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $mat4) -> Self {
                let mut result = Self::ZERO;
                for i in 0..3 {
                    for j in 0..4 {
                        result.m[i][j] = self.m[i][0] * rhs.m[0][j]
                            + self.m[i][1] * rhs.m[1][j]
                            + self.m[i][2] * rhs.m[2][j]
                            + self.m[i][3] * rhs.m[3][j];
                    }
                }
                result
            }
        }

        impl Index<usize> for $name {
            type Output = [$t; 4];

            #[inline]
            fn index(&self, i: usize) -> &[$t; 4] {
                &self.m[i]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut [$t; 4] {
                &mut self.m[i]
            }
        }
    };
}

macro_rules! mat3x4_float {
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

mat3x4_common!(Mat3x4f, f32, Vec3f, Vec4f, Mat3f, Mat4f, 0.0);
mat3x4_float!(Mat3x4f, f32);

mat3x4_common!(Mat3x4d, f64, Vec3d, Vec4d, Mat3d, Mat4d, 0.0);
mat3x4_float!(Mat3x4d, f64);

mat3x4_common!(Mat3x4i, i32, Vec3i, Vec4i, Mat3i, Mat4i, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let m = Mat3x4d::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
        ]);
        assert_eq!(
            m * Vec4d::new(1.0, 1.0, 1.0, 1.0),
            Vec3d::new(10.0, 26.0, 42.0)
        );
    }

    #[test]
    fn test_mat3_times_mat3x4() {
        let m1 = Mat3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let m2 = Mat3x4d::from_rows([
            [3.0, 4.0, 1.0, 2.0],
            [7.0, 5.0, 9.0, 6.0],
            [8.0, 10.0, 11.0, 12.0],
        ]);
        let expected = Mat3x4d::from_rows([
            [41.0, 44.0, 52.0, 50.0],
            [95.0, 101.0, 115.0, 110.0],
            [149.0, 158.0, 178.0, 170.0],
        ]);
        assert_eq!(m1 * m2, expected);
    }

    #[test]
    fn test_mat3x4_times_mat4_identity() {
        let m = Mat3x4d::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
        ]);
        assert_eq!(m * Mat4d::IDENTITY, m);
    }

    #[test]
    fn test_arithmetic() {
        let m = Mat3x4i::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]]);
        assert_eq!(m + m, m * 2);
        assert_eq!(m - m, Mat3x4i::ZERO);
    }
}
