//! 3x3 matrix types.
//!
//! [`Mat3f`] and [`Mat3d`] are the workhorse of the rotation subsystem: the
//! `rotation_x`/`rotation_y`/`rotation_z` constructors build proper rotation
//! matrices, and `vecmat-rot` decomposes 3x3 rotations into Euler angles via
//! `m[row][col]` access. [`Mat3i`] shares the component-wise core.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use vecmat_vec::{Vec3d, Vec3f, Vec3i};

macro_rules! mat3_common {
    ($name:ident, $t:ident, $vec:ident, $zero:literal, $one:literal) => {
        /// A 3x3 matrix stored in row-major order.
        ///
        /// Element access is `m[row][col]`; `m[row]` yields the row array.
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Matrix elements in row-major order: `[row0, row1, row2]`.
            pub m: [[$t; 3]; 3],
        }

        impl $name {
            /// Zero matrix.
            pub const ZERO: Self = Self { m: [[$zero; 3]; 3] };

            /// Identity matrix.
            pub const IDENTITY: Self = Self {
                m: [
                    [$one, $zero, $zero],
                    [$zero, $one, $zero],
                    [$zero, $zero, $one],
                ],
            };

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[$t; 3]; 3]) -> Self {
                Self { m: rows }
            }

            /// Creates a matrix from column arrays.
            ///
            /// Transposes the input (columns become rows internally).
            #[inline]
            pub const fn from_cols(cols: [[$t; 3]; 3]) -> Self {
                Self {
                    m: [
                        [cols[0][0], cols[1][0], cols[2][0]],
                        [cols[0][1], cols[1][1], cols[2][1]],
                        [cols[0][2], cols[1][2], cols[2][2]],
                    ],
                }
            }

            /// Creates a diagonal matrix.
            #[inline]
            pub const fn diagonal(d0: $t, d1: $t, d2: $t) -> Self {
                Self::from_rows([
                    [d0, $zero, $zero],
                    [$zero, d1, $zero],
                    [$zero, $zero, d2],
                ])
            }

            /// Returns a row as a vector.
            #[inline]
            pub fn row(&self, i: usize) -> $vec {
                $vec::from_array(self.m[i])
            }

            /// Returns a column as a vector.
            #[inline]
            pub fn col(&self, i: usize) -> $vec {
                $vec::new(self.m[0][i], self.m[1][i], self.m[2][i])
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self::from_rows([
                    [self.m[0][0], self.m[1][0], self.m[2][0]],
                    [self.m[0][1], self.m[1][1], self.m[2][1]],
                    [self.m[0][2], self.m[1][2], self.m[2][2]],
                ])
            }

            /// Computes the determinant.
            #[inline]
            pub fn determinant(&self) -> $t {
                let m = &self.m;
                m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
                    - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
                    + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
            }

            /// Transforms a vector by this matrix (`matrix * vector`).
            #[inline]
            pub fn transform(&self, v: $vec) -> $vec {
                $vec::new(
                    self.row(0).dot(v),
                    self.row(1).dot(v),
                    self.row(2).dot(v),
                )
            }

            /// Multiplies two matrices.
            #[inline]
            pub fn mul_mat(&self, other: &Self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..3 {
                    for j in 0..3 {
                        result.m[i][j] = self.m[i][0] * other.m[0][j]
                            + self.m[i][1] * other.m[1][j]
                            + self.m[i][2] * other.m[2][j];
                    }
                }
                result
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..3 {
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
                for i in 0..3 {
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
                for i in 0..3 {
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
                for i in 0..3 {
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
                for i in 0..3 {
                    for j in 0..3 {
                        result.m[i][j] = self.m[i][j] / rhs;
                    }
                }
                result
            }
        }

        impl Mul<$vec> for $name {
            type Output = $vec;

            #[inline]
            fn mul(self, rhs: $vec) -> $vec {
                self.transform(rhs)
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.mul_mat(&rhs)
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

macro_rules! mat3_float {
    ($name:ident, $t:ident) => {
        impl $name {
            /// Rotation about the X axis by `angle` radians.
            #[inline]
            pub fn rotation_x(angle: $t) -> Self {
                let (sin, cos) = angle.sin_cos();
                Self::from_rows([
                    [1.0, 0.0, 0.0],
                    [0.0, cos, -sin],
                    [0.0, sin, cos],
                ])
            }

            /// Rotation about the Y axis by `angle` radians.
            #[inline]
            pub fn rotation_y(angle: $t) -> Self {
                let (sin, cos) = angle.sin_cos();
                Self::from_rows([
                    [cos, 0.0, sin],
                    [0.0, 1.0, 0.0],
                    [-sin, 0.0, cos],
                ])
            }

            /// Rotation about the Z axis by `angle` radians.
            #[inline]
            pub fn rotation_z(angle: $t) -> Self {
                let (sin, cos) = angle.sin_cos();
                Self::from_rows([
                    [cos, -sin, 0.0],
                    [sin, cos, 0.0],
                    [0.0, 0.0, 1.0],
                ])
            }

            /// Computes the inverse of this matrix.
            ///
            /// Returns `None` if the matrix is singular.
            pub fn inverse(&self) -> Option<Self> {
                let det = self.determinant();
                if det.abs() < 1e-10 {
                    return None;
                }

                let m = &self.m;
                let inv_det = 1.0 / det;

                // Adjugate scaled by 1/det
                Some(Self::from_rows([
                    [
                        (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                        (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                        (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                    ],
                    [
                        (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                        (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                        (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                    ],
                    [
                        (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                        (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                        (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                    ],
                ]))
            }

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

            /// Returns true if all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().flatten().all(|x| x.is_finite())
            }
        }
    };
}

mat3_common!(Mat3f, f32, Vec3f, 0.0, 1.0);
mat3_float!(Mat3f, f32);

mat3_common!(Mat3d, f64, Vec3d, 0.0, 1.0);
mat3_float!(Mat3d, f64);

mat3_common!(Mat3i, i32, Vec3i, 0, 1);

impl From<Mat3f> for Mat3d {
    #[inline]
    fn from(m: Mat3f) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = m.m[i][j] as f64;
            }
        }
        result
    }
}

impl Mat3d {
    /// Converts to single precision, rounding each element to the nearest
    /// representable `f32`.
    #[inline]
    pub fn as_mat3f(self) -> Mat3f {
        let mut result = Mat3f::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][j] as f32;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let v = Vec3d::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3d::IDENTITY * v, v);
        assert_eq!(Mat3d::default(), Mat3d::IDENTITY);
    }

    #[test]
    fn test_sum_and_difference() {
        let m1 = Mat3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let m2 = Mat3d::from_rows([[3.0, 4.0, 1.0], [2.0, 7.0, 5.0], [9.0, 6.0, 8.0]]);
        let sum = Mat3d::from_rows([[4.0, 6.0, 4.0], [6.0, 12.0, 11.0], [16.0, 14.0, 17.0]]);
        assert_eq!(m1 + m2, sum);
        assert_eq!(sum - m2, m1);
        assert_eq!(-m1, Mat3d::ZERO - m1);
    }

    #[test]
    fn test_scalar_ops() {
        let m = Mat3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let scaled = Mat3d::from_rows([[1.5, 3.0, 4.5], [6.0, 7.5, 9.0], [10.5, 12.0, 13.5]]);
        assert_eq!(m * 1.5, scaled);
        assert_eq!(m / 2.0, m * 0.5);
    }

    #[test]
    fn test_matrix_vector_product() {
        let m = Mat3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m * Vec3d::new(1.5, 2.5, 3.5), Vec3d::new(17.0, 39.5, 62.0));
    }

    #[test]
    fn test_matrix_product() {
        let m1 = Mat3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let m2 = Mat3d::from_rows([[3.0, 4.0, 1.0], [2.0, 7.0, 5.0], [9.0, 6.0, 8.0]]);
        let expected =
            Mat3d::from_rows([[34.0, 36.0, 35.0], [76.0, 87.0, 77.0], [118.0, 138.0, 119.0]]);
        assert_eq!(m1 * m2, expected);
    }

    #[test]
    fn test_transpose_and_index() {
        let m = Mat3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m[0][2], 3.0);
        assert_eq!(m.transpose()[2][0], 3.0);
        assert_eq!(m.row(1), Vec3d::new(4.0, 5.0, 6.0));
        assert_eq!(m.col(1), Vec3d::new(2.0, 5.0, 8.0));
    }

    #[test]
    fn test_determinant_and_inverse() {
        let m = Mat3d::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat3d::IDENTITY));
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let m = Mat3d::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_rotation_constructors_are_proper_rotations() {
        for m in [
            Mat3d::rotation_x(0.7),
            Mat3d::rotation_y(-1.2),
            Mat3d::rotation_z(2.9),
        ] {
            assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
            assert!((m * m.transpose()).approx_eq(&Mat3d::IDENTITY));
        }
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let m = Mat3d::rotation_z(FRAC_PI_2);
        let v = m * Vec3d::UNIT_X;
        assert!(v.approx_eq(Vec3d::UNIT_Y));
    }

    #[test]
    fn test_int_matrix() {
        let m = Mat3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.determinant(), 0);
        assert_eq!(m * Vec3i::new(1, 0, 0), Vec3i::new(1, 4, 7));
        assert_eq!((m * 2)[2][2], 18);
    }
}
