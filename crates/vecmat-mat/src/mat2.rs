//! 2x2 matrix types.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use vecmat_vec::{Vec2d, Vec2f, Vec2i};

macro_rules! mat2_common {
    ($name:ident, $t:ident, $vec:ident, $zero:literal, $one:literal) => {
        /// A 2x2 matrix stored in row-major order.
        ///
        /// Element access is `m[row][col]`; `m[row]` yields the row array.
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Matrix elements in row-major order: `[row0, row1]`.
            pub m: [[$t; 2]; 2],
        }

        impl $name {
            /// Zero matrix.
            pub const ZERO: Self = Self { m: [[$zero; 2]; 2] };

            /// Identity matrix.
            pub const IDENTITY: Self = Self {
                m: [[$one, $zero], [$zero, $one]],
            };

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[$t; 2]; 2]) -> Self {
                Self { m: rows }
            }

            /// Creates a matrix from column arrays.
            ///
            /// Transposes the input (columns become rows internally).
            #[inline]
            pub const fn from_cols(cols: [[$t; 2]; 2]) -> Self {
                Self {
                    m: [[cols[0][0], cols[1][0]], [cols[0][1], cols[1][1]]],
                }
            }

            /// Creates a diagonal matrix.
            #[inline]
            pub const fn diagonal(d0: $t, d1: $t) -> Self {
                Self::from_rows([[d0, $zero], [$zero, d1]])
            }

            /// Returns a row as a vector.
            #[inline]
            pub fn row(&self, i: usize) -> $vec {
                $vec::from_array(self.m[i])
            }

            /// Returns a column as a vector.
            #[inline]
            pub fn col(&self, i: usize) -> $vec {
                $vec::new(self.m[0][i], self.m[1][i])
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self::from_rows([
                    [self.m[0][0], self.m[1][0]],
                    [self.m[0][1], self.m[1][1]],
                ])
            }

            /// Computes the determinant.
            #[inline]
            pub fn determinant(&self) -> $t {
                self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
            }

            /// Transforms a vector by this matrix (`matrix * vector`).
            #[inline]
            pub fn transform(&self, v: $vec) -> $vec {
                $vec::new(self.row(0).dot(v), self.row(1).dot(v))
            }

            /// Multiplies two matrices.
            #[inline]
            pub fn mul_mat(&self, other: &Self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..2 {
                    for j in 0..2 {
                        result.m[i][j] = self.m[i][0] * other.m[0][j]
                            + self.m[i][1] * other.m[1][j];
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
                for i in 0..2 {
                    for j in 0..2 {
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
                    for j in 0..2 {
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
                    for j in 0..2 {
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
                    for j in 0..2 {
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
                    for j in 0..2 {
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
            type Output = [$t; 2];

            #[inline]
            fn index(&self, i: usize) -> &[$t; 2] {
                &self.m[i]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut [$t; 2] {
                &mut self.m[i]
            }
        }
    };
}

macro_rules! mat2_float {
    ($name:ident, $t:ident) => {
        impl $name {
            /// Rotation by `angle` radians (counterclockwise).
            #[inline]
            pub fn rotation(angle: $t) -> Self {
                let (sin, cos) = angle.sin_cos();
                Self::from_rows([[cos, -sin], [sin, cos]])
            }

            /// Computes the inverse of this matrix.
            ///
            /// Returns `None` if the matrix is singular.
            pub fn inverse(&self) -> Option<Self> {
                let det = self.determinant();
                if det.abs() < 1e-10 {
                    return None;
                }
                let inv_det = 1.0 / det;
                Some(Self::from_rows([
                    [self.m[1][1] * inv_det, -self.m[0][1] * inv_det],
                    [-self.m[1][0] * inv_det, self.m[0][0] * inv_det],
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
        }
    };
}

mat2_common!(Mat2f, f32, Vec2f, 0.0, 1.0);
mat2_float!(Mat2f, f32);

mat2_common!(Mat2d, f64, Vec2d, 0.0, 1.0);
mat2_float!(Mat2d, f64);

mat2_common!(Mat2i, i32, Vec2i, 0, 1);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let v = Vec2d::new(1.0, 2.0);
        assert_eq!(Mat2d::IDENTITY * v, v);
    }

    #[test]
    fn test_arithmetic() {
        let m1 = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let m2 = Mat2d::from_rows([[4.0, 3.0], [2.0, 1.0]]);
        assert_eq!(m1 + m2, Mat2d::from_rows([[5.0, 5.0], [5.0, 5.0]]));
        assert_eq!(m1 - m2, Mat2d::from_rows([[-3.0, -1.0], [1.0, 3.0]]));
        assert_eq!(m1 * 2.0, Mat2d::from_rows([[2.0, 4.0], [6.0, 8.0]]));
    }

    #[test]
    fn test_product() {
        let m1 = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let m2 = Mat2d::from_rows([[4.0, 3.0], [2.0, 1.0]]);
        assert_eq!(m1 * m2, Mat2d::from_rows([[8.0, 5.0], [20.0, 13.0]]));
    }

    #[test]
    fn test_determinant_and_inverse() {
        let m = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_abs_diff_eq!(m.determinant(), -2.0);
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat2d::IDENTITY));
        assert!(Mat2d::from_rows([[1.0, 2.0], [2.0, 4.0]]).inverse().is_none());
    }

    #[test]
    fn test_rotation() {
        let m = Mat2d::rotation(FRAC_PI_2);
        assert!((m * Vec2d::UNIT_X).approx_eq(Vec2d::UNIT_Y));
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_int_matrix() {
        let m = Mat2i::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.determinant(), -2);
        assert_eq!(m * Vec2i::new(1, 1), Vec2i::new(3, 7));
    }
}
