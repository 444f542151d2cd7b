//! 4x4 matrix types.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use vecmat_vec::{Vec4d, Vec4f, Vec4i};

macro_rules! mat4_common {
    ($name:ident, $t:ident, $vec:ident, $zero:literal, $one:literal) => {
        /// A 4x4 matrix stored in row-major order.
        ///
        /// Element access is `m[row][col]`; `m[row]` yields the row array.
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Matrix elements in row-major order: `[row0, row1, row2, row3]`.
            pub m: [[$t; 4]; 4],
        }

        impl $name {
            /// Zero matrix.
            pub const ZERO: Self = Self { m: [[$zero; 4]; 4] };

            /// Identity matrix.
            pub const IDENTITY: Self = Self {
                m: [
                    [$one, $zero, $zero, $zero],
                    [$zero, $one, $zero, $zero],
                    [$zero, $zero, $one, $zero],
                    [$zero, $zero, $zero, $one],
                ],
            };

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[$t; 4]; 4]) -> Self {
                Self { m: rows }
            }

            /// Creates a matrix from column arrays.
            ///
            /// Transposes the input (columns become rows internally).
            #[inline]
            pub const fn from_cols(cols: [[$t; 4]; 4]) -> Self {
                Self {
                    m: [
                        [cols[0][0], cols[1][0], cols[2][0], cols[3][0]],
                        [cols[0][1], cols[1][1], cols[2][1], cols[3][1]],
                        [cols[0][2], cols[1][2], cols[2][2], cols[3][2]],
                        [cols[0][3], cols[1][3], cols[2][3], cols[3][3]],
                    ],
                }
            }

            /// Creates a diagonal matrix.
            #[inline]
            pub const fn diagonal(d0: $t, d1: $t, d2: $t, d3: $t) -> Self {
                Self::from_rows([
                    [d0, $zero, $zero, $zero],
                    [$zero, d1, $zero, $zero],
                    [$zero, $zero, d2, $zero],
                    [$zero, $zero, $zero, d3],
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
                $vec::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..4 {
                    for j in 0..4 {
                        result.m[i][j] = self.m[j][i];
                    }
                }
                result
            }

            /// Computes the determinant by cofactor expansion along the
            /// first row.
            pub fn determinant(&self) -> $t {
                let m = &self.m;
                // 2x2 minors of the lower two rows
                let s0 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
                let s1 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
                let s2 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
                let s3 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
                let s4 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
                let s5 = m[2][2] * m[3][3] - m[2][3] * m[3][2];

                m[0][0] * (m[1][1] * s5 - m[1][2] * s4 + m[1][3] * s3)
                    - m[0][1] * (m[1][0] * s5 - m[1][2] * s2 + m[1][3] * s1)
                    + m[0][2] * (m[1][0] * s4 - m[1][1] * s2 + m[1][3] * s0)
                    - m[0][3] * (m[1][0] * s3 - m[1][1] * s1 + m[1][2] * s0)
            }

            /// Transforms a vector by this matrix (`matrix * vector`).
            #[inline]
            pub fn transform(&self, v: $vec) -> $vec {
                $vec::new(
                    self.row(0).dot(v),
                    self.row(1).dot(v),
                    self.row(2).dot(v),
                    self.row(3).dot(v),
                )
            }

            /// Multiplies two matrices.
            #[inline]
            pub fn mul_mat(&self, other: &Self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..4 {
                    for j in 0..4 {
                        result.m[i][j] = self.m[i][0] * other.m[0][j]
                            + self.m[i][1] * other.m[1][j]
                            + self.m[i][2] * other.m[2][j]
                            + self.m[i][3] * other.m[3][j];
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
                for i in 0..4 {
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
                for i in 0..4 {
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
                for i in 0..4 {
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
                for i in 0..4 {
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
                for i in 0..4 {
                    for j in 0..4 {
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

macro_rules! mat4_float {
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

            /// Returns true if all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().flatten().all(|x| x.is_finite())
            }
        }
    };
}

mat4_common!(Mat4f, f32, Vec4f, 0.0, 1.0);
mat4_float!(Mat4f, f32);

mat4_common!(Mat4d, f64, Vec4d, 0.0, 1.0);
mat4_float!(Mat4d, f64);

mat4_common!(Mat4i, i32, Vec4i, 0, 1);
