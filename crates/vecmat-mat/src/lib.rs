//! # vecmat-mat
//!
//! Matrix value types for the vecmat-rs workspace.
//!
//! Square shapes come in three scalar flavors, non-square shapes likewise:
//!
//! - [`Mat2f`]/[`Mat2d`]/[`Mat2i`] - 2x2
//! - [`Mat3f`]/[`Mat3d`]/[`Mat3i`] - 3x3
//! - [`Mat4f`]/[`Mat4d`]/[`Mat4i`] - 4x4
//! - [`Mat2x3f`]/[`Mat2x3d`]/[`Mat2x3i`] - 2 rows, 3 columns
//! - [`Mat3x4f`]/[`Mat3x4d`]/[`Mat3x4i`] - 3 rows, 4 columns
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//! `matrix * vector` applies the matrix to the vector, and element access is
//! `m[row][col]`.
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vecmat_mat::Mat3d;
//! use vecmat_vec::Vec3d;
//!
//! let m = Mat3d::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//!     [7.0, 8.0, 9.0],
//! ]);
//! assert_eq!(m * Vec3d::new(1.5, 2.5, 3.5), Vec3d::new(17.0, 39.5, 62.0));
//! assert_eq!(m[2][1], 8.0);
//! ```
//!
//! The rotation constructors on [`Mat3f`]/[`Mat3d`] produce proper rotation
//! matrices; the Euler-angle decomposition in `vecmat-rot` assumes (and does
//! not verify) that its 3x3 input is one.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat2;
mod mat2x3;
mod mat3;
mod mat3x4;
mod mat4;

pub use mat2::*;
pub use mat2x3::*;
pub use mat3::*;
pub use mat3x4::*;
pub use mat4::*;
