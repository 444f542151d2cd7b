//! Euler-angle axis orderings and conversions.
//!
//! [`EulerOrder`] is the hub between the three rotation representations:
//! it decomposes a 3x3 rotation matrix into per-axis angles and composes
//! per-axis angles into a quaternion. The six variants cover every way of
//! decomposing a rotation into sequential single-axis rotations.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_rot::EulerOrder;
//!
//! let q = EulerOrder::XYZ.quat_from_angles(0.1, 0.2, 0.3);
//! let m = q.to_rotation_matrix();
//! let angles = EulerOrder::XYZ.euler_from_matrix(&m);
//! assert!((angles.y - 0.2).abs() < 1e-9);
//! ```
//!
//! # Contract
//!
//! Decomposition assumes a proper rotation matrix (orthonormal columns,
//! determinant +1) and performs no validation. The middle angle comes from
//! an `asin` whose argument is not clamped: a matrix drifted off
//! orthonormality can produce NaN in that component. At gimbal lock
//! (middle angle at ±90°) the outer two angles are not unique and the
//! returned triple is one of the valid decompositions.

use crate::Quatd;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use vecmat_mat::Mat3d;
use vecmat_vec::Vec3d;

/// The order in which per-axis rotations are applied.
///
/// The enum name reads outermost-to-innermost for column-vector matrices:
/// `ZYX` means `R = Rz * Ry * Rx`, i.e. the X rotation is applied to a
/// vector first. Composition and decomposition under the same order are
/// mutual inverses away from gimbal lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerOrder {
    /// Rotation about X, then Y, then Z (innermost Z).
    XYZ,
    /// Rotation about X, then Z, then Y (innermost Y).
    XZY,
    /// Rotation about Y, then X, then Z (innermost Z).
    YXZ,
    /// Rotation about Y, then Z, then X (innermost X).
    YZX,
    /// Rotation about Z, then X, then Y (innermost Y).
    ZXY,
    /// Rotation about Z, then Y, then X (innermost X).
    ZYX,
}

// Single-axis rotations, half-angle form.
#[inline]
fn qx(angle: f64) -> Quatd {
    let (sin, cos) = (angle * 0.5).sin_cos();
    Quatd::new(cos, sin, 0.0, 0.0)
}

#[inline]
fn qy(angle: f64) -> Quatd {
    let (sin, cos) = (angle * 0.5).sin_cos();
    Quatd::new(cos, 0.0, sin, 0.0)
}

#[inline]
fn qz(angle: f64) -> Quatd {
    let (sin, cos) = (angle * 0.5).sin_cos();
    Quatd::new(cos, 0.0, 0.0, sin)
}

impl EulerOrder {
    /// All six orders, in declaration order.
    pub const ALL: [EulerOrder; 6] = [
        EulerOrder::XYZ,
        EulerOrder::XZY,
        EulerOrder::YXZ,
        EulerOrder::YZX,
        EulerOrder::ZXY,
        EulerOrder::ZYX,
    ];

    /// Decomposes a rotation matrix into Euler angles under this order.
    ///
    /// The result is axis-labeled: `.x` is the rotation about X regardless
    /// of where X sits in the order. The input must be a proper rotation
    /// matrix; this is not checked. The middle angle is extracted with
    /// `asin` (unclamped), the outer two with `atan2`.
    pub fn euler_from_matrix(self, m: &Mat3d) -> Vec3d {
        match self {
            EulerOrder::XYZ => Vec3d::new(
                (-m[1][2]).atan2(m[2][2]),
                m[0][2].asin(),
                (-m[0][1]).atan2(m[0][0]),
            ),
            EulerOrder::XZY => Vec3d::new(
                m[2][1].atan2(m[1][1]),
                m[0][2].atan2(m[0][0]),
                (-m[0][1]).asin(),
            ),
            EulerOrder::YXZ => Vec3d::new(
                (-m[1][2]).asin(),
                m[0][2].atan2(m[2][2]),
                m[1][0].atan2(m[1][1]),
            ),
            EulerOrder::YZX => Vec3d::new(
                (-m[1][2]).atan2(m[1][1]),
                (-m[2][0]).atan2(m[0][0]),
                m[1][0].asin(),
            ),
            EulerOrder::ZXY => Vec3d::new(
                m[2][1].asin(),
                (-m[2][0]).atan2(m[2][2]),
                (-m[0][1]).atan2(m[1][1]),
            ),
            EulerOrder::ZYX => Vec3d::new(
                m[2][1].atan2(m[2][2]),
                (-m[2][0]).asin(),
                m[1][0].atan2(m[0][0]),
            ),
        }
    }

    /// Decomposes a quaternion's rotation into Euler angles under this
    /// order, by way of its rotation matrix.
    #[inline]
    pub fn euler_from_quat(self, q: Quatd) -> Vec3d {
        self.euler_from_matrix(&q.to_rotation_matrix())
    }

    /// Composes per-axis angles into a quaternion under this order.
    ///
    /// Single-axis quaternions are multiplied left to right as the enum
    /// name reads, so the rightmost (innermost) axis is applied to a
    /// vector first. Inverts [`euler_from_matrix`](Self::euler_from_matrix)
    /// away from gimbal lock.
    pub fn quat_from_angles(self, x: f64, y: f64, z: f64) -> Quatd {
        match self {
            EulerOrder::XYZ => qx(x) * qy(y) * qz(z),
            EulerOrder::XZY => qx(x) * qz(z) * qy(y),
            EulerOrder::YXZ => qy(y) * qx(x) * qz(z),
            EulerOrder::YZX => qy(y) * qz(z) * qx(x),
            EulerOrder::ZXY => qz(z) * qx(x) * qy(y),
            EulerOrder::ZYX => qz(z) * qy(y) * qx(x),
        }
    }

    /// Composes an axis-labeled angle triple into a quaternion under this
    /// order.
    #[inline]
    pub fn quat_from_euler(self, angles: Vec3d) -> Quatd {
        self.quat_from_angles(angles.x, angles.y, angles.z)
    }

    /// The canonical name of this order ("XYZ" .. "ZYX").
    pub fn name(self) -> &'static str {
        match self {
            EulerOrder::XYZ => "XYZ",
            EulerOrder::XZY => "XZY",
            EulerOrder::YXZ => "YXZ",
            EulerOrder::YZX => "YZX",
            EulerOrder::ZXY => "ZXY",
            EulerOrder::ZYX => "ZYX",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an [`EulerOrder`] from an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized euler order: {0}")]
pub struct ParseEulerOrderError(pub String);

impl FromStr for EulerOrder {
    type Err = ParseEulerOrderError;

    /// Parses a case-insensitive axis-order name such as `"xyz"` or
    /// `"ZYX"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "XYZ" => Ok(EulerOrder::XYZ),
            "XZY" => Ok(EulerOrder::XZY),
            "YXZ" => Ok(EulerOrder::YXZ),
            "YZX" => Ok(EulerOrder::YZX),
            "ZXY" => Ok(EulerOrder::ZXY),
            "ZYX" => Ok(EulerOrder::ZYX),
            _ => Err(ParseEulerOrderError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;
    use vecmat_vec::Vec3d;

    fn assert_vec_eq(a: Vec3d, b: Vec3d) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-6);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-6);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip_all_orders() {
        let angles = Vec3d::new(0.1, 0.2, 0.3);
        for order in EulerOrder::ALL {
            let q = order.quat_from_euler(angles);
            let m = q.to_rotation_matrix();
            assert_vec_eq(order.euler_from_matrix(&m), angles);
        }
    }

    #[test]
    fn test_roundtrip_negative_angles() {
        let angles = Vec3d::new(-0.9, 0.4, -1.1);
        for order in EulerOrder::ALL {
            let q = order.quat_from_euler(angles);
            assert_vec_eq(order.euler_from_quat(q), angles);
        }
    }

    #[test]
    fn test_zyx_matches_explicit_composition() {
        let q = EulerOrder::ZYX.quat_from_angles(0.1, 0.2, 0.3);
        let explicit = qz(0.3) * qy(0.2) * qx(0.1);
        assert!(q.approx_eq(explicit));
        assert_vec_eq(q.euler(EulerOrder::ZYX), Vec3d::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_xyz_matches_matrix_composition() {
        // Composition under XYZ equals Rx * Ry * Rz on matrices.
        let (x, y, z) = (0.3, -0.5, 0.9);
        let q = EulerOrder::XYZ.quat_from_angles(x, y, z);
        let m = Mat3d::rotation_x(x) * Mat3d::rotation_y(y) * Mat3d::rotation_z(z);
        assert!(q.to_rotation_matrix().approx_eq(&m));
    }

    #[test]
    fn test_single_axis_decomposition() {
        // A pure Y rotation decomposes to (0, angle, 0) under every order.
        let m = Mat3d::rotation_y(0.6);
        for order in EulerOrder::ALL {
            assert_vec_eq(order.euler_from_matrix(&m), Vec3d::new(0.0, 0.6, 0.0));
        }
    }

    #[test]
    fn test_identity_decomposes_to_zero() {
        for order in EulerOrder::ALL {
            assert_vec_eq(order.euler_from_matrix(&Mat3d::IDENTITY), Vec3d::ZERO);
        }
    }

    #[test]
    fn test_same_triple_differs_across_orders() {
        let angles = Vec3d::new(0.4, 0.5, 0.6);
        let xyz = EulerOrder::XYZ.quat_from_euler(angles);
        let zyx = EulerOrder::ZYX.quat_from_euler(angles);
        assert!(!xyz.approx_eq(zyx));
    }

    #[test]
    fn test_gimbal_lock_does_not_panic() {
        // Middle angle at +90 degrees under XYZ: asin sees exactly 1.0.
        let m = Mat3d::rotation_x(0.1) * Mat3d::rotation_y(FRAC_PI_2) * Mat3d::rotation_z(0.3);
        let angles = EulerOrder::XYZ.euler_from_matrix(&m);
        assert_abs_diff_eq!(angles.y, FRAC_PI_2, epsilon = 1e-12);
        // The outer angles are non-unique at the singularity; only require
        // that the decomposition stays finite and preserves the rotation.
        assert!(angles.is_finite());
        let q = EulerOrder::XYZ.quat_from_euler(angles);
        assert!(q.to_rotation_matrix().approx_eq(&m));
    }

    #[test]
    fn test_unclamped_asin_propagates_nan() {
        // A scaled (non-orthonormal) matrix pushes the asin argument past 1.
        let m = Mat3d::rotation_y(1.0) * 1.5;
        let angles = EulerOrder::XYZ.euler_from_matrix(&m);
        assert!(angles.y.is_nan());
    }

    #[test]
    fn test_display_and_parse() {
        for order in EulerOrder::ALL {
            assert_eq!(order.name().parse::<EulerOrder>().unwrap(), order);
            assert_eq!(
                order.name().to_ascii_lowercase().parse::<EulerOrder>().unwrap(),
                order
            );
            assert_eq!(order.to_string(), order.name());
        }
        assert!("xy".parse::<EulerOrder>().is_err());
        assert!("XYX".parse::<EulerOrder>().is_err());
    }
}
