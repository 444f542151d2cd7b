//! Quaternion types.
//!
//! [`Quatf`] and [`Quatd`] implement the full Hamilton algebra over
//! arbitrary quaternions: addition, scalar and quaternion products,
//! conjugation, inversion and division. None of the algebraic operations
//! require (or preserve) unit length; a quaternion represents a rotation
//! when `w² + x² + y² + z² = 1`.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_rot::Quatd;
//! use vecmat_vec::Vec3d;
//!
//! let q = Quatd::from_axis_angle(Vec3d::UNIT_Z, 0.3);
//! let p = Quatd::from_axis_angle(Vec3d::UNIT_X, 0.1);
//! // q * p applies p first, then q.
//! let composed = q * p;
//! assert!(composed.is_normalized());
//! ```

use crate::EulerOrder;
use std::ops::{Add, Div, Mul, Neg, Sub};
use vecmat_mat::{Mat3d, Mat3f};
use vecmat_vec::{Vec3d, Vec3f};

macro_rules! quat_impl {
    ($name:ident, $t:ident, $mat3:ident, $vec3:ident) => {
        /// A quaternion `(w, x, y, z)` with the scalar part first.
        ///
        /// Immutable value type: every operation returns a new quaternion.
        /// The algebraic operations are defined for arbitrary quaternions;
        /// only unit quaternions represent rotations.
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Scalar part.
            pub w: $t,
            /// First vector component.
            pub x: $t,
            /// Second vector component.
            pub y: $t,
            /// Third vector component.
            pub z: $t,
        }

        impl $name {
            /// The identity rotation (1, 0, 0, 0).
            pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

            /// The zero quaternion. Not a rotation; inverting it yields
            /// Inf/NaN components.
            pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

            /// Creates a quaternion from its four components.
            #[inline]
            pub const fn new(w: $t, x: $t, y: $t, z: $t) -> Self {
                Self { w, x, y, z }
            }

            /// Rotation of `angle` radians about `axis`.
            ///
            /// The axis is expected to be unit length; it is not normalized
            /// here.
            #[inline]
            pub fn from_axis_angle(axis: $vec3, angle: $t) -> Self {
                let (sin, cos) = (angle * 0.5).sin_cos();
                Self::new(cos, axis.x * sin, axis.y * sin, axis.z * sin)
            }

            /// The vector part (x, y, z).
            #[inline]
            pub fn vector(self) -> $vec3 {
                $vec3::new(self.x, self.y, self.z)
            }

            /// Conjugate: negates the vector part.
            #[inline]
            pub fn conjugate(self) -> Self {
                Self::new(self.w, -self.x, -self.y, -self.z)
            }

            /// Quaternion dot product.
            #[inline]
            pub fn dot(self, other: Self) -> $t {
                self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
            }

            /// Squared norm `w² + x² + y² + z²`.
            #[inline]
            pub fn length_squared(self) -> $t {
                self.dot(self)
            }

            /// Norm (length).
            #[inline]
            pub fn length(self) -> $t {
                self.length_squared().sqrt()
            }

            /// Returns this quaternion scaled to unit length.
            ///
            /// Normalizing the zero quaternion yields NaN components.
            #[inline]
            pub fn normalized(self) -> Self {
                self / self.length()
            }

            /// Returns true if the quaternion has unit length, within
            /// tolerance.
            #[inline]
            pub fn is_normalized(self) -> bool {
                vecmat_core::$t::approx_eq(self.length_squared(), 1.0)
            }

            /// Multiplicative inverse: `conjugate / length_squared`.
            ///
            /// For a unit quaternion this equals the conjugate. Inverting a
            /// zero quaternion divides by zero and yields Inf/NaN
            /// components rather than an error.
            #[inline]
            pub fn inverse(self) -> Self {
                self.conjugate() / self.length_squared()
            }

            /// Returns true if each component is within tolerance of the
            /// matching component of `other`.
            ///
            /// Inherits the scalar rules: equal infinities match, NaN never
            /// matches.
            #[inline]
            pub fn approx_eq(self, other: Self) -> bool {
                vecmat_core::$t::approx_eq(self.w, other.w)
                    && vecmat_core::$t::approx_eq(self.x, other.x)
                    && vecmat_core::$t::approx_eq(self.y, other.y)
                    && vecmat_core::$t::approx_eq(self.z, other.z)
            }

            /// Returns true if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.w.is_finite()
                    && self.x.is_finite()
                    && self.y.is_finite()
                    && self.z.is_finite()
            }

            /// Converts this quaternion to a 3x3 rotation matrix.
            ///
            /// The quaternion does not need to be normalized: the matrix is
            /// scaled by `2 / length_squared`, so any nonzero multiple of a
            /// unit quaternion yields the same rotation matrix. The zero
            /// quaternion yields a NaN matrix.
            pub fn to_rotation_matrix(self) -> $mat3 {
                let s = 2.0 / self.length_squared();
                let (w, x, y, z) = (self.w, self.x, self.y, self.z);
                $mat3::from_rows([
                    [
                        1.0 - s * (y * y + z * z),
                        s * (x * y - w * z),
                        s * (x * z + w * y),
                    ],
                    [
                        s * (x * y + w * z),
                        1.0 - s * (x * x + z * z),
                        s * (y * z - w * x),
                    ],
                    [
                        s * (x * z - w * y),
                        s * (y * z + w * x),
                        1.0 - s * (x * x + y * y),
                    ],
                ])
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(
                    self.w + rhs.w,
                    self.x + rhs.x,
                    self.y + rhs.y,
                    self.z + rhs.z,
                )
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(
                    self.w - rhs.w,
                    self.x - rhs.x,
                    self.y - rhs.y,
                    self.z - rhs.z,
                )
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.w, -self.x, -self.y, -self.z)
            }
        }

        impl Mul<$t> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
            }
        }

        impl Mul<$name> for $t {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div<$t> for $name {
            type Output = Self;

            // Division by zero yields Inf/NaN components per IEEE-754.
            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
            }
        }

        // Hamilton product. Non-commutative; q * p applies p first, then q.
        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new(
                    self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
                    self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
                    self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
                    self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
                )
            }
        }

        // Quaternion division: q / p = q * p.inverse(), the solution of
        // q = result * p. Dividing by a zero quaternion yields Inf/NaN.
        impl Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                self * rhs.inverse()
            }
        }
    };
}

quat_impl!(Quatf, f32, Mat3f, Vec3f);
quat_impl!(Quatd, f64, Mat3d, Vec3d);

impl Quatd {
    /// Builds a quaternion from Euler angles under the given order.
    ///
    /// Equivalent to [`EulerOrder::quat_from_euler`].
    #[inline]
    pub fn from_euler(angles: Vec3d, order: EulerOrder) -> Self {
        order.quat_from_euler(angles)
    }

    /// Decomposes this rotation into Euler angles under the given order.
    ///
    /// Equivalent to [`EulerOrder::euler_from_quat`].
    #[inline]
    pub fn euler(self, order: EulerOrder) -> Vec3d {
        order.euler_from_quat(self)
    }

    /// Converts to single precision, rounding each component to the nearest
    /// representable `f32`.
    #[inline]
    pub fn as_quatf(self) -> Quatf {
        Quatf::new(self.w as f32, self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<Quatf> for Quatd {
    #[inline]
    fn from(q: Quatf) -> Self {
        Self::new(q.w as f64, q.x as f64, q.y as f64, q.z as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_quat_eq(a: Quatd, b: Quatd) {
        assert_abs_diff_eq!(a.w, b.w, epsilon = 1e-6);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-6);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-6);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-6);
    }

    #[test]
    fn test_sum_and_difference() {
        let q1 = Quatd::new(1.2, 1.4, -2.1, 3.0);
        let q2 = Quatd::new(0.3, -1.5, 1.1, 0.0);
        assert_quat_eq(q1 + q2, Quatd::new(1.5, -0.1, -1.0, 3.0));
        assert_quat_eq(q1 - q2, Quatd::new(0.9, 2.9, -3.2, 3.0));
    }

    #[test]
    fn test_negated() {
        let q = Quatd::new(1.2, 1.4, -2.1, 3.0);
        assert_eq!(-q, Quatd::new(-1.2, -1.4, 2.1, -3.0));
    }

    #[test]
    fn test_scalar_ops() {
        let q = Quatd::new(1.2, 1.4, -2.1, 3.0);
        assert_quat_eq(q * 1.2, Quatd::new(1.44, 1.68, -2.52, 3.6));
        assert_quat_eq(q / 2.0, Quatd::new(0.6, 0.7, -1.05, 1.5));
        assert_quat_eq(1.2 * q, q * 1.2);
    }

    #[test]
    fn test_hamilton_product() {
        let q1 = Quatd::new(1.2, 1.4, -2.1, 3.0);
        let q2 = Quatd::new(0.3, -1.5, 1.1, 0.0);
        assert_quat_eq(q1 * q2, Quatd::new(4.77, -4.68, -3.81, -0.71));
    }

    #[test]
    fn test_identity_is_neutral() {
        let q = Quatd::new(1.2, 1.4, -2.1, 3.0);
        assert_quat_eq(q * Quatd::IDENTITY, q);
        assert_quat_eq(Quatd::IDENTITY * q, q);
    }

    #[test]
    fn test_division() {
        let q = Quatd::new(1.0, 1.0, 1.0, 1.0);
        let p = Quatd::new(1.0, 0.0, 1.0, 0.0);
        assert_quat_eq(q / p, Quatd::new(1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_division_inverts_multiplication() {
        let q = Quatd::new(1.2, 1.4, -2.1, 3.0);
        let p = Quatd::new(0.3, -1.5, 1.1, 0.0);
        assert_quat_eq((q * p) / p, q);
    }

    #[test]
    fn test_inverse_of_unit_is_conjugate() {
        let q = Quatd::from_axis_angle(Vec3d::UNIT_Y, 0.8);
        assert_quat_eq(q.inverse(), q.conjugate());
        assert_quat_eq(q * q.inverse(), Quatd::IDENTITY);
    }

    #[test]
    fn test_zero_division_yields_non_finite() {
        let q = Quatd::new(1.0, 2.0, 3.0, 4.0);
        assert!(!(q / Quatd::ZERO).is_finite());
        assert!(!(q / 0.0).is_finite());
    }

    #[test]
    fn test_approx_eq() {
        let q1 = Quatd::new(1.20000001, 1.39999999, -2.09999999, 3.00000001);
        let q2 = Quatd::new(1.2, 1.4, -2.1, 3.0);
        assert!(q1.approx_eq(q2));
        assert!(!q1.approx_eq(-q2));
    }

    #[test]
    fn test_approx_eq_special_values() {
        let inf = Quatd::new(f64::INFINITY, 0.0, 0.0, 0.0);
        assert!(inf.approx_eq(inf));
        let nan = Quatd::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(!nan.approx_eq(nan));
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quatd::from_axis_angle(Vec3d::UNIT_X, FRAC_PI_2);
        assert!(q.is_normalized());
        assert_abs_diff_eq!(q.w, (FRAC_PI_2 / 2.0).cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(q.x, (FRAC_PI_2 / 2.0).sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_to_rotation_matrix_matches_axis_rotations() {
        let angle = 0.7;
        assert!(
            Quatd::from_axis_angle(Vec3d::UNIT_X, angle)
                .to_rotation_matrix()
                .approx_eq(&Mat3d::rotation_x(angle))
        );
        assert!(
            Quatd::from_axis_angle(Vec3d::UNIT_Y, angle)
                .to_rotation_matrix()
                .approx_eq(&Mat3d::rotation_y(angle))
        );
        assert!(
            Quatd::from_axis_angle(Vec3d::UNIT_Z, angle)
                .to_rotation_matrix()
                .approx_eq(&Mat3d::rotation_z(angle))
        );
    }

    #[test]
    fn test_rotation_matrix_ignores_scale() {
        let q = Quatd::from_axis_angle(Vec3d::UNIT_Z, 1.1);
        let scaled = q * 3.0;
        assert!(q.to_rotation_matrix().approx_eq(&scaled.to_rotation_matrix()));
    }

    #[test]
    fn test_product_composes_rotation_matrices() {
        let q = Quatd::from_axis_angle(Vec3d::UNIT_Z, 0.4);
        let p = Quatd::from_axis_angle(Vec3d::UNIT_X, -0.9);
        let composed = (q * p).to_rotation_matrix();
        let multiplied = q.to_rotation_matrix() * p.to_rotation_matrix();
        assert!(composed.approx_eq(&multiplied));
    }

    #[test]
    fn test_single_precision_product() {
        let q1 = Quatf::new(1.2, 1.4, -2.1, 3.0);
        let q2 = Quatf::new(0.3, -1.5, 1.1, 0.0);
        let r = q1 * q2;
        assert!(r.approx_eq(Quatf::new(4.77, -4.68, -3.81, -0.71)));
    }

    #[test]
    fn test_precision_conversions() {
        let q = Quatd::new(1.2, 1.4, -2.1, 3.0);
        let roundtrip = Quatd::from(q.as_quatf());
        assert!(q.approx_eq(roundtrip));
    }
}
