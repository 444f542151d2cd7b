//! # vecmat-core
//!
//! Scalar utilities for the vecmat-rs workspace.
//!
//! This crate provides the floating-point and integer helpers that the
//! vector, matrix, quaternion and color crates build on:
//!
//! - [`f32::approx_eq`]/[`f64::approx_eq`] - tolerance-based equality
//! - [`f32::lerp`], [`f32::map`], [`f32::smoothstep`] - interpolation and
//!   range mapping
//! - [`f32::move_toward`] - bounded stepping toward a target
//! - [`f32::bezier_interpolate`] - quadratic and cubic Bézier curves
//!
//! Every function exists once per scalar domain, in a module named after the
//! primitive (mirroring `std::f32`/`std::f64`):
//!
//! ```rust
//! use vecmat_core::f64;
//!
//! assert_eq!(f64::lerp(1.0, 2.0, 0.5), 1.5);
//! assert!(f64::approx_eq(1.0, 1.0 + 1e-9));
//! ```
//!
//! # Numeric edge cases
//!
//! Nothing in this crate returns `Result` or panics on out-of-domain input.
//! Division by zero, overflowing extrapolation and NaN inputs all degrade to
//! IEEE-754 special values. [`f64::approx_eq`] treats equal infinities as
//! equal and NaN as unequal to itself.
//!
//! # Crate structure
//!
//! This crate is the foundation of vecmat-rs and has no dependencies.
//! All other vecmat-rs crates depend on `vecmat-core`:
//!
//! ```text
//! vecmat-core (this crate)
//!    ^
//!    |
//!    +-- vecmat-vec (vectors)
//!    +-- vecmat-mat (matrices)
//!    +-- vecmat-rot (quaternions, euler orders)
//!    +-- vecmat-color (RGB/RGBA colors)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

macro_rules! float_scalar_mod {
    ($mod_name:ident, $t:ident) => {
        /// Scalar helpers for this floating-point domain.
        pub mod $mod_name {
            /// Tolerance used by `approx_eq` and the `approx_eq` methods of
            /// every vecmat-rs value type.
            pub const EPSILON: $t = 1e-6;

            /// Tolerance-based equality.
            ///
            /// Two values are approximately equal when their difference is
            /// below [`EPSILON`], scaled by the magnitude of `a` for large
            /// inputs (relative tolerance).
            ///
            /// Equal infinities compare equal (the exact-equality shortcut
            /// handles them); NaN is never equal to anything, itself
            /// included.
            ///
            /// # Example
            ///
            /// ```rust
            /// use vecmat_core::f64::approx_eq;
            ///
            /// assert!(approx_eq(1.0, 0.9999999));
            /// assert!(!approx_eq(1.0, 0.8999999));
            /// assert!(approx_eq(f64::INFINITY, f64::INFINITY));
            /// assert!(!approx_eq(f64::NAN, f64::NAN));
            /// ```
            #[inline]
            pub fn approx_eq(a: $t, b: $t) -> bool {
                a == b || (a - b).abs() < EPSILON.max(EPSILON * a.abs())
            }

            /// Linear interpolation between `from` and `to`.
            ///
            /// Returns `from` at `weight = 0.0` and `to` at `weight = 1.0`.
            /// Weights outside [0, 1] extrapolate.
            #[inline]
            pub fn lerp(from: $t, to: $t, weight: $t) -> $t {
                from + (to - from) * weight
            }

            /// Remaps `value` from the range `[min, max]` to
            /// `[new_min, new_max]`.
            ///
            /// Values outside the input range are extrapolated, not clamped.
            ///
            /// # Example
            ///
            /// ```rust
            /// use vecmat_core::f64::map;
            ///
            /// assert_eq!(map(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
            /// assert_eq!(map(12.0, 0.0, 10.0, 0.0, 1.0), 1.2);
            /// ```
            #[inline]
            pub fn map(value: $t, min: $t, max: $t, new_min: $t, new_max: $t) -> $t {
                new_min + (new_max - new_min) * ((value - min) / (max - min))
            }

            /// Hermite interpolation of `weight` between `from` and `to`.
            ///
            /// Returns 0.0 for `weight <= from`, 1.0 for `weight >= to`, and
            /// a smooth cubic in between.
            #[inline]
            pub fn smoothstep(from: $t, to: $t, weight: $t) -> $t {
                let t = ((weight - from) / (to - from)).clamp(0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }

            /// Moves `from` toward `to` by at most `delta`, without
            /// overshooting.
            #[inline]
            pub fn move_toward(from: $t, to: $t, delta: $t) -> $t {
                if (to - from).abs() <= delta {
                    to
                } else {
                    from + (to - from).signum() * delta
                }
            }

            /// Quadratic Bézier interpolation between `from` and `to` with
            /// one control point.
            #[inline]
            pub fn bezier_interpolate(from: $t, to: $t, control: $t, t: $t) -> $t {
                let u = 1.0 - t;
                u * u * from + 2.0 * u * t * control + t * t * to
            }

            /// Derivative of the quadratic Bézier curve at `t`.
            #[inline]
            pub fn bezier_derivative(from: $t, to: $t, control: $t, t: $t) -> $t {
                let u = 1.0 - t;
                2.0 * u * (control - from) + 2.0 * t * (to - control)
            }

            /// Cubic Bézier interpolation between `from` and `to` with two
            /// control points.
            #[inline]
            pub fn cubic_bezier_interpolate(
                from: $t,
                to: $t,
                control1: $t,
                control2: $t,
                t: $t,
            ) -> $t {
                let u = 1.0 - t;
                u * u * u * from
                    + 3.0 * u * u * t * control1
                    + 3.0 * u * t * t * control2
                    + t * t * t * to
            }

            /// Derivative of the cubic Bézier curve at `t`.
            #[inline]
            pub fn cubic_bezier_derivative(
                from: $t,
                to: $t,
                control1: $t,
                control2: $t,
                t: $t,
            ) -> $t {
                let u = 1.0 - t;
                3.0 * u * u * (control1 - from)
                    + 6.0 * u * t * (control2 - control1)
                    + 3.0 * t * t * (to - control2)
            }
        }
    };
}

macro_rules! int_scalar_mod {
    ($mod_name:ident, $t:ident) => {
        /// Scalar helpers for this integer domain.
        pub mod $mod_name {
            /// Remaps `value` from the range `[min, max]` to
            /// `[new_min, new_max]` using integer arithmetic.
            ///
            /// Values outside the input range are extrapolated.
            ///
            /// # Example
            ///
            /// ```rust
            /// use vecmat_core::i32::map;
            ///
            /// assert_eq!(map(5, 0, 10, 0, 100), 50);
            /// assert_eq!(map(12, 0, 10, 0, 100), 120);
            /// ```
            #[inline]
            pub fn map(value: $t, min: $t, max: $t, new_min: $t, new_max: $t) -> $t {
                new_min + (new_max - new_min) * (value - min) / (max - min)
            }

            /// Moves `from` toward `to` by at most `delta`, without
            /// overshooting.
            #[inline]
            pub fn move_toward(from: $t, to: $t, delta: $t) -> $t {
                if (to - from).abs() <= delta {
                    to
                } else {
                    from + (to - from).signum() * delta
                }
            }
        }
    };
}

float_scalar_mod!(f32, f32);
float_scalar_mod!(f64, f64);
int_scalar_mod!(i32, i32);
int_scalar_mod!(i64, i64);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_approx_eq() {
        assert!(crate::f64::approx_eq(1.0, 1.0));
        assert!(crate::f64::approx_eq(1.0, 0.9999999));
        assert!(!crate::f64::approx_eq(1.0, 0.8999999));
        assert!(crate::f32::approx_eq(1.0, 0.9999999));
        assert!(!crate::f32::approx_eq(1.0, 0.8999999));
    }

    #[test]
    fn test_approx_eq_special_values() {
        assert!(crate::f64::approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(crate::f64::approx_eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
        assert!(!crate::f64::approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!crate::f64::approx_eq(f64::NAN, f64::NAN));
        assert!(!crate::f32::approx_eq(f32::NAN, f32::NAN));
        assert!(crate::f32::approx_eq(f32::INFINITY, f32::INFINITY));
    }

    #[test]
    fn test_approx_eq_relative_tolerance() {
        // At magnitude 1e6, the absolute gap may exceed EPSILON.
        assert!(crate::f64::approx_eq(1.0e6, 1.0e6 + 0.1));
        assert!(!crate::f64::approx_eq(1.0, 1.0 + 0.1));
    }

    #[test]
    fn test_lerp() {
        assert_abs_diff_eq!(crate::f64::lerp(1.0, 2.0, 0.5), 1.5);
        assert_abs_diff_eq!(crate::f64::lerp(1.0, 2.0, 0.25), 1.25);
        assert_abs_diff_eq!(crate::f64::lerp(1.0, 2.0, 0.75), 1.75);
        assert_abs_diff_eq!(crate::f64::lerp(1.0, 2.0, 0.0), 1.0);
        assert_abs_diff_eq!(crate::f64::lerp(1.0, 2.0, 1.0), 2.0);
    }

    #[test]
    fn test_map() {
        assert_abs_diff_eq!(crate::f64::map(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_abs_diff_eq!(crate::f64::map(12.0, 0.0, 10.0, 0.0, 1.0), 1.2);
        assert_abs_diff_eq!(crate::f64::map(-1.0, 0.0, 10.0, 0.0, 1.0), -0.1);
    }

    #[test]
    fn test_map_int() {
        assert_eq!(crate::i32::map(5, 0, 10, 0, 100), 50);
        assert_eq!(crate::i32::map(12, 0, 10, 0, 100), 120);
        assert_eq!(crate::i32::map(-1, 0, 10, 0, 100), -10);
        assert_eq!(crate::i64::map(5, 0, 10, 0, 100), 50);
    }

    #[test]
    fn test_smoothstep() {
        assert_abs_diff_eq!(crate::f64::smoothstep(3.0, 4.0, 3.5), 0.5);
        assert_abs_diff_eq!(crate::f64::smoothstep(3.0, 4.0, 2.0), 0.0);
        assert_abs_diff_eq!(crate::f64::smoothstep(3.0, 4.0, 5.0), 1.0);
    }

    #[test]
    fn test_move_toward() {
        assert_abs_diff_eq!(crate::f64::move_toward(1.0, 2.0, 0.6), 1.6);
        assert_abs_diff_eq!(crate::f64::move_toward(1.0, 2.0, 3.0), 2.0);
        assert_abs_diff_eq!(crate::f64::move_toward(2.0, 1.0, 0.6), 1.4);
        assert_abs_diff_eq!(crate::f64::move_toward(2.0, 1.0, 3.0), 1.0);
    }

    #[test]
    fn test_move_toward_int() {
        assert_eq!(crate::i32::move_toward(1, 5, 2), 3);
        assert_eq!(crate::i32::move_toward(1, 5, 6), 5);
        assert_eq!(crate::i32::move_toward(5, 1, 2), 3);
        assert_eq!(crate::i32::move_toward(5, 1, 6), 1);
    }

    #[test]
    fn test_quadratic_bezier_matches_repeated_lerp() {
        let (p0, p1, control, t) = (2.0, 5.0, 4.0, 0.35);
        let l1 = crate::f64::lerp(p0, control, t);
        let l2 = crate::f64::lerp(control, p1, t);
        let reference = crate::f64::lerp(l1, l2, t);
        assert_abs_diff_eq!(
            crate::f64::bezier_interpolate(p0, p1, control, t),
            reference,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cubic_bezier_matches_repeated_lerp() {
        let (p0, p3, p1, p2, t) = (1.0, 5.0, 2.0, 4.0, 0.35);
        let m1 = crate::f64::lerp(p0, p1, t);
        let m2 = crate::f64::lerp(p1, p2, t);
        let m3 = crate::f64::lerp(p2, p3, t);
        let l1 = crate::f64::lerp(m1, m2, t);
        let l2 = crate::f64::lerp(m2, m3, t);
        let reference = crate::f64::lerp(l1, l2, t);
        assert_abs_diff_eq!(
            crate::f64::cubic_bezier_interpolate(p0, p3, p1, p2, t),
            reference,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bezier_derivative_endpoints() {
        // Derivative at the endpoints points along the control polygon.
        assert_abs_diff_eq!(crate::f64::bezier_derivative(0.0, 1.0, 0.5, 0.0), 1.0);
        assert_abs_diff_eq!(crate::f64::bezier_derivative(0.0, 1.0, 0.5, 1.0), 1.0);
        assert_abs_diff_eq!(
            crate::f64::cubic_bezier_derivative(0.0, 1.0, 0.2, 0.8, 0.0),
            0.6
        );
    }
}
