//! # vecmat-rot
//!
//! Rotation representations and conversions for the vecmat-rs workspace.
//!
//! Three representations of a 3D rotation, and the conversions between them:
//!
//! - [`Quatf`]/[`Quatd`] - quaternions with the full Hamilton algebra
//! - `Mat3f`/`Mat3d` (from `vecmat-mat`) - 3x3 rotation matrices
//! - [`EulerOrder`] - three per-axis angles under one of six axis orderings
//!
//! # Conventions
//!
//! - Quaternions are `(w, x, y, z)` with the scalar part first. The Hamilton
//!   product composes left-to-right-applied rotations: `q * p` applies `p`
//!   first, then `q`.
//! - Matrices are row-major with column vectors (`matrix * vector`), so
//!   `R(q * p) = R(q) * R(p)`.
//! - Euler angle triples are axis-labeled `(x, y, z)` radians. Which axis is
//!   applied first is a property of the [`EulerOrder`], not of the triple:
//!   the same triple means a different rotation under a different order.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_rot::{EulerOrder, Quatd};
//!
//! // Compose Z(0.3), then Y(0.2), then X(0.1) - the ZYX convention.
//! let q = EulerOrder::ZYX.quat_from_angles(0.1, 0.2, 0.3);
//! let angles = q.euler(EulerOrder::ZYX);
//! assert!((angles.x - 0.1).abs() < 1e-9);
//!
//! // The same angles under another order are a different rotation.
//! let p = EulerOrder::XYZ.quat_from_angles(0.1, 0.2, 0.3);
//! assert!(!q.approx_eq(p));
//! # let _ = Quatd::IDENTITY;
//! ```
//!
//! # Numeric edge cases
//!
//! Nothing here validates input or returns `Result` for numeric problems:
//!
//! - Decomposing a matrix that is not a proper rotation yields a
//!   well-defined but meaningless triple; a matrix drifted far enough off
//!   orthonormality can push an `asin` argument outside [-1, 1] and produce
//!   NaN in that component. The argument is deliberately not clamped.
//! - Dividing by a zero quaternion yields Inf/NaN components.
//! - At gimbal lock (middle angle at ±90°) the decomposition returns one of
//!   the infinitely many valid triples, without panicking.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod euler;
mod quat;

pub use euler::*;
pub use quat::*;
