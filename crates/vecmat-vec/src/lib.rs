//! # vecmat-vec
//!
//! Vector value types for the vecmat-rs workspace.
//!
//! Each dimension comes in three scalar flavors, named by suffix:
//!
//! - [`Vec2f`], [`Vec3f`], [`Vec4f`] - single precision
//! - [`Vec2d`], [`Vec3d`], [`Vec4d`] - double precision
//! - [`Vec2i`], [`Vec3i`], [`Vec4i`] - 32-bit integer
//!
//! All vectors are plain `Copy` structs with public fields and `#[repr(C)]`
//! layout. Every operation returns a new value; nothing mutates in place
//! except through `IndexMut`.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_vec::{Vec3d, Vec3i};
//!
//! let v = Vec3d::new(1.0, 2.0, 3.0);
//! let w = Vec3d::new(4.0, 5.0, 6.0);
//! assert_eq!(v.dot(w), 32.0);
//! assert_eq!(v + w, Vec3d::new(5.0, 7.0, 9.0));
//!
//! // Integer vectors share the component-wise core.
//! let p = Vec3i::new(1, -2, 3);
//! assert_eq!(p.abs(), Vec3i::new(1, 2, 3));
//! ```
//!
//! # Numeric edge cases
//!
//! Float operations follow IEEE-754 throughout: normalizing a zero vector
//! yields NaN components, division by zero yields infinities. No vector
//! operation returns `Result`. Indexing out of bounds panics.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vec2;
mod vec3;
mod vec4;

pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
