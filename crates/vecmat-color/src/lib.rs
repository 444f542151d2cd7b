//! # vecmat-color
//!
//! RGB and RGBA color value types for the vecmat-rs workspace.
//!
//! Colors are `f32` values with channels nominally in `[0.0, 1.0]`, but
//! nothing clamps intermediate results: HDR values above 1.0 and negative
//! differences survive arithmetic and can be brought back into range with
//! [`Color3f::clamped01`] / [`Color4f::clamped01`] when needed.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_color::{Color3f, Color4f};
//!
//! let base = Color3f::rgb(255, 128, 0);
//! let tinted = base.blend(Color3f::new(0.5, 0.5, 0.5));
//! let faded = Color4f::from(tinted).lerp(Color4f::TRANSPARENT, 0.25);
//! assert!(faded.a < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;

pub use color::*;
