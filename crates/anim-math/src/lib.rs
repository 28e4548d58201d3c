//! # anim-math
//!
//! Vector math foundation for the animation toolkit.
//!
//! This crate provides the spatial value types the rest of the toolkit
//! builds on:
//!
//! - [`Vec3`] - 3D vectors for positions, directions, and velocities
//! - [`Vec2`] / [`Vec4`] - planar and homogeneous siblings, convertible
//!   into [`Vec3`]
//! - [`DEG_TO_RAD`] / [`RAD_TO_DEG`] - angle conversion constants
//!
//! # Design
//!
//! The types are plain `Copy` values over `f64` components with no hidden
//! invariants: any triple of floats is a legal state, and degenerate
//! numeric inputs (zero divisors, zero-length normalization) resolve to
//! defined fallback values instead of faults. That keeps the types safe to
//! use in tight per-frame loops.
//!
//! # Usage
//!
//! ```rust
//! use anim_math::Vec3;
//!
//! // Orbit a point a quarter turn around the vertical axis.
//! let eye = Vec3::new(4.0, 0.0, 0.0);
//! let target = Vec3::new(2.0, 0.0, 0.0);
//! let orbited = eye.rotated_around_deg(90.0, target, Vec3::Y);
//! assert!(orbited.matches(Vec3::new(2.0, 0.0, -2.0), 1e-9));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with the SIMD math types used by the render path
//! - [`thiserror`] - parse-error derive for the textual wire format
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization for the vector types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod error;
mod vec2;
mod vec3;
mod vec4;

pub use angle::*;
pub use error::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DVec2, DVec3, DVec4};
}
