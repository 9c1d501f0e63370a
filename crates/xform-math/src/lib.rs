//! # xform-math
//!
//! Vector and matrix algebra for 3D transformation pipelines.
//!
//! This crate provides the two value types a model-view-projection chain is
//! built from:
//!
//! - [`Vec3`] - 3-component vectors for points, directions, and per-axis
//!   parameters (translation, Euler rotation, scale)
//! - [`Mat4`] - 4x4 homogeneous matrices with named builders for
//!   translation, rotation, scaling, perspective, orthographic, and look-at
//!   transforms
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Composition therefore reads right to left: `projection * view * model`
//! applies the model transform first. Rotation builders take angles in
//! **degrees** and follow the right-handed convention.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Mat4, Vec3};
//!
//! let model = Mat4::translation(0.0, 1.0, 0.0) * Mat4::rotation_y(45.0);
//! let world = model.transform_point(Vec3::new(1.0, 0.0, 0.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Column-major GPU-facing math, via transposing converters
//! - [`thiserror`] - Error derive for [`MathError`]
//!
//! # Used By
//!
//! - `xform-pipeline` - Model/view/projection composition and screen mapping

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod mat4;
mod vec3;

pub use error::*;
pub use mat4::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec3 as GlamVec3};
}
