//! # xform-pipeline
//!
//! Model-view-projection pipeline over [`xform_math`] types.
//!
//! This crate owns the three matrices a renderer needs per frame and the
//! two mappings it applies per vertex:
//!
//! - [`TransformPipeline`] - holds the current model, view, and projection
//!   matrices, rebuilds each from high-level parameters, and applies the
//!   composed MVP chain to object-space points
//! - [`FrameState`] - the per-frame parameter block (object transform,
//!   camera, projection) that a host application owns and feeds into
//!   [`TransformPipeline::configure`] each frame
//!
//! # Usage
//!
//! ```rust
//! use xform_math::Vec3;
//! use xform_pipeline::{FrameState, TransformPipeline};
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.configure(&FrameState::default(), 800, 600);
//!
//! let pixel = pipeline.transform_vertex_to_screen(Vec3::ZERO, 800, 600);
//! assert!((pixel.x - 400.0).abs() < 1e-3);
//! assert!((pixel.y - 300.0).abs() < 1e-3);
//! ```
//!
//! # Concurrency
//!
//! The pipeline is a plain value with no interior mutability or locking.
//! Threads rendering concurrently must each own their own instance.
//!
//! # Dependencies
//!
//! - [`xform_math`] - Vector and matrix algebra
//! - [`tracing`] - Structured trace/debug logging at operation entry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod frame;
mod pipeline;

pub use frame::*;
pub use pipeline::*;
