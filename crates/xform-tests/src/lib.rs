//! Integration tests for xform-rs crates.
//!
//! End-to-end scenarios that drive a whole frame through the pipeline and
//! cross-check the math crate against glam.
