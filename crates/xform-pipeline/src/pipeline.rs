//! The model-view-projection pipeline.
//!
//! [`TransformPipeline`] is the single piece of state the transform core
//! keeps between calls: the current model, view, and projection matrices.
//! Each setter rebuilds its matrix from scratch; nothing accumulates
//! across calls, and there is no matrix stack.
//!
//! # Composition order
//!
//! The model matrix is always `T * (Rx * Ry * Rz) * S`: scale is applied
//! first, then rotation around X, Y, Z (Z innermost of the rotation
//! block), then translation. The full chain is `projection * view * model`.

use tracing::{debug, trace};
use xform_math::{Mat4, Vec3};

/// Holds the current model, view, and projection matrices and applies the
/// composed MVP chain to points.
///
/// All three matrices start as identity and are fully replaced by their
/// setters. The composed `projection * view * model` product is recomputed
/// on every [`apply_mvp`](TransformPipeline::apply_mvp) call rather than
/// cached, so the matrices can be inspected and replaced freely between
/// calls.
///
/// # Example
///
/// ```rust
/// use xform_math::Vec3;
/// use xform_pipeline::TransformPipeline;
///
/// let mut pipeline = TransformPipeline::new();
/// pipeline.set_view_transform(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
/// pipeline.set_projection(45.0, 1.0, 0.1, 100.0);
///
/// let clip = pipeline.apply_mvp(Vec3::ZERO);
/// assert!(clip.z > -1.0 && clip.z < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformPipeline {
    /// Object-to-world transform.
    pub model: Mat4,
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-clip transform.
    pub projection: Mat4,
}

impl TransformPipeline {
    /// Creates a pipeline with all three matrices set to identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets model, view, and projection to identity.
    pub fn reset(&mut self) {
        trace!("reset");
        self.model = Mat4::IDENTITY;
        self.view = Mat4::IDENTITY;
        self.projection = Mat4::IDENTITY;
    }

    /// Rebuilds the model matrix from translation, Euler rotation
    /// (degrees per axis), and scale.
    ///
    /// Fixed composition order: scale, then rotation X * Y * Z, then
    /// translation. Calling this twice replaces the model matrix; it never
    /// composes with the previous value.
    pub fn set_model_transform(&mut self, translation: Vec3, rotation: Vec3, scale: Vec3) {
        trace!(
            tx = translation.x,
            ty = translation.y,
            tz = translation.z,
            "set_model_transform"
        );
        let t = Mat4::translation(translation.x, translation.y, translation.z);
        let rx = Mat4::rotation_x(rotation.x);
        let ry = Mat4::rotation_y(rotation.y);
        let rz = Mat4::rotation_z(rotation.z);
        let s = Mat4::scaling(scale.x, scale.y, scale.z);

        let r = rx * ry * rz;
        self.model = t * r * s;
    }

    /// Rebuilds the view matrix from camera eye, target, and up.
    ///
    /// An `up` parallel to the view direction produces a degenerate,
    /// non-invertible view matrix without raising an error; see
    /// [`Mat4::look_at`].
    pub fn set_view_transform(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        trace!(ex = eye.x, ey = eye.y, ez = eye.z, "set_view_transform");
        self.view = Mat4::look_at(eye, target, up);
    }

    /// Rebuilds the projection matrix as a perspective projection.
    pub fn set_projection(&mut self, fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) {
        trace!(fov_degrees, aspect_ratio, near, far, "set_projection");
        self.projection = Mat4::perspective(fov_degrees, aspect_ratio, near, far);
    }

    /// Rebuilds the projection matrix as an orthographic projection.
    pub fn set_orthographic_projection(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        trace!(left, right, bottom, top, near, far, "set_orthographic_projection");
        self.projection = Mat4::orthographic(left, right, bottom, top, near, far);
    }

    /// Rebuilds all three matrices from a [`FrameState`] and viewport size.
    ///
    /// Equivalent to the setter triple a renderer issues at the top of each
    /// frame; the aspect ratio comes from `width / height`.
    ///
    /// [`FrameState`]: crate::FrameState
    pub fn configure(&mut self, state: &crate::FrameState, width: u32, height: u32) {
        debug!(width, height, "Configuring pipeline for frame");
        self.set_model_transform(state.position, state.rotation, state.scale);
        self.set_view_transform(state.eye, state.target, state.up);
        self.set_projection(state.fov, width as f32 / height as f32, state.near, state.far);
    }

    /// Applies the full `projection * view * model` chain to a point,
    /// returning clip-space coordinates.
    ///
    /// The product is composed fresh on every call. Visible geometry lands
    /// roughly in `[-1, 1]` per axis after the homogeneous divide inside
    /// [`Mat4::transform_point`].
    pub fn apply_mvp(&self, point: Vec3) -> Vec3 {
        let mvp = self.projection * self.view * self.model;
        mvp.transform_point(point)
    }

    /// Maps a clip-space point to pixel coordinates.
    ///
    /// X maps `[-1, 1]` to `[0, width]`; Y is flipped, mapping `[-1, 1]`
    /// to `[height, 0]`. Z passes through unchanged for depth comparison.
    pub fn clip_to_screen(&self, clip: Vec3, width: u32, height: u32) -> Vec3 {
        let screen_x = (clip.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - clip.y) * 0.5 * height as f32;
        Vec3::new(screen_x, screen_y, clip.z)
    }

    /// Transforms a vertex all the way from object space to pixel space.
    pub fn transform_vertex_to_screen(&self, point: Vec3, width: u32, height: u32) -> Vec3 {
        let clip = self.apply_mvp(point);
        self.clip_to_screen(clip, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_identity() {
        let p = TransformPipeline::new();
        assert_eq!(p.model, Mat4::IDENTITY);
        assert_eq!(p.view, Mat4::IDENTITY);
        assert_eq!(p.projection, Mat4::IDENTITY);
    }

    #[test]
    fn test_reset() {
        let mut p = TransformPipeline::new();
        p.set_model_transform(Vec3::ONE, Vec3::ZERO, Vec3::ONE);
        p.set_view_transform(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        p.set_projection(45.0, 1.0, 0.1, 100.0);
        p.reset();
        assert_eq!(p, TransformPipeline::new());
    }

    #[test]
    fn test_model_composition_order() {
        // Scale first, then rotate, then translate: (1, 0, 0) scaled by 2
        // becomes (2, 0, 0), a quarter turn around Z sends it to (0, 2, 0),
        // and the translation lands it at (3, 2, 0).
        let mut p = TransformPipeline::new();
        p.set_model_transform(
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 90.0),
            Vec3::splat(2.0),
        );
        let out = p.model.transform_point(Vec3::X);
        assert!((out.x - 3.0).abs() < 1e-5);
        assert!((out.y - 2.0).abs() < 1e-5);
        assert!(out.z.abs() < 1e-5);
    }

    #[test]
    fn test_set_model_transform_replaces() {
        let mut p = TransformPipeline::new();
        p.set_model_transform(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE);
        p.set_model_transform(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, Vec3::ONE);
        // Second call replaces, never composes.
        assert_eq!(p.model, Mat4::translation(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_end_to_end_origin_in_clip_volume() {
        let mut p = TransformPipeline::new();
        p.set_model_transform(Vec3::ZERO, Vec3::ZERO, Vec3::ONE);
        p.set_view_transform(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        p.set_projection(45.0, 1.0, 0.1, 100.0);

        let clip = p.apply_mvp(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
        assert!(clip.z > -1.0 && clip.z < 1.0);
    }

    #[test]
    fn test_clip_to_screen_corners() {
        let p = TransformPipeline::new();
        assert_eq!(
            p.clip_to_screen(Vec3::new(-1.0, -1.0, 0.0), 800, 600),
            Vec3::new(0.0, 600.0, 0.0)
        );
        assert_eq!(
            p.clip_to_screen(Vec3::new(1.0, 1.0, 0.0), 800, 600),
            Vec3::new(800.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_clip_to_screen_preserves_depth() {
        let p = TransformPipeline::new();
        let out = p.clip_to_screen(Vec3::new(0.0, 0.0, 0.75), 640, 480);
        assert_eq!(out, Vec3::new(320.0, 240.0, 0.75));
    }

    #[test]
    fn test_transform_vertex_to_screen_center() {
        let mut p = TransformPipeline::new();
        p.set_view_transform(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        p.set_projection(45.0, 800.0 / 600.0, 0.1, 100.0);

        let pixel = p.transform_vertex_to_screen(Vec3::ZERO, 800, 600);
        assert!((pixel.x - 400.0).abs() < 1e-3);
        assert!((pixel.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_orthographic_projection_setter() {
        let mut p = TransformPipeline::new();
        p.set_orthographic_projection(-2.0, 2.0, -1.5, 1.5, -1.0, 1.0);
        let clip = p.apply_mvp(Vec3::new(2.0, 1.5, 0.0));
        assert!((clip.x - 1.0).abs() < 1e-6);
        assert!((clip.y - 1.0).abs() < 1e-6);
    }
}
