//! Per-frame transform parameters.
//!
//! A host application keeps one [`FrameState`] alive, mutates it from its
//! input handlers, and hands it to [`TransformPipeline::configure`] at the
//! top of every frame. This keeps the transform parameters in one
//! caller-owned value instead of free-standing mutable globals.
//!
//! [`TransformPipeline::configure`]: crate::TransformPipeline::configure

use xform_math::Vec3;

/// Object, camera, and projection parameters for one frame.
///
/// The object transform is translation plus Euler rotation in degrees plus
/// per-axis scale; the camera is an eye/target/up triple; the projection
/// is a vertical field of view in degrees with near and far planes. The
/// aspect ratio is not stored here, it comes from the viewport at
/// configure time.
///
/// # Example
///
/// ```rust
/// use xform_math::Vec3;
/// use xform_pipeline::FrameState;
///
/// let mut state = FrameState::default();
/// state.rotate_by(Vec3::new(5.0, 0.0, 0.0));
/// state.translate_by(Vec3::new(0.0, 0.0, -0.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    /// Object translation.
    pub position: Vec3,
    /// Object Euler rotation, degrees per axis.
    pub rotation: Vec3,
    /// Object per-axis scale.
    pub scale: Vec3,
    /// Camera position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Camera up direction.
    pub up: Vec3,
    /// Vertical field of view, degrees.
    pub fov: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
}

impl Default for FrameState {
    /// Untransformed object viewed from `(0, 0, 5)` with a 45 degree
    /// field of view and a `[0.1, 100]` depth range.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl FrameState {
    /// Moves the object by a translation delta.
    pub fn translate_by(&mut self, delta: Vec3) {
        self.position = self.position + delta;
    }

    /// Rotates the object by a delta, in degrees per axis.
    pub fn rotate_by(&mut self, delta_degrees: Vec3) {
        self.rotation = self.rotation + delta_degrees;
    }

    /// Scales the object uniformly by a delta.
    ///
    /// A negative delta shrinks the object but is ignored once any axis
    /// would reach zero or below, so the scale never flips sign.
    pub fn scale_by(&mut self, delta: f32) {
        if delta < 0.0 {
            let step = -delta;
            if self.scale.x <= step || self.scale.y <= step || self.scale.z <= step {
                return;
            }
        }
        self.scale = self.scale + Vec3::splat(delta);
    }

    /// Resets the object transform to defaults, leaving the camera and
    /// projection untouched.
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
        self.rotation = Vec3::ZERO;
        self.scale = Vec3::ONE;
    }
}
