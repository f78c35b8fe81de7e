//! Perspective camera framing the avatar.

use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Fixed eye height restored by the panel-toggle resize path.
pub const DEFAULT_EYE_Y: f32 = 1.4;
/// Fixed eye distance restored by the panel-toggle resize path.
pub const DEFAULT_EYE_Z: f32 = 1.6;
/// Fixed look-at height restored by the panel-toggle resize path.
pub const DEFAULT_LOOK_AT_Y: f32 = 0.9;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera with the given aspect ratio and projection options, framed
    /// at the default avatar pose.
    #[must_use]
    pub fn new(aspect: f32, options: &CameraOptions) -> Self {
        Self {
            eye: Vec3::new(0.0, options.camera_y, options.camera_z),
            target: Vec3::new(0.0, options.look_at_y, 0.0),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Re-apply the configured framing (eye height/distance, look-at
    /// height). Called every frame so option changes take effect with at
    /// most one frame of latency.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.eye.y = options.camera_y;
        self.eye.z = options.camera_z;
        self.target.y = options.look_at_y;
    }

    /// Hard-reset eye and target to the fixed default pose, ignoring
    /// configured offsets. Used by the panel-toggle resize path.
    pub fn reset_default_pose(&mut self) {
        self.eye = Vec3::new(0.0, DEFAULT_EYE_Y, DEFAULT_EYE_Z);
        self.target = Vec3::new(0.0, DEFAULT_LOOK_AT_Y, 0.0);
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_options_moves_eye_and_target() {
        let mut camera = Camera::new(1.6, &CameraOptions::default());
        let opts = CameraOptions {
            camera_y: 2.0,
            camera_z: 3.0,
            look_at_y: 1.1,
            ..CameraOptions::default()
        };
        camera.apply_options(&opts);
        assert_eq!(camera.eye.y, 2.0);
        assert_eq!(camera.eye.z, 3.0);
        assert_eq!(camera.target.y, 1.1);
    }

    #[test]
    fn reset_ignores_configured_offsets() {
        let opts = CameraOptions {
            camera_y: 2.5,
            ..CameraOptions::default()
        };
        let mut camera = Camera::new(1.6, &opts);
        camera.reset_default_pose();
        assert_eq!(camera.eye.y, DEFAULT_EYE_Y);
        assert_eq!(camera.eye.z, DEFAULT_EYE_Z);
        assert_eq!(camera.target.y, DEFAULT_LOOK_AT_Y);
    }

    #[test]
    fn view_projection_is_finite() {
        let camera = Camera::new(1.6, &CameraOptions::default());
        let m = camera.build_matrix();
        assert!(m.is_finite());
    }
}
