use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and framing parameters.
///
/// The eye height/distance and look-at height are user-configurable and
/// re-applied from options every frame; projection parameters are fixed
/// per session.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(skip)]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera eye height (world Y).
    #[schemars(title = "Camera Height", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub camera_y: f32,
    /// Camera eye distance from the avatar (world Z).
    #[schemars(title = "Camera Distance", range(min = 0.5, max = 5.0), extend("step" = 0.05))]
    pub camera_z: f32,
    /// Height of the look-at target on the avatar (world Y).
    #[schemars(title = "Look-At Height", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub look_at_y: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 30.0,
            znear: 0.1,
            zfar: 1000.0,
            camera_y: 1.4,
            camera_z: 1.6,
            look_at_y: 0.9,
        }
    }
}
