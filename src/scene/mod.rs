//! The viewport scene: lighting rig plus the (optional) loaded avatar.

mod avatar;
mod lighting;

pub use avatar::{Avatar, Joint, MeshNode};
pub use lighting::{default_rig, Light, LightKind};

/// The scene a renderer draws each frame. Owns the light rig and, once a
/// rig asset has loaded, the avatar. Construction and teardown are driven
/// by the engine's lifecycle; the scheduler only mutates joint channels.
pub struct Scene {
    lights: Vec<Light>,
    avatar: Option<Avatar>,
}

impl Scene {
    /// Empty scene with the default light rig and no avatar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lights: default_rig(),
            avatar: None,
        }
    }

    /// Lights in the scene.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// The loaded avatar, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&Avatar> {
        self.avatar.as_ref()
    }

    /// Mutable access to the loaded avatar, if any.
    pub fn avatar_mut(&mut self) -> Option<&mut Avatar> {
        self.avatar.as_mut()
    }

    /// Add the avatar to the scene, replacing any previous one.
    pub fn set_avatar(&mut self, avatar: Avatar) {
        log::debug!(
            "scene: avatar {:?} attached ({} joints, {} meshes)",
            avatar.name(),
            avatar.joint_count(),
            avatar.meshes().len()
        );
        self.avatar = Some(avatar);
    }

    /// Remove the avatar from the scene graph.
    pub fn detach_avatar(&mut self) {
        if self.avatar.take().is_some() {
            log::debug!("scene: avatar detached");
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_has_lights_and_no_avatar() {
        let scene = Scene::new();
        assert_eq!(scene.lights().len(), 3);
        assert!(scene.avatar().is_none());
    }
}
