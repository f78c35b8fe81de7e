//! The rendering seam between the engine and its host.
//!
//! The engine renders the scene once per frame unconditionally, so
//! camera and option changes stay visible with no pending motion. What
//! "render" means belongs to the host: a GPU viewport implements
//! [`RenderBackend`] over its own surface, while tests and the reference
//! binary use [`HeadlessRenderer`].

use crate::camera::Camera;
use crate::scene::Scene;

/// Draws the scene with the given camera and tracks viewport size.
pub trait RenderBackend {
    /// Draw one frame.
    fn render(&mut self, scene: &Scene, camera: &Camera);

    /// Resize the output viewport.
    fn resize(&mut self, width: u32, height: u32);
}

/// Renderer that draws nothing and records what it was asked to do.
#[derive(Debug)]
pub struct HeadlessRenderer {
    frames: u64,
    viewport: (u32, u32),
}

impl HeadlessRenderer {
    /// Headless renderer with the default 800×600 viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: 0,
            viewport: (800, 600),
        }
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Current viewport dimensions.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for HeadlessRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} lights, avatar {:?}, eye {:?}",
            self.frames,
            scene.lights().len(),
            scene.avatar().map(crate::scene::Avatar::name),
            camera.eye
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    #[test]
    fn headless_renderer_counts_frames() {
        let mut renderer = HeadlessRenderer::new();
        let scene = Scene::new();
        let camera = Camera::new(1.6, &CameraOptions::default());
        renderer.render(&scene, &camera);
        renderer.render(&scene, &camera);
        assert_eq!(renderer.frames_rendered(), 2);
        renderer.resize(1024, 768);
        assert_eq!(renderer.viewport(), (1024, 768));
    }
}
