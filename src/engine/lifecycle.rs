//! Avatar/scene lifecycle: switching, async load handling, resize.

use std::path::PathBuf;

use super::{SignEngine, FALLBACK_VIEWPORT};
use crate::asset::{AvatarAsset, LoadEvent, LoadOutcome};
use crate::options::AvatarId;
use crate::scene::Avatar;

impl SignEngine {
    /// Switch to the given avatar: tear down the current scene state and
    /// request the new rig asynchronously.
    ///
    /// Any in-flight load for the previous avatar is superseded; its
    /// result will arrive under an older generation and be discarded.
    pub fn set_avatar(&mut self, id: AvatarId) {
        log::info!("switching avatar to {}", id.label());
        self.options.avatar = id;
        self.teardown();
        self.generation += 1;
        self.load_pending = true;
        self.loader
            .submit(self.generation, PathBuf::from(id.asset_path()));
    }

    /// Clear playback state and detach the avatar from the scene.
    fn teardown(&mut self) {
        self.run.reset();
        self.is_animating = false;
        self.finish_pending = false;
        self.display_caption.clear();
        self.scene.detach_avatar();
        self.model_loaded = false;
    }

    /// Drain pending loader events. Called once per frame.
    pub(crate) fn poll_loader(&mut self) {
        while let Some(event) = self.loader.try_recv() {
            self.handle_load_event(event);
        }
    }

    /// Apply one loader event, discarding anything from a superseded
    /// avatar generation so a late response never mutates a torn-down
    /// scene.
    pub(crate) fn handle_load_event(&mut self, event: LoadEvent) {
        if event.generation != self.generation {
            log::debug!(
                "discarding stale loader event (gen {}, current {})",
                event.generation,
                self.generation
            );
            return;
        }
        match event.outcome {
            LoadOutcome::Progress(ratio) => {
                log::debug!("rig load progress: {:.0}%", ratio * 100.0);
            }
            LoadOutcome::Done(Ok(asset)) => {
                self.load_pending = false;
                self.install_avatar(&asset);
            }
            LoadOutcome::Done(Err(e)) => {
                // Viewport stays usable but empty; no retry.
                self.load_pending = false;
                log::error!("avatar load failed: {e}");
            }
        }
    }

    /// Attach a freshly parsed rig: normalize mesh flags, apply the rest
    /// pose and configured camera, and render one frame immediately.
    pub(crate) fn install_avatar(&mut self, asset: &AvatarAsset) {
        let mut avatar = Avatar::from_asset(asset);
        avatar.prepare_for_display();
        avatar.reset_pose();
        log::info!(
            "avatar {:?} loaded ({} joints, {} meshes)",
            avatar.name(),
            avatar.joint_count(),
            avatar.meshes().len()
        );
        self.scene.set_avatar(avatar);
        self.camera.apply_options(&self.options.camera);
        self.model_loaded = true;
        self.renderer.render(&self.scene, &self.camera);
    }

    /// Resize the viewport, updating aspect ratio and renderer size. An
    /// unmeasured (zero) dimension falls back to 800×600.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = if width == 0 || height == 0 {
            FALLBACK_VIEWPORT
        } else {
            (width, height)
        };
        self.viewport = (width, height);
        #[allow(clippy::cast_precision_loss)]
        self.camera.set_aspect(width as f32 / height as f32);
        self.renderer.resize(width, height);
    }

    /// Resize triggered by the host's chat-panel toggle. Besides the
    /// normal resize, this re-applies the fixed default camera pose,
    /// overriding the configured offsets until the next frame re-applies
    /// them.
    pub fn resize_for_panel_toggle(&mut self, width: u32, height: u32) {
        self.resize(width, height);
        self.camera.reset_default_pose();
    }
}
