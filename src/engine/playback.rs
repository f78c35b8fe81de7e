//! The playback controller surface consumed by the text source UI.

use super::SignEngine;
use crate::playback;

impl SignEngine {
    /// Queue `text` for signing. Returns immediately.
    ///
    /// No-op while the avatar is still loading. The headline caption is
    /// set to the whole request up front; the per-token caption markers
    /// built by the compiler are separate internal bookkeeping surfaced
    /// through [`drain_captions`](Self::drain_captions).
    ///
    /// Calling while an animation is in progress never spawns a second
    /// consumer: the compiled instructions extend the one active queue.
    pub fn animate(&mut self, text: &str) {
        if !self.model_loaded {
            log::warn!("animate request before avatar load, ignoring");
            return;
        }

        self.display_caption = text.to_owned();
        self.is_animating = true;
        self.finish_pending = false;

        let compiled = playback::compile(text, self.dictionary.as_ref());
        if self.run.queue_active {
            self.run.queue.extend(compiled);
        } else {
            // Starting from idle: the previous run's leftovers are
            // ephemeral and cleared before the loop restarts.
            self.run.queue = compiled;
            self.run.captions.clear();
            self.run.queue_active = true;
        }
    }

    /// Hard stop: clear the queue, flags, and caption, and restore the
    /// avatar to its rest pose. Idempotent and safe at any point.
    pub fn stop(&mut self) {
        self.run.reset();
        self.is_animating = false;
        self.finish_pending = false;
        self.display_caption.clear();
        if let Some(avatar) = self.scene.avatar_mut() {
            avatar.reset_pose();
        }
    }

    /// Whether an animation is currently in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// The headline caption: the full text of the active request.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.display_caption
    }

    /// Take the per-token caption fragments surfaced so far.
    pub fn drain_captions(&mut self) -> Vec<String> {
        std::mem::take(&mut self.run.captions)
    }

    /// Number of pending instruction groups.
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.run.queue.len()
    }
}
