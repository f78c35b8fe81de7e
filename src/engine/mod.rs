//! The engine: avatar lifecycle, per-frame driving, and the playback
//! controller surface consumed by the host UI.

mod lifecycle;
mod playback;

use std::time::Instant;

use crate::asset::{AssetLoader, AssetSource};
use crate::camera::Camera;
use crate::dictionary::Dictionary;
use crate::error::HandsignError;
use crate::options::Options;
use crate::playback::{RunState, StepOutcome};
use crate::render::RenderBackend;
use crate::scene::Scene;

/// Fallback viewport used when the container is unmeasured.
pub const FALLBACK_VIEWPORT: (u32, u32) = (800, 600);

/// One sign-language animation engine per mounted avatar viewport.
///
/// Owns the scene, camera, renderer handle, run state, and the loader
/// thread. All mutation happens on the host's frame callback via
/// [`frame`](Self::frame); the engine is not meant to be shared between
/// viewports.
pub struct SignEngine {
    scene: Scene,
    camera: Camera,
    renderer: Box<dyn RenderBackend>,
    dictionary: Box<dyn Dictionary>,
    loader: AssetLoader,
    options: Options,
    run: RunState,
    /// Bumped on every avatar switch; loader events from older
    /// generations are discarded.
    generation: u64,
    /// True while a load request for the current generation is in flight.
    load_pending: bool,
    model_loaded: bool,
    is_animating: bool,
    /// Set when the queue drains; `is_animating` flips false on the next
    /// frame, mirroring the original next-tick write.
    finish_pending: bool,
    display_caption: String,
    viewport: (u32, u32),
}

impl SignEngine {
    /// Build an engine and kick off the initial avatar load.
    ///
    /// # Errors
    ///
    /// Returns [`HandsignError::ThreadSpawn`] if the loader thread cannot
    /// be created.
    pub fn new(
        options: Options,
        dictionary: Box<dyn Dictionary>,
        renderer: Box<dyn RenderBackend>,
        source: Box<dyn AssetSource>,
    ) -> Result<Self, HandsignError> {
        let loader = AssetLoader::new(source)?;
        let (width, height) = FALLBACK_VIEWPORT;
        #[allow(clippy::cast_precision_loss)]
        let aspect = width as f32 / height as f32;
        let camera = Camera::new(aspect, &options.camera);
        let avatar = options.avatar;

        let mut engine = Self {
            scene: Scene::new(),
            camera,
            renderer,
            dictionary,
            loader,
            options,
            run: RunState::new(),
            generation: 0,
            load_pending: false,
            model_loaded: false,
            is_animating: false,
            finish_pending: false,
            display_caption: String::new(),
            viewport: (width, height),
        };
        engine.set_avatar(avatar);
        Ok(engine)
    }

    /// Drive the engine by one frame at time `now`.
    ///
    /// Always renders, even with no pending motion, so camera and option
    /// changes stay visible. The scheduler consumes the queue only while
    /// a loop is active; speed and pause are read fresh from options
    /// every frame.
    pub fn frame(&mut self, now: Instant) {
        if self.finish_pending {
            self.is_animating = false;
            self.finish_pending = false;
        }

        self.poll_loader();

        if self.run.queue_active {
            let speed = self.options.playback.speed;
            let pause = self.options.playback.pause();
            if let Some(avatar) = self.scene.avatar_mut() {
                let outcome = crate::playback::step(
                    &mut self.run,
                    avatar,
                    speed,
                    pause,
                    now,
                );
                if outcome == StepOutcome::Finished {
                    self.finish_pending = true;
                }
            } else {
                // Avatar torn down mid-run; nothing left to animate.
                self.run.reset();
                self.finish_pending = true;
            }
        }

        self.camera.apply_options(&self.options.camera);
        self.renderer.render(&self.scene, &self.camera);
    }

    // -- Accessors --

    /// The scene being rendered.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera framing the avatar.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current engine options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable options; changes apply within one frame.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Whether the avatar model has finished loading.
    #[must_use]
    pub fn model_loaded(&self) -> bool {
        self.model_loaded
    }

    /// Whether a rig load for the current avatar is still in flight.
    #[must_use]
    pub fn load_pending(&self) -> bool {
        self.load_pending
    }

    /// Whether the engine has nothing left to do: no active queue, no
    /// animating flag still to settle, no load in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.is_animating
            && !self.run.queue_active
            && !self.finish_pending
            && !self.load_pending
    }

    /// Current viewport dimensions.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}

impl std::fmt::Debug for SignEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignEngine")
            .field("generation", &self.generation)
            .field("model_loaded", &self.model_loaded)
            .field("is_animating", &self.is_animating)
            .field("queue_len", &self.run.queue.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use super::*;
    use crate::asset::{AvatarAsset, JointSpec, MeshSpec};
    use crate::dictionary::builtin;
    use crate::render::HeadlessRenderer;

    /// Source that always fails; engine tests install rigs directly for
    /// determinism.
    pub struct NoSource;

    impl AssetSource for NoSource {
        fn load(
            &self,
            _path: &Path,
            _progress: &mut dyn FnMut(f32),
        ) -> Result<AvatarAsset, HandsignError> {
            Err(HandsignError::AssetLoad("no source in tests".into()))
        }
    }

    pub fn test_asset() -> AvatarAsset {
        let joint = |name: &str| JointSpec {
            name: name.into(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        };
        let mut joints: Vec<JointSpec> = [
            "mixamorigRightArm",
            "mixamorigRightForeArm",
            "mixamorigRightHand",
            "mixamorigLeftArm",
        ]
        .iter()
        .map(|&n| joint(n))
        .collect();
        for finger in ["Thumb", "Index", "Middle", "Ring", "Pinky"] {
            for phalanx in 1..=3 {
                joints
                    .push(joint(&format!("mixamorigRightHand{finger}{phalanx}")));
            }
        }
        AvatarAsset {
            name: "test-rig".into(),
            joints,
            meshes: vec![MeshSpec {
                name: "Beta_Surface".into(),
                skinned: true,
            }],
        }
    }

    /// Engine with the builtin dictionary, a headless renderer, and the
    /// test rig already installed.
    pub fn loaded_engine() -> SignEngine {
        let mut engine = SignEngine::new(
            Options::default(),
            Box::new(builtin::dictionary()),
            Box::new(HeadlessRenderer::new()),
            Box::new(NoSource),
        )
        .unwrap();
        engine.install_avatar(&test_asset());
        engine
    }
}
