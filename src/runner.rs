//! Blocking frame loops for hosts without their own refresh callback.
//!
//! A GUI host drives [`SignEngine::frame`] from its own per-refresh
//! callback; these helpers provide the equivalent loop for headless and
//! CLI use. Both follow the same contract as the engine's scheduler:
//! the next tick is scheduled before the current frame's work runs.

use crate::engine::SignEngine;
use crate::util::frame_timing::FramePacer;

/// Display refresh rate assumed for blocking loops.
pub const DEFAULT_FPS: u32 = 60;

/// Drive frames until the initial avatar load settles (success or
/// failure). Returns whether the model loaded.
pub fn run_until_loaded(engine: &mut SignEngine, target_fps: u32) -> bool {
    let mut pacer = FramePacer::new(target_fps);
    while engine.load_pending() {
        let now = pacer.tick();
        engine.frame(now);
        pacer.sleep_until_deadline();
    }
    engine.model_loaded()
}

/// Drive frames until the engine is idle: queue drained, animating flag
/// settled, no load in flight.
pub fn run_until_idle(engine: &mut SignEngine, target_fps: u32) {
    let mut pacer = FramePacer::new(target_fps);
    while !engine.is_idle() {
        let now = pacer.tick();
        engine.frame(now);
        pacer.sleep_until_deadline();
    }
    log::debug!("runner idle (avg {:.0} fps)", pacer.fps());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::loaded_engine;

    #[test]
    fn run_until_idle_drains_an_animation() {
        let mut engine = loaded_engine();
        engine.options_mut().playback.set_pause_ms(0);
        engine.animate("HI");
        run_until_idle(&mut engine, 240);
        assert!(!engine.is_animating());
        assert_eq!(engine.queue_len(), 0);
    }
}
