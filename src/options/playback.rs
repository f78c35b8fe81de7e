use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lower bound for the per-frame joint increment.
pub const SPEED_MIN: f32 = 0.05;
/// Upper bound for the per-frame joint increment.
pub const SPEED_MAX: f32 = 0.5;
/// Upper bound for the inter-word pause in milliseconds.
pub const PAUSE_MS_MAX: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Playback pacing parameters.
///
/// Both values are read fresh every frame by the scheduler, so changes
/// apply to in-flight animations with at most one frame of latency.
pub struct PlaybackOptions {
    /// Per-frame increment magnitude applied to each unresolved joint
    /// channel ("speed").
    #[schemars(title = "Sign Speed", range(min = 0.05, max = 0.5), extend("step" = 0.05))]
    pub speed: f32,
    /// Pause between resolved motion groups, in milliseconds.
    #[schemars(title = "Pause Between Signs", range(min = 0, max = 2000), extend("step" = 100))]
    pub pause_ms: u64,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            speed: 0.1,
            pause_ms: 800,
        }
    }
}

impl PlaybackOptions {
    /// Set the speed, clamped to the supported range.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Set the inter-word pause, clamped to the supported range.
    pub fn set_pause_ms(&mut self, pause_ms: u64) {
        self.pause_ms = pause_ms.min(PAUSE_MS_MAX);
    }

    /// The inter-word pause as a [`Duration`].
    #[must_use]
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Clamp both values to their supported ranges. A zero or negative
    /// speed would stall the scheduler, so deserialized values must pass
    /// through here before reaching a frame loop.
    pub fn clamp_to_ranges(&mut self) {
        self.set_speed(self.speed);
        self.set_pause_ms(self.pause_ms);
    }
}
