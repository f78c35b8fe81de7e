//! Display-refresh pacing for hosts without their own frame callback.

use web_time::{Duration, Instant};

/// Paces a loop at a fixed refresh rate.
///
/// The deadline for the *next* tick is computed at the start of the
/// current one, before any frame work runs, so a single slow frame
/// shifts the schedule instead of stalling it.
pub struct FramePacer {
    frame_duration: Duration,
    next_deadline: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    smoothing: f32,
}

impl FramePacer {
    /// Pacer targeting the given refresh rate (clamped to at least 1).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let fps = target_fps.max(1);
        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(fps));
        Self {
            frame_duration,
            next_deadline: Instant::now() + frame_duration,
            smoothed_fps: fps as f32,
            smoothing: 0.05,
        }
    }

    /// Begin a tick: schedule the following tick and return the current
    /// time to use as the frame's timestamp.
    pub fn tick(&mut self) -> Instant {
        let now = Instant::now();
        self.next_deadline = now + self.frame_duration;
        now
    }

    /// Sleep until the deadline scheduled by the last [`tick`](Self::tick),
    /// updating the FPS average.
    pub fn sleep_until_deadline(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_deadline.checked_duration_since(now)
        {
            std::thread::sleep(remaining);
        }
        let frame_time = self.frame_duration.as_secs_f32().max(
            now.saturating_duration_since(
                self.next_deadline - self.frame_duration,
            )
            .as_secs_f32(),
        );
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_schedules_the_next_deadline_up_front() {
        let mut pacer = FramePacer::new(100);
        let t = pacer.tick();
        assert!(pacer.next_deadline >= t + Duration::from_millis(9));
    }

    #[test]
    fn zero_fps_is_clamped() {
        let pacer = FramePacer::new(0);
        assert!(pacer.frame_duration <= Duration::from_secs(1));
    }
}
