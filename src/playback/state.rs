//! The mutable run state consumed by the scheduler.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::instruction::InstructionGroup;

/// Playback state for one mounted avatar viewport.
///
/// Exclusively owned by its engine. Single-writer discipline: the
/// scheduler consumes `queue` and arms the pause; the controller appends
/// to `queue`, toggles `queue_active`, and drains `captions`.
pub struct RunState {
    /// FIFO of pending instruction groups.
    pub queue: VecDeque<InstructionGroup>,
    /// True iff a consumption loop is currently live. At most one
    /// consumer may run against the queue.
    pub queue_active: bool,
    /// Caption fragments surfaced so far, in dequeue order. Derived
    /// bookkeeping; the host UI owns the final display text.
    pub captions: Vec<String>,
    /// Deadline until which motion and caption dequeue are frozen.
    pause_until: Option<Instant>,
}

impl RunState {
    /// Idle state with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_active: false,
            captions: Vec::new(),
            pause_until: None,
        }
    }

    /// Whether the inter-word pause is active at `now`.
    #[must_use]
    pub fn pause_active(&self, now: Instant) -> bool {
        self.pause_until.is_some_and(|deadline| now < deadline)
    }

    /// Arm the inter-word pause to end `pause` after `now`.
    pub fn arm_pause(&mut self, now: Instant, pause: Duration) {
        self.pause_until = Some(now + pause);
    }

    /// Drop an expired pause deadline.
    pub fn clear_expired_pause(&mut self, now: Instant) {
        if self.pause_until.is_some_and(|deadline| now >= deadline) {
            self.pause_until = None;
        }
    }

    /// Hard reset to idle: queue, captions, pause, and the consumer flag
    /// are all cleared.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.captions.clear();
        self.queue_active = false;
        self.pause_until = None;
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunState")
            .field("queue_len", &self.queue.len())
            .field("queue_active", &self.queue_active)
            .field("paused", &self.pause_until.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_expires_at_deadline() {
        let mut run = RunState::new();
        let t0 = Instant::now();
        run.arm_pause(t0, Duration::from_millis(100));
        assert!(run.pause_active(t0));
        assert!(run.pause_active(t0 + Duration::from_millis(99)));
        assert!(!run.pause_active(t0 + Duration::from_millis(100)));
        run.clear_expired_pause(t0 + Duration::from_millis(100));
        assert!(!run.pause_active(t0));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut run = RunState::new();
        run.queue
            .push_back(InstructionGroup::Caption("HI ".into()));
        run.queue_active = true;
        run.captions.push("HI ".into());
        run.arm_pause(Instant::now(), Duration::from_secs(1));
        run.reset();
        assert!(run.queue.is_empty());
        assert!(!run.queue_active);
        assert!(run.captions.is_empty());
        assert!(!run.pause_active(Instant::now()));
    }
}
