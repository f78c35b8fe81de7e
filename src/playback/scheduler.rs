//! The per-frame consumption step at the heart of the engine.
//!
//! One call per rendered frame. Host loops must schedule the next frame
//! before doing this frame's work (see [`crate::runner`]) so a slow frame
//! never stalls the queue.

use std::time::{Duration, Instant};

use super::instruction::InstructionGroup;
use super::state::RunState;
use crate::scene::Avatar;

/// What a scheduler step left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The queue still has work (or a pause is running); keep stepping.
    Active,
    /// The queue drained this step; the loop stops and the controller
    /// flips its animating flag on the next tick.
    Finished,
}

/// Advance playback by one frame at simulated time `now`.
///
/// - Empty queue: clears the consumer flag and reports
///   [`StepOutcome::Finished`].
/// - Active pause: the queue is frozen; motion and caption markers both
///   wait. Only motion-group completion arms a pause; captions never do.
/// - Caption marker at the front: surfaced into `run.captions` and
///   dequeued immediately.
/// - Motion group at the front: every unresolved op advances by `speed`
///   and clamps at its bound; ops whose joint is missing from the rig are
///   dropped silently. When the last op resolves the group is dequeued
///   and the inter-word pause is armed for `pause`.
///
/// `speed` and `pause` are read fresh by the caller each frame, so option
/// changes take effect mid-animation.
pub fn step(
    run: &mut RunState,
    avatar: &mut Avatar,
    speed: f32,
    pause: Duration,
    now: Instant,
) -> StepOutcome {
    if run.queue.is_empty() {
        run.queue_active = false;
        return StepOutcome::Finished;
    }

    if run.pause_active(now) {
        return StepOutcome::Active;
    }
    run.clear_expired_pause(now);

    if matches!(run.queue.front(), Some(InstructionGroup::Caption(_))) {
        if let Some(InstructionGroup::Caption(text)) = run.queue.pop_front() {
            log::trace!("caption {text:?}");
            run.captions.push(text);
        }
        return StepOutcome::Active;
    }

    let mut group_resolved = false;
    if let Some(InstructionGroup::Motion(ops)) = run.queue.front_mut() {
        ops.retain(|op| match avatar.joint_mut(&op.joint) {
            // Missing joint: skip the op, never fail the group.
            None => {
                log::trace!("joint {:?} not in rig, skipping op", op.joint);
                false
            }
            Some(joint) => !op.advance(joint, speed),
        });
        group_resolved = ops.is_empty();
    }
    if group_resolved {
        let _ = run.queue.pop_front();
        run.arm_pause(now, pause);
    }

    StepOutcome::Active
}
