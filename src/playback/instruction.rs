//! The instruction vocabulary the compiler emits and the scheduler
//! consumes.

use glam::Vec3;

use crate::scene::Joint;

/// Which transform channel of a joint an op drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Translation channel.
    Position,
    /// Euler rotation channel (radians).
    Rotation,
    /// Scale channel.
    Scale,
}

/// Which component of the channel vector an op drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X component.
    X,
    /// Y component.
    Y,
    /// Z component.
    Z,
}

impl Axis {
    fn component_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Self::X => &mut v.x,
            Self::Y => &mut v.y,
            Self::Z => &mut v.z,
        }
    }
}

/// Whether the channel value climbs or falls toward the target bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Add the increment each frame; clamp from above at the target.
    Increase,
    /// Subtract the increment each frame; clamp from below at the target.
    Decrease,
}

/// One incremental joint-channel drive.
///
/// Each frame the live channel value moves by the configured speed in
/// `sign`'s direction, then clamps to `target` so it never overshoots.
/// The op is resolved once the clamped value equals `target` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct JointOp {
    /// Rig name of the driven joint.
    pub joint: String,
    /// Transform channel.
    pub channel: Channel,
    /// Vector component of the channel.
    pub axis: Axis,
    /// Bound the value converges to.
    pub target: f32,
    /// Direction of travel.
    pub sign: Direction,
}

impl JointOp {
    /// Shorthand constructor for a rotation op, the overwhelmingly common
    /// case in sign definitions.
    #[must_use]
    pub fn rotation(
        joint: &str,
        axis: Axis,
        target: f32,
        sign: Direction,
    ) -> Self {
        Self {
            joint: joint.to_owned(),
            channel: Channel::Rotation,
            axis,
            target,
            sign,
        }
    }

    /// Advance the op's channel on `joint` by `speed` and clamp.
    ///
    /// Returns `true` once the op is resolved (value equals the target).
    pub fn advance(&self, joint: &mut Joint, speed: f32) -> bool {
        let channel = match self.channel {
            Channel::Position => &mut joint.position,
            Channel::Rotation => &mut joint.rotation,
            Channel::Scale => &mut joint.scale,
        };
        let value = self.axis.component_mut(channel);
        *value = match self.sign {
            Direction::Increase => (*value + speed).min(self.target),
            Direction::Decrease => (*value - speed).max(self.target),
        };
        *value == self.target
    }
}

/// One entry of the instruction queue.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionGroup {
    /// Opaque text fragment surfaced to the caller when dequeued; no
    /// joint motion.
    Caption(String),
    /// Joint ops advanced together each frame until all are resolved.
    Motion(Vec<JointOp>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_joint() -> Joint {
        Joint::new(
            "mixamorigRightArm".into(),
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ONE,
        )
    }

    #[test]
    fn increase_converges_exactly_without_overshoot() {
        let mut joint = test_joint();
        let op = JointOp::rotation(
            "mixamorigRightArm",
            Axis::Z,
            0.35,
            Direction::Increase,
        );
        let mut frames = 0;
        while !op.advance(&mut joint, 0.1) {
            frames += 1;
            assert!(joint.rotation.z <= 0.35);
            assert!(frames < 100, "op failed to converge");
        }
        assert_eq!(joint.rotation.z, 0.35);
        // ceil(0.35 / 0.1) = 4 frames total, three non-terminal.
        assert_eq!(frames, 3);
    }

    #[test]
    fn decrease_converges_exactly() {
        let mut joint = test_joint();
        let op = JointOp::rotation(
            "mixamorigRightArm",
            Axis::X,
            -0.25,
            Direction::Decrease,
        );
        while !op.advance(&mut joint, 0.1) {
            assert!(joint.rotation.x >= -0.25);
        }
        assert_eq!(joint.rotation.x, -0.25);
    }

    #[test]
    fn position_channel_is_driven_independently() {
        let mut joint = test_joint();
        let op = JointOp {
            joint: "mixamorigRightArm".into(),
            channel: Channel::Position,
            axis: Axis::Y,
            target: 0.2,
            sign: Direction::Increase,
        };
        assert!(!op.advance(&mut joint, 0.1));
        assert_eq!(joint.position.y, 0.1);
        assert_eq!(joint.rotation.y, 0.0);
    }
}
