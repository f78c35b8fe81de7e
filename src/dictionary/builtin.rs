//! Built-in sample sign definitions for the Mixamo rigs.
//!
//! A full production dictionary carries hundreds of whole-word signs;
//! this module ships the complete finger-spelling alphabet plus a small
//! set of common words so the engine can run end to end out of the box.
//! All joint names target the `mixamorig` skeleton shared by the ybot
//! and xbot rigs; rest rotations are zero, so release groups drive every
//! channel back to `0.0`.

use std::collections::VecDeque;

use super::MapDictionary;
use crate::playback::{Axis, Direction, InstructionGroup, JointOp};

/// Resting-to-signing arm raise on the right upper arm (radians, Z).
const ARM_RAISE: f32 = -1.1;
/// Forearm bend while signing (radians, Z).
const FOREARM_BEND: f32 = -0.4;

/// Per-finger curl amounts for one hand shape (radians; 0 = straight).
#[derive(Debug, Clone, Copy)]
struct HandShape {
    thumb: f32,
    index: f32,
    middle: f32,
    ring: f32,
    pinky: f32,
}

impl HandShape {
    const fn new(
        thumb: f32,
        index: f32,
        middle: f32,
        ring: f32,
        pinky: f32,
    ) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }
}

/// Approximate ASL finger-spelling hand shapes. Values are curl targets
/// for the proximal and intermediate phalanges.
const ALPHABET: [(char, HandShape); 26] = [
    ('A', HandShape::new(0.2, 1.5, 1.5, 1.5, 1.5)),
    ('B', HandShape::new(1.2, 0.0, 0.0, 0.0, 0.0)),
    ('C', HandShape::new(0.6, 0.7, 0.7, 0.7, 0.7)),
    ('D', HandShape::new(0.8, 0.0, 1.2, 1.2, 1.2)),
    ('E', HandShape::new(1.0, 1.1, 1.1, 1.1, 1.1)),
    ('F', HandShape::new(0.9, 0.9, 0.0, 0.0, 0.0)),
    ('G', HandShape::new(0.4, 0.0, 1.5, 1.5, 1.5)),
    ('H', HandShape::new(0.9, 0.0, 0.0, 1.5, 1.5)),
    ('I', HandShape::new(1.0, 1.5, 1.5, 1.5, 0.0)),
    ('J', HandShape::new(1.0, 1.5, 1.5, 1.5, 0.1)),
    ('K', HandShape::new(0.5, 0.0, 0.2, 1.5, 1.5)),
    ('L', HandShape::new(0.0, 0.0, 1.5, 1.5, 1.5)),
    ('M', HandShape::new(1.2, 1.2, 1.2, 1.2, 1.5)),
    ('N', HandShape::new(1.2, 1.2, 1.2, 1.5, 1.5)),
    ('O', HandShape::new(0.8, 0.8, 0.8, 0.8, 0.8)),
    ('P', HandShape::new(0.5, 0.1, 0.4, 1.5, 1.5)),
    ('Q', HandShape::new(0.5, 0.3, 1.5, 1.5, 1.5)),
    ('R', HandShape::new(1.0, 0.1, 0.0, 1.5, 1.5)),
    ('S', HandShape::new(1.3, 1.5, 1.5, 1.5, 1.5)),
    ('T', HandShape::new(1.1, 1.3, 1.5, 1.5, 1.5)),
    ('U', HandShape::new(1.0, 0.0, 0.0, 1.5, 1.5)),
    ('V', HandShape::new(1.0, 0.0, 0.1, 1.5, 1.5)),
    ('W', HandShape::new(1.0, 0.0, 0.0, 0.0, 1.5)),
    ('X', HandShape::new(1.0, 0.7, 1.5, 1.5, 1.5)),
    ('Y', HandShape::new(0.0, 1.5, 1.5, 1.5, 0.0)),
    ('Z', HandShape::new(1.0, 0.2, 1.5, 1.5, 1.5)),
];

/// Drive a rotation channel from rest toward `target`.
fn toward(joint: &str, axis: Axis, target: f32) -> JointOp {
    let sign = if target < 0.0 {
        Direction::Decrease
    } else {
        Direction::Increase
    };
    JointOp::rotation(joint, axis, target, sign)
}

/// Drive a rotation channel back to rest from `from`.
fn back(joint: &str, axis: Axis, from: f32) -> JointOp {
    let sign = if from < 0.0 {
        Direction::Increase
    } else {
        Direction::Decrease
    };
    JointOp::rotation(joint, axis, 0.0, sign)
}

/// Curl ops for one finger's proximal and intermediate phalanges.
fn curl_finger(ops: &mut Vec<JointOp>, finger: &str, curl: f32) {
    if curl == 0.0 {
        return;
    }
    for phalanx in 1..=2 {
        ops.push(toward(
            &format!("mixamorigRightHand{finger}{phalanx}"),
            Axis::Z,
            curl,
        ));
    }
}

/// Release ops mirroring [`curl_finger`].
fn release_finger(ops: &mut Vec<JointOp>, finger: &str, curl: f32) {
    if curl == 0.0 {
        return;
    }
    for phalanx in 1..=2 {
        ops.push(back(
            &format!("mixamorigRightHand{finger}{phalanx}"),
            Axis::Z,
            curl,
        ));
    }
}

/// The strike group for a hand shape: raise the arm and form the shape.
fn strike_group(shape: HandShape) -> InstructionGroup {
    let mut ops = vec![
        toward("mixamorigRightArm", Axis::Z, ARM_RAISE),
        toward("mixamorigRightForeArm", Axis::Z, FOREARM_BEND),
    ];
    curl_finger(&mut ops, "Thumb", shape.thumb);
    curl_finger(&mut ops, "Index", shape.index);
    curl_finger(&mut ops, "Middle", shape.middle);
    curl_finger(&mut ops, "Ring", shape.ring);
    curl_finger(&mut ops, "Pinky", shape.pinky);
    InstructionGroup::Motion(ops)
}

/// The release group for a hand shape: everything back to rest.
fn release_group(shape: HandShape) -> InstructionGroup {
    let mut ops = vec![
        back("mixamorigRightArm", Axis::Z, ARM_RAISE),
        back("mixamorigRightForeArm", Axis::Z, FOREARM_BEND),
    ];
    release_finger(&mut ops, "Thumb", shape.thumb);
    release_finger(&mut ops, "Index", shape.index);
    release_finger(&mut ops, "Middle", shape.middle);
    release_finger(&mut ops, "Ring", shape.ring);
    release_finger(&mut ops, "Pinky", shape.pinky);
    InstructionGroup::Motion(ops)
}

fn wave_word(queue: &mut VecDeque<InstructionGroup>) {
    // HELLO: open hand raised beside the head, waved twice.
    let open = HandShape::new(0.0, 0.0, 0.0, 0.0, 0.0);
    queue.push_back(strike_group(open));
    for _ in 0..2 {
        queue.push_back(InstructionGroup::Motion(vec![toward(
            "mixamorigRightHand",
            Axis::Y,
            0.5,
        )]));
        queue.push_back(InstructionGroup::Motion(vec![back(
            "mixamorigRightHand",
            Axis::Y,
            0.5,
        )]));
    }
    queue.push_back(release_group(open));
}

fn point_word(queue: &mut VecDeque<InstructionGroup>) {
    // YOU: index extended toward the viewer, other fingers curled.
    let point = HandShape::new(1.0, 0.0, 1.5, 1.5, 1.5);
    queue.push_back(strike_group(point));
    queue.push_back(InstructionGroup::Motion(vec![toward(
        "mixamorigRightHand",
        Axis::X,
        -0.4,
    )]));
    queue.push_back(InstructionGroup::Motion(vec![back(
        "mixamorigRightHand",
        Axis::X,
        -0.4,
    )]));
    queue.push_back(release_group(point));
}

fn tap_word(queue: &mut VecDeque<InstructionGroup>) {
    // TIME: index taps the back of the opposite wrist.
    let tap = HandShape::new(1.0, 0.3, 1.5, 1.5, 1.5);
    queue.push_back(InstructionGroup::Motion(vec![
        toward("mixamorigLeftArm", Axis::Z, 0.9),
        toward("mixamorigRightArm", Axis::Z, ARM_RAISE),
    ]));
    queue.push_back(strike_group(tap));
    queue.push_back(release_group(tap));
    queue.push_back(InstructionGroup::Motion(vec![back(
        "mixamorigLeftArm",
        Axis::Z,
        0.9,
    )]));
}

fn cheek_word(queue: &mut VecDeque<InstructionGroup>) {
    // HOME: flattened-O touches the cheek twice.
    let flat_o = HandShape::new(0.8, 0.8, 0.8, 0.8, 0.8);
    queue.push_back(strike_group(flat_o));
    for _ in 0..2 {
        queue.push_back(InstructionGroup::Motion(vec![toward(
            "mixamorigRightForeArm",
            Axis::X,
            0.3,
        )]));
        queue.push_back(InstructionGroup::Motion(vec![back(
            "mixamorigRightForeArm",
            Axis::X,
            0.3,
        )]));
    }
    queue.push_back(release_group(flat_o));
}

fn chin_out_word(queue: &mut VecDeque<InstructionGroup>) {
    // THANKS: flat hand from the chin outward.
    let flat = HandShape::new(0.0, 0.0, 0.0, 0.0, 0.0);
    queue.push_back(strike_group(flat));
    queue.push_back(InstructionGroup::Motion(vec![toward(
        "mixamorigRightForeArm",
        Axis::X,
        0.5,
    )]));
    queue.push_back(InstructionGroup::Motion(vec![back(
        "mixamorigRightForeArm",
        Axis::X,
        0.5,
    )]));
    queue.push_back(release_group(flat));
}

fn crossed_fingers_word(queue: &mut VecDeque<InstructionGroup>) {
    // NAME: extended index and middle fingers tap crosswise.
    let h_shape = HandShape::new(0.9, 0.0, 0.0, 1.5, 1.5);
    queue.push_back(strike_group(h_shape));
    queue.push_back(InstructionGroup::Motion(vec![toward(
        "mixamorigRightHand",
        Axis::Z,
        0.4,
    )]));
    queue.push_back(InstructionGroup::Motion(vec![back(
        "mixamorigRightHand",
        Axis::Z,
        0.4,
    )]));
    queue.push_back(release_group(h_shape));
}

/// Build the sample dictionary: the full A–Z alphabet and a handful of
/// whole-word signs.
#[must_use]
pub fn dictionary() -> MapDictionary {
    let mut dict = MapDictionary::new();

    for (ch, shape) in ALPHABET {
        dict.insert_letter(
            ch,
            move |queue: &mut VecDeque<InstructionGroup>| {
                queue.push_back(strike_group(shape));
                queue.push_back(release_group(shape));
            },
        );
    }

    dict.insert_word("HELLO", wave_word);
    dict.insert_word("YOU", point_word);
    dict.insert_word("TIME", tap_word);
    dict.insert_word("HOME", cheek_word);
    dict.insert_word("THANKS", chin_out_word);
    dict.insert_word("NAME", crossed_fingers_word);

    dict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn covers_the_full_alphabet() {
        let dict = dictionary();
        assert_eq!(dict.letter_count(), 26);
        for ch in 'A'..='Z' {
            assert!(dict.letter(ch).is_some(), "missing letter {ch}");
        }
        assert!(dict.letter('1').is_none());
    }

    #[test]
    fn letters_emit_strike_then_release() {
        let dict = dictionary();
        let mut queue = VecDeque::new();
        dict.letter('A').unwrap().produce(&mut queue);
        assert_eq!(queue.len(), 2);
        let InstructionGroup::Motion(strike) = &queue[0] else {
            panic!("expected motion group");
        };
        let InstructionGroup::Motion(release) = &queue[1] else {
            panic!("expected motion group");
        };
        assert_eq!(strike.len(), release.len());
        // Every release op returns its channel to rest.
        assert!(release.iter().all(|op| op.target == 0.0));
    }

    #[test]
    fn word_signs_are_registered() {
        let dict = dictionary();
        for word in ["HELLO", "YOU", "TIME", "HOME", "THANKS", "NAME"] {
            assert!(dict.word(word).is_some(), "missing word {word}");
        }
        let mut queue = VecDeque::new();
        dict.word("HELLO").unwrap().produce(&mut queue);
        assert!(queue.len() >= 4);
    }
}
