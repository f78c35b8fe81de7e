//! Compiles input text into the instruction queue.
//!
//! Whole words with a dictionary entry animate as one sign; everything
//! else falls back to per-character finger-spelling. Caption markers are
//! interleaved so the text surfaces in lockstep with the motion it
//! describes.

use std::collections::VecDeque;

use super::instruction::InstructionGroup;
use crate::dictionary::Dictionary;

/// Compile `text` into an ordered instruction queue.
///
/// The input is uppercased and split on whitespace. For each word:
///
/// - A whole-word producer gets its `"WORD "` caption marker pushed
///   *before* the producer runs, so a producer that appends nothing can
///   never skip its caption.
/// - Otherwise each character with an alphabet entry appends its motion
///   group(s) followed by a single-character caption marker; only the
///   word's last character carries the trailing space. Downstream caption
///   concatenation relies on spacing coming from the markers, not from
///   word boundaries.
/// - Characters with no alphabet entry produce neither motion nor
///   caption. Unknown words still finger-spell whatever characters they
///   can.
///
/// Compilation never touches playback state; it only builds the queue.
#[must_use]
pub fn compile(
    text: &str,
    dict: &dyn Dictionary,
) -> VecDeque<InstructionGroup> {
    let mut queue = VecDeque::new();
    let upper = text.to_uppercase();

    for word in upper.split_whitespace() {
        if let Some(producer) = dict.word(word) {
            queue.push_back(InstructionGroup::Caption(format!("{word} ")));
            producer.produce(&mut queue);
            continue;
        }

        log::debug!("no sign for {word:?}, finger-spelling");
        let chars: Vec<char> = word.chars().collect();
        let last = chars.len().saturating_sub(1);
        for (i, &ch) in chars.iter().enumerate() {
            let Some(producer) = dict.letter(ch) else {
                log::debug!("no alphabet entry for {ch:?}, skipping");
                continue;
            };
            producer.produce(&mut queue);
            let caption = if i == last {
                format!("{ch} ")
            } else {
                ch.to_string()
            };
            queue.push_back(InstructionGroup::Caption(caption));
        }
    }

    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MapDictionary;
    use crate::playback::instruction::{Axis, Direction, JointOp};

    /// Dictionary where "HI" is a whole word and H/E/L/O/T/R are
    /// finger-spellable.
    fn test_dict() -> MapDictionary {
        let mut dict = MapDictionary::new();
        dict.insert_word("HI", |queue: &mut VecDeque<InstructionGroup>| {
            queue.push_back(InstructionGroup::Motion(vec![
                JointOp::rotation(
                    "mixamorigRightArm",
                    Axis::Z,
                    -1.0,
                    Direction::Decrease,
                ),
            ]));
        });
        for ch in ['H', 'E', 'L', 'O', 'T', 'R'] {
            dict.insert_letter(
                ch,
                move |queue: &mut VecDeque<InstructionGroup>| {
                    queue.push_back(InstructionGroup::Motion(vec![
                        JointOp::rotation(
                            "mixamorigRightHand",
                            Axis::X,
                            0.5,
                            Direction::Increase,
                        ),
                    ]));
                },
            );
        }
        dict
    }

    fn captions(queue: &VecDeque<InstructionGroup>) -> Vec<&str> {
        queue
            .iter()
            .filter_map(|g| match g {
                InstructionGroup::Caption(text) => Some(text.as_str()),
                InstructionGroup::Motion(_) => None,
            })
            .collect()
    }

    #[test]
    fn whole_word_caption_precedes_finger_spelled_fragments() {
        let dict = test_dict();
        let queue = compile("HI THERE", &dict);
        assert_eq!(
            captions(&queue),
            vec!["HI ", "T", "H", "E", "R", "E "]
        );
        // The whole-word caption is the queue head, before its motion.
        assert!(matches!(
            queue.front(),
            Some(InstructionGroup::Caption(c)) if c == "HI "
        ));
    }

    #[test]
    fn finger_spelling_emits_one_group_per_character() {
        let dict = test_dict();
        let queue = compile("HELLO", &dict);
        assert_eq!(captions(&queue), vec!["H", "E", "L", "L", "O "]);
        let motion_groups = queue
            .iter()
            .filter(|g| matches!(g, InstructionGroup::Motion(_)))
            .count();
        assert_eq!(motion_groups, 5);
        // Motion precedes its caption for finger-spelled characters.
        assert!(matches!(
            queue.front(),
            Some(InstructionGroup::Motion(_))
        ));
    }

    #[test]
    fn input_is_uppercased_and_whitespace_split() {
        let dict = test_dict();
        let queue = compile("  hello\t there ", &dict);
        let caps = captions(&queue);
        assert_eq!(caps[0], "H");
        assert!(caps.contains(&"T"));
    }

    #[test]
    fn unknown_characters_vanish_silently() {
        let dict = test_dict();
        // 'X' has no alphabet entry: no motion, no caption, and the
        // trailing space lands on nothing since 'X' was the last char.
        let queue = compile("EX", &dict);
        assert_eq!(captions(&queue), vec!["E"]);
    }

    #[test]
    fn empty_input_compiles_to_empty_queue() {
        let dict = test_dict();
        assert!(compile("", &dict).is_empty());
        assert!(compile("   ", &dict).is_empty());
    }
}
