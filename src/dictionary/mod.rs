//! The dictionary provider contract and a map-backed implementation.
//!
//! Sign definitions are data, not engine logic: the engine only needs a
//! way to ask "is there a whole-word sign for this token?" and "is there
//! a finger-spelling entry for this character?". Production dictionaries
//! hold hundreds of definitions; [`builtin`] ships a realistic sample so
//! the reference binary and the tests exercise real data.

pub mod builtin;

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::playback::InstructionGroup;

/// A side-effecting sign definition: appends one or more motion groups
/// for its word or character onto the instruction queue.
pub trait SignProducer {
    /// Append this sign's motion groups to `queue`.
    fn produce(&self, queue: &mut VecDeque<InstructionGroup>);
}

impl<F> SignProducer for F
where
    F: Fn(&mut VecDeque<InstructionGroup>),
{
    fn produce(&self, queue: &mut VecDeque<InstructionGroup>) {
        self(queue);
    }
}

/// Supplies sign producers for whole words and single characters.
///
/// Tokens are always uppercase by the time they reach the dictionary;
/// implementations need not normalize.
pub trait Dictionary {
    /// Whole-word producer for an exact uppercase token, if defined.
    fn word(&self, token: &str) -> Option<&dyn SignProducer>;

    /// Finger-spelling producer for a single uppercase character, if
    /// defined.
    fn letter(&self, ch: char) -> Option<&dyn SignProducer>;
}

/// Hash-map-backed dictionary with closure registration.
#[derive(Default)]
pub struct MapDictionary {
    words: FxHashMap<String, Box<dyn SignProducer>>,
    letters: FxHashMap<char, Box<dyn SignProducer>>,
}

impl MapDictionary {
    /// Empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a whole-word producer. Replaces any previous definition
    /// for the token.
    pub fn insert_word<P>(&mut self, token: &str, producer: P)
    where
        P: SignProducer + 'static,
    {
        let _ = self
            .words
            .insert(token.to_uppercase(), Box::new(producer));
    }

    /// Register a finger-spelling producer for a character.
    pub fn insert_letter<P>(&mut self, ch: char, producer: P)
    where
        P: SignProducer + 'static,
    {
        let _ = self
            .letters
            .insert(ch.to_ascii_uppercase(), Box::new(producer));
    }

    /// Number of whole-word definitions.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of finger-spelling definitions.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

impl Dictionary for MapDictionary {
    fn word(&self, token: &str) -> Option<&dyn SignProducer> {
        self.words.get(token).map(AsRef::as_ref)
    }

    fn letter(&self, ch: char) -> Option<&dyn SignProducer> {
        self.letters.get(&ch).map(AsRef::as_ref)
    }
}

impl std::fmt::Debug for MapDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapDictionary")
            .field("words", &self.words.len())
            .field("letters", &self.letters.len())
            .finish()
    }
}
