//! Search constraints for a single board word.
//!
//! A [`Query`] is built through [`QueryBuilder`] and is immutable afterwards.

use std::collections::{BTreeMap, BTreeSet};

/// Characters that mark an unrevealed position in a board pattern.
pub const HIDDEN_MARKERS: [char; 5] = ['_', '.', '?', '-', '*'];

/// Fold a letter for case-insensitive comparison.
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Immutable search constraints: word length, letters known at given
/// positions, and letters known not to be in the word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    word_length: usize,
    known_letters: BTreeMap<usize, char>,
    used_letters: BTreeSet<char>,
}

impl Query {
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Known letters keyed by zero-based position, as they were given.
    pub fn known_letters(&self) -> &BTreeMap<usize, char> {
        &self.known_letters
    }

    pub fn known_letter(&self, position: usize) -> Option<char> {
        self.known_letters.get(&position).copied()
    }

    /// Excluded letters, lowercased.
    pub fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    /// Whether `letter` was guessed wrong, ignoring case.
    pub fn is_used(&self, letter: char) -> bool {
        self.used_letters.contains(&fold(letter))
    }

    /// Whether any known letter sits at or beyond the word length.
    ///
    /// Such entries are accepted but never looked at by the matcher.
    pub fn has_out_of_range_positions(&self) -> bool {
        self.known_letters
            .keys()
            .next_back()
            .is_some_and(|&last| last >= self.word_length)
    }

    /// Render as a board pattern, `_` for unknown positions.
    pub fn pattern(&self) -> String {
        (0..self.word_length)
            .map(|i| self.known_letter(i).unwrap_or('_'))
            .collect()
    }
}

/// Builder for [`Query`]. Every setter returns the builder for chaining.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    word_length: usize,
    known_letters: BTreeMap<usize, char>,
    used_letters: BTreeSet<char>,
}

impl QueryBuilder {
    /// A builder with length 0 and no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a board pattern such as `"a__le"`.
    ///
    /// Sets the length to the pattern's character count and every character
    /// that is not one of [`HIDDEN_MARKERS`] becomes a known letter.
    pub fn from_pattern(pattern: &str) -> Self {
        let mut builder = Self::new().set_word_length(pattern.chars().count());
        for (i, c) in pattern.chars().enumerate() {
            if !HIDDEN_MARKERS.contains(&c) {
                builder = builder.add_known_letter(i, c);
            }
        }
        builder
    }

    pub fn set_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    /// Set the letter at `position`; a later call for the same position wins.
    pub fn add_known_letter(mut self, position: usize, letter: char) -> Self {
        self.known_letters.insert(position, letter);
        self
    }

    pub fn add_used_letter(mut self, letter: char) -> Self {
        self.used_letters.insert(fold(letter));
        self
    }

    pub fn add_used_letters<I: IntoIterator<Item = char>>(self, letters: I) -> Self {
        letters
            .into_iter()
            .fold(self, |builder, letter| builder.add_used_letter(letter))
    }

    pub fn build(self) -> Query {
        Query {
            word_length: self.word_length,
            known_letters: self.known_letters,
            used_letters: self.used_letters,
        }
    }
}
