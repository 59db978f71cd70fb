//! # WoF Solver
//!
//! Suggests words for a partially revealed word-guessing board.
//!
//! A [`DictionaryIndex`] groups the dictionary by word length once. Each board
//! word becomes a [`Query`] (length, revealed letters, wrong guesses) which
//! [`WordSearch`] matches against the bucket of same-length words, in
//! dictionary order and up to a result limit.

pub mod board;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod query;

pub use board::{Board, BoardWord, Cell, LetterBoard, LetterStatus};
pub use dictionary::DictionaryIndex;
pub use error::{BoardError, LoadError};
pub use matcher::{CompiledPattern, PositionRule, WordSearch};
pub use query::{Query, QueryBuilder};

/// Suggestions requested per board word
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Load the bundled word list, one word per line
pub fn load_dictionary() -> DictionaryIndex {
    DictionaryIndex::from_text(include_str!("../dictionary/words.txt"))
}
