//! Length-indexed dictionary.
//!
//! The index is built once from an ordered word source and never mutated.
//! Words are grouped into buckets by length so a search only ever touches
//! words that could possibly fit the board. Within a bucket the source order
//! is kept, since it decides which matches survive a result limit.

use crate::error::LoadError;
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An immutable dictionary partitioned by word length.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    size: usize,
    by_length: HashMap<usize, Vec<String>>,
}

/// Length of a word in characters, not bytes.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

impl DictionaryIndex {
    /// Build the index from an ordered word sequence.
    ///
    /// Words are taken verbatim: no trimming, case folding or deduplication.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut size = 0;
        let mut by_length: HashMap<usize, Vec<String>> = HashMap::new();

        for word in words {
            let word = word.into();
            by_length.entry(word_length(&word)).or_default().push(word);
            size += 1;
        }

        debug!(
            "Built dictionary index: {} words in {} length buckets",
            size,
            by_length.len()
        );

        Self { size, by_length }
    }

    /// Build the index from in-memory text, one word per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Build the index from any buffered reader, one word per line.
    ///
    /// A trailing `\r` is stripped so CRLF files index the same as LF ones.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut words = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let mut line = line.map_err(|source| LoadError::Read {
                path: None,
                line: i + 1,
                source,
            })?;
            if line.ends_with('\r') {
                line.pop();
            }
            words.push(line);
        }
        Ok(Self::new(words))
    }

    /// Build the index from a UTF-8 file, one word per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| e.with_path(path.to_path_buf()))
    }

    /// All words of exactly `length` characters, in source order.
    ///
    /// Unknown lengths give an empty slice.
    pub fn bucket(&self, length: usize) -> &[String] {
        self.by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of words across all lengths.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The distinct word lengths present, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

impl<S: Into<String>> FromIterator<S> for DictionaryIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
