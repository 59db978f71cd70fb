//! Pattern compilation and dictionary search.
//!
//! A [`Query`] is compiled once per search into one rule per position, then
//! the bucket of same-length words is scanned in dictionary order until the
//! result limit is reached.

use crate::dictionary::DictionaryIndex;
use crate::query::{fold, Query};
use log::{trace, warn};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// What a single position of a word must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRule {
    /// Must equal this (lowercased) letter, ignoring case.
    Exact(char),
    /// Must not be one of the used letters.
    Excluding,
    /// Anything goes.
    Any,
}

/// Per-position rules compiled from a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    rules: Vec<PositionRule>,
    excluded: BTreeSet<char>,
}

impl CompiledPattern {
    pub fn compile(query: &Query) -> Self {
        let rules = (0..query.word_length())
            .map(|i| match query.known_letter(i) {
                Some(letter) => PositionRule::Exact(fold(letter)),
                None if query.used_letters().is_empty() => PositionRule::Any,
                None => PositionRule::Excluding,
            })
            .collect();

        Self {
            rules,
            excluded: query.used_letters().clone(),
        }
    }

    pub fn rules(&self) -> &[PositionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether `word` has exactly one character per rule and every
    /// character passes its rule.
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for rule in &self.rules {
            let c = match chars.next() {
                Some(c) => fold(c),
                None => return false,
            };
            let ok = match *rule {
                PositionRule::Exact(letter) => c == letter,
                PositionRule::Excluding => !self.excluded.contains(&c),
                PositionRule::Any => true,
            };
            if !ok {
                return false;
            }
        }
        chars.next().is_none()
    }
}

/// Searches a [`DictionaryIndex`] for words fitting a [`Query`].
///
/// Holds only a shared reference, so any number of searches can run
/// against the same index at once.
#[derive(Debug, Clone, Copy)]
pub struct WordSearch<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> WordSearch<'a> {
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Every matching word. The dictionary size serves as the limit.
    pub fn search(&self, query: &Query) -> Vec<&'a str> {
        self.search_limit(query, self.index.size())
    }

    /// At most `limit` matching words, in dictionary order.
    pub fn search_limit(&self, query: &Query, limit: usize) -> Vec<&'a str> {
        if query.has_out_of_range_positions() {
            warn!(
                "Query {:?} has known letters beyond length {}; they are ignored",
                query.known_letters(),
                query.word_length()
            );
        }

        let pattern = CompiledPattern::compile(query);
        let matches: Vec<&'a str> = self
            .index
            .bucket(query.word_length())
            .iter()
            .filter(|word| pattern.matches(word))
            .take(limit)
            .map(String::as_str)
            .collect();

        trace!(
            "Search {} (length {}, limit {}) matched {} words",
            query.pattern(),
            query.word_length(),
            limit,
            matches.len()
        );
        matches
    }

    /// Number of matching words, without a limit.
    pub fn count(&self, query: &Query) -> usize {
        let pattern = CompiledPattern::compile(query);
        self.index
            .bucket(query.word_length())
            .iter()
            .filter(|word| pattern.matches(word))
            .count()
    }

    /// Run independent searches in parallel. Results line up with `queries`.
    pub fn search_all(&self, queries: &[Query], limit: usize) -> Vec<Vec<&'a str>> {
        queries
            .par_iter()
            .map(|query| self.search_limit(query, limit))
            .collect()
    }
}
