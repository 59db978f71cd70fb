//! Game board bookkeeping.
//!
//! The board is a fixed grid of cells. Runs of glyph cells within a row are
//! the words a player is trying to solve; each one becomes a [`Query`] using
//! the letters revealed so far and the letters already guessed wrong.

use crate::error::BoardError;
use crate::matcher::WordSearch;
use crate::query::{fold, Query, QueryBuilder, HIDDEN_MARKERS};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub const ROW_COUNT: usize = 4;
pub const COLUMN_COUNT: usize = 14;

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Corner cells that are not part of the playing area.
    Unused,
    /// A playing cell with no glyph, e.g. the gap between two words.
    Blank,
    /// A glyph that has not been revealed yet.
    Hidden,
    /// A revealed glyph.
    Revealed(char),
}

impl Cell {
    pub fn is_glyph(self) -> bool {
        matches!(self, Cell::Hidden | Cell::Revealed(_))
    }

    fn parse(c: char) -> Option<Self> {
        match c {
            ' ' | '#' => Some(Cell::Blank),
            c if HIDDEN_MARKERS.contains(&c) => Some(Cell::Hidden),
            c if c.is_alphabetic() => Some(Cell::Revealed(c)),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Unused | Cell::Blank => ' ',
            Cell::Hidden => '_',
            Cell::Revealed(c) => c,
        }
    }
}

fn is_corner(row: usize, column: usize) -> bool {
    (row == 0 || row == ROW_COUNT - 1) && (column == 0 || column == COLUMN_COUNT - 1)
}

/// A word on the board: a horizontal run of glyph cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardWord {
    pub row: usize,
    pub column: usize,
    cells: Vec<Option<char>>,
}

impl BoardWord {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Revealed letters keyed by position within the word.
    pub fn known_letters(&self) -> BTreeMap<usize, char> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (i, c)))
            .collect()
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The word as a pattern, `_` for hidden glyphs.
    pub fn pattern(&self) -> String {
        self.cells.iter().map(|c| c.unwrap_or('_')).collect()
    }

    pub fn to_query<I: IntoIterator<Item = char>>(&self, used_letters: I) -> Query {
        self.known_letters()
            .into_iter()
            .fold(
                QueryBuilder::new().set_word_length(self.len()),
                |builder, (i, c)| builder.add_known_letter(i, c),
            )
            .add_used_letters(used_letters)
            .build()
    }
}

/// The full board grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLUMN_COUNT]; ROW_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        let mut cells = [[Cell::Blank; COLUMN_COUNT]; ROW_COUNT];
        for (row, line) in cells.iter_mut().enumerate() {
            for (column, cell) in line.iter_mut().enumerate() {
                if is_corner(row, column) {
                    *cell = Cell::Unused;
                }
            }
        }
        Self { cells }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a board from text, one line per row.
    ///
    /// `#` or space is a blank cell, `_`, `.`, `?`, `-` or `*` a hidden glyph,
    /// and a letter a revealed glyph. Short rows are padded with blanks.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() > ROW_COUNT {
            return Err(BoardError::TooManyRows(lines.len()));
        }

        let mut board = Self::new();
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len > COLUMN_COUNT {
                return Err(BoardError::RowTooLong { row, len });
            }
            for (column, ch) in line.chars().enumerate() {
                let cell = Cell::parse(ch).ok_or(BoardError::InvalidCell { row, column, ch })?;
                if is_corner(row, column) {
                    if cell.is_glyph() {
                        return Err(BoardError::GlyphInCorner { row, column });
                    }
                    continue;
                }
                board.cells[row][column] = cell;
            }
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Reveal `letter` in a glyph cell.
    pub fn reveal(&mut self, row: usize, column: usize, letter: char) -> Result<(), BoardError> {
        if !letter.is_alphabetic() {
            return Err(BoardError::NotALetter(letter));
        }
        match self.cells.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) if cell.is_glyph() => {
                *cell = Cell::Revealed(letter);
                Ok(())
            }
            _ => Err(BoardError::NotAGlyph { row, column }),
        }
    }

    /// Hide every revealed glyph again, keeping the layout.
    pub fn clear_letters(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if let Cell::Revealed(_) = cell {
                *cell = Cell::Hidden;
            }
        }
    }

    /// Words in reading order: rows top to bottom, runs left to right.
    pub fn words(&self) -> Vec<BoardWord> {
        let mut words = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            let mut current: Option<BoardWord> = None;
            for (column, &cell) in line.iter().enumerate() {
                match cell {
                    Cell::Hidden | Cell::Revealed(_) => {
                        let letter = match cell {
                            Cell::Revealed(c) => Some(c),
                            _ => None,
                        };
                        current
                            .get_or_insert_with(|| BoardWord {
                                row,
                                column,
                                cells: Vec::new(),
                            })
                            .cells
                            .push(letter);
                    }
                    Cell::Unused | Cell::Blank => words.extend(current.take()),
                }
            }
            words.extend(current);
        }
        words
    }

    /// Distinct revealed letters, lowercased.
    pub fn revealed_letters(&self) -> BTreeSet<char> {
        self.cells
            .iter()
            .flatten()
            .filter_map(|cell| match cell {
                Cell::Revealed(c) => Some(fold(*c)),
                _ => None,
            })
            .collect()
    }

    /// Suggestions for every word on the board that still has hidden glyphs.
    pub fn suggestions<'a>(
        &self,
        search: &WordSearch<'a>,
        letters: &LetterBoard,
        limit: usize,
    ) -> Vec<(BoardWord, Vec<&'a str>)> {
        let words: Vec<BoardWord> = self.words().into_iter().filter(|w| !w.is_solved()).collect();
        let used = letters.used_letters(self);
        let queries: Vec<Query> = words
            .iter()
            .map(|w| w.to_query(used.iter().copied()))
            .collect();
        words.into_iter().zip(search.search_all(&queries, limit)).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}

/// Status of an alphabet letter during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Not guessed yet.
    Unknown,
    /// On the board.
    Correct,
    /// Guessed and not on the board.
    Incorrect,
}

/// Letters the player has guessed wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBoard {
    incorrect: BTreeSet<char>,
}

impl LetterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_incorrect(&mut self, letter: char) {
        self.incorrect.insert(fold(letter));
    }

    pub fn unmark(&mut self, letter: char) {
        self.incorrect.remove(&fold(letter));
    }

    pub fn incorrect(&self) -> &BTreeSet<char> {
        &self.incorrect
    }

    pub fn reset(&mut self) {
        self.incorrect.clear();
    }

    /// Wrong guesses that are not on the board, i.e. the letters a search
    /// should exclude.
    pub fn used_letters(&self, board: &Board) -> BTreeSet<char> {
        self.incorrect
            .difference(&board.revealed_letters())
            .copied()
            .collect()
    }

    /// A letter on the board counts as correct even if it was also marked
    /// incorrect.
    pub fn status(&self, letter: char, board: &Board) -> LetterStatus {
        self.classify(fold(letter), &board.revealed_letters())
    }

    /// Status of every letter `a` to `z`.
    pub fn statuses(&self, board: &Board) -> Vec<(char, LetterStatus)> {
        let revealed = board.revealed_letters();
        ('a'..='z').map(|c| (c, self.classify(c, &revealed))).collect()
    }

    fn classify(&self, letter: char, revealed: &BTreeSet<char>) -> LetterStatus {
        if revealed.contains(&letter) {
            LetterStatus::Correct
        } else if self.incorrect.contains(&letter) {
            LetterStatus::Incorrect
        } else {
            LetterStatus::Unknown
        }
    }
}
