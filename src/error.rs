//! Error types for loading word sources and parsing boards.
//!
//! Searching never fails; only building a [`DictionaryIndex`](crate::DictionaryIndex)
//! from an external source or parsing a board description can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The word source could not supply its lines.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file-backed source could not be opened.
    #[error("failed to open word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A source failed part way through, e.g. on a line that is not UTF-8.
    #[error("failed to read word list{} at line {line}: {source}", in_file(.path))]
    Read {
        path: Option<PathBuf>,
        line: usize,
        #[source]
        source: io::Error,
    },
}

fn in_file(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl LoadError {
    /// Attach a path to a reader failure.
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            LoadError::Read { line, source, .. } => LoadError::Read {
                path: Some(path),
                line,
                source,
            },
            LoadError::Io { source, .. } => LoadError::Io { path, source },
        }
    }
}

/// A textual board description could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has {0} rows, at most {max} allowed", max = crate::board::ROW_COUNT)]
    TooManyRows(usize),
    #[error("row {row} has {len} cells, at most {max} allowed", max = crate::board::COLUMN_COUNT)]
    RowTooLong { row: usize, len: usize },
    #[error("unsupported cell {ch:?} at row {row}, column {column}")]
    InvalidCell { row: usize, column: usize, ch: char },
    #[error("corner cell at row {row}, column {column} cannot hold a glyph")]
    GlyphInCorner { row: usize, column: usize },
    #[error("no hidden glyph at row {row}, column {column}")]
    NotAGlyph { row: usize, column: usize },
    #[error("{0:?} is not a letter")]
    NotALetter(char),
}
