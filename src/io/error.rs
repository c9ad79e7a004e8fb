use std::fmt;

use thiserror::Error;

/// Line and column in a text input, both 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors from reading lens descriptions and glass catalogs.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A character or token that does not fit the grammar.
    #[error("{message} at {position}")]
    Syntax { message: String, position: Position },

    #[error("expected {expected}, but found end of input at {position}")]
    UnexpectedEof {
        expected: &'static str,
        position: Position,
    },

    #[error("invalid number '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },
}

pub type Result<T> = std::result::Result<T, ReadError>;
