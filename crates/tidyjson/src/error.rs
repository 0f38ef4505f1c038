use thiserror::Error;

use std::io;

/// Category of a parse failure, independent of its free-text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input contained no tokens at all.
    Empty,
    /// The top-level value is not an object or an array.
    MissingContainer,
    /// A token appeared where the grammar does not allow it.
    UnexpectedSymbol,
    /// The token stream ended where a value was required.
    MissingValue,
    /// A required `:`, `}`, or `]` is absent.
    MissingSymbol,
    /// A bare literal that is neither a keyword nor a strict JSON number.
    InvalidLiteral,
    /// An object key that is not a string.
    InvalidKey,
    /// Bad escape, embedded control character, or unterminated string.
    InvalidString,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub(crate) fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        ParseError {
            kind,
            message: message.into(),
            line,
            column,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
