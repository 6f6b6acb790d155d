// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// Errors that can occur while parsing a JSON document.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// Input ended inside a string literal before the closing quote.
    UnterminatedString,
    /// No valid numeric prefix at the current position.
    InvalidNumber,
    /// A bare word did not match `true`, `false` or `null`.
    InvalidLiteral,
    /// An object key was not followed by `:`.
    MissingColon,
    /// An object member was not followed by `,` or `}`.
    MissingCommaOrBrace,
    /// An object member did not begin with a string key.
    ExpectedKey,
    /// Input ended in the middle of a value.
    UnexpectedEnd,
    /// Nesting exceeded the parser's depth limit.
    MaxDepthExceeded(usize),
    /// The input bytes were not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedString => write!(f, "unterminated string literal"),
            ParseError::InvalidNumber => write!(f, "invalid number"),
            ParseError::InvalidLiteral => write!(f, "invalid literal"),
            ParseError::MissingColon => write!(f, "expected ':' after object key"),
            ParseError::MissingCommaOrBrace => write!(f, "expected ',' or '}}' in object"),
            ParseError::ExpectedKey => write!(f, "expected string key in object"),
            ParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseError::MaxDepthExceeded(limit) => {
                write!(f, "nesting deeper than {limit} levels")
            }
            ParseError::InvalidUtf8(e) => write!(f, "invalid UTF-8: {e}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors from typed access into a parsed [`Value`](crate::Value).
///
/// Raised at the point of access; the rest of the tree stays usable.
#[derive(Debug, PartialEq)]
pub enum AccessError {
    /// The value holds a different variant than the one requested.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Object lookup with a key that is not present.
    KeyNotFound(String),
    /// Array lookup past the end of the array.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            AccessError::KeyNotFound(key) => write!(f, "key not found: {key:?}"),
            AccessError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
        }
    }
}

impl std::error::Error for AccessError {}

/// Errors from reading and parsing a document from disk.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// The file contents did not parse.
    Parse(ParseError),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        LoadError::Parse(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read file: {e}"),
            LoadError::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}
