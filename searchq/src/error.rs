//! Error types for searchq.

use std::fmt;

/// Why a character was rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Punctuation, symbol, whitespace or control character outside quotes.
    InvalidCharacter,
    /// A second unquoted `:` inside one clause.
    Duplicate,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::InvalidCharacter => "invalid character",
            Reason::Duplicate => "cannot appear more than once",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to parse a query string. A failed parse yields no nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// `pos` is the zero-based code point index of `ch` in the input.
    #[error("{reason}: \"{ch}\" at position {pos}")]
    InvalidCharacter { ch: char, pos: usize, reason: Reason },

    /// The scanner reached a state its transition table cannot produce.
    #[error("internal parse failure: {0}")]
    Internal(String),
}

impl ParseError {
    pub(crate) fn invalid(ch: char, pos: usize) -> Self {
        ParseError::InvalidCharacter {
            ch,
            pos,
            reason: Reason::InvalidCharacter,
        }
    }

    pub(crate) fn duplicate(ch: char, pos: usize) -> Self {
        ParseError::InvalidCharacter {
            ch,
            pos,
            reason: Reason::Duplicate,
        }
    }

    /// Code point position of the offending character, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::InvalidCharacter { pos, .. } => Some(*pos),
            ParseError::Internal(_) => None,
        }
    }

    /// The offending character, if any.
    pub fn character(&self) -> Option<char> {
        match self {
            ParseError::InvalidCharacter { ch, .. } => Some(*ch),
            ParseError::Internal(_) => None,
        }
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            ParseError::InvalidCharacter { reason, .. } => Some(*reason),
            ParseError::Internal(_) => None,
        }
    }
}

/// Errors from the configuration and front-end surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_display() {
        let err = ParseError::invalid('!', 3);
        assert_eq!(err.to_string(), "invalid character: \"!\" at position 3");
    }

    #[test]
    fn test_duplicate_display() {
        let err = ParseError::duplicate(':', 4);
        assert_eq!(
            err.to_string(),
            "cannot appear more than once: \":\" at position 4"
        );
    }

    #[test]
    fn test_accessors() {
        let err = ParseError::invalid('@', 0);
        assert_eq!(err.position(), Some(0));
        assert_eq!(err.character(), Some('@'));
        assert_eq!(err.reason(), Some(Reason::InvalidCharacter));

        let internal = ParseError::Internal("stuck".to_string());
        assert_eq!(internal.position(), None);
        assert_eq!(internal.reason(), None);
    }

    #[test]
    fn test_parse_error_converts() {
        let err: Error = ParseError::invalid('!', 1).into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: invalid character"));
    }
}
