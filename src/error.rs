//! Error types shared by the structure models, the sequencer and the judge.

use thiserror::Error;

/// Errors produced by the library.
///
/// Most of these are never surfaced to the user: the GUI logs them and
/// ignores the action, which is how invalid input and busy widgets behave.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VizError {
    /// Text that should have been a number (or other value) failed to parse.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    /// An animation sequence is already running for this widget.
    #[error("widget is busy animating")]
    Busy,

    /// The structure has nothing to remove or access.
    #[error("structure is empty")]
    Empty,

    /// Index-based access outside the current length.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length at the time of the request.
        len: usize,
    },

    /// No problem with that id in the catalog.
    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    /// Language key not one of java / cpp / python.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The embedded problem catalog could not be parsed.
    #[error("problem catalog is invalid: {0}")]
    Catalog(String),
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, VizError>;

/// Parses a user-typed integer, trimming surrounding whitespace.
pub fn parse_value(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| VizError::InvalidInput(text.to_string()))
}

/// Parses a user-typed index.
pub fn parse_index(text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| VizError::InvalidInput(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_signed_numbers() {
        assert_eq!(parse_value(" 42 "), Ok(42));
        assert_eq!(parse_value("-7"), Ok(-7));
    }

    #[test]
    fn test_parse_value_rejects_text() {
        assert_eq!(parse_value("abc"), Err(VizError::InvalidInput("abc".to_string())));
        assert!(parse_value("").is_err());
    }

    #[test]
    fn test_parse_index_rejects_negative() {
        assert!(parse_index("-1").is_err());
        assert_eq!(parse_index("3"), Ok(3));
    }
}
