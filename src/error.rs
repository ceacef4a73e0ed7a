//! Error types for the json2pdf library.

use std::io;
use thiserror::Error;

/// Result type alias for json2pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during JSON to PDF conversion.
///
/// Failures are confined to the input boundary: once a document has parsed
/// and its options have validated, formatting, pagination, and PDF
/// serialization cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed JSON.
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document title property is empty.
    #[error("Document title must not be empty")]
    EmptyTitle,

    /// The font size property is not a positive integer.
    #[error("Font size must be a positive integer, got {0:?}")]
    InvalidFontSize(String),

    /// The include-keys property is not a boolean token.
    #[error("Include keys must be \"true\" or \"false\", got {0:?}")]
    InvalidIncludeKeys(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyTitle;
        assert_eq!(err.to_string(), "Document title must not be empty");

        let err = Error::InvalidFontSize("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Font size must be a positive integer, got \"abc\""
        );

        let err = Error::InvalidIncludeKeys("yes".to_string());
        assert_eq!(
            err.to_string(),
            "Include keys must be \"true\" or \"false\", got \"yes\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().starts_with("JSON parsing error:"));
    }
}
