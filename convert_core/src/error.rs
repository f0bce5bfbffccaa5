//! Error types for the conversion engine.
//!
//! Every failure is recoverable by the caller: the UI keeps its previous
//! output and shows an inline notice built from [`ConvertError::kind`] and the
//! display message.

use thiserror::Error;

/// Failures reported by the registry and the transformation functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// No conversion is registered under this identifier.
    #[error("unknown conversion: {id}")]
    NotFound {
        /// Identifier the caller asked for
        id: String,
    },

    /// Input does not conform to the grammar the conversion expects.
    #[error("parse error: {0}")]
    Parse(String),

    /// Blank or whitespace-only input.
    #[error("nothing to convert")]
    EmptyInput,
}

/// Outcome of a single conversion: the output text or a classified failure.
pub type ConversionResult = Result<String, ConvertError>;

impl ConvertError {
    /// Create a not-found error for an identifier.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a parse error with a message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Stable classification tag surfaced to the UI.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::Parse(_) => "ParseError",
            Self::EmptyInput => "EmptyInput",
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::not_found("yaml_go");
        assert_eq!(err.to_string(), "unknown conversion: yaml_go");

        let err = ConvertError::parse("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "parse error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_error_kind_tags() {
        assert_eq!(ConvertError::not_found("x").kind(), "NotFound");
        assert_eq!(ConvertError::parse("x").kind(), "ParseError");
        assert_eq!(ConvertError::EmptyInput.kind(), "EmptyInput");
    }

    #[test]
    fn test_json_error_is_parse() {
        let err: ConvertError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "ParseError");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConvertError>();
    }
}
