//! Structured errors for tool consumers
//!
//! Errors are values: they carry a machine-readable code plus a message
//! and an optional hint, and serialize straight into a tool response.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const CONVERSION_ERROR: &str = "CONVERSION_ERROR";
}

/// Structured error returned across the tool boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertoError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ConvertoError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Provide a plain decimal such as 12.5 or 1e3")
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
    }

    pub fn missing_argument(tool: &str, arg: &str) -> Self {
        Self::new(codes::INVALID_ARGUMENT, format!("{}: missing argument '{}'", tool, arg))
            .with_suggestion("Call tools/list for the input schema")
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str) -> Self {
        Self::new(codes::INVALID_ARGUMENT,
            format!("{}: argument '{}' must be {}", tool, arg, expected))
    }

    pub fn unknown_category(name: &str, known: &[&str]) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", name))
            .with_suggestion(format!("Use one of: {}", known.join(", ")))
    }

    pub fn conversion(details: impl Into<String>) -> Self {
        Self::new(codes::CONVERSION_ERROR, format!("Conversion error: {}", details.into()))
    }
}

impl std::fmt::Display for ConvertoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertoError {}

impl From<NumberError> for ConvertoError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(s),
            NumberError::DivisionByZero => Self::div_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_suggestion() {
        let err = ConvertoError::unknown_category("Colour", &["Length", "Weight"]);
        assert_eq!(
            err.to_string(),
            "[UNKNOWN_CATEGORY] Unknown category: Colour (suggestion: Use one of: Length, Weight)"
        );
    }

    #[test]
    fn test_from_number_error() {
        let err: ConvertoError = NumberError::ParseError("x".to_string()).into();
        assert_eq!(err.code, codes::PARSE_ERROR);

        let err: ConvertoError = NumberError::DivisionByZero.into();
        assert_eq!(err.code, codes::DIV_ZERO);
    }

    #[test]
    fn test_serialize_skips_empty_suggestion() {
        let err = ConvertoError::conversion("unknown unit: furlongs");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["message"], "Conversion error: unknown unit: furlongs");
        assert!(json.get("suggestion").is_none());
    }
}
