//! Conversion errors surfaced by the converter

use thiserror::Error;
use converto_core::ConvertoError;

use crate::catalog::Category;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Rejected by the unit engine: unknown unit, incompatible dimensions,
    /// malformed expression. Displays the engine's own message.
    #[error(transparent)]
    Engine(#[from] converto_units::ConversionError),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl From<ConversionError> for ConvertoError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Engine(e) => ConvertoError::conversion(e.to_string()),
            ConversionError::UnknownCategory(name) => {
                ConvertoError::unknown_category(&name, &Category::names())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use converto_core::codes;

    #[test]
    fn test_engine_message_passes_through() {
        let err = ConversionError::from(converto_units::ConversionError::UnknownUnit("furlongs".into()));
        assert_eq!(err.to_string(), "unknown unit: furlongs");
    }

    #[test]
    fn test_into_tool_error() {
        let err: ConvertoError = ConversionError::UnknownCategory("Colour".into()).into();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);
        assert!(err.suggestion.unwrap().contains("Fuel Economy"));

        let err: ConvertoError =
            ConversionError::from(converto_units::ConversionError::UnknownUnit("x".into())).into();
        assert_eq!(err.code, codes::CONVERSION_ERROR);
        assert_eq!(err.message, "Conversion error: unknown unit: x");
    }
}
