//! Error types and result aliases for the Semblance library.
//!
//! This module defines the core error type [`SemblanceError`] and the [`Result`] type alias
//! used throughout the library. All public APIs that can fail return `Result<T>` for
//! consistent error handling.
//!
//! The retrieval core performs no recovery of its own: provider failures, dimension
//! mismatches, and degenerate inputs are surfaced as typed variants and left to the
//! caller, which is the only layer with enough context to retry or fall back.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SemblanceError {
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("degenerate vector: zero magnitude")]
    DegenerateVector,

    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("LLM gateway error: {0}")]
    GatewayError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SemblanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SemblanceError::DimensionMismatch { left: 128, right: 5120 };
        assert_eq!(err.to_string(), "dimension mismatch: 128 vs 5120");
    }

    #[test]
    fn test_degenerate_vector_display() {
        let err = SemblanceError::DegenerateVector;
        assert_eq!(err.to_string(), "degenerate vector: zero magnitude");
    }

    #[test]
    fn test_empty_corpus_display() {
        let err = SemblanceError::EmptyCorpus;
        assert_eq!(err.to_string(), "corpus is empty");
    }

    #[test]
    fn test_gateway_error_display() {
        let err = SemblanceError::GatewayError("missing embedding field".to_string());
        assert_eq!(err.to_string(), "LLM gateway error: missing embedding field");
    }

    #[test]
    fn test_api_error_display() {
        let err = SemblanceError::ApiError("rate limit exceeded".to_string());
        assert_eq!(err.to_string(), "API error: rate limit exceeded");
    }

    #[test]
    fn test_config_error_display() {
        let err = SemblanceError::ConfigError("missing API token".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: missing API token");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SemblanceError = json_err.into();

        match err {
            SemblanceError::SerializationError(_) => {}
            _ => panic!("Expected SerializationError"),
        }
    }

    #[test]
    fn test_error_debug() {
        let err = SemblanceError::EmptyCorpus;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("EmptyCorpus"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<f32> = Ok(0.5);
        assert!(ok_result.is_ok());

        let err_result: Result<f32> = Err(SemblanceError::DegenerateVector);
        assert!(err_result.is_err());
    }
}
