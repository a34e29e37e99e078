//! Error types for satorb.
//!
//! All fallible library functions return `Result<T, SatError>` instead of
//! panicking; the orbital core itself is total over its clamped input
//! domain and only the boundaries (config loading, request construction,
//! serialization, I/O) can fail.

use thiserror::Error;

/// Result type alias for satorb operations.
pub type SatResult<T> = Result<T, SatError>;

/// Unified error type for all satorb operations.
#[derive(Debug, Error)]
pub enum SatError {
    /// A request parameter failed validation.
    #[error("invalid parameter '{name}': {value} ({reason})")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Numerical instability detected (NaN or Inf).
    #[error("non-finite value detected at {location}")]
    NonFiniteValue {
        /// Location where the non-finite value was detected.
        location: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl SatError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error came from user-supplied parameters (recoverable
    /// at the input boundary by keeping the last valid values).
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::NonFiniteValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SatError::InvalidParameter {
            name: "mass_kg",
            value: -5.0,
            reason: "must be positive",
        };
        let msg = err.to_string();
        assert!(msg.contains("mass_kg"));
        assert!(msg.contains("must be positive"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_non_finite_display() {
        let err = SatError::NonFiniteValue {
            location: "altitude_km".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("non-finite"));
        assert!(msg.contains("altitude_km"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_config_error() {
        let err = SatError::config("bad window size");
        assert!(!err.is_input_error());
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("bad window size"));
    }

    #[test]
    fn test_serialization_error() {
        let err = SatError::serialization("payload too deep");
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn test_error_debug() {
        let err = SatError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
