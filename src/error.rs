//! Unified error hierarchy for PlanRS
//!
//! Most of the derivation pipeline reports problems as data (validation
//! results on the returned configurations); errors here cover the strict
//! flattening path, export IO, and configuration handling.

use crate::export::ExportError;
use crate::flatten::FlattenError;
use thiserror::Error;

/// Top-level error type for all PlanRS operations
#[derive(Debug, Error)]
pub enum PlanRsError {
    /// Strict flattening rejections
    #[error("Flatten error: {0}")]
    Flatten(#[from] FlattenError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for PlanRS operations
pub type Result<T> = std::result::Result<T, PlanRsError>;

impl PlanRsError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlanRsError::Flatten(_) => ErrorSeverity::Warning,
            PlanRsError::Validation(_) => ErrorSeverity::Warning,
            PlanRsError::Export(_) => ErrorSeverity::Error,
            PlanRsError::Io(_) => ErrorSeverity::Error,
            PlanRsError::Configuration(_) => ErrorSeverity::Error,
            PlanRsError::Internal(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PlanRsError::Flatten(FlattenError::InvalidConfiguration { reason }) => {
                format!(
                    "Stored focus data is malformed ({}). Re-save the selection before exporting.",
                    reason
                )
            }
            PlanRsError::Export(ExportError::UnsupportedFormat(format)) => {
                format!("Unknown export format '{}'. Use csv or json.", format)
            }
            PlanRsError::Configuration(reason) => {
                format!("Configuration problem: {}. Check your config file.", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = PlanRsError::Flatten(FlattenError::InvalidConfiguration {
            reason: "focus id is empty".to_string(),
        });
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = PlanRsError::Internal("test".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_messages() {
        let err = PlanRsError::Flatten(FlattenError::InvalidConfiguration {
            reason: "value key is empty".to_string(),
        });
        assert!(err.user_message().contains("Re-save"));

        let err = PlanRsError::Export(ExportError::UnsupportedFormat("xml".to_string()));
        assert!(err.user_message().contains("csv or json"));
    }
}
