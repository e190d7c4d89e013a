use crate::domain::model::{CreatorId, ProductKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Invalid product handle {handle}: {reason}")]
    InvalidHandle { handle: String, reason: String },

    #[error("Failed to create product {kind}: {reason}")]
    CreationFailed { kind: ProductKind, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lifecycle,
    Creation,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FactoryError {
    pub fn invalid_handle(issuer: CreatorId, owner: CreatorId) -> Self {
        FactoryError::InvalidHandle {
            handle: issuer.to_string(),
            reason: format!("handle was issued by {}, not by {}", issuer, owner),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FactoryError::InvalidHandle { .. } => ErrorCategory::Lifecycle,
            FactoryError::CreationFailed { .. } => ErrorCategory::Creation,
            FactoryError::IoError(_) => ErrorCategory::Io,
            FactoryError::ConfigError { .. }
            | FactoryError::ConfigValidationError { .. }
            | FactoryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lifecycle => ErrorSeverity::High,
            ErrorCategory::Creation => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FactoryError::InvalidHandle { .. } => {
                "A product was returned to a creator that did not create it".to_string()
            }
            FactoryError::CreationFailed { kind, .. } => {
                format!("Could not create product {}", kind)
            }
            FactoryError::IoError(e) => format!("Could not write output: {}", e),
            FactoryError::ConfigError { message } => format!("Configuration problem: {}", message),
            FactoryError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            FactoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Lifecycle => "Return each product to the creator that produced it",
            ErrorCategory::Creation => "Retry the run; the creator may be temporarily exhausted",
            ErrorCategory::Io => "Check that stdout is writable",
            ErrorCategory::Configuration => "Fix the configuration file or CLI flags and rerun",
        }
    }
}

pub type Result<T> = std::result::Result<T, FactoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_handle_message_names_both_creators() {
        let err = FactoryError::invalid_handle(CreatorId::from_raw(3), CreatorId::from_raw(7));
        let message = err.to_string();

        assert!(message.contains("creator-3"));
        assert!(message.contains("creator-7"));
        assert_eq!(err.category(), ErrorCategory::Lifecycle);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_creation_failed_is_retryable() {
        let err = FactoryError::CreationFailed {
            kind: ProductKind::B,
            reason: "exhausted".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Creation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "Could not create product B");
    }

    #[test]
    fn test_io_error_converts() {
        let err: FactoryError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
