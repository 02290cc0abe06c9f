use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Cannot connect to {url}: {source}")]
    ConnectError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out after {timeout:?}")]
    TimeoutError { url: String, timeout: Duration },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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
    Network,
    Response,
    Configuration,
    System,
}

impl SmokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmokeError::ConnectError { .. }
            | SmokeError::TimeoutError { .. }
            | SmokeError::ApiError(_) => ErrorCategory::Network,
            SmokeError::DecodeError(_) => ErrorCategory::Response,
            SmokeError::ConfigError { .. }
            | SmokeError::ConfigValidationError { .. }
            | SmokeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SmokeError::CsvError(_)
            | SmokeError::IoError(_)
            | SmokeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 連線失敗（包含逾時）時，後續測試仍會繼續執行
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            SmokeError::ConnectError { .. } | SmokeError::TimeoutError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SmokeError::ConnectError { url, .. } => {
                format!("Backend not reachable at {}", url)
            }
            SmokeError::TimeoutError { url, timeout } => {
                format!("No answer from {} within {:?}", url, timeout)
            }
            SmokeError::DecodeError(_) => "Backend returned a body that is not a JSON object".to_string(),
            SmokeError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            SmokeError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid value '{}' for {}: {}", value, field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend is running and the base URL is correct",
            ErrorCategory::Response => "Inspect the backend logs; the endpoint may be misconfigured",
            ErrorCategory::Configuration => "Fix the command-line flags or the TOML suite file",
            ErrorCategory::System => "Check that the report path is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let timeout = SmokeError::TimeoutError {
            url: "http://localhost:8000/".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert_eq!(timeout.category(), ErrorCategory::Network);
        assert!(timeout.is_connectivity());

        let config = SmokeError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert!(!config.is_connectivity());
    }

    #[test]
    fn test_user_friendly_message() {
        let err = SmokeError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert!(err.user_friendly_message().contains("base_url"));
        assert!(err.recovery_suggestion().contains("TOML"));
    }
}
