use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Fetch failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUriError { uri: String, reason: String },

    #[error("Unsupported URI scheme '{scheme}' (expected http, https, file or data)")]
    UnsupportedSchemeError { scheme: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Parsing,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExtractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExtractError::FetchError(_) => ErrorCategory::Network,
            ExtractError::IoError(_) => ErrorCategory::Io,
            ExtractError::SerializationError(_) => ErrorCategory::Parsing,
            ExtractError::InvalidUriError { .. } | ExtractError::UnsupportedSchemeError { .. } => {
                ErrorCategory::Configuration
            }
            ExtractError::ConfigValidationError { .. }
            | ExtractError::InvalidConfigValueError { .. }
            | ExtractError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A failed fetch in the interactive loop is retryable with another URI.
            ExtractError::FetchError(_)
            | ExtractError::InvalidUriError { .. }
            | ExtractError::UnsupportedSchemeError { .. } => ErrorSeverity::Medium,
            ExtractError::IoError(_) | ExtractError::SerializationError(_) => ErrorSeverity::High,
            ExtractError::ConfigValidationError { .. }
            | ExtractError::InvalidConfigValueError { .. }
            | ExtractError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExtractError::FetchError(e) => format!("Could not fetch the source content: {}", e),
            ExtractError::IoError(e) => format!("File operation failed: {}", e),
            ExtractError::SerializationError(e) => {
                format!("Could not serialize the extracted records: {}", e)
            }
            ExtractError::InvalidUriError { uri, reason } => {
                format!("The URI '{}' is not usable: {}", uri, reason)
            }
            ExtractError::UnsupportedSchemeError { scheme } => format!(
                "URIs with scheme '{}' are not supported; use http, https, file or data",
                scheme
            ),
            ExtractError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ExtractError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            ExtractError::MissingConfigError { field } => {
                format!("Required configuration '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check the URI and your network connection, then try again".to_string()
            }
            ErrorCategory::Io => {
                "Check that the output directory exists and is writable".to_string()
            }
            ErrorCategory::Parsing => {
                "Re-run with --verbose to inspect the offending content".to_string()
            }
            ErrorCategory::Configuration => {
                "Fix the flagged option (see --help) and re-run".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
