use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Response decoding failed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Decoding,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::ApiError(_) => ErrorCategory::Network,
            FetchError::DecodeError(_) => ErrorCategory::Decoding,
            FetchError::IoError(_) => ErrorCategory::Storage,
            FetchError::ConfigError { .. }
            | FetchError::ConfigValidationError { .. }
            | FetchError::InvalidConfigValueError { .. }
            | FetchError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Decoding | ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FetchError::ApiError(e) if e.is_connect() => {
                "Check network connectivity and that the endpoint is reachable".to_string()
            }
            FetchError::ApiError(e) if e.is_status() => {
                "The endpoint answered with an error status; confirm the URL points at the emoji API"
                    .to_string()
            }
            FetchError::ApiError(_) => "Retry later or verify the API endpoint".to_string(),
            FetchError::DecodeError(_) => {
                "The endpoint did not return valid JSON; verify the API URL".to_string()
            }
            FetchError::IoError(_) => {
                "Check the output path and filesystem permissions".to_string()
            }
            FetchError::ConfigError { .. } | FetchError::ConfigValidationError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            FetchError::InvalidConfigValueError { field, .. } => {
                format!("Adjust the value of '{}' and run again", field)
            }
            FetchError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::ApiError(_) => "Could not reach the emoji API".to_string(),
            FetchError::DecodeError(_) => {
                "The emoji API returned a response that is not valid JSON".to_string()
            }
            FetchError::IoError(_) => "Could not write the emoji record".to_string(),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
