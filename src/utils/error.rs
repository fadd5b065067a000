use thiserror::Error;

#[derive(Error, Debug)]
pub enum UkpolError {
    #[error("Location not found for '{postcode}' - please make sure postcodes are entered in full without a space")]
    LocationNotFound { postcode: String },

    #[error("Response from {endpoint} is missing the '{field}' field")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl UkpolError {
    /// Process exit code for this error: 2 for user-input problems,
    /// 1 for upstream failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LocationNotFound { .. }
            | Self::ConfigError { .. }
            | Self::ValidationError { .. } => 2,
            Self::MissingField { .. } | Self::ApiError(_) | Self::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, UkpolError>;
