use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaleryaError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl GaleryaError {
    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            GaleryaError::HttpError(_) => "An error occurred. Please try again.".to_string(),
            GaleryaError::IoError(e) => format!("Could not read a required file: {}", e),
            GaleryaError::SerializationError(_) => "Received malformed data.".to_string(),
            GaleryaError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            GaleryaError::ConfigError { message } => message.clone(),
            GaleryaError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            GaleryaError::ValidationError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GaleryaError>;
