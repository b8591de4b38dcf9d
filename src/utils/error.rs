use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Browser automation failed: {message}")]
    Browser { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl LoginError {
    pub fn browser(message: impl Into<String>) -> Self {
        LoginError::Browser {
            message: message.into(),
        }
    }
}

impl From<chromiumoxide::error::CdpError> for LoginError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        LoginError::Browser {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoginError>;
