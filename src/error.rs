// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("API Error: authentication failed: {0}")]
    Auth(String),

    #[error("API Error: {status} {message}")]
    Api { status: u16, message: String },

    #[error("API Error: connection failed: {0}")]
    Network(String),

    #[error("File not found. Please provide a valid file path.")]
    FileNotFound,

    #[error("Unable to read file. Please ensure it's a text file (UTF-8 encoded).")]
    NotUtf8,

    #[error("File is too large. Please use a smaller file (< 100KB).")]
    TooLarge { chars: usize },

    #[error("File error: {0}")]
    File(#[source] std::io::Error),

    #[error("Error: {0}")]
    Other(String),
}

impl RelayError {
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound | Self::NotUtf8 | Self::TooLarge { .. } | Self::File(_)
        )
    }
}

impl From<std::io::Error> for RelayError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound,
            std::io::ErrorKind::InvalidData => Self::NotUtf8,
            _ => Self::File(e),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_map_to_input_variants() {
        let missing: RelayError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(missing, RelayError::FileNotFound));

        let garbled: RelayError = io::Error::new(io::ErrorKind::InvalidData, "bad utf-8").into();
        assert!(matches!(garbled, RelayError::NotUtf8));

        let denied: RelayError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(denied, RelayError::File(_)));
        assert!(denied.to_string().starts_with("File error: "));
    }

    #[test]
    fn api_errors_are_not_local() {
        let err = RelayError::Api {
            status: 429,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "API Error: 429 quota exceeded");
        assert!(!err.is_local());
        assert!(RelayError::TooLarge { chars: 100_001 }.is_local());
    }
}
