//! Error types for the portfolio site

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Remote request could not be completed
    #[error("Network error: {0}")]
    Network(String),

    /// Remote service answered with a non-success status
    #[error("Remote store returned status {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    /// A fetched document did not have the expected shape
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Contact form failed validation
    #[error("Invalid contact form: {0}")]
    InvalidForm(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for PortfolioError {
    fn from(err: reqwest::Error) -> Self {
        PortfolioError::Network(err.to_string())
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::RemoteStatus {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Remote store returned status 503: unavailable"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
