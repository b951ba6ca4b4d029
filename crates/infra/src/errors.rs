//! Infrastructure error types and conversions into the domain error

use subsidyscope_domain::ScanError;
use thiserror::Error;

/// Adapter-local failures, converted into [`ScanError`] at the boundary
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<InfraError> for ScanError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Http(e) => ScanError::NetworkUnavailable(e.to_string()),
            InfraError::InvalidUrl(message) => ScanError::Config(message),
            InfraError::Io(e) => ScanError::Config(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_becomes_a_config_error() {
        let err: ScanError = InfraError::InvalidUrl("not a url".into()).into();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn io_errors_become_config_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ScanError = InfraError::Io(io).into();
        assert!(matches!(err, ScanError::Config(_)));
    }
}
