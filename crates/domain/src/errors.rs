//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SubsidyScope
///
/// Variants mirror the failure taxonomy of the product: the critical
/// upload/analyze path, secondary flows (alerts, lookups), client-side
/// validation, and plumbing (configuration, internal misuse).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ScanError {
    #[error("Backend unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    ValidationFailed(String),

    #[error("Alert setup failed: {0}")]
    AlertSetupFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SubsidyScope operations
pub type Result<T> = std::result::Result<T, ScanError>;
