//! Structured logging helpers for the command layer

use std::time::Duration;

use subsidyscope_domain::ScanError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"scan::run_scan"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape
/// consistent. Callers must avoid forwarding sensitive values in
/// `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `ScanError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ScanError) -> &'static str {
    match error {
        ScanError::NetworkUnavailable(_) => "network_unavailable",
        ScanError::UploadFailed(_) => "upload_failed",
        ScanError::AnalysisFailed(_) => "analysis_failed",
        ScanError::NotFound(_) => "not_found",
        ScanError::ValidationFailed(_) => "validation_failed",
        ScanError::AlertSetupFailed(_) => "alert_setup_failed",
        ScanError::Config(_) => "config",
        ScanError::Internal(_) => "internal",
    }
}
