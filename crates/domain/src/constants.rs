//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Backend configuration
pub const DEFAULT_API_BASE_URL: &str = "https://subsidyscope-backend.onrender.com";
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 3;

// Scanning progress configuration
pub const SCAN_TICK_INTERVAL_MS: u64 = 50;
pub const SCAN_COMPLETION_HOLD_MS: u64 = 300;
pub const SCAN_STAGE_PERCENT: u8 = 25;
pub const SCAN_PROGRESS_MAX: u8 = 100;

// Modal behaviour
pub const MODAL_SUCCESS_DISMISS_MS: u64 = 2000;

// Report export
pub const CSV_EXPORT_FILENAME: &str = "subsidy-analysis.csv";
