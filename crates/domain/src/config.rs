//! Application configuration structures
//!
//! Plain data carried from the loader into the rest of the application.
//! Every section has a `Default` so a missing config file or partial
//! environment still yields a runnable configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, HEALTH_CHECK_TIMEOUT_SECS, SCAN_COMPLETION_HOLD_MS,
    SCAN_TICK_INTERVAL_MS,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the analysis backend (e.g. `https://api.example.com`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout applied to the health check only; other calls run to
    /// settlement without a client-side deadline
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            health_timeout_secs: HEALTH_CHECK_TIMEOUT_SECS,
        }
    }
}

/// Scanning animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Interval between progress ticks in milliseconds
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Hold time after reaching 100% before the completion signal fires
    #[serde(default = "default_completion_hold")]
    pub completion_hold_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: SCAN_TICK_INTERVAL_MS,
            completion_hold_ms: SCAN_COMPLETION_HOLD_MS,
        }
    }
}

/// UI preference persistence configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Path of the preference file; `None` disables persistence
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_health_timeout() -> u64 {
    HEALTH_CHECK_TIMEOUT_SECS
}

fn default_tick_interval() -> u64 {
    SCAN_TICK_INTERVAL_MS
}

fn default_completion_hold() -> u64 {
    SCAN_COMPLETION_HOLD_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_production_fallback_url() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.health_timeout_secs, 3);
        assert_eq!(config.scan.tick_interval_ms, 50);
        assert!(config.preferences.path.is_none());
    }

    #[test]
    fn partial_file_sections_fall_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api": {"base_url": "http://localhost:8000"}}"#).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.health_timeout_secs, 3);
        assert_eq!(config.scan.completion_hold_ms, 300);
    }
}
