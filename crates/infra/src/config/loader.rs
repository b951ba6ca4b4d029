//! Configuration loader
//!
//! Loads application configuration with a layered fallback strategy.
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults (including the hardcoded production
//!    base URL)
//! 2. Merge the first config file found among the probed paths
//! 3. Apply environment variable overrides on top
//!
//! ## Environment Variables
//! - `SUBSIDYSCOPE_API_URL`: Analysis backend base URL
//! - `SUBSIDYSCOPE_HEALTH_TIMEOUT_SECS`: Health check timeout in seconds
//! - `SUBSIDYSCOPE_SCAN_TICK_MS`: Scanning progress tick interval
//! - `SUBSIDYSCOPE_SCAN_HOLD_MS`: Hold time after the progress bar fills
//! - `SUBSIDYSCOPE_PREFERENCES_PATH`: UI preference file location
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./subsidyscope.json` or `./subsidyscope.toml`
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to the executable location

use std::path::{Path, PathBuf};

use subsidyscope_domain::{AppConfig, Result, ScanError};

/// Load configuration with the full fallback strategy
///
/// # Errors
/// Returns `ScanError::Config` if a config file exists but cannot be
/// parsed, or an environment override has an invalid value.
pub fn load() -> Result<AppConfig> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, starting from defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML, detected by file extension.
///
/// # Errors
/// Returns `ScanError::Config` if:
/// - The file does not exist (when a path is specified)
/// - No config file is found (when `path` is `None`)
/// - The file format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ScanError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ScanError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ScanError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration content; format detected by extension
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ScanError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ScanError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ScanError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend([
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("subsidyscope.json"),
            cwd.join("subsidyscope.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend([
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("subsidyscope.json"),
                exe_dir.join("subsidyscope.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Overlay `SUBSIDYSCOPE_*` environment variables onto a loaded config
fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    if let Ok(base_url) = std::env::var("SUBSIDYSCOPE_API_URL") {
        config.api.base_url = base_url;
    }
    if let Some(secs) = env_u64("SUBSIDYSCOPE_HEALTH_TIMEOUT_SECS")? {
        config.api.health_timeout_secs = secs;
    }
    if let Some(ms) = env_u64("SUBSIDYSCOPE_SCAN_TICK_MS")? {
        config.scan.tick_interval_ms = ms;
    }
    if let Some(ms) = env_u64("SUBSIDYSCOPE_SCAN_HOLD_MS")? {
        config.scan.completion_hold_ms = ms;
    }
    if let Ok(path) = std::env::var("SUBSIDYSCOPE_PREFERENCES_PATH") {
        config.preferences.path = Some(PathBuf::from(path));
    }
    Ok(())
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `ScanError::Config` if the variable is set but not a number.
fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ScanError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 5] = [
        "SUBSIDYSCOPE_API_URL",
        "SUBSIDYSCOPE_HEALTH_TIMEOUT_SECS",
        "SUBSIDYSCOPE_SCAN_TICK_MS",
        "SUBSIDYSCOPE_SCAN_HOLD_MS",
        "SUBSIDYSCOPE_PREFERENCES_PATH",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let mut config = AppConfig::default();
        apply_env_overrides(&mut config).unwrap();

        assert_eq!(config.api.base_url, subsidyscope_domain::constants::DEFAULT_API_BASE_URL);
        assert_eq!(config.api.health_timeout_secs, 3);
    }

    #[test]
    fn env_overrides_win_over_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SUBSIDYSCOPE_API_URL", "http://localhost:8000");
        std::env::set_var("SUBSIDYSCOPE_HEALTH_TIMEOUT_SECS", "7");
        std::env::set_var("SUBSIDYSCOPE_SCAN_TICK_MS", "25");

        let mut config = AppConfig::default();
        apply_env_overrides(&mut config).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.health_timeout_secs, 7);
        assert_eq!(config.scan.tick_interval_ms, 25);
        assert_eq!(config.scan.completion_hold_ms, 300, "untouched values keep defaults");

        clear_env();
    }

    #[test]
    fn invalid_numeric_override_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SUBSIDYSCOPE_HEALTH_TIMEOUT_SECS", "not-a-number");

        let mut config = AppConfig::default();
        let err = apply_env_overrides(&mut config).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));

        clear_env();
    }

    #[test]
    fn loads_json_config_file() {
        let json_content = r#"{
            "api": {
                "base_url": "http://localhost:9000",
                "health_timeout_secs": 5
            },
            "scan": {
                "tick_interval_ms": 40
            }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.health_timeout_secs, 5);
        assert_eq!(config.scan.tick_interval_ms, 40);
        assert_eq!(config.scan.completion_hold_ms, 300);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loads_toml_config_file() {
        let toml_content = r#"
[api]
base_url = "http://localhost:9001"

[scan]
tick_interval_ms = 30
completion_hold_ms = 150
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9001");
        assert_eq!(config.scan.completion_hold_ms, 150);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(br#"{ "api": "#).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(matches!(result, Err(ScanError::Config(_))));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let result = parse_config("whatever", &PathBuf::from("config.yaml"));
        assert!(matches!(result, Err(ScanError::Config(_))));
    }
}
