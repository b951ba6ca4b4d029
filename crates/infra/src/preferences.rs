//! Persistent UI preference store
//!
//! Theme and cookie-consent choices survive restarts through one small
//! JSON file with an explicit load-at-startup / save-on-change lifecycle.
//! The store is injected where it is needed; nothing reads or writes the
//! file ambiently.

use std::path::PathBuf;

use subsidyscope_domain::{Result, ScanError, UiPreferences};
use tracing::{debug, warn};

/// File-backed store for [`UiPreferences`]
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load preferences, falling back to defaults
    ///
    /// A missing file is the normal first-run case; an unreadable or
    /// malformed file is logged and also falls back, so a corrupt
    /// preference file can never block startup.
    pub fn load(&self) -> UiPreferences {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(preferences) => {
                    debug!(path = %self.path.display(), "preferences loaded");
                    preferences
                }
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "malformed preference file, using defaults");
                    UiPreferences::default()
                }
            },
            Err(_) => UiPreferences::default(),
        }
    }

    /// Persist preferences, creating parent directories as needed
    ///
    /// # Errors
    /// Returns `ScanError::Config` if the file cannot be written.
    pub fn save(&self, preferences: UiPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ScanError::Config(format!("Failed to create {}: {e}", parent.display())))?;
        }

        let contents = serde_json::to_string_pretty(&preferences)
            .map_err(|e| ScanError::Config(format!("Failed to encode preferences: {e}")))?;
        std::fs::write(&self.path, contents)
            .map_err(|e| ScanError::Config(format!("Failed to write {}: {e}", self.path.display())))?;

        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use subsidyscope_domain::{CookieConsent, ThemePreference};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path().join("preferences.json"));

        let preferences = store.load();
        assert_eq!(preferences.theme, ThemePreference::Light);
        assert_eq!(preferences.cookie_consent, CookieConsent::Unset);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested/preferences.json"));

        let preferences = UiPreferences {
            theme: ThemePreference::Dark,
            cookie_consent: CookieConsent::Accepted,
        };
        store.save(preferences).unwrap();

        assert_eq!(store.load(), preferences);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = PreferenceStore::new(path);
        assert_eq!(store.load(), UiPreferences::default());
    }

    #[test]
    fn theme_change_persists_across_stores() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let store = PreferenceStore::new(&path);
        let mut preferences = store.load();
        preferences.theme = preferences.theme.toggled();
        store.save(preferences).unwrap();

        // A fresh store (new process) sees the saved choice
        let reopened = PreferenceStore::new(&path);
        assert_eq!(reopened.load().theme, ThemePreference::Dark);
    }
}
