//! Persisted UI preferences
//!
//! The only client-side state that survives a restart: the theme choice
//! and the cookie-consent decision. Carried as an explicit value through
//! the preference store rather than ambient global reads.

use serde::{Deserialize, Serialize};

/// Colour theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Cookie banner decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieConsent {
    #[default]
    Unset,
    Accepted,
    Declined,
}

/// The persisted preference set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default)]
    pub cookie_consent: CookieConsent,
}
