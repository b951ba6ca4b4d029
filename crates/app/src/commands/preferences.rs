//! UI preference commands
//!
//! Preferences are loaded once at startup into the context and written
//! back on every change; nothing else touches the preference file.

use subsidyscope_domain::{CookieConsent, Result, ThemePreference, UiPreferences};
use tracing::info;

use crate::AppContext;

/// Current in-memory preferences
pub async fn current_preferences(ctx: &AppContext) -> UiPreferences {
    *ctx.preferences.lock().await
}

/// Flip between light and dark theme, persisting the choice
pub async fn toggle_theme(ctx: &AppContext) -> Result<ThemePreference> {
    let mut preferences = ctx.preferences.lock().await;
    preferences.theme = preferences.theme.toggled();
    persist(ctx, *preferences)?;

    info!(theme = ?preferences.theme, "theme toggled");
    Ok(preferences.theme)
}

/// Record the cookie banner decision, persisting the choice
pub async fn record_cookie_consent(ctx: &AppContext, consent: CookieConsent) -> Result<()> {
    let mut preferences = ctx.preferences.lock().await;
    preferences.cookie_consent = consent;
    persist(ctx, *preferences)?;

    info!(?consent, "cookie consent recorded");
    Ok(())
}

fn persist(ctx: &AppContext, preferences: UiPreferences) -> Result<()> {
    match &ctx.preference_store {
        Some(store) => store.save(preferences),
        None => Ok(()),
    }
}
