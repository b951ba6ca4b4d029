//! Application context - dependency injection container

use std::sync::Arc;

use subsidyscope_core::{AnalysisBackend, SessionMachine};
use subsidyscope_domain::{AppConfig, Result, UiPreferences};
use subsidyscope_infra::{BackendClient, PreferenceStore};
use tokio::sync::{Mutex, RwLock};

/// Holds all services and shared state for one application instance
///
/// The session machine is the single mutable owner of scan state; every
/// command takes the lock for the duration of its transition, so state
/// is never observed mid-mutation.
pub struct AppContext {
    pub config: AppConfig,
    pub backend: Arc<dyn AnalysisBackend>,
    pub session: RwLock<SessionMachine>,
    /// In-memory preference value, loaded once at startup
    pub preferences: Mutex<UiPreferences>,
    /// Backing store; `None` disables persistence
    pub preference_store: Option<PreferenceStore>,
}

impl AppContext {
    /// Build a context against the real HTTP backend
    ///
    /// # Errors
    /// Returns `ScanError::Config` if the backend client cannot be
    /// constructed from the configuration.
    pub fn new(config: AppConfig) -> Result<Self> {
        let backend: Arc<dyn AnalysisBackend> = Arc::new(BackendClient::new(&config.api)?);
        Ok(Self::with_backend(config, backend))
    }

    /// Build a context around an arbitrary backend implementation
    ///
    /// Used by tests to substitute a stub for the HTTP adapter.
    pub fn with_backend(config: AppConfig, backend: Arc<dyn AnalysisBackend>) -> Self {
        let preference_store = config.preferences.path.clone().map(PreferenceStore::new);
        let preferences = preference_store.as_ref().map(PreferenceStore::load).unwrap_or_default();

        Self {
            config,
            backend,
            session: RwLock::new(SessionMachine::new()),
            preferences: Mutex::new(preferences),
            preference_store,
        }
    }
}
