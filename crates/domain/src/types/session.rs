//! Client-side session state
//!
//! One scan session covers a single upload→analysis cycle. Nothing here
//! is persisted; a process restart is the only way back to `Upload`.

use serde::{Deserialize, Serialize};

use super::analysis::{AnalysisResult, DataOrigin};

/// The three phases of a scan session, strictly linear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPhase {
    Upload,
    Scanning,
    Dashboard,
}

/// In-memory application state owned by the session machine
///
/// Invariant: `phase == Dashboard` implies `result.is_some()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: ScanPhase,
    pub session_id: Option<String>,
    pub result: Option<AnalysisResult>,
    pub origin: DataOrigin,
    pub backend_available: bool,
    /// Last failure message for surfaced (non-masked) errors; transient
    pub error: Option<String>,
}

impl SessionState {
    /// Fresh state at the upload phase
    pub fn new() -> Self {
        Self {
            phase: ScanPhase::Upload,
            session_id: None,
            result: None,
            origin: DataOrigin::Backend,
            backend_available: true,
            error: None,
        }
    }

    /// Whether the dashboard is showing substituted demonstration data
    pub fn is_degraded(&self) -> bool {
        self.origin.is_demo() || !self.backend_available
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-memory document selected for upload
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }

    /// Size in kibibytes, for display
    pub fn size_kib(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }
}
