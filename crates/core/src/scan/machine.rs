//! Scan session state machine
//!
//! Transitions are strictly linear: `Upload → Scanning → Dashboard`.
//! There is no backward transition; a process restart is the only reset.

use subsidyscope_domain::{Result, ScanError, ScanPhase, SessionState};
use tracing::{debug, info};

use super::service::ScanOutcome;

/// Owns the [`SessionState`] and enforces its transition rules
///
/// Invariant: the machine never enters `Dashboard` without a stored
/// analysis result.
#[derive(Debug, Default)]
pub struct SessionMachine {
    state: SessionState,
}

impl SessionMachine {
    /// Fresh machine at the upload phase
    pub fn new() -> Self {
        Self { state: SessionState::new() }
    }

    /// Current state, for rendering
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> ScanPhase {
        self.state.phase
    }

    /// `Upload → Scanning`, triggered by a submission
    ///
    /// Rejects an empty selection with `ValidationFailed` and stays in
    /// `Upload`. Otherwise clears any prior error and flips the phase
    /// synchronously, before any network activity resolves.
    pub fn begin_scan(&mut self, document_count: usize) -> Result<()> {
        if self.state.phase != ScanPhase::Upload {
            return Err(ScanError::Internal(format!(
                "cannot begin a scan from the {:?} phase",
                self.state.phase
            )));
        }
        if document_count == 0 {
            return Err(ScanError::ValidationFailed(
                "select at least one document before scanning".into(),
            ));
        }

        self.state.error = None;
        self.state.phase = ScanPhase::Scanning;
        info!(document_count, "scan started");
        Ok(())
    }

    /// Store the settled pipeline outcome while still scanning
    ///
    /// Data may arrive before the scanning animation finishes; the phase
    /// does not change here.
    pub fn record_outcome(&mut self, outcome: ScanOutcome) -> Result<()> {
        if self.state.phase != ScanPhase::Scanning {
            return Err(ScanError::Internal(format!(
                "outcome recorded in the {:?} phase",
                self.state.phase
            )));
        }

        debug!(
            origin = ?outcome.origin,
            backend_available = outcome.backend_available,
            subsidies = outcome.result.subsidies.len(),
            "analysis outcome recorded"
        );

        self.state.session_id = outcome.session_id;
        self.state.origin = outcome.origin;
        self.state.backend_available = outcome.backend_available;
        self.state.result = Some(outcome.result);
        Ok(())
    }

    /// `Scanning → Dashboard`, fired by the scanning completion signal
    ///
    /// Requires a recorded outcome so the dashboard invariant holds.
    pub fn complete_scan(&mut self) -> Result<()> {
        if self.state.phase != ScanPhase::Scanning {
            return Err(ScanError::Internal(format!(
                "scan completion signalled in the {:?} phase",
                self.state.phase
            )));
        }
        if self.state.result.is_none() {
            return Err(ScanError::Internal(
                "scan completion signalled before an outcome was recorded".into(),
            ));
        }

        self.state.phase = ScanPhase::Dashboard;
        info!(degraded = self.state.is_degraded(), "dashboard reached");
        Ok(())
    }

    /// Surface a transient error message (secondary flows only)
    pub fn surface_error(&mut self, message: impl Into<String>) {
        self.state.error = Some(message.into());
    }

    /// Clear the transient error message
    pub fn clear_error(&mut self) {
        self.state.error = None;
    }
}
