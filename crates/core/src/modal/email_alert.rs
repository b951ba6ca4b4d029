//! Email alert subscription form

use std::collections::HashSet;
use std::time::Duration;

use subsidyscope_domain::constants::MODAL_SUCCESS_DISMISS_MS;
use subsidyscope_domain::{
    AlertKind, AlertReceipt, EmailAlertRequest, Result, ScanError,
};
use tracing::{debug, warn};

use super::ModalStatus;
use crate::scan::AnalysisBackend;

/// Form state for the email alert modal
///
/// Validation runs locally before any network call: an address without
/// `@` moves the form straight to `Error` with zero backend traffic.
#[derive(Debug)]
pub struct EmailAlertForm {
    email: String,
    selected: HashSet<AlertKind>,
    status: ModalStatus,
    message: Option<String>,
}

impl EmailAlertForm {
    /// Fresh form with the default alert selection enabled
    pub fn new() -> Self {
        Self {
            email: String::new(),
            selected: AlertKind::default_selection().into_iter().collect(),
            status: ModalStatus::Idle,
            message: None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Flip one alert kind on or off
    pub fn toggle(&mut self, kind: AlertKind) {
        if !self.selected.remove(&kind) {
            self.selected.insert(kind);
        }
    }

    pub fn is_selected(&self, kind: AlertKind) -> bool {
        self.selected.contains(&kind)
    }

    /// Currently toggled kinds, in presentation order
    pub fn selection(&self) -> Vec<AlertKind> {
        AlertKind::all().into_iter().filter(|kind| self.selected.contains(kind)).collect()
    }

    pub fn status(&self) -> ModalStatus {
        self.status
    }

    /// Outcome message shown in the success/error banner
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// How long a successful form stays visible before auto-dismissing
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(MODAL_SUCCESS_DISMISS_MS)
    }

    /// Reset to a fresh form (modal closed)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Submit the form
    ///
    /// Exactly one `setup_email_alert` call is issued per valid
    /// submission, carrying the currently toggled subset. Resubmission
    /// from `Error` is allowed; a submission already in flight is not.
    pub async fn submit(
        &mut self,
        backend: &dyn AnalysisBackend,
        session_id: &str,
    ) -> Result<AlertReceipt> {
        if self.status == ModalStatus::Loading {
            return Err(ScanError::Internal("alert submission already in flight".into()));
        }

        if !self.email.contains('@') {
            self.status = ModalStatus::Error;
            self.message = Some("Please enter a valid email address".into());
            return Err(ScanError::ValidationFailed(
                "email address must contain '@'".into(),
            ));
        }

        self.status = ModalStatus::Loading;
        let request = EmailAlertRequest {
            email: self.email.clone(),
            session_id: session_id.to_string(),
            alert_types: self.selection(),
        };

        debug!(email = %request.email, kinds = request.alert_types.len(), "submitting alert form");

        match backend.setup_email_alert(&request).await {
            Ok(receipt) => {
                self.status = ModalStatus::Success;
                self.message = Some(receipt.message.clone());
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "alert setup failed");
                self.status = ModalStatus::Error;
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl Default for EmailAlertForm {
    fn default() -> Self {
        Self::new()
    }
}
