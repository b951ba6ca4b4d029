//! Subsidy detail lookup view

use subsidyscope_domain::{Result, ScanError, SubsidyOpportunity};
use tracing::warn;

use super::ModalStatus;
use crate::scan::AnalysisBackend;

/// Detail modal state around a single subsidy lookup
#[derive(Debug, Default)]
pub struct SubsidyDetailView {
    status: ModalStatus,
    subsidy: Option<SubsidyOpportunity>,
    message: Option<String>,
}

impl SubsidyDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ModalStatus {
        self.status
    }

    pub fn subsidy(&self) -> Option<&SubsidyOpportunity> {
        self.subsidy.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fetch details for one subsidy; retrying from `Error` is allowed
    pub async fn load(
        &mut self,
        backend: &dyn AnalysisBackend,
        subsidy_id: &str,
    ) -> Result<&SubsidyOpportunity> {
        if self.status == ModalStatus::Loading {
            return Err(ScanError::Internal("detail lookup already in flight".into()));
        }

        self.status = ModalStatus::Loading;
        match backend.subsidy_details(subsidy_id).await {
            Ok(subsidy) => {
                self.status = ModalStatus::Success;
                self.message = None;
                self.subsidy = Some(subsidy);
                // Stored on the line above, so present by construction
                self.subsidy
                    .as_ref()
                    .ok_or_else(|| ScanError::Internal("detail lookup lost its result".into()))
            }
            Err(err) => {
                warn!(subsidy_id, error = %err, "subsidy detail lookup failed");
                self.status = ModalStatus::Error;
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubBackend;

    #[tokio::test]
    async fn successful_lookup_holds_the_subsidy() {
        let backend = StubBackend::healthy();
        let mut view = SubsidyDetailView::new();

        let subsidy = view.load(&backend, "wbso-2024").await.unwrap();
        assert_eq!(subsidy.id, "wbso-2024");

        assert_eq!(view.status(), ModalStatus::Success);
        assert_eq!(backend.last_detail_id().as_deref(), Some("wbso-2024"));
    }

    #[tokio::test]
    async fn missing_subsidy_errors_and_permits_retry() {
        let backend = StubBackend::healthy();
        backend.fail_detail(ScanError::NotFound("Subsidy not found".into()));
        let mut view = SubsidyDetailView::new();

        assert!(view.load(&backend, "nope").await.is_err());
        assert_eq!(view.status(), ModalStatus::Error);
        assert!(view.subsidy().is_none());
        assert!(view.message().unwrap().contains("Subsidy not found"));

        let healthy = StubBackend::healthy();
        view.load(&healthy, "wbso-2024").await.unwrap();
        assert_eq!(view.status(), ModalStatus::Success);
        assert_eq!(healthy.detail_calls(), 1);
    }
}
