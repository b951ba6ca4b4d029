//! Upload→analyze pipeline with the degrade-to-demo policy

use std::sync::Arc;

use subsidyscope_domain::{AnalysisResult, DataOrigin, DocumentFile, Result};
use tracing::{debug, warn};

use super::demo::demo_report;
use super::ports::AnalysisBackend;

/// Settled result of one scan pipeline run
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Session id from the upload receipt; `None` on the demo path
    pub session_id: Option<String>,
    pub result: AnalysisResult,
    pub origin: DataOrigin,
    pub backend_available: bool,
}

impl ScanOutcome {
    /// Demonstration outcome for a failed or unreachable backend
    fn demo(backend_available: bool) -> Self {
        Self {
            session_id: None,
            result: demo_report(),
            origin: DataOrigin::Demo,
            backend_available,
        }
    }
}

/// Runs the critical upload→analyze path against the backend port
pub struct ScanService {
    backend: Arc<dyn AnalysisBackend>,
}

impl ScanService {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    /// Run the full pipeline, never failing
    ///
    /// Health check first; if the backend is reachable, upload then
    /// analyze. Unavailability or any pipeline failure (upload, analyze,
    /// decode) degrades to the fixed demonstration dataset instead of
    /// surfacing an error: the product must always reach a dashboard.
    /// The masked failure is logged here and recorded as
    /// `DataOrigin::Demo` on the outcome.
    pub async fn analyze(&self, documents: &[DocumentFile]) -> ScanOutcome {
        let backend_available = self.backend.check_health().await;
        if !backend_available {
            warn!("analysis backend unreachable; serving demonstration dataset");
            return ScanOutcome::demo(false);
        }

        match self.run_pipeline(documents).await {
            Ok((session_id, result)) => ScanOutcome {
                session_id: Some(session_id),
                result,
                origin: DataOrigin::Backend,
                backend_available: true,
            },
            Err(err) => {
                warn!(error = %err, "scan pipeline failed; serving demonstration dataset");
                ScanOutcome::demo(true)
            }
        }
    }

    async fn run_pipeline(&self, documents: &[DocumentFile]) -> Result<(String, AnalysisResult)> {
        let receipt = self.backend.upload_documents(documents).await?;
        debug!(
            session_id = %receipt.session_id,
            files_uploaded = receipt.files_uploaded,
            "documents uploaded"
        );

        let result = self.backend.analyze_documents(&receipt.session_id).await?;
        Ok((receipt.session_id, result))
    }
}

#[cfg(test)]
mod tests {
    use subsidyscope_domain::ScanError;

    use super::*;
    use crate::scan::demo::DEMO_SESSION_ID;
    use crate::testing::StubBackend;

    fn documents() -> Vec<DocumentFile> {
        vec![
            DocumentFile::new("ledger.pdf", vec![1, 2, 3]),
            DocumentFile::new("payroll.xlsx", vec![4, 5]),
        ]
    }

    #[tokio::test]
    async fn unreachable_backend_degrades_to_demo() {
        let backend = Arc::new(StubBackend::unreachable());
        let service = ScanService::new(backend.clone());

        let outcome = service.analyze(&documents()).await;

        assert!(!outcome.backend_available);
        assert!(outcome.origin.is_demo());
        assert_eq!(outcome.result.session_id, DEMO_SESSION_ID);
        assert_eq!(outcome.result.subsidies.len(), 5);
        // No upload is attempted once the health check fails
        assert_eq!(backend.upload_calls(), 0);
    }

    #[tokio::test]
    async fn upload_failure_degrades_to_demo() {
        let backend = StubBackend::healthy();
        backend.fail_upload(ScanError::UploadFailed("file type .zip not supported".into()));
        let service = ScanService::new(Arc::new(backend));

        let outcome = service.analyze(&documents()).await;

        assert!(outcome.backend_available, "health succeeded before the failure");
        assert!(outcome.origin.is_demo());
        assert_eq!(outcome.result.total_leakage, -14_200.0);
    }

    #[tokio::test]
    async fn analyze_failure_degrades_to_the_same_demo_outcome() {
        let backend = StubBackend::healthy();
        backend.fail_analyze(ScanError::AnalysisFailed("model exploded".into()));
        let service = ScanService::new(Arc::new(backend));

        let outcome = service.analyze(&documents()).await;

        assert!(outcome.origin.is_demo());
        assert!(outcome.session_id.is_none());
        assert_eq!(outcome.result.session_id, DEMO_SESSION_ID);
    }

    #[tokio::test]
    async fn healthy_pipeline_returns_live_data() {
        let backend = Arc::new(StubBackend::healthy());
        let service = ScanService::new(backend.clone());

        let outcome = service.analyze(&documents()).await;

        assert_eq!(outcome.origin, DataOrigin::Backend);
        assert_eq!(outcome.session_id.as_deref(), Some("s1"));
        assert_eq!(backend.upload_calls(), 1);
        assert_eq!(backend.analyze_calls(), 1);
        assert_eq!(backend.last_analyzed_session().as_deref(), Some("s1"));
    }
}
