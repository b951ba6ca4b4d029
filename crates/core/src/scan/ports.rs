//! Port interfaces for the analysis backend
//!
//! These traits define the boundary between core business logic and the
//! HTTP adapter in the infra crate.

use async_trait::async_trait;
use subsidyscope_domain::{
    AlertReceipt, AnalysisResult, BenchmarkSnapshot, CancelReceipt, DocumentFile,
    EmailAlertRequest, Result, SubsidyCatalog, SubsidyOpportunity, UploadReceipt,
};

/// Trait for the external analysis backend
///
/// Implementations make exactly one network attempt per call; retrying is
/// deliberately not part of this contract.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Probe the backend root endpoint
    ///
    /// Returns `true` only on an HTTP success within the configured
    /// timeout; any network error, non-2xx status, or timeout yields
    /// `false`. Never fails.
    async fn check_health(&self) -> bool;

    /// Upload documents for analysis, opening a new session
    async fn upload_documents(&self, documents: &[DocumentFile]) -> Result<UploadReceipt>;

    /// Trigger analysis of a previously uploaded session
    async fn analyze_documents(&self, session_id: &str) -> Result<AnalysisResult>;

    /// Fetch the stored result of a completed session
    async fn get_results(&self, session_id: &str) -> Result<AnalysisResult>;

    /// List the full subsidy catalog
    async fn list_subsidies(&self) -> Result<SubsidyCatalog>;

    /// Fetch one subsidy by id
    async fn subsidy_details(&self, subsidy_id: &str) -> Result<SubsidyOpportunity>;

    /// Subscribe an email address to alert categories
    ///
    /// Callers validate the address client-side before invoking this; the
    /// backend contract does not re-check it.
    async fn setup_email_alert(&self, request: &EmailAlertRequest) -> Result<AlertReceipt>;

    /// Cancel an alert subscription
    async fn cancel_email_alert(&self, alert_id: &str) -> Result<CancelReceipt>;

    /// Fetch industry benchmark data
    async fn benchmark(&self) -> Result<BenchmarkSnapshot>;
}
