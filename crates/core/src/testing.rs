//! Test support: a configurable stub implementation of [`AnalysisBackend`]
//!
//! Compiled for this crate's own tests and, behind the `test-utils`
//! feature, for downstream crates' test suites.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use subsidyscope_domain::{
    AlertReceipt, AnalysisResult, BenchmarkSnapshot, CancelReceipt, DocumentFile,
    EmailAlertRequest, Result, ScanError, SubsidyCatalog, SubsidyOpportunity, UploadReceipt,
};

use crate::scan::demo::demo_report;
use crate::scan::AnalysisBackend;

/// Recorded interactions with the stub
#[derive(Debug, Default)]
struct CallLog {
    upload: usize,
    analyze: usize,
    alerts: usize,
    details: usize,
    last_analyzed_session: Option<String>,
    last_alert_request: Option<EmailAlertRequest>,
    last_detail_id: Option<String>,
}

/// In-memory backend double with configurable responses and call counters
pub struct StubBackend {
    healthy: AtomicBool,
    upload: Mutex<Result<UploadReceipt>>,
    analyze: Mutex<Result<AnalysisResult>>,
    results: Mutex<Result<AnalysisResult>>,
    catalog: Mutex<Result<SubsidyCatalog>>,
    detail: Mutex<Result<SubsidyOpportunity>>,
    alert: Mutex<Result<AlertReceipt>>,
    cancel: Mutex<Result<CancelReceipt>>,
    bench: Mutex<Result<BenchmarkSnapshot>>,
    calls: Mutex<CallLog>,
}

impl StubBackend {
    /// A reachable backend answering every call successfully
    pub fn healthy() -> Self {
        let report = demo_report();
        let subsidies = report.subsidies.clone();
        let first = subsidies[0].clone();
        Self {
            healthy: AtomicBool::new(true),
            upload: Mutex::new(Ok(UploadReceipt { session_id: "s1".into(), files_uploaded: 2 })),
            analyze: Mutex::new(Ok(report.clone())),
            results: Mutex::new(Ok(report)),
            catalog: Mutex::new(Ok(SubsidyCatalog { count: subsidies.len() as u32, subsidies })),
            detail: Mutex::new(Ok(first)),
            alert: Mutex::new(Ok(AlertReceipt {
                success: true,
                message: "Email alerts configured".into(),
                alert_id: Some("alert-1".into()),
            })),
            cancel: Mutex::new(Ok(CancelReceipt {
                success: true,
                message: "Alert cancelled successfully".into(),
            })),
            bench: Mutex::new(Ok(BenchmarkSnapshot {
                you: 23.0,
                competitors: 67.0,
                industry_average: Some(65.0),
            })),
            calls: Mutex::new(CallLog::default()),
        }
    }

    /// A backend whose health check fails
    pub fn unreachable() -> Self {
        let stub = Self::healthy();
        stub.healthy.store(false, Ordering::Relaxed);
        stub
    }

    /// Override the analysis response
    pub fn with_analysis(self, result: AnalysisResult) -> Self {
        *self.analyze.lock().unwrap() = Ok(result);
        self
    }

    /// Override the upload receipt
    pub fn with_upload(self, receipt: UploadReceipt) -> Self {
        *self.upload.lock().unwrap() = Ok(receipt);
        self
    }

    pub fn fail_upload(&self, err: ScanError) {
        *self.upload.lock().unwrap() = Err(err);
    }

    pub fn fail_analyze(&self, err: ScanError) {
        *self.analyze.lock().unwrap() = Err(err);
    }

    pub fn fail_alert(&self, err: ScanError) {
        *self.alert.lock().unwrap() = Err(err);
    }

    pub fn fail_detail(&self, err: ScanError) {
        *self.detail.lock().unwrap() = Err(err);
    }

    pub fn upload_calls(&self) -> usize {
        self.calls.lock().unwrap().upload
    }

    pub fn analyze_calls(&self) -> usize {
        self.calls.lock().unwrap().analyze
    }

    pub fn alert_calls(&self) -> usize {
        self.calls.lock().unwrap().alerts
    }

    pub fn detail_calls(&self) -> usize {
        self.calls.lock().unwrap().details
    }

    pub fn last_analyzed_session(&self) -> Option<String> {
        self.calls.lock().unwrap().last_analyzed_session.clone()
    }

    pub fn last_alert_request(&self) -> Option<EmailAlertRequest> {
        self.calls.lock().unwrap().last_alert_request.clone()
    }

    pub fn last_detail_id(&self) -> Option<String> {
        self.calls.lock().unwrap().last_detail_id.clone()
    }
}

#[async_trait]
impl AnalysisBackend for StubBackend {
    async fn check_health(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }

    async fn upload_documents(&self, _documents: &[DocumentFile]) -> Result<UploadReceipt> {
        self.calls.lock().unwrap().upload += 1;
        self.upload.lock().unwrap().clone()
    }

    async fn analyze_documents(&self, session_id: &str) -> Result<AnalysisResult> {
        let mut calls = self.calls.lock().unwrap();
        calls.analyze += 1;
        calls.last_analyzed_session = Some(session_id.to_string());
        drop(calls);
        self.analyze.lock().unwrap().clone()
    }

    async fn get_results(&self, _session_id: &str) -> Result<AnalysisResult> {
        self.results.lock().unwrap().clone()
    }

    async fn list_subsidies(&self) -> Result<SubsidyCatalog> {
        self.catalog.lock().unwrap().clone()
    }

    async fn subsidy_details(&self, subsidy_id: &str) -> Result<SubsidyOpportunity> {
        let mut calls = self.calls.lock().unwrap();
        calls.details += 1;
        calls.last_detail_id = Some(subsidy_id.to_string());
        drop(calls);
        self.detail.lock().unwrap().clone()
    }

    async fn setup_email_alert(&self, request: &EmailAlertRequest) -> Result<AlertReceipt> {
        let mut calls = self.calls.lock().unwrap();
        calls.alerts += 1;
        calls.last_alert_request = Some(request.clone());
        drop(calls);
        self.alert.lock().unwrap().clone()
    }

    async fn cancel_email_alert(&self, _alert_id: &str) -> Result<CancelReceipt> {
        self.cancel.lock().unwrap().clone()
    }

    async fn benchmark(&self) -> Result<BenchmarkSnapshot> {
        self.bench.lock().unwrap().clone()
    }
}
