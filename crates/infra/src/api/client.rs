//! HTTP client for the analysis backend
//!
//! Implements the [`AnalysisBackend`] port with exactly one network
//! attempt per operation. There is no retry, no backoff and no
//! cancellation; only the health check carries a deadline. Failure
//! masking (degrade-to-demo) happens upstream in the core scan service —
//! this adapter reports failures faithfully.

use async_trait::async_trait;
use reqwest::{multipart, Method, Response, StatusCode};
use subsidyscope_core::AnalysisBackend;
use subsidyscope_domain::{
    AlertReceipt, AnalysisResult, ApiConfig, BenchmarkSnapshot, CancelReceipt, DocumentFile,
    EmailAlertRequest, Result, ScanError, SubsidyCatalog, SubsidyOpportunity, UploadReceipt,
};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, instrument, warn};

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Reqwest-backed adapter for the analysis backend
#[derive(Debug)]
pub struct BackendClient {
    http: HttpClient,
    base_url: String,
    health_timeout: Duration,
}

impl BackendClient {
    /// Create a client against the configured base URL
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Config` if the base URL does not parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|e| {
            ScanError::from(InfraError::InvalidUrl(format!("{}: {e}", config.base_url)))
        })?;

        let http = HttpClient::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            health_timeout: Duration::from_secs(config.health_timeout_secs),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, folding decode failures into the
    /// operation's error variant
    async fn decode<T, F>(response: Response, into_error: F) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce(String) -> ScanError,
    {
        response
            .json()
            .await
            .map_err(|e| into_error(format!("unexpected response body: {e}")))
    }

    /// Extract the backend's `detail` message from a failed response,
    /// falling back to the operation's fixed default
    async fn failure_message(response: Response, default: &str) -> String {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or_else(|| default.to_string())
    }
}

#[async_trait]
impl AnalysisBackend for BackendClient {
    /// Probe the backend root endpoint with the configured deadline
    ///
    /// `true` only on HTTP success; any network error, non-2xx status or
    /// timeout yields `false`. Never raises.
    #[instrument(skip(self))]
    async fn check_health(&self) -> bool {
        let url = format!("{}/", self.base_url);
        debug!(%url, "health check");

        let request = self.http.request(Method::GET, &url);
        match timeout(self.health_timeout, self.http.send(request)).await {
            Ok(Ok(response)) if response.status().is_success() => {
                info!("analysis backend is healthy");
                true
            }
            Ok(Ok(response)) => {
                warn!(status = %response.status(), "backend returned non-success status");
                false
            }
            Ok(Err(err)) => {
                warn!(error = %err, "health check failed");
                false
            }
            Err(_) => {
                warn!(timeout = ?self.health_timeout, "health check timed out");
                false
            }
        }
    }

    /// Upload documents as a multipart form with the repeated field `files`
    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn upload_documents(&self, documents: &[DocumentFile]) -> Result<UploadReceipt> {
        let mut form = multipart::Form::new();
        for document in documents {
            let part =
                multipart::Part::bytes(document.bytes.clone()).file_name(document.name.clone());
            form = form.part("files", part);
        }

        let request = self.http.request(Method::POST, self.url("/api/upload")).multipart(form);
        let response = self.http.send(request).await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Upload failed").await;
            return Err(ScanError::UploadFailed(message));
        }

        let receipt: UploadReceipt = Self::decode(response, ScanError::UploadFailed).await?;
        info!(session_id = %receipt.session_id, files = receipt.files_uploaded, "upload accepted");
        Ok(receipt)
    }

    #[instrument(skip(self))]
    async fn analyze_documents(&self, session_id: &str) -> Result<AnalysisResult> {
        let request =
            self.http.request(Method::POST, self.url(&format!("/api/analyze/{session_id}")));
        let response = self.http.send(request).await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Analysis failed").await;
            return Err(ScanError::AnalysisFailed(message));
        }

        let result: AnalysisResult = Self::decode(response, ScanError::AnalysisFailed).await?;
        info!(subsidies = result.subsidies.len(), "analysis completed");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn get_results(&self, session_id: &str) -> Result<AnalysisResult> {
        let request =
            self.http.request(Method::GET, self.url(&format!("/api/results/{session_id}")));
        let response = self.http.send(request).await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Failed to fetch results").await;
            return Err(ScanError::NotFound(message));
        }

        Self::decode(response, ScanError::AnalysisFailed).await
    }

    #[instrument(skip(self))]
    async fn list_subsidies(&self) -> Result<SubsidyCatalog> {
        let request = self.http.request(Method::GET, self.url("/api/subsidies"));
        let response = self.http.send(request).await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Failed to fetch subsidies").await;
            return Err(ScanError::NotFound(message));
        }

        Self::decode(response, ScanError::NotFound).await
    }

    #[instrument(skip(self))]
    async fn subsidy_details(&self, subsidy_id: &str) -> Result<SubsidyOpportunity> {
        let request =
            self.http.request(Method::GET, self.url(&format!("/api/subsidy/{subsidy_id}")));
        let response = self.http.send(request).await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Subsidy not found").await;
            return Err(ScanError::NotFound(message));
        }

        Self::decode(response, ScanError::NotFound).await
    }

    /// Subscribe an email address; the address is validated by the caller
    #[instrument(skip(self, request), fields(kinds = request.alert_types.len()))]
    async fn setup_email_alert(&self, request: &EmailAlertRequest) -> Result<AlertReceipt> {
        let http_request =
            self.http.request(Method::POST, self.url("/api/alerts/email")).json(request);
        let response = self.http.send(http_request).await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Failed to set up alerts").await;
            return Err(ScanError::AlertSetupFailed(message));
        }

        let receipt: AlertReceipt = Self::decode(response, ScanError::AlertSetupFailed).await?;
        info!(alert_id = ?receipt.alert_id, "email alert configured");
        Ok(receipt)
    }

    #[instrument(skip(self))]
    async fn cancel_email_alert(&self, alert_id: &str) -> Result<CancelReceipt> {
        let request =
            self.http.request(Method::DELETE, self.url(&format!("/api/alerts/{alert_id}")));
        let response = self.http.send(request).await?;

        if !response.status().is_success() {
            let default = if response.status() == StatusCode::NOT_FOUND {
                "Alert not found"
            } else {
                "Failed to cancel alert"
            };
            let message = Self::failure_message(response, default).await;
            return Err(ScanError::AlertSetupFailed(message));
        }

        Self::decode(response, ScanError::AlertSetupFailed).await
    }

    #[instrument(skip(self))]
    async fn benchmark(&self) -> Result<BenchmarkSnapshot> {
        let request = self.http.request(Method::GET, self.url("/api/benchmark"));
        let response = self.http.send(request).await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Failed to fetch benchmark data").await;
            return Err(ScanError::NotFound(message));
        }

        Self::decode(response, ScanError::NotFound).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> BackendClient {
        let config = ApiConfig { base_url: server.uri(), health_timeout_secs: 1 };
        BackendClient::new(&config).unwrap()
    }

    fn documents() -> Vec<DocumentFile> {
        vec![
            DocumentFile::new("ledger.pdf", b"%PDF-1.4".to_vec()),
            DocumentFile::new("payroll.csv", b"name,amount".to_vec()),
        ]
    }

    #[test]
    fn malformed_base_url_is_rejected_at_construction() {
        let config = ApiConfig { base_url: "not a url".into(), health_timeout_secs: 3 };
        let err = BackendClient::new(&config).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[tokio::test]
    async fn health_check_true_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(client_for(&server).check_health().await);
    }

    #[tokio::test]
    async fn health_check_false_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(!client_for(&server).check_health().await);
    }

    #[tokio::test]
    async fn health_check_false_on_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        assert!(!client_for(&server).check_health().await);
    }

    #[tokio::test]
    async fn health_check_false_on_connection_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config =
            ApiConfig { base_url: format!("http://{addr}"), health_timeout_secs: 1 };
        let client = BackendClient::new(&config).unwrap();
        assert!(!client.check_health().await);
    }

    #[tokio::test]
    async fn upload_posts_multipart_and_parses_receipt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sessionId": "abc-123",
                "filesUploaded": 2,
                "message": "Documents uploaded successfully. Ready for analysis."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = client_for(&server).upload_documents(&documents()).await.unwrap();
        assert_eq!(receipt.session_id, "abc-123");
        assert_eq!(receipt.files_uploaded, 2);

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"files\""));
        assert!(body.contains("filename=\"ledger.pdf\""));
        assert!(body.contains("filename=\"payroll.csv\""));
    }

    #[tokio::test]
    async fn upload_failure_carries_the_backend_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "detail": "File type .zip not supported. Allowed: .pdf, .xlsx, .xls, .csv"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).upload_documents(&documents()).await.unwrap_err();
        match err {
            ScanError::UploadFailed(message) => {
                assert!(message.contains(".zip not supported"));
            }
            other => panic!("expected UploadFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upload_failure_without_detail_uses_the_default_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).upload_documents(&documents()).await.unwrap_err();
        match err {
            ScanError::UploadFailed(message) => assert_eq!(message, "Upload failed"),
            other => panic!("expected UploadFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn analyze_parses_the_full_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sessionId": "s1",
                "totalLeakage": -9950.0,
                "subsidies": [{
                    "id": "wbso-2024",
                    "item": "Unused R&D Tax Credits",
                    "subsidy": "WBSO Subsidy",
                    "category": "Tax",
                    "amount": -4800.0
                }],
                "benchmark": {"you": 21, "competitors": 70, "industryAverage": 63},
                "analyzedAt": "2024-06-01T10:30:00+02:00",
                "documentCount": 2
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).analyze_documents("s1").await.unwrap();
        assert_eq!(result.session_id, "s1");
        assert_eq!(result.total_leakage, -9950.0);
        assert_eq!(result.subsidies.len(), 1);
        assert_eq!(result.benchmark.competitors, 70.0);
    }

    #[tokio::test]
    async fn analyze_decode_failure_is_an_analysis_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).analyze_documents("s1").await.unwrap_err();
        assert!(matches!(err, ScanError::AnalysisFailed(_)));
    }

    #[tokio::test]
    async fn missing_subsidy_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/subsidy/ghost"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Subsidy not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).subsidy_details("ghost").await.unwrap_err();
        match err {
            ScanError::NotFound(message) => assert_eq!(message, "Subsidy not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn alert_setup_sends_the_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/alerts/email"))
            .and(body_partial_json(json!({
                "email": "a@b.com",
                "sessionId": "s1",
                "alertTypes": ["weekly_summary", "new_subsidies"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Email alerts configured for a@b.com",
                "alertId": "alert-9"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = EmailAlertRequest {
            email: "a@b.com".into(),
            session_id: "s1".into(),
            alert_types: subsidyscope_domain::AlertKind::default_selection(),
        };
        let receipt = client_for(&server).setup_email_alert(&request).await.unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.alert_id.as_deref(), Some("alert-9"));
    }

    #[tokio::test]
    async fn alert_cancellation_hits_the_delete_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/alerts/alert-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Alert cancelled successfully"
            })))
            .mount(&server)
            .await;

        let receipt = client_for(&server).cancel_email_alert("alert-9").await.unwrap();
        assert!(receipt.success);
    }

    #[tokio::test]
    async fn benchmark_fetch_parses_percentages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/benchmark"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "you": 23,
                "competitors": 67,
                "industryAverage": 65
            })))
            .mount(&server)
            .await;

        let snapshot = client_for(&server).benchmark().await.unwrap();
        assert_eq!(snapshot.you, 23.0);
        assert_eq!(snapshot.industry_average, Some(65.0));
    }

    #[tokio::test]
    async fn results_lookup_maps_missing_session_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/results/gone"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Session not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get_results("gone").await.unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }
}
