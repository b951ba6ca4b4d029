//! Thin reqwest wrapper
//!
//! One attempt per request, no retry and no backoff: the product contract
//! is a single fetch per operation, with degradation handled upstream.
//! Only the health check applies a deadline, and that lives in the API
//! adapter.

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use subsidyscope_domain::{Result, ScanError};
use tracing::debug;

use crate::errors::InfraError;

const DEFAULT_USER_AGENT: &str = concat!("subsidyscope/", env!("CARGO_PKG_VERSION"));

/// Single-attempt HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request, exactly once
    ///
    /// Transport failures map to `NetworkUnavailable`; non-2xx responses
    /// are returned as-is for the caller to classify per operation.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            ScanError::from(infra)
        })?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                let infra: InfraError = err.into();
                Err(ScanError::from(infra))
            }
        }
    }
}

/// Builder for [`HttpClient`]
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: None, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

impl HttpClientBuilder {
    /// Apply a whole-request timeout
    ///
    /// Unset by default: upload and analyze calls run to settlement.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().user_agent(self.user_agent).no_proxy();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            ScanError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
