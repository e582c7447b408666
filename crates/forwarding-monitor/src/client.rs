//! Client for the events-forwarding errors API.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use crate::model::ErrorReport;

/// Errors that can occur while fetching an error report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint URL or request could not be built
    #[error("failed to create request: {0}")]
    RequestBuildFailed(String),

    /// No response was received (connect, DNS, TLS, timeout)
    #[error("failed to fetch data: {0}")]
    TransportError(#[source] reqwest::Error),

    /// The API answered with something other than 200 OK
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// The response body could not be read to the end
    #[error("failed to read response body: {0}")]
    BodyReadError(#[source] reqwest::Error),

    /// The body is not a valid error report
    #[error("failed to parse JSON: {0}")]
    DecodeError(#[from] serde_json::Error),
}

/// Anything that can produce one error report per call.
#[async_trait]
pub trait ErrorSource: Send + Sync {
    async fn fetch(&self) -> Result<ErrorReport, FetchError>;
}

/// Authenticated reader of one integration's forwarding errors.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    client: reqwest::Client,
    endpoint: String,
    bearer_token: String,
}

impl EndpointClient {
    /// Create a client for `<api_base_url><integration_id>/<tenant_id>`.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        api_base_url: &str,
        integration_id: i64,
        tenant_id: i64,
        bearer_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{api_base_url}{integration_id}/{tenant_id}"),
            bearer_token: bearer_token.into(),
        }
    }

    /// The full URL polled on every fetch.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ErrorSource for EndpointClient {
    async fn fetch(&self) -> Result<ErrorReport, FetchError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| FetchError::RequestBuildFailed(format!("{}: {e}", self.endpoint)))?;

        let request = self
            .client
            .get(url)
            .bearer_auth(&self.bearer_token)
            .build()
            .map_err(|e| FetchError::RequestBuildFailed(e.to_string()))?;

        debug!(endpoint = %self.endpoint, "Polling events-forwarding errors");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::TransportError)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::BodyReadError)?;
        let report: ErrorReport = serde_json::from_slice(&body)?;

        debug!(
            integration_id = report.integration_id,
            count = report.count,
            errors = report.errors.len(),
            "Fetched error report"
        );

        Ok(report)
    }
}
