//! `reqwest`-backed implementation of the remote service contract.

use async_trait::async_trait;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use triage_common::{AnalyticsSnapshot, BugReport, Developer, Result, TriageError};

use crate::service::{AssignmentRequest, TriageService};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub struct HttpTriageService {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTriageService {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_MS)
    }

    /// The timeout is a transport concern; the coordinator itself imposes
    /// none and every dispatched call runs to completion or failure.
    pub fn with_timeout(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| TriageError::Config(format!("failed to build HTTP client: {e}")))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            base_url,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send_error(context: &str, err: reqwest::Error) -> TriageError {
        TriageError::Transport {
            status: err.status().map(|s| s.as_u16()),
            detail: format!("{context} request failed: {err}"),
        }
    }

    /// Treat every non-2xx as failure, capturing the response body (if any)
    /// as the error detail. A 2xx whose body does not decode surfaces as a
    /// serialization error rather than a transport one.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response, context: &str) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TriageError::Transport {
                status: Some(status.as_u16()),
                detail: format!("{context} failed with {status}: {body}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::send_error(context, e))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TriageService for HttpTriageService {
    async fn upload_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<BugReport>> {
        debug!(file = %file_name, size = bytes.len(), "Uploading PDF for classification");

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(|e| TriageError::Config(format!("invalid upload part: {e}")))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http_client
            .post(self.url("/upload-pdf/"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| Self::send_error("upload", e))?;

        Self::decode(response, "upload").await
    }

    async fn list_reports(&self, filters: &[(String, String)]) -> Result<Vec<BugReport>> {
        let query: Vec<&(String, String)> = filters
            .iter()
            .filter(|(key, value)| !key.is_empty() && !value.is_empty())
            .collect();

        let response = self
            .http_client
            .get(self.url("/bug-reports/"))
            .query(&query)
            .send()
            .await
            .map_err(|e| Self::send_error("report listing", e))?;

        Self::decode(response, "report listing").await
    }

    async fn assign_bug(&self, request: &AssignmentRequest) -> Result<BugReport> {
        debug!(bug_id = request.bug_id, action = %request.action.as_str(), "Posting assignment");

        let response = self
            .http_client
            .post(self.url("/assign-bug/"))
            .json(request)
            .send()
            .await
            .map_err(|e| Self::send_error("assignment", e))?;

        Self::decode(response, "assignment").await
    }

    async fn list_developers(&self) -> Result<Vec<Developer>> {
        let response = self
            .http_client
            .get(self.url("/developers/"))
            .send()
            .await
            .map_err(|e| Self::send_error("developer listing", e))?;

        Self::decode(response, "developer listing").await
    }

    async fn analytics(&self) -> Result<AnalyticsSnapshot> {
        let response = self
            .http_client
            .get(self.url("/analytics/"))
            .send()
            .await
            .map_err(|e| Self::send_error("analytics", e))?;

        Self::decode(response, "analytics").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let service = HttpTriageService::new("http://localhost:8000///").unwrap();
        assert_eq!(service.url("/analytics/"), "http://localhost:8000/analytics/");
    }

    #[test]
    fn url_joins_path() {
        let service = HttpTriageService::new("http://triage.internal:8000").unwrap();
        assert_eq!(
            service.url("/bug-reports/"),
            "http://triage.internal:8000/bug-reports/"
        );
    }
}
