//! The remote service contract consumed by the coordinator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use triage_common::{AnalyticsSnapshot, BugReport, Developer, Result, TriageAction};

/// Body of a `POST /assign-bug/` call: one reviewer decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    pub bug_id: i64,
    pub action: TriageAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_developer: Option<String>,
}

/// Operations of the remote classification/assignment service.
///
/// Every method maps to one endpoint of the HTTP/JSON contract; failures
/// (connection errors and non-2xx responses alike) surface as
/// [`triage_common::TriageError::Transport`]. The coordinator is generic
/// over this trait so tests can substitute a mock.
#[async_trait]
pub trait TriageService: Send + Sync {
    /// Submit a PDF for classification. Returns the full predicted batch.
    async fn upload_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<BugReport>>;

    /// List reports, optionally filtered. Only non-empty key/value pairs
    /// are sent as query parameters.
    async fn list_reports(&self, filters: &[(String, String)]) -> Result<Vec<BugReport>>;

    /// Record a reviewer decision. Returns the updated report.
    async fn assign_bug(&self, request: &AssignmentRequest) -> Result<BugReport>;

    /// Fetch the assignable developer roster.
    async fn list_developers(&self) -> Result<Vec<Developer>>;

    /// Fetch the remote analytics aggregate.
    async fn analytics(&self) -> Result<AnalyticsSnapshot>;
}

#[async_trait]
impl<T: TriageService + ?Sized> TriageService for Arc<T> {
    async fn upload_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<BugReport>> {
        (**self).upload_pdf(file_name, bytes).await
    }

    async fn list_reports(&self, filters: &[(String, String)]) -> Result<Vec<BugReport>> {
        (**self).list_reports(filters).await
    }

    async fn assign_bug(&self, request: &AssignmentRequest) -> Result<BugReport> {
        (**self).assign_bug(request).await
    }

    async fn list_developers(&self) -> Result<Vec<Developer>> {
        (**self).list_developers().await
    }

    async fn analytics(&self) -> Result<AnalyticsSnapshot> {
        (**self).analytics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_request_wire_format() {
        let request = AssignmentRequest {
            bug_id: 3,
            action: TriageAction::Modified,
            assigned_developer: Some("Carol Davis".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["bug_id"], 3);
        assert_eq!(json["action"], "modified");
        assert_eq!(json["assigned_developer"], "Carol Davis");
    }

    #[test]
    fn absent_developer_is_omitted() {
        let request = AssignmentRequest {
            bug_id: 1,
            action: TriageAction::Approved,
            assigned_developer: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("assigned_developer"));
    }
}
