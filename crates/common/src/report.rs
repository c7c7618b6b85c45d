//! Bug report entity and its lifecycle types.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::TriageError;

/// Severity label attached by the upstream classifier.
///
/// Comparison is case-insensitive at every consumer; an unrecognized label
/// in a remote payload degrades to `Medium` (the classifier's own default)
/// instead of rejecting the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Case-insensitive comparison against a free-text label.
    pub fn matches_label(&self, label: &str) -> bool {
        label.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(TriageError::Validation(format!(
                "unknown severity '{other}'"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|_| {
            warn!(label = %raw, "Unknown severity label, degrading to Medium");
            Severity::Medium
        }))
    }
}

/// Lifecycle status of a report. `Pending` is the only initial state; the
/// other three are reached through reviewer actions and may be re-entered
/// by an explicit re-triage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BugStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Modified,
}

impl BugStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reviewer decision on a predicted assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageAction {
    Approved,
    Rejected,
    Modified,
}

impl TriageAction {
    pub fn target_status(self) -> BugStatus {
        match self {
            Self::Approved => BugStatus::Approved,
            Self::Rejected => BugStatus::Rejected,
            Self::Modified => BugStatus::Modified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Modified => "modified",
        }
    }
}

impl FromStr for TriageAction {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approved" | "approve" => Ok(Self::Approved),
            "rejected" | "reject" => Ok(Self::Rejected),
            "modified" | "modify" => Ok(Self::Modified),
            other => Err(TriageError::Validation(format!(
                "unknown triage action '{other}'"
            ))),
        }
    }
}

/// A classified bug report. Owned exclusively by the report store; created
/// at ingestion, mutated only through [`BugReport::apply_transition`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugReport {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default = "default_component")]
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,

    /// Classifier output, immutable after ingestion.
    pub predicted_developer: String,
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_reason: Option<String>,

    #[serde(default)]
    pub status: BugStatus,
    /// Equals `predicted_developer` until a reassignment overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_developer: Option<String>,

    #[serde(deserialize_with = "flexible_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "flexible_datetime")]
    pub updated_at: DateTime<Utc>,

    /// Set when a transition was applied locally but the remote service
    /// could not be notified. Local state only, never sent over the wire.
    #[serde(skip)]
    pub sync_pending: bool,
}

fn default_component() -> String {
    "General".into()
}

/// Accepts both RFC 3339 timestamps and the naive `YYYY-MM-DDTHH:MM:SS`
/// form the classification backend emits, interpreted as UTC.
fn flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

impl BugReport {
    /// The developer this report currently points at: the explicit
    /// assignment if one was made, otherwise the prediction.
    pub fn effective_assignee(&self) -> &str {
        self.assigned_developer
            .as_deref()
            .unwrap_or(&self.predicted_developer)
    }

    /// Enforce ingestion-boundary invariants on a freshly decoded report:
    /// confidence clamped to [0, 1] and `updated_at >= created_at`.
    pub fn normalize(mut self) -> Self {
        if !self.confidence_score.is_finite() {
            self.confidence_score = 0.0;
        }
        self.confidence_score = self.confidence_score.clamp(0.0, 1.0);
        if self.updated_at < self.created_at {
            self.updated_at = self.created_at;
        }
        self
    }

    /// Apply a triage transition. The transition is a pure function of the
    /// target action and assignee, not of the prior status, so re-applying
    /// the same action is idempotent apart from the timestamp refresh.
    pub fn apply_transition(&mut self, action: TriageAction, assignee: Option<&str>) {
        self.status = action.target_status();
        self.assigned_developer = Some(match assignee {
            Some(dev) => dev.to_string(),
            None => self.effective_assignee().to_string(),
        });
        // Strictly monotonic even when two transitions land within the
        // same clock millisecond.
        let floor = self.updated_at + Duration::milliseconds(1);
        self.updated_at = Utc::now().max(floor);
    }
}
