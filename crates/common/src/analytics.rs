//! Aggregate analytics over the report population.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Summary statistics, either fetched from the remote analytics service or
/// computed locally in degraded mode.
///
/// Local invariants: `total_reports` equals the store size and
/// `approved_reports + pending_reports <= total_reports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_reports: u64,
    pub approved_reports: u64,
    pub pending_reports: u64,
    #[serde(default)]
    pub developer_distribution: IndexMap<String, u64>,
    #[serde(default)]
    pub severity_distribution: IndexMap<String, u64>,
    #[serde(default)]
    pub component_distribution: IndexMap<String, u64>,
    pub average_confidence: f64,

    /// True when this snapshot was computed locally because the remote
    /// aggregator was unreachable. Distributions are then empty and
    /// `average_confidence` is a fixed placeholder, not a real aggregate.
    #[serde(skip)]
    pub degraded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remote_payload() {
        let json = r#"{
            "total_reports": 12,
            "approved_reports": 4,
            "pending_reports": 6,
            "developer_distribution": {"Alice Johnson": 5, "Bob Smith": 7},
            "severity_distribution": {"High": 3, "Medium": 9},
            "component_distribution": {"Auth": 2},
            "average_confidence": 0.71
        }"#;
        let snapshot: AnalyticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_reports, 12);
        assert_eq!(snapshot.developer_distribution["Bob Smith"], 7);
        assert!(!snapshot.degraded);
    }

    #[test]
    fn distributions_default_when_absent() {
        let json = r#"{
            "total_reports": 0,
            "approved_reports": 0,
            "pending_reports": 0,
            "average_confidence": 0.0
        }"#;
        let snapshot: AnalyticsSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.severity_distribution.is_empty());
    }
}
