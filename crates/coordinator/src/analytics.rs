//! Local analytics fallback.

use indexmap::IndexMap;
use triage_common::{AnalyticsSnapshot, BugStatus};

use crate::store::ReportStore;

/// Placeholder shown in degraded mode instead of a client-side average over
/// stored confidence scores. Computing a real average locally would make a
/// degraded snapshot indistinguishable from a remote one.
pub const DEGRADED_AVERAGE_CONFIDENCE: f64 = 0.85;

/// Compute the degraded snapshot from the current store: real counts, empty
/// distributions, placeholder average, `degraded` flag set.
pub fn local_snapshot(store: &ReportStore) -> AnalyticsSnapshot {
    let approved = store
        .iter()
        .filter(|r| r.status == BugStatus::Approved)
        .count() as u64;
    let pending = store
        .iter()
        .filter(|r| r.status == BugStatus::Pending)
        .count() as u64;

    AnalyticsSnapshot {
        total_reports: store.len() as u64,
        approved_reports: approved,
        pending_reports: pending,
        developer_distribution: IndexMap::new(),
        severity_distribution: IndexMap::new(),
        component_distribution: IndexMap::new(),
        average_confidence: DEGRADED_AVERAGE_CONFIDENCE,
        degraded: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use triage_common::{BugReport, Severity};

    fn report(id: i64, status: BugStatus) -> BugReport {
        let now = Utc::now();
        BugReport {
            id,
            title: format!("bug {id}"),
            description: String::new(),
            severity: Severity::Medium,
            component: "General".into(),
            labels: None,
            stack_trace: None,
            predicted_developer: "Emma Brown".into(),
            confidence_score: 0.4,
            assignment_reason: None,
            status,
            assigned_developer: None,
            created_at: now,
            updated_at: now,
            sync_pending: false,
        }
    }

    #[test]
    fn counts_come_from_the_store() {
        let mut store = ReportStore::new();
        store.replace(vec![
            report(1, BugStatus::Pending),
            report(2, BugStatus::Pending),
            report(3, BugStatus::Approved),
        ]);

        let snapshot = local_snapshot(&store);
        assert_eq!(snapshot.total_reports, 3);
        assert_eq!(snapshot.pending_reports, 2);
        assert_eq!(snapshot.approved_reports, 1);
        assert!(snapshot.approved_reports + snapshot.pending_reports <= snapshot.total_reports);
    }

    #[test]
    fn degraded_snapshot_uses_placeholder_average() {
        let mut store = ReportStore::new();
        store.replace(vec![report(1, BugStatus::Pending)]);

        let snapshot = local_snapshot(&store);
        // The placeholder, not the stored 0.4.
        assert_eq!(snapshot.average_confidence, DEGRADED_AVERAGE_CONFIDENCE);
        assert!(snapshot.degraded);
        assert!(snapshot.developer_distribution.is_empty());
        assert!(snapshot.severity_distribution.is_empty());
        assert!(snapshot.component_distribution.is_empty());
    }

    #[test]
    fn empty_store_yields_zero_counts() {
        let snapshot = local_snapshot(&ReportStore::new());
        assert_eq!(snapshot.total_reports, 0);
        assert_eq!(snapshot.approved_reports, 0);
        assert_eq!(snapshot.pending_reports, 0);
    }
}
