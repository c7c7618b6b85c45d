//! In-memory report store: the source of truth for the reviewer-facing view.

use indexmap::IndexMap;
use triage_common::BugReport;

/// Insertion-ordered mapping of report id to report.
///
/// Mutated only by batch replacement (ingestion) and single-entry patching
/// (assignment workflow); everything else reads. The store lives for the
/// application session and carries no persistence guarantee.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: IndexMap<i64, BugReport>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents with a new batch. Ingestion is
    /// batch-replace, never merge.
    pub fn replace(&mut self, batch: Vec<BugReport>) {
        self.reports = batch.into_iter().map(|r| (r.id, r)).collect();
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }

    pub fn get(&self, id: i64) -> Option<&BugReport> {
        self.reports.get(&id)
    }

    /// Overwrite one existing entry in place, keeping its position.
    /// Returns false if the id is unknown.
    pub fn patch(&mut self, report: BugReport) -> bool {
        match self.reports.get_mut(&report.id) {
            Some(slot) => {
                *slot = report;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BugReport> {
        self.reports.values()
    }

    pub fn to_vec(&self) -> Vec<BugReport> {
        self.reports.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use triage_common::{BugStatus, Severity};

    fn report(id: i64, title: &str) -> BugReport {
        let now = Utc::now();
        BugReport {
            id,
            title: title.into(),
            description: String::new(),
            severity: Severity::Medium,
            component: "General".into(),
            labels: None,
            stack_trace: None,
            predicted_developer: "Alice Johnson".into(),
            confidence_score: 0.5,
            assignment_reason: None,
            status: BugStatus::Pending,
            assigned_developer: None,
            created_at: now,
            updated_at: now,
            sync_pending: false,
        }
    }

    #[test]
    fn replace_discards_previous_batch() {
        let mut store = ReportStore::new();
        store.replace(vec![report(1, "first"), report(2, "second")]);
        store.replace(vec![report(3, "third")]);

        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());
        assert!(store.get(3).is_some());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut store = ReportStore::new();
        store.replace(vec![report(9, "a"), report(2, "b"), report(5, "c")]);

        let ids: Vec<i64> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn patch_keeps_position() {
        let mut store = ReportStore::new();
        store.replace(vec![report(1, "a"), report(2, "b"), report(3, "c")]);

        let mut updated = report(2, "b");
        updated.status = BugStatus::Approved;
        assert!(store.patch(updated));

        let ids: Vec<i64> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.get(2).unwrap().status, BugStatus::Approved);
    }

    #[test]
    fn patch_rejects_unknown_id() {
        let mut store = ReportStore::new();
        store.replace(vec![report(1, "a")]);
        assert!(!store.patch(report(42, "ghost")));
        assert_eq!(store.len(), 1);
    }
}
