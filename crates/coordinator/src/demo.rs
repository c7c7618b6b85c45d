//! Synthetic demo batch.
//!
//! Shown when no document is supplied. This path is deliberately separate
//! from the ingestion failure path so a real outage can never masquerade
//! as a successful demo.

use chrono::Utc;
use triage_common::{BugReport, BugStatus, Severity};

/// Advisory attached to every demo ingestion.
pub const DEMO_ADVISORY: &str = "No document supplied: showing demo data";

struct DemoSeed {
    title: &'static str,
    description: &'static str,
    severity: Severity,
    component: &'static str,
    labels: &'static str,
    developer: &'static str,
    confidence: f64,
    reason: &'static str,
}

const DEMO_SEEDS: [DemoSeed; 5] = [
    DemoSeed {
        title: "Issue in Auth",
        description: "Authentication bug causing login failures after the session redirect",
        severity: Severity::High,
        component: "Auth",
        labels: "Security",
        developer: "Frank Miller",
        confidence: 0.88,
        reason: "Expertise: security, authentication",
    },
    DemoSeed {
        title: "Issue in Dashboard",
        description: "Dashboard loading performance degrades with more than 50 widgets",
        severity: Severity::Medium,
        component: "Dashboard",
        labels: "Performance",
        developer: "Alice Johnson",
        confidence: 0.74,
        reason: "Expertise: react, performance",
    },
    DemoSeed {
        title: "Issue in Payments",
        description: "Payment webhook retries create duplicate invoice rows",
        severity: Severity::Critical,
        component: "Payments",
        labels: "Data Integrity",
        developer: "Bob Smith",
        confidence: 0.91,
        reason: "Module expert: Payments; Senior dev for critical bug",
    },
    DemoSeed {
        title: "Issue in Mobile Sync",
        description: "Offline edits are lost when the app reconnects mid-upload",
        severity: Severity::High,
        component: "Mobile",
        labels: "Sync",
        developer: "Carol Davis",
        confidence: 0.79,
        reason: "Expertise: mobile, react native",
    },
    DemoSeed {
        title: "Issue in Deploy Pipeline",
        description: "Canary rollout stalls when the health probe times out",
        severity: Severity::Low,
        component: "Infrastructure",
        labels: "CI/CD",
        developer: "David Wilson",
        confidence: 0.67,
        reason: "Expertise: kubernetes, docker; Available capacity",
    },
];

/// Build the fixed demo batch. Ids are stable across invocations within a
/// session so reassignment actions keep working against the demo view.
pub fn demo_batch() -> Vec<BugReport> {
    let now = Utc::now();
    DEMO_SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| BugReport {
            id: (i + 1) as i64,
            title: seed.title.into(),
            description: seed.description.into(),
            severity: seed.severity,
            component: seed.component.into(),
            labels: Some(seed.labels.into()),
            stack_trace: None,
            predicted_developer: seed.developer.into(),
            confidence_score: seed.confidence,
            assignment_reason: Some(seed.reason.into()),
            status: BugStatus::Pending,
            assigned_developer: None,
            created_at: now,
            updated_at: now,
            sync_pending: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_batch_is_stable() {
        let first = demo_batch();
        let second = demo_batch();
        assert_eq!(first.len(), 5);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.predicted_developer, b.predicted_developer);
        }
    }

    #[test]
    fn demo_reports_start_pending_with_valid_confidence() {
        for report in demo_batch() {
            assert_eq!(report.status, BugStatus::Pending);
            assert!((0.0..=1.0).contains(&report.confidence_score));
            assert!(report.assigned_developer.is_none());
        }
    }
}
