//! Filtered and searched views over the report store.
//!
//! A view is recomputed on every call; there is no cached derived state
//! that could go stale.

use triage_common::BugReport;

/// Compute the presentation view of `reports`.
///
/// A report passes when the search term (if any) is a case-insensitive
/// substring of its title or description, AND the filter is `"all"`, its
/// exact status name, or a case-insensitive severity label. Input order is
/// preserved.
pub fn view<'a, I>(reports: I, search_term: &str, filter_by: &str) -> Vec<&'a BugReport>
where
    I: IntoIterator<Item = &'a BugReport>,
{
    let needle = search_term.trim().to_lowercase();
    reports
        .into_iter()
        .filter(|r| matches_search(r, &needle) && matches_filter(r, filter_by))
        .collect()
}

fn matches_search(report: &BugReport, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    report.title.to_lowercase().contains(needle)
        || report.description.to_lowercase().contains(needle)
}

fn matches_filter(report: &BugReport, filter_by: &str) -> bool {
    if filter_by.is_empty() || filter_by.eq_ignore_ascii_case("all") {
        return true;
    }
    report.status.as_str() == filter_by || report.severity.matches_label(filter_by)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use triage_common::{BugStatus, Severity};

    fn report(id: i64, title: &str, status: BugStatus, severity: Severity) -> BugReport {
        let now = Utc::now();
        BugReport {
            id,
            title: title.into(),
            description: format!("details for {title}"),
            severity,
            component: "General".into(),
            labels: None,
            stack_trace: None,
            predicted_developer: "Alice Johnson".into(),
            confidence_score: 0.5,
            assignment_reason: None,
            status,
            assigned_developer: None,
            created_at: now,
            updated_at: now,
            sync_pending: false,
        }
    }

    fn fixtures() -> Vec<BugReport> {
        vec![
            report(1, "Login fails", BugStatus::Pending, Severity::High),
            report(2, "Memory leak", BugStatus::Approved, Severity::Critical),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let reports = fixtures();
        let hits = view(&reports, "login", "all");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn search_matches_description_too() {
        let reports = fixtures();
        let hits = view(&reports, "details for memory", "all");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn status_filter_is_exact() {
        let reports = fixtures();
        let hits = view(&reports, "", "approved");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn severity_filter_is_case_insensitive() {
        let reports = fixtures();
        let hits = view(&reports, "", "high");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = view(&reports, "", "CRITICAL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn empty_search_and_all_filter_pass_everything() {
        let reports = fixtures();
        assert_eq!(view(&reports, "", "all").len(), 2);
        assert_eq!(view(&reports, "", "ALL").len(), 2);
    }

    #[test]
    fn search_and_filter_combine_conjunctively() {
        let reports = fixtures();
        assert!(view(&reports, "login", "approved").is_empty());
        assert_eq!(view(&reports, "leak", "critical").len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let reports = fixtures();
        let ids: Vec<i64> = view(&reports, "", "all").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn no_match_returns_empty() {
        let reports = fixtures();
        assert!(view(&reports, "segfault", "all").is_empty());
        assert!(view(&reports, "", "rejected").is_empty());
    }
}
