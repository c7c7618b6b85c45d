//! Core coordinator implementation.
//!
//! Owns the report store and drives the ingest / assign / view / snapshot
//! operations against a remote [`TriageService`], degrading to local state
//! when the remote is unreachable.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use triage_client::{AssignmentRequest, TriageService};
use triage_common::{
    Advisory, AnalyticsSnapshot, BugReport, Developer, Result, TriageAction, TriageError,
};

use crate::analytics;
use crate::demo;
use crate::directory;
use crate::ingest::{Document, IngestOutcome, IngestSource};
use crate::query;
use crate::store::ReportStore;
use crate::workflow::{self, AssignOutcome};

/// The triage workflow coordinator.
///
/// All state lives behind one lock; every mutation is a single atomic
/// replace (ingestion) or patch (assignment) over the store. Generic over
/// the service so tests can substitute a mock.
pub struct TriageCoordinator<S> {
    service: S,
    store: RwLock<ReportStore>,
    ingest_in_flight: AtomicBool,
}

impl<S: TriageService> TriageCoordinator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            store: RwLock::new(ReportStore::new()),
            ingest_in_flight: AtomicBool::new(false),
        }
    }

    /// Ingest a batch of classified reports, replacing the store contents.
    ///
    /// Without a document this loads the demo batch and flags it with an
    /// advisory; it is not an error and issues no remote call. With a
    /// document, a non-PDF mime type fails validation before any network
    /// attempt, and a remote failure clears the store and propagates (no
    /// synthetic fallback that could mask the outage).
    pub async fn ingest(&self, document: Option<Document>) -> Result<IngestOutcome> {
        let _guard = IngestGuard::acquire(&self.ingest_in_flight)?;

        let Some(document) = document else {
            let batch = demo::demo_batch();
            info!(reports = batch.len(), "No document supplied, loading demo batch");
            self.store.write().await.replace(batch.clone());
            return Ok(IngestOutcome {
                reports: batch,
                source: IngestSource::Demo,
                advisory: Some(Advisory::new(demo::DEMO_ADVISORY)),
            });
        };

        if !document.is_pdf() {
            return Err(TriageError::Validation(format!(
                "document must be a PDF, got mime type '{}'",
                document.mime_type
            )));
        }

        info!(
            file = %document.file_name,
            size = document.bytes.len(),
            "Submitting document for classification"
        );

        match self
            .service
            .upload_pdf(&document.file_name, document.bytes)
            .await
        {
            Ok(batch) => {
                let batch: Vec<BugReport> =
                    batch.into_iter().map(BugReport::normalize).collect();
                self.store.write().await.replace(batch.clone());
                info!(reports = batch.len(), "Ingestion complete");
                Ok(IngestOutcome {
                    reports: batch,
                    source: IngestSource::Remote,
                    advisory: None,
                })
            }
            Err(e) => {
                // No partial or stale data may survive a failed ingestion.
                self.store.write().await.clear();
                warn!(error = %e, "Ingestion failed, store cleared");
                Err(e)
            }
        }
    }

    /// Re-fetch the store from the remote list endpoint. Unlike ingestion,
    /// a failed refresh leaves the store unchanged: the previous view is
    /// still the last known-good state.
    pub async fn refresh(&self, filters: &[(String, String)]) -> Result<Vec<BugReport>> {
        let batch = self.service.list_reports(filters).await?;
        let batch: Vec<BugReport> = batch.into_iter().map(BugReport::normalize).collect();
        self.store.write().await.replace(batch.clone());
        debug!(reports = batch.len(), "Store refreshed from remote");
        Ok(batch)
    }

    /// Apply a reviewer decision to one report.
    ///
    /// The remote service is notified, but the local transition is applied
    /// whether or not that call succeeds: the reviewer's action is never
    /// lost to a transport failure. An unsynced transition is marked with
    /// `sync_pending` and accompanied by an advisory.
    pub async fn assign(
        &self,
        id: i64,
        action: TriageAction,
        developer: Option<&str>,
    ) -> Result<AssignOutcome> {
        workflow::validate(action, developer)?;

        let mut report = {
            let store = self.store.read().await;
            store
                .get(id)
                .cloned()
                .ok_or(TriageError::ReportNotFound(id))?
        };

        // Only a reassignment carries a developer; approve/reject keep the
        // report's existing assignee.
        let assignee = match action {
            TriageAction::Modified => developer,
            _ => None,
        };

        let request = AssignmentRequest {
            bug_id: id,
            action,
            assigned_developer: assignee.map(str::to_string),
        };

        let (synced, advisory) = match self.service.assign_bug(&request).await {
            Ok(_) => {
                debug!(bug_id = id, action = %action.as_str(), "Remote transition acknowledged");
                (true, None)
            }
            Err(e) => {
                warn!(
                    bug_id = id,
                    action = %action.as_str(),
                    error = %e,
                    "Remote transition failed, applying locally"
                );
                (
                    false,
                    Some(Advisory::degraded(
                        "assignment applied locally but not synced",
                        &e,
                    )),
                )
            }
        };

        report.apply_transition(action, assignee);
        report.sync_pending = !synced;
        if !self.store.write().await.patch(report.clone()) {
            // A concurrent ingestion replaced the batch between our read
            // and this write; last write wins and the new batch stands.
            warn!(bug_id = id, "Report no longer in store, transition not recorded");
        }

        info!(
            bug_id = id,
            status = %report.status,
            assignee = %report.effective_assignee(),
            synced,
            "Transition applied"
        );

        Ok(AssignOutcome {
            report,
            synced,
            advisory,
        })
    }

    /// Current store contents in insertion order.
    pub async fn reports(&self) -> Vec<BugReport> {
        self.store.read().await.to_vec()
    }

    /// Filtered/searched view of the store. Read-only and recomputed per
    /// call.
    pub async fn view(&self, search_term: &str, filter_by: &str) -> Vec<BugReport> {
        let store = self.store.read().await;
        query::view(store.iter(), search_term, filter_by)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Analytics snapshot: remote when reachable, local degraded counts
    /// otherwise.
    pub async fn snapshot(&self) -> (AnalyticsSnapshot, Option<Advisory>) {
        match self.service.analytics().await {
            Ok(snapshot) => (snapshot, None),
            Err(e) => {
                warn!(error = %e, "Analytics service unavailable, computing local fallback");
                let store = self.store.read().await;
                (
                    analytics::local_snapshot(&store),
                    Some(Advisory::degraded("analytics degraded to local counts", &e)),
                )
            }
        }
    }

    /// Assignable developer roster: remote when reachable, the fixed
    /// fallback roster otherwise.
    pub async fn developers(&self) -> (Vec<Developer>, Option<Advisory>) {
        match self.service.list_developers().await {
            Ok(roster) => (roster, None),
            Err(e) => {
                warn!(error = %e, "Developer roster unavailable, using fallback");
                (
                    directory::fallback_roster(),
                    Some(Advisory::degraded("showing fallback developer roster", &e)),
                )
            }
        }
    }
}

/// Drop guard backing the single-flight ingestion rule: a second ingestion
/// must not be issued while one is outstanding.
struct IngestGuard<'a>(&'a AtomicBool);

impl<'a> IngestGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| TriageError::IngestInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for IngestGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
