//! Triage workflow coordinator.
//!
//! Coordinates the human-in-the-loop review of automatically classified
//! bug reports:
//! 1. Ingests a predicted batch from the remote classifier (or a demo
//!    batch when no document is supplied)
//! 2. Lets a reviewer approve, reject, or reassign each report
//! 3. Keeps a locally consistent view when the remote service is down,
//!    flagging every degraded result with an advisory
//!
//! # Architecture
//!
//! ```text
//! Ingestion Gateway ──▶ ┌──────────────┐ ◀── Assignment Workflow
//!    (batch replace)    │ Report Store │       (single-entry patch)
//!                       └──────┬───────┘
//!                              │ reads
//!                  ┌───────────┴───────────┐
//!                  ▼                       ▼
//!            Query Engine          Analytics Aggregator
//!           (per-call view)        (remote or degraded)
//! ```

pub mod analytics;
pub mod config;
pub mod coordinator;
pub mod demo;
pub mod directory;
pub mod ingest;
pub mod query;
pub mod store;
pub mod workflow;

pub use config::{ServiceConfig, TriageConfig};
pub use coordinator::TriageCoordinator;
pub use ingest::{Document, IngestOutcome, IngestSource};
pub use query::view;
pub use store::ReportStore;
pub use workflow::AssignOutcome;
