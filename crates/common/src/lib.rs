//! Common types shared across the triage workflow crates.
//!
//! This crate provides the domain model (reports, developers, analytics)
//! and the error taxonomy every other component builds on.

pub mod advisory;
pub mod analytics;
pub mod developer;
pub mod error;
pub mod report;

pub use advisory::Advisory;
pub use analytics::AnalyticsSnapshot;
pub use developer::Developer;
pub use error::{Result, TriageError};
pub use report::{BugReport, BugStatus, Severity, TriageAction};
