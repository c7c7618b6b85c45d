//! Client for the remote bug classification and assignment service.
//!
//! The coordinator talks to the remote only through the [`TriageService`]
//! trait; [`HttpTriageService`] is the production implementation of the
//! HTTP/JSON contract.

pub mod http;
pub mod service;

pub use http::HttpTriageService;
pub use service::{AssignmentRequest, TriageService};
