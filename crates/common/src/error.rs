//! Error types for the triage workflow coordinator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Remote service error: {detail}")]
    Transport {
        /// HTTP status code, when the remote answered at all.
        status: Option<u16>,
        detail: String,
    },

    #[error("An ingestion is already in flight")]
    IngestInFlight,

    #[error("Bug report {0} not found")]
    ReportNotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;

impl TriageError {
    /// Shorthand for a transport failure with no status code (connection
    /// refused, timeout, unparseable body).
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            detail: detail.into(),
        }
    }

    /// The transport status code, if this error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// True for failures detected before any remote call was issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
