//! Non-fatal advisory messages.
//!
//! A degraded operation surfaces exactly one advisory combining a
//! human-readable cause and, when available, the transport status code.

use serde::Serialize;
use std::fmt;

use crate::error::TriageError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl Advisory {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Build an advisory from a failed remote call, keeping the status code
    /// the transport reported.
    pub fn degraded(context: &str, err: &TriageError) -> Self {
        Self {
            message: format!("{context}: {err}"),
            status: err.status_code(),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} (HTTP {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}
