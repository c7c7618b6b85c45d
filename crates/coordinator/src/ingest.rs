//! Ingestion gateway types.

use std::path::Path;
use triage_common::{Advisory, BugReport, Result, TriageError};

pub const PDF_MIME: &str = "application/pdf";

/// A source document submitted for classification. Validated before any
/// network call is issued.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a document from disk, inferring the mime type from the
    /// extension. Anything that is not `.pdf` keeps a generic type and
    /// will be rejected by the gateway's validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                TriageError::Validation(format!("invalid document path '{}'", path.display()))
            })?;

        let mime_type = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MIME,
            _ => "application/octet-stream",
        };

        let bytes = std::fs::read(path)?;
        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case(PDF_MIME)
    }
}

/// How an ingestion produced its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestSource {
    /// Classified by the remote service from an uploaded document.
    Remote,
    /// Synthetic demo batch; no document was supplied and no remote call
    /// was made.
    Demo,
}

/// Result of a successful ingestion. A failed real ingestion never turns
/// into a demo outcome; it propagates as an error with the store cleared.
#[derive(Debug)]
pub struct IngestOutcome {
    pub reports: Vec<BugReport>,
    pub source: IngestSource,
    pub advisory: Option<Advisory>,
}

impl IngestOutcome {
    pub fn is_demo(&self) -> bool {
        self.source == IngestSource::Demo
    }
}
