//! Assignment workflow types and validation.

use triage_common::{Advisory, BugReport, Result, TriageAction, TriageError};

/// Result of an assignment: the report after its local transition, plus
/// whether the remote service acknowledged it. An unsynced transition is
/// still applied; the advisory distinguishes it from silent failure.
#[derive(Debug)]
pub struct AssignOutcome {
    pub report: BugReport,
    pub synced: bool,
    pub advisory: Option<Advisory>,
}

/// Reject malformed transitions before anything is touched. A `Modified`
/// action must carry a non-empty developer; other actions ignore the
/// developer argument entirely.
pub(crate) fn validate(action: TriageAction, developer: Option<&str>) -> Result<()> {
    if action == TriageAction::Modified {
        match developer {
            Some(dev) if !dev.trim().is_empty() => Ok(()),
            _ => Err(TriageError::Validation(
                "a reassignment requires a developer name".into(),
            )),
        }
    } else {
        Ok(())
    }
}
