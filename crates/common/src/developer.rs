//! Developer roster entry.

use serde::{Deserialize, Serialize};

/// An assignable developer. Identity is the `name`; the remote roster may
/// carry extra profile fields, the fallback roster carries only names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl Developer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            specialty: None,
        }
    }
}
