//! Project model
//!
//! Projects scope every dashboard view: work items, members and metrics are
//! always requested for one project.

use chrono::{DateTime, Utc};
use op_core::traits::Id;
use serde::{Deserialize, Serialize};

/// Status name used when the server reports none
pub const DEFAULT_PROJECT_STATUS: &str = "Active";

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,

    /// Display name
    pub name: String,

    /// Unique identifier (URL-safe slug)
    pub identifier: String,

    /// Raw description text, empty when absent
    #[serde(default)]
    pub description: String,

    /// Status name
    pub status: String,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(id: Id, name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            identifier: identifier.into(),
            description: String::new(),
            status: DEFAULT_PROJECT_STATUS.to_string(),
            created_at: None,
            updated_at: None,
        }
    }
}
