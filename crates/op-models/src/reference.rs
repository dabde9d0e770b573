//! Resolved link references
//!
//! API v3 embeds related resources as `_links.<rel> = { href, title }`. The
//! parse step turns each link into one of these values.

use op_core::traits::Id;
use op_core::types::Color;
use serde::{Deserialize, Serialize};

/// Placeholder title for statuses, types and projects without one
pub const UNKNOWN: &str = "Unknown";
/// Placeholder title for an assignee link without one
pub const UNASSIGNED: &str = "Unassigned";
/// Placeholder title for a priority link without one
pub const NORMAL_PRIORITY: &str = "Normal";

/// A linked resource reduced to its id and display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Trailing path segment of the link's href, when numeric
    pub id: Option<Id>,
    pub name: String,
}

impl Reference {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Reference whose link was present but carried nothing usable
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn is(&self, id: Id) -> bool {
        self.id == Some(id)
    }
}

/// Work package status with its display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRef {
    pub id: Option<Id>,
    pub name: String,
    pub color: Color,
}

impl StatusRef {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            color: Color::default(),
        }
    }
}

impl From<Reference> for StatusRef {
    fn from(reference: Reference) -> Self {
        Self {
            id: reference.id,
            name: reference.name,
            color: Color::default(),
        }
    }
}

impl Default for StatusRef {
    fn default() -> Self {
        Reference::placeholder(UNKNOWN).into()
    }
}
