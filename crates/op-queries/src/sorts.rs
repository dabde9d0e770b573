//! Task sort orders
//!
//! All orderings are stable: items that compare equal keep their input order.

use std::cmp::Ordering;
use std::str::FromStr;

use op_models::WorkItem;
use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 1-9, oldest first)
    #[default]
    Asc,
    /// Descending order (Z-A, 9-1, newest first)
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Task-list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskSort {
    /// Earliest due date first, undated items last
    #[default]
    DueDate,
    /// Lowest priority id first
    Priority,
    /// Status name, alphabetically
    Status,
}

impl TaskSort {
    pub fn compare(self, a: &WorkItem, b: &WorkItem) -> Ordering {
        match self {
            Self::DueDate => match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            // Placeholder priorities without an id sort after real ones
            Self::Priority => match (a.priority.id, b.priority.id) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Status => a.status.name.cmp(&b.status.name),
        }
    }

    pub fn sort(self, items: &mut [WorkItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Sort in `direction`; descending keeps undated items last for `DueDate`
    pub fn sort_directed(self, items: &mut [WorkItem], direction: SortDirection) {
        match direction {
            SortDirection::Asc => self.sort(items),
            SortDirection::Desc => items.sort_by(|a, b| {
                if self == Self::DueDate && (a.due_date.is_none() || b.due_date.is_none()) {
                    self.compare(a, b)
                } else {
                    self.compare(b, a)
                }
            }),
        }
    }
}

impl FromStr for TaskSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "due-date" | "due_date" | "duedate" | "due" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}
