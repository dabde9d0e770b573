//! Task filters
//!
//! Every criterion of a `TaskFilter` is optional; set criteria combine with
//! AND semantics.

use std::str::FromStr;

use chrono::NaiveDate;
use op_core::traits::Id;
use op_models::{Progress, WorkItem};
use serde::{Deserialize, Serialize};

/// Progress bucket filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressFilter {
    #[default]
    All,
    Completed,
    InProgress,
    NotStarted,
}

impl ProgressFilter {
    pub fn matches(self, item: &WorkItem) -> bool {
        match self {
            Self::All => true,
            Self::Completed => item.progress() == Progress::Completed,
            Self::InProgress => item.progress() == Progress::InProgress,
            Self::NotStarted => item.progress() == Progress::NotStarted,
        }
    }
}

impl FromStr for ProgressFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "not-started" | "not_started" => Ok(Self::NotStarted),
            other => Err(format!("unknown progress filter: {other}")),
        }
    }
}

/// Assignee filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssigneeFilter {
    #[default]
    Any,
    Unassigned,
    User(Id),
}

impl AssigneeFilter {
    pub fn matches(self, item: &WorkItem) -> bool {
        match self {
            Self::Any => true,
            Self::Unassigned => item.is_unassigned(),
            Self::User(id) => item.is_assigned_to(id),
        }
    }
}

impl FromStr for AssigneeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "all" => Ok(Self::Any),
            "unassigned" | "none" => Ok(Self::Unassigned),
            other => other
                .parse()
                .map(Self::User)
                .map_err(|_| format!("expected any, unassigned or a user id, got {other}")),
        }
    }
}

/// Task-list filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Case-insensitive subject match, or a substring of the id
    pub search: Option<String>,
    /// Exact status name
    pub status: Option<String>,
    /// Exact type name
    pub work_type: Option<String>,
    pub progress: ProgressFilter,
    pub assignee: AssigneeFilter,
    /// Items due on this day
    pub due_on: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then_some(term);
        self
    }

    pub fn status(mut self, name: impl Into<String>) -> Self {
        self.status = Some(name.into());
        self
    }

    pub fn work_type(mut self, name: impl Into<String>) -> Self {
        self.work_type = Some(name.into());
        self
    }

    pub fn progress(mut self, progress: ProgressFilter) -> Self {
        self.progress = progress;
        self
    }

    pub fn assignee(mut self, assignee: AssigneeFilter) -> Self {
        self.assignee = assignee;
        self
    }

    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.due_on = Some(date);
        self
    }

    fn matches_search(&self, item: &WorkItem) -> bool {
        match self.search.as_deref() {
            None => true,
            Some(term) => {
                let term = term.trim();
                item.subject.to_lowercase().contains(&term.to_lowercase())
                    || item.id.to_string().contains(term)
            }
        }
    }

    pub fn matches(&self, item: &WorkItem) -> bool {
        self.matches_search(item)
            && self.status.as_deref().map_or(true, |s| item.status.name == s)
            && self.work_type.as_deref().map_or(true, |t| item.work_type.name == t)
            && self.progress.matches(item)
            && self.assignee.matches(item)
            && self.due_on.map_or(true, |day| item.due_date == Some(day))
    }

    /// Matching items, in input order
    pub fn apply(&self, items: &[WorkItem]) -> Vec<WorkItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

fn unique_in_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for name in names {
        if !seen.iter().any(|s| s == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

/// Distinct status names in first-seen order
pub fn unique_statuses(items: &[WorkItem]) -> Vec<String> {
    unique_in_order(items.iter().map(|i| i.status.name.as_str()))
}

/// Distinct type names in first-seen order
pub fn unique_types(items: &[WorkItem]) -> Vec<String> {
    unique_in_order(items.iter().map(|i| i.work_type.name.as_str()))
}
