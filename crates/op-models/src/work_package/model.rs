//! Normalized work item

use chrono::{DateTime, NaiveDate, Utc};
use op_core::traits::Id;
use serde::{Deserialize, Serialize};

use crate::reference::{Reference, StatusRef, NORMAL_PRIORITY, UNKNOWN};

/// Progress bucket derived from the completion percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Progress {
    NotStarted,
    InProgress,
    Completed,
}

impl Progress {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => Progress::NotStarted,
            100.. => Progress::Completed,
            _ => Progress::InProgress,
        }
    }
}

/// Work item as consumed by the dashboard
///
/// Invariants: `percentage_done` is within 0..=100 and dates are valid
/// calendar dates. An item without assignee is unassigned and takes no part
/// in per-member aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: Id,
    pub subject: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// Estimated effort in hours
    pub estimated_hours: Option<f64>,
    pub percentage_done: u8,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: StatusRef,
    #[serde(rename = "type")]
    pub work_type: Reference,
    pub assignee: Option<Reference>,
    pub project: Reference,
    pub priority: Reference,
    pub version: Option<Reference>,
}

impl WorkItem {
    /// Create a work item with placeholder references and no schedule
    pub fn new(id: Id, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
            description: None,
            start_date: None,
            due_date: None,
            estimated_hours: None,
            percentage_done: 0,
            created_at: None,
            updated_at: None,
            status: StatusRef::default(),
            work_type: Reference::placeholder(UNKNOWN),
            assignee: None,
            project: Reference::placeholder(UNKNOWN),
            priority: Reference::placeholder(NORMAL_PRIORITY),
            version: None,
        }
    }

    pub fn with_status(mut self, status: StatusRef) -> Self {
        self.status = status;
        self
    }

    pub fn with_type(mut self, work_type: Reference) -> Self {
        self.work_type = work_type;
        self
    }

    pub fn with_assignee(mut self, assignee: Reference) -> Self {
        self.assignee = Some(assignee);
        self
    }

    pub fn with_project(mut self, project: Reference) -> Self {
        self.project = project;
        self
    }

    pub fn with_priority(mut self, priority: Reference) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_version(mut self, version: Reference) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, due: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.due_date = due;
        self
    }

    pub fn with_estimate(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Set the completion percentage, clamped to 100
    pub fn with_percentage(mut self, percentage: u8) -> Self {
        self.percentage_done = percentage.min(100);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn progress(&self) -> Progress {
        Progress::from_percentage(self.percentage_done)
    }

    pub fn is_completed(&self) -> bool {
        self.progress() == Progress::Completed
    }

    pub fn is_in_progress(&self) -> bool {
        self.progress() == Progress::InProgress
    }

    /// Due on or before `today` and not finished
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due <= today)
    }

    /// Whether the type name contains "milestone" (case-insensitive)
    pub fn is_milestone(&self) -> bool {
        self.work_type.name.to_lowercase().contains("milestone")
    }

    pub fn is_assigned_to(&self, user_id: Id) -> bool {
        self.assignee.as_ref().is_some_and(|a| a.is(user_id))
    }

    pub fn is_unassigned(&self) -> bool {
        self.assignee.as_ref().map_or(true, |a| a.id.is_none())
    }

    /// Whether the item belongs to the iteration named or numbered `iteration`
    pub fn in_iteration(&self, iteration: &str) -> bool {
        self.version.as_ref().is_some_and(|v| {
            v.name == iteration || v.id.is_some_and(|id| id.to_string() == iteration)
        })
    }

    /// Estimated hours, counting a missing estimate as zero
    pub fn estimate_or_zero(&self) -> f64 {
        self.estimated_hours.unwrap_or(0.0)
    }

    /// Completion as a fraction in 0.0..=1.0
    pub fn completion_ratio(&self) -> f64 {
        f64::from(self.percentage_done) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_buckets() {
        assert_eq!(Progress::from_percentage(0), Progress::NotStarted);
        assert_eq!(Progress::from_percentage(1), Progress::InProgress);
        assert_eq!(Progress::from_percentage(99), Progress::InProgress);
        assert_eq!(Progress::from_percentage(100), Progress::Completed);
    }

    #[test]
    fn test_percentage_is_clamped() {
        let item = WorkItem::new(1, "Overachiever").with_percentage(150);
        assert_eq!(item.percentage_done, 100);
        assert!(item.is_completed());
    }

    #[test]
    fn test_overdue() {
        let today = date(2024, 3, 10);
        let late = WorkItem::new(1, "Late")
            .with_dates(None, Some(date(2024, 3, 9)))
            .with_percentage(80);
        let done = late.clone().with_percentage(100);
        let due_today = late.clone().with_dates(None, Some(today));

        assert!(late.is_overdue(today));
        assert!(!done.is_overdue(today));
        assert!(due_today.is_overdue(today));
        assert!(!WorkItem::new(2, "Undated").is_overdue(today));
    }

    #[test]
    fn test_milestone_detection_is_case_insensitive() {
        let item = WorkItem::new(1, "Release").with_type(Reference::new(2, "MILESTONE"));
        assert!(item.is_milestone());
        assert!(!WorkItem::new(2, "Task").is_milestone());
    }

    #[test]
    fn test_iteration_matches_name_or_id() {
        let item = WorkItem::new(1, "Scoped").with_version(Reference::new(7, "Sprint 3"));
        assert!(item.in_iteration("Sprint 3"));
        assert!(item.in_iteration("7"));
        assert!(!item.in_iteration("Sprint 4"));
        assert!(!WorkItem::new(2, "Unscoped").in_iteration("7"));
    }

    #[test]
    fn test_assignment() {
        let item = WorkItem::new(1, "Owned").with_assignee(Reference::new(5, "Ada"));
        assert!(item.is_assigned_to(5));
        assert!(!item.is_assigned_to(6));
        assert!(!item.is_unassigned());
        assert!(WorkItem::new(2, "Orphan").is_unassigned());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(WorkItem::new(1, "Json")).unwrap();
        assert!(json.get("percentageDone").is_some());
        assert!(json.get("type").is_some());
    }
}
