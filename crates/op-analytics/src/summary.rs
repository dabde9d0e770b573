//! Dashboard summary statistics

use chrono::NaiveDate;
use op_models::{percent, DashboardSummary, WorkItem};

/// The first milestone due after `today`
///
/// Milestones are ordered by due date with undated ones last; equal dates
/// keep their input order.
pub fn next_milestone(items: &[WorkItem], today: NaiveDate) -> Option<&WorkItem> {
    let mut milestones: Vec<&WorkItem> = items.iter().filter(|item| item.is_milestone()).collect();
    milestones.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    milestones
        .into_iter()
        .find(|item| item.due_date.is_some_and(|due| due > today))
}

/// Headline counts of a work item list
pub fn dashboard_summary(items: &[WorkItem], today: NaiveDate) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total: items.len(),
        ..DashboardSummary::default()
    };

    for item in items {
        if item.is_completed() {
            summary.completed += 1;
        } else if item.is_in_progress() {
            summary.in_progress += 1;
        } else {
            summary.not_started += 1;
        }
        if item.is_overdue(today) {
            summary.overdue += 1;
        }
    }

    summary.progress_percent = percent(summary.completed as f64, summary.total as f64);
    summary.next_milestone = next_milestone(items, today).cloned();
    summary
}
