//! Aggregated dashboard metrics
//!
//! Output types of `op-analytics`. They are serialized as camelCase JSON for
//! whatever renders them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::work_package::WorkItem;

/// Ideal-vs-actual remaining effort per day
///
/// All four vectors have the same length; `dates` advances one day per entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurndownSeries {
    pub dates: Vec<NaiveDate>,
    pub ideal: Vec<f64>,
    pub actual: Vec<f64>,
    pub remaining: Vec<f64>,
}

impl BurndownSeries {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            dates: Vec::with_capacity(len),
            ideal: Vec::with_capacity(len),
            actual: Vec::with_capacity(len),
            remaining: Vec::with_capacity(len),
        }
    }

    pub fn push(&mut self, date: NaiveDate, ideal: f64, actual: f64, remaining: f64) {
        self.dates.push(date);
        self.ideal.push(ideal);
        self.actual.push(actual);
        self.remaining.push(remaining);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Equal lengths, consecutive dates and a non-increasing ideal line
    pub fn is_well_formed(&self) -> bool {
        let len = self.dates.len();
        len == self.ideal.len()
            && len == self.actual.len()
            && len == self.remaining.len()
            && self
                .dates
                .windows(2)
                .all(|w| (w[1] - w[0]).num_days() == 1)
            && self.ideal.windows(2).all(|w| w[1] <= w[0])
    }
}

/// Per-member rollup of assigned work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSummary {
    pub user: User,
    pub assigned_tasks: usize,
    pub completed_tasks: usize,
    pub estimated_hours: f64,
}

/// Per-member breakdown used by the team overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberStats {
    pub user: User,
    pub assigned_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub not_started_tasks: usize,
    pub total_hours: f64,
    pub completed_hours: f64,
    /// Share of estimated hours already completed, 0 when nothing is estimated
    pub completion_percent: u8,
}

/// Headline counts of the project dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub overdue: usize,
    pub progress_percent: u8,
    pub next_milestone: Option<WorkItem>,
}

/// `round(part / whole * 100)`, 0 when `whole` is not positive
pub fn percent(part: f64, whole: f64) -> u8 {
    if whole <= 0.0 {
        return 0;
    }
    (part / whole * 100.0).round().clamp(0.0, 100.0) as u8
}
