//! Burndown computation
//!
//! The window runs from the earliest start date to the latest due date of the
//! (optionally iteration-scoped) work items. Effort is the sum of estimates,
//! or a synthetic per-item effort when nothing is estimated. Days up to today
//! use the items' completion as of their last update; later days hold the
//! last known remaining effort.

use chrono::{Days, NaiveDate};
use op_core::config::AnalyticsConfig;
use op_core::types::DateRange;
use op_core::{OpError, OpResult};
use op_models::{BurndownSeries, WorkItem};
use tracing::{debug, warn};

/// Burndown series builder
#[derive(Debug, Clone, Default)]
pub struct BurndownCalculator {
    config: AnalyticsConfig,
}

impl BurndownCalculator {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Days covered by the series for `items`; `end` is exclusive
    ///
    /// Without items the window is the minimum length starting today. A due
    /// date before the start clamps to the minimum length, a span beyond the
    /// maximum length is cut off there.
    pub fn window(&self, items: &[&WorkItem], today: NaiveDate) -> OpResult<DateRange> {
        let min_days = u64::from(self.config.min_window_days);
        if items.is_empty() {
            return span_from(today, min_days);
        }

        let start = items
            .iter()
            .filter_map(|item| item.start_date)
            .min()
            .unwrap_or(today);
        let end = match items.iter().filter_map(|item| item.due_date).max() {
            Some(due) => due,
            None => start
                .checked_add_days(Days::new(u64::from(self.config.default_window_days)))
                .ok_or_else(|| OpError::Internal(format!("burndown window overflows after {start}")))?,
        };

        let span = u64::try_from(DateRange::new(start, end).span_days()).unwrap_or(0);
        let max_days = u64::from(self.config.max_window_days).max(min_days);
        if span > max_days {
            warn!(
                target: "op_analytics",
                start = %start,
                end = %end,
                span,
                max_days,
                "Burndown window too long, truncating"
            );
        }
        span_from(start, span.clamp(min_days, max_days))
    }

    /// Compute the series for `items`, scoped to `iteration` when given
    ///
    /// `iteration` matches the version name or the version id.
    pub fn compute(
        &self,
        items: &[WorkItem],
        iteration: Option<&str>,
        today: NaiveDate,
    ) -> OpResult<BurndownSeries> {
        let scoped: Vec<&WorkItem> = items
            .iter()
            .filter(|item| iteration.map_or(true, |it| item.in_iteration(it)))
            .collect();

        let window = self.window(&scoped, today)?;
        let start = window.start;
        let len = window.span_days().max(0) as u64;

        let estimated: f64 = scoped.iter().map(|item| item.estimate_or_zero()).sum();
        let synthetic = estimated <= 0.0;
        let per_item = self.config.synthetic_hours_per_item;
        let effort = |item: &WorkItem| {
            if synthetic {
                per_item
            } else {
                item.estimate_or_zero()
            }
        };
        let total = if synthetic {
            per_item * scoped.len() as f64
        } else {
            estimated
        };

        let step = total / len as f64;
        let mut series = BurndownSeries::with_capacity(len as usize);
        let mut last_remaining = total;

        for i in 0..len {
            let day = window
                .day(i)
                .ok_or_else(|| OpError::Internal(format!("burndown day {i} after {start} overflows")))?;
            let ideal = (total - step * i as f64).max(0.0);

            if day <= today {
                let completed: f64 = scoped
                    .iter()
                    .filter(|item| {
                        item.updated_at
                            .is_some_and(|updated| updated.date_naive() <= day)
                    })
                    .map(|item| effort(item) * item.completion_ratio())
                    .sum();
                let remaining = (total - completed).max(0.0);
                last_remaining = remaining;
                series.push(day, ideal, total - completed, remaining);
            } else {
                series.push(day, ideal, total, last_remaining);
            }
        }

        debug!(
            target: "op_analytics",
            items = scoped.len(),
            iteration = iteration.unwrap_or("-"),
            total,
            synthetic,
            start = %start,
            days = len,
            "Computed burndown"
        );

        if !series.is_well_formed() {
            return Err(OpError::Internal(format!(
                "inconsistent burndown series of {len} days from {start}"
            )));
        }
        Ok(series)
    }

    /// Synthetic series ending today
    ///
    /// The ideal line falls from the configured total to zero; the actual line
    /// burns at the early rate for the first half and the late rate after.
    pub fn fallback(&self, today: NaiveDate) -> BurndownSeries {
        let days = u64::from(self.config.fallback_days.max(1));
        let total = self.config.fallback_total;
        let step = total / days as f64;
        let start = today
            .checked_sub_days(Days::new(days - 1))
            .unwrap_or(NaiveDate::MIN);

        let mut series = BurndownSeries::with_capacity(days as usize);
        for (i, day) in start.iter_days().take(days as usize).enumerate() {
            let burned = step * i as f64;
            let rate = if (i as u64) < days / 2 {
                self.config.fallback_early_rate
            } else {
                self.config.fallback_late_rate
            };
            let actual = (total - burned * rate).max(0.0);
            series.push(day, (total - burned).max(0.0), actual, actual);
        }
        series
    }
}

fn span_from(start: NaiveDate, days: u64) -> OpResult<DateRange> {
    let end = start
        .checked_add_days(Days::new(days))
        .ok_or_else(|| OpError::Internal(format!("burndown window overflows after {start}")))?;
    Ok(DateRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_items;
    use chrono::{TimeZone, Utc};
    use op_models::Reference;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn updated(m: u32, d: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, m, d, 15, 0, 0).unwrap()
    }

    fn calculator() -> BurndownCalculator {
        BurndownCalculator::default()
    }

    #[test]
    fn test_empty_input_is_seven_zero_days() {
        let today = date(3, 10);
        let series = calculator().compute(&[], None, today).unwrap();

        assert_eq!(series.len(), 7);
        assert_eq!(series.dates[0], today);
        assert!(series.ideal.iter().all(|v| *v == 0.0));
        assert!(series.actual.iter().all(|v| *v == 0.0));
        assert!(series.remaining.iter().all(|v| *v == 0.0));
        assert!(series.is_well_formed());
    }

    #[test]
    fn test_unestimated_item_uses_synthetic_effort() {
        let today = date(3, 10);
        let item = WorkItem::new(1, "Unestimated")
            .with_percentage(50)
            .with_updated_at(updated(3, 9));

        let series = calculator().compute(&[item], None, today).unwrap();

        // No dates: 14 days from today
        assert_eq!(series.len(), 14);
        assert_eq!(series.ideal[0], 8.0);
        assert_eq!(series.actual[0], 4.0);
        assert_eq!(series.remaining[0], 4.0);
        // Future days hold total for actual and the last remaining value
        assert_eq!(series.actual[1], 8.0);
        assert_eq!(series.remaining[13], 4.0);
    }

    #[test]
    fn test_window_from_dates() {
        let items = vec![
            WorkItem::new(1, "a")
                .with_dates(Some(date(3, 1)), Some(date(3, 11)))
                .with_estimate(10.0),
            WorkItem::new(2, "b")
                .with_dates(Some(date(3, 4)), Some(date(3, 21)))
                .with_estimate(10.0),
        ];
        let series = calculator().compute(&items, None, date(3, 10)).unwrap();

        assert_eq!(series.len(), 20);
        assert_eq!(series.dates[0], date(3, 1));
        assert_eq!(series.dates[19], date(3, 20));
        assert_eq!(series.ideal[0], 20.0);
        assert_eq!(series.ideal[10], 10.0);
        assert!(series.is_well_formed());
    }

    #[test]
    fn test_due_before_start_clamps_to_floor() {
        let item = WorkItem::new(1, "Backwards")
            .with_dates(Some(date(3, 10)), Some(date(3, 1)))
            .with_estimate(6.0);
        let series = calculator().compute(&[item], None, date(3, 10)).unwrap();
        assert_eq!(series.len(), 7);
        assert_eq!(series.dates[0], date(3, 10));
    }

    #[test]
    fn test_mistyped_due_date_truncates_window() {
        let item = WorkItem::new(1, "Typo")
            .with_dates(Some(date(3, 1)), NaiveDate::from_ymd_opt(9999, 3, 1))
            .with_estimate(6.0);
        let series = calculator().compute(&[item], None, date(3, 10)).unwrap();

        assert_eq!(series.len(), 366);
        assert_eq!(series.dates[0], date(3, 1));
        assert!(series.is_well_formed());

        let config = AnalyticsConfig {
            max_window_days: 30,
            ..AnalyticsConfig::default()
        };
        let item = WorkItem::new(1, "Typo").with_dates(Some(date(3, 1)), Some(date(12, 1)));
        let window = BurndownCalculator::new(config).window(&[&item], date(3, 10)).unwrap();
        assert_eq!(window.span_days(), 30);
    }

    #[test]
    fn test_completion_counts_from_update_day() {
        let today = date(3, 5);
        let items = vec![
            WorkItem::new(1, "done early")
                .with_dates(Some(date(3, 1)), Some(date(3, 8)))
                .with_estimate(4.0)
                .with_percentage(100)
                .with_updated_at(updated(3, 2)),
            WorkItem::new(2, "half today")
                .with_estimate(4.0)
                .with_percentage(50)
                .with_updated_at(updated(3, 5)),
        ];
        let series = calculator().compute(&items, None, today).unwrap();

        assert_eq!(series.len(), 7);
        assert_eq!(series.actual[0], 8.0); // 3/1
        assert_eq!(series.actual[1], 4.0); // 3/2
        assert_eq!(series.actual[4], 2.0); // 3/5
        assert_eq!(series.actual[5], 8.0); // future
        assert_eq!(series.remaining[5], 2.0);
        assert_eq!(series.remaining[6], 2.0);
    }

    #[test]
    fn test_all_future_window_holds_total() {
        let item = WorkItem::new(1, "later")
            .with_dates(Some(date(4, 1)), Some(date(4, 10)))
            .with_estimate(5.0);
        let series = calculator().compute(&[item], None, date(3, 1)).unwrap();
        assert!(series.actual.iter().all(|v| *v == 5.0));
        assert!(series.remaining.iter().all(|v| *v == 5.0));
    }

    #[test]
    fn test_iteration_filter_by_name_or_id() {
        let items = vec![
            WorkItem::new(1, "in sprint")
                .with_version(Reference::new(4, "Sprint 1"))
                .with_estimate(3.0),
            WorkItem::new(2, "other sprint")
                .with_version(Reference::new(5, "Sprint 2"))
                .with_estimate(7.0),
            WorkItem::new(3, "backlog").with_estimate(11.0),
        ];
        let today = date(3, 1);

        let by_name = calculator().compute(&items, Some("Sprint 1"), today).unwrap();
        let by_id = calculator().compute(&items, Some("4"), today).unwrap();
        let unscoped = calculator().compute(&items, None, today).unwrap();

        assert_eq!(by_name.ideal[0], 3.0);
        assert_eq!(by_name, by_id);
        assert_eq!(unscoped.ideal[0], 21.0);
    }

    #[test]
    fn test_fallback_shape() {
        let today = date(3, 14);
        let series = calculator().fallback(today);

        assert_eq!(series.len(), 14);
        assert_eq!(series.dates[13], today);
        assert_eq!(series.dates[0], date(3, 1));
        assert_eq!(series.ideal[0], 100.0);
        assert_eq!(series.actual, series.remaining);
        assert!((series.actual[1] - (100.0 - 100.0 / 14.0 * 0.8)).abs() < 1e-9);
        assert!((series.actual[7] - (100.0 - 50.0 * 1.1)).abs() < 1e-9);
        // The late rate overshoots and is floored at zero
        assert_eq!(series.actual[13], 0.0);
        assert!(series.is_well_formed());
    }

    #[test]
    fn test_random_inputs_keep_shape_and_are_idempotent() {
        let base = date(2, 1);
        for _ in 0..50 {
            let items = random_items(12, 3, base);
            let today = date(2, 15);
            let first = calculator().compute(&items, None, today).unwrap();
            let second = calculator().compute(&items, None, today).unwrap();

            assert_eq!(first, second);
            assert!(first.len() >= 7);
            assert!(first.is_well_formed());
            let total: f64 = items.iter().map(|i| i.estimate_or_zero()).sum();
            let expected = if total > 0.0 { total } else { 8.0 * items.len() as f64 };
            assert!((first.ideal[0] - expected).abs() < 1e-9);
        }
    }
}
