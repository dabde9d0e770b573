//! Common value types used throughout the dashboard

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Color representation (for statuses and types)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Hex color code (e.g., "#FF0000")
    pub hex: String,
}

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }
}

impl Default for Color {
    /// Neutral grey used when the API does not expose a status color
    fn default() -> Self {
        Self::new("#cccccc")
    }
}

/// Inclusive start, exclusive end range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days between start and end; negative when end precedes start
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The `offset`-th day of the range, or None on calendar overflow
    pub fn day(&self, offset: u64) -> Option<NaiveDate> {
        self.start.checked_add_days(Days::new(offset))
    }
}

/// Effort expressed in hours, parsed from OpenProject's ISO 8601 durations
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct Hours(pub f64);

impl Hours {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Parse an ISO 8601 duration such as `PT8H`, `PT1H30M` or `P1DT2H`.
    ///
    /// Days count as 24 hours and weeks as 7 days. Calendar units (years, months)
    /// have no fixed length in hours and are rejected.
    pub fn from_iso8601(input: &str) -> Option<Self> {
        let rest = input.trim().strip_prefix('P')?;
        if rest.is_empty() {
            return None;
        }

        let mut hours = 0.0;
        let mut in_time = false;
        let mut number = String::new();
        let mut saw_component = false;

        for ch in rest.chars() {
            match ch {
                'T' if !in_time && number.is_empty() => in_time = true,
                '0'..='9' | '.' | ',' => number.push(if ch == ',' { '.' } else { ch }),
                unit => {
                    let value: f64 = number.parse().ok()?;
                    number.clear();
                    hours += match (in_time, unit) {
                        (false, 'W') => value * 7.0 * 24.0,
                        (false, 'D') => value * 24.0,
                        (true, 'H') => value,
                        (true, 'M') => value / 60.0,
                        (true, 'S') => value / 3600.0,
                        _ => return None,
                    };
                    saw_component = true;
                }
            }
        }

        if !number.is_empty() || !saw_component {
            return None;
        }
        Some(Self(hours))
    }
}
