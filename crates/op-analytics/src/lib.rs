//! # op-analytics
//!
//! Aggregation engine of the dashboard.
//!
//! Every function here is synchronous and pure: it reads already-fetched
//! collections and returns fresh values, so calling it twice with the same
//! input yields the same output.
//!
//! - `burndown` - ideal vs. actual remaining effort per day, with a synthetic fallback
//! - `workload` - per-member assigned/completed counts and hours
//! - `summary` - headline counts, overdue items and the next milestone

pub mod burndown;
pub mod summary;
pub mod workload;

pub use burndown::BurndownCalculator;
pub use summary::{dashboard_summary, next_milestone};
pub use workload::{team_overview, workload};
