//! # op-models
//!
//! Normalized domain models for the OpenProject dashboard.
//!
//! Everything here is produced by the parse step in `op-client` or by the
//! aggregations in `op-analytics`. Values are read-only snapshots: they are
//! rebuilt from the upstream API on every request and never mutated locally.

pub use op_core::traits::Id;

pub mod reference;
pub mod work_package;
pub mod user;
pub mod project;
pub mod metrics;

pub use reference::{Reference, StatusRef};
pub use work_package::{Progress, WorkItem};
pub use user::User;
pub use project::Project;
pub use metrics::{percent, BurndownSeries, DashboardSummary, TeamMemberStats, WorkloadSummary};
