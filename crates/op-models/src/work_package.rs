//! Work item model
//!
//! Work items (OpenProject work packages) are the input of every aggregation:
//! burndown, workload and summary statistics are all derived from them.

pub mod model;

pub use model::*;
