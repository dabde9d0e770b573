//! # op-queries
//!
//! Task-list queries over normalized work items.
//!
//! ## Structure
//!
//! - `filters` - search, status, type, progress, assignee and due-date filters
//! - `sorts` - due date, priority and status orderings
//!
//! ## Example
//!
//! ```
//! use op_models::WorkItem;
//! use op_queries::{ProgressFilter, TaskFilter, TaskSort};
//!
//! let items = vec![
//!     WorkItem::new(1, "Write docs").with_percentage(100),
//!     WorkItem::new(2, "Fix login").with_percentage(30),
//! ];
//!
//! let filter = TaskFilter::new().progress(ProgressFilter::InProgress);
//! let mut open = filter.apply(&items);
//! TaskSort::DueDate.sort(&mut open);
//!
//! assert_eq!(open.len(), 1);
//! assert_eq!(open[0].id, 2);
//! ```

pub mod filters;
pub mod sorts;

pub use filters::{unique_statuses, unique_types, AssigneeFilter, ProgressFilter, TaskFilter};
pub use sorts::{SortDirection, TaskSort};
