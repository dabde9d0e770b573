//! Work item services

use op_core::OpResult;
use op_models::WorkItem;
use op_queries::{unique_statuses, unique_types, SortDirection, TaskFilter, TaskSort};
use serde::Serialize;
use tracing::debug;

use crate::base::ServiceContext;

/// Filtered, sorted task list with the filter choices of the full list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub items: Vec<WorkItem>,
    /// Number of items before filtering
    pub total: usize,
    pub statuses: Vec<String>,
    pub types: Vec<String>,
}

/// Fetches the work items of a project
#[derive(Debug, Clone)]
pub struct WorkItemsService {
    context: ServiceContext,
}

impl WorkItemsService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub async fn list(&self, project: &str) -> OpResult<Vec<WorkItem>> {
        let items = self.context.work_items.work_items(project).await?;
        debug!(target: "op_services", project, count = items.len(), "Listed work items");
        Ok(items)
    }

    /// Task list view: filter, then sort
    pub async fn tasks(
        &self,
        project: &str,
        filter: &TaskFilter,
        sort: TaskSort,
        direction: SortDirection,
    ) -> OpResult<TaskList> {
        let all = self.list(project).await?;
        let mut items = filter.apply(&all);
        sort.sort_directed(&mut items, direction);

        Ok(TaskList {
            total: all.len(),
            statuses: unique_statuses(&all),
            types: unique_types(&all),
            items,
        })
    }
}
