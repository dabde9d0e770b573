//! Data-source seams
//!
//! Services depend on these traits rather than on `ApiClient`, so they can be
//! driven by mocks in tests. `project` arguments accept a numeric id or an
//! identifier; the API resolves both.

use async_trait::async_trait;
use op_core::OpResult;
use op_models::{Project, User, WorkItem};

#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// All projects visible to the acting user
    async fn projects(&self) -> OpResult<Vec<Project>>;

    async fn project(&self, project: &str) -> OpResult<Project>;
}

#[async_trait]
pub trait WorkItemSource: Send + Sync {
    /// All work items of a project, every page
    async fn work_items(&self, project: &str) -> OpResult<Vec<WorkItem>>;
}

#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Users holding a membership in the project, in membership order
    async fn members(&self, project: &str) -> OpResult<Vec<User>>;
}
