//! # op-services
//!
//! Services behind every dashboard view.
//!
//! Each service fetches what a view needs through the data-source traits of
//! `op-client`, waits for all of it, and hands it to the pure aggregations
//! of `op-analytics` and `op-queries`.

pub mod analytics;
pub mod base;
pub mod members;
pub mod projects;
pub mod work_items;

pub use analytics::{AnalyticsService, DashboardView};
pub use base::ServiceContext;
pub use members::MembersService;
pub use projects::ProjectsService;
pub use work_items::{TaskList, WorkItemsService};

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use mockall::mock;
    use op_client::{MemberSource, ProjectSource, WorkItemSource};
    use op_core::OpResult;
    use op_models::{Project, User, WorkItem};

    mock! {
        pub Source {}

        #[async_trait]
        impl ProjectSource for Source {
            async fn projects(&self) -> OpResult<Vec<Project>>;
            async fn project(&self, project: &str) -> OpResult<Project>;
        }

        #[async_trait]
        impl WorkItemSource for Source {
            async fn work_items(&self, project: &str) -> OpResult<Vec<WorkItem>>;
        }

        #[async_trait]
        impl MemberSource for Source {
            async fn members(&self, project: &str) -> OpResult<Vec<User>>;
        }
    }
}
