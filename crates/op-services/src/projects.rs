//! Project services

use op_core::OpResult;
use op_models::Project;
use tracing::debug;

use crate::base::ServiceContext;

/// Lists and looks up projects
#[derive(Debug, Clone)]
pub struct ProjectsService {
    context: ServiceContext,
}

impl ProjectsService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub async fn list(&self) -> OpResult<Vec<Project>> {
        let projects = self.context.projects.projects().await?;
        debug!(target: "op_services", count = projects.len(), "Listed projects");
        Ok(projects)
    }

    /// Project by numeric id or identifier
    pub async fn get(&self, project: &str) -> OpResult<Project> {
        self.context.projects.project(project).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSource;
    use op_core::OpError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_passes_identifier_through() {
        let mut source = MockSource::new();
        source
            .expect_project()
            .times(1)
            .returning(|project| {
                assert_eq!(project, "apollo");
                Ok(Project::new(3, "Apollo", "apollo"))
            });

        let service = ProjectsService::new(ServiceContext::new(Arc::new(source)));
        assert_eq!(service.get("apollo").await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_list_propagates_failure() {
        let mut source = MockSource::new();
        source
            .expect_projects()
            .returning(|| Err(OpError::request(503, "Service Unavailable")));

        let service = ProjectsService::new(ServiceContext::new(Arc::new(source)));
        let err = service.list().await.unwrap_err();
        assert_eq!(err.status_code(), 503);
    }
}
