//! Member services

use op_core::OpResult;
use op_models::User;
use tracing::debug;

use crate::base::ServiceContext;

/// Resolves the members of a project
#[derive(Debug, Clone)]
pub struct MembersService {
    context: ServiceContext,
}

impl MembersService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub async fn list(&self, project: &str) -> OpResult<Vec<User>> {
        let members = self.context.members.members(project).await?;
        debug!(target: "op_services", project, count = members.len(), "Listed members");
        Ok(members)
    }
}
