//! Subcommand dispatch

use op_core::config::DashboardConfig;
use serde_json::Value;
use tracing::debug;

use op_services::{
    AnalyticsService, MembersService, ProjectsService, ServiceContext, WorkItemsService,
};

use crate::cli::Command;

/// Run `command` and return its result as JSON
pub async fn run(
    command: &Command,
    context: ServiceContext,
    config: &DashboardConfig,
) -> anyhow::Result<Value> {
    debug!(?command, "Running command");

    let value = match command {
        Command::Projects => serde_json::to_value(ProjectsService::new(context).list().await?)?,
        Command::Project { project } => {
            serde_json::to_value(ProjectsService::new(context).get(project).await?)?
        }
        Command::WorkItems { project } => {
            serde_json::to_value(WorkItemsService::new(context).list(project).await?)?
        }
        Command::Tasks(args) => {
            let list = WorkItemsService::new(context)
                .tasks(&args.project, &args.filter(), args.sort, args.order)
                .await?;
            serde_json::to_value(list)?
        }
        Command::Members { project } => {
            serde_json::to_value(MembersService::new(context).list(project).await?)?
        }
        Command::Burndown { project, iteration } => {
            let analytics = AnalyticsService::new(context, config.analytics.clone());
            serde_json::to_value(analytics.burndown(project, iteration.as_deref()).await)?
        }
        Command::Workload { project } => {
            let analytics = AnalyticsService::new(context, config.analytics.clone());
            serde_json::to_value(analytics.workload(project).await?)?
        }
        Command::Team { project } => {
            let analytics = AnalyticsService::new(context, config.analytics.clone());
            serde_json::to_value(analytics.team_overview(project).await?)?
        }
        Command::Summary { project } => {
            let analytics = AnalyticsService::new(context, config.analytics.clone());
            serde_json::to_value(analytics.dashboard_summary(project).await?)?
        }
        Command::Dashboard { project, iteration } => {
            let analytics = AnalyticsService::new(context, config.analytics.clone());
            serde_json::to_value(analytics.dashboard(project, iteration.as_deref()).await?)?
        }
    };

    Ok(value)
}
