//! Analytics services
//!
//! Workload, team and summary views propagate fetch failures. Burndown never
//! fails: a failed fetch or computation is logged and replaced by the
//! synthetic fallback series.

use op_analytics::{dashboard_summary, team_overview, workload, BurndownCalculator};
use op_core::config::AnalyticsConfig;
use op_core::OpResult;
use op_models::{
    BurndownSeries, DashboardSummary, Project, TeamMemberStats, WorkItem, WorkloadSummary,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::base::ServiceContext;

/// Every dashboard view of one project, from a single fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub project: Project,
    pub summary: DashboardSummary,
    pub burndown: BurndownSeries,
    pub workload: Vec<WorkloadSummary>,
    pub team: Vec<TeamMemberStats>,
}

#[derive(Debug, Clone)]
pub struct AnalyticsService {
    context: ServiceContext,
    burndown: BurndownCalculator,
}

impl AnalyticsService {
    pub fn new(context: ServiceContext, config: AnalyticsConfig) -> Self {
        Self {
            context,
            burndown: BurndownCalculator::new(config),
        }
    }

    fn burndown_or_fallback(
        &self,
        project: &str,
        items: &[WorkItem],
        iteration: Option<&str>,
    ) -> BurndownSeries {
        let today = self.context.today();
        self.burndown
            .compute(items, iteration, today)
            .unwrap_or_else(|e| {
                warn!(target: "op_services", project, error = %e, "Burndown computation failed, using fallback series");
                self.burndown.fallback(today)
            })
    }

    /// Burndown of a project, optionally scoped to an iteration
    pub async fn burndown(&self, project: &str, iteration: Option<&str>) -> BurndownSeries {
        match self.context.work_items.work_items(project).await {
            Ok(items) => self.burndown_or_fallback(project, &items, iteration),
            Err(e) => {
                warn!(target: "op_services", project, error = %e, "Work item fetch failed, using fallback burndown");
                self.burndown.fallback(self.context.today())
            }
        }
    }

    pub async fn workload(&self, project: &str) -> OpResult<Vec<WorkloadSummary>> {
        let (members, items) = tokio::try_join!(
            self.context.members.members(project),
            self.context.work_items.work_items(project),
        )?;
        Ok(workload(&members, &items))
    }

    pub async fn team_overview(&self, project: &str) -> OpResult<Vec<TeamMemberStats>> {
        let (members, items) = tokio::try_join!(
            self.context.members.members(project),
            self.context.work_items.work_items(project),
        )?;
        Ok(team_overview(&members, &items))
    }

    pub async fn dashboard_summary(&self, project: &str) -> OpResult<DashboardSummary> {
        let items = self.context.work_items.work_items(project).await?;
        Ok(dashboard_summary(&items, self.context.today()))
    }

    /// All views of a project; only the burndown degrades instead of failing
    pub async fn dashboard(&self, project: &str, iteration: Option<&str>) -> OpResult<DashboardView> {
        let (details, items, members) = tokio::try_join!(
            self.context.projects.project(project),
            self.context.work_items.work_items(project),
            self.context.members.members(project),
        )?;

        info!(
            target: "op_services",
            project,
            items = items.len(),
            members = members.len(),
            "Building dashboard"
        );

        Ok(DashboardView {
            summary: dashboard_summary(&items, self.context.today()),
            burndown: self.burndown_or_fallback(project, &items, iteration),
            workload: workload(&members, &items),
            team: team_overview(&members, &items),
            project: details,
        })
    }
}
