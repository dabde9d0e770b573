//! Command-line arguments

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use op_core::config::{AuthScheme, DashboardConfig, MemberLookupPolicy};
use op_queries::{AssigneeFilter, ProgressFilter, SortDirection, TaskFilter, TaskSort};

#[derive(Parser, Debug)]
#[command(name = "op-dash", version, about = "OpenProject dashboard analytics")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, short, env = "OP_DASH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// OpenProject base URL, overrides OPENPROJECT_URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// API key, overrides OPENPROJECT_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Authorization scheme: bearer or basic
    #[arg(long, global = true, value_parser = parse_scheme)]
    pub auth_scheme: Option<AuthScheme>,

    /// Member lookup failure policy: fail_fast or skip_failed
    #[arg(long, global = true, value_parser = parse_member_lookup)]
    pub member_lookup: Option<MemberLookupPolicy>,

    /// Log JSON lines instead of text
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Print single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Evaluate dates (overdue, burndown, milestones) as of this day (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub as_of: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List projects
    Projects,
    /// Show one project
    Project { project: String },
    /// List the normalized work items of a project
    WorkItems { project: String },
    /// Filtered and sorted task list
    Tasks(TasksArgs),
    /// List project members
    Members { project: String },
    /// Burndown series
    Burndown {
        project: String,
        /// Version name or id to scope the burndown to
        #[arg(long)]
        iteration: Option<String>,
    },
    /// Per-member workload
    Workload { project: String },
    /// Per-member progress breakdown
    Team { project: String },
    /// Headline counts and next milestone
    Summary { project: String },
    /// All views at once
    Dashboard {
        project: String,
        #[arg(long)]
        iteration: Option<String>,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct TasksArgs {
    pub project: String,
    /// Subject text or id fragment
    #[arg(long)]
    pub search: Option<String>,
    /// Exact status name
    #[arg(long)]
    pub status: Option<String>,
    /// Exact type name
    #[arg(long = "type")]
    pub work_type: Option<String>,
    /// all, completed, in-progress or not-started
    #[arg(long, default_value = "all")]
    pub progress: ProgressFilter,
    /// any, unassigned or a user id
    #[arg(long, default_value = "any")]
    pub assignee: AssigneeFilter,
    /// Only items due on this date (YYYY-MM-DD)
    #[arg(long)]
    pub due_on: Option<NaiveDate>,
    /// due-date, priority or status
    #[arg(long, default_value = "due-date")]
    pub sort: TaskSort,
    /// asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortDirection,
}

impl TasksArgs {
    pub fn filter(&self) -> TaskFilter {
        let mut filter = TaskFilter::new()
            .progress(self.progress)
            .assignee(self.assignee);
        if let Some(search) = &self.search {
            filter = filter.search(search.clone());
        }
        if let Some(status) = &self.status {
            filter = filter.status(status.clone());
        }
        if let Some(work_type) = &self.work_type {
            filter = filter.work_type(work_type.clone());
        }
        if let Some(due_on) = self.due_on {
            filter = filter.due_on(due_on);
        }
        filter
    }
}

fn parse_scheme(value: &str) -> Result<AuthScheme, String> {
    AuthScheme::parse(value).ok_or_else(|| format!("expected bearer or basic, got {value}"))
}

fn parse_member_lookup(value: &str) -> Result<MemberLookupPolicy, String> {
    MemberLookupPolicy::parse(value)
        .ok_or_else(|| format!("expected fail_fast or skip_failed, got {value}"))
}

impl Cli {
    /// Command-line flags win over file and environment configuration
    pub fn apply_overrides(&self, config: &mut DashboardConfig) -> anyhow::Result<()> {
        if let Some(url) = &self.url {
            config.api.base_url = Some(url.clone());
        }
        if let Some(key) = &self.api_key {
            config.api.api_key = Some(key.clone());
        }
        if let Some(scheme) = self.auth_scheme {
            config.api.auth_scheme = scheme;
        }
        if let Some(policy) = self.member_lookup {
            config.api.member_lookup = policy;
        }
        if self.log_json {
            config.logging.json = true;
        }
        Ok(())
    }
}
