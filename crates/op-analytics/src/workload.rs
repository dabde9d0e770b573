//! Per-member workload
//!
//! An item counts for a member when its assignee id equals the member id.
//! Unassigned items and items assigned to someone outside the member list are
//! left out of every member's figures.

use op_models::{percent, TeamMemberStats, User, WorkItem, WorkloadSummary};

fn assigned_to<'a>(member: &User, items: &'a [WorkItem]) -> impl Iterator<Item = &'a WorkItem> {
    let id = member.id;
    items.iter().filter(move |item| item.is_assigned_to(id))
}

/// Assigned and completed counts and estimated hours, in member order
pub fn workload(members: &[User], items: &[WorkItem]) -> Vec<WorkloadSummary> {
    members
        .iter()
        .map(|member| {
            let mut summary = WorkloadSummary {
                user: member.clone(),
                assigned_tasks: 0,
                completed_tasks: 0,
                estimated_hours: 0.0,
            };
            for item in assigned_to(member, items) {
                summary.assigned_tasks += 1;
                if item.is_completed() {
                    summary.completed_tasks += 1;
                }
                summary.estimated_hours += item.estimate_or_zero();
            }
            summary
        })
        .collect()
}

/// Progress breakdown per member, in member order
pub fn team_overview(members: &[User], items: &[WorkItem]) -> Vec<TeamMemberStats> {
    members
        .iter()
        .map(|member| {
            let mut stats = TeamMemberStats {
                user: member.clone(),
                assigned_tasks: 0,
                completed_tasks: 0,
                in_progress_tasks: 0,
                not_started_tasks: 0,
                total_hours: 0.0,
                completed_hours: 0.0,
                completion_percent: 0,
            };
            for item in assigned_to(member, items) {
                let hours = item.estimate_or_zero();
                stats.assigned_tasks += 1;
                stats.total_hours += hours;
                if item.is_completed() {
                    stats.completed_tasks += 1;
                    stats.completed_hours += hours;
                } else if item.is_in_progress() {
                    stats.in_progress_tasks += 1;
                } else {
                    stats.not_started_tasks += 1;
                }
            }
            stats.completion_percent = percent(stats.completed_hours, stats.total_hours);
            stats
        })
        .collect()
}
