//! Work package parsing

use chrono::{DateTime, NaiveDate, Utc};
use op_core::traits::Id;
use op_core::types::Hours;
use op_core::{OpError, OpResult};
use op_models::reference::{NORMAL_PRIORITY, UNASSIGNED, UNKNOWN};
use op_models::{Reference, StatusRef, WorkItem};
use serde::Deserialize;
use serde_json::Value;

use super::hal::{lenient, FormattableText, HalLink};

const ENTITY: &str = "work package";

/// `estimatedTime` is an ISO 8601 duration, but some servers and fixtures send hours
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EstimatedTime {
    Hours(f64),
    Duration(String),
}

impl EstimatedTime {
    fn hours(&self) -> Option<f64> {
        let hours = match self {
            EstimatedTime::Hours(hours) => *hours,
            EstimatedTime::Duration(duration) => Hours::from_iso8601(duration)?.value(),
        };
        (hours.is_finite() && hours >= 0.0).then_some(hours)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkPackageWire {
    id: Id,
    #[serde(default, deserialize_with = "lenient")]
    subject: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    description: Option<FormattableText>,
    #[serde(default, deserialize_with = "lenient")]
    start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient")]
    due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient")]
    estimated_time: Option<EstimatedTime>,
    #[serde(default, deserialize_with = "lenient")]
    percentage_done: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links", default, deserialize_with = "lenient")]
    links: Option<WorkPackageLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkPackageLinks {
    #[serde(default, deserialize_with = "lenient")]
    status: Option<HalLink>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    work_type: Option<HalLink>,
    #[serde(default, deserialize_with = "lenient")]
    assignee: Option<HalLink>,
    #[serde(default, deserialize_with = "lenient")]
    project: Option<HalLink>,
    #[serde(default, deserialize_with = "lenient")]
    priority: Option<HalLink>,
    #[serde(default, deserialize_with = "lenient")]
    version: Option<HalLink>,
}

/// Required relation: a missing link still yields a placeholder reference
fn required(link: Option<&HalLink>, placeholder: &str) -> Reference {
    match link {
        Some(link) => Reference {
            id: link.id(),
            name: link.title_or(placeholder),
        },
        None => Reference::placeholder(placeholder),
    }
}

/// Optional relation: absent when the link is missing or `{"href": null}`
fn optional(link: Option<&HalLink>, placeholder: &str) -> Option<Reference> {
    link.filter(|link| link.is_present())
        .map(|link| Reference {
            id: link.id(),
            name: link.title_or(placeholder),
        })
}

fn clamp_percentage(value: Option<f64>) -> u8 {
    match value {
        Some(v) if v.is_finite() => v.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

impl From<WorkPackageWire> for WorkItem {
    fn from(wire: WorkPackageWire) -> Self {
        let links = wire.links.unwrap_or_default();

        let mut item = WorkItem::new(wire.id, wire.subject.unwrap_or_default())
            .with_status(StatusRef::from(required(links.status.as_ref(), UNKNOWN)))
            .with_type(required(links.work_type.as_ref(), UNKNOWN))
            .with_project(required(links.project.as_ref(), UNKNOWN))
            .with_priority(required(links.priority.as_ref(), NORMAL_PRIORITY))
            .with_dates(wire.start_date, wire.due_date)
            .with_percentage(clamp_percentage(wire.percentage_done));

        if let Some(assignee) = optional(links.assignee.as_ref(), UNASSIGNED) {
            item = item.with_assignee(assignee);
        }
        if let Some(version) = optional(links.version.as_ref(), UNKNOWN) {
            item = item.with_version(version);
        }
        if let Some(hours) = wire.estimated_time.as_ref().and_then(EstimatedTime::hours) {
            item = item.with_estimate(hours);
        }
        if let Some(updated_at) = wire.updated_at {
            item = item.with_updated_at(updated_at);
        }

        WorkItem {
            description: wire.description.and_then(|d| d.raw),
            created_at: wire.created_at,
            ..item
        }
    }
}

/// Parse one work package resource
pub fn parse_work_package(element: Value) -> OpResult<WorkItem> {
    let wire: WorkPackageWire =
        serde_json::from_value(element).map_err(|e| OpError::parse(ENTITY, e.to_string()))?;
    Ok(wire.into())
}
