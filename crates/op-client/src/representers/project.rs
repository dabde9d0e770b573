//! Project parsing

use chrono::{DateTime, Utc};
use op_core::traits::Id;
use op_core::{OpError, OpResult};
use op_models::project::DEFAULT_PROJECT_STATUS;
use op_models::Project;
use serde::Deserialize;
use serde_json::Value;

use super::hal::{lenient, FormattableText, HalLink};

const ENTITY: &str = "project";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectWire {
    id: Id,
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    description: Option<FormattableText>,
    /// Older servers embed the status as an object
    #[serde(default, deserialize_with = "lenient")]
    status: Option<NamedWire>,
    #[serde(default, deserialize_with = "lenient")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links", default, deserialize_with = "lenient")]
    links: Option<ProjectLinks>,
}

#[derive(Debug, Deserialize)]
struct NamedWire {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectLinks {
    #[serde(default, deserialize_with = "lenient")]
    status: Option<HalLink>,
}

/// Parse a single project resource
pub fn parse_project(body: Value) -> OpResult<Project> {
    let wire: ProjectWire =
        serde_json::from_value(body).map_err(|e| OpError::parse(ENTITY, e.to_string()))?;

    let status = wire
        .status
        .map(|status| status.name)
        .or_else(|| wire.links.and_then(|links| links.status).and_then(|link| link.title))
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string());

    Ok(Project {
        id: wire.id,
        name: wire.name.unwrap_or_default(),
        identifier: wire.identifier.unwrap_or_default(),
        description: wire.description.and_then(|d| d.raw).unwrap_or_default(),
        status,
        created_at: wire.created_at,
        updated_at: wire.updated_at,
    })
}
