//! HAL wire types
//!
//! See: https://datatracker.ietf.org/doc/html/draft-kelly-json-hal-08

use op_core::traits::Id;
use op_core::{OpError, OpResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A HAL link as sent by the server
///
/// Empty relations are sent as `{"href": null}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HalLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Resource type hint, e.g. `User` or `Group` on membership principals
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
}

impl HalLink {
    /// Whether the link points anywhere
    pub fn is_present(&self) -> bool {
        self.href.as_deref().is_some_and(|href| !href.is_empty())
    }

    /// Numeric id from the last path segment of `href`
    pub fn id(&self) -> Option<Id> {
        self.href.as_deref().and_then(id_from_href)
    }

    /// Title, or `placeholder` when absent or blank
    pub fn title_or(&self, placeholder: &str) -> String {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => placeholder.to_string(),
        }
    }
}

/// Last path segment of an href parsed as an id
pub fn id_from_href(href: &str) -> Option<Id> {
    href.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Formattable text (`{ format, raw, html }`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormattableText {
    #[serde(default)]
    pub raw: Option<String>,
}

/// A HAL collection page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HalCollection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(rename = "_embedded")]
    pub embedded: HalCollectionEmbedded,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HalCollectionEmbedded {
    pub elements: Vec<Value>,
}

impl HalCollection {
    pub fn len(&self) -> usize {
        self.embedded.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embedded.elements.is_empty()
    }

    /// Collection total, or the page length when the server omits it
    pub fn total_or_len(&self) -> u64 {
        self.total.unwrap_or(self.len() as u64)
    }
}

/// Parse a collection envelope
pub fn parse_collection(entity: &'static str, body: Value) -> OpResult<HalCollection> {
    serde_json::from_value(body).map_err(|e| OpError::parse(entity, e.to_string()))
}

/// Parse each element with `parse`, skipping the ones it rejects
pub fn parse_elements<T, F>(entity: &'static str, elements: Vec<Value>, parse: F) -> Vec<T>
where
    F: Fn(Value) -> OpResult<T>,
{
    let mut parsed = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match parse(element) {
            Ok(item) => parsed.push(item),
            Err(e) => {
                tracing::warn!(entity, index, error = %e, "Skipping malformed collection element");
            }
        }
    }
    parsed
}

/// Deserialize a field, turning any shape mismatch into `None`
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_href() {
        assert_eq!(id_from_href("/api/v3/statuses/7"), Some(7));
        assert_eq!(id_from_href("/api/v3/users/42/"), Some(42));
        assert_eq!(id_from_href("/api/v3/projects/demo"), None);
        assert_eq!(id_from_href(""), None);
    }

    #[test]
    fn test_link_title_placeholder() {
        let link: HalLink = serde_json::from_value(json!({"href": "/api/v3/types/1"})).unwrap();
        assert!(link.is_present());
        assert_eq!(link.title_or("Unknown"), "Unknown");

        let empty: HalLink = serde_json::from_value(json!({"href": null})).unwrap();
        assert!(!empty.is_present());
        assert_eq!(empty.id(), None);
    }

    #[test]
    fn test_parse_collection_rejects_bare_array() {
        let err = parse_collection("work package", json!([{"id": 1}])).unwrap_err();
        assert!(matches!(err, OpError::Parse { entity: "work package", .. }));
    }

    #[test]
    fn test_parse_collection_reads_paging() {
        let page = parse_collection(
            "project",
            json!({
                "_type": "Collection",
                "total": 3,
                "count": 2,
                "pageSize": 2,
                "offset": 1,
                "_embedded": {"elements": [{"id": 1}, {"id": 2}]}
            }),
        )
        .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_or_len(), 3);
    }
}
