//! Membership parsing
//!
//! Only memberships whose principal is a user are resolved to members;
//! group and placeholder principals are ignored.

use op_core::traits::Id;
use op_core::OpResult;
use serde::Deserialize;
use serde_json::Value;

use super::hal::{lenient, HalLink};

const ENTITY: &str = "membership";

#[derive(Debug, Deserialize)]
struct MembershipWire {
    #[serde(rename = "_links")]
    links: MembershipLinks,
}

#[derive(Debug, Deserialize)]
struct MembershipLinks {
    #[serde(default, deserialize_with = "lenient")]
    principal: Option<HalLink>,
}

/// A principal is a user when its link says so, or when the server omits the
/// type hint and the href points into `/users/`
fn is_user_principal(link: &HalLink) -> bool {
    match link.link_type.as_deref() {
        Some(kind) => kind == "User",
        None => link.href.as_deref().is_some_and(|href| href.contains("/users/")),
    }
}

/// User id of a membership principal, `None` for non-user principals
pub fn principal_user_id(element: Value) -> OpResult<Option<Id>> {
    let wire: MembershipWire = serde_json::from_value(element)
        .map_err(|e| op_core::OpError::parse(ENTITY, e.to_string()))?;
    Ok(wire
        .links
        .principal
        .filter(is_user_principal)
        .and_then(|link| link.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representers::hal::{parse_collection, parse_elements};
    use serde_json::json;

    fn user_ids(body: Value) -> Vec<Id> {
        let collection = parse_collection(ENTITY, body).unwrap();
        parse_elements(ENTITY, collection.embedded.elements, principal_user_id)
            .into_iter()
            .flatten()
            .collect()
    }

    #[test]
    fn test_only_user_principals_are_kept() {
        let ids = user_ids(json!({
            "_type": "Collection",
            "total": 4,
            "_embedded": {"elements": [
                {"_links": {"principal": {"href": "/api/v3/users/5", "title": "Ada", "type": "User"}}},
                {"_links": {"principal": {"href": "/api/v3/groups/2", "title": "Ops", "type": "Group"}}},
                {"_links": {"principal": {"href": "/api/v3/users/9", "title": "Grace"}}},
                {"_links": {"roles": []}}
            ]}
        }));

        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn test_group_without_type_hint_is_ignored() {
        let ids = user_ids(json!({
            "_embedded": {"elements": [
                {"_links": {"principal": {"href": "/api/v3/groups/2"}}}
            ]}
        }));
        assert!(ids.is_empty());
    }
}
