//! User parsing

use op_core::traits::Id;
use op_core::{OpError, OpResult};
use op_models::reference::UNKNOWN;
use op_models::User;
use serde::Deserialize;
use serde_json::Value;

use super::hal::{lenient, HalLink};

const ENTITY: &str = "user";

#[derive(Debug, Deserialize)]
struct UserWire {
    id: Id,
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    email: Option<String>,
    #[serde(rename = "_links", default, deserialize_with = "lenient")]
    links: Option<UserLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct UserLinks {
    #[serde(default, deserialize_with = "lenient")]
    avatar: Option<HalLink>,
}

/// Parse a single user resource
///
/// The email is empty when the server hides it from the acting user.
pub fn parse_user(body: Value) -> OpResult<User> {
    let wire: UserWire =
        serde_json::from_value(body).map_err(|e| OpError::parse(ENTITY, e.to_string()))?;

    let name = wire
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let mut user = User::new(wire.id, name).with_email(wire.email.unwrap_or_default());

    if let Some(avatar) = wire
        .links
        .and_then(|links| links.avatar)
        .and_then(|link| link.href)
        .filter(|href| !href.is_empty())
    {
        user = user.with_avatar(avatar);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_user() {
        let user = parse_user(json!({
            "_type": "User",
            "id": 5,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "_links": {"avatar": {"href": "https://avatars.example.com/5.png"}}
        }))
        .unwrap();

        assert_eq!(user.id, 5);
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.avatar.as_deref(), Some("https://avatars.example.com/5.png"));
    }

    #[test]
    fn test_hidden_email_and_missing_avatar() {
        let user = parse_user(json!({"id": 6, "name": "Grace"})).unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn test_user_without_id_is_parse_error() {
        let err = parse_user(json!({"name": "Nobody"})).unwrap_err();
        assert!(matches!(err, OpError::Parse { entity: "user", .. }));
    }
}
