//! User model
//!
//! A member of a project as resolved through its membership principal.

use op_core::traits::Id;
use serde::{Deserialize, Serialize};

/// Team member profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,

    /// Display name
    pub name: String,

    /// Email address; empty when the server hides it from the acting user
    #[serde(default)]
    pub email: String,

    /// Avatar image href
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: String::new(),
            avatar: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
