//! Session lifecycle
//!
//! A `Session` is an immutable snapshot of the credentials a client uses.
//! `SessionManager` holds at most one current session; only `login` and
//! `logout` change it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use op_core::config::{ApiConfig, AuthScheme};
use op_core::{OpError, OpResult};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::api_key::Credentials;

/// Authenticated connection parameters
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub credentials: Credentials,
    pub scheme: AuthScheme,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(credentials: Credentials, scheme: AuthScheme) -> Self {
        Self {
            id: Uuid::new_v4(),
            credentials,
            scheme,
            created_at: Utc::now(),
        }
    }

    /// Build a session from configured endpoint and key
    pub fn from_config(config: &ApiConfig) -> OpResult<Self> {
        match (config.base_url.as_deref(), config.api_key.as_deref()) {
            (Some(url), Some(key)) if !url.trim().is_empty() && !key.trim().is_empty() => {
                Ok(Self::new(Credentials::new(url, key)?, config.auth_scheme))
            }
            _ => Err(OpError::MissingCredentials),
        }
    }

    pub fn authorization_header(&self) -> String {
        self.credentials.authorization_header(self.scheme)
    }
}

/// Holder of the current session
#[derive(Debug, Default)]
pub struct SessionManager {
    current: RwLock<Option<Arc<Session>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configured credentials and make them the current session
    ///
    /// A failed login leaves the previous session in place.
    pub fn login(&self, config: &ApiConfig) -> OpResult<Arc<Session>> {
        let session = Arc::new(Session::from_config(config)?);
        tracing::info!(
            session_id = %session.id,
            url = %session.credentials.url,
            key = %session.credentials.fingerprint(),
            scheme = ?session.scheme,
            "Logged in"
        );
        *self.current.write() = Some(Arc::clone(&session));
        Ok(session)
    }

    /// Drop the current session; returns whether there was one
    pub fn logout(&self) -> bool {
        let previous = self.current.write().take();
        if let Some(session) = &previous {
            tracing::info!(session_id = %session.id, "Logged out");
        }
        previous.is_some()
    }

    /// The current session, or `MissingCredentials`
    pub fn current(&self) -> OpResult<Arc<Session>> {
        self.current
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(OpError::MissingCredentials)
    }
}
