//! Core error types for the OpenProject dashboard
//!
//! Three families of failure reach callers: missing credentials, transport/HTTP
//! failures, and malformed response envelopes. Field-level shape problems inside a
//! collection are not errors; they degrade to placeholder values during parsing.

use std::collections::HashMap;
use thiserror::Error;

/// Core error type for all dashboard operations
#[derive(Error, Debug)]
pub enum OpError {
    #[error("API credentials not set")]
    MissingCredentials,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(#[from] ValidationErrors),

    #[error("API request failed: {status} {status_text}")]
    Request { status: u16, status_text: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed {entity} payload: {message}")]
    Parse {
        entity: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OpError {
    pub fn request(status: u16, status_text: impl Into<String>) -> Self {
        OpError::Request {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn parse(entity: &'static str, message: impl Into<String>) -> Self {
        OpError::Parse {
            entity,
            message: message.into(),
        }
    }

    /// HTTP-like status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            OpError::MissingCredentials => 401,
            OpError::InvalidCredentials(_) => 422,
            OpError::Request { status, .. } => *status,
            OpError::Transport(_) | OpError::Parse { .. } => 502,
            OpError::Config(_) | OpError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OpError::MissingCredentials => "missing_credentials",
            OpError::InvalidCredentials(_) => "invalid_credentials",
            OpError::Request { .. } => "request_failed",
            OpError::Transport(_) => "transport_error",
            OpError::Parse { .. } => "parse_error",
            OpError::Config(_) => "configuration_error",
            OpError::Internal(_) => "internal_error",
        }
    }
}

/// Validation errors collection
#[derive(Debug, Default, Clone)]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        for (field, field_messages) in fields {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, field_errors) in source.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("is invalid ({})", error.code));
                errors.add(field.to_string(), message);
            }
        }
        errors
    }
}
