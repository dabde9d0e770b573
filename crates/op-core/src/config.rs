//! Configuration types and loading
//!
//! Defaults are layered under an optional config file and `OP_DASH__*`
//! environment overrides; the flat variable names used by deployments
//! (`OPENPROJECT_URL`, `OPENPROJECT_API_KEY`, ...) are applied last.

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::OpError;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct DashboardConfig {
    /// Upstream API access
    #[validate]
    pub api: ApiConfig,

    /// Aggregation tuning
    #[validate]
    pub analytics: AnalyticsConfig,

    /// Logging output
    pub logging: LoggingConfig,
}

/// How the API key is presented to the server
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    #[default]
    Bearer,
    /// `Authorization: Basic base64("apikey:<key>")`
    Basic,
}

impl AuthScheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bearer" => Some(Self::Bearer),
            "basic" => Some(Self::Basic),
            _ => None,
        }
    }
}

/// What to do when one user lookup of a membership list fails
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberLookupPolicy {
    /// The first failure fails the whole member fetch
    #[default]
    FailFast,
    /// Failed lookups are logged and left out
    SkipFailed,
}

impl MemberLookupPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fail_fast" | "fail-fast" => Some(Self::FailFast),
            "skip_failed" | "skip-failed" => Some(Self::SkipFailed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ApiConfig {
    /// Base URL of the OpenProject instance (without `/api/v3`)
    pub base_url: Option<String>,
    /// API key of the acting user
    pub api_key: Option<String>,
    pub auth_scheme: AuthScheme,
    /// Elements requested per collection page
    #[validate(range(min = 1, max = 1000))]
    pub page_size: u32,
    /// Request timeout; the transport default applies when unset
    pub timeout_seconds: Option<u64>,
    /// Upper bound of concurrent user lookups during member resolution
    #[validate(range(min = 1))]
    pub max_concurrent_requests: usize,
    pub member_lookup: MemberLookupPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            auth_scheme: AuthScheme::Bearer,
            page_size: 100,
            timeout_seconds: None,
            max_concurrent_requests: 8,
            member_lookup: MemberLookupPolicy::FailFast,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AnalyticsConfig {
    /// Shortest burndown window
    #[validate(range(min = 1))]
    pub min_window_days: u32,
    /// Window length used when no work item has a due date
    #[validate(range(min = 1))]
    pub default_window_days: u32,
    /// Longest burndown window; longer spans are cut off at this length
    #[validate(range(min = 1))]
    pub max_window_days: u32,
    /// Effort assumed per work item when no item carries an estimate
    #[validate(range(min = 0.0))]
    pub synthetic_hours_per_item: f64,
    /// Length of the synthetic fallback series
    #[validate(range(min = 1))]
    pub fallback_days: u32,
    /// Starting value of the synthetic fallback series
    #[validate(range(min = 0.0))]
    pub fallback_total: f64,
    /// Burn rate (relative to ideal) of the fallback's first week
    pub fallback_early_rate: f64,
    /// Burn rate (relative to ideal) of the fallback after the first week
    pub fallback_late_rate: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            min_window_days: 7,
            default_window_days: 14,
            max_window_days: 366,
            synthetic_hours_per_item: 8.0,
            fallback_days: 14,
            fallback_total: 100.0,
            fallback_early_rate: 0.8,
            fallback_late_rate: 1.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins when set
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,op_client=debug,op_services=debug".to_string(),
            json: false,
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    #[error("Config file error: {0}")]
    FileError(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for OpError {
    fn from(err: ConfigError) -> Self {
        OpError::Config(err.to_string())
    }
}

impl DashboardConfig {
    /// Layer defaults, an optional file, and `OP_DASH__SECTION__KEY` overrides,
    /// then apply the flat `OPENPROJECT_*` variables on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = ::config::Config::try_from(&Self::default())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut builder = ::config::Config::builder().add_source(defaults);
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix("OP_DASH")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::FileError(e.to_string()))?;

        config.apply_env()?;
        config.check()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("OPENPROJECT_URL") {
            self.api.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("OPENPROJECT_API_KEY") {
            self.api.api_key = Some(key);
        }
        if let Ok(scheme) = std::env::var("OPENPROJECT_AUTH_SCHEME") {
            self.api.auth_scheme =
                AuthScheme::parse(&scheme).ok_or_else(|| ConfigError::InvalidValue {
                    key: "OPENPROJECT_AUTH_SCHEME".to_string(),
                    message: format!("expected bearer or basic, got {:?}", scheme),
                })?;
        }
        if let Ok(size) = std::env::var("OPENPROJECT_PAGE_SIZE") {
            self.api.page_size = parse_number("OPENPROJECT_PAGE_SIZE", &size)?;
        }
        if let Ok(seconds) = std::env::var("OPENPROJECT_TIMEOUT_SECONDS") {
            self.api.timeout_seconds = Some(parse_number("OPENPROJECT_TIMEOUT_SECONDS", &seconds)?);
        }
        if let Ok(max) = std::env::var("OPENPROJECT_MAX_CONCURRENT_REQUESTS") {
            self.api.max_concurrent_requests =
                parse_number("OPENPROJECT_MAX_CONCURRENT_REQUESTS", &max)?;
        }
        if let Ok(policy) = std::env::var("OPENPROJECT_MEMBER_LOOKUP") {
            self.api.member_lookup =
                MemberLookupPolicy::parse(&policy).ok_or_else(|| ConfigError::InvalidValue {
                    key: "OPENPROJECT_MEMBER_LOOKUP".to_string(),
                    message: format!("expected fail_fast or skip_failed, got {:?}", policy),
                })?;
        }

        if let Ok(filter) = std::env::var("RUST_LOG") {
            self.logging.filter = filter;
        }
        if let Ok(v) = std::env::var("OP_DASH_LOG_JSON") {
            self.logging.json = v == "true" || v == "1" || v == "yes";
        }

        Ok(())
    }

    /// Run field validation
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()
            .map_err(|e| ConfigError::Invalid(crate::error::ValidationErrors::from(e).to_string()))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
