//! # op-client
//!
//! Read-only client for OpenProject API v3.
//!
//! Responses are HAL+JSON. The `representers` module turns them into the
//! normalized models of `op-models`; `ApiClient` fetches them page by page and
//! implements the data-source traits the services depend on.

pub mod client;
pub mod representers;
pub mod source;

pub use client::ApiClient;
pub use source::{MemberSource, ProjectSource, WorkItemSource};
