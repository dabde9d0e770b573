//! # op-auth
//!
//! Credentials and session lifecycle for talking to an OpenProject server.
//!
//! ## Features
//!
//! - Validated endpoint URL and API key
//! - `Bearer` and `Basic apikey:<key>` authorization headers
//! - Explicit session object with login/logout instead of global state

pub mod api_key;
pub mod session;

pub use api_key::Credentials;
pub use session::{Session, SessionManager};
