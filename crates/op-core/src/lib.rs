//! # op-core
//!
//! Core types, traits, and utilities for the OpenProject dashboard.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Result type alias
//! - Id type and the Clock trait
//! - Pagination parameters for API v3 collections
//! - Configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod pagination;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
pub use pagination::*;
