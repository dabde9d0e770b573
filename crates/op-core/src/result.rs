//! Result type alias

use crate::error::OpError;

/// Standard Result type for dashboard operations
pub type OpResult<T> = Result<T, OpError>;
