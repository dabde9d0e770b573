//! HAL+JSON parsing
//!
//! The envelope of a collection is strict: anything that is not a HAL
//! collection is an `OpError::Parse`. Elements are lenient: an element without
//! a usable `id` is skipped, any other malformed field becomes a placeholder.

pub mod hal;
pub mod membership;
pub mod project;
pub mod user;
pub mod work_package;

pub use hal::{id_from_href, parse_collection, parse_elements, HalCollection, HalLink};
pub use membership::principal_user_id;
pub use project::parse_project;
pub use user::parse_user;
pub use work_package::parse_work_package;
