//! Team member model

pub mod model;

pub use model::*;
