//! Error handling
//!
//! Defines error types and handling for game configuration loading.

pub mod handlers;
pub mod types;

pub use types::*;
