//! Error handling
//!
//! Defines error types for the content server modules.

pub mod types;

pub use types::*;
