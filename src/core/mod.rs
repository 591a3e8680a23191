//! Error types and persisted state.

pub mod error;
pub mod preference;
