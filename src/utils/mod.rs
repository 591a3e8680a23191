//! Utility modules for DOM access and console logging.
//!
//! Provides:
//! - [`dom`] - Element lookup, style/attribute writes, page-lifetime listeners
//! - [`log`] - Prefixed console output

pub mod dom;
pub mod log;
