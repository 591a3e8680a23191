//! Custom error types for the application.
//!
//! - [`DomError`] - Browser/DOM access failures
//! - [`PreferenceError`] - localStorage operations for the theme preference
//! - [`UnknownPreference`] - Unrecognized stored theme preference
//! - [`PriceError`] - Malformed pricing data attributes
//!
//! A missing anchor element is not an error: controllers return `None` and
//! stay inactive. These types cover the platform actually refusing an
//! operation.

use thiserror::Error;

/// DOM and Web API errors.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("document not available")]
    NoDocument,
    /// Setting an attribute or class failed
    #[error("failed to write attribute {0}")]
    AttributeWriteFailed(String),
    /// Setting an inline style property failed
    #[error("failed to write style {0}")]
    StyleWriteFailed(String),
    /// Registering an event listener failed
    #[error("failed to register {0} listener")]
    ListenerFailed(String),
}

/// Theme preference storage errors.
#[derive(Debug, Clone, Error)]
pub enum PreferenceError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Reading the stored value threw.
    #[error("failed to read from localStorage")]
    ReadFailed,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    WriteFailed,
}

/// Stored theme preference string is not `light`, `dark` or `auto`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme preference: {0}")]
pub struct UnknownPreference(pub String);

/// Pricing data attribute errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    /// Attribute absent from the price element.
    #[error("missing {0} attribute")]
    Missing(&'static str),
    /// Attribute present but not a finite number.
    #[error("{attr} is not numeric: {value:?}")]
    NotNumeric { attr: &'static str, value: String },
}
