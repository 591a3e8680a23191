//! Console logging helpers.
//!
//! Messages are prefixed with the crate name so they can be filtered in
//! the browser devtools.

const PREFIX: &str = "[turbodrop]";

/// Log a debug-level message (hidden by default in most consoles).
pub fn debug(message: &str) {
    web_sys::console::debug_1(&format!("{} {}", PREFIX, message).into());
}

/// Log a warning.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("{} {}", PREFIX, message).into());
}

/// Log a failed operation as a warning and discard the error.
pub fn warn_on_err<E: std::fmt::Display>(context: &str, result: Result<(), E>) {
    if let Err(err) = result {
        warn(&format!("{}: {}", context, err));
    }
}
