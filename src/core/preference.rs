//! Theme preference persistence using localStorage.
//!
//! Only the user's *preference* is stored (`light`, `dark` or `auto`),
//! never the theme it resolves to.

use crate::config::theme::STORAGE_KEY;
use crate::core::error::PreferenceError;
use crate::models::ThemePreference;
use crate::utils::dom;

/// Read the stored preference string.
pub fn load_raw() -> Result<Option<String>, PreferenceError> {
    let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
    storage
        .get_item(STORAGE_KEY)
        .map_err(|_| PreferenceError::ReadFailed)
}

/// Read the stored theme preference.
///
/// Returns `None` when nothing usable is stored (missing key, unknown value,
/// or storage unavailable).
pub fn load_theme_preference() -> Option<ThemePreference> {
    load_raw().ok()??.parse().ok()
}

/// Persist the theme preference.
pub fn save_theme_preference(preference: ThemePreference) -> Result<(), PreferenceError> {
    let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
    storage
        .set_item(STORAGE_KEY, preference.as_str())
        .map_err(|_| PreferenceError::WriteFailed)
}
