//! Theme preference and resolved theme types.

use std::str::FromStr;

use crate::config::theme::{DARK_ICON, LIGHT_ICON};
use crate::core::error::UnknownPreference;

/// A concrete theme the stylesheet understands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the root `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Reads the currently rendered theme back from the root attribute.
    ///
    /// Anything other than `"dark"` (including a missing attribute) is
    /// treated as light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Inner SVG markup for the toggle icon.
    pub fn icon_markup(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ICON,
            Self::Dark => DARK_ICON,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

/// A persisted theme preference, possibly deferring to the OS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the OS color scheme.
    Auto,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Resolves the preference against the OS dark-mode signal.
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::Auto if prefers_dark => Theme::Dark,
            Self::Auto => Theme::Light,
        }
    }

    #[inline]
    pub fn is_auto(self) -> bool {
        self == Self::Auto
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_preference_ignores_os() {
        for prefers_dark in [false, true] {
            assert_eq!(ThemePreference::Light.resolve(prefers_dark), Theme::Light);
            assert_eq!(ThemePreference::Dark.resolve(prefers_dark), Theme::Dark);
        }
    }

    #[test]
    fn test_auto_follows_os() {
        assert_eq!(ThemePreference::Auto.resolve(true), Theme::Dark);
        assert_eq!(ThemePreference::Auto.resolve(false), Theme::Light);
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!("auto".parse::<ThemePreference>(), Ok(ThemePreference::Auto));
        assert_eq!(
            "Dark".parse::<ThemePreference>(),
            Err(UnknownPreference("Dark".to_string()))
        );
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_light() {
        let stored = "sepia".parse::<ThemePreference>().unwrap_or_default();
        assert_eq!(stored, ThemePreference::Light);
        assert_eq!(stored.resolve(true), Theme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_from_rendered_attribute() {
        assert_eq!(Theme::from_attribute(Some("light")).toggled(), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("dark")).toggled(), Theme::Light);
        // Missing attribute reads as light
        assert_eq!(Theme::from_attribute(None).toggled(), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("auto")), Theme::Light);
    }

    #[test]
    fn test_icon_markup() {
        assert!(Theme::Light.icon_markup().contains("<path"));
        assert!(!Theme::Light.icon_markup().contains("<circle"));
        assert!(Theme::Dark.icon_markup().contains("<circle"));
    }

    #[test]
    fn test_theme_into_preference() {
        assert_eq!(ThemePreference::from(Theme::Dark), ThemePreference::Dark);
        assert_eq!(ThemePreference::from(Theme::Light).as_str(), "light");
    }
}
