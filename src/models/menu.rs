//! Mobile navigation menu state.

/// Open/closed state of the hamburger menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// String form mirrored into the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Whether a document click should dismiss the menu.
    ///
    /// Only clicks landing outside the header close an open menu.
    pub fn should_dismiss(self, click_inside_header: bool) -> bool {
        self.is_open() && !click_inside_header
    }
}
