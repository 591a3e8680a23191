//! Light/dark theme switching.
//!
//! The resolved theme is exposed to the stylesheet through the root
//! `data-theme` attribute. The stored preference may be `auto`, in which
//! case the OS color scheme decides, both at startup and whenever the OS
//! setting changes.

use std::rc::Rc;

use web_sys::{Element, MediaQueryList, MediaQueryListEvent, MouseEvent};

use crate::config::theme::{DARK_MEDIA_QUERY, ICON_SELECTOR, ROOT_ATTRIBUTE, TOGGLE_ID};
use crate::core::error::DomError;
use crate::core::preference;
use crate::models::{Theme, ThemePreference};
use crate::utils::{dom, log};

pub struct ThemeController {
    root: Element,
    dark_query: Option<MediaQueryList>,
}

impl ThemeController {
    /// Applies the stored preference and wires the toggle button and the
    /// OS color-scheme listener.
    ///
    /// Returns `None` only when there is no document to theme.
    pub fn init() -> Option<Rc<Self>> {
        let root = dom::document()?.document_element()?;
        let controller = Rc::new(Self {
            root,
            dark_query: dom::match_media(DARK_MEDIA_QUERY),
        });

        controller.apply(controller.stored_preference().resolve(controller.prefers_dark()));

        if let Some(toggle) = dom::by_id(TOGGLE_ID) {
            let this = Rc::clone(&controller);
            log::warn_on_err(
                "theme toggle",
                dom::listen(&toggle, "click", move |_: MouseEvent| this.handle_toggle()),
            );
        }

        if let Some(query) = &controller.dark_query {
            let this = Rc::clone(&controller);
            log::warn_on_err(
                "color scheme",
                dom::listen(query, "change", move |event: MediaQueryListEvent| {
                    this.handle_system_change(event.matches());
                }),
            );
        }

        Some(controller)
    }

    /// Stored preference, defaulting to light.
    pub fn stored_preference(&self) -> ThemePreference {
        preference::load_theme_preference().unwrap_or_default()
    }

    /// The dark color-scheme query whose `change` events are tracked.
    pub fn color_scheme_query(&self) -> Option<&MediaQueryList> {
        self.dark_query.as_ref()
    }

    /// Whether the OS currently asks for a dark color scheme.
    pub fn prefers_dark(&self) -> bool {
        self.dark_query.as_ref().is_some_and(|query| query.matches())
    }

    /// Theme currently rendered on the root element.
    pub fn rendered_theme(&self) -> Theme {
        Theme::from_attribute(self.root.get_attribute(ROOT_ATTRIBUTE).as_deref())
    }

    /// Persists `preference` and renders the theme it resolves to.
    ///
    /// Calling this repeatedly with the same value leaves the same state.
    pub fn set_theme(&self, preference: ThemePreference) {
        log::warn_on_err("save theme", preference::save_theme_preference(preference));
        self.apply(preference.resolve(self.prefers_dark()));
    }

    /// Flips between light and dark based on what is rendered.
    ///
    /// An `auto` preference collapses to the concrete opposite theme.
    pub fn handle_toggle(&self) {
        let next = self.rendered_theme().toggled();
        self.set_theme(next.into());
    }

    /// Re-resolves the theme after an OS color-scheme change.
    ///
    /// Ignored unless the stored preference is `auto`.
    pub fn handle_system_change(&self, prefers_dark: bool) {
        if self.stored_preference().is_auto() {
            self.apply(ThemePreference::Auto.resolve(prefers_dark));
        }
    }

    /// Renders a resolved theme without touching storage.
    pub fn apply(&self, theme: Theme) {
        log::warn_on_err("apply theme", self.write_root(theme));
        self.update_icon(theme);
    }

    fn write_root(&self, theme: Theme) -> Result<(), DomError> {
        dom::set_attribute(&self.root, ROOT_ATTRIBUTE, theme.as_str())
    }

    fn update_icon(&self, theme: Theme) {
        if let Some(toggle) = dom::by_id(TOGGLE_ID)
            && let Some(icon) = dom::query_in(&toggle, ICON_SELECTOR)
        {
            icon.set_inner_html(theme.icon_markup());
        }
    }
}
