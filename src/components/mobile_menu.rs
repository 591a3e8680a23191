//! Hamburger menu for narrow viewports.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Node};

use crate::config::menu::{ACTIVE_CLASS, HEADER_SELECTOR, LINK_SELECTOR, NAV_SELECTOR, TOGGLE_ID};
use crate::core::error::DomError;
use crate::models::MenuState;
use crate::utils::{dom, log};

pub struct MobileMenuController {
    toggle: Element,
    nav: Element,
    state: Cell<MenuState>,
}

impl MobileMenuController {
    /// Wires the toggle button, nav links and outside-click dismissal.
    ///
    /// Returns `None` if either the toggle or the nav panel is missing.
    pub fn init() -> Option<Rc<Self>> {
        let controller = Rc::new(Self {
            toggle: dom::by_id(TOGGLE_ID)?,
            nav: dom::query(NAV_SELECTOR)?,
            state: Cell::new(MenuState::Closed),
        });

        let this = Rc::clone(&controller);
        log::warn_on_err(
            "menu toggle",
            dom::listen(&controller.toggle, "click", move |_: MouseEvent| this.toggle()),
        );

        for link in dom::query_all(LINK_SELECTOR) {
            let this = Rc::clone(&controller);
            log::warn_on_err(
                "nav link",
                dom::listen(&link, "click", move |_: MouseEvent| this.close()),
            );
        }

        let this = Rc::clone(&controller);
        log::warn_on_err(
            "outside click",
            dom::listen_document("click", move |event: MouseEvent| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                this.handle_document_click(target.as_ref());
            }),
        );

        Some(controller)
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn toggle(&self) {
        self.set_state(self.state.get().toggled());
    }

    /// Forces the menu closed, rewriting the DOM even if already closed.
    pub fn close(&self) {
        self.set_state(MenuState::Closed);
    }

    /// Closes an open menu when a click lands outside the header.
    pub fn handle_document_click(&self, target: Option<&Node>) {
        let Some(header) = dom::query(HEADER_SELECTOR) else {
            return;
        };
        if self.state.get().should_dismiss(header.contains(target)) {
            self.close();
        }
    }

    fn set_state(&self, state: MenuState) {
        self.state.set(state);
        log::warn_on_err("menu state", self.render(state));
    }

    fn render(&self, state: MenuState) -> Result<(), DomError> {
        dom::toggle_class(&self.toggle, ACTIVE_CLASS, state.is_open())?;
        dom::toggle_class(&self.nav, ACTIVE_CLASS, state.is_open())?;
        dom::set_attribute(&self.toggle, "aria-expanded", state.aria_expanded())
    }
}
