//! Scroll-driven visual effects: hero parallax and the section progress bar.
//!
//! Both run on every scroll event without throttling.

use std::rc::Rc;

use web_sys::{Event, HtmlElement};

use crate::config::scroll::{HERO_IMAGE_SELECTOR, PROGRESS_FILL_SELECTOR, PROGRESS_SECTION_ID};
use crate::models::{
    SectionMetrics, Viewport, format_percent, parallax_offset, scroll_progress, translate_y,
};
use crate::utils::{dom, log};

// ============================================================================
// Parallax
// ============================================================================

/// Moves the hero image at half the scroll speed.
pub struct ParallaxController {
    hero: HtmlElement,
}

impl ParallaxController {
    /// Returns `None` (and attaches nothing) without a hero image.
    pub fn init() -> Option<Rc<Self>> {
        let controller = Rc::new(Self {
            hero: dom::query_html(HERO_IMAGE_SELECTOR)?,
        });

        let this = Rc::clone(&controller);
        log::warn_on_err(
            "parallax",
            dom::listen_window("scroll", move |_: Event| this.update()),
        );

        Some(controller)
    }

    pub fn update(&self) {
        self.update_at(dom::scroll_y());
    }

    pub fn update_at(&self, scroll_y: f64) {
        let transform = translate_y(parallax_offset(scroll_y));
        log::warn_on_err("parallax", dom::set_style(&self.hero, "transform", &transform));
    }
}

// ============================================================================
// Progress Bar
// ============================================================================

/// Fills a bar as the viewport scrolls through the "how it works" section.
pub struct ProgressController {
    fill: HtmlElement,
}

impl ProgressController {
    /// Returns `None` (and attaches nothing) without a fill element.
    pub fn init() -> Option<Rc<Self>> {
        let controller = Rc::new(Self {
            fill: dom::query_html(PROGRESS_FILL_SELECTOR)?,
        });

        let this = Rc::clone(&controller);
        log::warn_on_err(
            "progress",
            dom::listen_window("scroll", move |_: Event| this.update()),
        );

        Some(controller)
    }

    /// Recomputes the fill width. No-op while the section is absent.
    pub fn update(&self) {
        let Some(section) = dom::by_id_as::<HtmlElement>(PROGRESS_SECTION_ID) else {
            return;
        };
        let metrics = SectionMetrics {
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        };
        let viewport = Viewport {
            scroll_y: dom::scroll_y(),
            height: dom::inner_height(),
        };
        self.render(scroll_progress(metrics, viewport));
    }

    fn render(&self, progress: f64) {
        log::warn_on_err(
            "progress",
            dom::set_style(&self.fill, "width", &format_percent(progress)),
        );
    }
}
