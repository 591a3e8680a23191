//! Swipeable success-story carousel.
//!
//! Touch handling is enabled only when the page loads on a narrow
//! viewport; that decision is not revisited on resize. Growing the viewport
//! to desktop width snaps the carousel back to the first card.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Event, HtmlElement, TouchEvent};

use crate::config::carousel::{CARD_SELECTOR, CAROUSEL_SELECTOR};
use crate::models::{Carousel, classify_swipe, is_desktop};
use crate::utils::{dom, log};

pub struct CarouselController {
    track: HtmlElement,
    state: Cell<Carousel>,
    touch_enabled: bool,
    touch_start_x: Cell<f64>,
    touch_end_x: Cell<f64>,
}

impl CarouselController {
    /// Returns `None` without a carousel element.
    pub fn init() -> Option<Rc<Self>> {
        Self::init_at_width(dom::inner_width())
    }

    /// Like [`init`](Self::init), with the viewport width that decides
    /// whether swiping is enabled supplied by the caller.
    pub fn init_at_width(width: f64) -> Option<Rc<Self>> {
        let track = dom::query_html(CAROUSEL_SELECTOR)?;
        let card_count = dom::query_all_in(&track, CARD_SELECTOR).len();
        let controller = Rc::new(Self {
            track,
            state: Cell::new(Carousel::new(card_count)),
            touch_enabled: !is_desktop(width),
            touch_start_x: Cell::new(0.0),
            touch_end_x: Cell::new(0.0),
        });

        if controller.touch_enabled {
            let this = Rc::clone(&controller);
            log::warn_on_err(
                "carousel touchstart",
                dom::listen(&controller.track, "touchstart", move |event: TouchEvent| {
                    if let Some(x) = first_changed_x(&event) {
                        this.handle_touch_start(x);
                    }
                }),
            );

            let this = Rc::clone(&controller);
            log::warn_on_err(
                "carousel touchend",
                dom::listen(&controller.track, "touchend", move |event: TouchEvent| {
                    if let Some(x) = first_changed_x(&event) {
                        this.handle_touch_end(x);
                    }
                }),
            );
        }

        let this = Rc::clone(&controller);
        log::warn_on_err(
            "carousel resize",
            dom::listen_window("resize", move |_: Event| this.handle_resize(dom::inner_width())),
        );

        Some(controller)
    }

    pub fn index(&self) -> usize {
        self.state.get().index()
    }

    /// Whether touch listeners were attached at startup.
    pub fn touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    pub fn handle_touch_start(&self, screen_x: f64) {
        self.touch_start_x.set(screen_x);
    }

    /// Records the gesture end and navigates if it was a swipe.
    pub fn handle_touch_end(&self, screen_x: f64) {
        self.touch_end_x.set(screen_x);
        if let Some(swipe) = classify_swipe(self.touch_start_x.get(), self.touch_end_x.get()) {
            self.update(|carousel| carousel.apply(swipe));
            self.render();
        }
    }

    pub fn next_card(&self) {
        self.update(Carousel::next);
        self.render();
    }

    pub fn prev_card(&self) {
        self.update(Carousel::prev);
        self.render();
    }

    /// Hard reset to the first card once the viewport reaches desktop width.
    pub fn handle_resize(&self, width: f64) {
        if is_desktop(width) {
            self.update(Carousel::reset);
            self.write_transform(Carousel::reset_transform());
        }
    }

    fn update(&self, f: impl FnOnce(&mut Carousel)) {
        let mut carousel = self.state.get();
        f(&mut carousel);
        self.state.set(carousel);
    }

    fn render(&self) {
        self.write_transform(&self.state.get().transform());
    }

    fn write_transform(&self, transform: &str) {
        log::warn_on_err("carousel", dom::set_style(&self.track, "transform", transform));
    }
}

fn first_changed_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| touch.screen_x() as f64)
}
