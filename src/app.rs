//! Root application module.
//!
//! Starts every page controller once the document is ready. Controllers are
//! independent: each looks up its own anchor elements and stays inactive if
//! they are missing.

use std::rc::Rc;

use web_sys::Event;

use crate::components::{
    AccordionController, CarouselController, MobileMenuController, ParallaxController,
    PricingToggleController, ProgressController, ThemeController,
};
use crate::utils::{dom, log};

/// Handles to every controller that attached.
///
/// Listener closures keep their controllers alive on their own, so dropping
/// this struct does not stop anything.
#[derive(Default)]
pub struct Controllers {
    pub theme: Option<Rc<ThemeController>>,
    pub mobile_menu: Option<Rc<MobileMenuController>>,
    pub parallax: Option<Rc<ParallaxController>>,
    pub progress: Option<Rc<ProgressController>>,
    pub carousel: Option<Rc<CarouselController>>,
    pub pricing: Option<Rc<PricingToggleController>>,
    pub accordion: Option<Rc<AccordionController>>,
}

/// Initializes all controllers in page order.
pub fn init_all() -> Controllers {
    Controllers {
        theme: report("theme", ThemeController::init()),
        mobile_menu: report("mobile menu", MobileMenuController::init()),
        parallax: report("parallax", ParallaxController::init()),
        progress: report("progress bar", ProgressController::init()),
        carousel: report("carousel", CarouselController::init()),
        pricing: report("pricing toggle", PricingToggleController::init()),
        accordion: report("faq accordion", AccordionController::init()),
    }
}

fn report<T>(name: &str, controller: Option<T>) -> Option<T> {
    if controller.is_some() {
        log::debug(&format!("{}: attached", name));
    }
    controller
}

/// Runs [`init_all`] now, or on `DOMContentLoaded` if the document is
/// still loading.
pub fn run() {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        log::warn_on_err(
            "DOMContentLoaded",
            dom::listen_document("DOMContentLoaded", |_: Event| {
                init_all();
            }),
        );
    } else {
        init_all();
    }
}
