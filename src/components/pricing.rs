//! Monthly/annual pricing switch.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement};

use crate::config::pricing::{
    AMOUNT_SELECTOR, ANNUAL_ATTRIBUTE, FADE_DURATION_MS, FADE_OPACITY, FULL_OPACITY,
    MONTHLY_ATTRIBUTE, PERIOD_SELECTOR, TOGGLE_ID,
};
use crate::models::{BillingPeriod, PriceTier, format_price};
use crate::utils::{dom, log};

pub struct PricingToggleController {
    toggle: HtmlInputElement,
}

impl PricingToggleController {
    /// Returns `None` without the billing checkbox.
    pub fn init() -> Option<Rc<Self>> {
        let controller = Rc::new(Self {
            toggle: dom::by_id_as::<HtmlInputElement>(TOGGLE_ID)?,
        });

        let this = Rc::clone(&controller);
        log::warn_on_err(
            "billing toggle",
            dom::listen(&controller.toggle, "change", move |_: Event| this.handle_toggle()),
        );

        Some(controller)
    }

    pub fn period(&self) -> BillingPeriod {
        BillingPeriod::from_checked(self.toggle.checked())
    }

    /// Swaps every price and period label to the checkbox's billing period.
    ///
    /// Prices with malformed data attributes are left untouched.
    pub fn handle_toggle(&self) {
        let period = self.period();

        for element in dom::query_all(AMOUNT_SELECTOR) {
            let tier = PriceTier::parse(
                element.get_attribute(MONTHLY_ATTRIBUTE).as_deref(),
                element.get_attribute(ANNUAL_ATTRIBUTE).as_deref(),
            );
            match tier {
                Ok(tier) => {
                    element.set_text_content(Some(&format_price(tier.price_for(period))));
                    if let Ok(element) = element.dyn_into::<HtmlElement>() {
                        fade_in(element);
                    }
                }
                Err(err) => log::warn(&format!("skipping price: {}", err)),
            }
        }

        for element in dom::query_all(PERIOD_SELECTOR) {
            element.set_text_content(Some(period.label()));
        }
    }
}

/// Dims the element, then restores full opacity after a short delay.
///
/// The restore is never cancelled, so rapid toggles may interleave.
fn fade_in(element: HtmlElement) {
    log::warn_on_err("price fade", dom::set_style(&element, "opacity", FADE_OPACITY));
    Timeout::new(FADE_DURATION_MS, move || {
        log::warn_on_err("price fade", dom::set_style(&element, "opacity", FULL_OPACITY));
    })
    .forget();
}
