//! Page state and the pure rules that drive it.
//!
//! Nothing here touches the DOM:
//! - [`Theme`], [`ThemePreference`] - Theme resolution
//! - [`MenuState`] - Mobile menu open/closed
//! - [`scroll_progress`], [`parallax_offset`] - Scroll effect math
//! - [`Carousel`], [`Swipe`] - Card index and gesture classification
//! - [`BillingPeriod`], [`PriceTier`] - Pricing selection
//! - [`toggle_plan`] - Accordion exclusivity

mod accordion;
mod carousel;
mod menu;
mod pricing;
mod scroll;
mod theme;

pub use accordion::toggle_plan;
pub use carousel::{Carousel, Swipe, classify_swipe, is_desktop};
pub use menu::MenuState;
pub use pricing::{BillingPeriod, PriceTier, format_price};
pub use scroll::{
    SectionMetrics, Viewport, format_percent, parallax_offset, scroll_progress, translate_y,
};
pub use theme::{Theme, ThemePreference};
