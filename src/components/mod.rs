//! DOM controllers, one per page widget.
//!
//! - [`ThemeController`] - Theme toggle and OS color-scheme tracking
//! - [`MobileMenuController`] - Hamburger menu
//! - [`ParallaxController`], [`ProgressController`] - Scroll effects
//! - [`CarouselController`] - Story card swiping
//! - [`PricingToggleController`] - Billing period switch
//! - [`AccordionController`] - FAQ disclosure

mod accordion;
mod carousel;
mod mobile_menu;
mod pricing;
mod scroll_effects;
mod theme;

pub use accordion::AccordionController;
pub use carousel::CarouselController;
pub use mobile_menu::MobileMenuController;
pub use pricing::PricingToggleController;
pub use scroll_effects::{ParallaxController, ProgressController};
pub use theme::ThemeController;
