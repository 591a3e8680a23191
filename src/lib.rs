//! Interactive behavior for the TurboDrop Academy landing page.
//!
//! The page markup and styles are served as-is; this crate attaches the
//! client-side behavior on top of them:
//!
//! - [`components::ThemeController`] - Persisted light/dark/auto theme
//! - [`components::MobileMenuController`] - Hamburger menu
//! - [`components::ParallaxController`] - Hero image parallax
//! - [`components::ProgressController`] - Section scroll progress bar
//! - [`components::CarouselController`] - Swipeable story cards
//! - [`components::PricingToggleController`] - Monthly/annual prices
//! - [`components::AccordionController`] - Single-open FAQ

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{Controllers, init_all, run};
