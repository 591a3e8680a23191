//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Selectors mirror the landing page markup; changing the markup means
//! changing them here.

// =============================================================================
// Theme
// =============================================================================

/// Theme preference handling.
pub mod theme {
    /// localStorage key for the theme preference.
    pub const STORAGE_KEY: &str = "theme";

    /// Attribute on the document root read by the stylesheet.
    pub const ROOT_ATTRIBUTE: &str = "data-theme";

    /// Media query signalling an OS-level dark color scheme.
    pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

    /// Theme toggle button id.
    pub const TOGGLE_ID: &str = "theme-toggle";

    /// Icon container inside the toggle button.
    pub const ICON_SELECTOR: &str = ".theme-icon";

    /// Icon shown while the light theme is active.
    pub const LIGHT_ICON: &str = r#"
                <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" fill="none"/>
            "#;

    /// Icon shown while the dark theme is active.
    pub const DARK_ICON: &str = r#"
                <circle cx="12" cy="12" r="5" stroke="currentColor" stroke-width="2"/>
                <path d="M12 1V3M12 21V23M23 12H21M3 12H1M20.485 3.515L19.071 4.929M4.929 19.071L3.515 20.485M20.485 20.485L19.071 19.071M4.929 4.929L3.515 3.515" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
            "#;
}

// =============================================================================
// Mobile Menu
// =============================================================================

pub mod menu {
    pub const TOGGLE_ID: &str = "mobile-menu-toggle";
    pub const NAV_SELECTOR: &str = ".header-nav";
    pub const HEADER_SELECTOR: &str = ".header";
    pub const LINK_SELECTOR: &str = ".nav-link";

    /// State class applied to both the toggle and the nav panel.
    pub const ACTIVE_CLASS: &str = "active";
}

// =============================================================================
// Scroll Effects
// =============================================================================

pub mod scroll {
    pub const HERO_IMAGE_SELECTOR: &str = ".hero-image";

    /// Fraction of the scroll offset applied to the hero image.
    pub const PARALLAX_FACTOR: f64 = 0.5;

    pub const PROGRESS_FILL_SELECTOR: &str = ".progress-fill";

    /// Section whose scroll-through drives the progress bar.
    pub const PROGRESS_SECTION_ID: &str = "how-it-works-your-path-to-dropshipping-success";
}

// =============================================================================
// Carousel
// =============================================================================

pub mod carousel {
    pub const CAROUSEL_SELECTOR: &str = ".stories-carousel";
    pub const CARD_SELECTOR: &str = ".story-card";

    /// Viewport width (px) at and above which the desktop layout applies.
    pub const DESKTOP_BREAKPOINT: f64 = 768.0;

    /// Minimum horizontal travel (px, exclusive) for a touch to count as a swipe.
    pub const SWIPE_THRESHOLD: f64 = 50.0;

    /// Transform written when the carousel is reset for desktop.
    pub const RESET_TRANSFORM: &str = "translateX(0)";
}

// =============================================================================
// Pricing
// =============================================================================

pub mod pricing {
    pub const TOGGLE_ID: &str = "billing-toggle";
    pub const AMOUNT_SELECTOR: &str = ".price-amount";
    pub const PERIOD_SELECTOR: &str = ".price-period";

    pub const MONTHLY_ATTRIBUTE: &str = "data-monthly";
    pub const ANNUAL_ATTRIBUTE: &str = "data-annual";

    pub const MONTHLY_LABEL: &str = "/month";
    pub const ANNUAL_LABEL: &str = "/year";

    /// Opacity applied while the new price fades in.
    pub const FADE_OPACITY: &str = "0.5";
    pub const FULL_OPACITY: &str = "1";

    /// Delay (ms) before the faded price returns to full opacity.
    pub const FADE_DURATION_MS: u32 = 150;
}

// =============================================================================
// FAQ Accordion
// =============================================================================

pub mod faq {
    pub const QUESTION_SELECTOR: &str = ".faq-question";

    /// Marker class the sibling following a question must carry.
    pub const ANSWER_CLASS: &str = "faq-answer";
}
