//! Scroll-linked effect math: hero parallax and section progress.

use crate::config::scroll::PARALLAX_FACTOR;

// ============================================================================
// Parallax
// ============================================================================

/// Vertical translation (px) for the hero image at a given scroll offset.
#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// CSS `transform` value for a vertical translation in pixels.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

// ============================================================================
// Section Progress
// ============================================================================

/// Position and size of the tracked section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionMetrics {
    /// Offset of the section's top edge from the document start.
    pub top: f64,
    pub height: f64,
}

/// Current scroll position and viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

/// How far (0..=100) the viewport has scrolled through a section.
///
/// Zero until the viewport's bottom edge reaches the section top, then
/// grows linearly until the section has fully left the top of the viewport.
pub fn scroll_progress(section: SectionMetrics, viewport: Viewport) -> f64 {
    let bottom = viewport.scroll_y + viewport.height;
    if bottom <= section.top {
        return 0.0;
    }

    let span = section.height + viewport.height;
    if span <= 0.0 {
        return 0.0;
    }

    (((bottom - section.top) / span) * 100.0).min(100.0)
}

/// CSS width value for a percentage.
pub fn format_percent(progress: f64) -> String {
    format!("{}%", progress)
}
