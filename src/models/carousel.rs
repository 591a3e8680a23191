//! Card carousel index and swipe gesture handling.

use crate::config::carousel::{DESKTOP_BREAKPOINT, RESET_TRANSFORM, SWIPE_THRESHOLD};

/// Direction of a recognized swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next card.
    Next,
    /// Finger moved right: show the previous card.
    Previous,
}

/// Classifies a touch gesture from its start and end screen X coordinates.
///
/// Movements of `SWIPE_THRESHOLD` pixels or less are ignored.
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<Swipe> {
    let delta = start_x - end_x;
    if delta.abs() <= SWIPE_THRESHOLD {
        None
    } else if delta > 0.0 {
        Some(Swipe::Next)
    } else {
        Some(Swipe::Previous)
    }
}

/// Whether a viewport width uses the desktop layout.
#[inline]
pub fn is_desktop(width: f64) -> bool {
    width >= DESKTOP_BREAKPOINT
}

/// Circular index over a fixed number of cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances one card, wrapping to the first. No-op without cards.
    pub fn next(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    /// Steps back one card, wrapping to the last. No-op without cards.
    pub fn prev(&mut self) {
        if self.count > 0 {
            self.index = (self.index + self.count - 1) % self.count;
        }
    }

    pub fn apply(&mut self, swipe: Swipe) {
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Previous => self.prev(),
        }
    }

    /// Hard reset to the first card.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// CSS `transform` value positioning the current card.
    pub fn transform(&self) -> String {
        format!("translateX({}%)", -(self.index as i64) * 100)
    }

    /// Transform written by a desktop reset.
    pub fn reset_transform() -> &'static str {
        RESET_TRANSFORM
    }
}
