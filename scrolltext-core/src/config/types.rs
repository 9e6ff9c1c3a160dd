//! Configuration type definitions

use heapless::String;

use crate::scroller::MAX_TEXT_LEN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default scroll speed (columns per second)
pub const DEFAULT_STEPS_PER_SECOND: u16 = 10;

/// Default matrix width in pixels
pub const DEFAULT_WIDTH: u16 = 32;

/// Default matrix height in pixels
pub const DEFAULT_HEIGHT: u16 = 8;

/// Default wobble rate (beats per minute)
pub const DEFAULT_WOBBLE_BPM: u8 = 35;

/// Scroller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    /// Horizontal speed in columns per second
    pub steps_per_second: u16,
    /// Matrix width in pixels
    pub width: u16,
    /// Matrix height in pixels
    pub height: u16,
    /// Wobble oscillation rate in beats per minute
    pub wobble_bpm: u8,
    /// Text to loop when nothing else is showing (empty = none)
    pub text: String<MAX_TEXT_LEN>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wobble_bpm: DEFAULT_WOBBLE_BPM,
            text: String::new(),
        }
    }
}

impl ScrollConfig {
    /// Time between one-column advances in milliseconds
    ///
    /// Zero steps per second yields an infinite interval.
    pub fn step_interval_ms(&self) -> f32 {
        1000.0 / f32::from(self.steps_per_second)
    }

    /// Check if a default text is configured
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}
