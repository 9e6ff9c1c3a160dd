//! Board-agnostic scrolling text for LED matrices
//!
//! This crate contains the marquee animation and everything it needs that
//! does not depend on a specific LED driver:
//!
//! - 5x7 bitmap font table (`font`)
//! - Integer sine/beat helpers for the wobble effect (`wave`)
//! - Collaborator traits: clock, random source, pixel plotter (`traits`)
//! - The `ScrollingText` state machine (`scroller`)
//! - Configuration types and a minimal TOML parser (`config`)
//!
//! # Usage
//!
//! The component is poll-driven. Call [`ScrollingText::draw`] once per
//! animation frame from whatever loop refreshes the matrix; it decides on
//! its own whether to wait, advance a column, render, or start over.
//!
//! ```
//! use core::cell::Cell;
//! use scrolltext_core::{Clock, Random8, ScrollingText};
//!
//! struct Millis(Cell<u32>);
//!
//! impl Clock for Millis {
//!     fn now_ms(&self) -> u32 {
//!         self.0.get()
//!     }
//! }
//!
//! let clock = Millis(Cell::new(0));
//! let mut scroller: ScrollingText<&Millis, Random8> = ScrollingText::new(&clock, Random8::new(7));
//! scroller.setup(10, 32, 8);
//! scroller.set_text("HELLO", false).unwrap();
//!
//! clock.0.set(1_000);
//! let mut lit = 0;
//! scroller.draw(&mut |_x: i32, _y: i32, _c: bool| lit += 1, true);
//! assert!(lit > 0);
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

mod fmt;

pub mod config;
pub mod error;
pub mod font;
pub mod scroller;
pub mod traits;
pub mod wave;

// Re-export key types
pub use config::{parse_config, ParseError, ScrollConfig};
pub use error::ScrollError;
pub use font::{GlyphTable, FONT_5X7, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
pub use scroller::{DrawOutcome, ScrollingText, MAX_TEXT_LEN};
pub use traits::{deadline_reached, Clock, PixelPlotter, Random8, RandomSource};
