//! Pixel sinks for scrolltext
//!
//! This crate provides:
//! - `Frame` - an in-memory RGB frame that scrolltext can draw into
//! - `Layout` - mapping from (x, y) to position on the LED strip
//! - `GraphicsPlotter` - adapter that draws into any `embedded-graphics` target
//!
//! # Architecture
//!
//! `scrolltext-core` only knows how to emit lit pixels through a
//! `PixelPlotter`. The LED driver that pushes colors out to the hardware is
//! not part of this workspace; it consumes either a `Frame` flattened with
//! `Frame::write_strip`, or an `embedded-graphics` draw target.
//!
//! ## Supported Targets
//!
//! - **Addressable strips** (WS2812 and friends wired as a matrix): draw into
//!   a `Frame`, flatten it in strip order, hand the slice to the driver.
//!
//! - **Graphics displays** (anything implementing `DrawTarget`): wrap the
//!   display in a `GraphicsPlotter` and draw directly.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod frame;
pub mod layout;

// Re-export key types
pub use backend::{DisplayError, GraphicsPlotter};
pub use frame::Frame;
pub use layout::Layout;
pub use smart_leds::RGB8;
