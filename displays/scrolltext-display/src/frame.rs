//! Frame buffer
//!
//! An in-memory RGB image of the whole matrix that scrolltext draws into
//! between refreshes.

use scrolltext_core::PixelPlotter;
use smart_leds::RGB8;

use crate::backend::DisplayError;
use crate::layout::Layout;

/// Unlit pixel
const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// RGB frame for a `W` x `H` matrix
///
/// Implements `PixelPlotter`, silently ignoring coordinates outside the
/// matrix. Tracks whether anything changed since the last refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<const W: usize, const H: usize> {
    /// Pixel colors, row by row
    pixels: [[RGB8; W]; H],
    /// Whether the frame changed since `mark_clean`
    dirty: bool,
}

impl<const W: usize, const H: usize> Default for Frame<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Frame<W, H> {
    /// Matrix width in pixels
    pub const WIDTH: usize = W;

    /// Matrix height in pixels
    pub const HEIGHT: usize = H;

    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            pixels: [[BLACK; W]; H],
            dirty: true,
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: RGB8) {
        for row in &mut self.pixels {
            row.fill(color);
        }
        self.dirty = true;
    }

    /// Color at (`x`, `y`), or None outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<RGB8> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Number of pixels that are not black
    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .flatten()
            .filter(|&&pixel| pixel != BLACK)
            .count()
    }

    /// Rows of the frame, top first
    pub fn rows(&self) -> impl Iterator<Item = &[RGB8; W]> {
        self.pixels.iter()
    }

    /// Check if the frame needs pushing to the LEDs
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark frame as clean (after refresh)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Copy the frame into `out` in LED strip order
    ///
    /// Fails with `BufferOverflow` if `out` holds fewer than `W * H` pixels.
    pub fn write_strip(&self, layout: Layout, out: &mut [RGB8]) -> Result<(), DisplayError> {
        if out.len() < W * H {
            return Err(DisplayError::BufferOverflow);
        }
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                out[layout.index(x, y, W)] = pixel;
            }
        }
        Ok(())
    }
}

impl<const W: usize, const H: usize> PixelPlotter<RGB8> for Frame<W, H> {
    fn plot(&mut self, x: i32, y: i32, color: RGB8) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.pixels.get_mut(y).and_then(|row| row.get_mut(x)) {
            *pixel = color;
            self.dirty = true;
        }
    }
}
