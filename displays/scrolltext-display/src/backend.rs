//! Display backend adapters
//!
//! Bridges `scrolltext-core`'s `PixelPlotter` to `embedded-graphics` draw
//! targets.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, Point};
use embedded_graphics::Pixel;
use scrolltext_core::PixelPlotter;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Output buffer too small for the frame
    BufferOverflow,
    /// The draw target rejected at least one pixel
    DrawFailed,
}

/// Plotter that draws into an `embedded-graphics` target
///
/// Pixels outside the target's bounding box are dropped before they reach
/// the target. Draw errors are remembered rather than propagated, since a
/// plotter cannot fail; check them with [`finish`](Self::finish).
pub struct GraphicsPlotter<'a, D> {
    target: &'a mut D,
    failed: bool,
}

impl<'a, D: DrawTarget> GraphicsPlotter<'a, D> {
    /// Wrap a draw target
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            failed: false,
        }
    }

    /// Check if any pixel failed to draw so far
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Release the target, reporting whether every pixel was drawn
    pub fn finish(self) -> Result<(), DisplayError> {
        if self.failed {
            Err(DisplayError::DrawFailed)
        } else {
            Ok(())
        }
    }
}

impl<D: DrawTarget> PixelPlotter<D::Color> for GraphicsPlotter<'_, D> {
    fn plot(&mut self, x: i32, y: i32, color: D::Color) {
        let point = Point::new(x, y);
        if !self.target.bounding_box().contains(point) {
            return;
        }
        if self
            .target
            .draw_iter(core::iter::once(Pixel(point, color)))
            .is_err()
        {
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embedded_graphics::geometry::Size;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use scrolltext_core::{Clock, DrawOutcome, Random8, ScrollingText};

    struct Millis(Cell<u32>);

    impl Clock for Millis {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    /// Target that refuses every pixel
    struct Broken;

    impl Dimensions for Broken {
        fn bounding_box(&self) -> embedded_graphics::primitives::Rectangle {
            embedded_graphics::primitives::Rectangle::new(Point::zero(), Size::new(8, 8))
        }
    }

    impl DrawTarget for Broken {
        type Color = BinaryColor;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err(())
        }
    }

    #[test]
    fn test_plot_in_bounds() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let mut plotter = GraphicsPlotter::new(&mut display);
        plotter.plot(2, 3, BinaryColor::On);
        assert!(plotter.finish().is_ok());
        assert_eq!(display.get_pixel(Point::new(2, 3)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(3, 2)), None);
    }

    #[test]
    fn test_out_of_bounds_dropped() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let mut plotter = GraphicsPlotter::new(&mut display);
        plotter.plot(-1, 0, BinaryColor::On);
        plotter.plot(0, -1, BinaryColor::On);
        plotter.plot(64, 0, BinaryColor::On);
        plotter.plot(0, 64, BinaryColor::On);
        assert!(plotter.finish().is_ok());
    }

    #[test]
    fn test_draw_errors_reported() {
        let mut target = Broken;
        let mut plotter = GraphicsPlotter::new(&mut target);
        plotter.plot(20, 20, BinaryColor::On);
        assert!(!plotter.has_failed());
        plotter.plot(1, 1, BinaryColor::On);
        assert!(plotter.has_failed());
        assert_eq!(plotter.finish(), Err(DisplayError::DrawFailed));
    }

    #[test]
    fn test_scroll_into_graphics_target() {
        let clock = Millis(Cell::new(0));
        let mut scroller: ScrollingText<&Millis, Random8> =
            ScrollingText::new(&clock, Random8::default());
        scroller.setup(10, 64, 64);
        scroller.set_text("I", false).unwrap();

        clock.0.set(1_000);
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let mut plotter = GraphicsPlotter::new(&mut display);
        assert_eq!(scroller.draw(&mut plotter, BinaryColor::On), DrawOutcome::Rendered);
        assert!(plotter.finish().is_ok());

        // 'I' starts at x = 63; its first column is blank
        assert_eq!(lit_pixels(&display), 0);

        // One step later the second column (rows 0 and 6) shows at x = 63
        clock.0.set(1_100);
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let mut plotter = GraphicsPlotter::new(&mut display);
        assert_eq!(scroller.draw(&mut plotter, BinaryColor::On), DrawOutcome::Rendered);
        assert!(plotter.finish().is_ok());

        let y = scroller.cursor_y();
        assert!(!scroller.wobble());
        assert_eq!(lit_pixels(&display), 2);
        assert_eq!(display.get_pixel(Point::new(63, y)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(63, y + 6)), Some(BinaryColor::On));
    }

    fn lit_pixels(display: &MockDisplay<BinaryColor>) -> usize {
        (0..64)
            .flat_map(|y| (0..64).map(move |x| Point::new(x, y)))
            .filter(|&p| display.get_pixel(p).is_some())
            .count()
    }
}
