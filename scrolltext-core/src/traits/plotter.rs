//! Pixel plotter trait

/// Sink for lit pixels
///
/// Implementations must accept any coordinate, including negative and
/// off-matrix ones, without faulting. Ignoring them is the usual answer.
pub trait PixelPlotter<C> {
    /// Set the pixel at (`x`, `y`) to `color`
    fn plot(&mut self, x: i32, y: i32, color: C);
}

impl<C, F> PixelPlotter<C> for F
where
    F: FnMut(i32, i32, C),
{
    fn plot(&mut self, x: i32, y: i32, color: C) {
        self(x, y, color)
    }
}
