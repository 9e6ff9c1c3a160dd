//! LED strip layouts
//!
//! Maps matrix coordinates to the position of the LED along the strip.

/// How the strip snakes through the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layout {
    /// Every row runs left to right
    #[default]
    RowMajor,
    /// Even rows run left to right, odd rows right to left
    Serpentine,
}

impl Layout {
    /// Strip index of pixel (`x`, `y`) on a matrix `width` pixels wide
    pub const fn index(self, x: usize, y: usize, width: usize) -> usize {
        match self {
            Layout::RowMajor => y * width + x,
            Layout::Serpentine if y % 2 == 1 => y * width + (width - 1 - x),
            Layout::Serpentine => y * width + x,
        }
    }
}
