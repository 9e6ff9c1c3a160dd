//! Error types

/// Errors returned when handing text to the scroller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollError {
    /// Text does not fit the scroller's fixed-capacity buffer
    TextTooLong,
    /// Byte string is not plain ASCII
    InvalidText,
}
