//! Millisecond clock trait

/// Monotonic millisecond clock
///
/// The counter is allowed to wrap at `u32::MAX` (about 49.7 days). All
/// scheduling in this crate compares timestamps with [`deadline_reached`],
/// which stays correct across the wrap as long as deadlines are less than
/// ~24.8 days apart from `now`.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Check whether `now` is at or past `deadline`, tolerating wraparound
#[inline]
pub fn deadline_reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation gives the wrapping millisecond counter
        embassy_time::Instant::now().as_millis() as u32
    }
}
