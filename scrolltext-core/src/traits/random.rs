//! Random source trait and a small built-in generator

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Random value in `[low, high)`
    ///
    /// Returns `low` when the range is empty.
    fn uniform(&mut self, low: u32, high: u32) -> u32;

    /// Random value in `[0, n)`
    fn below(&mut self, n: u32) -> u32 {
        self.uniform(0, n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        (**self).uniform(low, high)
    }
}

/// Default seed, matching the classic LED-animation generator
const DEFAULT_SEED: u16 = 1337;

/// 16-bit linear congruential generator
///
/// The same `seed * 2053 + 13849` recurrence LED animation libraries use
/// for cheap, repeatable randomness on parts without an RNG peripheral.
/// Not suitable for anything security related.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Random8 {
    seed: u16,
}

impl Default for Random8 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Random8 {
    /// Create a generator with the given seed
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    /// Current seed
    pub const fn seed(&self) -> u16 {
        self.seed
    }

    /// Stir extra entropy (ADC noise, timer jitter) into the seed
    pub fn add_entropy(&mut self, entropy: u16) {
        self.seed = self.seed.wrapping_add(entropy);
    }

    /// Next 16-bit value
    pub fn random16(&mut self) -> u16 {
        self.seed = self.seed.wrapping_mul(2053).wrapping_add(13849);
        self.seed
    }

    /// Next 8-bit value (both seed bytes folded together)
    pub fn random8(&mut self) -> u8 {
        let r = self.random16();
        (r as u8).wrapping_add((r >> 8) as u8)
    }
}

impl RandomSource for Random8 {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        let span = high.saturating_sub(low);
        let offset = match span {
            0 => return low,
            1..=256 => (u32::from(self.random8()) * span) >> 8,
            257..=65_536 => (u32::from(self.random16()) * span) >> 16,
            _ => {
                let wide = (u64::from(self.random16()) << 16) | u64::from(self.random16());
                ((wide * u64::from(span)) >> 32) as u32
            }
        };
        low + offset
    }
}
