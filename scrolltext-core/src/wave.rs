//! Integer waveform helpers
//!
//! 8-bit sine and beat generators for the wobble effect. Everything is
//! integer math so the animation runs on cores without an FPU (Cortex-M0).
//! Angles are in 1/256ths of a turn.

/// Segment base/slope pairs for the piecewise-linear quarter sine
const SIN8_SEGMENTS: [(u8, u8); 4] = [(0, 49), (49, 41), (90, 27), (117, 10)];

/// 8-bit sine approximation
///
/// Maps `theta` (0..=255 = one full turn) to 1..=255, centred on 128.
/// `sin8(0) == 128`, `sin8(64) == 255`, `sin8(192) == 1`.
pub fn sin8(theta: u8) -> u8 {
    let falling = theta & 0x40 != 0;

    let mut offset = if falling { 255 - theta } else { theta };
    offset &= 0x3F;

    let mut sec_offset = offset & 0x0F;
    if falling {
        sec_offset += 1;
    }

    let (base, slope) = SIN8_SEGMENTS[usize::from(offset >> 4)];
    let y = i16::from(base) + i16::from(((slope as u16 * sec_offset as u16) >> 4) as u8);
    let y = if theta & 0x80 != 0 { -y } else { y };

    (y + 128) as u8
}

/// Scale `i` by `scale / 256`, where a scale of 255 maps 255 to 255
#[inline]
pub const fn scale8(i: u8, scale: u8) -> u8 {
    ((i as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Sawtooth that wraps `bpm` times per minute
///
/// `timebase_ms` shifts the start of the first cycle. The clock may wrap.
pub fn beat8(bpm: u8, now_ms: u32, timebase_ms: u32) -> u8 {
    // bpm as 8.8 fixed point; 280 ≈ 65536 * 256 / 60000
    let bpm88 = u64::from(bpm) << 8;
    let elapsed = u64::from(now_ms.wrapping_sub(timebase_ms));
    let beat16 = ((elapsed * bpm88 * 280) >> 16) as u16;
    (beat16 >> 8) as u8
}

/// Sine wave oscillating between `low` and `high` at `bpm` beats per minute
///
/// `phase` offsets the wave by 1/256ths of a cycle.
pub fn beatsin8(bpm: u8, low: u8, high: u8, now_ms: u32, timebase_ms: u32, phase: u8) -> u8 {
    let beat = beat8(bpm, now_ms, timebase_ms);
    let sin = sin8(beat.wrapping_add(phase));
    low.wrapping_add(scale8(sin, high.wrapping_sub(low)))
}
