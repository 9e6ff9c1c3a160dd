//! Scrolling text state machine
//!
//! A single marquee message moving right-to-left across the matrix, one
//! column per step interval. Each call to [`ScrollingText::draw`] is one
//! animation frame; the component itself decides whether it is still
//! dwelling, needs to advance, has finished, or should render.
//!
//! ```text
//!   set_text ──► Dwelling ──(now >= resume_at)──► Advancing ──► Rendering
//!                   ▲                                  │
//!                   └──── text scrolled off: reload ◄──┘
//!                         the default text
//! ```

use heapless::String;

use crate::config::ScrollConfig;
use crate::error::ScrollError;
use crate::font::{GlyphTable, GLYPH_SPACING};
use crate::traits::{deadline_reached, Clock, PixelPlotter, RandomSource};
use crate::wave::beatsin8;

/// Default text capacity in bytes
pub const MAX_TEXT_LEN: usize = 64;

/// Pause before a transient message starts moving
pub const TRANSIENT_DELAY_MS: u32 = 1000;

/// Shortest dwell between default-text cycles (inclusive)
pub const DWELL_MIN_S: u32 = 30;

/// Longest dwell between default-text cycles (exclusive)
pub const DWELL_MAX_S: u32 = 60;

/// Wobble is enabled for one in this many messages
const WOBBLE_ODDS: u32 = 3;

/// Wobble wave range before the offset is applied
const WOBBLE_LOW: u8 = 0;
const WOBBLE_HIGH: u8 = 6;

/// Shift applied to the wobble wave, giving rows -2..=4
const WOBBLE_OFFSET: i32 = 2;

/// Left shift turning a character's lag into a wave phase offset (32/256 of a cycle each)
const WOBBLE_PHASE_SHIFT: u32 = 5;

/// What a call to [`ScrollingText::draw`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawOutcome {
    /// Waiting for the resume time; nothing drawn
    Dwelling,
    /// Text scrolled off; default text reloaded, nothing drawn
    Finished,
    /// Text drawn at the current position
    Rendered,
}

/// Horizontally scrolling text on an LED matrix
///
/// Owns a copy of the active and default texts, so callers are free to
/// drop or reuse their buffers after handing text over. `N` is the text
/// capacity in bytes.
#[derive(Debug)]
pub struct ScrollingText<K, R, const N: usize = MAX_TEXT_LEN> {
    clock: K,
    rng: R,
    font: GlyphTable,
    matrix_width: u16,
    matrix_height: u16,
    step_interval_ms: f32,
    wobble_bpm: u8,
    current_text: String<N>,
    default_text: String<N>,
    /// Cached character count of `current_text`
    text_len: usize,
    /// Leading edge of the text; starts at `matrix_width`, only decreases
    cursor_x: i32,
    cursor_y: i32,
    wobble: bool,
    resume_at_ms: u32,
    next_step_at_ms: u32,
}

impl<K, R, const N: usize> ScrollingText<K, R, N>
where
    K: Clock,
    R: RandomSource,
{
    /// Create a scroller with the default configuration
    ///
    /// Call [`setup`](Self::setup) to match the real matrix.
    pub fn new(clock: K, rng: R) -> Self {
        let config = ScrollConfig::default();
        let mut scroller = Self {
            clock,
            rng,
            font: GlyphTable::FONT_5X7,
            matrix_width: 0,
            matrix_height: 0,
            step_interval_ms: 0.0,
            wobble_bpm: config.wobble_bpm,
            current_text: String::new(),
            default_text: String::new(),
            text_len: 0,
            cursor_x: 0,
            cursor_y: 0,
            wobble: false,
            resume_at_ms: 0,
            next_step_at_ms: 0,
        };
        scroller.setup(config.steps_per_second, config.width, config.height);
        scroller
    }

    /// Configure speed and matrix bounds
    ///
    /// `steps_per_second` of zero is accepted and simply stops the text
    /// from ever advancing. Rebinds the built-in 5x7 font and rearms the
    /// schedule at the current time; the current text is kept.
    pub fn setup(&mut self, steps_per_second: u16, matrix_width: u16, matrix_height: u16) {
        let now = self.clock.now_ms();
        self.matrix_width = matrix_width;
        self.matrix_height = matrix_height;
        self.step_interval_ms = 1000.0 / f32::from(steps_per_second);
        self.resume_at_ms = now;
        self.next_step_at_ms = now;
        self.font = GlyphTable::FONT_5X7;
    }

    /// Configure from a [`ScrollConfig`]
    ///
    /// Starts the configured default text, if any.
    pub fn setup_with(&mut self, config: &ScrollConfig) -> Result<(), ScrollError> {
        self.setup(config.steps_per_second, config.width, config.height);
        self.wobble_bpm = config.wobble_bpm;
        if config.has_text() {
            self.set_text(&config.text, true)?;
        }
        Ok(())
    }

    /// Replace the font
    ///
    /// Glyph geometry (width, height, spacing) follows the new table.
    pub fn set_font(&mut self, font: GlyphTable) {
        self.font = font;
    }

    /// Start scrolling `text`
    ///
    /// With `is_default`, the text is also remembered as the message to
    /// return to after any transient text finishes, and it starts after a
    /// random 30-59 s dwell. Transient text starts after one second.
    ///
    /// Fails with `TextTooLong` if `text` exceeds the capacity; the
    /// scroller is left untouched in that case.
    pub fn set_text(&mut self, text: &str, is_default: bool) -> Result<(), ScrollError> {
        let mut owned: String<N> = String::new();
        if owned.push_str(text).is_err() {
            warn!("scrolltext: {} bytes exceeds capacity {}", text.len(), N);
            return Err(ScrollError::TextTooLong);
        }

        if is_default {
            self.default_text.clone_from(&owned);
        }
        self.current_text = owned;
        self.restart(is_default);
        Ok(())
    }

    /// Start scrolling a byte string, such as one kept in flash
    ///
    /// Reads up to the first NUL (or the end of the slice). The bytes must
    /// be ASCII.
    pub fn set_text_bytes(&mut self, bytes: &[u8], is_default: bool) -> Result<(), ScrollError> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let bytes = &bytes[..end];
        if !bytes.is_ascii() {
            return Err(ScrollError::InvalidText);
        }
        let text = core::str::from_utf8(bytes).map_err(|_| ScrollError::InvalidText)?;
        self.set_text(text, is_default)
    }

    /// Reset position and timing for a fresh traversal of `current_text`
    fn restart(&mut self, is_default: bool) {
        self.text_len = self.current_text.chars().count();
        self.cursor_x = i32::from(self.matrix_width);

        let y_span = self.matrix_height.saturating_sub(u16::from(self.font.height()));
        self.cursor_y = self.rng.uniform(0, u32::from(y_span)) as i32;
        self.wobble = self.rng.below(WOBBLE_ODDS) == 0;

        let delay_ms = if is_default {
            let seconds = self.rng.uniform(DWELL_MIN_S, DWELL_MAX_S);
            seconds.min(DWELL_MAX_S - 1).saturating_mul(1000)
        } else {
            TRANSIENT_DELAY_MS
        };
        self.resume_at_ms = self.clock.now_ms().wrapping_add(delay_ms);
        // First column moves as soon as the dwell ends
        self.next_step_at_ms = self.resume_at_ms;

        debug!(
            "scrolltext: {} chars, default={}, wobble={}, resume in {}ms",
            self.text_len,
            is_default,
            self.wobble,
            delay_ms
        );
    }

    /// Draw one animation frame
    ///
    /// Advances at most one column per step interval no matter how often
    /// it is called.
    pub fn draw<C, P>(&mut self, plotter: &mut P, color: C) -> DrawOutcome
    where
        C: Copy,
        P: PixelPlotter<C>,
    {
        let now = self.clock.now_ms();
        if !deadline_reached(now, self.resume_at_ms) {
            return DrawOutcome::Dwelling;
        }

        if deadline_reached(now, self.next_step_at_ms) {
            self.cursor_x -= 1;
            self.next_step_at_ms = now.wrapping_add(self.step_interval_ticks());
        }

        if self.cursor_x < -self.text_pixel_width() {
            trace!("scrolltext: traversal finished at {}ms", now);
            self.current_text.clone_from(&self.default_text);
            self.restart(true);
            return DrawOutcome::Finished;
        }

        let pitch = self.glyph_pitch();
        let mut y = self.cursor_y;
        for (i, ch) in self.current_text.chars().enumerate() {
            if self.wobble {
                y = self.wobble_row(now, self.text_len - i - 1);
            }
            self.draw_glyph(plotter, self.cursor_x + pitch * i as i32, y, ch, color);
        }
        self.cursor_y = y;

        DrawOutcome::Rendered
    }

    /// Draw a single glyph with its top-left corner at (`x`, `y`)
    ///
    /// Only pixels inside the matrix reach the plotter.
    pub fn draw_glyph<C, P>(&self, plotter: &mut P, x: i32, y: i32, ch: char, color: C)
    where
        C: Copy,
        P: PixelPlotter<C>,
    {
        let width = i32::from(self.matrix_width);
        let height = i32::from(self.matrix_height);
        let glyph_width = i32::from(self.font.width());
        let glyph_height = i32::from(self.font.height());

        if x >= width || y >= height || x + glyph_width < 0 || y + glyph_height < 0 {
            return;
        }

        for (i, &column) in self.font.glyph(ch).iter().enumerate() {
            let px = x + i as i32;
            if !(0..width).contains(&px) {
                continue;
            }

            let mut line = column;
            for j in 0..glyph_height {
                let py = y + j;
                if line & 0x1 != 0 && (0..height).contains(&py) {
                    plotter.plot(px, py, color);
                }
                line >>= 1;
            }
        }
    }

    /// Row for character `lag` places from the end of the text
    fn wobble_row(&self, now: u32, lag: usize) -> i32 {
        let phase = (lag as u32) << WOBBLE_PHASE_SHIFT;
        let wave = beatsin8(self.wobble_bpm, WOBBLE_LOW, WOBBLE_HIGH, now, 0, phase as u8);
        i32::from(wave) - WOBBLE_OFFSET
    }

    /// Step interval rounded down to whole milliseconds
    ///
    /// Capped so the next deadline always lands in the future half of the
    /// wrapping clock.
    fn step_interval_ticks(&self) -> u32 {
        (self.step_interval_ms as u32).min(i32::MAX as u32)
    }

    /// Horizontal distance between the starts of adjacent glyphs
    fn glyph_pitch(&self) -> i32 {
        i32::from(self.font.width()) + i32::from(GLYPH_SPACING)
    }

    /// Width of the whole text including inter-glyph spacing
    pub fn text_pixel_width(&self) -> i32 {
        self.glyph_pitch() * self.text_len as i32
    }

    /// Check if the scroller is waiting for its resume time
    pub fn is_dwelling(&self) -> bool {
        !deadline_reached(self.clock.now_ms(), self.resume_at_ms)
    }

    /// Active text
    pub fn text(&self) -> &str {
        &self.current_text
    }

    /// Text resumed after the active one finishes
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Character count of the active text
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Horizontal position of the text's leading edge
    pub fn cursor_x(&self) -> i32 {
        self.cursor_x
    }

    /// Vertical position of the text (last wobble row when wobbling)
    pub fn cursor_y(&self) -> i32 {
        self.cursor_y
    }

    /// Check if the wobble effect is on for the active text
    pub fn wobble(&self) -> bool {
        self.wobble
    }

    /// Time at which the text starts (or resumes) moving
    pub fn resume_at_ms(&self) -> u32 {
        self.resume_at_ms
    }

    /// Time of the next one-column advance
    pub fn next_step_at_ms(&self) -> u32 {
        self.next_step_at_ms
    }

    /// Time between advances in milliseconds
    pub fn step_interval_ms(&self) -> f32 {
        self.step_interval_ms
    }

    /// Matrix (width, height) in pixels
    pub fn matrix_size(&self) -> (u16, u16) {
        (self.matrix_width, self.matrix_height)
    }

    /// Font in use
    pub fn font(&self) -> &GlyphTable {
        &self.font
    }
}
