//! Minimal TOML parser for scroller configuration
//!
//! Handles only the subset needed for the scroller settings. It does NOT
//! support the full TOML spec, and needs no allocator.
//!
//! Supported features:
//! - Key = value pairs (integer, string)
//! - A single `[scrolltext]` section header (keys may also sit at the root)
//! - Comments (# ...)
//!
//! Example:
//! ```toml
//! [scrolltext]
//! steps_per_second = 12
//! width = 16
//! height = 16
//! wobble_bpm = 35
//! text = "HELLO"
//! ```

use super::types::ScrollConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section header other than `[scrolltext]`
    InvalidSection,
    /// Unknown key or malformed `key = value` line
    InvalidKey,
    /// Value does not parse or does not fit
    InvalidValue,
}

/// Section name holding scroller settings
const SECTION: &str = "scrolltext";

/// Parse TOML configuration into a `ScrollConfig`
///
/// Keys that are absent keep their defaults.
pub fn parse_config(input: &str) -> Result<ScrollConfig, ParseError> {
    let mut config = ScrollConfig::default();

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            if line[1..line.len() - 1].trim() != SECTION {
                return Err(ParseError::InvalidSection);
            }
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidKey)?;
        apply_value(&mut config, key, value)?;
    }

    Ok(config)
}

/// Store one value into the config
fn apply_value(config: &mut ScrollConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "steps_per_second" => config.steps_per_second = parse_int(value)?,
        "width" => config.width = parse_int(value)?,
        "height" => config.height = parse_int(value)?,
        "wobble_bpm" => config.wobble_bpm = parse_int(value)?,
        "text" => {
            config.text.clear();
            config
                .text
                .push_str(parse_string(value)?)
                .map_err(|_| ParseError::InvalidValue)?;
        }
        _ => return Err(ParseError::InvalidKey),
    }
    Ok(())
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match value.find('#') {
        // Make sure # is not inside a string
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}
