//! Color string parsing
//!
//! Turns text into a validated [`RgbColor`]. The accepted notations are:
//! * `#RGB` or `RGB` (each digit doubled)
//! * `#RRGGBB` or `RRGGBB`
//! * `rgb(r, g, b)` with integer channels
//! * `rgb(r%, g%, b%)` with integer percentages, where a bare `0` is also allowed
//!
//! Matching is case-insensitive and the whole input must match; surrounding
//! whitespace is not stripped.

use crate::{ColorError, Result, RgbColor};

/// Parse a color string
///
/// # Errors
///
/// Returns `ColorError::Format` if the text matches no notation, and
/// `ColorError::Range` if an `rgb()` component is above 255 (or 100%).
pub fn parse_rgb(input: &str) -> Result<RgbColor> {
    let hex = input.strip_prefix('#').unwrap_or(input).as_bytes();
    let parsed = match hex.len() {
        3 => parse_short_hex(hex),
        6 => parse_long_hex(hex),
        _ => None,
    };
    if let Some(color) = parsed {
        return Ok(color);
    }

    if let Some(args) = css_rgb_args(input) {
        return parse_css_rgb(input, args);
    }

    Err(ColorError::format(input))
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_short_hex(digits: &[u8]) -> Option<RgbColor> {
    Some(RgbColor::new(
        nibble(digits[0])? * 17,
        nibble(digits[1])? * 17,
        nibble(digits[2])? * 17,
    ))
}

fn parse_long_hex(digits: &[u8]) -> Option<RgbColor> {
    let byte = |i: usize| Some((nibble(digits[i])? << 4) | nibble(digits[i + 1])?);
    Some(RgbColor::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Extract the argument list of `rgb ( ... )`, without the parentheses
fn css_rgb_args(input: &str) -> Option<&str> {
    let name = input.get(..3)?;
    if !name.eq_ignore_ascii_case("rgb") {
        return None;
    }

    input[3..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim_end)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Integer(u64),
    Percent(u64),
}

fn parse_component(text: &str) -> Option<Component> {
    let (digits, percent) = match text.strip_suffix('%') {
        Some(digits) => (digits, true),
        None => (text, false),
    };

    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // Overlong digit strings still fail the range check below
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(if percent {
        Component::Percent(value)
    } else {
        Component::Integer(value)
    })
}

fn parse_css_rgb(input: &str, args: &str) -> Result<RgbColor> {
    // No whitespace is allowed directly after the opening parenthesis
    if args.starts_with(char::is_whitespace) {
        return Err(ColorError::format(input));
    }

    let components = args
        .split(',')
        .map(|part| parse_component(part.trim()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ColorError::format(input))?;

    let channels =
        <[Component; 3]>::try_from(components).map_err(|_| ColorError::format(input))?;

    let all_integers = channels.iter().all(|c| matches!(c, Component::Integer(_)));
    let all_percentages = channels
        .iter()
        .all(|c| matches!(c, Component::Percent(_) | Component::Integer(0)));

    let scaled = if all_integers {
        channels.map(|c| match c {
            Component::Integer(value) | Component::Percent(value) => saturating_i64(value),
        })
    } else if all_percentages {
        channels.map(|c| match c {
            Component::Integer(_) => 0,
            Component::Percent(value) => (value as f64 / 100.0 * 255.0) as i64,
        })
    } else {
        return Err(ColorError::format(input));
    };

    RgbColor::try_new(scaled[0], scaled[1], scaled[2])
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
