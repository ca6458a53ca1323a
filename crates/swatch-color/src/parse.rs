// SPDX-License-Identifier: MIT
//
// Color string parsing.
//
// Accepted forms:
//
//   #RGB  #RGBA  #RRGGBB  #RRGGBBAA   (`#` optional, case-insensitive digits)
//   rgb(r, g, b)  rgba(r, g, b, a)     channels 0–255 or 0%–100%
//   hsl(h, s%, l%)  hsla(h, s%, l%, a) hue in degrees (wraps), `%` optional
//   red  rebeccapurple  transparent    CSS named colors
//
// Functional arguments may be separated by commas or spaces, and the
// alpha may follow a `/`. Alpha is validated (0–1 or 0%–100%) and then
// dropped: palettes are opaque.

use std::str::FromStr;

use thiserror::Error;

use crate::color::{Color, normalize_hue};
use crate::named::named_color;

/// Why a string could not be read as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),

    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),

    #[error("invalid color function {0:?}")]
    InvalidFunction(String),

    #[error("{component} out of range: {value}")]
    OutOfRange { component: &'static str, value: String },

    #[error("unrecognized color format {0:?}")]
    UnknownFormat(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        if s.starts_with('#') {
            return parse_hex(s);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
            return parse_rgb(s, args);
        }
        if let Some(args) = function_args(&lower, "hsla").or_else(|| function_args(&lower, "hsl")) {
            return parse_hsl(s, args);
        }

        if let Some(color) = named_color(&lower) {
            return Ok(color);
        }

        if s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return parse_hex(s);
        }

        Err(ParseColorError::UnknownFormat(s.to_string()))
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Parse `#RGB[A]` / `#RRGGBB[AA]` (with or without the `#`).
///
/// The alpha digits must be valid hex but are otherwise ignored.
pub(crate) fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = digits.as_bytes();
    let invalid = || ParseColorError::InvalidHex(s.to_string());

    match bytes.len() {
        3 | 4 => {
            if !bytes.iter().all(u8::is_ascii_hexdigit) {
                return Err(invalid());
            }
            let r = parse_hex_digit(bytes[0]).ok_or_else(invalid)?;
            let g = parse_hex_digit(bytes[1]).ok_or_else(invalid)?;
            let b = parse_hex_digit(bytes[2]).ok_or_else(invalid)?;
            Ok(Color::rgb8(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            if !bytes.iter().all(u8::is_ascii_hexdigit) {
                return Err(invalid());
            }
            let r = parse_hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
            let g = parse_hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
            let b = parse_hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
            Ok(Color::rgb8(r, g, b))
        }
        0 => Err(ParseColorError::Empty),
        n => Err(ParseColorError::InvalidLength(n)),
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Functional notation ─────────────────────────────────────────────────────

/// Return the text between `name(` and `)`, if `s` has that shape.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Split function arguments into three channels plus an optional alpha.
///
/// Separators are commas, whitespace and `/`, in any mix.
fn channel_args<'a>(
    original: &str,
    args: &'a str,
) -> Result<([&'a str; 3], Option<&'a str>), ParseColorError> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts[..] {
        [a, b, c] => Ok(([a, b, c], None)),
        [a, b, c, alpha] => Ok(([a, b, c], Some(alpha))),
        _ => Err(ParseColorError::InvalidFunction(original.to_string())),
    }
}

fn number(original: &str, text: &str) -> Result<f64, ParseColorError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseColorError::InvalidFunction(original.to_string()))
}

fn in_range(component: &'static str, value: f64, max: f64) -> Result<f64, ParseColorError> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ParseColorError::OutOfRange { component, value: value.to_string() })
    }
}

/// An RGB channel: `0`–`255`, or `0%`–`100%` scaled onto that range.
fn rgb_channel(original: &str, component: &'static str, text: &str) -> Result<f64, ParseColorError> {
    match text.strip_suffix('%') {
        Some(pct) => Ok(in_range(component, number(original, pct)?, 100.0)? * 2.55),
        None => in_range(component, number(original, text)?, 255.0),
    }
}

/// Check an alpha value (`0`–`1` or `0%`–`100%`). The value is discarded.
fn check_alpha(original: &str, alpha: Option<&str>) -> Result<(), ParseColorError> {
    let Some(text) = alpha else {
        return Ok(());
    };
    match text.strip_suffix('%') {
        Some(pct) => in_range("alpha", number(original, pct)?, 100.0)?,
        None => in_range("alpha", number(original, text)?, 1.0)?,
    };
    Ok(())
}

fn parse_rgb(original: &str, args: &str) -> Result<Color, ParseColorError> {
    let ([r, g, b], alpha) = channel_args(original, args)?;
    let r = rgb_channel(original, "red", r)?;
    let g = rgb_channel(original, "green", g)?;
    let b = rgb_channel(original, "blue", b)?;
    check_alpha(original, alpha)?;
    Ok(Color::rgb(r, g, b))
}

fn parse_hsl(original: &str, args: &str) -> Result<Color, ParseColorError> {
    let ([h, s, l], alpha) = channel_args(original, args)?;
    let h = number(original, h.strip_suffix("deg").unwrap_or(h))?;
    let s = in_range("saturation", number(original, s.trim_end_matches('%'))?, 100.0)?;
    let l = in_range("lightness", number(original, l.trim_end_matches('%'))?, 100.0)?;
    check_alpha(original, alpha)?;
    Ok(Color::hsl(normalize_hue(h), s, l))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
