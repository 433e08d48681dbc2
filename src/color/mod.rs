//! CSS color handling for fill colors.
//!
//! Color stops arrive from the dashboard as CSS strings (`"#01FDF6"`,
//! `"darkturquoise"`). They are parsed into [`Color32`] for interpolation and
//! written back out as lowercase `#rrggbb` hex.

mod named;
mod scale;

pub use scale::ColorScale;

use crate::error::{Result, StyleError};
use eframe::egui::Color32;

/// Parses a CSS color string: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or a
/// CSS named color.
///
/// Fills are written out as opaque `#rrggbb`, so an alpha channel is
/// accepted and dropped. Matching of named colors is case-insensitive.
pub fn parse_css_color(input: &str) -> Result<Color32> {
    let trimmed = input.trim();
    let parsed = match trimmed.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => named::lookup(&trimmed.to_ascii_lowercase()),
    };
    parsed.ok_or_else(|| StyleError::UnknownColor(input.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| -> Option<u8> { u8::from_str_radix(&hex[i..i + 1], 16).ok() };
    let byte = |i: usize| -> Option<u8> { u8::from_str_radix(&hex[i..i + 2], 16).ok() };

    match hex.len() {
        // #abc expands each digit: a -> aa
        3 | 4 => Some(Color32::from_rgb(
            nibble(0)? * 17,
            nibble(1)? * 17,
            nibble(2)? * 17,
        )),
        6 | 8 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// Formats a color as lowercase `#rrggbb` hex.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
