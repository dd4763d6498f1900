//! Color utilities for log lines.

use axum::http::StatusCode;
use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// Palette request IDs are spread across
const ID_COLORS: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Deterministically maps a request ID to a palette color
pub fn get_color_for_id(id: &str) -> AnsiColors {
    let hash = id
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
    ID_COLORS[hash as usize % ID_COLORS.len()]
}

/// Formats a request ID as `[id]` in its palette color
pub fn colored_id(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(get_color_for_id(id)));
    format!("[{}]", id).style(style).to_string()
}

/// Color for a response status, by class
pub fn get_color_for_status(status: StatusCode) -> AnsiColors {
    match status.as_u16() {
        300..=399 => AnsiColors::Cyan,
        400..=499 => AnsiColors::Yellow,
        500..=599 => AnsiColors::Red,
        _ => AnsiColors::Green,
    }
}

/// Formats a status code like `301 Moved Permanently`, colored by class
pub fn colored_status(status: StatusCode) -> String {
    status.color(get_color_for_status(status)).to_string()
}
