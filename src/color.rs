//! Hex color parsing and conversion helpers.
//!
//! Malformed input never produces an error: conversions degrade to a fixed
//! fallback so rendering can always proceed.

/// Parse `#rrggbb` (the leading `#` is optional) into RGB channels.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Check that a string is a well-formed `#rrggbb` color.
pub fn is_valid_hex(hex: &str) -> bool {
    hex.len() == 7 && hex.starts_with('#') && parse_hex(hex).is_some()
}

/// Format RGB channels as a lower-case `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Convert a hex color to an `rgba(...)` CSS value.
///
/// Returns `rgba(0, 0, 0, alpha)` for malformed input.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or((0, 0, 0));
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Perceived luminance in `0.0..=1.0`.
pub fn luminance(hex: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(hex)?;
    Some((0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0)
}

/// Pick black or white text for a background color.
pub fn contrast_text(background: &str) -> &'static str {
    match luminance(background) {
        Some(l) if l <= 0.5 => "#ffffff",
        _ => "#000000",
    }
}

/// Mix a color toward white by `amount` (0.0 keeps it, 1.0 is white).
pub fn lighten(hex: &str, amount: f64) -> String {
    mix(hex, 255.0, amount)
}

/// Mix a color toward black by `amount` (0.0 keeps it, 1.0 is black).
pub fn darken(hex: &str, amount: f64) -> String {
    mix(hex, 0.0, amount)
}

fn mix(hex: &str, target: f64, amount: f64) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let amount = amount.clamp(0.0, 1.0);
    let blend = |c: u8| (c as f64 + (target - c as f64) * amount).round() as u8;
    rgb_to_hex(blend(r), blend(g), blend(b))
}
