//! Hex color conversion.

/// Convert a 3- or 6-digit hex color to a CSS `rgb()`/`rgba()` value.
///
/// The leading `#` is optional. With an opacity the result is `rgba()` and
/// the opacity is clamped to `0..=1`. Any other length, or a non-hex digit,
/// returns `None`.
pub fn hex_to_rgb(hex: &str, opacity: Option<f64>) -> Option<String> {
    let hex = hex.trim();
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let full = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&full[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    match opacity {
        Some(alpha) => {
            let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
            Some(format!("rgba({},{},{},{})", r, g, b, alpha))
        }
        None => Some(format!("rgb({},{},{})", r, g, b)),
    }
}
