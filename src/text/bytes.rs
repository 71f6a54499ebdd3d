//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with the largest unit it reaches (1024-based).
///
/// The value is rounded to `precision` decimals and trailing zeros are
/// dropped, so `1024` prints as `1 KB`. Negative or non-finite input
/// returns `None`.
pub fn format_bytes(bytes: f64, precision: usize) -> Option<String> {
    if !bytes.is_finite() || bytes < 0.0 {
        return None;
    }

    let mut value = bytes;
    let mut unit = 0;
    let mut number = format!("{:.*}", precision, value);
    // Unit follows the rounded figure
    while unit < UNITS.len() - 1 && number.parse::<f64>().is_ok_and(|n| n >= 1024.0) {
        value /= 1024.0;
        unit += 1;
        number = format!("{:.*}", precision, value);
    }

    if number.contains('.') {
        number = number.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    Some(format!("{} {}", number, UNITS[unit]))
}

/// Parse `input` as a number of bytes and format it.
///
/// Returns `None` when the input is not numeric.
pub fn format_bytes_str(input: &str, precision: usize) -> Option<String> {
    let bytes: f64 = input.trim().parse().ok()?;
    format_bytes(bytes, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_bytes(0.0, 2).as_deref(), Some("0 B"));
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_bytes(1536.0, 1).as_deref(), Some("1.5 KB"));
        assert_eq!(format_bytes(1024.0, 2).as_deref(), Some("1 KB"));
        assert_eq!(format_bytes(1023.0, 2).as_deref(), Some("1023 B"));
    }

    #[test]
    fn test_rounding_carries_into_next_unit() {
        assert_eq!(format_bytes(1023.99, 0).as_deref(), Some("1 KB"));
        assert_eq!(format_bytes(1023.99, 2).as_deref(), Some("1023.99 B"));
        assert_eq!(
            format_bytes(1024.0 * 1024.0 - 1.0, 1).as_deref(),
            Some("1 MB")
        );
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(
            format_bytes(5.0 * 1024.0 * 1024.0, 0).as_deref(),
            Some("5 MB")
        );
        assert_eq!(
            format_bytes(1.25 * 1024f64.powi(3), 2).as_deref(),
            Some("1.25 GB")
        );
        // TB is the ceiling
        assert_eq!(format_bytes(2048.0 * 1024f64.powi(4), 0).as_deref(), Some("2048 TB"));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_bytes(-1.0, 2), None);
        assert_eq!(format_bytes(f64::NAN, 2), None);
        assert_eq!(format_bytes_str("lots", 2), None);
        assert_eq!(format_bytes_str(" 1536 ", 1).as_deref(), Some("1.5 KB"));
    }
}
