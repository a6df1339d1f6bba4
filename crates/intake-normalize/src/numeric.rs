//! Numeric normalization utilities.

/// Removes currency formatting (`$`, `,` and any whitespace) from a value.
pub fn strip_currency_formatting(value: &str) -> String {
    value
        .chars()
        .filter(|ch| *ch != '$' && *ch != ',' && !ch.is_whitespace())
        .collect()
}

/// Parses a string as f64, returning None for invalid, empty or non-finite values.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Returns true if the whole token is an unsigned decimal integer (no sign, no padding).
pub fn is_unsigned_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Significant digits kept when formatting sums; the most an f64 round-trips.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Formats a float in plain decimal form, without a trailing `.0` for whole values.
///
/// The value is first rounded to [`SIGNIFICANT_DIGITS`], so binary artifacts
/// such as `0.1 + 0.2 = 0.30000000000000004` print as `0.3`.
pub fn format_numeric(v: f64) -> String {
    let rounded = round_significant(v);
    // f64 Display never uses exponent notation and prints whole values without a fraction.
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

/// Rounds to [`SIGNIFICANT_DIGITS`] through the decimal exponent form.
fn round_significant(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, v)
        .parse::<f64>()
        .unwrap_or(v)
}
