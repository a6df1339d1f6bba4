//! Single-field normalizers for verification-form values.
//!
//! Every function here is pure and fails closed: input that cannot be
//! normalized yields an empty string (or `0` for story counts) rather than
//! a guessed value.

use intake_model::{TotalInsuredValue, YearPivot};

use crate::numeric::{format_numeric, parse_f64, parse_i64, strip_currency_formatting};

/// Expands a year built to four digits using the default century pivot.
///
/// `"00"` becomes `"2000"`, `"45"` becomes `"1945"`. Single characters and
/// non-numeric input return an empty string.
pub fn adjust_year_built(raw: &str) -> String {
    adjust_year_built_with(raw, YearPivot::default())
}

/// Expands a year built to four digits using an explicit century pivot.
pub fn adjust_year_built_with(raw: &str, pivot: YearPivot) -> String {
    let trimmed = raw.trim();
    if trimmed.len() <= 1 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    let Ok(value) = trimmed.parse::<u32>() else {
        return String::new();
    };
    let year = if value < 100 { pivot.expand(value) } else { value };
    if (1000..=9999).contains(&year) {
        year.to_string()
    } else {
        String::new()
    }
}

/// Removes a trailing "County" word from a county name.
///
/// Returns an empty string when the value carries no county suffix, so the
/// caller can tell "no suffix" apart from a stripped name.
pub fn remove_county_suffix(raw: &str) -> String {
    if !raw.to_lowercase().contains("county") {
        return String::new();
    }
    // Multi-word names ("New York County") keep everything before the last word.
    match raw.trim_end().rsplit_once(char::is_whitespace) {
        Some((name, _suffix)) => name.trim().to_string(),
        None => String::new(),
    }
}

/// Drops the leading zero from a two-character protection class.
///
/// `"10"` is kept as-is; any other length is unsupported and yields an empty
/// string.
pub fn adjust_protection_class(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "10" {
        return "10".to_string();
    }
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(_), Some(second), None) => second.to_string(),
        _ => String::new(),
    }
}

/// Cleans a monetary column down to its integer value.
///
/// Shorthand such as `"10k"` is not expanded and yields an empty string.
pub fn get_value_from_amount_column(raw: &str) -> String {
    parse_i64(&strip_currency_formatting(raw))
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Rounds a story count up to the next whole story; unparseable input is `0`.
pub fn round_stories_up(raw: &str) -> i64 {
    match parse_f64(raw) {
        // `as` saturates for magnitudes beyond i64.
        Some(stories) => stories.ceil() as i64,
        None => 0,
    }
}

/// Sums monetary parts after stripping currency formatting.
///
/// All-or-nothing: if any part fails to parse the result is an empty string.
pub fn sum_insured_values<S: AsRef<str>>(parts: &[S]) -> String {
    if parts.is_empty() {
        return String::new();
    }
    let mut total = 0.0_f64;
    for part in parts {
        match parse_f64(&strip_currency_formatting(part.as_ref())) {
            Some(value) => total += value,
            None => return String::new(),
        }
    }
    if total.is_finite() {
        format_numeric(total)
    } else {
        String::new()
    }
}

/// Sums the four coverage columns of a Total Insured Value.
pub fn sum_total_insured_value(tiv: &TotalInsuredValue) -> String {
    sum_insured_values(&tiv.parts())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_built_expands_two_digit_years() {
        assert_eq!(adjust_year_built("00"), "2000");
        assert_eq!(adjust_year_built("07"), "2007");
        assert_eq!(adjust_year_built("11"), "2011");
        assert_eq!(adjust_year_built("15"), "2015");
        assert_eq!(adjust_year_built("29"), "2029");
        assert_eq!(adjust_year_built("30"), "1930");
        assert_eq!(adjust_year_built("45"), "1945");
        assert_eq!(adjust_year_built("99"), "1999");
    }

    #[test]
    fn year_built_fails_closed() {
        assert_eq!(adjust_year_built("5"), "");
        assert_eq!(adjust_year_built(""), "");
        assert_eq!(adjust_year_built("ab"), "");
        assert_eq!(adjust_year_built("-5"), "");
        assert_eq!(adjust_year_built("+5"), "");
        assert_eq!(adjust_year_built("123"), "");
        assert_eq!(adjust_year_built("12345"), "");
    }

    #[test]
    fn year_built_keeps_four_digit_years() {
        assert_eq!(adjust_year_built("1987"), "1987");
        assert_eq!(adjust_year_built(" 2004 "), "2004");
        assert_eq!(adjust_year_built("045"), "1945");
    }

    #[test]
    fn year_built_honours_custom_pivot() {
        let pivot = YearPivot::new(50).unwrap();
        assert_eq!(adjust_year_built_with("45", pivot), "2045");
        assert_eq!(adjust_year_built_with("51", pivot), "1951");
    }

    #[test]
    fn county_suffix_is_removed() {
        assert_eq!(remove_county_suffix("Queens County"), "Queens");
        assert_eq!(remove_county_suffix("Bronx County"), "Bronx");
        assert_eq!(remove_county_suffix("Kings County"), "Kings");
        assert_eq!(remove_county_suffix("New York County"), "New York");
        assert_eq!(remove_county_suffix("BEXAR COUNTY "), "BEXAR");
    }

    #[test]
    fn county_without_suffix_is_empty() {
        assert_eq!(remove_county_suffix("Queens"), "");
        assert_eq!(remove_county_suffix(""), "");
        assert_eq!(remove_county_suffix("County"), "");
    }

    #[test]
    fn protection_class_drops_leading_zero() {
        assert_eq!(adjust_protection_class("05"), "5");
        assert_eq!(adjust_protection_class("03"), "3");
        assert_eq!(adjust_protection_class("10"), "10");
    }

    #[test]
    fn protection_class_rejects_other_lengths() {
        assert_eq!(adjust_protection_class("3"), "");
        assert_eq!(adjust_protection_class(""), "");
        assert_eq!(adjust_protection_class("100"), "");
        assert_eq!(adjust_protection_class("0é"), "é");
    }

    #[test]
    fn amount_column_strips_formatting() {
        assert_eq!(get_value_from_amount_column("$1,250,000"), "1250000");
        assert_eq!(get_value_from_amount_column(" $ 75 000 "), "75000");
        assert_eq!(get_value_from_amount_column("007"), "7");
    }

    #[test]
    fn amount_column_rejects_shorthand_and_decimals() {
        assert_eq!(get_value_from_amount_column("10k"), "");
        assert_eq!(get_value_from_amount_column("$12.50"), "");
        assert_eq!(get_value_from_amount_column(""), "");
        assert_eq!(get_value_from_amount_column("$"), "");
    }

    #[test]
    fn stories_round_up() {
        assert_eq!(round_stories_up("2.5"), 3);
        assert_eq!(round_stories_up("3"), 3);
        assert_eq!(round_stories_up(" 1.01 "), 2);
        assert_eq!(round_stories_up("two"), 0);
        assert_eq!(round_stories_up(""), 0);
        assert_eq!(round_stories_up("NaN"), 0);
    }

    #[test]
    fn insured_values_sum_after_cleanup() {
        assert_eq!(
            sum_insured_values(&["$112,3555", "$234 65", "33,334", "0"]),
            "1180354"
        );
        assert_eq!(sum_insured_values(&["1.5", "2.25"]), "3.75");
    }

    #[test]
    fn insured_values_with_cents_sum_cleanly() {
        assert_eq!(sum_insured_values(&["0.1", "0.2"]), "0.3");
        assert_eq!(
            sum_insured_values(&["$1,000.10", "$2,000.20", "$0.07", "0"]),
            "3000.37"
        );
        assert_eq!(
            sum_insured_values(&["$250,000.33", "$74,999.34", "$12,500.11", "$0.22"]),
            "337500"
        );
    }

    #[test]
    fn insured_values_are_all_or_nothing() {
        assert_eq!(sum_insured_values(&["$100", "n/a", "50"]), "");
        assert_eq!(sum_insured_values(&["$100", ""]), "");
        assert_eq!(sum_insured_values::<&str>(&[]), "");
    }

    #[test]
    fn total_insured_value_sums_all_columns() {
        let tiv = TotalInsuredValue::new("$112,3555", "$234 65", "33,334", "0");
        assert_eq!(sum_total_insured_value(&tiv), "1180354");
    }
}
