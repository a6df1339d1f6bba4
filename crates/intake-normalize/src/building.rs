//! Building-number extraction from street lines.

use crate::numeric::is_unsigned_integer;

/// Extracts the building number (or building-number range) from a street line.
///
/// The building number is always the first space-delimited token. With
/// `first_only`, only the first number of a range is returned
/// (`"7419-7461 W. Colonial Drive"` gives `"7419"`); otherwise the full range
/// is returned when it starts with a number. Lines without a space yield an
/// empty string.
pub fn get_building_number(street: &str, first_only: bool) -> String {
    let street = street.trim_start();
    let Some((token, _rest)) = street.split_once(' ') else {
        return String::new();
    };
    let hyphen_prefix = token.split_once('-').map(|(prefix, _)| prefix);

    if first_only {
        if is_unsigned_integer(token) {
            token.to_string()
        } else if let Some(prefix) = hyphen_prefix {
            prefix.to_string()
        } else {
            String::new()
        }
    } else {
        match hyphen_prefix {
            Some(prefix) if is_unsigned_integer(prefix) => token.to_string(),
            Some(_) => String::new(),
            None => token.to_string(),
        }
    }
}
