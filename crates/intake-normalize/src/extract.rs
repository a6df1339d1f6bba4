//! Identifier extraction from free-text subject lines and batch names.

use std::sync::LazyLock;

use regex::Regex;

/// Seven or more ASCII digits enclosed by any opening and any closing bracket.
static CONTROL_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[(\[{]([0-9]{7,})[)\]}]").expect("Invalid control number regex")
});

/// Submission identifiers: the literal `ID` followed by any ASCII digits.
static SUBMISSION_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ID[0-9]*").expect("Invalid submission ID regex"));

/// Extracts the bracketed account control number from an email subject line.
///
/// Offices bracket the number with `[]`, `()` or `{}` interchangeably, and the
/// bracket kinds need not match. Runs shorter than seven digits are ignored.
pub fn get_control_number(subject_line: &str) -> String {
    CONTROL_NUMBER_REGEX
        .captures(subject_line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Extracts the submission ID (`ID` plus digits) from a scan batch name.
pub fn build_submission_id(batch_name: &str) -> String {
    SUBMISSION_ID_REGEX
        .find(batch_name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
