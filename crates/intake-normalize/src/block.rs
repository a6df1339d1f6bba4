//! Splitting of ACORD insured name/address blocks.
//!
//! A block is a newline-delimited run of lines: the insured name first
//! (optionally continued by a DBA or care-of line), then the mailing address,
//! whose last line is always city/state/zip.

use std::sync::LazyLock;

use intake_model::InsuredAddressBlock;
use regex::Regex;

/// Continuation lines that belong to the insured name.
static NAME_CONTINUATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:dba|d/b/a|d\.b\.a\.?|c/o|care\s+of|attn)(?:[\s:.,]|$)")
        .expect("Invalid name continuation regex")
});

/// Suite, unit and similar secondary address lines.
static SUITE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:suite|ste|unit|apt|room|rm)(?:[\s.#:,]|\d|$)|#)")
        .expect("Invalid suite line regex")
});

/// Returns true if the line continues the insured name (`DBA ...`, `c/o ...`).
pub fn is_name_continuation(line: &str) -> bool {
    NAME_CONTINUATION_REGEX.is_match(line.trim())
}

/// Returns true if the line is a secondary address line (`Suite 200`, `#4`).
pub fn is_suite_line(line: &str) -> bool {
    SUITE_LINE_REGEX.is_match(line.trim())
}

/// Splits a raw insured block into the insured name and its address lines.
///
/// The address is the last two lines, or the last three when the line before
/// city/state/zip is a suite line. Blank lines are skipped. Blocks that are too
/// short for a full address yield whatever lines follow the name.
///
/// The suite check only applies with at least three lines after the name, so
/// `"Name\nSte 5\nCity TX"` keeps `"Ste 5"` in the street position.
pub fn split_address_block(raw: &str) -> InsuredAddressBlock {
    let lines: Vec<&str> = raw
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((first, rest)) = lines.split_first() else {
        return InsuredAddressBlock::default();
    };

    let mut insured_name = (*first).to_string();
    let mut tail = rest;
    if let Some((second, after)) = rest.split_first() {
        if is_name_continuation(second) {
            insured_name.push(' ');
            insured_name.push_str(second);
            tail = after;
        }
    }

    let take = if tail.len() >= 3 && is_suite_line(tail[tail.len() - 2]) {
        3
    } else {
        2
    };
    let start = tail.len().saturating_sub(take);
    let address_lines = tail[start..].iter().map(|line| (*line).to_string()).collect();

    InsuredAddressBlock::new(insured_name, address_lines)
}
