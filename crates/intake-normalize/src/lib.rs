//! Field normalization for OCR-entered insurance intake forms.
//!
//! This crate turns noisy verification-form values into canonical strings:
//!
//! - **scalar**: year built, county, protection class, amounts, stories, TIV
//! - **extract**: bracketed control numbers and submission IDs
//! - **construction**: construction-type classification under two schemes
//! - **building**: building numbers and building-number ranges
//! - **block**: insured name/address block splitting
//! - **numeric**: shared numeric parsing and formatting
//! - **normalizer**: option-bound access for configured pivots and schemes
//!
//! All functions are pure and stateless; malformed input normalizes to an
//! empty value instead of an error.

pub mod block;
pub mod building;
pub mod construction;
pub mod extract;
pub mod normalizer;
pub mod numeric;
pub mod scalar;

// Re-export commonly used items
pub use block::{is_name_continuation, is_suite_line, split_address_block};
pub use building::get_building_number;
pub use construction::{
    INTERNAL_TABLE, ISO_STANDARD_TABLE, classify_construction_type, construction_labels,
};
pub use extract::{build_submission_id, get_control_number};
pub use normalizer::FieldNormalizer;
pub use scalar::{
    adjust_protection_class, adjust_year_built, adjust_year_built_with, get_value_from_amount_column,
    remove_county_suffix, round_stories_up, sum_insured_values, sum_total_insured_value,
};
