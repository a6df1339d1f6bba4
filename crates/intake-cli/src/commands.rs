//! Command implementations. Each returns the text to print.

use std::io::Read;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use tracing::{debug, info};

use intake_geocode::{Geocoder, GeocoderSettings, HttpGeocoder, location_from_response};
use intake_model::{
    ConstructionScheme, InsuredAddressBlock, Location, NormalizationOptions, TotalInsuredValue,
};
use intake_normalize::{
    FieldNormalizer, adjust_protection_class, build_submission_id, classify_construction_type,
    construction_labels, get_building_number, get_control_number, get_value_from_amount_column,
    remove_county_suffix, round_stories_up, split_address_block, sum_total_insured_value,
};

use crate::logging::redact_value;

/// Single-value field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    YearBuilt,
    County,
    ProtectionClass,
    Amount,
    Stories,
    ControlNumber,
    SubmissionId,
}

/// Normalizes one raw field value. Unrecognized input yields `""` (`0` for
/// stories).
pub fn run_field(field: Field, raw: &str, options: &NormalizationOptions) -> String {
    let normalizer = FieldNormalizer::new(options.clone());
    match field {
        Field::YearBuilt => normalizer.year_built(raw),
        Field::County => remove_county_suffix(raw),
        Field::ProtectionClass => adjust_protection_class(raw),
        Field::Amount => get_value_from_amount_column(raw),
        Field::Stories => round_stories_up(raw).to_string(),
        Field::ControlNumber => get_control_number(raw),
        Field::SubmissionId => build_submission_id(raw),
    }
}

/// Classifies a construction description; prints the code or nothing.
pub fn run_construction(raw: &str, scheme: ConstructionScheme) -> String {
    let code = classify_construction_type(raw, scheme);
    debug!(scheme = %scheme, classified = code.is_some(), "Classified construction type");
    code.map(|code| code.to_string()).unwrap_or_default()
}

pub fn run_building_number(street: &str, full_range: bool) -> String {
    get_building_number(street, !full_range)
}

pub fn run_tiv(tiv: &TotalInsuredValue) -> String {
    sum_total_insured_value(tiv)
}

/// Splits an insured address block read from `reader`.
pub fn run_split_block<R: Read>(mut reader: R) -> Result<InsuredAddressBlock> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("read address block")?;
    let block = split_address_block(&raw);
    debug!(
        insured_name = redact_value(&block.insured_name),
        address_lines = block.address_lines.len(),
        "Split address block"
    );
    Ok(block)
}

/// Resolves an address through the configured provider.
///
/// With `fail_on_error` the provider failure is returned instead of an
/// empty location.
pub fn run_geocode(
    settings: GeocoderSettings,
    address: &str,
    fail_on_error: bool,
) -> Result<Location> {
    let geocoder = HttpGeocoder::new(settings).context("create geocoder")?;
    geocode_with(&geocoder, address, fail_on_error)
}

/// [`run_geocode`] over any provider.
pub fn geocode_with<G: Geocoder + ?Sized>(
    geocoder: &G,
    address: &str,
    fail_on_error: bool,
) -> Result<Location> {
    info!(address = redact_value(address), "Resolving address");
    if !fail_on_error {
        return Ok(intake_geocode::resolve_address(geocoder, address));
    }
    let response = geocoder
        .geocode(address.trim())
        .context("geocoding request failed")?;
    location_from_response(&response).context("geocoding response rejected")
}

/// Construction labels with their codes under one or both schemes.
pub fn labels_table(scheme: Option<ConstructionScheme>) -> Table {
    let schemes: Vec<ConstructionScheme> = match scheme {
        Some(scheme) => vec![scheme],
        None => ConstructionScheme::ALL.to_vec(),
    };

    let mut table = Table::new();
    let mut header = vec![header_cell("Label")];
    header.extend(schemes.iter().map(|scheme| header_cell(scheme.as_str())));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=schemes.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let primary = schemes.first().copied().unwrap_or_default();
    for (label, _) in construction_labels(primary) {
        let mut row = vec![Cell::new(label)];
        row.extend(schemes.iter().map(|scheme| {
            match classify_construction_type(label, *scheme) {
                Some(code) => Cell::new(code),
                None => Cell::new("-").fg(Color::DarkGrey),
            }
        }));
        table.add_row(row);
    }
    table
}

/// Pretty JSON for structured results.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize result")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
