//! Verification-form field normalization, end to end through the public API.

use intake_model::{ConstructionCode, ConstructionScheme, TotalInsuredValue};
use intake_normalize::{
    adjust_protection_class, adjust_year_built, build_submission_id, classify_construction_type,
    get_building_number, get_control_number, get_value_from_amount_column, remove_county_suffix,
    round_stories_up, split_address_block, sum_insured_values, sum_total_insured_value,
};

#[test]
fn year_built_new_millennium_and_last_century() {
    let cases = [
        ("00", "2000"),
        ("07", "2007"),
        ("11", "2011"),
        ("15", "2015"),
        ("45", "1945"),
        ("99", "1999"),
        ("5", ""),
    ];
    for (input, expected) in cases {
        assert_eq!(adjust_year_built(input), expected, "input {input:?}");
    }
}

#[test]
fn county_suffix_removal() {
    assert_eq!(remove_county_suffix("Queens County"), "Queens");
    assert_eq!(remove_county_suffix("Bronx County"), "Bronx");
    assert_eq!(remove_county_suffix("Kings County"), "Kings");
    assert_eq!(remove_county_suffix("New York County"), "New York");
    assert_eq!(remove_county_suffix("Queens"), "");
}

#[test]
fn protection_class_adjustment() {
    assert_eq!(adjust_protection_class("05"), "5");
    assert_eq!(adjust_protection_class("03"), "3");
    assert_eq!(adjust_protection_class("10"), "10");
    assert_eq!(adjust_protection_class("3"), "");
}

#[test]
fn control_number_extraction() {
    assert_eq!(get_control_number("FW: [111234] Some HOA"), "");
    assert_eq!(get_control_number("{1231246} A Condominium Somewhere"), "1231246");
    assert_eq!(get_control_number("(2436531) text"), "2436531");
    assert_eq!(get_control_number(""), "");
}

#[test]
fn construction_type_under_both_schemes() {
    let classify = |raw: &str, scheme| classify_construction_type(raw, scheme).map(ConstructionCode::get);

    assert_eq!(classify("joist mason", ConstructionScheme::Internal), Some(4));
    assert_eq!(classify("sheet metal", ConstructionScheme::Internal), Some(5));
    assert_eq!(classify("mnc", ConstructionScheme::Internal), Some(2));

    assert_eq!(classify("joist mason", ConstructionScheme::IsoStandard), Some(2));
    assert_eq!(classify("sheet metal", ConstructionScheme::IsoStandard), Some(1));
    assert_eq!(classify("mnc", ConstructionScheme::IsoStandard), Some(4));

    assert_eq!(classify("log cabin", ConstructionScheme::Internal), None);
}

#[test]
fn building_number_first_only() {
    assert_eq!(get_building_number("137-141-143  ST JAMES ST", true), "137");
    assert_eq!(get_building_number("27 WATERFORD POINTE CIR,", true), "27");
    assert_eq!(get_building_number("7419-7461 W. Colonial Drive", true), "7419");
}

#[test]
fn building_number_full_range() {
    assert_eq!(get_building_number("137-141-143  ST JAMES ST", false), "137-141-143");
    assert_eq!(get_building_number("27 WATERFORD POINTE CIR,", false), "27");
    assert_eq!(get_building_number("7419-7461 W. Colonial Drive", false), "7419-7461");
}

#[test]
fn total_insured_value_addition() {
    assert_eq!(
        sum_insured_values(&["$112,3555", "$234 65", "33,334", "0"]),
        "1180354"
    );
    assert_eq!(sum_insured_values(&["$112,3555", "TBD", "33,334", "0"]), "");

    let tiv = TotalInsuredValue::new("$1,000,000", "$250,000", "$100,000", "0");
    assert_eq!(sum_total_insured_value(&tiv), "1350000");
}

#[test]
fn amounts_and_stories() {
    assert_eq!(get_value_from_amount_column("$2,500,000"), "2500000");
    assert_eq!(get_value_from_amount_column("10k"), "");
    assert_eq!(round_stories_up("2.5"), 3);
    assert_eq!(round_stories_up("n/a"), 0);
}

#[test]
fn submission_id_from_batch_name() {
    assert_eq!(build_submission_id("ACORD125_ID48213_p1"), "ID48213");
    assert_eq!(build_submission_id("ACORD125_p1"), "");
}

#[test]
fn insured_block_feeds_building_number() {
    let block = split_address_block(
        "Colonial Plaza Partners\nDBA Colonial Plaza\n7419-7461 W. Colonial Drive\nOrlando FL 32818",
    );
    assert_eq!(block.insured_name, "Colonial Plaza Partners DBA Colonial Plaza");
    let street = block.street().expect("street line");
    assert_eq!(get_building_number(street, false), "7419-7461");
    assert_eq!(block.city_state_zip(), Some("Orlando FL 32818"));
}
