//! Construction-type classification.
//!
//! Free-text construction descriptions are matched exactly (case-insensitive,
//! trimmed) against one of two fixed label tables. The tables share their keys
//! but assign different codes; each is kept as its own literal.

use std::collections::HashMap;
use std::sync::LazyLock;

use intake_model::{ConstructionCode, ConstructionScheme};

/// Company-internal (IMS) construction codes.
pub const INTERNAL_TABLE: &[(&str, u8)] = &[
    // Modified Fire Resistive (ISO 5)
    ("mfr", 6),
    ("modified fire resistive", 6),
    // Frame (ISO 1)
    ("brick frame", 5),
    ("frame", 5),
    ("brick veneer", 5),
    ("frame block", 5),
    ("heavy timber", 5),
    ("masonry frame", 5),
    ("masonry wood", 5),
    ("metal building", 5),
    ("sheet metal", 5),
    ("wood", 5),
    ("metal/aluminum", 5),
    // Joisted Masonry (ISO 2)
    ("brick", 4),
    ("brick steel", 4),
    ("cd", 4),
    ("cement", 4),
    ("masonry", 4),
    ("masonry timbre", 4),
    ("stone", 4),
    ("stucco", 4),
    ("joist masonry", 4),
    ("tilt-up", 4),
    ("jm", 4),
    ("joisted masonry", 4),
    ("joisted mason", 4),
    ("j/masonry", 4),
    ("joist mason", 4),
    // Non-Combustible (ISO 3)
    ("cb", 3),
    ("concrete block", 3),
    ("icm", 3),
    ("iron clad metal", 3),
    ("steel concrete", 3),
    ("steel cmu", 3),
    ("non-comb.", 3),
    ("non-comb", 3),
    ("pole", 3),
    ("non-combustible", 3),
    ("non-combustib", 3),
    // Masonry Non-Combustible (ISO 4)
    ("cement block", 2),
    ("cbs", 2),
    ("mnc", 2),
    ("ctu", 2),
    ("concrete tilt-up", 2),
    ("pre-cast com", 2),
    ("reinforced concrete", 2),
    ("masonry nc", 2),
    ("masonry non-c", 2),
    ("masonry non-combustible", 2),
    // Fire Resistive (ISO 6)
    ("aaa", 1),
    ("fire resistive", 1),
    ("cinder block", 1),
    ("steel", 1),
    ("steel frame", 1),
    ("superior", 1),
    ("w/r", 1),
    ("fire resist", 1),
    ("fire resistiv", 1),
    ("fr", 1),
];

/// ISO standard construction codes.
pub const ISO_STANDARD_TABLE: &[(&str, u8)] = &[
    // Modified Fire Resistive (internal 6)
    ("mfr", 5),
    ("modified fire resistive", 5),
    // Frame (internal 5)
    ("brick frame", 1),
    ("frame", 1),
    ("brick veneer", 1),
    ("frame block", 1),
    ("heavy timber", 1),
    ("masonry frame", 1),
    ("masonry wood", 1),
    ("metal building", 1),
    ("sheet metal", 1),
    ("wood", 1),
    ("metal/aluminum", 1),
    // Joisted Masonry (internal 4)
    ("brick", 2),
    ("brick steel", 2),
    ("cd", 2),
    ("cement", 2),
    ("masonry", 2),
    ("masonry timbre", 2),
    ("stone", 2),
    ("stucco", 2),
    ("joist masonry", 2),
    ("tilt-up", 2),
    ("jm", 2),
    ("joisted masonry", 2),
    ("joisted mason", 2),
    ("j/masonry", 2),
    ("joist mason", 2),
    // Non-Combustible (internal 3)
    ("cb", 3),
    ("concrete block", 3),
    ("icm", 3),
    ("iron clad metal", 3),
    ("steel concrete", 3),
    ("steel cmu", 3),
    ("non-comb.", 3),
    ("non-comb", 3),
    ("pole", 3),
    ("non-combustible", 3),
    ("non-combustib", 3),
    // Masonry Non-Combustible (internal 2)
    ("cement block", 4),
    ("cbs", 4),
    ("mnc", 4),
    ("ctu", 4),
    ("concrete tilt-up", 4),
    ("pre-cast com", 4),
    ("reinforced concrete", 4),
    ("masonry nc", 4),
    ("masonry non-c", 4),
    ("masonry non-combustible", 4),
    // Fire Resistive (internal 1)
    ("aaa", 6),
    ("fire resistive", 6),
    ("cinder block", 6),
    ("steel", 6),
    ("steel frame", 6),
    ("superior", 6),
    ("w/r", 6),
    ("fire resist", 6),
    ("fire resistiv", 6),
    ("fr", 6),
];

type LabelIndex = HashMap<&'static str, ConstructionCode>;

fn build_index(table: &'static [(&'static str, u8)]) -> LabelIndex {
    let mut index = HashMap::with_capacity(table.len());
    for &(label, code) in table {
        // Codes in the literal tables are all within 1..=6.
        if let Ok(code) = ConstructionCode::new(code) {
            index.entry(label).or_insert(code);
        }
    }
    index
}

static INTERNAL_INDEX: LazyLock<LabelIndex> = LazyLock::new(|| build_index(INTERNAL_TABLE));
static ISO_STANDARD_INDEX: LazyLock<LabelIndex> =
    LazyLock::new(|| build_index(ISO_STANDARD_TABLE));

/// Returns the label table for a scheme, in declaration order.
pub fn construction_labels(scheme: ConstructionScheme) -> &'static [(&'static str, u8)] {
    match scheme {
        ConstructionScheme::Internal => INTERNAL_TABLE,
        ConstructionScheme::IsoStandard => ISO_STANDARD_TABLE,
    }
}

/// Classifies a free-text construction description under the given scheme.
///
/// Only exact labels match; there is no fuzzy or substring matching.
/// Returns `None` for unclassified descriptions.
pub fn classify_construction_type(
    raw: &str,
    scheme: ConstructionScheme,
) -> Option<ConstructionCode> {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    let index = match scheme {
        ConstructionScheme::Internal => &*INTERNAL_INDEX,
        ConstructionScheme::IsoStandard => &*ISO_STANDARD_INDEX,
    };
    let code = index.get(key.as_str()).copied();
    if code.is_none() {
        tracing::trace!(scheme = %scheme, len = key.len(), "construction type unclassified");
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str, scheme: ConstructionScheme) -> Option<u8> {
        classify_construction_type(raw, scheme).map(ConstructionCode::get)
    }

    #[test]
    fn internal_scheme_codes() {
        assert_eq!(code("joist mason", ConstructionScheme::Internal), Some(4));
        assert_eq!(code("sheet metal", ConstructionScheme::Internal), Some(5));
        assert_eq!(code("mnc", ConstructionScheme::Internal), Some(2));
        assert_eq!(code("fr", ConstructionScheme::Internal), Some(1));
        assert_eq!(code("mfr", ConstructionScheme::Internal), Some(6));
    }

    #[test]
    fn iso_scheme_codes() {
        assert_eq!(code("joist mason", ConstructionScheme::IsoStandard), Some(2));
        assert_eq!(code("sheet metal", ConstructionScheme::IsoStandard), Some(1));
        assert_eq!(code("mnc", ConstructionScheme::IsoStandard), Some(4));
        assert_eq!(code("fr", ConstructionScheme::IsoStandard), Some(6));
        assert_eq!(code("mfr", ConstructionScheme::IsoStandard), Some(5));
    }

    #[test]
    fn matching_ignores_case_and_padding() {
        assert_eq!(code("  Joisted Masonry ", ConstructionScheme::Internal), Some(4));
        assert_eq!(code("NON-COMB.", ConstructionScheme::IsoStandard), Some(3));
    }

    #[test]
    fn no_fuzzy_or_substring_matches() {
        assert_eq!(code("frame building", ConstructionScheme::Internal), None);
        assert_eq!(code("fram", ConstructionScheme::Internal), None);
        assert_eq!(code("", ConstructionScheme::Internal), None);
        assert_eq!(code("   ", ConstructionScheme::IsoStandard), None);
    }

    #[test]
    fn tables_share_keys_in_the_same_order() {
        assert_eq!(INTERNAL_TABLE.len(), 59);
        assert_eq!(ISO_STANDARD_TABLE.len(), INTERNAL_TABLE.len());
        for (internal, iso) in INTERNAL_TABLE.iter().zip(ISO_STANDARD_TABLE) {
            assert_eq!(internal.0, iso.0);
        }
    }

    #[test]
    fn table_labels_are_unique_and_lowercase() {
        for scheme in ConstructionScheme::ALL {
            let labels = construction_labels(scheme);
            let index = build_index(labels);
            assert_eq!(index.len(), labels.len());
            for (label, _) in labels {
                assert_eq!(*label, label.to_lowercase());
            }
        }
    }

    #[test]
    fn non_combustible_is_the_only_shared_code() {
        for (internal, iso) in INTERNAL_TABLE.iter().zip(ISO_STANDARD_TABLE) {
            if internal.1 == 3 {
                assert_eq!(iso.1, 3, "{}", internal.0);
            } else {
                assert_ne!(internal.1, iso.1, "{}", internal.0);
            }
        }
    }
}
