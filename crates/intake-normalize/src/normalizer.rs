//! Options-bound access to the normalizers.

use intake_model::{ConstructionCode, NormalizationOptions};

use crate::construction::classify_construction_type;
use crate::scalar::adjust_year_built_with;

/// Applies configured [`NormalizationOptions`] to the option-dependent rules.
///
/// Rules that take no configuration are used directly from their modules.
#[derive(Debug, Clone, Default)]
pub struct FieldNormalizer {
    options: NormalizationOptions,
}

impl FieldNormalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Expands a year built with the configured century pivot.
    pub fn year_built(&self, raw: &str) -> String {
        adjust_year_built_with(raw, self.options.year_pivot)
    }

    /// Classifies a construction description under the configured scheme.
    pub fn construction_type(&self, raw: &str) -> Option<ConstructionCode> {
        classify_construction_type(raw, self.options.construction_scheme)
    }
}
