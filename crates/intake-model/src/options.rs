//! Configuration options for field normalization.

use serde::{Deserialize, Serialize};

use crate::construction::ConstructionScheme;
use crate::error::IntakeError;

/// Century window for expanding two-digit years.
///
/// Two-digit values `00..=pivot` expand to the 2000s; values above the pivot
/// expand to the 1900s. The pivot is fixed configuration, never derived from
/// host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct YearPivot(u8);

/// Last two-digit year that expands into the 2000s by default.
pub const DEFAULT_YEAR_PIVOT: u8 = 29;

impl YearPivot {
    pub fn new(pivot: u8) -> Result<Self, IntakeError> {
        if pivot > 99 {
            return Err(IntakeError::InvalidYearPivot(pivot));
        }
        Ok(Self(pivot))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Expands a two-digit year (`0..=99`) into a four-digit year.
    pub fn expand(self, two_digit: u32) -> u32 {
        if two_digit <= u32::from(self.0) {
            2000 + two_digit
        } else {
            1900 + two_digit
        }
    }
}

impl Default for YearPivot {
    fn default() -> Self {
        Self(DEFAULT_YEAR_PIVOT)
    }
}

impl TryFrom<u8> for YearPivot {
    type Error = IntakeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<YearPivot> for u8 {
    fn from(pivot: YearPivot) -> Self {
        pivot.0
    }
}

/// Options for normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Century window for two-digit years built.
    pub year_pivot: YearPivot,

    /// Scheme used when a caller does not name one explicitly.
    pub construction_scheme: ConstructionScheme,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year_pivot(mut self, pivot: YearPivot) -> Self {
        self.year_pivot = pivot;
        self
    }

    pub fn with_construction_scheme(mut self, scheme: ConstructionScheme) -> Self {
        self.construction_scheme = scheme;
        self
    }
}
