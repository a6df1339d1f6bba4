//! Construction-type coding schemes.
//!
//! Two numbering schemes are in use for the same construction families:
//!
//! | Family                  | Internal | ISO |
//! |-------------------------|----------|-----|
//! | Frame                   | 5        | 1   |
//! | Joisted Masonry         | 4        | 2   |
//! | Non-Combustible         | 3        | 3   |
//! | Masonry Non-Combustible | 2        | 4   |
//! | Modified Fire Resistive | 6        | 5   |
//! | Fire Resistive          | 1        | 6   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Which numbering scheme a construction code is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionScheme {
    /// Company-internal (IMS) coding.
    #[default]
    Internal,
    /// ISO standard coding.
    IsoStandard,
}

impl ConstructionScheme {
    pub const ALL: [ConstructionScheme; 2] = [Self::Internal, Self::IsoStandard];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::IsoStandard => "iso-standard",
        }
    }
}

impl fmt::Display for ConstructionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstructionScheme {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" | "ims" => Ok(Self::Internal),
            "iso" | "iso-standard" | "iso_standard" => Ok(Self::IsoStandard),
            _ => Err(IntakeError::UnknownScheme(s.to_string())),
        }
    }
}

/// A construction class code in `1..=6`.
///
/// The meaning of a code depends on the scheme it was classified under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ConstructionCode(u8);

impl ConstructionCode {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self, IntakeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(IntakeError::InvalidConstructionCode(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ConstructionCode {
    type Error = IntakeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConstructionCode> for u8 {
    fn from(code: ConstructionCode) -> Self {
        code.0
    }
}

impl fmt::Display for ConstructionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
