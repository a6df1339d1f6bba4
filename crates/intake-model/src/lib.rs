//! Data model for insurance intake field normalization.
//!
//! - **location**: canonical address records and insured address blocks
//! - **construction**: construction coding schemes and class codes
//! - **options**: normalization configuration (year pivot, default scheme)
//! - **tiv**: Total Insured Value coverage columns

pub mod construction;
pub mod error;
pub mod location;
pub mod options;
pub mod tiv;

pub use construction::{ConstructionCode, ConstructionScheme};
pub use error::{IntakeError, Result};
pub use location::{InsuredAddressBlock, Location};
pub use options::{DEFAULT_YEAR_PIVOT, NormalizationOptions, YearPivot};
pub use tiv::TotalInsuredValue;
