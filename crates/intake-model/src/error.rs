use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntakeError {
    #[error("construction code out of range (expected 1-6): {0}")]
    InvalidConstructionCode(u8),
    #[error("unknown construction scheme: {0}")]
    UnknownScheme(String),
    #[error("year pivot must be a two-digit value (0-99): {0}")]
    InvalidYearPivot(u8),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
