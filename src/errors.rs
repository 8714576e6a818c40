use thiserror::Error;

/// Error type for patient attributes that fall outside the closed domain sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    #[error("Invalid study type: {0}")]
    InvalidStudyType(String),
    #[error("Invalid sex (expected M or F): {0}")]
    InvalidSex(String),
}
