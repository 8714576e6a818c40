use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BillingError;

/// Radiology exam kinds offered by the unit. The set is closed; each carries
/// its own base fee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StudyType {
    Ultrasound,
    CtScan,
    Mri,
}

impl StudyType {
    /// Menu and report ordering.
    pub const ALL: [StudyType; 3] = [StudyType::Ultrasound, StudyType::CtScan, StudyType::Mri];

    /// Fee charged before the per-year age component and any discount.
    pub fn base_fee(self) -> f64 {
        match self {
            StudyType::Ultrasound => 8.90,
            StudyType::CtScan => 12.64,
            StudyType::Mri => 15.60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudyType::Ultrasound => "Ultrasound",
            StudyType::CtScan => "CT scan",
            StudyType::Mri => "MRI",
        }
    }

    /// Resolves a `1`-`3` selection from the study menu.
    pub fn from_menu_key(key: &str) -> Result<Self, BillingError> {
        match key.trim() {
            "1" => Ok(StudyType::Ultrasound),
            "2" => Ok(StudyType::CtScan),
            "3" => Ok(StudyType::Mri),
            other => Err(BillingError::InvalidStudyType(other.to_string())),
        }
    }
}

impl fmt::Display for StudyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StudyType {
    type Err = BillingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ultrasound" => Ok(StudyType::Ultrasound),
            "ct" | "ct scan" | "ct-scan" | "ctscan" => Ok(StudyType::CtScan),
            "mri" => Ok(StudyType::Mri),
            _ => Err(BillingError::InvalidStudyType(value.trim().to_string())),
        }
    }
}
