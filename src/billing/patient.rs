use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::billing::study::StudyType;
use crate::errors::BillingError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = BillingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Sex::Female),
            "m" | "male" => Ok(Sex::Male),
            _ => Err(BillingError::InvalidSex(value.trim().to_string())),
        }
    }
}

/// Patient data gathered by the front desk for a single registration.
///
/// Age positivity is the caller's responsibility; this layer accepts any
/// integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub identity_id: String,
    pub age: i32,
    pub sex: Sex,
    pub has_insurance: bool,
    pub study_type: StudyType,
}

impl PatientRecord {
    pub fn new(
        identity_id: impl Into<String>,
        age: i32,
        sex: Sex,
        has_insurance: bool,
        study_type: StudyType,
    ) -> Self {
        Self {
            identity_id: identity_id.into(),
            age,
            sex,
            has_insurance,
            study_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sex_codes_case_insensitively() {
        assert_eq!("F".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("m".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!("Female".parse::<Sex>(), Ok(Sex::Female));
    }

    #[test]
    fn rejects_unknown_sex_code() {
        let err = "X".parse::<Sex>().unwrap_err();
        assert_eq!(err, BillingError::InvalidSex("X".to_string()));
    }
}
