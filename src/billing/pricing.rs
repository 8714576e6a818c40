//! Pure pricing rules: base fee plus an age component, and the additive
//! discount percentages applied on top.

use crate::billing::patient::Sex;
use crate::billing::study::StudyType;

/// Added to the study base fee per year of age.
pub const AGE_FEE_PER_YEAR: f64 = 10.0;

/// Percentage points granted to insured patients.
pub const INSURED_DISCOUNT_PCT: f64 = 80.0;

/// Percentage points granted to women older than [`FEMALE_SENIOR_AGE`].
pub const FEMALE_SENIOR_DISCOUNT_PCT: f64 = 20.0;
pub const FEMALE_SENIOR_AGE: i32 = 70;

/// Percentage points granted to men older than [`MALE_SENIOR_AGE`].
pub const MALE_SENIOR_DISCOUNT_PCT: f64 = 15.0;
pub const MALE_SENIOR_AGE: i32 = 80;

/// Price before any discount. Full precision is kept; rounding happens only
/// at display time.
pub fn base_price(study_type: StudyType, age: i32) -> f64 {
    study_type.base_fee() + f64::from(age) * AGE_FEE_PER_YEAR
}

/// Discount amount for the given base price.
///
/// Each rule contributes percentage points independently and the combined
/// percentage is not capped at 100, so the resulting net amount can reach
/// zero or go negative.
pub fn discount(base_price: f64, has_insurance: bool, sex: Sex, age: i32) -> f64 {
    let mut percentage = 0.0;

    if has_insurance {
        percentage += INSURED_DISCOUNT_PCT;
    }
    if sex == Sex::Female && age > FEMALE_SENIOR_AGE {
        percentage += FEMALE_SENIOR_DISCOUNT_PCT;
    }
    if sex == Sex::Male && age > MALE_SENIOR_AGE {
        percentage += MALE_SENIOR_DISCOUNT_PCT;
    }

    (percentage / 100.0) * base_price
}
