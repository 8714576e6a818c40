use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::patient::{PatientRecord, Sex};
use super::pricing;
use super::study::StudyType;

/// One settled registration. Created by [`Ledger::register`] and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingEntry {
    pub id: Uuid,
    pub identity_id: String,
    pub age: i32,
    pub sex: Sex,
    pub has_insurance: bool,
    pub study_type: StudyType,
    pub net_amount: f64,
    pub registered_at: DateTime<Utc>,
}

/// Read-only snapshot of the session totals. All three study types are
/// always present in `study_counts`, zeros included.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyReport {
    pub study_counts: BTreeMap<StudyType, u32>,
    pub total_net_amount: f64,
    pub entry_count: usize,
    pub session_started: DateTime<Utc>,
}

/// Session aggregate for the front desk: per-study counters, the running
/// net total, and the ordered list of registrations.
///
/// Counters and total are only touched by [`Ledger::register`], which keeps
/// `study_counts` summing to `entries.len()` and `total_net_amount` equal to
/// the sum of the stored net amounts. The ledger lives for one session and
/// is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    opened_at: DateTime<Utc>,
    study_counts: BTreeMap<StudyType, u32>,
    total_net_amount: f64,
    entries: Vec<BillingEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        let study_counts = StudyType::ALL.iter().map(|study| (*study, 0)).collect();
        Self {
            opened_at: Utc::now(),
            study_counts,
            total_net_amount: 0.0,
            entries: Vec::new(),
        }
    }

    /// Prices the study, applies the discount rules, and records the
    /// resulting entry. Returns a copy of what was stored.
    pub fn register(&mut self, patient: PatientRecord) -> BillingEntry {
        let base_price = pricing::base_price(patient.study_type, patient.age);
        let discount =
            pricing::discount(base_price, patient.has_insurance, patient.sex, patient.age);
        let net_amount = base_price - discount;

        let entry = BillingEntry {
            id: Uuid::new_v4(),
            identity_id: patient.identity_id,
            age: patient.age,
            sex: patient.sex,
            has_insurance: patient.has_insurance,
            study_type: patient.study_type,
            net_amount,
            registered_at: Utc::now(),
        };

        *self.study_counts.entry(entry.study_type).or_insert(0) += 1;
        self.total_net_amount += net_amount;
        self.entries.push(entry.clone());

        tracing::info!(
            study = %entry.study_type,
            net_amount,
            total = self.total_net_amount,
            "registered client"
        );

        entry
    }

    /// Snapshot of the current totals. Repeated calls without intervening
    /// registrations return equal reports.
    pub fn daily_report(&self) -> DailyReport {
        DailyReport {
            study_counts: self.study_counts.clone(),
            total_net_amount: self.total_net_amount,
            entry_count: self.entries.len(),
            session_started: self.opened_at,
        }
    }

    pub fn entries(&self) -> &[BillingEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn study_count(&self, study_type: StudyType) -> u32 {
        self.study_counts.get(&study_type).copied().unwrap_or(0)
    }

    pub fn total_net_amount(&self) -> f64 {
        self.total_net_amount
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
