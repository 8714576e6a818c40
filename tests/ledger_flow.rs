use radiology_core::{
    billing::{pricing, Ledger, PatientRecord, Sex, StudyType},
    init,
};

const EPSILON: f64 = 1e-9;

fn patient(age: i32, sex: Sex, insured: bool, study: StudyType) -> PatientRecord {
    PatientRecord::new("V-98765432", age, sex, insured, study)
}

#[test]
fn full_day_of_registrations_keeps_the_ledger_consistent() {
    init();

    let mut ledger = Ledger::new();
    ledger.register(patient(30, Sex::Female, true, StudyType::Ultrasound));
    ledger.register(patient(85, Sex::Male, false, StudyType::Mri));
    ledger.register(patient(85, Sex::Male, false, StudyType::Mri));
    ledger.register(patient(12, Sex::Female, false, StudyType::CtScan));

    assert_eq!(ledger.study_count(StudyType::Ultrasound), 1);
    assert_eq!(ledger.study_count(StudyType::Mri), 2);
    assert_eq!(ledger.study_count(StudyType::CtScan), 1);
    assert_eq!(ledger.entry_count(), 4);

    let report = ledger.daily_report();
    let counted: u32 = report.study_counts.values().sum();
    assert_eq!(counted as usize, report.entry_count);

    let summed: f64 = ledger.entries().iter().map(|entry| entry.net_amount).sum();
    assert!((report.total_net_amount - summed).abs() < EPSILON);
}

#[test]
fn net_amount_follows_the_pricing_rules_end_to_end() {
    let mut ledger = Ledger::new();

    // 85-year-old man without insurance: only the 15% seniority rule applies.
    let entry = ledger.register(patient(85, Sex::Male, false, StudyType::Mri));
    let base = pricing::base_price(StudyType::Mri, 85);
    assert!((entry.net_amount - base * 0.85).abs() < EPSILON);

    // Insured 75-year-old woman: 80 + 20 points wipe out the whole price.
    let entry = ledger.register(patient(75, Sex::Female, true, StudyType::Ultrasound));
    assert!(entry.net_amount.abs() < EPSILON);
}

#[test]
fn entries_keep_registration_order() {
    let mut ledger = Ledger::new();
    ledger.register(PatientRecord::new("A-1", 20, Sex::Male, false, StudyType::Ultrasound));
    ledger.register(PatientRecord::new("A-2", 40, Sex::Female, false, StudyType::Mri));
    ledger.register(PatientRecord::new("A-3", 60, Sex::Male, true, StudyType::CtScan));

    let ids: Vec<&str> = ledger
        .entries()
        .iter()
        .map(|entry| entry.identity_id.as_str())
        .collect();
    assert_eq!(ids, ["A-1", "A-2", "A-3"]);
}

#[test]
fn independent_ledgers_do_not_share_state() {
    let mut first = Ledger::new();
    let second = Ledger::new();

    first.register(patient(30, Sex::Female, false, StudyType::Ultrasound));

    assert_eq!(first.entry_count(), 1);
    assert_eq!(second.entry_count(), 0);
    assert_eq!(second.total_net_amount(), 0.0);
}
