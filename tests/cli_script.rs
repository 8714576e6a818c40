use assert_cmd::Command;
use predicates::str::contains;

fn script_cmd(input: &str) -> Command {
    let mut cmd = Command::cargo_bin("radiology_core_cli").unwrap();
    cmd.env("RADIOLOGY_CORE_CLI_SCRIPT", "1")
        .write_stdin(input.to_string());
    cmd
}

#[test]
fn script_mode_registers_a_client_and_prints_a_receipt() {
    // Register: insured 30-year-old woman, ultrasound. Then report and exit.
    let input = "1\nV-12345678\n30\nF\ny\n1\n2\n3\n";

    script_cmd(input)
        .assert()
        .success()
        .stdout(contains("RECEIPT - RADIOLOGY UNIT"))
        .stdout(contains("Identity document: V-12345678"))
        .stdout(contains("Net amount due: $61.78"))
        .stdout(contains("- Ultrasound: 1 client(s)"))
        .stdout(contains("Total net amount billed: $61.78"));
}

#[test]
fn report_lists_zero_counts_for_untouched_studies() {
    let input = "2\n3\n";

    script_cmd(input)
        .assert()
        .success()
        .stdout(contains("DAILY REPORT - RADIOLOGY UNIT"))
        .stdout(contains("- Ultrasound: 0 client(s)"))
        .stdout(contains("- CT scan: 0 client(s)"))
        .stdout(contains("- MRI: 0 client(s)"))
        .stdout(contains("Total net amount billed: $0.00"));
}

#[test]
fn invalid_menu_option_keeps_the_session_alive() {
    let input = "9\n3\n";

    script_cmd(input)
        .assert()
        .success()
        .stdout(contains("Invalid option: `9`."))
        .stdout(contains("Session closed."));
}

#[test]
fn non_positive_age_aborts_the_registration_attempt() {
    // The failed attempt returns to the menu; the report stays empty.
    let input = "1\nV-200\n-4\n2\n3\n";

    script_cmd(input)
        .assert()
        .success()
        .stdout(contains("Age must be a positive number."))
        .stdout(contains("- Ultrasound: 0 client(s)"));
}

#[test]
fn unknown_sex_code_is_reported_and_nothing_is_billed() {
    let input = "1\nV-300\n30\nX\n2\n3\n";

    script_cmd(input)
        .assert()
        .success()
        .stdout(contains("Invalid sex (expected M or F): X"))
        .stdout(contains("Total net amount billed: $0.00"));
}

#[test]
fn invalid_study_selection_aborts_the_registration_attempt() {
    let input = "1\nV-400\n30\nM\nn\n7\n2\n3\n";

    script_cmd(input)
        .assert()
        .success()
        .stdout(contains("Invalid study type: 7"))
        .stdout(contains("Total net amount billed: $0.00"));
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    script_cmd("").assert().success();
}
