//! Menu loop for the front desk. Interactive sessions use themed dialoguer
//! prompts; script sessions (stdin piped, `RADIOLOGY_CORE_CLI_SCRIPT` set)
//! read plain numbered selections line by line.

use std::env;
use std::io::{self, BufRead};

use dialoguer::theme::ColorfulTheme;

use crate::billing::{Ledger, PatientRecord, Sex, StudyType};
use crate::cli::{io as cli_io, render, CliError, CliMode, LoopControl, SCRIPT_MODE_ENV};

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut ledger = Ledger::new();
    tracing::info!(?mode, "front desk session opened");

    match mode {
        CliMode::Interactive => run_interactive(&mut ledger),
        CliMode::Script => run_script(&mut ledger),
    }
}

/// Reports input mistakes and keeps the menu running; other errors abort.
fn recover(result: Result<LoopControl, CliError>) -> Result<LoopControl, CliError> {
    match result {
        Err(err) if err.is_input_error() => {
            cli_io::print_error(&err);
            Ok(LoopControl::Continue)
        }
        other => other,
    }
}

fn run_interactive(ledger: &mut Ledger) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    loop {
        let choice = cli_io::select_index(
            &theme,
            "Radiology unit front desk",
            &["Register a client", "Daily report", "Exit"],
        )?;
        let outcome = match choice {
            0 => recover(register_interactive(ledger, &theme))?,
            1 => {
                print_report(ledger);
                LoopControl::Continue
            }
            _ => LoopControl::Exit,
        };
        if outcome == LoopControl::Exit {
            break;
        }
    }
    cli_io::print_info("Session closed.");
    Ok(())
}

fn register_interactive(
    ledger: &mut Ledger,
    theme: &ColorfulTheme,
) -> Result<LoopControl, CliError> {
    let identity = cli_io::prompt_text(theme, "Identity document")?;
    let age = parse_age(&cli_io::prompt_text(theme, "Age")?)?;
    let sex: Sex = cli_io::prompt_text(theme, "Sex (M/F)")?.parse()?;
    let has_insurance = cli_io::confirm_action(theme, "Covered by an insurance plan?", false)?;
    let labels: Vec<&str> = StudyType::ALL.iter().map(|study| study.label()).collect();
    let index = cli_io::select_index(theme, "Study type", &labels)?;
    let study_type = StudyType::ALL[index];

    complete_registration(
        ledger,
        PatientRecord::new(identity, age, sex, has_insurance, study_type),
    )
}

fn run_script(ledger: &mut Ledger) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_main_menu();
        let Some(line) = lines.next() else {
            break;
        };
        let choice = line?;
        let outcome = recover(handle_script_choice(ledger, choice.trim(), &mut lines))?;
        if outcome == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn print_main_menu() {
    println!();
    println!("--- RADIOLOGY UNIT - CLIENT REGISTRATION ---");
    println!("1. Register a new client");
    println!("2. Daily report");
    println!("3. Exit");
    println!("Select an option:");
}

fn handle_script_choice<I>(
    ledger: &mut Ledger,
    choice: &str,
    lines: &mut I,
) -> Result<LoopControl, CliError>
where
    I: Iterator<Item = io::Result<String>>,
{
    match choice {
        "1" => register_script(ledger, lines),
        "2" => {
            print_report(ledger);
            Ok(LoopControl::Continue)
        }
        "3" => {
            cli_io::print_info("Session closed.");
            Ok(LoopControl::Exit)
        }
        other => Err(CliError::Invalid(format!("Invalid option: `{other}`."))),
    }
}

fn register_script<I>(ledger: &mut Ledger, lines: &mut I) -> Result<LoopControl, CliError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let identity = read_field(lines, "Identity document:")?;
    let age = parse_age(&read_field(lines, "Age:")?)?;
    let sex: Sex = read_field(lines, "Sex (M/F):")?.parse()?;
    let insured_answer = read_field(lines, "Insurance plan member? (Y/N):")?;
    let has_insurance = matches!(
        insured_answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    );

    println!("Available studies:");
    for (index, study) in StudyType::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, study.label());
    }
    let study_type = StudyType::from_menu_key(&read_field(lines, "Select the study type:")?)?;

    complete_registration(
        ledger,
        PatientRecord::new(identity, age, sex, has_insurance, study_type),
    )
}

fn read_field<I>(lines: &mut I, prompt: &str) -> Result<String, CliError>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{prompt}");
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(CliError::Invalid("Unexpected end of input.".to_string())),
    }
}

fn parse_age(input: &str) -> Result<i32, CliError> {
    let trimmed = input.trim();
    let age: i32 = trimmed
        .parse()
        .map_err(|_| CliError::Invalid(format!("Age must be a whole number, got `{trimmed}`.")))?;
    if age <= 0 {
        return Err(CliError::Invalid("Age must be a positive number.".to_string()));
    }
    Ok(age)
}

fn complete_registration(
    ledger: &mut Ledger,
    patient: PatientRecord,
) -> Result<LoopControl, CliError> {
    let entry = ledger.register(patient);
    for line in render::receipt_lines(&entry) {
        println!("{line}");
    }
    cli_io::print_success(format!("Client {} registered.", entry.identity_id));
    Ok(LoopControl::Continue)
}

fn print_report(ledger: &Ledger) {
    for line in render::report_lines(&ledger.daily_report()) {
        println!("{line}");
    }
}
