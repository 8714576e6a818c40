//! Front-desk CLI: menu loop, prompts, and receipt/report rendering.

pub mod io;
mod menu;
pub mod output;
pub mod render;

use std::io as std_io;

use thiserror::Error;

use crate::errors::BillingError;

pub use menu::run_cli;

/// Environment variable that forces the line-based script mode.
pub const SCRIPT_MODE_ENV: &str = "RADIOLOGY_CORE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// User-facing CLI failures.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Billing(#[from] BillingError),
    #[error(transparent)]
    Io(#[from] std_io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

impl CliError {
    /// Input mistakes are reported and the menu continues; anything else
    /// ends the session.
    pub(crate) fn is_input_error(&self) -> bool {
        matches!(self, CliError::Invalid(_) | CliError::Billing(_))
    }
}
