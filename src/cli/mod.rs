//! Interactive console front end for the tracker.

pub mod commands;
pub mod io;
pub mod menus;
pub mod output;
mod shell;
mod shell_context;

use thiserror::Error;

pub use shell::{run_cli, SCRIPT_MODE_ENV};
pub use shell_context::{CliMode, ShellContext};

use crate::errors::LedgerError;

/// Failures surfaced while running a CLI command or prompt.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("input ended")]
    EndOfInput,
}
