//! Terminal dispatcher around the expense core: command parsing, rendering,
//! and the interactive/script shell loops. Hands parsed commands to the core
//! and renders the structured results.

pub mod commands;
pub mod output;
pub mod shell;

pub use shell::run_cli;

use thiserror::Error;

use crate::core::services::ServiceError;
use crate::errors::LedgerError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialog(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
