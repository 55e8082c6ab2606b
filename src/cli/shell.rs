//! Interactive and script-mode shell loops.

use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::commands::{self, LoopControl, ShellContext};
use crate::cli::{output, CliError};
use crate::config::ConfigManager;
use crate::core::LedgerManager;
use crate::storage::JsonStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("GASTOS_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config = ConfigManager::new().load()?;
    let storage = JsonStorage::new(config.data_file.clone());
    let manager = LedgerManager::new(Box::new(storage));
    let mut context = ShellContext::from_config(manager, &config, mode == CliMode::Script);

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    output::info(format!(
        "Sistema de gastos activado para {}. Usa `ayuda` para ver los comandos.",
        context.display_name
    ));

    loop {
        match editor.readline("gastos> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match commands::dispatch(context, trimmed)? {
                    LoopControl::Continue => {}
                    LoopControl::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                output::info("Hasta luego.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match commands::dispatch(context, trimmed)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(())
}
