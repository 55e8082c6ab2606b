//! Command table, dispatch, and the handlers behind each verb.

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use crate::cli::{output, CliError};
use crate::config::Config;
use crate::core::LedgerManager;

const SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Identity and collaborators shared by every command handler.
pub struct ShellContext {
    pub manager: LedgerManager,
    pub user_id: String,
    pub display_name: String,
    pub history_limit: i64,
    /// Script mode answers every confirmation prompt with yes.
    pub assume_yes: bool,
}

impl ShellContext {
    /// Resolves the local identity: environment first (the per-invocation
    /// channel, like the chat platform's author), then config, then a fixed
    /// fallback.
    pub fn from_config(manager: LedgerManager, config: &Config, assume_yes: bool) -> Self {
        let user_id = std::env::var("GASTOS_USER")
            .ok()
            .or_else(|| config.user_id.clone())
            .unwrap_or_else(|| "local".to_string());
        let display_name = std::env::var("GASTOS_NAME")
            .ok()
            .or_else(|| config.display_name.clone())
            .unwrap_or_else(|| user_id.clone());
        Self {
            manager,
            user_id,
            display_name,
            history_limit: config.history_limit,
            assume_yes,
        }
    }
}

pub type CommandHandler = fn(&mut ShellContext, &[String]) -> Result<LoopControl, CliError>;

pub struct CommandDefinition {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub handler: CommandHandler,
}

pub fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: "gasto",
            usage: "gasto <monto> <detalle>",
            description: "Registra un nuevo gasto (ej. `gasto 150 en Restaurante`)",
            handler: cmd_gasto,
        },
        CommandDefinition {
            name: "resumen",
            usage: "resumen",
            description: "Muestra un resumen de tus gastos por categoría",
            handler: cmd_resumen,
        },
        CommandDefinition {
            name: "historial",
            usage: "historial [cantidad]",
            description: "Muestra los últimos gastos (por defecto 10)",
            handler: cmd_historial,
        },
        CommandDefinition {
            name: "limpiar",
            usage: "limpiar",
            description: "Elimina todos tus gastos registrados",
            handler: cmd_limpiar,
        },
        CommandDefinition {
            name: "ayuda",
            usage: "ayuda",
            description: "Muestra esta lista de comandos",
            handler: cmd_ayuda,
        },
        CommandDefinition {
            name: "salir",
            usage: "salir",
            description: "Cierra el shell",
            handler: cmd_salir,
        },
    ]
}

/// Splits one input line and routes it to its handler. Unknown verbs get a
/// closest-match suggestion instead of an error bubble.
pub fn dispatch(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(err) => {
            output::error(format!("No se pudo leer el comando: {err}"));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((verb, args)) = words.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let definitions = definitions();
    match definitions.iter().find(|def| def.name == verb.as_str()) {
        Some(definition) => (definition.handler)(context, args),
        None => {
            match closest_command(&definitions, verb) {
                Some(suggestion) => output::error(format!(
                    "Comando desconocido `{verb}`. ¿Quisiste decir `{suggestion}`?"
                )),
                None => output::error(format!(
                    "Comando desconocido `{verb}`. Usa `ayuda` para ver la lista."
                )),
            }
            Ok(LoopControl::Continue)
        }
    }
}

fn closest_command<'a>(definitions: &'a [CommandDefinition], verb: &str) -> Option<&'a str> {
    definitions
        .iter()
        .map(|def| (def.name, levenshtein(def.name, verb)))
        .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

fn cmd_gasto(context: &mut ShellContext, args: &[String]) -> Result<LoopControl, CliError> {
    let Some((raw_amount, detail_words)) = args.split_first() else {
        output::error("Uso: gasto <monto> <detalle>");
        return Ok(LoopControl::Continue);
    };
    let Ok(amount) = raw_amount.parse::<f64>() else {
        output::error(format!("Monto inválido `{raw_amount}`. Usa un número."));
        return Ok(LoopControl::Continue);
    };
    if detail_words.is_empty() {
        output::error("Falta el detalle del gasto.");
        return Ok(LoopControl::Continue);
    }
    let raw_label = detail_words.join(" ");

    let expense = context.manager.register(
        &context.user_id,
        &context.display_name,
        amount,
        &raw_label,
    )?;
    output::success("Gasto registrado");
    output::detail("Monto", output::format_money(expense.amount));
    output::detail("Detalle", &expense.label);
    output::detail("Categoría", expense.general_category.to_string());
    output::detail("Fecha", expense.timestamp.format("%d/%m/%Y").to_string());
    Ok(LoopControl::Continue)
}

fn cmd_resumen(context: &mut ShellContext, _args: &[String]) -> Result<LoopControl, CliError> {
    match context.manager.summarize(&context.user_id) {
        Ok(summary) => {
            output::section("Resumen de gastos");
            for bucket in &summary.per_category {
                println!(
                    "  {}: {} ({})",
                    bucket.category,
                    output::format_money(bucket.total),
                    output::format_percent(bucket.percent)
                );
            }
            output::detail("Total general", output::format_money(summary.grand_total));
            output::detail("Gastos registrados", summary.count.to_string());
        }
        Err(err) if err.is_no_expenses() => {
            output::info("No tienes gastos registrados aún. Usa `gasto <monto> en <detalle>`.");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(LoopControl::Continue)
}

fn cmd_historial(context: &mut ShellContext, args: &[String]) -> Result<LoopControl, CliError> {
    let limit = match args.first() {
        Some(raw) => match raw.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                output::error(format!("Cantidad inválida `{raw}`. Usa un número entero."));
                return Ok(LoopControl::Continue);
            }
        },
        None => context.history_limit,
    };

    match context.manager.history(&context.user_id, limit) {
        Ok(expenses) => {
            output::section(format!("Últimos {} gastos", expenses.len()));
            for (index, expense) in expenses.iter().enumerate() {
                println!(
                    "  {}. {} - {} [{}] {}",
                    index + 1,
                    expense.label,
                    output::format_money(expense.amount),
                    expense.general_category,
                    expense.timestamp.format("%d/%m/%Y %H:%M")
                );
            }
        }
        Err(err) if err.is_no_expenses() => {
            output::info("No tienes gastos registrados aún.");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(LoopControl::Continue)
}

fn cmd_limpiar(context: &mut ShellContext, _args: &[String]) -> Result<LoopControl, CliError> {
    if !context.assume_yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("¿Eliminar todos tus gastos registrados?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Operación cancelada.");
            return Ok(LoopControl::Continue);
        }
    }

    let removed = context.manager.purge(&context.user_id)?;
    if removed > 0 {
        output::success(format!("Se eliminaron {removed} gastos registrados."));
    } else {
        output::info("No tienes gastos para eliminar.");
    }
    Ok(LoopControl::Continue)
}

fn cmd_ayuda(_context: &mut ShellContext, _args: &[String]) -> Result<LoopControl, CliError> {
    output::section("Sistema de gestión de gastos");
    for definition in definitions() {
        println!("  {:<22} {}", definition.usage, definition.description);
    }
    Ok(LoopControl::Continue)
}

fn cmd_salir(_context: &mut ShellContext, _args: &[String]) -> Result<LoopControl, CliError> {
    Ok(LoopControl::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_the_closest_verb_for_typos() {
        let definitions = definitions();
        assert_eq!(closest_command(&definitions, "resume"), Some("resumen"));
        assert_eq!(closest_command(&definitions, "gastos"), Some("gasto"));
        assert_eq!(closest_command(&definitions, "zzzzzz"), None);
    }
}
