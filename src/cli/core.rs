//! Shell context, dispatch, and the error types shared by every command.

use std::io;

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;
use tracing::warn;

use crate::{
    cli::{commands, io as cli_io, output, registry::CommandRegistry, shell},
    config::{self, Config, ConfigError, ConfigManager},
    core::{LedgerManager, LoadOutcome},
    errors::LedgerError,
    storage::JsonLedgerStorage,
};

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

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input error: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Input(err.to_string())
    }
}

/// Everything a command handler can reach: the ledger, preferences and terminal mode.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) manager: LedgerManager,
    pub(crate) theme: ColorfulTheme,
    pub(crate) config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) running: bool,
    pub(crate) last_command: Option<String>,
}

impl ShellContext {
    /// Loads preferences and opens the configured ledger document.
    pub fn new(mode: CliMode) -> Self {
        let config_manager = config::default_manager();
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %config_manager.config_path().display(), error = %err, "config unreadable; using defaults");
                cli_io::print_warning(format!(
                    "Ignoring unreadable config at {}: {}",
                    config_manager.config_path().display(),
                    err
                ));
                Config::default()
            }
        };
        let data_file = config_manager.data_file(&config);
        let manager = LedgerManager::open(Box::new(JsonLedgerStorage::new(data_file)));
        let mut context = Self::with_manager(mode, manager, config_manager, config);
        context.report_load_outcome();
        context
    }

    /// Builds a context around an already-opened manager.
    pub fn with_manager(
        mode: CliMode,
        manager: LedgerManager,
        config_manager: ConfigManager,
        config: Config,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        output::set_color_enabled(config.ui_color_enabled && mode == CliMode::Interactive);

        Self {
            mode,
            registry,
            manager,
            theme: ColorfulTheme::default(),
            config,
            config_manager,
            running: true,
            last_command: None,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn manager(&self) -> &LedgerManager {
        &self.manager
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        "finance> ".to_string()
    }

    pub(crate) fn format_amount(&self, amount: f64) -> String {
        self.config.format_amount(amount)
    }

    /// Writes the current preferences and re-applies the colour setting.
    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::set_color_enabled(self.config.ui_color_enabled && self.mode == CliMode::Interactive);
        Ok(())
    }

    fn report_load_outcome(&mut self) {
        match self.manager.load_outcome().clone() {
            LoadOutcome::Loaded => {}
            LoadOutcome::Created => cli_io::print_info(format!(
                "Started a new ledger at {}.",
                self.manager.location()
            )),
            LoadOutcome::Repaired(repairs) => {
                cli_io::print_warning("The ledger document needed repairs:");
                for repair in repairs {
                    cli_io::print_warning(format!("  {}", repair));
                }
            }
            LoadOutcome::Recovered(reason) => cli_io::print_warning(format!(
                "The ledger document could not be read ({}); starting from an empty ledger.",
                reason
            )),
        }
        self.flush_save_warning();
    }

    /// Surfaces a failed save left behind by the last mutation.
    pub(crate) fn flush_save_warning(&mut self) {
        if let Some(err) = self.manager.take_save_warning() {
            cli_io::print_warning(format!("Change applied but not saved: {}", err));
        }
    }

    /// Parses and runs one line of input.
    pub(crate) fn execute_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        let result = handler(self, args);
        self.flush_save_warning();
        match result {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    /// Asks before destructive work. Script mode always proceeds.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        match self.mode {
            CliMode::Script => Ok(true),
            CliMode::Interactive => cli_io::confirm_action(&self.theme, prompt, false),
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        self.confirm("Exit FinanceFlow?").map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(err) if err.is_rejection() => {
                warn!(command = ?self.last_command, error = %err, "command rejected");
                cli_io::print_error(err);
            }
            other => cli_io::print_error(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn script_context() -> (ShellContext, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let storage = JsonLedgerStorage::new(dir.path().join("finance_data.json"));
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        let manager = LedgerManager::open_with_clock(Box::new(storage), Box::new(clock));
        let config_manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        let context = ShellContext::with_manager(
            CliMode::Script,
            manager,
            config_manager,
            Config::default(),
        );
        (context, dir)
    }

    #[test]
    fn lines_drive_the_ledger() {
        let (mut context, _dir) = script_context();
        for line in [
            "income Salary 1000",
            "expense 'Dining out' 40",
            "budget Food 100",
            "goal Bike 300",
        ] {
            assert_eq!(context.execute_line(line).unwrap(), LoopControl::Continue);
        }
        let ledger = context.manager().ledger();
        assert_eq!(ledger.incomes.len(), 1);
        assert_eq!(ledger.expenses[0].category, "Dining out");
        assert_eq!(ledger.budgets[0].category, "Food");
        assert_eq!(ledger.goals[0].name, "Bike");
    }

    #[test]
    fn non_numeric_amount_is_rejected_without_changes() {
        let (mut context, _dir) = script_context();
        let err = context.execute_line("income Salary lots").unwrap_err();
        assert!(matches!(err, CommandError::Ledger(LedgerError::Validation(_))));
        assert!(context.manager().ledger().is_empty());
    }

    #[test]
    fn missing_arguments_are_reported() {
        let (mut context, _dir) = script_context();
        let err = context.execute_line("expense Food").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn unknown_commands_continue_and_exit_stops() {
        let (mut context, _dir) = script_context();
        assert_eq!(context.execute_line("incme 5").unwrap(), LoopControl::Continue);
        assert_eq!(context.execute_line("").unwrap(), LoopControl::Continue);
        assert_eq!(context.execute_line("EXIT").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn goal_indices_are_one_based() {
        let (mut context, _dir) = script_context();
        context.execute_line("income Salary 500").unwrap();
        context.execute_line("goal Bike 100").unwrap();
        context.execute_line("goal Trip 200").unwrap();

        context.execute_line("achieve 2").unwrap();
        let ledger = context.manager().ledger();
        assert_eq!(ledger.goals.len(), 1);
        assert_eq!(ledger.goals[0].name, "Bike");
        assert_eq!(ledger.expenses[0].category, "Goal (\"Trip\")");

        let err = context.execute_line("delete-goal 0").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        context.execute_line("delete-goal 1").unwrap();
        assert!(context.manager().goals().is_empty());
    }

    #[test]
    fn clear_runs_without_prompt_in_script_mode() {
        let (mut context, _dir) = script_context();
        context.execute_line("income Salary 500").unwrap();
        context.execute_line("budget Rent 100").unwrap();
        context.execute_line("clear budgets").unwrap();
        assert!(context.manager().budgets().is_empty());
        context.execute_line("clear transactions").unwrap();
        assert!(context.manager().incomes().is_empty());
    }

    #[test]
    fn config_set_persists_preferences() {
        let (mut context, dir) = script_context();
        context.execute_line("config set currency EUR").unwrap();
        context.execute_line("config set precision 1").unwrap();
        context.execute_line("config set color off").unwrap();
        assert_eq!(context.format_amount(2.04), "EUR 2.0");

        let stored = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .load()
            .expect("load config");
        assert_eq!(stored.currency_label, "EUR");
        assert_eq!(stored.precision, 1);
        assert!(!stored.ui_color_enabled);
    }

    #[test]
    fn config_set_rejects_bad_values() {
        let (mut context, dir) = script_context();
        for line in [
            "config set precision many",
            "config set color maybe",
            "config set theme dark",
            "config set currency",
        ] {
            let err = context.execute_line(line).unwrap_err();
            assert!(matches!(err, CommandError::InvalidArguments(_)), "{line}");
        }
        assert!(!dir.path().join("config.json").exists());
    }
}
