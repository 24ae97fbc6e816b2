use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use thiserror::Error;

use crate::{
    config::{ShellConfig, SCRIPT_MODE_ENV},
    errors::{CliError, StorageError, ValidationError},
    ledger::Ledger,
};

use super::{commands, input::LineSource, menus::MainChoice, output};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single menu command. Everything except I/O trouble is reported and the loop goes on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}; data was not changed")]
    Storage(#[from] StorageError),
    #[error("{0}")]
    Message(String),
    #[error("cancelled")]
    Interrupted,
    #[error("input ended")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type CommandResult = Result<(), CommandError>;

/// State shared by every menu command: the ledger plus the input it reads from.
pub struct ShellContext {
    pub ledger: Ledger,
    pub config: ShellConfig,
    pub(crate) input: Box<dyn LineSource>,
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: ShellConfig, input: Box<dyn LineSource>) -> Self {
        Self {
            ledger: Ledger::new(),
            config,
            input,
            mode,
            running: true,
        }
    }

    pub(crate) fn dispatch(&mut self, raw: &str) -> Result<LoopControl, CommandError> {
        let Some(choice) = MainChoice::parse(raw) else {
            output::warning("Invalid choice");
            return Ok(LoopControl::Continue);
        };
        match choice {
            MainChoice::Incomes => commands::income::run(self)?,
            MainChoice::Expenses => commands::expense::run(self)?,
            MainChoice::Subscriptions => commands::subscription::run(self)?,
            MainChoice::AllEntries => commands::listing::show_all(self),
            MainChoice::Filters => commands::listing::filters(self)?,
            MainChoice::MonthlyReport => commands::report::run(self)?,
            MainChoice::Snapshot => commands::snapshot::run(self)?,
            MainChoice::Exit => return Ok(LoopControl::Exit),
        }
        Ok(LoopControl::Continue)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit the finance tracker?")
            .default(false)
            .interact()?)
    }

    /// Prints a recoverable failure; returns an error only when the shell itself cannot continue.
    pub(crate) fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::Interrupted => {
                output::info("Cancelled.");
                Ok(())
            }
            CommandError::EndOfInput => {
                self.running = false;
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::Io(err)),
            CommandError::Readline(err) => Err(CliError::Readline(err)),
            other => {
                tracing::debug!(error = %other, "command failed");
                output::error(other);
                Ok(())
            }
        }
    }

    pub(crate) fn money(&self, amount: rust_decimal::Decimal) -> String {
        super::formatting::money(amount, &self.config.currency_symbol)
    }
}
