use crate::cli::commands::{self, UNKNOWN_ACTION};
use crate::cli::forms::{self, Action, ACTION_PROMPT};
use crate::cli::io::Console;
use crate::config::Config;
use crate::errors::CliError;
use crate::ledger::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Owns the ledger for one session and drives the prompt loop.
pub struct ShellContext {
    mode: CliMode,
    ledger: Ledger,
    config: Config,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: Config) -> Self {
        Self::with_ledger(mode, config, Ledger::new())
    }

    pub fn with_ledger(mode: CliMode, config: Config, ledger: Ledger) -> Self {
        Self {
            mode,
            ledger,
            config,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs until the user picks Exit or the console fails.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), CliError> {
        while self.step(console)? == LoopControl::Continue {}
        Ok(())
    }

    /// One menu round: choose an action, collect its fields, apply it and
    /// report the outcome.
    pub fn step<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<LoopControl, CliError> {
        let choice = console.select(ACTION_PROMPT, &Action::labels())?;
        let Some(action) = Action::from_label(&choice) else {
            tracing::debug!(choice = choice.as_str(), "unrecognised action");
            console.warning(UNKNOWN_ACTION)?;
            if let Some(suggestion) = Action::suggest(&choice) {
                console.info(&format!("Did you mean `{}`?", suggestion.label()))?;
            }
            return Ok(LoopControl::Continue);
        };

        let command = forms::collect(console, action)?;
        let outcome = commands::dispatch(&mut self.ledger, command);
        console.emit(outcome.kind(), &outcome.message(&self.config.currency))?;

        if outcome.ends_session() {
            Ok(LoopControl::Exit)
        } else {
            Ok(LoopControl::Continue)
        }
    }
}
