use std::env;
use std::io;

use crate::cli::io::Console;
use crate::cli::output::{self, MessageKind, OutputPreferences};
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::cli::ui::banner::Banner;
use crate::cli::ui::prompts::{LineConsole, TerminalConsole};
use crate::config::{Config, SCRIPT_ENV};
use crate::errors::CliError;

/// Entry point of the binary: resolves configuration from the environment and
/// runs one session against the terminal, or against stdin/stdout lines when
/// `BANK_SIM_CLI_SCRIPT` is set.
pub fn run_cli() -> Result<(), CliError> {
    let config = Config::from_env()?;
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let prefs = OutputPreferences::from(&config);
    let mut context = ShellContext::new(mode, config);

    match mode {
        CliMode::Interactive => {
            let mut console = TerminalConsole::new(prefs);
            run_session(&mut context, &mut console)
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut console = LineConsole::new(stdin.lock(), io::stdout());
            run_session(&mut context, &mut console)
        }
    }
}

/// Runs the prompt loop of `context` against any console.
pub fn run_session<C: Console + ?Sized>(
    context: &mut ShellContext,
    console: &mut C,
) -> Result<(), CliError> {
    if context.config().show_banner {
        console.info(&Banner::text())?;
    }
    tracing::info!(mode = ?context.mode(), "session started");
    let result = context.run(console);
    tracing::info!(
        accounts = context.ledger().len(),
        ok = result.is_ok(),
        "session ended"
    );
    result
}

/// Prints the fault that ended a session on stderr in the error style.
pub fn report_fatal(err: &CliError) {
    let prefs = Config::from_env()
        .map(|config| OutputPreferences::from(&config))
        .unwrap_or_default();
    output::print(MessageKind::Error, format!("Error: {err}"), &prefs);
}
