pub mod commands;
pub mod forms;
pub mod io;
pub mod output;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{report_fatal, run_cli, run_session};
pub use shell_context::{CliMode, LoopControl, ShellContext};
