use bank_sim::{
    cli::{ui::test_mode::ScriptedConsole, CliMode, ShellContext},
    config::Config,
    errors::CliError,
};

pub struct SessionRun {
    pub context: ShellContext,
    pub console: ScriptedConsole,
    pub result: Result<(), CliError>,
}

/// Runs a full session over `answers` without the startup banner.
pub fn run_scripted(answers: &[&str]) -> SessionRun {
    let config = Config {
        show_banner: false,
        ..Config::default()
    };
    let mut context = ShellContext::new(CliMode::Script, config);
    let mut console = ScriptedConsole::new(answers.iter().copied());
    let result = bank_sim::cli::run_session(&mut context, &mut console);
    SessionRun {
        context,
        console,
        result,
    }
}
