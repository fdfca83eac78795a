use std::io;

const DEFAULT_DIRECTIVE: &str = "bank_sim=warn";

/// Installs the global tracing subscriber.
///
/// Records go to stderr so they never interleave with the prompt stream on
/// stdout. `RUST_LOG` replaces the default filter when set. Call through
/// [`crate::init`], which runs this once per process.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A subscriber installed elsewhere (e.g. by a test harness) takes precedence.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
