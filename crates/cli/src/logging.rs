use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Directives used when `-log` is given.
const VERBOSE_DIRECTIVES: &str = "cheat_sheet=debug,cheat_sheet_core=debug";

/// Install the global subscriber. `RUST_LOG` drives the filter unless
/// `verbose` forces debug output for this tool. Logs go to stderr.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVES)
    } else {
        EnvFilter::from_default_env()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
