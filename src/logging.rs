//! Logging setup
//!
//! Log records go to stderr so stdout stays clean for `--json` output.
//! `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "diffbase=debug" } else { "warn" }
}

/// Install the global subscriber
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Already installed (e.g. by a test harness) is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
