//! Diagnostic logging for the binaries.

use std::io;

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `-v` enables `debug`, `-q` limits
/// output to `error`, and the default is `warn`.
pub fn init_logging(verbose: bool, quiet: u8) {
    let default_level = if verbose {
        "debug"
    } else if quiet > 0 {
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
