//! Logging configuration and initialization
//!
//! Diagnostics go to stderr through `tracing`. The default level is `warn`, so
//! a normal run prints nothing but the single user-facing message.

use tracing::{debug, trace};

/// Map the `-v` count to an env filter directive
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing/logging for the application
pub fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(log_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("sales-aggregator started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
