//! Structured logging setup for dc-core.
//!
//! stdout is reserved for command payloads (the run report); all log
//! output goes to stderr. The default level follows the -v/-q flags,
//! with `DC_LOG` or `RUST_LOG` taking precedence when set.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive for the given verbosity flags.
fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs.
pub fn init_logging(verbose: u8, quiet: bool, no_color: bool) {
    let filter = EnvFilter::try_from_env("DC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("dc_core={}", default_level(verbose, quiet))));

    let use_ansi = !no_color && std::io::stderr().is_terminal();
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi)
        .without_time()
        .init();
}
