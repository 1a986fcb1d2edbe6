//! envdir command line interface
//!
//! ```text
//! envdir check <DIR> [--recursive]
//! envdir show <DIR> [--platform JVM]
//! envdir select <DIR> [NAME]
//! ```
//!
//! Logs go to stderr through `tracing-subscriber`; `RUST_LOG` selects the
//! level (default `info`). Command output goes to stdout.

pub mod cli;
pub mod commands;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `verbose` forces debug level regardless of `RUST_LOG`.
pub fn init_tracing(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
