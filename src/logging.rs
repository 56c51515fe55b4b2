//! Diagnostic logging
//!
//! Game events are emitted with `tracing`; this installs the subscriber
//! that writes them to stderr.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Calling this more
/// than once leaves the first subscriber in place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
