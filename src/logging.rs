//! Diagnostic logging.
//!
//! Verbosity comes from `RSHIFTLOG_LOG` (EnvFilter syntax, default `warn`).
//! Events go to stderr so they never mix with command output.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RSHIFTLOG_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=warn",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    // a second init (tests running `run()` twice) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
