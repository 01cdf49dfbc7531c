//! Diagnostics for judge tools go to stderr, never stdout: a generator's
//! stdout is the test itself.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. `directives` uses the `RUST_LOG` syntax; an
/// unparsable value falls back to [`DEFAULT_LEVEL`].
pub fn init(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
