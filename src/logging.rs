//! Logger initialisation shared by the runner binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// Messages from this crate are shown at debug level when `verbose` is
/// `true` and at info level otherwise; other crates only report warnings.
/// `RUST_LOG` takes precedence over both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let filter = format!("warn,{}={level}", env!("CARGO_CRATE_NAME"));

    let mut builder = Builder::from_env(Env::default().default_filter_or(filter));
    builder.format_timestamp_millis();

    // A logger installed earlier (by a test or the host) stays in place.
    if let Err(err) = builder.try_init() {
        log::debug!("logger already initialised: {err}");
    }
}
