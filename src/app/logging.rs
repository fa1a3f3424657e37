use tracing_subscriber::EnvFilter;

use crate::domain::paths::LOG_FILTER_VAR;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. The filter comes from `TAKU_LOG`.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when taku is embedded as a library.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
