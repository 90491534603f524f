//! Tracing setup for binaries and tests embedding the engine.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "PLANGATE_LOG";

const DEFAULT_FILTER: &str = "plangate=info";

/// Install a fmt subscriber filtered by `PLANGATE_LOG`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
