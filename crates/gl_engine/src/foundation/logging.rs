//! Logging setup shared by the demo binaries

pub use log::{debug, error, info, trace, warn};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Log records go to
/// stderr so stdout only carries the driver version line.
pub fn init() {
    builder().init();
}

/// Initialize logging if no logger is installed yet
///
/// Returns `false` when another logger was already registered.
pub fn try_init() -> bool {
    builder().is_test(cfg!(test)).try_init().is_ok()
}

fn builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
}
