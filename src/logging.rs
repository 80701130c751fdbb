//! Logger setup for hosts embedding the decoder.

use crate::config::LoggingConfig;

/// Install an `env_logger` at the configured level.
///
/// `RUST_LOG` still overrides the level when set. Calling this more than
/// once is harmless; only the first logger sticks.
pub fn init(config: &LoggingConfig) {
    let _ = env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .try_init();
}

/// Logger for tests: captured output, ignores repeated initialisation
pub fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
