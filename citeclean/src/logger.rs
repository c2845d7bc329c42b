// citeclean/src/logger.rs
//! Once-only logger initialization for the CLI and its tests.

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` exactly once.
///
/// With `Some(level)` the given filter overrides `RUST_LOG`; with `None` the
/// environment is honored, defaulting to `info`. Safe to call repeatedly
/// (later calls are no-ops), which is what the integration tests rely on.
pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        if let Some(level) = level {
            builder.filter_level(level);
        }
        builder.format_timestamp(None).try_init().ok();
    });
}
