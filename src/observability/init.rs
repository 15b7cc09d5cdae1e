//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Sets up a pipeline that:
/// 1. Filters events by `RUST_LOG`, then `config.trace_level`, then `info`
/// 2. Formats them as plain text without ANSI colors
/// 3. Writes to the rotating log file at [`Config::log_path`]
///
/// Fails silently if the log directory cannot be created: logging is never
/// allowed to stop the explorer from starting. Only the first call installs
/// a subscriber.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL)));

    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let writer = FileWriter::new(log_path);
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone());

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
