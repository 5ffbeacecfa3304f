//! File-based logging setup.
//!
//! The TUI owns the terminal, so log lines go to a file instead of stdout.
//! Built on `tracing`, with a daily-rotated file under `.logs/`.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "milkcrate";

/// Initialize logging to `.logs/milkcrate.YYYY-MM-DD.log`.
///
/// Levels default to DEBUG for this crate and WARN for everything else;
/// set `RUST_LOG` to override.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    // The writer only flushes while the guard lives; leak it so it lasts
    // the whole run.
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("milkcrate=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("logging initialized, writing to {}/", LOG_DIR);

    Ok(())
}
