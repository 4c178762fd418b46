//! Logging Infrastructure
//!
//! `tracing` subscriber setup: stdout by default, daily rolling files when a
//! log directory is configured.

use std::path::Path;

/// Initialize the logger with optional level and file output.
///
/// An unparsable level falls back to `info`. A `log_dir` that does not exist
/// is ignored and logs go to stdout.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "menu-engine");
            subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
            return Ok(());
        }
    }

    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
