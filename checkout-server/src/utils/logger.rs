//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set. Log files roll daily
/// under `log_dir`; an unusable directory falls back to stdout.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = match log_dir.and_then(prepare_log_dir) {
        Some(dir) => BoxMakeWriter::new(tracing_appender::rolling::daily(dir, "checkout-server")),
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_writer(writer);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn prepare_log_dir(dir: &str) -> Option<&str> {
    let path = Path::new(dir);
    if !path.exists() && std::fs::create_dir_all(path).is_err() {
        eprintln!("Cannot create log directory {}, logging to stdout", dir);
        return None;
    }
    Some(dir)
}
