use crate::error::{Result, TaskheapError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "taskheap.log";

/// Filter used when `RUST_LOG` is unset. Warnings only by default so command
/// output stays readable.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("taskheap={}", level)
}

/// Installs the global subscriber: compact lines on stderr, plus daily-rolled
/// JSON lines in `log_file` when given.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let installed = match log_file {
        Some(log_path) => {
            let dir = match log_path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)?;
            let file_name = log_path
                .file_name()
                .unwrap_or_else(|| OsStr::new(LOG_FILE_NAME));

            let file_layer = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, file_name))
                .with_ansi(false)
                .json();

            subscriber.with(file_layer).try_init()
        }
        None => subscriber.try_init(),
    };

    installed.map_err(|e| TaskheapError::Config(format!("Failed to set up logging: {}", e)))
}
