//! Centralised `tracing` setup for the server binary and integration tests.
//!
//! [`init_logging`] wires a rolling daily file sink (plus an optional stderr
//! copy) behind the global subscriber. Call it once near process start;
//! repeat calls are no-ops that return the originally resolved log path.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Output encoding for structured logs.
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Text,
    Json,
}

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Logical component name; becomes the log file prefix.
    pub app_name: &'static str,
    /// Explicit log directory. When `None`, `TALLY_LOG_DIR` is consulted,
    /// then `~/.local/share/<app_name>`.
    pub log_dir: Option<PathBuf>,
    /// Duplicate events to stderr so container logs stay useful.
    pub emit_stderr: bool,
    pub format: LogFormat,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            app_name: "tally",
            log_dir: None,
            emit_stderr: true,
            format: LogFormat::Text,
            default_filter: "info",
        }
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Returns the log file path for the current day.
pub fn init_logging(config: LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let dir = resolve_log_dir(config.app_name, config.log_dir.as_deref());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let prefix = format!("{}.log", config.app_name);
    let appender = rolling::daily(&dir, &prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    // `Option<Layer>` keeps the stderr copy optional without duplicating the
    // whole registry chain per combination.
    let init_result = match config.format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .with(
                config
                    .emit_stderr
                    .then(|| fmt::layer().with_writer(std::io::stderr)),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .with(
                config
                    .emit_stderr
                    .then(|| fmt::layer().json().with_writer(std::io::stderr)),
            )
            .try_init(),
    };
    init_result.map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    // tracing-appender suffixes the prefix with the current date.
    let today = Local::now().format("%Y-%m-%d").to_string();
    let full_path = dir.join(format!("{prefix}.{today}"));
    let _ = LOG_PATH.set(full_path.clone());
    Ok(full_path)
}

fn resolve_log_dir(app_name: &str, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return expand_home(dir);
    }
    if let Ok(env_dir) = std::env::var("TALLY_LOG_DIR") {
        return expand_home(Path::new(&env_dir));
    }
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(app_name)
    } else {
        PathBuf::from(".").join(app_name)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}
