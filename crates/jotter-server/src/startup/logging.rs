//! Logging setup for the Jotter server
//!
//! One stdout layer and one optional rolling file layer, composed on a
//! `tracing` registry. File output is enabled by pointing
//! `jotter.logging.dir` (or `JOTTER_LOG_DIR`) at a directory.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Log rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    /// Rotate daily (default)
    Daily,
    /// Rotate hourly
    Hourly,
    /// Never rotate (single file)
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "daily" => Some(LogRotation::Daily),
            "hourly" => Some(LogRotation::Hourly),
            "never" => Some(LogRotation::Never),
            _ => None,
        }
    }
}

/// Logging configuration for the entire application.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level when `RUST_LOG` is unset
    pub level: Level,
    /// Log directory; file logging is disabled when unset
    pub dir: Option<PathBuf>,
    /// Log file name inside `dir`
    pub file_name: String,
    /// Rotation policy for the log file
    pub rotation: LogRotation,
    /// Enable stdout output
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            dir: None,
            file_name: "jotter.log".to_string(),
            rotation: LogRotation::Daily,
            stdout: true,
        }
    }
}

impl LoggingConfig {
    /// Create from application configuration values, falling back to the
    /// `JOTTER_LOG_*` environment variables and then to defaults.
    pub fn from_config(
        level: Option<String>,
        dir: Option<String>,
        file_name: Option<String>,
        rotation: Option<String>,
        stdout: Option<bool>,
    ) -> Self {
        let defaults = Self::default();

        let level = level
            .or_else(|| std::env::var("JOTTER_LOG_LEVEL").ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.level);

        let dir = dir
            .or_else(|| std::env::var("JOTTER_LOG_DIR").ok())
            .map(PathBuf::from);

        let file_name = file_name.unwrap_or(defaults.file_name);

        let rotation = rotation
            .or_else(|| std::env::var("JOTTER_LOG_ROTATION").ok())
            .and_then(|v| LogRotation::parse(&v))
            .unwrap_or(defaults.rotation);

        let stdout = stdout
            .or_else(|| {
                std::env::var("JOTTER_LOG_STDOUT")
                    .ok()
                    .map(|v| v.to_lowercase() != "false" && v != "0")
            })
            .unwrap_or(defaults.stdout);

        Self {
            level,
            dir,
            file_name,
            rotation,
            stdout,
        }
    }
}

/// Guard that keeps the logging system alive.
///
/// Holds the file appender worker guards. Must be kept alive for the
/// duration of the application; dropping it flushes buffered log output.
pub struct LoggingGuard {
    _file_guards: Vec<WorkerGuard>,
}

/// Initialize the logging system.
///
/// Sets up a stdout layer (optional) and a rolling file layer (when a log
/// directory is configured), each with its own [`EnvFilter`] so `RUST_LOG`
/// can override the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    let mut guards: Vec<WorkerGuard> = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.stdout {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
        let stdout_layer = fmt::layer().with_target(true).with_filter(filter);
        layers.push(Box::new(stdout_layer));
    }

    if let Some(dir) = &config.dir {
        std::fs::create_dir_all(dir)?;

        let appender = RollingFileAppender::new(config.rotation.into(), dir, &config.file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_ansi(false)
            .with_filter(filter);
        layers.push(Box::new(file_layer));
    }

    // try_init so a subscriber installed earlier (e.g. by a test harness)
    // does not abort startup
    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    if let Some(dir) = &config.dir {
        tracing::info!(
            log_dir = %dir.display(),
            file = %config.file_name,
            "File logging initialized"
        );
    }

    Ok(LoggingGuard {
        _file_guards: guards,
    })
}
