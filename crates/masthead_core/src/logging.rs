//! Core logging bootstrap and configuration.
//!
//! # Responsibility
//! - Resolve log settings from explicit values or the process environment.
//! - Start the `flexi_logger` backend exactly once per process.
//!
//! # Invariants
//! - Logging init is idempotent for an identical `LogConfig`.
//! - Re-initialization with a different level or target is rejected.
//! - Logging initialization must not panic.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "MASTHEAD_LOG_LEVEL";
/// Environment variable enabling file logging into an absolute directory.
pub const LOG_DIR_ENV: &str = "MASTHEAD_LOG_DIR";

const LOG_FILE_BASENAME: &str = "masthead";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    config: LogConfig,
    _logger: LoggerHandle,
}

/// Normalized logging settings.
///
/// `log_dir = None` writes to stderr; `Some(dir)` writes rotating files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    level: &'static str,
    log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Builds a config from raw values.
    ///
    /// # Errors
    /// - Unsupported `level`.
    /// - Empty or relative `log_dir`.
    pub fn new(level: &str, log_dir: Option<&str>) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: log_dir.map(normalize_log_dir).transpose()?,
        })
    }

    /// Reads `MASTHEAD_LOG_LEVEL` and `MASTHEAD_LOG_DIR`, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty());
        Self::new(&level, log_dir.as_deref())
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Initializes core logging.
///
/// # Errors
/// - Returns an error when a different config is already active.
/// - Returns an error when the directory cannot be created or the backend
///   fails to start.
pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let state = LOGGING_STATE.get_or_try_init(|| start_logger(config))?;

    if state.config != *config {
        return Err(format!(
            "logging already initialized with {}; refusing to switch to {}",
            describe(&state.config),
            describe(config)
        ));
    }
    Ok(())
}

/// Returns the active logging config, or `None` before initialization.
pub fn logging_status() -> Option<LogConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &LogConfig) -> Result<LoggingState, String> {
    let logger = Logger::try_with_str(config.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?;

    let logger = match config.log_dir.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        None => logger.log_to_stderr(),
    };

    let handle = logger
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=core_init module=core status=ok level={} target={} version={}",
        config.level,
        config
            .log_dir
            .as_deref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "stderr".to_string()),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config: config.clone(),
        _logger: handle,
    })
}

fn describe(config: &LogConfig) -> String {
    match config.log_dir.as_deref() {
        Some(dir) => format!("level `{}` at `{}`", config.level, dir.display()),
        None => format!("level `{}` on stderr", config.level),
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, init_logging, logging_status, normalize_level, normalize_log_dir,
        LogConfig, LOG_DIR_ENV, LOG_LEVEL_ENV,
    };

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").expect("INFO should normalize"), "info");
        assert_eq!(
            normalize_level(" warning ").expect("warning should normalize"),
            "warn"
        );
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn normalize_log_dir_rejects_relative_path() {
        let error = normalize_log_dir("logs/dev").expect_err("relative paths must be rejected");
        assert!(error.contains("absolute"));
    }

    #[test]
    fn from_lookup_uses_defaults_when_unset() {
        let config = LogConfig::from_lookup(|_| None).expect("defaults should be valid");
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level(), default_log_level());
        assert!(config.log_dir().is_none());
    }

    #[test]
    fn from_lookup_reads_level_and_ignores_blank_dir() {
        let config = LogConfig::from_lookup(|key| match key {
            LOG_LEVEL_ENV => Some("Warning".to_string()),
            LOG_DIR_ENV => Some("  ".to_string()),
            _ => None,
        })
        .expect("config should parse");
        assert_eq!(config.level(), "warn");
        assert!(config.log_dir().is_none());
    }

    #[test]
    fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
        let log_dir = tempfile::tempdir().expect("temp dir");
        let log_dir_str = log_dir.path().to_str().expect("utf-8 temp dir");
        let config = LogConfig::new("info", Some(log_dir_str)).expect("valid config");

        init_logging(&config).expect("first init should succeed");
        init_logging(&config).expect("same config should be idempotent");

        let level_conflict = LogConfig::new("debug", Some(log_dir_str)).expect("valid config");
        let error = init_logging(&level_conflict).expect_err("level conflict should fail");
        assert!(error.contains("refusing to switch"));

        let target_conflict = LogConfig::new("info", None).expect("valid config");
        let error = init_logging(&target_conflict).expect_err("target conflict should fail");
        assert!(error.contains("refusing to switch"));

        assert_eq!(logging_status(), Some(config));
    }
}
