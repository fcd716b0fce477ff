//! Logging setup: warnings to stderr, everything the filter admits to a
//! daily-rolling log file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_DIR_ENV: &str = "PROSEMETRY_LOG_DIR";
const LOG_PATH_ENV: &str = "PROSEMETRY_LOG_PATH";
const LOG_FILE_PREFIX: &str = "prosemetry.log";

/// Where log files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the rolling log files.
    pub log_dir: Option<PathBuf>,
    /// File name prefix for the rolling appender.
    pub file_prefix: String,
}

impl ObservabilityConfig {
    /// Resolve the log destination.
    ///
    /// `PROSEMETRY_LOG_PATH` wins, then `PROSEMETRY_LOG_DIR`, then the
    /// configured directory, then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
            prosemetry_core::config::user_data_local_dir()
                .map(|dir| dir.join("logs").into_std_path_buf()),
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        fallback_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(name) = path.file_name()
        {
            return Self {
                log_dir: Some(
                    path.parent()
                        .filter(|p| !p.as_os_str().is_empty())
                        .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
                ),
                file_prefix: name.to_string_lossy().into_owned(),
            };
        }
        Self {
            log_dir: env_dir.or(config_dir).or(fallback_dir),
            file_prefix: LOG_FILE_PREFIX.to_string(),
        }
    }
}

/// Build the filter: `RUST_LOG` if set, else the CLI flags, else the
/// configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(flag_level(quiet, verbose).unwrap_or(config_level))
}

fn flag_level(quiet: bool, verbose: u8) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered log lines are flushed.
/// When no log directory can be created, only the stderr layer is installed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    let log_dir = config
        .log_dir
        .as_deref()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok());
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_splits_into_dir_and_prefix() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/prose/run.log")),
            Some(PathBuf::from("/ignored")),
            None,
            None,
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/prose")));
        assert_eq!(config.file_prefix, "run.log");
    }

    #[test]
    fn bare_log_path_uses_current_dir() {
        let config =
            ObservabilityConfig::resolve(Some(PathBuf::from("run.log")), None, None, None);
        assert_eq!(config.log_dir, Some(PathBuf::from(".")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/from-env")),
            Some(PathBuf::from("/from-config")),
            Some(PathBuf::from("/fallback")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/from-env")));
        assert_eq!(config.file_prefix, LOG_FILE_PREFIX);
    }

    #[test]
    fn fallback_dir_used_last() {
        let config =
            ObservabilityConfig::resolve(None, None, None, Some(PathBuf::from("/fallback")));
        assert_eq!(config.log_dir, Some(PathBuf::from("/fallback")));
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(flag_level(true, 2), Some("error"));
        assert_eq!(flag_level(false, 0), None);
        assert_eq!(flag_level(false, 1), Some("debug"));
        assert_eq!(flag_level(false, 3), Some("trace"));
    }
}
