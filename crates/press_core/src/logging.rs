use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::PressConfig;

/// Prefix of the daily-rotated log files written under `log_dir`.
const LOG_FILE_PREFIX: &str = "press";

/// Initializes logging: compact output on stderr, plus a daily-rotated file
/// when `log_dir` is configured.
///
/// Stdout is left alone so the generated paths stay the only thing printed
/// there. `RUST_LOG` wins over the configured level. Returns the file writer
/// guard, which must be kept alive until the process exits.
pub fn init_logging(config: &PressConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));

    let (file_layer, guard) = match &config.log_dir {
        Some(logs_dir) => {
            std::fs::create_dir_all(logs_dir).with_context(|| {
                format!("Failed to create log directory: {}", logs_dir.display())
            })?;
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_creates_log_directory() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let logs_dir = tmp.path().join("nested").join("logs");
        assert!(!logs_dir.exists());

        let config = PressConfig {
            log_dir: Some(logs_dir.clone()),
            ..PressConfig::default()
        };

        // The global subscriber can only be installed once per process, so a
        // second test may get an error; the directory is created either way.
        let result = init_logging(&config);
        assert!(logs_dir.exists());

        match result {
            Ok(guard) => assert!(guard.is_some()),
            Err(e) => {
                let msg = e.to_string();
                assert!(msg.contains("logging"), "unexpected error: {msg}");
            }
        }
    }

    #[test]
    fn test_init_logging_unwritable_directory_fails() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let blocker = tmp.path().join("not_a_dir");
        std::fs::write(&blocker, "file").unwrap();

        let config = PressConfig {
            log_dir: Some(blocker.join("logs")),
            ..PressConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to create log directory"));
    }

    #[test]
    fn test_validated_levels_build_env_filters() {
        for level in crate::config::LOG_LEVELS {
            let config = PressConfig {
                log_level: level.to_ascii_uppercase(),
                ..PressConfig::default()
            };
            assert!(config.validate().is_ok(), "{level} rejected by validate");
            assert!(
                EnvFilter::try_new(config.log_level.to_ascii_lowercase()).is_ok(),
                "{level} rejected by EnvFilter"
            );
        }

        let chatty = PressConfig {
            log_level: "chatty".into(),
            ..PressConfig::default()
        };
        assert!(chatty.validate().is_err());
    }
}
