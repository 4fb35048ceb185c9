use thiserror::Error;

/// Errors raised while assembling the runtime settings of a generator.
#[derive(Error, Debug)]
pub enum PressError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid log level '{0}' (expected trace, debug, info, warn, error or off)")]
    LogLevel(String),
}
