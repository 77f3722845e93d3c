use std::path::PathBuf;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// Occurs if a global tracing subscriber has already been initialized in the current process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Invalid configuration supplied to the logger builder.
    #[error("invalid logger configuration: {0}")]
    InvalidConfiguration(String),

    /// Failure while preparing the log directory.
    #[error("failed to prepare log directory {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
