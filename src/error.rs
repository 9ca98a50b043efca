use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{check}: expected {expected}, got {actual}")]
    Mismatch {
        check: &'static str,
        expected: String,
        actual: String,
    },

    #[error("start value {0} leaves no room for two increments")]
    StartOutOfRange(i32),

    #[error("failed to open log file: {0}")]
    LogFile(#[from] tracing_appender::rolling::InitError),

    #[error("failed to initialise tracing: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}
