//! Error types for the logging core
//!
//! Sink operations report failures through [`LoggerError`], but the emission
//! pipeline swallows them: logging is best-effort and never surfaces an
//! error to the calling code.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink-specific failure
    #[error("Sink error for '{sink}': {message}")]
    Sink { sink: String, message: String },

    /// System-log channel failure
    #[error("Syslog error: {0}")]
    Syslog(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a syslog error
    pub fn syslog<S: Into<String>>(msg: S) -> Self {
        LoggerError::Syslog(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
