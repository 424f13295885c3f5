//! # errlog
//!
//! Structured logging and fatal-error reporting for programs that need a
//! last line of diagnostic defense.
//!
//! ## Features
//!
//! - **Severity filtering**: five weighted levels plus custom weights,
//!   with a lock-free minimum-level check
//! - **Multiple sinks**: stderr console (with colors), a caller-supplied
//!   log file, and the POSIX system log
//! - **OS error enrichment**: attach an `errno`-style code and get the
//!   platform description rendered alongside the message
//! - **Fatal diagnostics**: bounded stack capture on fatal records, plus
//!   `die!`/`assert_or_die!`/`try_or_die!` termination helpers
//! - **Thread safe**: one lock per logger serializes dispatch, so lines
//!   never interleave
//!
//! ## Quick start
//!
//! ```
//! use errlog::{info, warn, LogLevel, Logger};
//!
//! let logger = Logger::new();
//! logger.set_program_name("demo");
//! logger.set_min_level(LogLevel::Info);
//!
//! info!(logger, "starting up");
//! warn!(logger, "disk at {}%", 91);
//! ```
//!
//! Where process-wide ergonomics are wanted, [`Logger::global()`] returns
//! a lazily-created shared instance.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogLevel, LogRecord, Logger, LoggerError, OsErrorDetail, Result, TimestampMode,
        DEFAULT_PROGRAM_NAME, MAX_MESSAGE_LEN,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, Sink, SyslogSink};
}

pub use crate::core::{
    LogLevel, LogRecord, Logger, LoggerError, OsErrorDetail, Result, TimestampMode,
    DEFAULT_PROGRAM_NAME, MAX_MESSAGE_LEN,
};
pub use crate::sinks::{ConsoleSink, FileSink, Sink, SyslogSink};
