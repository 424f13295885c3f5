//! Core logger types

pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod os_error;
pub mod stack_trace;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::{LogRecord, OsErrorDetail, MAX_MESSAGE_LEN};
pub use logger::{Logger, DEFAULT_PROGRAM_NAME};
pub use timestamp::TimestampMode;
