//! Output sinks for formatted log records

pub mod console;
pub mod file;
pub mod syslog;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use syslog::SyslogSink;

use crate::core::{error::Result, log_record::LogRecord};

/// An output destination for a formatted record.
///
/// Implementations apply their own presentation (color, plain text, syslog
/// priorities) to the record. Write failures propagate to the dispatcher,
/// which swallows them: delivery is best-effort.
pub trait Sink: Send {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
