//! Console sink implementation
//!
//! Writes every record to stderr (never stdout). The stream is replaceable
//! with any `Write + Send` target, which embedding applications and the
//! test suites use to capture output.

use crate::core::{LogRecord, Result};
use crate::sinks::Sink;
use std::io::{self, Write};

pub struct ConsoleSink {
    stream: Box<dyn Write + Send>,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stream: Box::new(io::stderr()),
            use_colors: true,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            stream: Box::new(io::stderr()),
            use_colors,
        }
    }

    pub fn set_colors(&mut self, use_colors: bool) {
        self.use_colors = use_colors;
    }

    pub fn colors_enabled(&self) -> bool {
        self.use_colors
    }

    /// Redirect console output away from stderr.
    pub fn set_stream(&mut self, stream: Box<dyn Write + Send>) {
        self.stream = stream;
    }

    pub(crate) fn stream_mut(&mut self) -> &mut dyn Write {
        &mut *self.stream
    }

    /// Format as text with optional colors.
    ///
    /// The colored segment is the timestamp plus level tag; the error
    /// detail line, when present, is painted whole.
    fn format_text(&self, record: &LogRecord) -> String {
        let head = format!("{} [{}]", record.timestamp, record.level.label());
        let head = if self.use_colors {
            record.level.paint(&head).to_string()
        } else {
            head
        };

        let mut text = format!("{} {}: {}", head, record.program, record.message);
        if let Some(ref err) = record.os_error {
            text.push_str(&format!(" (errno={})", err.code));
            let detail = format!("        -> {}", err.description);
            text.push('\n');
            if self.use_colors {
                text.push_str(&record.level.paint(&detail).to_string());
            } else {
                text.push_str(&detail);
            }
        }
        text.push('\n');
        text
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let text = self.format_text(record);
        self.stream.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, TimestampMode};

    fn record_with_errno() -> LogRecord {
        LogRecord::new(
            LogLevel::Error,
            "testprog",
            "open failed",
            Some(2),
            TimestampMode::Utc,
        )
    }

    #[test]
    fn test_plain_format_single_line() {
        let sink = ConsoleSink::with_colors(false);
        let record = LogRecord::new(
            LogLevel::Info,
            "testprog",
            "hello",
            None,
            TimestampMode::Utc,
        );
        let text = sink.format_text(&record);
        assert!(text.ends_with("testprog: hello\n"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_errno_adds_detail_line() {
        let sink = ConsoleSink::with_colors(false);
        let text = sink.format_text(&record_with_errno());
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("(errno=2)"));
        assert!(text.lines().nth(1).unwrap().starts_with("        -> "));
    }

    #[derive(Clone, Default)]
    struct SharedBuf(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_written_bytes_match_format() {
        let record = record_with_errno();
        let buf = SharedBuf::default();

        let mut sink = ConsoleSink::with_colors(false);
        sink.set_stream(Box::new(buf.clone()));
        sink.write(&record).unwrap();

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, sink.format_text(&record));
    }
}
