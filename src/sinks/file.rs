//! File sink implementation
//!
//! Wraps a caller-supplied writable stream. Every record is flushed as soon
//! as it is written so a fatal exit right after the write loses nothing.
//! Output is always uncolored.

use crate::core::{LogRecord, Result};
use crate::sinks::Sink;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileSink {
    writer: Box<dyn Write + Send>,
}

impl FileSink {
    /// Wrap an already open stream. The stream is dropped when the sink is
    /// cleared or replaced; callers that need to keep the underlying file
    /// handle should pass a `try_clone()`-ed handle.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Open (append, create) a log file at `path`.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
        })
    }

    fn format_text(record: &LogRecord) -> String {
        let mut text = record.format_line();
        if let Some(detail) = record.detail_line() {
            text.push('\n');
            text.push_str(&detail);
        }
        text.push('\n');
        text
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let text = Self::format_text(record);
        self.writer.write_all(text.as_bytes())?;
        // Make the record durable immediately.
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
