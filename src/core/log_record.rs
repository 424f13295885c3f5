//! Log record structure
//!
//! A [`LogRecord`] is built fresh for every emitted message, handed to the
//! sinks, and discarded. It is never stored.

use super::log_level::LogLevel;
use super::os_error;
use super::timestamp::TimestampMode;

/// Upper bound on a formatted message; longer output is truncated on a
/// character boundary.
pub const MAX_MESSAGE_LEN: usize = 2048;

/// OS error payload attached to a record.
#[derive(Debug, Clone)]
pub struct OsErrorDetail {
    pub code: i32,
    pub description: String,
}

/// One fully rendered emission, ready for sink dispatch.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub timestamp: String,
    pub program: String,
    pub message: String,
    pub os_error: Option<OsErrorDetail>,
}

impl LogRecord {
    /// Sanitize a message to keep one emission on one line.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a crafted message cannot fake additional log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Truncate to `MAX_MESSAGE_LEN` bytes without splitting a character.
    fn truncate_message(message: &mut String) {
        if message.len() <= MAX_MESSAGE_LEN {
            return;
        }
        let mut end = MAX_MESSAGE_LEN;
        while end > 0 && !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }

    pub fn new(
        level: LogLevel,
        program: impl Into<String>,
        message: impl Into<String>,
        os_error_code: Option<i32>,
        timestamps: TimestampMode,
    ) -> Self {
        let mut message = Self::sanitize_message(&message.into());
        Self::truncate_message(&mut message);

        Self {
            level,
            timestamp: timestamps.render_now(),
            program: program.into(),
            message,
            os_error: os_error_code.map(|code| OsErrorDetail {
                code,
                description: os_error::describe(code),
            }),
        }
    }

    /// The uncolored console/file line, without a trailing newline:
    /// `<timestamp> [<LEVEL>] <program>: <message>` plus the
    /// ` (errno=<code>)` suffix when an OS error is attached.
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "{} [{}] {}: {}",
            self.timestamp,
            self.level.label(),
            self.program,
            self.message
        );
        if let Some(ref err) = self.os_error {
            line.push_str(&format!(" (errno={})", err.code));
        }
        line
    }

    /// The indented error-description line, when an OS error is attached.
    pub fn detail_line(&self) -> Option<String> {
        self.os_error
            .as_ref()
            .map(|err| format!("        -> {}", err.description))
    }

    /// The system-log body: no timestamp, the daemon stamps its own.
    pub fn syslog_text(&self) -> String {
        match self.os_error {
            Some(ref err) => format!(
                "{}: {} (errno={}) -> {}",
                self.program, self.message, err.code, err.description
            ),
            None => format!("{}: {}", self.program, self.message),
        }
    }
}
