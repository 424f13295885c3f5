//! Main logger implementation
//!
//! One [`Logger`] owns the whole emission pipeline: level filtering,
//! record formatting, synchronized dispatch to console/file/syslog, stack
//! capture on fatal records, and the controlled-termination helpers.
//!
//! A single mutex per logger serializes formatting and dispatch, so
//! concurrent callers never interleave their lines on any sink.
//! Configuration setters take the same lock; only the minimum-level check
//! runs lock-free, which means a filtered-out call has no observable side
//! effects at all. Sink writes are blocking and have no timeout: a slow
//! file or syslog daemon stalls every concurrent caller until the write
//! completes.

use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::stack_trace;
use super::timestamp::TimestampMode;
use crate::sinks::{ConsoleSink, FileSink, Sink, SyslogSink};
use parking_lot::Mutex;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

/// Label used when no program name has been configured.
pub const DEFAULT_PROGRAM_NAME: &str = "program";

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

struct LoggerCore {
    program_name: Option<String>,
    min_level: LogLevel,
    timestamps: TimestampMode,
    include_error_details: bool,
    console: ConsoleSink,
    file: Option<FileSink>,
    syslog: Option<SyslogSink>,
}

impl LoggerCore {
    fn effective_program_name(&self) -> String {
        self.program_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
    }

    fn emit(&mut self, level: LogLevel, os_error_code: Option<i32>, message: String) {
        let code = if self.include_error_details {
            os_error_code
        } else {
            None
        };
        let record = LogRecord::new(
            level,
            self.effective_program_name(),
            message,
            code,
            self.timestamps,
        );

        // Best-effort dispatch: a failing sink never disturbs the others
        // and nothing is reported back to the caller.
        let _ = self.console.write(&record);
        if let Some(ref mut file) = self.file {
            let _ = file.write(&record);
        }
        if let Some(ref mut syslog) = self.syslog {
            let _ = syslog.write(&record);
        }

        if level.is_fatal() {
            let _ = stack_trace::render(self.console.stream_mut());
        }
    }

    fn flush(&mut self) {
        let _ = self.console.flush();
        if let Some(ref mut file) = self.file {
            let _ = file.flush();
        }
        if let Some(ref mut syslog) = self.syslog {
            let _ = syslog.flush();
        }
    }
}

pub struct Logger {
    /// Mirror of the configured minimum weight, read without the lock on
    /// every emission.
    min_weight: AtomicU8,
    core: Mutex<LoggerCore>,
}

impl Logger {
    /// Create a logger with the default configuration: most permissive
    /// level, colors on, local timestamps, error details included, console
    /// only.
    #[must_use]
    pub fn new() -> Self {
        let min_level = LogLevel::Debug;
        Self {
            min_weight: AtomicU8::new(min_level.weight()),
            core: Mutex::new(LoggerCore {
                program_name: None,
                min_level,
                timestamps: TimestampMode::Local,
                include_error_details: true,
                console: ConsoleSink::new(),
                file: None,
                syslog: None,
            }),
        }
    }

    /// The process-wide default instance, created on first use.
    pub fn global() -> &'static Logger {
        GLOBAL_LOGGER.get_or_init(Logger::new)
    }

    // ---- Configuration ----

    pub fn set_program_name(&self, name: impl Into<String>) {
        self.core.lock().program_name = Some(name.into());
    }

    /// The label stamped on every record.
    pub fn program_name(&self) -> String {
        self.core.lock().effective_program_name()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        let mut core = self.core.lock();
        core.min_level = level;
        self.min_weight.store(level.weight(), Ordering::Relaxed);
    }

    pub fn min_level(&self) -> LogLevel {
        self.core.lock().min_level
    }

    pub fn set_color_enabled(&self, enabled: bool) {
        self.core.lock().console.set_colors(enabled);
    }

    pub fn color_enabled(&self) -> bool {
        self.core.lock().console.colors_enabled()
    }

    pub fn set_use_utc(&self, use_utc: bool) {
        self.core.lock().timestamps = if use_utc {
            TimestampMode::Utc
        } else {
            TimestampMode::Local
        };
    }

    pub fn set_include_error_details(&self, enabled: bool) {
        self.core.lock().include_error_details = enabled;
    }

    /// Install a file sink over an already open stream. Replaces any
    /// previous file sink; the previous stream is flushed and dropped.
    /// Callers that must keep the underlying handle open pass a
    /// `try_clone()`-ed one.
    pub fn set_file_sink<W: Write + Send + 'static>(&self, writer: W) {
        self.core.lock().file = Some(FileSink::new(writer));
    }

    /// Convenience: open (append, create) a log file at `path` and install
    /// it as the file sink.
    pub fn open_file_sink(&self, path: impl Into<PathBuf>) -> crate::core::error::Result<()> {
        let sink = FileSink::create(path)?;
        self.core.lock().file = Some(sink);
        Ok(())
    }

    /// Disable the file sink. The wrapped stream is flushed and dropped.
    pub fn clear_file_sink(&self) {
        self.core.lock().file = None;
    }

    /// Open or close the system-log channel. Opening uses the current
    /// program name as the syslog ident; closing releases the channel, and
    /// a later enable reopens it cleanly.
    pub fn set_syslog_enabled(&self, enabled: bool) {
        let mut core = self.core.lock();
        if enabled {
            if core.syslog.is_none() {
                let ident = core.effective_program_name();
                if let Ok(sink) = SyslogSink::open(&ident) {
                    core.syslog = Some(sink);
                }
            }
        } else {
            // Drop closes the channel.
            core.syslog = None;
        }
    }

    pub fn syslog_enabled(&self) -> bool {
        self.core.lock().syslog.is_some()
    }

    /// Redirect console output away from stderr. Used by embedders and the
    /// test suites; the default destination is always stderr.
    pub fn set_console_stream<W: Write + Send + 'static>(&self, stream: W) {
        self.core.lock().console.set_stream(Box::new(stream));
    }

    // ---- Emission ----

    /// Emit a message at `level`. Below-minimum calls return immediately
    /// with zero side effects.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.emit(level, None, message.into());
    }

    /// Emit a message at `level` with an attached OS error code.
    pub fn log_os_error(&self, level: LogLevel, code: i32, message: impl Into<String>) {
        self.emit(level, Some(code), message.into());
    }

    fn emit(&self, level: LogLevel, os_error_code: Option<i32>, message: String) {
        if level.weight() < self.min_weight.load(Ordering::Relaxed) {
            return;
        }
        self.core.lock().emit(level, os_error_code, message);
    }

    /// Force all sinks to make buffered output visible. Failures are
    /// swallowed like every other sink failure.
    pub fn flush(&self) {
        self.core.lock().flush();
    }

    // ---- Termination ----

    /// Emit a FATAL record, flush every sink, and exit with the
    /// conventional failure status. Never returns.
    pub fn fatal_exit(&self, message: impl Into<String>) -> ! {
        self.log(LogLevel::Fatal, message);
        self.flush();
        process::exit(1);
    }

    /// Like [`fatal_exit`](Self::fatal_exit), attaching the current OS
    /// error code as the cause.
    pub fn fatal_exit_os_error(&self, message: impl Into<String>) -> ! {
        let code = last_os_error_code();
        self.log_os_error(LogLevel::Fatal, code, message);
        self.flush();
        process::exit(1);
    }

    /// Report a failed assertion and abort the process.
    ///
    /// The record carries the stringified condition, the call site, and
    /// the current OS error code. The code is attached even when the
    /// assertion has nothing to do with an OS call, so it may describe an
    /// earlier, unrelated failure; callers read it as best-effort context
    /// only. Aborting (rather than exiting) raises the platform fault
    /// signal so external tooling can take a core dump.
    pub fn assertion_failure(
        &self,
        condition: &str,
        file: &str,
        line: u32,
        message: impl Into<String>,
    ) -> ! {
        let code = last_os_error_code();
        self.log_os_error(
            LogLevel::Fatal,
            code,
            format!(
                "Assertion failed: {} at {}:{}: {}",
                condition,
                file,
                line,
                message.into()
            ),
        );
        self.flush();
        process::abort();
    }

    /// Report a guarded call whose result matched the failure sentinel,
    /// then exit with the failure status. The current OS error code is
    /// taken as the cause.
    pub fn sentinel_failure(&self, expression: &str) -> ! {
        self.fatal_exit_os_error(format!("{} failed", expression))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn last_os_error_code() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
