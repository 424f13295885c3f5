//! Integration tests for the logging core
//!
//! These tests verify:
//! - Level filtering and the zero-side-effect short-circuit
//! - Console and file line formats, with and without OS error detail
//! - Configuration idempotence
//! - Message truncation and sanitization
//! - Fatal-record stack capture
//! - Syslog channel toggling

use errlog::{debug, error, info, log, log_errno, warn};
use errlog::{LogLevel, Logger, MAX_MESSAGE_LEN};
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Console capture target: the console sink writes to stderr by default,
/// so the tests swap in a shared in-memory stream.
#[derive(Clone, Default)]
struct CapturedStream(Arc<Mutex<Vec<u8>>>);

impl CapturedStream {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_logger() -> (Logger, CapturedStream) {
    let stream = CapturedStream::default();
    let logger = Logger::new();
    logger.set_console_stream(stream.clone());
    logger.set_color_enabled(false);
    (logger, stream)
}

#[test]
fn test_threshold_filters_lower_levels() {
    // Scenario: minimum level WARN drops DEBUG and INFO entirely
    let (logger, stream) = captured_logger();
    logger.set_min_level(LogLevel::Warn);

    debug!(logger, "not shown");
    info!(logger, "not shown either");
    assert!(stream.contents().is_empty(), "filtered calls must produce zero bytes");

    warn!(logger, "disk at {}%", 91);
    let contents = stream.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("[WARN]"));
    assert!(contents.contains("disk at 91%"));
}

#[test]
fn test_filtered_errno_call_produces_nothing() {
    let (logger, stream) = captured_logger();
    logger.set_min_level(LogLevel::Error);
    log_errno!(logger, LogLevel::Warn, 2, "suppressed");
    assert!(stream.contents().is_empty());
}

#[test]
fn test_default_program_name() {
    let (logger, stream) = captured_logger();
    info!(logger, "unnamed");
    assert!(stream.contents().contains(" program: unnamed"));
}

#[test]
fn test_program_name_appears_in_line() {
    let (logger, stream) = captured_logger();
    logger.set_program_name("webd");
    info!(logger, "request served");
    assert!(stream.contents().contains(" webd: request served"));
}

#[cfg(unix)]
#[test]
fn test_errno_detail_lines() {
    // Scenario: ENOENT attached to an error record
    let (logger, stream) = captured_logger();
    log_errno!(logger, LogLevel::Error, 2, "open failed");

    let contents = stream.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[ERROR]"));
    assert!(lines[0].ends_with("open failed (errno=2)"));
    assert!(lines[1].starts_with("        -> "));
    assert!(lines[1].to_lowercase().contains("no such file"));
}

#[test]
fn test_errno_detail_can_be_disabled() {
    let (logger, stream) = captured_logger();
    logger.set_include_error_details(false);
    log_errno!(logger, LogLevel::Error, 2, "open failed");

    let contents = stream.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(!contents.contains("errno"));
    assert!(!contents.contains("->"));
}

#[test]
fn test_unresolvable_errno_still_reports() {
    let (logger, stream) = captured_logger();
    log_errno!(logger, LogLevel::Error, 9999, "strange failure");

    // The description is platform worded ("Unknown error 9999",
    // "No error information", or the "errno 9999" fallback); the code
    // itself is always on the record line.
    let contents = stream.contents();
    assert!(contents.contains("(errno=9999)"));
    assert!(contents.contains("        -> "));
}

#[test]
fn test_file_sink_receives_uncolored_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("file_sink.log");

    let (logger, _stream) = captured_logger();
    logger.set_program_name("filetest");
    // Colors on for the console must not leak into the file
    logger.set_color_enabled(true);
    logger.open_file_sink(&log_file).expect("Failed to open file sink");

    warn!(logger, "spooling {} jobs", 4);
    log_errno!(logger, LogLevel::Error, 2, "open failed");
    logger.flush();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(!content.contains('\x1b'), "file output must be uncolored");

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("[WARN] filetest: spooling 4 jobs"));
    assert!(lines[1].ends_with("open failed (errno=2)"));
    assert!(lines[2].starts_with("        -> "));
}

#[test]
fn test_cleared_file_sink_stops_receiving() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("cleared.log");

    let (logger, _stream) = captured_logger();
    logger.open_file_sink(&log_file).expect("Failed to open file sink");
    info!(logger, "before clear");
    logger.clear_file_sink();
    info!(logger, "after clear");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains("before clear"));
    assert!(!content.contains("after clear"));
}

#[test]
fn test_caller_supplied_stream_as_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("caller_stream.log");

    let (logger, _stream) = captured_logger();
    let file = fs::File::create(&log_file).expect("Failed to create file");
    logger.set_file_sink(file);
    info!(logger, "through a caller-supplied handle");
    logger.flush();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains("through a caller-supplied handle"));
}

#[test]
fn test_custom_level_weights() {
    let (logger, stream) = captured_logger();
    logger.set_min_level(LogLevel::Warn);

    log!(logger, LogLevel::Custom(5), "below the bar");
    assert!(stream.contents().is_empty());

    log!(logger, LogLevel::Custom(35), "above the bar");
    let contents = stream.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("[LOG]"), "unknown weights use the generic label");
}

#[test]
fn test_configuration_is_idempotent() {
    let (logger, stream) = captured_logger();
    logger.set_min_level(LogLevel::Warn);
    logger.set_min_level(LogLevel::Warn);
    logger.set_program_name("twice");
    logger.set_program_name("twice");

    info!(logger, "dropped");
    warn!(logger, "kept");

    let contents = stream.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains(" twice: kept"));
}

#[test]
fn test_message_truncation() {
    let (logger, stream) = captured_logger();
    let oversized = "x".repeat(3 * MAX_MESSAGE_LEN);
    info!(logger, "{}", oversized);

    let contents = stream.contents();
    assert_eq!(contents.lines().count(), 1, "truncation must not drop the record");
    let emitted_xs = contents.matches('x').count();
    assert_eq!(emitted_xs, MAX_MESSAGE_LEN);
}

#[test]
fn test_multiline_message_stays_on_one_line() {
    let (logger, stream) = captured_logger();
    info!(logger, "user login\nFAKE [ERROR] injected\nsecond");

    let contents = stream.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("\\n"));
}

#[test]
fn test_positional_formatting_round_trip() {
    let (logger, stream) = captured_logger();
    warn!(logger, "{} {} {:.1}", 1, "two", 3.5);
    assert!(stream.contents().contains(&format!("{} {} {:.1}", 1, "two", 3.5)));
}

#[test]
fn test_timestamp_shapes() {
    let (logger, stream) = captured_logger();
    logger.set_use_utc(true);
    info!(logger, "utc stamped");

    let contents = stream.contents();
    let timestamp = contents.split(" [").next().unwrap();
    assert_eq!(timestamp.len(), 24);
    assert!(timestamp.ends_with('Z'));
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[10..11], "T");
    assert_eq!(&timestamp[19..20], ".");

    let (logger, stream) = captured_logger();
    logger.set_use_utc(false);
    info!(logger, "locally stamped");
    let contents = stream.contents();
    let timestamp = contents.split(" [").next().unwrap();
    assert_eq!(timestamp.len(), 23);
    assert!(!timestamp.ends_with('Z'));
}

#[cfg(unix)]
#[test]
fn test_fatal_record_renders_backtrace() {
    let (logger, stream) = captured_logger();
    logger.log(LogLevel::Fatal, "giving up");

    let contents = stream.contents();
    assert!(contents.contains("[FATAL]"));
    assert!(contents.contains("Backtrace ("));
}

#[test]
fn test_non_fatal_record_has_no_backtrace() {
    let (logger, stream) = captured_logger();
    error!(logger, "bad but survivable");
    assert!(!stream.contents().contains("Backtrace"));
}

#[cfg(unix)]
#[test]
fn test_syslog_toggle_cycle() {
    // Scenario: enable, disable, re-enable; the channel must come back
    // cleanly each time and messages must keep flowing to the console.
    let (logger, stream) = captured_logger();
    logger.set_program_name("errlog-inttest");

    logger.set_syslog_enabled(true);
    assert!(logger.syslog_enabled());
    info!(logger, "while enabled");

    logger.set_syslog_enabled(false);
    assert!(!logger.syslog_enabled());
    info!(logger, "while disabled");

    logger.set_syslog_enabled(true);
    assert!(logger.syslog_enabled());
    info!(logger, "enabled again");
    logger.set_syslog_enabled(false);

    assert_eq!(stream.contents().lines().count(), 3);
}

#[test]
fn test_syslog_enable_is_idempotent() {
    let (logger, _stream) = captured_logger();
    logger.set_syslog_enabled(true);
    logger.set_syslog_enabled(true);
    assert!(logger.syslog_enabled());
    logger.set_syslog_enabled(false);
    assert!(!logger.syslog_enabled());
}

#[test]
fn test_flush_is_safe_anytime() {
    let (logger, _stream) = captured_logger();
    logger.flush();
    info!(logger, "something");
    logger.flush();
    logger.flush();
}
