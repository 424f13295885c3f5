//! Logging and termination macros.
//!
//! The logging macros forward `format!`-style arguments to a logger, so
//! format strings and argument counts are checked at compile time. The
//! termination macros additionally capture the failing expression text and
//! the call site.
//!
//! # Examples
//!
//! ```
//! use errlog::prelude::*;
//! use errlog::{info, warn};
//!
//! let logger = Logger::new();
//! logger.set_program_name("demo");
//!
//! info!(logger, "listening on port {}", 8080);
//! warn!(logger, "retry {} of {}", 2, 5);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use errlog::prelude::*;
/// # let logger = Logger::new();
/// use errlog::log;
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a message at an explicit level with an attached OS error code.
///
/// # Examples
///
/// ```
/// # use errlog::prelude::*;
/// # let logger = Logger::new();
/// use errlog::log_errno;
/// log_errno!(logger, LogLevel::Error, 2, "could not open {}", "data.db");
/// ```
#[macro_export]
macro_rules! log_errno {
    ($logger:expr, $level:expr, $code:expr, $($arg:tt)+) => {
        $logger.log_os_error($level, $code, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message without terminating. A stack snapshot is
/// rendered to the console sink.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Emit a FATAL record, flush, and exit with the failure status.
///
/// # Examples
///
/// ```no_run
/// # use errlog::prelude::*;
/// # let logger = Logger::new();
/// use errlog::die;
/// die!(logger, "unrecoverable: {}", "state corrupted");
/// ```
#[macro_export]
macro_rules! die {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_exit(format!($($arg)+))
    };
}

/// Emit a FATAL record carrying the current OS error code, flush, and exit
/// with the failure status.
///
/// # Examples
///
/// ```no_run
/// # use errlog::prelude::*;
/// # let logger = Logger::new();
/// use errlog::die_errno;
/// if std::fs::File::open("/etc/passwd.bak").is_err() {
///     die_errno!(logger, "cannot open backup");
/// }
/// ```
#[macro_export]
macro_rules! die_errno {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_exit_os_error(format!($($arg)+))
    };
}

/// Runtime assertion that aborts on failure.
///
/// On a false condition this emits a FATAL record with the condition text,
/// the call site, the message, and the current OS error code, then aborts
/// the process (raising the platform fault signal rather than exiting
/// cleanly). The check is always active; it does not compile out in
/// release builds.
///
/// # Examples
///
/// ```
/// # use errlog::prelude::*;
/// # let logger = Logger::new();
/// use errlog::assert_or_die;
/// let connections = 3;
/// assert_or_die!(logger, connections <= 10, "connection table overflow");
/// ```
#[macro_export]
macro_rules! assert_or_die {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if !($cond) {
            $logger.assertion_failure(stringify!($cond), file!(), line!(), format!($($arg)+));
        }
    };
}

/// Guard a call that signals failure with a sentinel return value.
///
/// Evaluates the expression once and compares it against the sentinel
/// (`-1` when not given). On a match the current OS error code is taken as
/// the cause and the process exits through the fatal path; otherwise the
/// value is returned.
///
/// # Examples
///
/// ```
/// # use errlog::prelude::*;
/// # let logger = Logger::new();
/// use errlog::try_or_die;
/// fn dup_handle() -> i32 { 7 }
/// let fd = try_or_die!(logger, dup_handle());
/// assert_eq!(fd, 7);
/// ```
#[macro_export]
macro_rules! try_or_die {
    ($logger:expr, $expr:expr) => {
        $crate::try_or_die!($logger, $expr, -1)
    };
    ($logger:expr, $expr:expr, $sentinel:expr) => {{
        let value = $expr;
        if value == $sentinel {
            $logger.sentinel_failure(stringify!($expr));
        }
        value
    }};
}
