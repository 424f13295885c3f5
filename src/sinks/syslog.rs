//! System-log sink
//!
//! Unix builds talk to the local syslog daemon through the POSIX API
//! (`openlog`/`syslog`/`closelog`); everywhere else the sink is a no-op
//! with the same surface. POSIX supports a single syslog connection per
//! process: opening a second channel replaces the first daemon-side, so
//! the logger keeps at most one of these alive.

use crate::core::log_level::LogLevel;
use crate::core::{LogRecord, Result};
use crate::sinks::Sink;

#[cfg(unix)]
pub use imp::SyslogSink;

#[cfg(not(unix))]
pub use noop::SyslogSink;

#[cfg(unix)]
mod imp {
    use super::*;
    use crate::core::error::LoggerError;
    use std::ffi::{CStr, CString};

    static MESSAGE_FORMAT: &[u8] = b"%s\0";

    pub struct SyslogSink {
        // openlog keeps the ident pointer; the CString must stay alive for
        // as long as the channel is open.
        ident: CString,
    }

    impl SyslogSink {
        /// Open the process syslog channel under `ident`.
        pub fn open(ident: &str) -> Result<Self> {
            let ident = CString::new(ident)
                .map_err(|_| LoggerError::syslog("ident contains a nul byte"))?;
            unsafe {
                libc::openlog(
                    ident.as_ptr(),
                    libc::LOG_CONS | libc::LOG_PID,
                    libc::LOG_USER,
                );
            }
            Ok(Self { ident })
        }

        pub fn ident(&self) -> &CStr {
            &self.ident
        }
    }

    fn priority_for(level: LogLevel) -> libc::c_int {
        match level {
            LogLevel::Debug => libc::LOG_DEBUG,
            LogLevel::Info => libc::LOG_INFO,
            LogLevel::Warn => libc::LOG_WARNING,
            LogLevel::Error => libc::LOG_ERR,
            LogLevel::Fatal => libc::LOG_CRIT,
            LogLevel::Custom(_) => libc::LOG_INFO,
        }
    }

    impl Sink for SyslogSink {
        fn write(&mut self, record: &LogRecord) -> Result<()> {
            let text = CString::new(record.syslog_text())
                .map_err(|_| LoggerError::syslog("message contains a nul byte"))?;
            unsafe {
                libc::syslog(
                    priority_for(record.level),
                    MESSAGE_FORMAT.as_ptr().cast::<libc::c_char>(),
                    text.as_ptr(),
                );
            }
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            // The daemon owns buffering; nothing to flush here.
            Ok(())
        }

        fn name(&self) -> &str {
            "syslog"
        }
    }

    impl Drop for SyslogSink {
        fn drop(&mut self) {
            unsafe {
                libc::closelog();
            }
        }
    }

}

#[cfg(not(unix))]
mod noop {
    use super::*;

    /// Platform has no system log; every operation succeeds and does
    /// nothing.
    pub struct SyslogSink;

    impl SyslogSink {
        pub fn open(_ident: &str) -> Result<Self> {
            Ok(Self)
        }
    }

    impl Sink for SyslogSink {
        fn write(&mut self, _record: &LogRecord) -> Result<()> {
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "syslog"
        }
    }
}
