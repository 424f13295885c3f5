//! Complete usage demo: configuration, leveled logging, OS error
//! enrichment, and the fatal termination helpers.
//!
//! Run with `cargo run --example demo`. The guarded call near the end
//! terminates the process through the fatal path, so the final message is
//! never printed.

use errlog::{assert_or_die, debug, info, log_errno, try_or_die, warn};
use errlog::{LogLevel, Logger};
use std::fs::File;

/// Stand-in for an OS call that reports failure with a -1 sentinel.
fn simulated_syscall() -> i32 {
    -1
}

fn main() {
    let logger = Logger::global();
    logger.set_program_name("demo");
    logger.set_min_level(LogLevel::Debug);
    logger.set_color_enabled(true);
    logger.set_use_utc(false);

    debug!(logger, "debug detail, visible at the most permissive level");
    info!(logger, "demo starting");
    warn!(logger, "this is a warning: not ideal, not blocking");

    // Log the failure with its errno without terminating.
    if let Err(err) = File::open("/path/does/not/exist") {
        log_errno!(
            logger,
            LogLevel::Error,
            err.raw_os_error().unwrap_or(0),
            "could not open input file"
        );
    }

    // Guarded call: the sentinel return makes this exit with the current
    // OS error as the cause.
    try_or_die!(logger, simulated_syscall());

    // Never reached: the guard above terminated the process.
    let x = 5;
    assert_or_die!(logger, x == 10, "x must equal 10");
    info!(logger, "end of demo (never printed)");
}
