//! Call-stack capture for fatal records
//!
//! Captures a bounded snapshot of the active frames and renders symbol
//! names where the platform can resolve them, raw instruction addresses
//! otherwise. Purely advisory output: callers ignore the result of
//! [`render`] and an empty capture produces no output at all.

use std::io::{self, Write};

/// Maximum number of frames captured per snapshot.
pub const MAX_FRAMES: usize = 128;

/// Capture up to [`MAX_FRAMES`] frames of the current call stack.
pub fn frames() -> Vec<String> {
    let mut captured = Vec::new();
    backtrace::trace(|frame| {
        let ip = frame.ip();
        let mut name = None;
        backtrace::resolve_frame(frame, |symbol| {
            if name.is_none() {
                name = symbol.name().map(|n| n.to_string());
            }
        });
        captured.push(name.unwrap_or_else(|| format!("{:?}", ip)));
        captured.len() < MAX_FRAMES
    });
    captured
}

/// Render the current call stack to `out`.
pub fn render(out: &mut dyn Write) -> io::Result<()> {
    let frames = frames();
    if frames.is_empty() {
        return Ok(());
    }
    writeln!(out, "Backtrace ({} frames):", frames.len())?;
    for (index, frame) in frames.iter().enumerate() {
        writeln!(out, "  {:3}: {}", index, frame)?;
    }
    writeln!(out)
}
