//! Platform error code descriptions
//!
//! Translates an OS error code (`errno` on POSIX) into a short readable
//! string. The translation writes into a bounded per-call buffer, so it is
//! safe to run from any number of threads and never allocates past the
//! bound.

/// Upper bound on a rendered error description.
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Describe an OS error code.
///
/// Falls back to `"errno <code>"` when the platform cannot resolve the
/// code.
#[cfg(unix)]
pub fn describe(code: i32) -> String {
    let mut buf = [0u8; MAX_DESCRIPTION_LEN];
    // XSI strerror_r: non-zero means the code could not be resolved into
    // the buffer.
    let rc = unsafe {
        libc::strerror_r(
            code as libc::c_int,
            buf.as_mut_ptr().cast::<libc::c_char>(),
            buf.len(),
        )
    };
    if rc != 0 {
        return format!("errno {}", code);
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

#[cfg(not(unix))]
pub fn describe(code: i32) -> String {
    let rendered = std::io::Error::from_raw_os_error(code).to_string();
    if rendered.is_empty() {
        format!("errno {}", code)
    } else {
        rendered
    }
}
