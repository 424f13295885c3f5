//! Timestamp rendering for log records
//!
//! Records carry a fixed-width ISO 8601 timestamp with millisecond
//! precision: `2025-01-08T10:30:45.123`, with a trailing `Z` in UTC mode.
//! Milliseconds come from truncating the sub-second part, not rounding.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Which clock the timestamp is rendered from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampMode {
    /// Local wall-clock time, no zone suffix.
    #[default]
    Local,
    /// UTC with a trailing `Z`.
    Utc,
}

impl TimestampMode {
    /// Render the current wall-clock time. Stateless and safe to call from
    /// any number of threads.
    pub fn render_now(&self) -> String {
        match self {
            TimestampMode::Local => render_local(&Local::now()),
            TimestampMode::Utc => render_utc(&Utc::now()),
        }
    }
}

fn render_utc(datetime: &DateTime<Utc>) -> String {
    datetime.format(UTC_FORMAT).to_string()
}

fn render_local(datetime: &DateTime<Local>) -> String {
    datetime.format(LOCAL_FORMAT).to_string()
}
