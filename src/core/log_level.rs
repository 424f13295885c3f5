//! Severity level definitions

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Severity of a log record, ordered by numeric weight.
///
/// The named levels carry the conventional weights 10..=50. `Custom` carries
/// an arbitrary weight and takes part in filtering like any other level;
/// the renderer falls back to the generic `LOG` label for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Custom(u8),
}

impl LogLevel {
    /// Numeric weight used for filtering and ordering.
    pub const fn weight(&self) -> u8 {
        match self {
            LogLevel::Debug => 10,
            LogLevel::Info => 20,
            LogLevel::Warn => 30,
            LogLevel::Error => 40,
            LogLevel::Fatal => 50,
            LogLevel::Custom(weight) => *weight,
        }
    }

    /// Map a raw weight back to a level, preferring the named levels.
    pub const fn from_weight(weight: u8) -> Self {
        match weight {
            10 => LogLevel::Debug,
            20 => LogLevel::Info,
            30 => LogLevel::Warn,
            40 => LogLevel::Error,
            50 => LogLevel::Fatal,
            other => LogLevel::Custom(other),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Custom(_) => "LOG",
        }
    }

    /// True for FATAL and any custom weight at or above it.
    pub const fn is_fatal(&self) -> bool {
        self.weight() >= LogLevel::Fatal.weight()
    }

    /// Apply this level's terminal color to `text`.
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            LogLevel::Debug => text.dimmed(),
            LogLevel::Info => text.normal(),
            LogLevel::Warn => text.yellow(),
            LogLevel::Error => text.red(),
            LogLevel::Fatal => text.red().bold(),
            LogLevel::Custom(_) => text.normal(),
        }
    }
}

// Equality, ordering, and hashing all go through the weight so that a
// custom level with a named weight compares equal to the named level.
impl PartialEq for LogLevel {
    fn eq(&self, other: &Self) -> bool {
        self.weight() == other.weight()
    }
}

impl Eq for LogLevel {}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl Hash for LogLevel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.weight().hash(state);
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            other => other
                .parse::<u8>()
                .map(LogLevel::from_weight)
                .map_err(|_| format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_custom_weight_compares_by_weight() {
        assert!(LogLevel::Custom(35) > LogLevel::Warn);
        assert!(LogLevel::Custom(35) < LogLevel::Error);
        assert_eq!(LogLevel::Custom(20), LogLevel::Info);
    }

    #[test]
    fn test_custom_label_falls_back() {
        assert_eq!(LogLevel::Custom(35).label(), "LOG");
        assert_eq!(LogLevel::Custom(99).to_string(), "LOG");
    }

    #[test]
    fn test_from_weight_roundtrip() {
        for weight in 0..=u8::MAX {
            assert_eq!(LogLevel::from_weight(weight).weight(), weight);
        }
    }

    #[test]
    fn test_is_fatal() {
        assert!(LogLevel::Fatal.is_fatal());
        assert!(LogLevel::Custom(60).is_fatal());
        assert!(!LogLevel::Error.is_fatal());
    }

    #[test]
    fn test_parse_named_and_numeric() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("35".parse::<LogLevel>().unwrap(), LogLevel::Custom(35));
        assert!("nope".parse::<LogLevel>().is_err());
    }
}
