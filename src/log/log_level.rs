use std::{fmt, str::FromStr};

use crate::log::log_error::ParseError;

/// Defines the severity levels for log messages.
///
/// The ordered scale runs from [`LogLevel::All`] up to [`LogLevel::Critical`].
/// [`LogLevel::None`] sits outside of it and is only meaningful as a threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Everything is logged regardless of level.
    All,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug,
    /// Designates informational messages that highlight the progress of the application.
    Info,
    /// Designates potentially harmful situations.
    #[default]
    Warning,
    /// Designates error events that might still allow the application to continue running.
    Error,
    /// Designates failures the application is unlikely to recover from.
    Critical,
    /// Nothing is logged.
    None,
}

/// Ordered scale used for threshold comparison. `None` is deliberately absent.
const LEVEL_ORDER: [LogLevel; 6] = [
    LogLevel::All,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warning,
    LogLevel::Error,
    LogLevel::Critical,
];

/// Canonical names and short-hands, matched case-insensitively.
const LEVEL_NAMES: [(&str, LogLevel); 10] = [
    ("ALL", LogLevel::All),
    ("DEBUG", LogLevel::Debug),
    ("INFO", LogLevel::Info),
    ("WARNING", LogLevel::Warning),
    ("WARN", LogLevel::Warning),
    ("ERROR", LogLevel::Error),
    ("ERR", LogLevel::Error),
    ("CRITICAL", LogLevel::Critical),
    ("CRIT", LogLevel::Critical),
    ("NONE", LogLevel::None),
];

impl LogLevel {
    /// Parses a level name, returning `fallback` when the name is not recognized.
    ///
    /// Matching ignores case and accepts the short-hands `WARN`, `ERR` and `CRIT`.
    ///
    /// # Example
    ///
    /// ```
    /// use rustylog::log::log_level::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("warn", LogLevel::Debug), LogLevel::Warning);
    /// assert_eq!(LogLevel::parse("bogus", LogLevel::Info), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn parse(input: &str, fallback: LogLevel) -> LogLevel {
        Self::lookup(input).unwrap_or(fallback)
    }

    fn lookup(input: &str) -> Option<LogLevel> {
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(input))
            .map(|&(_, level)| level)
    }

    /// Position on the ordered scale, `None` for the suppressive sentinel.
    #[must_use]
    pub fn rank(self) -> Option<usize> {
        LEVEL_ORDER.iter().position(|&l| l == self)
    }

    /// Whether a message at `message` passes the `threshold`.
    #[must_use]
    pub fn permits(threshold: LogLevel, message: LogLevel) -> bool {
        match (threshold.rank(), message.rank()) {
            (Some(t), Some(m)) => m >= t,
            _ => false,
        }
    }

    /// Fixed-width label printed in front of each message.
    ///
    /// `All` and `None` are thresholds only and have no label.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            LogLevel::Debug => Some("DEBUG    "),
            LogLevel::Info => Some("INFO     "),
            LogLevel::Warning => Some("WARNING  "),
            LogLevel::Error => Some("ERROR    "),
            LogLevel::Critical => Some("CRITICAL "),
            LogLevel::All | LogLevel::None => None,
        }
    }

    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::None => "NONE",
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(raw: u8) -> LogLevel {
        match raw {
            0 => LogLevel::All,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warning,
            4 => LogLevel::Error,
            5 => LogLevel::Critical,
            _ => LogLevel::None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseError::UnknownLevel(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    const ALL_LEVELS: [LogLevel; 7] = [
        LogLevel::All,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::None,
    ];

    #[test]
    fn parse_accepts_short_hands_for_any_fallback() {
        for fallback in ALL_LEVELS {
            assert_eq!(LogLevel::parse("warn", fallback), LogLevel::Warning);
            assert_eq!(LogLevel::parse("ERR", fallback), LogLevel::Error);
            assert_eq!(LogLevel::parse("Crit", fallback), LogLevel::Critical);
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(LogLevel::parse("Debug", LogLevel::None), LogLevel::Debug);
        assert_eq!(LogLevel::parse("dEbUg", LogLevel::None), LogLevel::Debug);
        assert_eq!(LogLevel::parse("none", LogLevel::Info), LogLevel::None);
        assert_eq!(LogLevel::parse("all", LogLevel::Info), LogLevel::All);
    }

    #[test]
    fn parse_unknown_returns_fallback() {
        assert_eq!(LogLevel::parse("bogus", LogLevel::Warning), LogLevel::Warning);
        assert_eq!(LogLevel::parse("", LogLevel::Error), LogLevel::Error);
        assert_eq!(LogLevel::parse(" info", LogLevel::Critical), LogLevel::Critical);
    }

    #[test]
    fn from_str_reports_unknown_input() {
        assert_eq!("critical".parse::<LogLevel>(), Ok(LogLevel::Critical));
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseError::UnknownLevel("loud".into()));
        assert_eq!(err.to_string(), "unknown log level: \"loud\"");
    }

    #[test]
    fn permits_follows_severity_table() {
        use LogLevel::{All, Critical, Debug, Error, Info, Warning};
        // Rows: threshold. Columns: message at All, Debug, Info, Warning, Error, Critical.
        let table: [(LogLevel, [bool; 6]); 6] = [
            (All, [true, true, true, true, true, true]),
            (Debug, [false, true, true, true, true, true]),
            (Info, [false, false, true, true, true, true]),
            (Warning, [false, false, false, true, true, true]),
            (Error, [false, false, false, false, true, true]),
            (Critical, [false, false, false, false, false, true]),
        ];
        let messages = [All, Debug, Info, Warning, Error, Critical];
        for (threshold, row) in table {
            for (message, expected) in messages.into_iter().zip(row) {
                assert_eq!(
                    LogLevel::permits(threshold, message),
                    expected,
                    "threshold={threshold} message={message}"
                );
            }
        }
        assert!(!LogLevel::permits(Warning, Debug));
        assert!(LogLevel::permits(Info, Error));
    }

    #[test]
    fn none_threshold_suppresses_everything() {
        for message in ALL_LEVELS {
            assert!(!LogLevel::permits(LogLevel::None, message));
        }
    }

    #[test]
    fn all_threshold_lets_every_message_through() {
        for message in LEVEL_ORDER {
            assert!(LogLevel::permits(LogLevel::All, message));
        }
        assert!(!LogLevel::permits(LogLevel::All, LogLevel::None));
    }

    #[test]
    fn labels_are_fixed_width() {
        for level in ALL_LEVELS {
            if let Some(label) = level.label() {
                assert_eq!(label.len(), 9, "{level}");
                assert!(label.starts_with(level.as_str()));
            }
        }
        assert_eq!(LogLevel::All.label(), None);
        assert_eq!(LogLevel::None.label(), None);
    }

    #[test]
    fn u8_conversion_is_lossless() {
        for level in ALL_LEVELS {
            assert_eq!(LogLevel::from_u8(level.to_u8()), level);
        }
    }
}
