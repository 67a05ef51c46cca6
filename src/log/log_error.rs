use std::fmt;

/// Errors surfaced by the strict parsing entry points.
///
/// Logging calls themselves never fail; this is only returned by the `FromStr`
/// implementations of [`LogLevel`](crate::log::log_level::LogLevel) and
/// [`TimePrefix`](crate::log::time_prefix::TimePrefix) so that configuration code
/// can tell a typo from a real value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input names no level or level short-hand.
    UnknownLevel(String),
    /// The input names no time prefix mode.
    UnknownTimePrefix(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError::*;
        match self {
            UnknownLevel(s) => write!(f, "unknown log level: {s:?}"),
            UnknownTimePrefix(s) => write!(f, "unknown time prefix: {s:?}"),
        }
    }
}
impl std::error::Error for ParseError {}
