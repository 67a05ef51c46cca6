use std::{fmt::Write as _, str::FromStr};

use chrono::{Local, Utc};

use crate::log::log_error::ParseError;

const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const LOCAL_DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Strategy used to render the timestamp in front of each line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimePrefix {
    /// No timestamp.
    None,
    /// UTC in ISO-8601, e.g. `2021-11-18T06:18:23Z`.
    Iso8601,
    /// Local time as `YYYY-MM-DD HH:MM:SS`.
    #[default]
    LocalDefault,
    /// Local time rendered with a caller supplied strftime format.
    UserDefined,
}

impl TimePrefix {
    /// Renders the current time according to this mode.
    ///
    /// `user_format` is only consulted for [`TimePrefix::UserDefined`]. A format
    /// chrono cannot render yields an empty string instead of an error.
    #[must_use]
    pub fn render(self, user_format: &str) -> String {
        match self {
            TimePrefix::None => String::new(),
            TimePrefix::Iso8601 => {
                try_format(|out| write!(out, "{}", Utc::now().format(ISO_8601_FORMAT)))
            }
            TimePrefix::LocalDefault => {
                try_format(|out| write!(out, "{}", Local::now().format(LOCAL_DEFAULT_FORMAT)))
            }
            TimePrefix::UserDefined if user_format.is_empty() => String::new(),
            TimePrefix::UserDefined => {
                try_format(|out| write!(out, "{}", Local::now().format(user_format)))
            }
        }
    }

    /// Parses a config value, returning `fallback` when it is not recognized.
    #[must_use]
    pub fn parse(input: &str, fallback: TimePrefix) -> TimePrefix {
        Self::lookup(input).unwrap_or(fallback)
    }

    fn lookup(input: &str) -> Option<TimePrefix> {
        let normalized = input.to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Some(TimePrefix::None),
            "iso" | "iso8601" | "iso_8601" => Some(TimePrefix::Iso8601),
            "local" | "local_default" => Some(TimePrefix::LocalDefault),
            "user" | "user_defined" => Some(TimePrefix::UserDefined),
            _ => None,
        }
    }
}

impl FromStr for TimePrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseError::UnknownTimePrefix(s.to_owned()))
    }
}

// chrono reports bad specifiers as a fmt::Error during Display; swallow it.
fn try_format<F>(render: F) -> String
where
    F: FnOnce(&mut String) -> std::fmt::Result,
{
    let mut out = String::new();
    match render(&mut out) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn is_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    #[test]
    fn none_renders_nothing() {
        assert_eq!(TimePrefix::None.render("%Y"), "");
    }

    #[test]
    fn iso_8601_shape() {
        let ts = TimePrefix::Iso8601.render("");
        // 2021-11-18T06:18:23Z
        assert_eq!(ts.len(), 20, "{ts}");
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
        assert!(is_digits(&ts[0..4]));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn local_default_shape() {
        let ts = TimePrefix::LocalDefault.render("ignored");
        assert_eq!(ts.len(), 19, "{ts}");
        assert_eq!(&ts[10..11], " ");
        assert!(is_digits(&ts[11..13]));
        assert!(is_digits(&ts[17..19]));
    }

    #[test]
    fn user_defined_uses_format() {
        let ts = TimePrefix::UserDefined.render("[%Y]");
        assert!(ts.starts_with('[') && ts.ends_with(']'), "{ts}");
        assert!(is_digits(&ts[1..ts.len() - 1]));
        assert_eq!(TimePrefix::UserDefined.render("literal"), "literal");
    }

    #[test]
    fn user_defined_empty_format_renders_nothing() {
        assert_eq!(TimePrefix::UserDefined.render(""), "");
    }

    #[test]
    fn bad_user_format_degrades_to_empty() {
        assert_eq!(TimePrefix::UserDefined.render("%Q %Y"), "");
    }

    #[test]
    fn parse_config_values() {
        assert_eq!(TimePrefix::parse("ISO_8601", TimePrefix::None), TimePrefix::Iso8601);
        assert_eq!(TimePrefix::parse("none", TimePrefix::Iso8601), TimePrefix::None);
        assert_eq!(TimePrefix::parse("User", TimePrefix::None), TimePrefix::UserDefined);
        assert_eq!(
            TimePrefix::parse("whenever", TimePrefix::LocalDefault),
            TimePrefix::LocalDefault
        );
        assert_eq!(
            "whenever".parse::<TimePrefix>(),
            Err(ParseError::UnknownTimePrefix("whenever".into()))
        );
        assert_eq!(
            ParseError::UnknownTimePrefix("x".into()).to_string(),
            "unknown time prefix: \"x\""
        );
        assert_eq!("local".parse::<TimePrefix>(), Ok(TimePrefix::LocalDefault));
    }
}
