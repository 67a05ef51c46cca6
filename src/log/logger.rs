use crate::{
    config::Config,
    log::{log_level::LogLevel, log_sink::LogSink, time_prefix::TimePrefix},
};

use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicU8, Ordering},
    },
};

/// Config section read by [`LoggerOptions::from_config`].
pub const CONFIG_SECTION: &str = "Logging";

/// Construction parameters for a [`Logger`].
///
/// The defaults log `Warning` and above to stderr with a local timestamp and no name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Printed in front of the level label; empty means no name segment.
    pub name: String,
    /// File to truncate and write to; `None` (or an empty path) means stderr.
    pub file_path: Option<PathBuf>,
    /// Initial threshold.
    pub level: LogLevel,
    pub time_prefix: TimePrefix,
    /// strftime format, only used with [`TimePrefix::UserDefined`].
    pub user_time_format: String,
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_time_prefix(mut self, time_prefix: TimePrefix) -> Self {
        self.time_prefix = time_prefix;
        self
    }

    #[must_use]
    pub fn with_user_time_format(mut self, format: impl Into<String>) -> Self {
        self.user_time_format = format.into();
        self
    }

    /// Reads options from the `[Logging]` section of `config`.
    ///
    /// Recognized keys: `name`, `file`, `level`, `time_prefix`, `time_format`.
    /// `level`, `time_prefix` and `time_format` may also be set as globals above the
    /// first section, which lets several programs share one threshold. `name` and
    /// `file` are per section only. Unrecognized values keep their defaults; a leading
    /// `~` in `file` is expanded to the home directory.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let level = config.get_non_empty_or_default(CONFIG_SECTION, "level", "");
        let time_prefix = config.get_non_empty_or_default(CONFIG_SECTION, "time_prefix", "");
        Self {
            name: config
                .get(CONFIG_SECTION, "name")
                .unwrap_or_default()
                .to_owned(),
            file_path: config.get_non_empty(CONFIG_SECTION, "file").map(expand_path),
            level: LogLevel::parse(level, defaults.level),
            time_prefix: TimePrefix::parse(time_prefix, defaults.time_prefix),
            user_time_format: config
                .get_or_default(CONFIG_SECTION, "time_format", "")
                .to_owned(),
        }
    }
}

/// Synchronous, leveled logger writing one line per message to a file or stderr.
///
/// Every enabled call formats the message, renders the timestamp and then writes and
/// flushes the whole line while holding a per-instance lock, so concurrent callers on
/// the same `Logger` never interleave within a line. Share it across threads through
/// an `Arc`.
///
/// A file opened by the logger is owned exclusively and closed when the logger is
/// dropped. Stderr is never closed.
///
/// # Line format
///
/// `[timestamp ][name ]LABEL message\n`, where the optional segments (and their
/// separating space) are omitted when empty.
///
/// # Example
///
/// ```
/// use rustylog::log::{log_level::LogLevel, logger::{Logger, LoggerOptions}};
///
/// let logger = Logger::new(LoggerOptions::new().with_name("svc").with_level(LogLevel::Info));
/// logger.info(format_args!("listening on port {}", 8080));
/// ```
pub struct Logger {
    name: String,
    level: AtomicU8,
    time_prefix: TimePrefix,
    user_time_format: String,
    file_path: Option<PathBuf>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Builds a logger from `options`.
    ///
    /// If a file path is given it is opened with truncate semantics. When that fails
    /// the logger quietly writes to stderr instead; construction never fails.
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        let requested = options
            .file_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty());

        let (writer, file_path): (Box<dyn Write + Send>, Option<PathBuf>) = match requested {
            Some(path) => match OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&path)
            {
                Ok(f) => (Box::new(f), Some(path)),
                Err(_) => (Box::new(io::stderr()), None),
            },
            None => (Box::new(io::stderr()), None),
        };

        Self::build(options, writer, file_path)
    }

    /// Builds a logger bound to an arbitrary writer; `options.file_path` is ignored.
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(options: LoggerOptions, writer: W) -> Self {
        Self::build(options, Box::new(writer), None)
    }

    /// Builds a logger from the `[Logging]` section of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(LoggerOptions::from_config(config))
    }

    fn build(
        options: LoggerOptions,
        writer: Box<dyn Write + Send>,
        file_path: Option<PathBuf>,
    ) -> Self {
        Self {
            name: options.name,
            level: AtomicU8::new(options.level.to_u8()),
            time_prefix: options.time_prefix,
            user_time_format: options.user_time_format,
            file_path,
            out: Mutex::new(writer),
        }
    }

    /// Changes the threshold. Safe to call while other threads are logging.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.to_u8(), Ordering::Relaxed);
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        LogLevel::permits(self.level(), level)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn time_prefix(&self) -> TimePrefix {
        self.time_prefix
    }

    /// Path of the file this logger owns, `None` when writing to stderr
    /// (including after a failed open) or to a caller supplied writer.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Logs at [`LogLevel::Debug`].
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Logs at [`LogLevel::Info`].
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Logs at [`LogLevel::Warning`], the default threshold.
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, args);
    }

    /// Logs at [`LogLevel::Error`].
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    /// Logs at [`LogLevel::Critical`]; only a `None` threshold hides it.
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Critical, args);
    }

    /// Writes `args` at `level` if the threshold allows it.
    ///
    /// Filtered calls return before any formatting happens. `All` and `None` are not
    /// message levels and are ignored. I/O errors are swallowed.
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let Some(label) = level.label() else {
            return;
        };

        let message = fmt::format(args);
        let timestamp = self.time_prefix.render(&self.user_time_format);
        let line = compose_line(&timestamp, &self.name, label, &message);

        self.write_line(&line);
    }

    fn write_line(&self, line: &str) {
        // A panic in another writer must not silence this logger for good.
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("time_prefix", &self.time_prefix)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl LogSink for Logger {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        Logger::log(self, level, format_args!("{msg}"));
    }
}

/// Joins the segments of one output line, newline included.
fn compose_line(timestamp: &str, name: &str, label: &str, message: &str) -> String {
    let mut line =
        String::with_capacity(timestamp.len() + name.len() + label.len() + message.len() + 3);
    for segment in [timestamp, name] {
        if !segment.is_empty() {
            line.push_str(segment);
            line.push(' ');
        }
    }
    line.push_str(label);
    line.push_str(message);
    line.push('\n');
    line
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
