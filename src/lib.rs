//! rustylog is a small, synchronous, leveled logger.
//!
//! Each [`Logger`](log::logger::Logger) writes one line per enabled message to a file
//! it owns or to stderr, with an optional timestamp and name in front of a fixed-width
//! level label. Writes are serialized per instance, so a logger can be shared across
//! threads behind an `Arc`.
//!
//! ```
//! use rustylog::log::{log_level::LogLevel, logger::{Logger, LoggerOptions}};
//! use rustylog::logger_info;
//!
//! let logger = Logger::new(LoggerOptions::new().with_name("svc").with_level(LogLevel::Info));
//! logger_info!(logger, "x={}", 5);
//! ```

/// Handles configuration loading and management.
pub mod config;
/// Levels, timestamps, sinks and the logger itself.
pub mod log;
