pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub mod time_prefix;
pub use noop_log_sink::NoopLogSink;
