use crate::log::log_level::LogLevel;

/// Anything that accepts already formatted, leveled messages.
///
/// Components take an `Arc<dyn LogSink>` so they can be handed a [`Logger`](crate::log::logger::Logger)
/// in production and a [`NoopLogSink`](crate::log::NoopLogSink) in tests.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);
}
