use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Sink that discards every message.
///
/// Stands in for a [`Logger`](crate::log::logger::Logger) where a component wants an
/// `Arc<dyn LogSink>` but the caller has nowhere to send lines, e.g. in tests.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _level: LogLevel, _msg: &str) {}
}
