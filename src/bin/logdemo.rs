//! Emits one line per level using a logger built from a config file,
//! so a `[Logging]` section can be checked by eye.

use std::{env, sync::Arc};

use rustylog::{
    config::Config,
    log::{NoopLogSink, log_level::LogLevel, log_sink::LogSink, logger::Logger},
    logger_critical, logger_debug, logger_error, logger_info, logger_warn,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1).filter(|a| *a != "--quiet") {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {e}. Using defaults.");
            Config::empty()
        }),
        None => Config::load("logdemo.conf").unwrap_or_else(|_| Config::empty()),
    };

    let logger = Arc::new(Logger::from_config(&config));
    match logger.file_path() {
        Some(path) => eprintln!("[logdemo] writing to {} at {}", path.display(), logger.level()),
        None => eprintln!("[logdemo] writing to stderr at {}", logger.level()),
    }

    logger_debug!(logger, "debug line from pid {}", std::process::id());
    logger_info!(logger, "info line");
    logger_warn!(logger, "warning line");
    logger_error!(logger, "error line");
    logger_critical!(logger, "critical line");

    // `--quiet` routes the sink lines nowhere.
    let sink: Arc<dyn LogSink> = if args.iter().any(|a| a == "--quiet") {
        Arc::new(NoopLogSink)
    } else {
        logger
    };
    report_through_sink(sink.as_ref());
}

fn report_through_sink(sink: &dyn LogSink) {
    sink.log(LogLevel::Warning, "line passed through a LogSink");
}
