use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// A logger that writes `timestamp [LEVEL] file:line - message` lines to stdout.
pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Render a record the way [`StdoutLogger`] prints it.
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// Current local time as YYYY-MM-DDTHH:MM:SS.mmm
pub fn format_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}

/// Default level for the build: Debug in debug builds, Info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install a [`StdoutLogger`] as the global logger.
///
/// Only the first call in a process takes effect; later calls are ignored.
pub fn init_stdout_logger(level: LevelFilter) {
    // set_logger needs a &'static; the logger lives for the rest of the process
    let logger: &'static StdoutLogger = Box::leak(Box::new(StdoutLogger::new(level)));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_structure() {
        let ts = format_timestamp();
        // YYYY-MM-DDTHH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = StdoutLogger::new(LevelFilter::Warn);
        let info = log::MetadataBuilder::new()
            .level(log::Level::Info)
            .target("test")
            .build();
        let error = log::MetadataBuilder::new()
            .level(log::Level::Error)
            .target("test")
            .build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }
}
