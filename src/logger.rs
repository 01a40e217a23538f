use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log` backend for the command-line tool. Status messages go to stderr so
/// that listings on stdout stay clean.
pub struct StderrLogger {
    max_level: LevelFilter,
}

impl StderrLogger {
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    /// Install as the global logger. Call once, before anything logs.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Info => eprintln!("{}", record.args()),
            level => eprintln!("[{}] {}: {}", level, record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}
