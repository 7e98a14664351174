//! Console Logger
//!
//! `log` backend for the browser. Records go to the devtools console, or to
//! stderr off-wasm, as `[HH:MM:SS.mmm] LEVEL app target: message`.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
        }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &self.format(record));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if another logger is already set.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
