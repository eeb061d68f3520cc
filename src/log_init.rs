use log::{Level, LevelFilter, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::error::Result;

/// Environment variable naming the log file for [`init_from_env`].
pub const LOG_ENV_VAR: &str = "COLOURED_TEXT_LOG";

struct FileLogger {
    file: Mutex<File>,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(file, "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Append debug-level log records to the file at `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let logger = FileLogger {
        file: Mutex::new(file),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

/// Install the file logger when `COLOURED_TEXT_LOG` is set.
///
/// Returns `Ok(false)` without touching the logger when the variable is unset.
pub fn init_from_env() -> Result<bool> {
    match std::env::var_os(LOG_ENV_VAR) {
        Some(path) if !path.is_empty() => init_logger(path).map(|()| true),
        _ => Ok(false),
    }
}
