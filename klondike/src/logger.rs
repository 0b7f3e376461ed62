use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::StartupError;

/// Appends `[LEVEL] [module] message` lines to a file
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self, StartupError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| StartupError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record.module_path().unwrap_or_else(|| record.target());
        // A poisoned lock or a failed write only loses the line
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "[{}] [{}] {}", record.level(), module, record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger for the rest of the process
pub fn init(path: &Path, level: LevelFilter) -> Result<(), StartupError> {
    let logger = FileLogger::open(path, level)?;
    log::set_logger(Box::leak(Box::new(logger))).map_err(|_| StartupError::LoggerInstalled)?;
    log::set_max_level(level);
    Ok(())
}
