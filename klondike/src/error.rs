use std::io;
use std::path::PathBuf;

/// Failures that stop the game before the first frame
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("terminal is {width}x{height} but the table needs at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: i32,
        min_height: i32,
    },
    #[error("cannot open log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a logger is already installed")]
    LoggerInstalled,
}
