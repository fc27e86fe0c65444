//! Rolling Logger
//!
//! Installs a global `tracing` subscriber for the checklist hosts. Records
//! emitted through the `log` facade are captured as well, so library code
//! only ever calls `log::info!` and friends.
//!
//! Two sinks are available:
//! - [`init_logger`]: rotating file under a log directory plus the ring buffer
//! - [`init_memory_logger`]: ring buffer only (hosts without a file system)

mod buffer;
mod file;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub use buffer::LogBuffer;
pub use file::{RollPolicy, RollingFile};

/// Lines kept in memory when no capacity is given
pub const DEFAULT_BUFFER_LINES: usize = 500;

static BUFFER: OnceLock<Arc<LogBuffer>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("a global logger is already installed")]
    AlreadyInitialized,
    #[error("logger has not been initialized")]
    NotInitialized,
}

/// Handle returned by the init functions
#[derive(Clone)]
pub struct LoggerHandle {
    buffer: Arc<LogBuffer>,
    log_path: Option<PathBuf>,
}

impl LoggerHandle {
    pub fn recent_lines(&self) -> Vec<String> {
        self.buffer.lines()
    }

    /// Live log file, if this logger writes to disk
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }
}

struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the file + ring buffer logger.
///
/// The log file is `<log_dir>/<app_name>.log`, rotated per [`RollPolicy::default`].
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<LoggerHandle, LoggerError> {
    init_logger_with_policy(log_dir, app_name, RollPolicy::default())
}

pub fn init_logger_with_policy(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    policy: RollPolicy,
) -> Result<LoggerHandle, LoggerError> {
    let file = Arc::new(RollingFile::open(log_dir, app_name, policy)?);
    let log_path = file.path().to_path_buf();
    let buffer = Arc::new(LogBuffer::new(DEFAULT_BUFFER_LINES));

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .with_timer(LocalClock)
        .with_writer(file.and(buffer.clone()))
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    install(buffer, Some(log_path))
}

/// Install the ring-buffer-only logger.
///
/// Timestamps are omitted: the system clock is not available on every target.
pub fn init_memory_logger(capacity: usize) -> Result<LoggerHandle, LoggerError> {
    let buffer = Arc::new(LogBuffer::new(capacity));

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .without_time()
        .with_writer(buffer.clone())
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    install(buffer, None)
}

fn install(buffer: Arc<LogBuffer>, log_path: Option<PathBuf>) -> Result<LoggerHandle, LoggerError> {
    BUFFER
        .set(buffer.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    Ok(LoggerHandle { buffer, log_path })
}

/// Recent lines from the installed logger, oldest first. Empty before init.
pub fn recent_lines() -> Vec<String> {
    BUFFER.get().map(|b| b.lines()).unwrap_or_default()
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    BUFFER.get().ok_or(LoggerError::NotInitialized)?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    BUFFER.get().ok_or(LoggerError::NotInitialized)?;
    tracing::error!("{}", message);
    Ok(())
}
