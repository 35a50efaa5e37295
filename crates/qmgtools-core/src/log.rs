//! Operator log: one `YYYY-MM-DD HH:MM:SS LEVEL message` line per event.
//!
//! This is the job's only user-visible channel. It is a plain append-only
//! file, separate from the `tracing` diagnostics the binary prints to stderr.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub level: Level,
    pub message: String,
}

impl LogRecord {
    /// Stamp a record with the current local time.
    pub fn now(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            level,
            message: message.into(),
        }
    }

    pub fn to_line(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

/// Destination for operator log records.
pub trait LogSink {
    fn write(&mut self, record: &LogRecord) -> std::io::Result<()>;
}

/// Appends records to a file. The file is created if missing; its parent
/// directory must already exist.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    file: File,
}

impl FileLog {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLog {
    fn write(&mut self, record: &LogRecord) -> std::io::Result<()> {
        writeln!(self.file, "{}", record.to_line())?;
        self.file.flush()
    }
}

/// Keeps records in memory instead of writing them anywhere.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryLog {
    pub(crate) records: Vec<LogRecord>,
}

#[cfg(test)]
impl MemoryLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entries(&self) -> Vec<(Level, &str)> {
        self.records
            .iter()
            .map(|r| (r.level, r.message.as_str()))
            .collect()
    }
}

#[cfg(test)]
impl LogSink for MemoryLog {
    fn write(&mut self, record: &LogRecord) -> std::io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
