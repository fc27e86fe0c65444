//! Circular Line Buffer
//!
//! Keeps the most recent formatted log lines in memory so a host without a
//! file system (the browser) can still show what happened.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// Fixed-capacity ring of log lines; the oldest line is dropped first.
#[derive(Debug)]
pub struct LogBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append every non-empty line contained in `chunk`.
    pub fn push_chunk(&self, chunk: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        for line in chunk.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line.to_string());
        }
    }

    /// Snapshot of the buffered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl io::Write for &LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push_chunk(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
