//! Size-Rotated Log File
//!
//! Writes to `<dir>/<app>.log`. When the next write would push the file past
//! `max_bytes`, files shift up one slot (`<app>.log.1` becomes `.2`, ...) and
//! a fresh `<app>.log` is started. At most `max_files` rolled files are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation limits for [`RollingFile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollPolicy {
    pub max_bytes: u64,
    pub max_files: usize,
}

impl Default for RollPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 5,
        }
    }
}

struct FileState {
    file: File,
    written: u64,
}

pub struct RollingFile {
    path: PathBuf,
    policy: RollPolicy,
    state: Mutex<FileState>,
}

impl RollingFile {
    pub fn open(dir: impl AsRef<Path>, app_name: &str, policy: RollPolicy) -> io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            policy,
            state: Mutex::new(FileState { file, written }),
        })
    }

    /// Path of the live log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the n-th rolled file (1 = most recent)
    pub fn rolled_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", n));
        PathBuf::from(name)
    }

    fn rotate(&self, state: &mut FileState) -> io::Result<()> {
        state.file.flush()?;

        if self.policy.max_files == 0 {
            state.file = File::create(&self.path)?;
            state.written = 0;
            return Ok(());
        }

        let oldest = self.rolled_path(self.policy.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.policy.max_files).rev() {
            let from = self.rolled_path(n);
            if from.exists() {
                fs::rename(&from, self.rolled_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.rolled_path(1))?;

        state.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        state.written = 0;
        Ok(())
    }
}

impl io::Write for &RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let incoming = buf.len() as u64;
        if state.written > 0 && state.written + incoming > self.policy.max_bytes {
            self.rotate(&mut state)?;
        }
        state.file.write_all(buf)?;
        state.written += incoming;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rotates_when_full() {
        let dir = tempdir().unwrap();
        let policy = RollPolicy { max_bytes: 16, max_files: 2 };
        let log = RollingFile::open(dir.path(), "checklist", policy).unwrap();

        (&log).write_all(b"0123456789\n").unwrap();
        (&log).write_all(b"abcdefghij\n").unwrap();

        assert_eq!(fs::read_to_string(log.rolled_path(1)).unwrap(), "0123456789\n");
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "abcdefghij\n");
    }

    #[test]
    fn test_drops_files_beyond_limit() {
        let dir = tempdir().unwrap();
        let policy = RollPolicy { max_bytes: 4, max_files: 2 };
        let log = RollingFile::open(dir.path(), "checklist", policy).unwrap();

        for line in ["aaa\n", "bbb\n", "ccc\n", "ddd\n"] {
            (&log).write_all(line.as_bytes()).unwrap();
        }

        assert_eq!(fs::read_to_string(log.path()).unwrap(), "ddd\n");
        assert_eq!(fs::read_to_string(log.rolled_path(1)).unwrap(), "ccc\n");
        assert_eq!(fs::read_to_string(log.rolled_path(2)).unwrap(), "bbb\n");
        assert!(!log.rolled_path(3).exists());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempdir().unwrap();
        {
            let log = RollingFile::open(dir.path(), "app", RollPolicy::default()).unwrap();
            (&log).write_all(b"first\n").unwrap();
        }
        let log = RollingFile::open(dir.path(), "app", RollPolicy::default()).unwrap();
        (&log).write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(log.path()).unwrap(), "first\nsecond\n");
    }
}
