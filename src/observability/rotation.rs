//! Size-capped append-only file with numbered backups.
//!
//! When the live file grows past the cap it is shifted to `<name>.1`, the
//! previous `<name>.1` to `<name>.2`, and so on; the oldest backup beyond the
//! retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{FlocusError, Result};

/// Live file size that triggers a rotation (5 MiB).
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept next to the live file.
pub const BACKUPS: usize = 2;

/// Append-only line writer that rotates by size.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Writer for `path` with the default cap and retention.
    ///
    /// Nothing is opened until the first line is written.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_BYTES, BACKUPS)
    }

    /// Writer with an explicit cap and retention.
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns [`FlocusError::Io`] when rotating, opening or writing fails.
    pub fn append_line(&self, line: &str) -> Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| {
                FlocusError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "trace file lock poisoned",
                ))
            })?;

        let full = fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.max_bytes);
        if full {
            *handle = None;
            self.shift_backups()?;
        }

        let file = match handle.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = handle.insert(file);

        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn shift_backups(&self) -> Result<()> {
        if self.backups == 0 {
            remove_if_present(&self.path)?;
            return Ok(());
        }

        remove_if_present(&self.backup_path(self.backups))?;
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }

        tracing::trace!(path = %self.path.display(), "trace file rotated");
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone());

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        assert_eq!(read(&path), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 4, 2);

        for line in ["one", "two", "three", "four"] {
            file.append_line(line).unwrap();
        }

        assert_eq!(read(&path), "four\n");
        assert_eq!(read(&dir.path().join("trace.json.1")), "three\n");
        assert_eq!(read(&dir.path().join("trace.json.2")), "two\n");
        assert!(!dir.path().join("trace.json.3").exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 4, 0);

        file.append_line("first").unwrap();
        file.append_line("second").unwrap();

        assert_eq!(read(&path), "second\n");
        assert!(!dir.path().join("trace.json.1").exists());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let file = RotatingFile::new(PathBuf::from("/definitely/not/here/trace.json"));
        let err = file.append_line("x").unwrap_err();
        assert!(matches!(err, FlocusError::Io(_)));
    }
}
