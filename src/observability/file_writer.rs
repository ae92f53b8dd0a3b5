//! Rotating file writer with size-based rotation and backup retention.
//!
//! Keeps trace files from growing without bound: once the active file passes
//! the size limit it is renamed with a timestamp suffix and a fresh file is
//! started. Only the newest backups are kept.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Backup suffix format. Lexical order equals chronological order.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.6f";

/// Thread-safe rotating file writer.
///
/// # Backup Naming
///
/// `<file name>.<timestamp>`, e.g. `vitrine-otlp.json.20240131T101500.123456`.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened on first write.
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening, writing or flushing fails, or if the lock is
    /// poisoned.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        let file = match writer.take() {
            Some(file) => writer.insert(file),
            None => writer.insert(OpenOptions::new().create(true).append(true).open(&self.file_path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> std::io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return Ok(());
        };
        if metadata.len() > self.max_bytes {
            *writer = None;
            self.rotate_files()?;
        }
        Ok(())
    }

    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = chrono::Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let mut backup_name = self.file_path.as_os_str().to_os_string();
        backup_name.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes all but the newest `max_backups` backups. Individual removal
    /// errors are ignored.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "invalid trace file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Newest first.
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| name.starts_with("trace.json."))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn lines_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn oversized_file_is_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        let rotated = backups(dir.path());
        assert_eq!(rotated.len(), 1);
        assert_eq!(fs::read_to_string(dir.path().join(&rotated[0])).unwrap(), "0123456789\n");
    }

    #[test]
    fn only_newest_backups_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        for stamp in ["20200101T000000.000001", "20200101T000000.000002", "20200101T000000.000003"] {
            fs::write(dir.path().join(format!("trace.json.{stamp}")), "old\n").unwrap();
        }
        fs::write(&path, "0123456789\n").unwrap();

        let writer = FileWriter::with_limits(path, 4, 2);
        writer.write_line("fresh").unwrap();

        let kept = backups(dir.path());
        assert_eq!(kept.len(), 2);
        assert!(!kept.iter().any(|name| name.ends_with(".000001")));
        assert!(!kept.iter().any(|name| name.ends_with(".000002")));
    }
}
