use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entry::CacheEntry;
use crate::error::CacheError;

const ENTRY_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

/// Persistent tier: one `<hash>.json` file per entry under `dir`.
#[derive(Debug, Clone)]
pub(crate) struct DiskTier {
    dir: PathBuf,
}

impl DiskTier {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn entry_path(&self, hash: &str) -> PathBuf {
        self.dir.join(format!("{hash}.{ENTRY_EXTENSION}"))
    }

    /// Read an entry. A missing file is `Ok(None)`.
    pub(crate) fn read(&self, hash: &str) -> Result<Option<CacheEntry>, CacheError> {
        let path = self.entry_path(hash);
        match fs::read_to_string(&path) {
            Ok(text) => parse_entry(&path, &text).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::io(path, e)),
        }
    }

    /// Write an entry to a temporary file, then rename it into place.
    pub(crate) fn write(&self, hash: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|e| CacheError::io(&self.dir, e))?;

        let text = serde_json::to_string(entry).map_err(|source| CacheError::Corrupt {
            path: self.entry_path(hash),
            source,
        })?;

        let temp = self.dir.join(format!("{hash}.{TEMP_EXTENSION}"));
        fs::write(&temp, text).map_err(|e| CacheError::io(&temp, e))?;

        let path = self.entry_path(hash);
        fs::rename(&temp, &path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            CacheError::io(path, e)
        })
    }

    /// Paths of every entry file. A missing directory has no entries.
    pub(crate) fn entry_paths(&self) -> Result<Vec<PathBuf>, CacheError> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::io(&self.dir, e)),
        };

        Ok(read_dir
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION))
            .collect())
    }

    /// Delete entries older than `max_age_ms` and entries that cannot be
    /// parsed. Returns the number of files removed.
    pub(crate) fn remove_older_than(&self, max_age_ms: u64, now: u64) -> Result<usize, CacheError> {
        let mut removed = 0;
        for path in self.entry_paths()? {
            let stale = match fs::read_to_string(&path) {
                Ok(text) => match parse_entry(&path, &text) {
                    Ok(entry) => entry.age_millis(now) > max_age_ms,
                    Err(e) => {
                        tracing::debug!(error = %e, "dropping unreadable cache entry");
                        true
                    }
                },
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "cache entry read failed");
                    true
                }
            };
            if stale && fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove the whole directory.
    pub(crate) fn clear(&self) -> Result<(), CacheError> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::io(&self.dir, e)),
        }
    }

    /// Entry count and total size in bytes.
    pub(crate) fn usage(&self) -> Result<(usize, u64), CacheError> {
        let paths = self.entry_paths()?;
        let bytes = paths
            .iter()
            .filter_map(|path| fs::metadata(path).ok())
            .map(|meta| meta.len())
            .sum();
        Ok((paths.len(), bytes))
    }
}

fn parse_entry(path: &Path, text: &str) -> Result<CacheEntry, CacheError> {
    serde_json::from_str(text).map_err(|source| CacheError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn tier() -> (tempfile::TempDir, DiskTier) {
        let tmp = tempfile::tempdir().unwrap();
        let disk = DiskTier::new(tmp.path().join("cache"));
        (tmp, disk)
    }

    fn entry(output: &str, created_at: u64) -> CacheEntry {
        CacheEntry {
            output: output.to_string(),
            position_map: None,
            created_at,
            options: Value::Null,
        }
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let (_tmp, disk) = tier();
        assert!(disk.read("abc").unwrap().is_none());
        assert_eq!(disk.usage().unwrap(), (0, 0));
        assert!(disk.clear().is_ok());
    }

    #[test]
    fn test_write_then_read() {
        let (_tmp, disk) = tier();
        disk.write("abc", &entry("out", 1)).unwrap();
        assert_eq!(disk.read("abc").unwrap(), Some(entry("out", 1)));
        assert!(disk.entry_path("abc").exists());
        assert!(!disk.dir().join("abc.tmp").exists());
    }

    #[test]
    fn test_corrupt_entry_is_an_error() {
        let (_tmp, disk) = tier();
        fs::create_dir_all(disk.dir()).unwrap();
        fs::write(disk.entry_path("bad"), "{ not json").unwrap();
        assert!(matches!(disk.read("bad"), Err(CacheError::Corrupt { .. })));
    }

    #[test]
    fn test_remove_older_than() {
        let (_tmp, disk) = tier();
        disk.write("old", &entry("o", 1_000)).unwrap();
        disk.write("new", &entry("n", 9_000)).unwrap();
        fs::write(disk.entry_path("bad"), "garbage").unwrap();
        fs::write(disk.dir().join("notes.txt"), "ignored").unwrap();

        let removed = disk.remove_older_than(5_000, 10_000).unwrap();
        assert_eq!(removed, 2);
        assert!(disk.read("old").unwrap().is_none());
        assert!(disk.read("new").unwrap().is_some());
        assert!(disk.dir().join("notes.txt").exists());
    }

    #[test]
    fn test_usage_counts_entry_files_only() {
        let (_tmp, disk) = tier();
        disk.write("a", &entry("x", 1)).unwrap();
        disk.write("b", &entry("y", 1)).unwrap();
        fs::write(disk.dir().join("c.tmp"), "partial").unwrap();
        let (count, bytes) = disk.usage().unwrap();
        assert_eq!(count, 2);
        assert!(bytes > 0);
    }

    #[test]
    fn test_clear_removes_directory() {
        let (_tmp, disk) = tier();
        disk.write("a", &entry("x", 1)).unwrap();
        disk.clear().unwrap();
        assert!(!disk.dir().exists());
    }
}
