//! File-backed blob store.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes land in a temp file next
//! to the destination, are synced, and then renamed into place so a crash
//! mid-write leaves the previous blob intact.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::traits::BlobStore;
use crate::error::{Result, StudioError};

/// Blob store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StudioError::InvalidInput(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StudioError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            StudioError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        write_atomic(&path, contents.as_bytes())
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| StudioError::Storage("Invalid blob path".to_string()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StudioError::Storage("Invalid blob filename".to_string()))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| StudioError::Storage(format!("System time error: {}", e)))?
        .as_nanos();
    let temp_path = parent.join(format!(".{}.{}.tmp", filename, nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| StudioError::Storage(format!("Temp file create failed: {}", e)))?;
    let written = file.write_all(data).and_then(|_| file.sync_all());
    drop(file);
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(StudioError::Storage(format!("Temp file write failed: {}", e)));
    }

    replace_file(&temp_path, path)
        .map_err(|e| StudioError::Storage(format!("Atomic rename failed: {}", e)))
}

/// Move `temp_path` over `destination`.
///
/// Some platforms refuse to rename onto an existing file; in that case the
/// destination is removed and the rename retried. The temp file is removed
/// if both attempts fail.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(first) = fs::rename(temp_path, destination) else {
        return Ok(());
    };
    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|second| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            second.kind(),
            format!("initial: {}, retry: {}", first, second),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert!(store.read("studioClientRecords").unwrap().is_none());
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("studio");
        let mut store = FileBlobStore::new(&nested);

        store.write("records", "[1,2]").unwrap();

        let path = nested.join("records.json");
        assert_eq!(fs::read_to_string(path).unwrap(), "[1,2]");
    }

    #[test]
    fn test_write_overwrites_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let mut store = FileBlobStore::new(dir.path());

        store.write("records", "old").unwrap();
        store.write("records", "new").unwrap();

        assert_eq!(store.read("records").unwrap().as_deref(), Some("new"));
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert!(store.blob_path("../escape").is_err());
        assert!(store.blob_path("").is_err());
    }

    #[test]
    fn test_replace_file_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&dest, "old").unwrap();
        fs::write(&temp, "new").unwrap();

        replace_file(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}
