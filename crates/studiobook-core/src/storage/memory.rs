//! In-memory blob store.

use std::collections::HashMap;

use super::traits::BlobStore;
use crate::error::Result;

/// Blob store backed by a `HashMap`; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `contents` already stored under `key`.
    pub fn with_blob(key: impl Into<String>, contents: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), contents.into());
        Self { blobs }
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryBlobStore::new();
        assert!(store.read("absent").unwrap().is_none());
    }

    #[test]
    fn test_write_overwrites() {
        let mut store = MemoryBlobStore::with_blob("k", "old");
        store.write("k", "new").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("new"));
    }
}
