//! Durable blob storage trait definition.
//!
//! The record store persists its whole record list as one named blob. The
//! `BlobStore` trait is the only seam between the store and the medium, so
//! the same store logic runs against files on disk or an in-memory map.

use crate::error::Result;

/// Key under which the record list is persisted.
pub const STORAGE_KEY: &str = "studioClientRecords";

/// A keyed store of whole text blobs.
///
/// Implementations must ensure:
/// - `write` replaces the previous contents all-or-nothing
/// - `read` never observes a partially written blob
pub trait BlobStore {
    /// Read the blob stored under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when nothing has been stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::Storage` if the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::Storage` if the write cannot be completed; the
    /// previous contents are left in place.
    fn write(&mut self, key: &str, contents: &str) -> Result<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<()> {
        (**self).write(key, contents)
    }
}
