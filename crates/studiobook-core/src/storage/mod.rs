//! Durable storage for the record list.
//!
//! - **traits**: the `BlobStore` interface and the fixed storage key
//! - **file**: JSON files in a data directory, written atomically
//! - **memory**: an in-process map for tests and previews

mod file;
mod memory;
mod traits;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::{BlobStore, STORAGE_KEY};
