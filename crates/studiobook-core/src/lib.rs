//! # Studiobook Core
//!
//! Core library for Studiobook - a client-record manager for a photography
//! and event studio.
//!
//! This crate owns the record model, durable storage, and report aggregation,
//! independent of any presentation layer.
//!
//! ## Architecture
//!
//! - **record**: Client record model, upsert requests, normalization rules
//! - **storage**: Durable blob storage trait and implementations
//! - **store**: The record store (load/save, upsert, delete, search, summary)
//! - **search**: Search matching and date ordering
//! - **summary**: Dashboard counts and totals
//! - **report**: Monthly and yearly report aggregation
//! - **seed**: First-run sample dataset

pub mod error;
pub mod record;
pub mod report;
pub mod search;
pub mod seed;
pub mod storage;
pub mod store;
pub mod summary;

pub use error::{Result, StudioError};
pub use record::{ClientInput, ClientRecord};
pub use report::{build_report, Granularity, Report, ReportEntry, ReportLine};
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore, STORAGE_KEY};
pub use store::{ClientStore, LoadOutcome, UpsertKind, UpsertOutcome};
pub use summary::Summary;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
