//! The client record store.
//!
//! `ClientStore` owns the in-memory record list and the blob store it is
//! persisted to. Every mutation (`upsert`, `delete`) rewrites the whole blob
//! before returning, and only takes effect in memory once that write
//! succeeded. Reads (`list`, `search`, `summary`, `report`) never touch
//! storage.
//!
//! Malformed persisted data is never an error. A blob that is not a JSON
//! array is logged, discarded, and replaced by the sample dataset. Array
//! elements that are not client objects are logged and skipped.

use std::collections::HashSet;

use chrono::{Local, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::record::{generate_client_id, ClientInput, ClientRecord};
use crate::report::{build_report, Granularity, Report};
use crate::search::{matches_term, normalize_term, sort_by_wedding_day};
use crate::seed::sample_clients;
use crate::storage::{BlobStore, STORAGE_KEY};
use crate::summary::{summarize, Summary};

/// What `load` found in durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// A persisted record list was read (possibly empty)
    Loaded { count: usize },
    /// Nothing was stored yet; the sample dataset was installed
    Seeded { count: usize },
    /// The stored blob was unreadable; it was replaced by the sample dataset
    Recovered { count: usize, reason: String },
}

/// Whether an upsert created or updated a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertKind {
    Inserted,
    Updated,
}

/// Result of an upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertOutcome {
    pub id: String,
    pub kind: UpsertKind,
}

/// Record store over a durable blob.
#[derive(Debug)]
pub struct ClientStore<B: BlobStore> {
    backend: B,
    records: Vec<ClientRecord>,
}

impl<B: BlobStore> ClientStore<B> {
    /// Create an empty, unloaded store. Call [`ClientStore::load`] next.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    /// Create a store and load it from `backend`.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::Storage` only if seeding could not be persisted.
    pub fn open(backend: B) -> Result<(Self, LoadOutcome)> {
        let mut store = Self::new(backend);
        let outcome = store.load()?;
        debug!(?outcome, "Opened client store");
        Ok((store, outcome))
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// A missing blob seeds the sample dataset. An unreadable or unparsable
    /// blob is logged and also seeds. A persisted empty list stays empty, so
    /// a user who deleted every record does not get the samples back.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::Storage` if the seeded dataset could not be
    /// written. The seeded records are in memory regardless.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let recovery_reason = match self.backend.read(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(values) => {
                    self.records = normalize_loaded(decode_stored(values));
                    return Ok(LoadOutcome::Loaded {
                        count: self.records.len(),
                    });
                }
                Err(err) => {
                    warn!(error = %err, "Stored client records are corrupted; resetting");
                    Some(err.to_string())
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "Failed to read stored client records; resetting");
                Some(err.to_string())
            }
        };

        self.records = sample_clients(Utc::now());
        let count = self.records.len();
        info!(count, "Seeded sample clients");
        self.save()?;

        Ok(match recovery_reason {
            Some(reason) => LoadOutcome::Recovered { count, reason },
            None => LoadOutcome::Seeded { count },
        })
    }

    /// Write the full record list to durable storage.
    pub fn save(&mut self) -> Result<()> {
        persist(&mut self.backend, &self.records)
    }

    /// Insert a new record or merge into an existing one, then save.
    ///
    /// A request whose id matches an existing record is shallow-merged into
    /// it. Otherwise the request is appended under its id, or under a fresh
    /// id when it has none.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::Storage` if the write fails; the in-memory list
    /// is then left unchanged.
    pub fn upsert(&mut self, input: ClientInput) -> Result<UpsertOutcome> {
        let mut records = self.records.clone();
        let existing = input
            .target_id()
            .and_then(|id| records.iter().position(|record| record.id == id));

        let outcome = match existing {
            Some(index) => {
                let record = &mut records[index];
                record.merge(input);
                UpsertOutcome {
                    id: record.id.clone(),
                    kind: UpsertKind::Updated,
                }
            }
            None => {
                let id = input
                    .target_id()
                    .map(str::to_string)
                    .unwrap_or_else(generate_client_id);
                records.push(ClientRecord::from_input(input, id.clone(), Utc::now()));
                UpsertOutcome {
                    id,
                    kind: UpsertKind::Inserted,
                }
            }
        };

        persist(&mut self.backend, &records)?;
        self.records = records;
        debug!(id = %outcome.id, kind = ?outcome.kind, "Upserted client");
        Ok(outcome)
    }

    /// Remove the record with `id`, then save.
    ///
    /// Returns whether a record was removed; an unknown id is a no-op.
    /// Callers are expected to have confirmed the deletion with the user.
    /// A failed write leaves the record in place.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut records = self.records.clone();
        records.retain(|record| record.id != id);
        let removed = records.len() != self.records.len();
        persist(&mut self.backend, &records)?;
        self.records = records;
        debug!(id, removed, "Deleted client");
        Ok(removed)
    }

    /// Look up one record.
    pub fn get(&self, id: &str) -> Option<&ClientRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All records in store order.
    pub fn list(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `term`, ascending by wedding date (undated last).
    ///
    /// A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&ClientRecord> {
        let needle = normalize_term(term);
        let mut matches: Vec<&ClientRecord> = self
            .records
            .iter()
            .filter(|record| matches_term(record, &needle))
            .collect();
        sort_by_wedding_day(&mut matches);
        matches
    }

    /// Dashboard summary as of the local calendar date.
    pub fn summary(&self) -> Summary {
        self.summary_on(Local::now().date_naive())
    }

    /// Dashboard summary as of `today`.
    pub fn summary_on(&self, today: NaiveDate) -> Summary {
        summarize(&self.records, today)
    }

    /// Build a report over the current records.
    pub fn report(&self, granularity: Granularity) -> Report {
        build_report(&self.records, granularity)
    }

    /// The underlying blob store.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn persist<B: BlobStore>(backend: &mut B, records: &[ClientRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    backend.write(STORAGE_KEY, &json)?;
    debug!(count = records.len(), "Saved client records");
    Ok(())
}

/// Decode stored elements, skipping any that are not client objects.
fn decode_stored(values: Vec<Value>) -> Vec<ClientRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match ClientRecord::from_stored(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(index, error = %err, "Skipping unreadable stored client");
                None
            }
        })
        .collect()
}

/// Give blank ids a fresh value and drop later duplicates of an id.
fn normalize_loaded(records: Vec<ClientRecord>) -> Vec<ClientRecord> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(records.len());

    for mut record in records {
        if record.id.trim().is_empty() {
            record.id = generate_client_id();
            debug!(id = %record.id, "Assigned id to stored client without one");
        }
        if seen.insert(record.id.clone()) {
            kept.push(record);
        } else {
            warn!(id = %record.id, "Dropping stored client with duplicate id");
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudioError;
    use crate::storage::MemoryBlobStore;
    use serde_json::json;

    /// Reads from memory; every write fails.
    struct FailingWrites(MemoryBlobStore);

    impl BlobStore for FailingWrites {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.0.read(key)
        }

        fn write(&mut self, _key: &str, _contents: &str) -> Result<()> {
            Err(StudioError::Storage("disk full".to_string()))
        }
    }

    fn empty_store() -> ClientStore<MemoryBlobStore> {
        ClientStore::open(MemoryBlobStore::with_blob(STORAGE_KEY, "[]")).unwrap().0
    }

    fn persisted(store: &ClientStore<MemoryBlobStore>) -> Vec<ClientRecord> {
        let raw = store.backend().read(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_missing_blob_seeds_and_persists() {
        let mut store = ClientStore::new(MemoryBlobStore::new());
        let outcome = store.load().unwrap();

        assert_eq!(outcome, LoadOutcome::Seeded { count: 4 });
        assert_eq!(store.len(), 4);
        assert_eq!(persisted(&store).len(), 4);
    }

    #[test]
    fn test_corrupted_blob_recovers_with_seed() {
        let mut store = ClientStore::new(MemoryBlobStore::with_blob(STORAGE_KEY, "{not json"));
        let outcome = store.load().unwrap();

        assert!(matches!(outcome, LoadOutcome::Recovered { count: 4, .. }));
        assert_eq!(store.len(), 4);
        assert_eq!(persisted(&store).len(), 4);
    }

    #[test]
    fn test_persisted_empty_list_is_not_reseeded() {
        let mut store = ClientStore::new(MemoryBlobStore::with_blob(STORAGE_KEY, "[]"));
        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded { count: 0 });
        assert!(store.is_empty());
    }

    #[test]
    fn test_upsert_inserts_with_generated_id() {
        let mut store = empty_store();
        let outcome = store
            .upsert(ClientInput::new().client_name("Anu"))
            .unwrap();

        assert_eq!(outcome.kind, UpsertKind::Inserted);
        assert!(!outcome.id.is_empty());
        assert_eq!(store.get(&outcome.id).unwrap().client_name, "Anu");
        assert_eq!(persisted(&store).len(), 1);
    }

    #[test]
    fn test_upsert_unknown_id_inserts_under_that_id() {
        let mut store = empty_store();
        let outcome = store
            .upsert(ClientInput::for_id("client-42").client_name("Kiran"))
            .unwrap();

        assert_eq!(outcome.kind, UpsertKind::Inserted);
        assert_eq!(outcome.id, "client-42");
    }

    #[test]
    fn test_upsert_merges_existing() {
        let mut store = empty_store();
        let id = store
            .upsert(
                ClientInput::new()
                    .client_name("Gokul & Pooja")
                    .venue("Platinum Meadows")
                    .advance_payment(200000.0),
            )
            .unwrap()
            .id;
        let created_at = store.get(&id).unwrap().created_at;

        let outcome = store
            .upsert(ClientInput::for_id(&id).payment_status("Paid"))
            .unwrap();

        assert_eq!(outcome.kind, UpsertKind::Updated);
        assert_eq!(store.len(), 1);
        let record = store.get(&id).unwrap();
        assert_eq!(record.payment_status, "Paid");
        assert_eq!(record.venue, "Platinum Meadows");
        assert_eq!(record.advance_payment, 200000.0);
        assert_eq!(record.created_at, created_at);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut store = empty_store();
        let input = ClientInput::for_id("fixed")
            .client_name("Deepak & Deepika")
            .wedding_date("2024-08-09")
            .advance_payment(460000.0)
            .payment_status("Paid");

        store.upsert(input.clone()).unwrap();
        let once = store.get("fixed").unwrap().clone();
        store.upsert(input).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("fixed").unwrap(), &once);
    }

    #[test]
    fn test_delete_removes_and_persists() {
        let mut store = empty_store();
        let id = store.upsert(ClientInput::new().client_name("x")).unwrap().id;

        assert!(store.delete(&id).unwrap());
        assert!(store.get(&id).is_none());
        assert!(persisted(&store).is_empty());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = ClientStore::open(MemoryBlobStore::new()).unwrap().0;
        let before = store.list().to_vec();

        assert!(!store.delete("missing").unwrap());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_deleting_everything_does_not_reseed() {
        let mut store = ClientStore::open(MemoryBlobStore::new()).unwrap().0;
        let ids: Vec<String> = store.list().iter().map(|r| r.id.clone()).collect();
        for id in &ids {
            store.delete(id).unwrap();
        }
        assert!(store.is_empty());

        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_search_blank_returns_all_sorted() {
        let store = ClientStore::open(MemoryBlobStore::new()).unwrap().0;
        let dates: Vec<_> = store
            .search("  ")
            .iter()
            .map(|r| r.wedding_date.as_str())
            .collect();
        assert_eq!(
            dates,
            vec!["2024-08-09", "2024-12-14", "2025-02-23", "2025-05-18"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = ClientStore::open(MemoryBlobStore::new()).unwrap().0;
        let names: Vec<_> = store
            .search("ERODE")
            .iter()
            .map(|r| r.client_name.as_str())
            .collect();
        assert_eq!(names, vec!["Deepak & Deepika", "Ramani & Rajitha"]);

        assert_eq!(store.search("pending").len(), 1);
        assert!(store.search("nowhere").is_empty());
    }

    #[test]
    fn test_summary_on_seeded_store() {
        let store = ClientStore::open(MemoryBlobStore::new()).unwrap().0;
        let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let summary = store.summary_on(today);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.upcoming_this_month, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.advance_total, Some(870000.0));
    }

    #[test]
    fn test_summary_on_empty_store_has_no_advance() {
        let store = empty_store();
        assert_eq!(store.summary().advance_total, None);
    }

    #[test]
    fn test_load_keeps_unknown_fields() {
        let blob = json!([
            {"id": "a", "clientName": "Meera", "weddingDate": "2025-01-01", "albumCount": 3}
        ])
        .to_string();
        let mut store = ClientStore::open(MemoryBlobStore::with_blob(STORAGE_KEY, blob)).unwrap().0;

        store
            .upsert(ClientInput::for_id("a").payment_status("Paid"))
            .unwrap();

        let raw = store.backend().read(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["albumCount"], json!(3));
        assert_eq!(value[0]["paymentStatus"], json!("Paid"));
    }

    #[test]
    fn test_load_drops_duplicate_ids_and_fills_blank_ids() {
        let blob = json!([
            {"id": "dup", "clientName": "first"},
            {"id": "dup", "clientName": "second"},
            {"clientName": "no id"}
        ])
        .to_string();
        let store = ClientStore::open(MemoryBlobStore::with_blob(STORAGE_KEY, blob)).unwrap().0;

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("dup").unwrap().client_name, "first");
        assert!(store.list().iter().all(|r| !r.id.is_empty()));
    }

    #[test]
    fn test_open_reports_load_outcome() {
        let (store, outcome) = ClientStore::open(MemoryBlobStore::new()).unwrap();
        assert_eq!(outcome, LoadOutcome::Seeded { count: 4 });
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_extra_field_named_like_model_field_reloads() {
        let mut store = empty_store();
        store.upsert(ClientInput::for_id("keep")).unwrap();
        store
            .upsert(
                ClientInput::for_id("x")
                    .client_name("A")
                    .extra_field("clientName", json!("B")),
            )
            .unwrap();

        let raw = store.backend().read(STORAGE_KEY).unwrap().unwrap();
        let mut reloaded = ClientStore::new(MemoryBlobStore::with_blob(STORAGE_KEY, raw));

        assert_eq!(reloaded.load().unwrap(), LoadOutcome::Loaded { count: 2 });
        assert!(reloaded.get("keep").is_some());
        assert_eq!(reloaded.get("x").unwrap().client_name, "A");
    }

    #[test]
    fn test_load_skips_non_object_elements() {
        let blob = json!([{"id": "a", "clientName": "Meera"}, null, 7, "x"]).to_string();
        let mut store = ClientStore::new(MemoryBlobStore::with_blob(STORAGE_KEY, blob));

        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded { count: 1 });
        assert_eq!(store.get("a").unwrap().client_name, "Meera");
    }

    #[test]
    fn test_non_array_blob_recovers_with_seed() {
        let blob = json!({"id": "a"}).to_string();
        let mut store = ClientStore::new(MemoryBlobStore::with_blob(STORAGE_KEY, blob));
        assert!(matches!(
            store.load().unwrap(),
            LoadOutcome::Recovered { count: 4, .. }
        ));
    }

    #[test]
    fn test_unparsable_created_at_survives_save() {
        let blob = json!([{"id": "a", "createdAt": "2025-01-01"}]).to_string();
        let mut store = ClientStore::open(MemoryBlobStore::with_blob(STORAGE_KEY, blob)).unwrap().0;

        store
            .upsert(ClientInput::for_id("a").payment_status("Paid"))
            .unwrap();

        let raw = store.backend().read(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["createdAt"], json!("2025-01-01"));
        assert_eq!(value[0]["paymentStatus"], json!("Paid"));
    }

    #[test]
    fn test_failed_write_leaves_records_unchanged() {
        let blob = json!([{"id": "a", "clientName": "Meera", "paymentStatus": "Pending"}])
            .to_string();
        let mut store =
            ClientStore::new(FailingWrites(MemoryBlobStore::with_blob(STORAGE_KEY, blob)));
        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded { count: 1 });

        assert!(store.upsert(ClientInput::new().client_name("New")).is_err());
        assert_eq!(store.len(), 1);

        assert!(store
            .upsert(ClientInput::for_id("a").payment_status("Paid"))
            .is_err());
        assert_eq!(store.get("a").unwrap().payment_status, "Pending");

        assert!(store.delete("a").is_err());
        assert!(store.get("a").is_some());
    }

    #[test]
    fn test_report_delegates() {
        let store = ClientStore::open(MemoryBlobStore::new()).unwrap().0;
        let report = store.report(Granularity::Yearly);
        assert_eq!(report.entries.len(), 2);
    }
}
