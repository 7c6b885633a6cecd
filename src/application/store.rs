//! The application store: one in-memory sequence of job application
//! records, mirrored to a key-value storage backend on every mutation.
//!
//! The store is an explicit context object rather than ambient global
//! state, so tests and callers can construct isolated instances against
//! whatever backend they choose.

use crate::domain::{
    seed_applications, ApplicationDraft, ApplicationPatch, ApplicationRecord, Stats, StoreResult,
};
use log::{debug, info};
use std::time::{SystemTime, UNIX_EPOCH};

/// The single key under which the whole serialized sequence lives.
pub const STORAGE_KEY: &str = "jobApplications";

/// A synchronous string key-value backend, in the shape of browser-local
/// storage: whole-value reads and writes, one value per key.
///
/// An absent key is `Ok(None)`, never an error. Implementations live in
/// the infrastructure layer.
pub trait Storage {
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// State container for job application records.
///
/// Owns the ordered sequence (insertion order is display and storage
/// order) and a storage backend. Construction loads the persisted
/// sequence, seeding three sample records when nothing has been
/// persisted yet. Every mutator rewrites the whole persisted value.
///
/// # Examples
///
/// ```
/// use apptrack::application::ApplicationStore;
/// use apptrack::infrastructure::MemoryStorage;
///
/// let store = ApplicationStore::open(MemoryStorage::new()).unwrap();
/// assert_eq!(store.applications().len(), 3); // seeded on first run
/// assert_eq!(store.stats().pending, 2);
/// ```
#[derive(Debug)]
pub struct ApplicationStore<S: Storage> {
    storage: S,
    records: Vec<ApplicationRecord>,
    /// Largest id handed out so far, as a number. Ids are minted as
    /// `max(now_millis, last_id + 1)` so rapid adds within one clock
    /// tick still get distinct, strictly increasing ids.
    last_id: u64,
}

impl<S: Storage> ApplicationStore<S> {
    /// Opens a store over the given backend and loads the persisted
    /// sequence.
    ///
    /// If the storage key is absent, the three-record seed list is
    /// installed and persisted immediately. If the key holds a value
    /// that is not a valid serialized sequence, the parse failure
    /// propagates as [`StoreError::Parse`](crate::domain::StoreError)
    /// rather than being papered over with seed data, so corruption
    /// stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails, if the persisted
    /// value is malformed, or if persisting the seed list fails.
    pub fn open(storage: S) -> StoreResult<Self> {
        let mut store = Self {
            storage,
            records: Vec::new(),
            last_id: 0,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> StoreResult<()> {
        match self.storage.read(STORAGE_KEY)? {
            Some(raw) => {
                self.records = serde_json::from_str(&raw)?;
                debug!("loaded {} applications from storage", self.records.len());
            }
            None => {
                self.records = seed_applications();
                info!("no persisted applications, installing seed data");
                self.save()?;
            }
        }
        self.last_id = self
            .records
            .iter()
            .filter_map(|r| r.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Ok(())
    }

    fn save(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        self.storage.write(STORAGE_KEY, &json)
    }

    fn next_id(&mut self) -> String {
        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = now_millis.max(self.last_id.saturating_add(1));
        self.last_id.to_string()
    }

    /// The current sequence, in insertion order.
    pub fn applications(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Looks up a single record by id.
    pub fn get(&self, id: &str) -> Option<&ApplicationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Status counts over the current sequence, recomputed on each call.
    pub fn stats(&self) -> Stats {
        Stats::tally(&self.records)
    }

    /// Appends a new record and persists the sequence.
    ///
    /// The store assigns the id; the draft cannot carry one. Returns the
    /// generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated sequence fails; the
    /// in-memory append still took effect in that case.
    pub fn add(&mut self, draft: ApplicationDraft) -> StoreResult<String> {
        let id = self.next_id();
        info!("adding application {} ({})", id, draft.company);
        self.records.push(draft.into_record(id.clone()));
        self.save()?;
        Ok(id)
    }

    /// Overwrites the patched fields of the first record with the given
    /// id, preserving its position, then persists.
    ///
    /// An unknown id is a silent no-op: nothing changes in memory and
    /// nothing is written, so the persisted value stays byte-for-byte
    /// identical.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated sequence fails.
    pub fn update(&mut self, id: &str, patch: &ApplicationPatch) -> StoreResult<()> {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            debug!("update on unknown application id {}, ignoring", id);
            return Ok(());
        };
        patch.apply_to(record);
        info!("updated application {}", id);
        self.save()
    }

    /// Removes every record with the given id (at most one, in practice)
    /// and persists, whether or not anything matched.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the sequence fails.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        info!(
            "deleted {} application(s) with id {}",
            before - self.records.len(),
            id
        );
        self.save()
    }

    /// Empties the sequence and persists the empty list.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting fails.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        info!("clearing all {} applications", self.records.len());
        self.records.clear();
        self.save()
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
