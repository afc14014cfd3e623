// PRDatabase — Record Store
//
// In-memory collection of the signed-in user's records, newest first.
// Each mutation writes the candidate collection first and only then
// replaces the in-memory copy, so a failed write changes nothing.

use chrono::Utc;
use uuid::Uuid;

use crate::store::{ClientRecord, NewClientRecord, RecordRepository};

use super::search::filter_records;
use super::RecordError;

pub struct RecordStore<'a> {
    repo: &'a dyn RecordRepository,
    owner: Option<String>,
    entries: Vec<ClientRecord>,
}

impl<'a> RecordStore<'a> {
    pub fn new(repo: &'a dyn RecordRepository) -> Self {
        Self {
            repo,
            owner: None,
            entries: Vec::new(),
        }
    }

    /// Replace the in-memory collection with `user_id`'s persisted one.
    pub fn load(&mut self, user_id: &str) -> Result<(), RecordError> {
        let entries = self.fetch(user_id)?;
        self.install(user_id, entries);
        Ok(())
    }

    /// Read `user_id`'s persisted collection without installing it.
    pub fn fetch(&self, user_id: &str) -> Result<Vec<ClientRecord>, RecordError> {
        let entries = self.repo.load_records(user_id)?;
        tracing::debug!(user_id = %user_id, count = entries.len(), "Records loaded");
        Ok(entries)
    }

    /// Make `entries` the in-memory collection owned by `user_id`.
    pub fn install(&mut self, user_id: &str, entries: Vec<ClientRecord>) {
        self.owner = Some(user_id.to_string());
        self.entries = entries;
    }

    /// Forget the in-memory collection. The persisted copy is kept.
    pub fn clear(&mut self) {
        self.owner = None;
        self.entries.clear();
    }

    /// Id of the user whose records are loaded.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// The full, unfiltered collection.
    pub fn records(&self) -> &[ClientRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ClientRecord> {
        self.entries.iter().find(|r| r.id == id)
    }

    /// Create a record at the front of the collection.
    pub fn add(&mut self, new_record: NewClientRecord) -> Result<ClientRecord, RecordError> {
        let owner = self.owner.as_deref().ok_or(RecordError::NoActiveSession)?;

        let record = new_record.into_record(self.next_id());
        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(record.clone());
        updated.extend(self.entries.iter().cloned());

        self.repo.save_records(owner, &updated)?;
        tracing::info!(user_id = %owner, record_id = %record.id, "Record added");

        self.entries = updated;
        Ok(record)
    }

    /// Remove the record with `id`. Returns whether one was removed; a
    /// missing id is not an error.
    pub fn delete(&mut self, id: &str) -> Result<bool, RecordError> {
        let owner = self.owner.as_deref().ok_or(RecordError::NoActiveSession)?;

        let updated: Vec<ClientRecord> =
            self.entries.iter().filter(|r| r.id != id).cloned().collect();
        let removed = updated.len() != self.entries.len();

        self.repo.save_records(owner, &updated)?;
        if removed {
            tracing::info!(user_id = %owner, record_id = %id, "Record deleted");
        }

        self.entries = updated;
        Ok(removed)
    }

    /// Records whose name or email contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&ClientRecord> {
        filter_records(&self.entries, query)
    }

    /// Millisecond timestamp, bumped past the newest existing id so ids stay
    /// unique when several records land in the same millisecond. A UUID is
    /// used once no numeric id is left above the newest one.
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let newest = self
            .entries
            .iter()
            .filter_map(|r| r.id.parse::<i64>().ok())
            .max();

        match newest {
            Some(newest) if newest >= now => newest
                .checked_add(1)
                .map(|id| id.to_string())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            _ => now.to_string(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
