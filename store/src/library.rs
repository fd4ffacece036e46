//! The saved custom-map collection.

use chrono::{Local, TimeZone};
use tracing::{debug, warn};

use crate::entry::SavedMap;
use crate::error::{StoreError, StoreResult};
use crate::kv::MapStore;

/// Fixed key the collection is persisted under.
pub const STORAGE_KEY: &str = "colorloop_custom_maps";

/// Fallback shown when an imported level carries no name.
const DEFAULT_NAME: &str = "Custom Map";

/// Fallback shown when an imported level carries no creator.
const DEFAULT_CREATOR: &str = "Anonymous";

/// The in-memory collection plus its backing store.
///
/// Every mutation persists the whole list before returning, so the store is
/// never behind the in-memory state.
#[derive(Debug)]
pub struct MapLibrary<S> {
    store: S,
    maps: Vec<SavedMap>,
}

impl<S: MapStore> MapLibrary<S> {
    /// Opens the collection, reading whatever the store holds.
    ///
    /// A missing key is an empty collection; a present but corrupt list is
    /// an error rather than silent data loss.
    pub fn open(store: S) -> StoreResult<Self> {
        let maps = match store.load(STORAGE_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(StoreError::Corrupt)?,
            None => Vec::new(),
        };
        debug!(count = maps.len(), "opened saved-map collection");
        Ok(Self { store, maps })
    }

    /// Imports a map code, decoding it first.
    ///
    /// The entry's name and creator come from the decoded level, with the
    /// historical fallbacks for empty fields. Returns the stored entry.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidCode`] if the codec rejects `code`; persistence
    /// errors otherwise.
    pub fn import(&mut self, code: &str) -> StoreResult<&SavedMap> {
        let now = Local::now();
        self.import_at(code, now.timestamp_millis().max(0) as u64)
    }

    /// [`import`](Self::import) with an explicit timestamp, for tests and
    /// for replaying records.
    pub fn import_at(&mut self, code: &str, timestamp: u64) -> StoreResult<&SavedMap> {
        let code = code.trim();
        let level = mapcode::decode(code).map_err(|err| {
            warn!(%err, "rejected map code on import");
            StoreError::InvalidCode(err)
        })?;

        let id = self.next_id(timestamp);
        let entry = SavedMap {
            id,
            name: non_empty_or(level.name, DEFAULT_NAME),
            creator: non_empty_or(level.creator, DEFAULT_CREATOR),
            code: code.to_string(),
            date: format_date(timestamp),
            timestamp,
        };
        debug!(id, name = %entry.name, "imported custom map");
        let index = self.maps.len();
        self.maps.push(entry);
        if let Err(err) = self.persist() {
            self.maps.pop();
            return Err(err);
        }
        Ok(&self.maps[index])
    }

    /// All saved maps, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<&SavedMap> {
        let mut maps: Vec<&SavedMap> = self.maps.iter().collect();
        maps.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        maps
    }

    /// Looks up a saved map by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&SavedMap> {
        self.maps.iter().find(|map| map.id == id)
    }

    /// Removes a saved map by id and persists the shrunken list.
    pub fn remove(&mut self, id: u64) -> StoreResult<()> {
        let before = self.maps.len();
        self.maps.retain(|map| map.id != id);
        if self.maps.len() == before {
            return Err(StoreError::NotFound { id });
        }
        debug!(id, "removed custom map");
        self.persist()
    }

    /// Number of saved maps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    // Timestamps double as ids (the original used Date.now() for both);
    // bump past collisions from same-millisecond imports.
    fn next_id(&self, timestamp: u64) -> u64 {
        let mut id = timestamp;
        while self.maps.iter().any(|map| map.id == id) {
            id += 1;
        }
        id
    }

    fn persist(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.maps).map_err(StoreError::Corrupt)?;
        self.store.save(STORAGE_KEY, &json)
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Renders a millisecond timestamp as the `YYYY.MM.DD HH:MM` display string.
fn format_date(timestamp: u64) -> String {
    let millis = i64::try_from(timestamp).unwrap_or(0);
    match Local.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.format("%Y.%m.%d %H:%M").to_string()
        }
        chrono::LocalResult::None => String::new(),
    }
}
