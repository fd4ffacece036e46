//! The persisted saved-map record.

use serde::{Deserialize, Serialize};

/// One saved custom map.
///
/// The field names are part of the persisted JSON format. `code` is always a
/// full map code that [`mapcode::decode`] accepts; `date` is the display
/// rendering of `timestamp` (`YYYY.MM.DD HH:MM`), kept denormalized because
/// older records carried only the string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMap {
    pub id: u64,
    pub name: String,
    pub creator: String,
    pub code: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub timestamp: u64,
}
