//! Saved custom-map collection and remote map-code fetch.
//!
//! The game keeps every imported custom map as an ordered record (id, name,
//! creator, the full map code, display date, timestamp) in a key-value
//! persistence layer under a fixed key. This crate owns that collection and
//! the one operation that legitimately suspends: fetching a remotely hosted
//! map code with a bounded timeout.
//!
//! # Design Principles
//!
//! - **The codec guards the door** - A code is only stored if
//!   [`mapcode::decode`] accepts it; `code` fields read back from storage
//!   are always decodable.
//! - **Network failures look like bad codes** - Callers of [`fetch_map`]
//!   cannot distinguish "bad network" from "bad code"; both are the same
//!   decode-failure outcome.

mod entry;
mod error;
mod fetch;
mod kv;
mod library;

pub use entry::SavedMap;
pub use error::{StoreError, StoreResult};
pub use fetch::{fetch_map, FetchError, FETCH_TIMEOUT};
pub use kv::{FileStore, MapStore, MemoryStore};
pub use library::{MapLibrary, STORAGE_KEY};
