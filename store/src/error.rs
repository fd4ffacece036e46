//! Error types for the saved-map collection.

use std::fmt;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading, saving, or mutating the collection.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying persistence I/O failed.
    Io(std::io::Error),

    /// The persisted list is not valid JSON.
    Corrupt(serde_json::Error),

    /// The map code being imported does not decode.
    InvalidCode(mapcode::MapCodeError),

    /// No saved map with the given id.
    NotFound { id: u64 },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failure: {err}"),
            Self::Corrupt(err) => write!(f, "persisted map list is corrupt: {err}"),
            Self::InvalidCode(err) => write!(f, "invalid map code: {err}"),
            Self::NotFound { id } => write!(f, "no saved map with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
            Self::InvalidCode(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<mapcode::MapCodeError> for StoreError {
    fn from(err: mapcode::MapCodeError) -> Self {
        Self::InvalidCode(err)
    }
}
