//! Levels: a grid plus start position and metadata.

use crate::error::{TilesError, TilesResult};
use crate::grid::{Grid, Start};

/// Map-code format generations.
///
/// All three remain decodable forever; new exports always produce
/// [`FormatVersion::V3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatVersion {
    /// Legacy base64 JSON dump, no literal version prefix.
    V1,
    /// Legacy digit-per-cell format, `WxH` size spec.
    V2,
    /// Current nibble-packed format, `W,H` size spec.
    #[default]
    V3,
}

impl FormatVersion {
    /// The literal field tag for `|`-delimited formats.
    ///
    /// V1 codes carry no tag on the wire; the value here is for display.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::V1 => "V1",
            Self::V2 => "V2",
            Self::V3 => "V3",
        }
    }
}

/// A decoded or freshly authored level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: String,
    pub creator: String,
    pub grid: Grid,
    pub start: Start,
    /// Format generation this level was decoded from, or the default for
    /// newly authored levels.
    pub version: FormatVersion,
}

impl Level {
    /// Creates a level, checking that `start` lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`TilesError::StartOutOfBounds`] otherwise.
    pub fn new(
        name: impl Into<String>,
        creator: impl Into<String>,
        grid: Grid,
        start: Start,
    ) -> TilesResult<Self> {
        Self::with_version(name, creator, grid, start, FormatVersion::default())
    }

    /// Creates a level tagged with the format generation it came from.
    pub fn with_version(
        name: impl Into<String>,
        creator: impl Into<String>,
        grid: Grid,
        start: Start,
        version: FormatVersion,
    ) -> TilesResult<Self> {
        if !grid.contains(start) {
            return Err(TilesError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(Self {
            name: name.into(),
            creator: creator.into(),
            grid,
            start,
            version,
        })
    }
}
