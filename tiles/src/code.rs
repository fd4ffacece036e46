//! The closed tile alphabet.

use crate::error::{TilesError, TilesResult};

/// Largest value a grid cell may hold.
///
/// Codes `0..=9` are in use today; `10..=15` are headroom the bit-packed V3
/// map-code format can already carry.
pub const MAX_CODE: u8 = 15;

/// A single grid cell value, always in `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TileCode(u8);

impl TileCode {
    /// Creates a tile code, returning `None` if `value > 15`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_CODE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a tile code or a [`TilesError::CodeOutOfRange`].
    pub const fn try_new(value: u8) -> TilesResult<Self> {
        match Self::new(value) {
            Some(code) => Ok(code),
            None => Err(TilesError::CodeOutOfRange { value }),
        }
    }

    /// Returns the raw code value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` if the code fits in a single decimal digit.
    ///
    /// Only digit codes are representable by the legacy V2 map-code format.
    #[must_use]
    pub const fn is_digit(self) -> bool {
        self.0 <= 9
    }

    /// Returns the named game tile for this code, if any.
    #[must_use]
    pub const fn kind(self) -> Option<TileKind> {
        TileKind::from_code(self.0)
    }
}

impl From<TileKind> for TileCode {
    fn from(kind: TileKind) -> Self {
        Self(kind as u8)
    }
}

/// The game tiles with assigned codes.
///
/// Code 4 was never assigned and codes above 9 are reserved; cells may still
/// carry those values in V3 codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileKind {
    /// Paintable floor.
    Empty = 0,
    /// Only enterable while the player is red.
    FixedRed = 1,
    /// Only enterable while the player is blue.
    FixedBlue = 2,
    /// Only enterable while the player is yellow.
    FixedYellow = 3,
    /// Paints only on the second visit.
    Twice = 5,
    /// Entering does not advance the player's color.
    FixedSeat = 6,
    /// Reverses the color cycle.
    Reverse = 7,
    /// Teleports to the paired portal.
    Portal = 8,
    /// Impassable; never painted.
    Wall = 9,
}

impl TileKind {
    /// Looks up the named tile for a raw code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::FixedRed),
            2 => Some(Self::FixedBlue),
            3 => Some(Self::FixedYellow),
            5 => Some(Self::Twice),
            6 => Some(Self::FixedSeat),
            7 => Some(Self::Reverse),
            8 => Some(Self::Portal),
            9 => Some(Self::Wall),
            _ => None,
        }
    }

    /// Returns the code this tile occupies in the grid.
    #[must_use]
    pub const fn code(self) -> TileCode {
        TileCode(self as u8)
    }
}
