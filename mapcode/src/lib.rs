//! Versioned map-code codec for Color Loop levels.
//!
//! A map code is the printable, shareable string form of a level: `|`-joined
//! core fields followed by a salted digest. Three backward-compatible
//! generations exist; all three decode forever, and new exports always
//! produce V3:
//!
//! | Version | size spec | payload | digest |
//! |---------|-----------|---------|--------|
//! | V3 | `W,H` | base64 nibble-packed cells | 6 hex chars |
//! | V2 | `WxH` | one decimal digit per cell | 10 hex chars |
//! | V1 | embedded | base64 JSON dump, no prefix | variable hex |
//!
//! # Design Principles
//!
//! - **Pure transformation** - No state beyond the fixed salt; safe to call
//!   from any thread.
//! - **Hard failures** - A digest mismatch or malformed field is an error,
//!   never a fallback to another version.
//! - **Corruption detection only** - The digest is not a security mechanism;
//!   the salt ships with every client.
//!
//! # Example
//!
//! ```
//! use tiles::{Grid, Level, Start, TileCode};
//!
//! let cells = vec![TileCode::new(9).unwrap(), TileCode::new(0).unwrap()];
//! let grid = Grid::from_flat(2, 1, cells).unwrap();
//! let level = Level::new("demo", "me", grid, Start::new(1, 0)).unwrap();
//!
//! let code = mapcode::encode(&level);
//! let decoded = mapcode::decode(&code).unwrap();
//! assert_eq!(decoded.grid, level.grid);
//! ```

mod digest;
mod dispatch;
mod error;
mod fields;
mod text;
mod v1;
mod v2;
mod v3;

pub use digest::{digest_v1, digest_v2, digest_v3, SALT};
pub use dispatch::{decode, encode, encode_as};
pub use error::{DecodeReason, FormatReason, MapCodeError, MapCodeResult, RangeReason};
pub use text::{
    decode_bytes, decode_text, encode_bytes, encode_text, percent_decode, percent_encode,
};

// The level model is the codec's vocabulary; re-export it for callers that
// only pull in this crate.
pub use tiles::{FormatVersion, Grid, Level, Start, TileCode, TileKind};
