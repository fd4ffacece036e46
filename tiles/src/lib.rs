//! Tile alphabet and level model for the Color Loop puzzle game.
//!
//! A level is a rectangular grid of small integer tile codes plus a start
//! position and metadata (name, creator). This crate defines those types and
//! their invariants; it knows nothing about map-code framing, rendering, or
//! the behavior rules of individual tiles.
//!
//! # Design Principles
//!
//! - **Validated construction** - A [`Grid`] is always rectangular and
//!   non-empty; a [`Level`] always has its start inside the grid.
//! - **Closed alphabet** - A [`TileCode`] is always in `0..=15`. The codes
//!   with game meaning are named by [`TileKind`]; the rest are headroom.

mod code;
mod error;
mod grid;
mod level;

pub use code::{TileCode, TileKind, MAX_CODE};
pub use error::{TilesError, TilesResult};
pub use grid::{Grid, Start};
pub use level::{FormatVersion, Level};
