//! Inspection and conversion tools for Color Loop map codes.
//!
//! This crate backs the `colorloop-tools` binary: JSON conversion for
//! levels, human-readable rendering, and a code inspector that reports the
//! header a code claims without dumping the whole grid.
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use serde::{Deserialize, Serialize};
use tiles::{Grid, Level, Start, TileCode, TileKind};

/// The on-disk JSON shape of a level, for `encode` input and `decode` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelJson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub creator: String,
    pub start: StartJson,
    pub grid: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StartJson {
    pub x: u32,
    pub y: u32,
}

impl LevelJson {
    /// Validates the JSON shape into a [`Level`].
    pub fn into_level(self) -> Result<Level, tiles::TilesError> {
        let rows = self
            .grid
            .into_iter()
            .map(|row| row.into_iter().map(TileCode::try_new).collect())
            .collect::<Result<Vec<Vec<_>>, _>>()?;
        Level::new(
            self.name,
            self.creator,
            Grid::from_rows(rows)?,
            Start::new(self.start.x, self.start.y),
        )
    }

    /// Re-serializable view of a decoded level.
    #[must_use]
    pub fn from_level(level: &Level) -> Self {
        Self {
            name: level.name.clone(),
            creator: level.creator.clone(),
            start: StartJson {
                x: level.start.x,
                y: level.start.y,
            },
            grid: level
                .grid
                .rows()
                .map(|row| row.iter().map(|c| c.raw()).collect())
                .collect(),
        }
    }
}

/// Summary of a decoded map code.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub version: &'static str,
    pub width: u32,
    pub height: u32,
    pub start_x: u32,
    pub start_y: u32,
    pub cells: usize,
    pub name: String,
    pub creator: String,
    /// Length of the trimmed code text, for sharing-size estimates.
    pub code_chars: usize,
}

/// Decodes a code and summarizes it without the grid contents.
pub fn inspect_code(code: &str) -> mapcode::MapCodeResult<InspectReport> {
    let level = mapcode::decode(code)?;
    Ok(InspectReport {
        version: level.version.as_tag(),
        width: level.grid.width(),
        height: level.grid.height(),
        start_x: level.start.x,
        start_y: level.start.y,
        cells: level.grid.cell_count(),
        name: level.name,
        creator: level.creator,
        code_chars: code.trim().len(),
    })
}

/// Renders a level as text: metadata lines plus one grid row per line.
///
/// Named tiles get their editor symbols; bare codes print as hex digits.
#[must_use]
pub fn format_level_pretty(level: &Level) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} by {} ({}x{}, start {},{}, {})\n",
        if level.name.is_empty() { "(unnamed)" } else { &level.name },
        if level.creator.is_empty() { "(unknown)" } else { &level.creator },
        level.grid.width(),
        level.grid.height(),
        level.start.x,
        level.start.y,
        level.version.as_tag(),
    ));
    for (y, row) in level.grid.rows().enumerate() {
        for (x, code) in row.iter().enumerate() {
            if level.start == Start::new(x as u32, y as u32) {
                out.push('@');
            } else {
                out.push(tile_symbol(*code));
            }
        }
        out.push('\n');
    }
    out
}

fn tile_symbol(code: TileCode) -> char {
    match code.kind() {
        Some(TileKind::Empty) => '.',
        Some(TileKind::Wall) => '#',
        Some(TileKind::FixedRed) => 'R',
        Some(TileKind::FixedBlue) => 'B',
        Some(TileKind::FixedYellow) => 'Y',
        Some(TileKind::Twice) => '2',
        Some(TileKind::FixedSeat) => 'H',
        Some(TileKind::Reverse) => '<',
        Some(TileKind::Portal) => 'O',
        None => char::from_digit(u32::from(code.raw()), 16).unwrap_or('?'),
    }
}
