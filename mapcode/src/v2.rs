//! V2 format: one ASCII decimal digit per cell, legacy.
//!
//! Wire shape: `V2|WxH|SX,SY|digit per cell|base64(percent(meta))|digest10`.
//! Only tile codes `0..=9` are representable; the nibble-packed V3 format
//! exists precisely because of that ceiling. The literal `x` in the size
//! spec (vs V3's comma) is part of the wire contract.

use tiles::{FormatVersion, Grid, Level, TileCode};

use crate::digest;
use crate::error::{MapCodeError, MapCodeResult, RangeReason};
use crate::fields::{self, Header};
use crate::text;

/// Encodes a level as a full V2 map code, digest included.
///
/// # Errors
///
/// Returns [`RangeReason::CellValue`] if any cell holds a code above 9;
/// such levels can only be exported as V3.
pub(crate) fn encode(level: &Level) -> MapCodeResult<String> {
    let mut payload = String::with_capacity(level.grid.cell_count());
    for code in level.grid.flatten() {
        if !code.is_digit() {
            return Err(MapCodeError::Range(RangeReason::CellValue {
                value: code.raw(),
                max: 9,
            }));
        }
        payload.push(char::from(b'0' + code.raw()));
    }
    let meta = text::encode_text(&format!("{}|{}", level.name, level.creator));
    let core = [
        "V2".to_string(),
        format!("{}x{}", level.grid.width(), level.grid.height()),
        format!("{},{}", level.start.x, level.start.y),
        payload,
        meta,
    ]
    .join("|");
    let checksum = digest::digest_v2(&core, digest::SALT);
    Ok(format!("{core}|{checksum}"))
}

/// Parses and bounds-checks the size/start header of the core fields.
pub(crate) fn parse_header(core_fields: &[&str]) -> MapCodeResult<Header> {
    fields::parse_header(core_fields[1], 'x', core_fields[2])
}

/// Decodes the five core fields (digest already verified) into a level.
pub(crate) fn decode_fields(core_fields: &[&str]) -> MapCodeResult<Level> {
    let header = parse_header(core_fields)?;
    let count = header.cell_count();

    let payload = core_fields[3];
    if payload.len() != count {
        return Err(MapCodeError::Range(RangeReason::CellCount {
            expected: count,
            actual: payload.len(),
        }));
    }
    let cells = payload
        .bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                TileCode::try_new(b - b'0').map_err(Into::into)
            } else {
                Err(MapCodeError::Range(RangeReason::NonNumeric {
                    field: "payload",
                }))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    let grid = Grid::from_flat(header.width, header.height, cells)?;

    let meta = text::decode_text(core_fields[4])?;
    let (name, creator) = fields::split_meta(&meta);
    Level::with_version(name, creator, grid, header.start, FormatVersion::V2).map_err(Into::into)
}
