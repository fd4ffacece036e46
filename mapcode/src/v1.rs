//! V1 format: base64 JSON dump, the original map code.
//!
//! The entire level is serialized as JSON, joined with its digest by a `|`,
//! percent-encoded, and base64-encoded into a single opaque token with no
//! literal version prefix. The dispatcher treats every code without a known
//! prefix as a V1 candidate.

use serde::{Deserialize, Serialize};
use tiles::{FormatVersion, Grid, Level, Start, TileCode};

use crate::digest;
use crate::error::{DecodeReason, FormatReason, MapCodeError, MapCodeResult};
use crate::text;

/// The JSON shape of a V1 dump. Field names are part of the wire format.
#[derive(Debug, Serialize, Deserialize)]
struct LevelDump {
    #[serde(default)]
    name: String,
    #[serde(default)]
    creator: String,
    data: Vec<Vec<u8>>,
    start: StartDump,
}

#[derive(Debug, Serialize, Deserialize)]
struct StartDump {
    x: u32,
    y: u32,
}

/// Encodes a level as a V1 map code.
///
/// Kept for the tools and for exercising the decode path; new exports use V3.
pub(crate) fn encode(level: &Level) -> MapCodeResult<String> {
    let dump = LevelDump {
        name: level.name.clone(),
        creator: level.creator.clone(),
        data: level
            .grid
            .rows()
            .map(|row| row.iter().map(|c| c.raw()).collect())
            .collect(),
        start: StartDump {
            x: level.start.x,
            y: level.start.y,
        },
    };
    let json =
        serde_json::to_string(&dump).map_err(|_| MapCodeError::Decode(DecodeReason::Json))?;
    let checksum = digest::digest_v1(&json, digest::SALT);
    Ok(text::encode_bytes(
        text::percent_encode(&format!("{json}|{checksum}")).as_bytes(),
    ))
}

/// Decodes a whole V1 token, digest check included.
pub(crate) fn decode(token: &str) -> MapCodeResult<Level> {
    let bytes = text::decode_bytes(token)?;
    let ascii =
        String::from_utf8(bytes).map_err(|_| MapCodeError::Decode(DecodeReason::Utf8))?;
    let decoded = text::percent_decode(&ascii)?;

    let Some((payload, found)) = decoded.split_once('|') else {
        return Err(MapCodeError::Format(FormatReason::FieldCount {
            expected: 2,
            found: 1,
        }));
    };
    let expected = digest::digest_v1(payload, digest::SALT);
    if expected != found {
        return Err(MapCodeError::ChecksumMismatch {
            expected,
            found: found.to_string(),
        });
    }

    let dump: LevelDump =
        serde_json::from_str(payload).map_err(|_| MapCodeError::Decode(DecodeReason::Json))?;
    let rows = dump
        .data
        .into_iter()
        .map(|row| row.into_iter().map(TileCode::try_new).collect())
        .collect::<Result<Vec<Vec<_>>, _>>()?;
    let grid = Grid::from_rows(rows)?;
    Level::with_version(
        dump.name,
        dump.creator,
        grid,
        Start::new(dump.start.x, dump.start.y),
        FormatVersion::V1,
    )
    .map_err(Into::into)
}
