//! V3 format: nibble-packed payload, the current export default.
//!
//! Wire shape: `V3|W,H|SX,SY|base64(packed nibbles)|base64(percent(meta))|digest6`.

use tiles::{FormatVersion, Grid, Level, TileCode};

use crate::digest;
use crate::error::{MapCodeError, MapCodeResult, RangeReason};
use crate::fields::{self, Header};
use crate::text;

/// Encodes a level as a full V3 map code, digest included.
#[must_use]
pub(crate) fn encode(level: &Level) -> String {
    let codes: Vec<u8> = level.grid.flatten().iter().map(|c| c.raw()).collect();
    let payload = text::encode_bytes(&nibble::pack(&codes));
    let meta = text::encode_text(&format!("{}|{}", level.name, level.creator));
    let core = [
        "V3".to_string(),
        format!("{},{}", level.grid.width(), level.grid.height()),
        format!("{},{}", level.start.x, level.start.y),
        payload,
        meta,
    ]
    .join("|");
    let checksum = digest::digest_v3(&core, digest::SALT);
    format!("{core}|{checksum}")
}

/// Parses and bounds-checks the size/start header of the core fields.
pub(crate) fn parse_header(core_fields: &[&str]) -> MapCodeResult<Header> {
    fields::parse_header(core_fields[1], ',', core_fields[2])
}

/// Decodes the five core fields (digest already verified) into a level.
pub(crate) fn decode_fields(core_fields: &[&str]) -> MapCodeResult<Level> {
    let header = parse_header(core_fields)?;
    let count = header.cell_count();

    let bytes = text::decode_bytes(core_fields[3])?;
    let expected = nibble::packed_len(count);
    if bytes.len() != expected {
        return Err(MapCodeError::Range(RangeReason::PayloadLength {
            expected,
            actual: bytes.len(),
        }));
    }

    let cells = nibble::unpack(&bytes, count)
        .into_iter()
        .map(TileCode::try_new)
        .collect::<Result<Vec<_>, _>>()?;
    let grid = Grid::from_flat(header.width, header.height, cells)?;

    let meta = text::decode_text(core_fields[4])?;
    let (name, creator) = fields::split_meta(&meta);
    Level::with_version(name, creator, grid, header.start, FormatVersion::V3).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiles::Start;

    fn level(rows: Vec<Vec<u8>>, start: Start, name: &str, creator: &str) -> Level {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| TileCode::new(c).unwrap()).collect())
            .collect();
        Level::new(name, creator, Grid::from_rows(rows).unwrap(), start).unwrap()
    }

    #[test]
    fn encode_known_vector() {
        let level = level(
            vec![vec![1, 2, 3], vec![9, 0, 5]],
            Start::new(0, 1),
            "Loop Park",
            "ana",
        );
        assert_eq!(
            encode(&level),
            "V3|3,2|0,1|EjkF|TG9vcCUyMFBhcmslN0NhbmE=|192bdf"
        );
    }

    #[test]
    fn decode_known_vector_fields() {
        let core = ["V3", "3,2", "0,1", "EjkF", "TG9vcCUyMFBhcmslN0NhbmE="];
        let decoded = decode_fields(&core).unwrap();
        assert_eq!(decoded.name, "Loop Park");
        assert_eq!(decoded.creator, "ana");
        assert_eq!(decoded.start, Start::new(0, 1));
        assert_eq!(decoded.version, FormatVersion::V3);
        let flat: Vec<u8> = decoded.grid.flatten().iter().map(|c| c.raw()).collect();
        assert_eq!(flat, vec![1, 2, 3, 9, 0, 5]);
    }

    #[test]
    fn odd_cell_count_padding_discarded() {
        let level = level(vec![vec![9, 0, 9]], Start::new(1, 0), "odd", "t");
        let code = encode(&level);
        // 3 cells -> 2 packed bytes -> base64("\x90\x90")
        assert!(code.contains("|kJA=|"));
    }

    #[test]
    fn payload_length_enforced() {
        // header says 2x2 = 4 cells = 2 bytes, payload has 3 bytes
        let payload = text::encode_bytes(&[0x12, 0x34, 0x56]);
        let core = ["V3", "2,2", "0,0", payload.as_str(), "YXxi"];
        let err = decode_fields(&core).unwrap_err();
        assert_eq!(
            err,
            MapCodeError::Range(RangeReason::PayloadLength {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn cells_above_nine_supported() {
        let level = level(vec![vec![15, 10], vec![0, 4]], Start::new(0, 0), "hex", "t");
        let code = encode(&level);
        let parts: Vec<&str> = code.split('|').collect();
        let decoded = decode_fields(&parts[..5]).unwrap();
        let flat: Vec<u8> = decoded.grid.flatten().iter().map(|c| c.raw()).collect();
        assert_eq!(flat, vec![15, 10, 0, 4]);
    }

    #[test]
    fn name_with_pipe_is_misattributed_not_rejected() {
        let level = level(vec![vec![0]], Start::new(0, 0), "a|b", "creator");
        let code = encode(&level);
        let parts: Vec<&str> = code.split('|').collect();
        let decoded = decode_fields(&parts[..5]).unwrap();
        // first-pipe split rule: the name loses everything after its pipe
        assert_eq!(decoded.name, "a");
        assert_eq!(decoded.creator, "b|creator");
    }
}
