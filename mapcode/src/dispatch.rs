//! Version dispatch over an opaque code string.
//!
//! Routing is a literal prefix match, never a structural guess: `"V3|"` and
//! `"V2|"` select their strategies, everything else is handed to the V1 path
//! and fails there if it is not a V1 token. A digest mismatch in any branch
//! is a hard failure; there is no silent fallback to another version.

use tiles::{FormatVersion, Level};

use crate::digest;
use crate::error::{FormatReason, MapCodeError, MapCodeResult};
use crate::{v1, v2, v3};

/// Field count of the `|`-delimited formats, digest included.
const TAGGED_ARITY: usize = 6;

/// Encodes a level with the current default format (V3).
///
/// Encoding a structurally valid level never fails.
#[must_use]
pub fn encode(level: &Level) -> String {
    v3::encode(level)
}

/// Encodes a level with an explicit format generation.
///
/// # Errors
///
/// V2 rejects levels with cells above 9. V1 and V3 accept any valid level.
pub fn encode_as(level: &Level, version: FormatVersion) -> MapCodeResult<String> {
    match version {
        FormatVersion::V1 => v1::encode(level),
        FormatVersion::V2 => v2::encode(level),
        FormatVersion::V3 => Ok(v3::encode(level)),
    }
}

/// Decodes an opaque map code into a level.
///
/// Surrounding whitespace is trimmed first. Structural validation (field
/// count, numeric header tokens) happens before the digest comparison, so a
/// malformed code fails fast; a well-formed code with a wrong digest fails
/// with [`MapCodeError::ChecksumMismatch`].
pub fn decode(raw: &str) -> MapCodeResult<Level> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(MapCodeError::Format(FormatReason::Empty));
    }
    if code.starts_with("V3|") {
        decode_tagged(code, Tagged::V3)
    } else if code.starts_with("V2|") {
        decode_tagged(code, Tagged::V2)
    } else {
        v1::decode(code)
    }
}

#[derive(Clone, Copy)]
enum Tagged {
    V2,
    V3,
}

fn decode_tagged(code: &str, tagged: Tagged) -> MapCodeResult<Level> {
    let parts: Vec<&str> = code.split('|').collect();
    if parts.len() != TAGGED_ARITY {
        return Err(MapCodeError::Format(FormatReason::FieldCount {
            expected: TAGGED_ARITY,
            found: parts.len(),
        }));
    }
    let core_fields = &parts[..TAGGED_ARITY - 1];
    let found = parts[TAGGED_ARITY - 1];

    // Header structure first; digests only attest integrity.
    match tagged {
        Tagged::V3 => {
            v3::parse_header(core_fields)?;
        }
        Tagged::V2 => {
            v2::parse_header(core_fields)?;
        }
    }

    let core = core_fields.join("|");
    let expected = match tagged {
        Tagged::V3 => digest::digest_v3(&core, digest::SALT),
        Tagged::V2 => digest::digest_v2(&core, digest::SALT),
    };
    if expected != found {
        return Err(MapCodeError::ChecksumMismatch {
            expected,
            found: found.to_string(),
        });
    }

    match tagged {
        Tagged::V3 => v3::decode_fields(core_fields),
        Tagged::V2 => v2::decode_fields(core_fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeReason;
    use tiles::{Grid, Start, TileCode};

    fn sample_level() -> Level {
        let cells = vec![
            TileCode::new(9).unwrap(),
            TileCode::new(0).unwrap(),
            TileCode::new(5).unwrap(),
            TileCode::new(1).unwrap(),
        ];
        Level::new(
            "Sample",
            "tester",
            Grid::from_flat(2, 2, cells).unwrap(),
            Start::new(1, 1),
        )
        .unwrap()
    }

    #[test]
    fn default_export_is_v3() {
        let code = encode(&sample_level());
        assert!(code.starts_with("V3|2,2|1,1|"));
        let decoded = decode(&code).unwrap();
        assert_eq!(decoded.version, FormatVersion::V3);
        assert_eq!(decoded.grid, sample_level().grid);
    }

    #[test]
    fn whitespace_trimmed_before_dispatch() {
        let code = encode(&sample_level());
        let padded = format!("  {code}\n");
        assert!(decode(&padded).is_ok());
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(
            decode("   "),
            Err(MapCodeError::Format(FormatReason::Empty))
        );
    }

    #[test]
    fn v2_prefix_never_routes_to_v3() {
        // A V3 body behind a V2 tag must be judged by the V2 strategy: its
        // comma size spec is structurally invalid there.
        let code = encode(&sample_level());
        let relabeled = code.replacen("V3|", "V2|", 1);
        let err = decode(&relabeled).unwrap_err();
        assert!(
            matches!(err, MapCodeError::Range(_)),
            "expected V2 structural failure, got {err:?}"
        );
    }

    #[test]
    fn field_count_checked_before_digest() {
        assert_eq!(
            decode("V3|1,1|0,0|kA=="),
            Err(MapCodeError::Format(FormatReason::FieldCount {
                expected: 6,
                found: 4
            }))
        );
    }

    #[test]
    fn malformed_header_fails_before_checksum() {
        // digest field is garbage, but the header is judged first
        let err = decode("V3|a,b|0,0|kA==|YQ==|zzzzzz").unwrap_err();
        assert!(matches!(err, MapCodeError::Range(_)));
    }

    #[test]
    fn tampered_digest_is_checksum_mismatch() {
        let code = encode(&sample_level());
        let core = &code[..code.len() - 6];
        let tampered = format!("{core}000000");
        assert!(matches!(
            decode(&tampered),
            Err(MapCodeError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn unknown_prefix_falls_through_to_v1_and_fails() {
        // `|` is not in the base64 alphabet, so the V1 path rejects it.
        assert_eq!(
            decode("V9|1,1|0,0|kA==|YQ==|123456"),
            Err(MapCodeError::Decode(DecodeReason::Base64))
        );
    }

    #[test]
    fn encode_as_all_generations_roundtrip() {
        let level = sample_level();
        for version in [FormatVersion::V1, FormatVersion::V2, FormatVersion::V3] {
            let code = encode_as(&level, version).unwrap();
            let decoded = decode(&code).unwrap();
            assert_eq!(decoded.version, version, "{version:?}");
            assert_eq!(decoded.grid, level.grid);
            assert_eq!(decoded.start, level.start);
            assert_eq!(decoded.name, level.name);
        }
    }
}
