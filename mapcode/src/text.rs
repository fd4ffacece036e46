//! Printable text codecs: base64 and component percent-encoding.
//!
//! Map codes travel through clipboards, chat, and URLs, so every payload and
//! metadata field is reduced to the standard base64 alphabet. Metadata is
//! percent-encoded first so the `|` field delimiter (and the separator inside
//! `name|creator`) survives the round trip regardless of what the text
//! contains.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{DecodeReason, MapCodeError, MapCodeResult};

/// Escape set of JS `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
///
/// Existing codes in the wild were produced with exactly this set; using a
/// different one would change digests.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `s` with the [`COMPONENT`] escape set.
#[must_use]
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Reverses [`percent_encode`].
///
/// # Errors
///
/// Fails with [`DecodeReason::PercentEscape`] if a `%` is not followed by two
/// hex digits, or [`DecodeReason::Utf8`] if the decoded bytes are not UTF-8.
/// Lenient pass-through of bad escapes would silently corrupt metadata.
pub fn percent_decode(s: &str) -> MapCodeResult<String> {
    check_escapes(s)?;
    percent_decode_str(s)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|_| MapCodeError::Decode(DecodeReason::Utf8))
}

fn check_escapes(s: &str) -> MapCodeResult<()> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 3 <= bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(MapCodeError::Decode(DecodeReason::PercentEscape));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Encodes metadata text: percent-encode, then base64.
#[must_use]
pub fn encode_text(s: &str) -> String {
    STANDARD.encode(percent_encode(s))
}

/// Decodes metadata text: base64, then percent-decode.
pub fn decode_text(s: &str) -> MapCodeResult<String> {
    let bytes = decode_bytes(s)?;
    let ascii =
        String::from_utf8(bytes).map_err(|_| MapCodeError::Decode(DecodeReason::Utf8))?;
    percent_decode(&ascii)
}

/// Encodes raw bytes as standard-alphabet base64.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard-alphabet base64.
pub fn decode_bytes(s: &str) -> MapCodeResult<Vec<u8>> {
    STANDARD
        .decode(s)
        .map_err(|_| MapCodeError::Decode(DecodeReason::Base64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_set_matches_encode_uri_component() {
        // Unreserved marks survive, everything else is escaped.
        assert_eq!(percent_encode("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
        assert_eq!(percent_encode("a b|c"), "a%20b%7Cc");
        assert_eq!(percent_encode("한"), "%ED%95%9C");
    }

    #[test]
    fn percent_roundtrip_unicode() {
        let original = "Lv1|튜토리얼 & more?";
        let decoded = percent_decode(&percent_encode(original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn percent_decode_identity_without_escapes() {
        assert_eq!(percent_decode("plain text!").unwrap(), "plain text!");
    }

    #[test]
    fn malformed_escape_rejected() {
        assert_eq!(
            percent_decode("bad%zz"),
            Err(MapCodeError::Decode(DecodeReason::PercentEscape))
        );
        assert_eq!(
            percent_decode("truncated%2"),
            Err(MapCodeError::Decode(DecodeReason::PercentEscape))
        );
        assert_eq!(
            percent_decode("trailing%"),
            Err(MapCodeError::Decode(DecodeReason::PercentEscape))
        );
    }

    #[test]
    fn percent_decode_invalid_utf8_rejected() {
        assert_eq!(
            percent_decode("%FF%FE"),
            Err(MapCodeError::Decode(DecodeReason::Utf8))
        );
    }

    #[test]
    fn text_roundtrip() {
        let original = "Loop Park|ana";
        assert_eq!(decode_text(&encode_text(original)).unwrap(), original);
    }

    #[test]
    fn known_meta_vector() {
        // base64("Lv1%7Ctutorial") from a distributed legacy code
        assert_eq!(decode_text("THYxJTdDdHV0b3JpYWw=").unwrap(), "Lv1|tutorial");
        assert_eq!(encode_text("Lv1|tutorial"), "THYxJTdDdHV0b3JpYWw=");
    }

    #[test]
    fn bytes_roundtrip() {
        let bytes = vec![0x12, 0x39, 0x05];
        assert_eq!(encode_bytes(&bytes), "EjkF");
        assert_eq!(decode_bytes("EjkF").unwrap(), bytes);
    }

    #[test]
    fn invalid_base64_rejected() {
        assert_eq!(
            decode_bytes("not base64!"),
            Err(MapCodeError::Decode(DecodeReason::Base64))
        );
        assert_eq!(
            decode_text("%%%"),
            Err(MapCodeError::Decode(DecodeReason::Base64))
        );
    }
}
