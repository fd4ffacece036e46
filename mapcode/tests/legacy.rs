//! Decoding guarantees for codes already distributed in the wild.

use mapcode::{FormatVersion, MapCodeError, Start};

/// A real V2 code shipped with the game's tutorial level.
const LEGACY_V2: &str = "V2|9x10|2,4|999999999999999999999999999999999999990000099999999999999999999999999999999999999999999999|THYxJTdDdHV0b3JpYWw=|0035cc2f6b";

const KNOWN_V3: &str = "V3|3,2|0,1|EjkF|TG9vcCUyMFBhcmslN0NhbmE=|192bdf";

#[test]
fn legacy_v2_decodes() {
    let level = mapcode::decode(LEGACY_V2).unwrap();
    assert_eq!(level.version, FormatVersion::V2);
    assert_eq!(level.grid.width(), 9);
    assert_eq!(level.grid.height(), 10);
    assert_eq!(level.start, Start::new(2, 4));
    assert_eq!(level.name, "Lv1");
    assert_eq!(level.creator, "tutorial");

    // wall border with the five-space clearing at the documented offset
    let flat: Vec<u8> = level.grid.flatten().iter().map(|c| c.raw()).collect();
    assert!(flat[..38].iter().all(|&c| c == 9));
    assert_eq!(&flat[38..43], &[0, 0, 0, 0, 0]);
    assert_eq!(flat.len(), 90);
}

#[test]
fn legacy_v2_digest_replacement_fails() {
    let core = LEGACY_V2.strip_suffix("0035cc2f6b").unwrap();
    for wrong in ["0000000000", "ffffffffff", "0035cc2f6c"] {
        let tampered = format!("{core}{wrong}");
        assert!(
            matches!(
                mapcode::decode(&tampered),
                Err(MapCodeError::ChecksumMismatch { .. })
            ),
            "digest {wrong} should be rejected"
        );
    }
}

#[test]
fn known_v3_decodes() {
    let level = mapcode::decode(KNOWN_V3).unwrap();
    assert_eq!(level.version, FormatVersion::V3);
    assert_eq!(level.name, "Loop Park");
    assert_eq!(level.creator, "ana");
    let flat: Vec<u8> = level.grid.flatten().iter().map(|c| c.raw()).collect();
    assert_eq!(flat, vec![1, 2, 3, 9, 0, 5]);
}

#[test]
fn every_core_mutation_is_detected() {
    // The digest is a weak hash, so this is not a 100% guarantee in general;
    // for these fixed vectors every single-character substitution is known
    // to be caught (verified against the reference accumulation).
    for code in [LEGACY_V2, KNOWN_V3] {
        let (core, _digest) = code.rsplit_once('|').unwrap();
        for i in 0..core.len() {
            let original = code.as_bytes()[i];
            let replacement = if original == b'x' { b'y' } else { b'x' };
            let mut tampered = code.as_bytes().to_vec();
            tampered[i] = replacement;
            let tampered = String::from_utf8(tampered).unwrap();
            assert!(
                mapcode::decode(&tampered).is_err(),
                "mutation at {i} in {code} went undetected"
            );
        }
    }
}

#[test]
fn v2_is_never_routed_to_v3() {
    // Same shared `|`-delimited shape, but the V2 prefix is a literal match;
    // a V3-shaped body behind it must fail in the V2 strategy.
    let relabeled = KNOWN_V3.replacen("V3|", "V2|", 1);
    assert!(mapcode::decode(&relabeled).is_err());
}

#[test]
fn unknown_version_token_fails_in_v1_path() {
    let unknown = KNOWN_V3.replacen("V3|", "V7|", 1);
    let err = mapcode::decode(&unknown).unwrap_err();
    // must be a decode failure from the V1 attempt, not a panic
    assert!(matches!(err, MapCodeError::Decode(_)));
}
