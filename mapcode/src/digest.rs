//! Versioned digest functions over map-code core fields.
//!
//! These are corruption detectors, not security primitives: collisions
//! exist, and the salt is a fixed constant shipped with every client, not a
//! secret. Each format generation is permanently paired with the digest it
//! was designed with, so all three accumulations are preserved bit-for-bit,
//! including the V1 quirk of a variable-width output.
//!
//! Input is consumed as UTF-16 code units to match the original
//! `charCodeAt` accumulation. Core fields are ASCII in practice, but a digest
//! over arbitrary text must still agree with codes already in the wild.

/// Salt mixed into every digest input.
///
/// Passed explicitly to the digest functions rather than read from a global
/// so tests can substitute it.
pub const SALT: &str = "COLOR_LOOP_SALT_2025";

/// V1 digest: wrapping `h = h*31 + unit` over `s + salt`, rendered as the
/// absolute value in lowercase hex with no fixed width.
///
/// The missing width normalization is a quirk of the original format and is
/// preserved for compatibility.
#[must_use]
pub fn digest_v1(s: &str, salt: &str) -> String {
    let mut h: i32 = 0;
    for unit in units(s, salt) {
        h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    format!("{:x}", h.unsigned_abs())
}

/// V2 digest: DJB2-style `h = (h*33) ^ unit`, seed 5381, 10 hex chars.
#[must_use]
pub fn digest_v2(s: &str, salt: &str) -> String {
    fixed_width(djb2(s, salt), 10)
}

/// V3 digest: same accumulation as V2, 6 hex chars.
///
/// The shorter width was judged acceptable once payloads became nibble-packed
/// and short.
#[must_use]
pub fn digest_v3(s: &str, salt: &str) -> String {
    fixed_width(djb2(s, salt), 6)
}

fn units<'a>(s: &'a str, salt: &'a str) -> impl Iterator<Item = u16> + 'a {
    s.encode_utf16().chain(salt.encode_utf16())
}

fn djb2(s: &str, salt: &str) -> u32 {
    let mut h: i32 = 5381;
    for unit in units(s, salt) {
        h = h.wrapping_mul(33) ^ i32::from(unit);
    }
    h.unsigned_abs()
}

/// Left-zero-pads the hex rendering to `width`, then keeps the first `width`
/// characters (`padStart` + `substring` semantics).
fn fixed_width(value: u32, width: usize) -> String {
    let mut hex = format!("{value:0>width$x}");
    hex.truncate(width);
    hex
}
