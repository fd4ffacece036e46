//! Nibble packing primitives for Color Loop map codes.
//!
//! The V3 map-code payload stores two 4-bit tile codes per byte. This crate
//! provides [`pack`] and [`unpack`] for that layout and nothing else: it knows
//! nothing about tiles, grids, or map-code framing.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **No domain knowledge** - Codes are just integers in `0..=15`.
//! - **Panic-free on untrusted input** - `unpack` accepts any byte slice;
//!   range validation of packed values belongs to the caller.
//!
//! # Example
//!
//! ```
//! let packed = nibble::pack(&[1, 2, 3]);
//! assert_eq!(packed, vec![0x12, 0x30]);
//! assert_eq!(nibble::unpack(&packed, 3), vec![1, 2, 3]);
//! ```

/// Maximum value a single nibble can hold.
pub const MAX_NIBBLE: u8 = 0x0F;

/// Returns the number of bytes needed to pack `count` nibbles.
#[must_use]
pub const fn packed_len(count: usize) -> usize {
    count.div_ceil(2)
}

/// Packs a sequence of 4-bit codes into bytes, two codes per byte.
///
/// The first code of each pair lands in the high nibble, the second in the
/// low nibble. If `codes` has odd length, the final byte's low nibble is
/// zero. Values above 15 are a caller contract violation; they are
/// debug-asserted and masked to their low 4 bits in release builds.
#[must_use]
pub fn pack(codes: &[u8]) -> Vec<u8> {
    debug_assert!(
        codes.iter().all(|&c| c <= MAX_NIBBLE),
        "nibble codes must be in 0..=15"
    );
    let mut bytes = Vec::with_capacity(packed_len(codes.len()));
    for pair in codes.chunks(2) {
        let hi = pair[0] & MAX_NIBBLE;
        let lo = pair.get(1).copied().unwrap_or(0) & MAX_NIBBLE;
        bytes.push((hi << 4) | lo);
    }
    bytes
}

/// Unpacks bytes into 4-bit codes, high nibble first, truncated to `count`.
///
/// The caller supplies `count` from out-of-band framing (for map codes,
/// `width * height` from the header) so that a trailing padding nibble is
/// discarded rather than misread as a real value. If `bytes` holds fewer
/// than `count` nibbles, only the available nibbles are returned; the caller
/// is responsible for checking the length against [`packed_len`].
#[must_use]
pub fn unpack(bytes: &[u8], count: usize) -> Vec<u8> {
    let mut codes = Vec::with_capacity(count);
    for &byte in bytes {
        codes.push(byte >> 4);
        codes.push(byte & MAX_NIBBLE);
    }
    codes.truncate(count);
    codes
}
