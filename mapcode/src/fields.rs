//! Strict field parsing shared by the `|`-delimited formats.
//!
//! Every size and start token must be a plain non-negative decimal integer;
//! signs, whitespace, and partial numeric prefixes are rejected outright
//! rather than coerced.

use tiles::Start;

use crate::error::{MapCodeError, MapCodeResult, RangeReason};

/// Hard cap on either grid dimension during decoding.
///
/// Real levels are a few dozen cells per side; the cap only bounds what a
/// hostile code can make the decoder do.
pub(crate) const MAX_DIMENSION: u32 = 4096;

/// Parsed size and start header of a V2/V3 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header {
    pub width: u32,
    pub height: u32,
    pub start: Start,
}

impl Header {
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Parses `sizeSpec` (separated by `size_sep`) and `startSpec` and checks
/// every bound the header alone can check.
pub(crate) fn parse_header(
    size_spec: &str,
    size_sep: char,
    start_spec: &str,
) -> MapCodeResult<Header> {
    let (width, height) = parse_pair(size_spec, size_sep, ("width", "height"))?;
    if width == 0 || height == 0 {
        return Err(MapCodeError::Range(RangeReason::EmptyGrid));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(MapCodeError::Range(RangeReason::OversizedGrid {
            width,
            height,
            max: MAX_DIMENSION,
        }));
    }
    let (x, y) = parse_pair(start_spec, ',', ("start x", "start y"))?;
    if x >= width || y >= height {
        return Err(MapCodeError::Range(RangeReason::StartOutOfBounds {
            x,
            y,
            width,
            height,
        }));
    }
    Ok(Header {
        width,
        height,
        start: Start::new(x, y),
    })
}

fn parse_pair(
    token: &str,
    sep: char,
    names: (&'static str, &'static str),
) -> MapCodeResult<(u32, u32)> {
    let Some((first, second)) = token.split_once(sep) else {
        return Err(MapCodeError::Range(RangeReason::NonNumeric {
            field: names.0,
        }));
    };
    Ok((parse_u32(first, names.0)?, parse_u32(second, names.1)?))
}

/// Strict non-negative integer parse: digits only, no signs, no whitespace.
pub(crate) fn parse_u32(token: &str, field: &'static str) -> MapCodeResult<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MapCodeError::Range(RangeReason::NonNumeric { field }));
    }
    token
        .parse()
        .map_err(|_| MapCodeError::Range(RangeReason::NonNumeric { field }))
}

/// Splits decoded metadata into `(name, creator)` on the FIRST `|` only.
///
/// A `|` inside `name` therefore truncates the name and bleeds the rest into
/// `creator`. Distributed codes depend on this split rule, so it stays.
/// Metadata without any `|` yields an empty creator.
pub(crate) fn split_meta(meta: &str) -> (&str, &str) {
    meta.split_once('|').unwrap_or((meta, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_v3_shape() {
        let header = parse_header("3,2", ',', "0,1").unwrap();
        assert_eq!(header.width, 3);
        assert_eq!(header.height, 2);
        assert_eq!(header.start, Start::new(0, 1));
        assert_eq!(header.cell_count(), 6);
    }

    #[test]
    fn header_v2_shape() {
        let header = parse_header("9x10", 'x', "2,4").unwrap();
        assert_eq!((header.width, header.height), (9, 10));
    }

    #[test]
    fn wrong_separator_rejected() {
        assert!(parse_header("3x2", ',', "0,0").is_err());
        assert!(parse_header("3,2", 'x', "0,0").is_err());
    }

    #[test]
    fn non_numeric_tokens_rejected() {
        for bad in ["a,2", "3,b", "+3,2", "-3,2", " 3,2", "3.0,2", ""] {
            let err = parse_header(bad, ',', "0,0").unwrap_err();
            assert!(
                matches!(err, MapCodeError::Range(RangeReason::NonNumeric { .. })),
                "{bad:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            parse_header("0,5", ',', "0,0").unwrap_err(),
            MapCodeError::Range(RangeReason::EmptyGrid)
        );
    }

    #[test]
    fn oversized_dimension_rejected() {
        let err = parse_header("4097,1", ',', "0,0").unwrap_err();
        assert!(matches!(
            err,
            MapCodeError::Range(RangeReason::OversizedGrid { .. })
        ));
    }

    #[test]
    fn start_bounds_checked() {
        let err = parse_header("3,3", ',', "3,0").unwrap_err();
        assert_eq!(
            err,
            MapCodeError::Range(RangeReason::StartOutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn split_meta_first_pipe_wins() {
        assert_eq!(split_meta("Lv1|tutorial"), ("Lv1", "tutorial"));
        assert_eq!(split_meta("a|b|c"), ("a", "b|c"));
        assert_eq!(split_meta("no pipe"), ("no pipe", ""));
    }
}
