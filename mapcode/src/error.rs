//! Error taxonomy for map-code decoding.
//!
//! Decode failures never escape this taxonomy: foreign errors (base64,
//! UTF-8, JSON) are mapped into it at the point they occur, and nothing in
//! the decode paths panics on untrusted input. The variants exist for
//! diagnostics; user-facing code typically collapses all of them into a
//! single "invalid code" message.

use std::fmt;

use tiles::TilesError;

/// Result type for map-code operations.
pub type MapCodeResult<T> = Result<T, MapCodeError>;

/// Errors that can occur while decoding a map code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapCodeError {
    /// Unrecognized or structurally malformed code.
    Format(FormatReason),

    /// Recomputed digest does not match the trailing digest field.
    ///
    /// Signals corruption or manual tampering of the core fields.
    ChecksumMismatch { expected: String, found: String },

    /// A payload or metadata field failed text decoding.
    Decode(DecodeReason),

    /// A numeric field is malformed or out of bounds.
    Range(RangeReason),
}

/// Structural problems with the overall code shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatReason {
    /// The code is empty after trimming.
    Empty,
    /// Wrong number of `|`-delimited fields for the claimed version.
    FieldCount { expected: usize, found: usize },
}

/// Text decoding failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeReason {
    /// Input is not valid standard-alphabet base64.
    Base64,
    /// A `%` escape sequence is malformed.
    PercentEscape,
    /// Decoded bytes are not valid UTF-8.
    Utf8,
    /// The V1 structured dump is not valid JSON for a level.
    Json,
}

/// Numeric-field and cell-range failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeReason {
    /// A size or start token is not a non-negative integer.
    NonNumeric { field: &'static str },
    /// Either grid dimension is zero.
    EmptyGrid,
    /// A grid dimension exceeds the decoder's hard cap.
    OversizedGrid { width: u32, height: u32, max: u32 },
    /// Start position lies outside the grid.
    StartOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Digit payload length does not match `width * height`.
    CellCount { expected: usize, actual: usize },
    /// Packed payload length does not match the header cell count.
    PayloadLength { expected: usize, actual: usize },
    /// A cell value is outside the alphabet valid for the format.
    CellValue { value: u8, max: u8 },
}

impl From<TilesError> for MapCodeError {
    fn from(err: TilesError) -> Self {
        let reason = match err {
            TilesError::EmptyGrid => RangeReason::EmptyGrid,
            TilesError::RaggedRows { len, width, .. } => RangeReason::CellCount {
                expected: width,
                actual: len,
            },
            TilesError::CellCountMismatch { expected, actual } => {
                RangeReason::CellCount { expected, actual }
            }
            TilesError::StartOutOfBounds {
                x,
                y,
                width,
                height,
            } => RangeReason::StartOutOfBounds {
                x,
                y,
                width,
                height,
            },
            TilesError::CodeOutOfRange { value } => RangeReason::CellValue {
                value,
                max: tiles::MAX_CODE,
            },
        };
        Self::Range(reason)
    }
}

impl fmt::Display for MapCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(reason) => write!(f, "malformed code: {reason}"),
            Self::ChecksumMismatch { expected, found } => {
                write!(f, "checksum mismatch: expected {expected}, found {found}")
            }
            Self::Decode(reason) => write!(f, "decode failure: {reason}"),
            Self::Range(reason) => write!(f, "range failure: {reason}"),
        }
    }
}

impl fmt::Display for FormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty code"),
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
        }
    }
}

impl fmt::Display for DecodeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base64 => "invalid base64",
            Self::PercentEscape => "malformed percent escape",
            Self::Utf8 => "invalid utf-8",
            Self::Json => "invalid level json",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for RangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNumeric { field } => write!(f, "{field} is not a non-negative integer"),
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::OversizedGrid { width, height, max } => {
                write!(f, "grid {width}x{height} exceeds the {max} per-side cap")
            }
            Self::StartOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "start ({x},{y}) outside {width}x{height} grid")
            }
            Self::CellCount { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::PayloadLength { expected, actual } => {
                write!(f, "expected {expected} payload bytes, got {actual}")
            }
            Self::CellValue { value, max } => {
                write!(f, "cell value {value} outside 0..={max}")
            }
        }
    }
}

impl std::error::Error for MapCodeError {}
