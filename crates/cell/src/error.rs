//! Result and Error types for rastkit-cell

use crate::kind::NumericKind;

/// Type alias for `Result<T, cell::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `rastkit-cell` crate
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A raw kind tag outside of the three known encodings
    #[error("unknown numeric kind tag {0}")]
    UnknownKind(i32),

    /// Buffer cannot hold the number of values requested
    #[error("buffer too short for {kind} values (expected {expected:?} bytes, found {found:?})")]
    BufferTooShort {
        kind: NumericKind,
        expected: usize,
        found: usize,
    },

    /// Offset lies past the end of the buffer
    #[error("offset {offset} is beyond the end of a {len} byte buffer")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// Bitstream has fewer bytes than the column count needs
    #[error("null bitstream too short (expected {expected:?} bytes, found {found:?})")]
    BitstreamTooShort { expected: usize, found: usize },

    /// Rows need at least one column
    #[error("invalid column count {0}")]
    InvalidColumnCount(usize),
}
