//! Result and Error types for rastkit-history

// standard library
use std::path::Path;

// external crates
use log::warn;

/// Type alias for `Result<T, history::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `rastkit-history` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// File ended before all of the fixed fields were read
    #[error("history record ended before line {line} ({field})")]
    MissingField { line: usize, field: &'static str },

    /// No room left in the comment log
    #[error("history comment log is full ({capacity} lines)")]
    CapacityExceeded { capacity: usize },
}

/// Report a failed history read or write
pub(crate) fn print_history_error(path: &Path, reading: bool, error: &Error) {
    match reading {
        true => warn!("unable to get history information for <{}>: {error}", path.display()),
        false => warn!("unable to write history information for <{}>: {error}", path.display()),
    }
}
