//! Reading and writing raster map history records
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod history;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use history::{
    recreate_command, CommandStatus, History, COMMAND_SINGLE_LINE, COMMAND_WRAP, CONTINUATION,
    MAXEDLINES, RECORD_LEN,
};

#[doc(inline)]
pub use reader::read_history;

#[doc(inline)]
pub use writer::{write_history, write_json};

#[doc(inline)]
pub use error::{Error, Result};
