//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, cleaning up text read from metadata files is useful anywhere a
//! fixed-length record is involved.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod string_ext;

// Flatten
pub use string_ext::StringExt;
