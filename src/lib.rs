//! `rastkit` is a small set of raster geodata building blocks
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use rastkit_utils as utils;

#[cfg(feature = "cell")]
#[cfg_attr(docsrs, doc(cfg(feature = "cell")))]
#[doc(inline)]
pub use rastkit_cell as cell;

#[cfg(feature = "history")]
#[cfg_attr(docsrs, doc(cfg(feature = "history")))]
#[doc(inline)]
pub use rastkit_history as history;
