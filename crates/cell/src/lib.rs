//! Raster cell kinds, null sentinels, and cell value conversion
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod alloc;
mod error;
mod kind;
mod null;
mod raster;

// Inline anything important for a nice public API
#[doc(inline)]
pub use kind::{CellType, NumericKind};

#[doc(inline)]
pub use null::{
    c_null, d_null, f_null, is_c_null, is_d_null, is_f_null, is_null, null_bits_to_flags,
    null_bitstream_size, null_flags_to_bits, set_null, C_NULL, D_NULL_BITS, F_NULL_BITS,
};

#[doc(inline)]
pub use raster::{
    advance, advance_mut, compare, copy, get_as_float32, get_as_float64, get_as_integer,
    set_from_float32, set_from_float64, set_from_integer,
};

#[doc(inline)]
pub use alloc::{
    allocate_c_raster_buf, allocate_d_raster_buf, allocate_f_raster_buf, allocate_null_bits,
    allocate_null_buf, allocate_raster_buf, raster_size,
};

#[doc(inline)]
pub use error::{Error, Result};
