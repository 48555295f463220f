//! Null ("no data") sentinels for every cell kind
//!
//! Null is a reserved bit pattern stored in the native width of the value:
//!
//! - `Integer` uses `i32::MIN`
//! - `Float32` and `Float64` use the pattern with every bit set
//!
//! Both float patterns happen to be NaNs, but the reverse is not true. An
//! ordinary NaN produced by arithmetic is a value, not a null, so every test
//! here compares bits and never calls `is_nan()`.
//!
//! Null rows can also be stored as packed bitstreams, one bit per column with
//! the most significant bit first.

// crate modules
use crate::error::{Error, Result};
use crate::kind::{CellType, NumericKind};

/// Null value of an `Integer` cell
pub const C_NULL: i32 = i32::MIN;

/// Bit pattern of a null `Float32` cell
pub const F_NULL_BITS: u32 = u32::MAX;

/// Bit pattern of a null `Float64` cell
pub const D_NULL_BITS: u64 = u64::MAX;

/// Null value of an `Integer` cell
pub fn c_null() -> i32 {
    C_NULL
}

/// Null value of a `Float32` cell
pub fn f_null() -> f32 {
    f32::from_bits(F_NULL_BITS)
}

/// Null value of a `Float64` cell
pub fn d_null() -> f64 {
    f64::from_bits(D_NULL_BITS)
}

/// Check an integer for the null sentinel
pub fn is_c_null(value: i32) -> bool {
    value == C_NULL
}

/// Check a single precision float for the null bit pattern
///
/// ```rust
/// # use rastkit_cell::{f_null, is_f_null};
/// assert!(is_f_null(f_null()));
/// assert!(!is_f_null(f32::NAN));
/// assert!(!is_f_null(0.0));
/// ```
pub fn is_f_null(value: f32) -> bool {
    value.to_bits() == F_NULL_BITS
}

/// Check a double precision float for the null bit pattern
pub fn is_d_null(value: f64) -> bool {
    value.to_bits() == D_NULL_BITS
}

/// Check whether the first value in `buf` is null
///
/// Only the first `kind.size()` bytes are inspected.
///
/// ```rust
/// # use rastkit_cell::{is_null, NumericKind};
/// let buf = i32::MIN.to_ne_bytes();
/// assert!(is_null(&buf, NumericKind::Integer).unwrap());
///
/// let buf = f32::NAN.to_ne_bytes();
/// assert!(!is_null(&buf, NumericKind::Float32).unwrap());
/// ```
pub fn is_null(buf: &[u8], kind: NumericKind) -> Result<bool> {
    match kind {
        NumericKind::Integer => Ok(i32::read_ne(buf)?.is_null()),
        NumericKind::Float32 => Ok(f32::read_ne(buf)?.is_null()),
        NumericKind::Float64 => Ok(f64::read_ne(buf)?.is_null()),
    }
}

/// Write the null sentinel into `count` consecutive values of `buf`
///
/// Bytes past the `count` values are left untouched.
///
/// ```rust
/// # use rastkit_cell::{is_null, set_null, NumericKind};
/// let kind = NumericKind::Float64;
/// let mut row = vec![0u8; 4 * kind.size()];
///
/// set_null(&mut row, 3, kind).unwrap();
/// assert!(is_null(&row[2 * kind.size()..], kind).unwrap());
/// assert!(!is_null(&row[3 * kind.size()..], kind).unwrap());
/// ```
pub fn set_null(buf: &mut [u8], count: usize, kind: NumericKind) -> Result<()> {
    let n = kind.require(buf.len(), count)?;
    match kind {
        NumericKind::Integer => fill_null::<i32>(&mut buf[..n]),
        NumericKind::Float32 => fill_null::<f32>(&mut buf[..n]),
        NumericKind::Float64 => fill_null::<f64>(&mut buf[..n]),
    }
}

fn fill_null<T: CellType>(buf: &mut [u8]) -> Result<()> {
    for value in buf.chunks_exact_mut(T::KIND.size()) {
        T::null().write_ne(value)?;
    }
    Ok(())
}

/// Number of bytes needed to store one bit per column
///
/// ```rust
/// # use rastkit_cell::null_bitstream_size;
/// assert_eq!(null_bitstream_size(1), Ok(1));
/// assert_eq!(null_bitstream_size(8), Ok(1));
/// assert_eq!(null_bitstream_size(9), Ok(2));
/// assert!(null_bitstream_size(0).is_err());
/// ```
pub fn null_bitstream_size(cols: usize) -> Result<usize> {
    if cols == 0 {
        return Err(Error::InvalidColumnCount(cols));
    }
    Ok(cols.div_ceil(8))
}

/// Pack per-column null flags into a bitstream
///
/// Any non-zero flag marks the column as null. Unused trailing bits in the
/// final byte are cleared.
///
/// ```rust
/// # use rastkit_cell::null_flags_to_bits;
/// let flags = [1, 0, 0, 0, 0, 0, 0, 1, 1];
/// let mut bits = [0u8; 2];
/// null_flags_to_bits(&flags, &mut bits).unwrap();
/// assert_eq!(bits, [0b1000_0001, 0b1000_0000]);
/// ```
pub fn null_flags_to_bits(flags: &[u8], bits: &mut [u8]) -> Result<()> {
    let expected = null_bitstream_size(flags.len())?;
    if bits.len() < expected {
        return Err(Error::BitstreamTooShort {
            expected,
            found: bits.len(),
        });
    }

    for (byte, chunk) in bits.iter_mut().zip(flags.chunks(8)) {
        *byte = chunk
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag != 0)
            .fold(0u8, |acc, (i, _)| acc | (0x80 >> i));
    }
    Ok(())
}

/// Unpack a bitstream into per-column null flags
///
/// One flag is written for every entry in `flags`, set to 1 for null columns
/// and 0 otherwise.
pub fn null_bits_to_flags(bits: &[u8], flags: &mut [u8]) -> Result<()> {
    let expected = null_bitstream_size(flags.len())?;
    if bits.len() < expected {
        return Err(Error::BitstreamTooShort {
            expected,
            found: bits.len(),
        });
    }

    for (col, flag) in flags.iter_mut().enumerate() {
        *flag = (bits[col / 8] >> (7 - col % 8)) & 1;
    }
    Ok(())
}
