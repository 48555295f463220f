//! Reading, writing, comparing, and converting cell values in raw buffers
//!
//! Every function takes a byte buffer plus the [NumericKind] of the values it
//! holds, and dispatches on the kind at runtime. Null is always checked before
//! any numeric work is done.
//!
//! Conversions between kinds are truncating casts, never rounding:
//!
//! - float to integer truncates toward zero and saturates to
//!   `i32::MIN + 1..=i32::MAX`, so a real value never turns into the null
//!   sentinel. A NaN that is not null becomes `0`.
//! - narrowing `f64` to `f32` overflows to infinity as usual, and any NaN that
//!   is not null becomes the canonical `f32::NAN`
//! - integer to float is a plain widening cast

// crate modules
use crate::error::{Error, Result};
use crate::kind::{CellType, NumericKind};
use crate::null::{c_null, d_null, f_null, is_c_null, is_d_null, is_f_null, set_null};

// standard library
use std::cmp::Ordering;

/// Offset a buffer by `size` bytes
///
/// Useful for stepping through a row one value at a time without knowing the
/// kind at compile time.
///
/// ```rust
/// # use rastkit_cell::{advance, get_as_integer, NumericKind};
/// let kind = NumericKind::Integer;
/// let row: Vec<u8> = [1i32, 2, 3].iter().flat_map(|v| v.to_ne_bytes()).collect();
///
/// let mut ptr = row.as_slice();
/// let mut total = 0;
/// while !ptr.is_empty() {
///     total += get_as_integer(ptr, kind).unwrap();
///     ptr = advance(ptr, kind.size()).unwrap();
/// }
/// assert_eq!(total, 6);
/// ```
pub fn advance(buf: &[u8], size: usize) -> Result<&[u8]> {
    buf.get(size..).ok_or(Error::OffsetOutOfRange {
        offset: size,
        len: buf.len(),
    })
}

/// Mutable version of [advance()]
pub fn advance_mut(buf: &mut [u8], size: usize) -> Result<&mut [u8]> {
    let len = buf.len();
    buf.get_mut(size..)
        .ok_or(Error::OffsetOutOfRange { offset: size, len })
}

/// Compare the first values of two buffers
///
/// Null values sort after everything else:
///
/// - both null is `Equal`
/// - only `v1` null is `Greater`
/// - only `v2` null is `Less`
///
/// Otherwise the values are compared numerically. For floats `0.0` and `-0.0`
/// are equal, and a NaN that is not null sorts after every number but before
/// null.
///
/// ```rust
/// # use rastkit_cell::{compare, NumericKind};
/// # use std::cmp::Ordering;
/// let kind = NumericKind::Integer;
/// let null = i32::MIN.to_ne_bytes();
/// let low = (-5i32).to_ne_bytes();
///
/// assert_eq!(compare(&null, &low, kind).unwrap(), Ordering::Greater);
/// assert_eq!(compare(&low, &null, kind).unwrap(), Ordering::Less);
/// assert_eq!(compare(&null, &null, kind).unwrap(), Ordering::Equal);
/// ```
pub fn compare(v1: &[u8], v2: &[u8], kind: NumericKind) -> Result<Ordering> {
    match kind {
        NumericKind::Integer => compare_as::<i32>(v1, v2),
        NumericKind::Float32 => compare_as::<f32>(v1, v2),
        NumericKind::Float64 => compare_as::<f64>(v1, v2),
    }
}

fn compare_as<T: CellType>(v1: &[u8], v2: &[u8]) -> Result<Ordering> {
    let a = T::read_ne(v1)?;
    let b = T::read_ne(v2)?;

    let ordering = match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match (a.is_data_nan(), b.is_data_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // only NaN is unordered, so this always has a value
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        },
    };
    Ok(ordering)
}

/// Copy `count` values from `src` into `dst`
///
/// This is a raw byte copy of `count * kind.size()` bytes, so null values are
/// carried over exactly as they are.
///
/// ```rust
/// # use rastkit_cell::{copy, is_null, set_null, NumericKind};
/// let kind = NumericKind::Float32;
/// let mut src = vec![0u8; 2 * kind.size()];
/// let mut dst = vec![0u8; 2 * kind.size()];
///
/// set_null(&mut src, 1, kind).unwrap();
/// copy(&mut dst, &src, 2, kind).unwrap();
/// assert!(is_null(&dst, kind).unwrap());
/// ```
pub fn copy(dst: &mut [u8], src: &[u8], count: usize, kind: NumericKind) -> Result<()> {
    let n = kind.require(src.len(), count)?;
    kind.require(dst.len(), count)?;
    dst[..n].copy_from_slice(&src[..n]);
    Ok(())
}

/// Store an integer as a value of `kind`
///
/// An integer null writes the null of `kind`, whatever the destination kind.
///
/// ```rust
/// # use rastkit_cell::{set_from_integer, is_null, NumericKind};
/// let mut buf = [0u8; 8];
/// set_from_integer(&mut buf, 7, NumericKind::Float64).unwrap();
/// assert_eq!(f64::from_ne_bytes(buf), 7.0);
///
/// set_from_integer(&mut buf, i32::MIN, NumericKind::Float64).unwrap();
/// assert!(is_null(&buf, NumericKind::Float64).unwrap());
/// ```
pub fn set_from_integer(dst: &mut [u8], value: i32, kind: NumericKind) -> Result<()> {
    if is_c_null(value) {
        return set_null(dst, 1, kind);
    }
    match kind {
        NumericKind::Integer => value.write_ne(dst),
        NumericKind::Float32 => (value as f32).write_ne(dst),
        NumericKind::Float64 => (value as f64).write_ne(dst),
    }
}

/// Store a single precision float as a value of `kind`
///
/// A float null writes the null of `kind`. Integer destinations truncate.
///
/// ```rust
/// # use rastkit_cell::{set_from_float32, NumericKind};
/// let mut buf = [0u8; 4];
/// set_from_float32(&mut buf, -2.9, NumericKind::Integer).unwrap();
/// assert_eq!(i32::from_ne_bytes(buf), -2);
/// ```
pub fn set_from_float32(dst: &mut [u8], value: f32, kind: NumericKind) -> Result<()> {
    if is_f_null(value) {
        return set_null(dst, 1, kind);
    }
    match kind {
        NumericKind::Integer => float_to_cell(value as f64).write_ne(dst),
        NumericKind::Float32 => value.write_ne(dst),
        NumericKind::Float64 => widen(value).write_ne(dst),
    }
}

/// Store a double precision float as a value of `kind`
pub fn set_from_float64(dst: &mut [u8], value: f64, kind: NumericKind) -> Result<()> {
    if is_d_null(value) {
        return set_null(dst, 1, kind);
    }
    match kind {
        NumericKind::Integer => float_to_cell(value).write_ne(dst),
        NumericKind::Float32 => narrow(value).write_ne(dst),
        NumericKind::Float64 => value.write_ne(dst),
    }
}

/// Read the first value of `src` as an integer
///
/// Returns the integer null if the value is null. Floats are truncated toward
/// zero, not rounded.
///
/// ```rust
/// # use rastkit_cell::{get_as_integer, NumericKind};
/// let buf = 9.99f64.to_ne_bytes();
/// assert_eq!(get_as_integer(&buf, NumericKind::Float64).unwrap(), 9);
///
/// let buf = f64::from_bits(u64::MAX).to_ne_bytes();
/// assert_eq!(get_as_integer(&buf, NumericKind::Float64).unwrap(), i32::MIN);
/// ```
pub fn get_as_integer(src: &[u8], kind: NumericKind) -> Result<i32> {
    match kind {
        NumericKind::Integer => i32::read_ne(src),
        NumericKind::Float32 => {
            let value = f32::read_ne(src)?;
            Ok(match value.is_null() {
                true => c_null(),
                false => float_to_cell(value as f64),
            })
        }
        NumericKind::Float64 => {
            let value = f64::read_ne(src)?;
            Ok(match value.is_null() {
                true => c_null(),
                false => float_to_cell(value),
            })
        }
    }
}

/// Read the first value of `src` as a single precision float
///
/// Returns the `Float32` null if the value is null.
pub fn get_as_float32(src: &[u8], kind: NumericKind) -> Result<f32> {
    if crate::null::is_null(src, kind)? {
        return Ok(f_null());
    }
    match kind {
        NumericKind::Integer => Ok(i32::read_ne(src)? as f32),
        NumericKind::Float32 => f32::read_ne(src),
        NumericKind::Float64 => Ok(narrow(f64::read_ne(src)?)),
    }
}

/// Read the first value of `src` as a double precision float
///
/// Returns the `Float64` null if the value is null.
///
/// ```rust
/// # use rastkit_cell::{get_as_float64, NumericKind};
/// let buf = 3i32.to_ne_bytes();
/// assert_eq!(get_as_float64(&buf, NumericKind::Integer).unwrap(), 3.0);
/// ```
pub fn get_as_float64(src: &[u8], kind: NumericKind) -> Result<f64> {
    if crate::null::is_null(src, kind)? {
        return Ok(d_null());
    }
    match kind {
        NumericKind::Integer => Ok(i32::read_ne(src)? as f64),
        NumericKind::Float32 => Ok(widen(f32::read_ne(src)?)),
        NumericKind::Float64 => f64::read_ne(src),
    }
}

/// Truncating float to integer cast that can never produce the integer null
fn float_to_cell(value: f64) -> i32 {
    (value as i32).max(c_null() + 1)
}

fn narrow(value: f64) -> f32 {
    match value.is_nan() {
        true => f32::NAN,
        false => value as f32,
    }
}

fn widen(value: f32) -> f64 {
    match value.is_nan() {
        true => f64::NAN,
        false => value as f64,
    }
}
