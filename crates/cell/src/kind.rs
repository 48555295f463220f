//! Numeric encodings a raster cell may be stored as

// crate modules
use crate::error::{Error, Result};

// standard library
use std::fmt::Debug;
use std::mem::size_of;

/// The numeric encoding of every value in a raster buffer
///
/// A buffer is associated with exactly one kind for its entire lifetime, and
/// mixing kinds within one buffer is never valid.
///
/// | Kind      | Native type | Bytes | Tag |
/// |-----------|-------------|-------|-----|
/// | `Integer` | `i32`       | 4     | 0   |
/// | `Float32` | `f32`       | 4     | 1   |
/// | `Float64` | `f64`       | 8     | 2   |
///
/// Raw tags from files or foreign callers go through `TryFrom<i32>`, which is
/// the only place an invalid kind can be rejected.
///
/// ```rust
/// # use rastkit_cell::{NumericKind, Error};
/// assert_eq!(NumericKind::try_from(2), Ok(NumericKind::Float64));
/// assert_eq!(NumericKind::try_from(7), Err(Error::UnknownKind(7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Signed 32-bit integer cells
    Integer,
    /// Single precision floating point cells
    Float32,
    /// Double precision floating point cells
    Float64,
}

impl NumericKind {
    /// Every kind, in tag order
    pub const ALL: [NumericKind; 3] = [Self::Integer, Self::Float32, Self::Float64];

    /// Size of a single value of this kind in bytes
    ///
    /// ```rust
    /// # use rastkit_cell::NumericKind;
    /// assert_eq!(NumericKind::Integer.size(), 4);
    /// assert_eq!(NumericKind::Float32.size(), 4);
    /// assert_eq!(NumericKind::Float64.size(), 8);
    /// ```
    pub const fn size(self) -> usize {
        match self {
            Self::Integer => size_of::<i32>(),
            Self::Float32 => size_of::<f32>(),
            Self::Float64 => size_of::<f64>(),
        }
    }

    /// Raw tag used to identify the kind outside of rust
    pub const fn tag(self) -> i32 {
        match self {
            Self::Integer => 0,
            Self::Float32 => 1,
            Self::Float64 => 2,
        }
    }

    /// Short name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "CELL",
            Self::Float32 => "FCELL",
            Self::Float64 => "DCELL",
        }
    }

    /// Checks a buffer of `found` bytes can hold `count` values
    ///
    /// Returns the number of bytes the values occupy.
    pub(crate) fn require(self, found: usize, count: usize) -> Result<usize> {
        let expected = count.checked_mul(self.size()).unwrap_or(usize::MAX);
        if found < expected {
            return Err(Error::BufferTooShort {
                kind: self,
                expected,
                found,
            });
        }
        Ok(expected)
    }
}

impl TryFrom<i32> for NumericKind {
    type Error = Error;

    fn try_from(tag: i32) -> Result<Self> {
        match tag {
            0 => Ok(Self::Integer),
            1 => Ok(Self::Float32),
            2 => Ok(Self::Float64),
            _ => Err(Error::UnknownKind(tag)),
        }
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Native rust representation of a [NumericKind]
///
/// Implemented for `i32`, `f32`, and `f64`. Values are always read from and
/// written to buffers in native byte order.
pub trait CellType: Copy + Debug + PartialOrd {
    /// The kind this type is the native representation of
    const KIND: NumericKind;

    /// The reserved null value
    fn null() -> Self;

    /// True only for the exact null bit pattern
    fn is_null(&self) -> bool;

    /// True for any NaN that is not the null pattern
    fn is_data_nan(&self) -> bool;

    /// Read the first value from the start of a buffer
    fn read_ne(buf: &[u8]) -> Result<Self>;

    /// Write the value to the start of a buffer
    fn write_ne(self, buf: &mut [u8]) -> Result<()>;
}

macro_rules! impl_cell_type {
    ($t:ty, $kind:expr, $null:expr, $nan:expr) => {
        impl CellType for $t {
            const KIND: NumericKind = $kind;

            fn null() -> Self {
                $null
            }

            fn is_null(&self) -> bool {
                self.to_ne_bytes() == Self::null().to_ne_bytes()
            }

            fn is_data_nan(&self) -> bool {
                !self.is_null() && $nan(*self)
            }

            fn read_ne(buf: &[u8]) -> Result<Self> {
                let n = Self::KIND.require(buf.len(), 1)?;
                let mut raw = [0u8; size_of::<$t>()];
                raw.copy_from_slice(&buf[..n]);
                Ok(<$t>::from_ne_bytes(raw))
            }

            fn write_ne(self, buf: &mut [u8]) -> Result<()> {
                let n = Self::KIND.require(buf.len(), 1)?;
                buf[..n].copy_from_slice(&self.to_ne_bytes());
                Ok(())
            }
        }
    };
}

impl_cell_type!(i32, NumericKind::Integer, crate::null::C_NULL, |_: i32| false);
impl_cell_type!(f32, NumericKind::Float32, crate::null::f_null(), f32::is_nan);
impl_cell_type!(f64, NumericKind::Float64, crate::null::d_null(), f64::is_nan);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in NumericKind::ALL {
            assert_eq!(NumericKind::try_from(kind.tag()), Ok(kind));
        }
        assert_eq!(NumericKind::try_from(-1), Err(Error::UnknownKind(-1)));
        assert_eq!(NumericKind::try_from(3), Err(Error::UnknownKind(3)));
    }

    #[test]
    fn display_names() {
        assert_eq!(NumericKind::Integer.to_string(), "CELL");
        assert_eq!(NumericKind::Float32.to_string(), "FCELL");
        assert_eq!(NumericKind::Float64.to_string(), "DCELL");

        const NAME: &str = NumericKind::Float32.name();
        assert_eq!(NAME, "FCELL");
    }

    #[test]
    fn require_reports_sizes() {
        assert_eq!(NumericKind::Float64.require(16, 2), Ok(16));
        assert_eq!(
            NumericKind::Float64.require(12, 2),
            Err(Error::BufferTooShort {
                kind: NumericKind::Float64,
                expected: 16,
                found: 12
            })
        );
    }

    #[test]
    fn read_write_native_order() {
        let mut buf = [0u8; 8];
        (-7i32).write_ne(&mut buf).unwrap();
        assert_eq!(i32::read_ne(&buf), Ok(-7));
        assert_eq!(&buf[4..], &[0, 0, 0, 0]);

        2.5f64.write_ne(&mut buf).unwrap();
        assert_eq!(f64::read_ne(&buf), Ok(2.5));

        assert!(f64::read_ne(&buf[..4]).is_err());
    }

    #[test]
    fn plain_nan_is_not_null() {
        assert!(f32::NAN.is_data_nan());
        assert!(f64::NAN.is_data_nan());
        assert!(!f32::NAN.is_null());
        assert!(f32::null().is_null());
        assert!(!f32::null().is_data_nan());
        assert!(!f64::null().is_data_nan());
        assert!(!0i32.is_data_nan());
        assert!(!i32::null().is_data_nan());
    }
}
