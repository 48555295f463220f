//! Allocation of zeroed row buffers
//!
//! Rows are allocated one column wider than requested, matching the row
//! buffers expected by row readers that write a trailing sentinel value.

// crate modules
use crate::error::Result;
use crate::kind::NumericKind;
use crate::null::null_bitstream_size;

// external crates
use log::trace;

/// Size of a single raster value of `kind` in bytes
pub fn raster_size(kind: NumericKind) -> usize {
    kind.size()
}

/// Allocate a zeroed row buffer for `cols` values of any kind
///
/// ```rust
/// # use rastkit_cell::{allocate_raster_buf, NumericKind};
/// let row = allocate_raster_buf(NumericKind::Float64, 10);
/// assert_eq!(row.len(), 11 * 8);
/// assert!(row.iter().all(|b| *b == 0));
/// ```
pub fn allocate_raster_buf(kind: NumericKind, cols: usize) -> Vec<u8> {
    trace!("allocating {kind} row buffer for {cols} columns");
    vec![0u8; row_len(cols).saturating_mul(raster_size(kind))]
}

/// Allocate a zeroed `Integer` row
pub fn allocate_c_raster_buf(cols: usize) -> Vec<i32> {
    vec![0; row_len(cols)]
}

/// Allocate a zeroed `Float32` row
pub fn allocate_f_raster_buf(cols: usize) -> Vec<f32> {
    vec![0.0; row_len(cols)]
}

/// Allocate a zeroed `Float64` row
pub fn allocate_d_raster_buf(cols: usize) -> Vec<f64> {
    vec![0.0; row_len(cols)]
}

/// Allocate a row of per-column null flags
pub fn allocate_null_buf(cols: usize) -> Vec<u8> {
    vec![0; row_len(cols)]
}

/// Number of values in a row of `cols` columns, including the spare column
fn row_len(cols: usize) -> usize {
    cols.saturating_add(1)
}

/// Allocate a packed null bitstream for `cols` columns
///
/// ```rust
/// # use rastkit_cell::allocate_null_bits;
/// assert_eq!(allocate_null_bits(17).unwrap().len(), 4);
/// assert!(allocate_null_bits(0).is_err());
/// ```
pub fn allocate_null_bits(cols: usize) -> Result<Vec<u8>> {
    let size = null_bitstream_size(cols)?;
    trace!("allocating {size} byte null bitstream for {cols} columns");
    Ok(vec![0; size + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lengths() {
        assert_eq!(allocate_raster_buf(NumericKind::Integer, 0).len(), 4);
        assert_eq!(allocate_raster_buf(NumericKind::Float32, 3).len(), 16);
        assert_eq!(allocate_c_raster_buf(5).len(), 6);
        assert_eq!(allocate_f_raster_buf(5).len(), 6);
        assert_eq!(allocate_d_raster_buf(5).len(), 6);
        assert_eq!(allocate_null_buf(5), vec![0u8; 6]);
    }

    #[test]
    fn row_len_saturates() {
        assert_eq!(row_len(0), 1);
        assert_eq!(row_len(9), 10);
        assert_eq!(row_len(usize::MAX), usize::MAX);
    }

    #[test]
    fn sizes_match_kinds() {
        for kind in NumericKind::ALL {
            assert_eq!(raster_size(kind), kind.size());
        }
    }
}
