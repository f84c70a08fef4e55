//! Region extraction and import FFI functions.

use crate::automaton::{self, SimulationController};

/// Extracts a rectangular window of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled in y,x order (y changes slowest, x changes fastest),
/// one state byte per cell. The window `[min, max)` wraps around the field
/// edges. This matches the layout expected by `lt_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn lt_extract_region(
    ptr: *const SimulationController,
    out_buf: *mut u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let Some(len) = buffer_len(min_x, min_y, max_x, max_y) else {
        return 0;
    };

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    automaton::extract_region((*ptr).field(), buf_slice, min_x, min_y, max_x, max_y) as u64
}

/// Imports a rectangular window of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected in y,x order (matching `lt_extract_region`).
/// Unknown non-zero bytes are treated as alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes, or be null
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn lt_import_region(
    ptr: *mut SimulationController,
    in_buf: *const u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let Some(len) = buffer_len(min_x, min_y, max_x, max_y) else {
        return 0;
    };

    let buf_slice = std::slice::from_raw_parts(in_buf, len);
    automaton::import_region((*ptr).field_mut(), buf_slice, min_x, min_y, max_x, max_y) as u64
}

fn buffer_len(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<usize> {
    let width = (max_x as i64 - min_x as i64).max(0) as usize;
    let height = (max_y as i64 - min_y as i64).max(0) as usize;
    match width.checked_mul(height) {
        Some(0) | None => None,
        Some(len) => Some(len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{field, lifecycle};
    use std::ptr;

    #[test]
    fn test_extract_region_basic() {
        unsafe {
            let ctrl = lifecycle::lt_create(8, 2, 0.1);
            field::lt_set_cell(ctrl, 2, 2, 1);
            field::lt_set_cell(ctrl, 3, 2, 1);
            field::lt_set_cell(ctrl, 2, 3, 1);

            let mut buffer = vec![0u8; 4 * 4];
            let written = lt_extract_region(ctrl, buffer.as_mut_ptr(), 2, 2, 6, 6);
            assert_eq!(written, 16);
            assert_eq!(buffer[0], 1);
            assert_eq!(buffer[1], 1);
            assert_eq!(buffer[4], 1);
            assert_eq!(buffer.iter().filter(|&&b| b == 1).count(), 3);

            lifecycle::lt_destroy(ctrl);
        }
    }

    #[test]
    fn test_extract_region_wraps() {
        unsafe {
            let ctrl = lifecycle::lt_create(4, 2, 0.1);
            field::lt_set_cell(ctrl, 3, 0, 1);

            let mut buffer = vec![0u8; 2];
            assert_eq!(lt_extract_region(ctrl, buffer.as_mut_ptr(), -1, 0, 1, 1), 2);
            assert_eq!(buffer, vec![1, 0]);

            lifecycle::lt_destroy(ctrl);
        }
    }

    #[test]
    fn test_import_region() {
        unsafe {
            let ctrl = lifecycle::lt_create(8, 2, 0.1);
            let glider = [0u8, 1, 0, 0, 0, 1, 1, 1, 1];
            assert_eq!(lt_import_region(ctrl, glider.as_ptr(), 0, 0, 3, 3), 9);
            assert_eq!(field::lt_population(ctrl), 5);
            assert_eq!(field::lt_get_cell(ctrl, 1, 0), 1);
            assert_eq!(field::lt_get_cell(ctrl, 2, 1), 1);

            lifecycle::lt_destroy(ctrl);
        }
    }

    #[test]
    fn test_empty_window() {
        unsafe {
            let ctrl = lifecycle::lt_create(4, 2, 0.1);
            let mut buffer = vec![0u8; 4];
            assert_eq!(lt_extract_region(ctrl, buffer.as_mut_ptr(), 2, 0, 2, 4), 0);
            assert_eq!(lt_import_region(ctrl, buffer.as_ptr(), 3, 3, 1, 1), 0);
            lifecycle::lt_destroy(ctrl);
        }
    }

    #[test]
    fn test_null_checks() {
        unsafe {
            let ctrl = lifecycle::lt_create(4, 2, 0.1);
            let mut buffer = vec![0u8; 16];

            assert_eq!(
                lt_extract_region(ptr::null(), buffer.as_mut_ptr(), 0, 0, 4, 4),
                0
            );
            assert_eq!(lt_extract_region(ctrl, ptr::null_mut(), 0, 0, 4, 4), 0);
            assert_eq!(
                lt_import_region(ptr::null_mut(), buffer.as_ptr(), 0, 0, 4, 4),
                0
            );
            assert_eq!(lt_import_region(ctrl, ptr::null(), 0, 0, 4, 4), 0);

            lifecycle::lt_destroy(ctrl);
        }
    }
}
