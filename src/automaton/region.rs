//! Region extraction and import operations.
//!
//! Renderers pull cells out in bulk rather than one query per cell. Windows
//! are given in field coordinates and wrap toroidally, so a window may start
//! at a negative coordinate or run past the stride.

use super::cell::CellState;
use super::field::Field;
use super::history::History;

/// Extract a rectangular window `[min, max)` of the field into a flat buffer.
///
/// # Layout
/// The buffer is filled in y,x order (y changes slowest, x changes fastest),
/// one byte per cell holding `CellState as u8`. This order matches
/// `import_region`.
///
/// # Returns
/// Number of bytes written, or 0 for an empty window or a short buffer.
pub fn extract_region(
    field: &Field,
    out_buf: &mut [u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> usize {
    let Some(total_size) = window_size(min_x, min_y, max_x, max_y) else {
        return 0;
    };

    // Ensure buffer is large enough
    if out_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            out_buf[offset] = field.get(x, y).as_u8();
            offset += 1;
        }
    }

    offset
}

/// Import a rectangular window `[min, max)` from a flat buffer into the field.
///
/// # Layout
/// The buffer is expected in y,x order (matching `extract_region`). Bytes that
/// are not a known state are treated as alive when non-zero.
///
/// # Returns
/// Number of bytes read, or 0 for an empty window or a short buffer.
pub fn import_region(
    field: &mut Field,
    in_buf: &[u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> usize {
    let Some(total_size) = window_size(min_x, min_y, max_x, max_y) else {
        return 0;
    };

    // Ensure buffer has enough data
    if in_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            field.set(x, y, CellState::from_u8_lossy(in_buf[offset]));
            offset += 1;
        }
    }

    offset
}

/// Copy one retained generation into `out_buf` in row-major order.
///
/// # Returns
/// Number of bytes written, or 0 if `index` is not retained or the buffer is
/// short.
pub fn extract_history_layer(history: &History, index: u32, out_buf: &mut [u8]) -> usize {
    let Some(snapshot) = history.get(index) else {
        return 0;
    };
    if out_buf.len() < snapshot.len() {
        return 0;
    }

    for (dst, cell) in out_buf.iter_mut().zip(snapshot) {
        *dst = cell.as_u8();
    }

    snapshot.len()
}

/// Cell count of a window, `None` when it is empty or inverted.
fn window_size(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<usize> {
    if min_x >= max_x || min_y >= max_y {
        return None;
    }
    let width = (max_x as i64 - min_x as i64) as usize;
    let height = (max_y as i64 - min_y as i64) as usize;
    width.checked_mul(height)
}
