//! History tower queries.
//!
//! Index 0 is the oldest retained generation, `lt_history_count() - 1` the
//! newest. Asking for an index that is not retained is normal early in a run
//! and reports "not found" rather than failing.

use crate::automaton::{extract_history_layer, SimulationController};

/// Number of generations currently retained.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_history_count(ptr: *const SimulationController) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).history().count()
}

/// Maximum number of generations the history can hold.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_history_capacity(ptr: *const SimulationController) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).history().capacity() as u32
}

/// Gets the state of one cell in a retained generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// The state byte, or -1 if the index is not retained or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_history_get_cell(
    ptr: *const SimulationController,
    index: u32,
    x: i32,
    y: i32,
) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let ctrl = &*ptr;
    match ctrl.history().get(index) {
        Some(snapshot) => snapshot[ctrl.field().index_of(x, y)].as_u8() as i32,
        None => -1,
    }
}

/// Copies a retained generation into `out_buf`, row-major, one byte per cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written (stride²), or 0 if the index is not retained,
/// `len` is too small, or a pointer is null.
#[no_mangle]
pub unsafe extern "C" fn lt_history_extract(
    ptr: *const SimulationController,
    index: u32,
    out_buf: *mut u8,
    len: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, len);
    extract_history_layer((*ptr).history(), index, out_slice) as u64
}
