//! Cell access and field seeding.
//!
//! Coordinates wrap toroidally, so unlike a bounded grid there is no
//! out-of-bounds case: `(-1, 0)` is the last column.

use crate::automaton::{CellState, SimulationController};

/// Gets the side length of the field.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// The stride, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_stride(ptr: *const SimulationController) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).field().stride()
}

/// Gets the state of a cell (0 = empty, 1 = alive, 2 = dying, 3 = dead).
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// The state byte, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_get_cell(ptr: *const SimulationController, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).field().get(x, y).as_u8()
}

/// Sets the state of a cell directly, bypassing the rule.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 0 on success, 1 if ptr is null, 2 if `state` is not a valid state byte.
#[no_mangle]
pub unsafe extern "C" fn lt_set_cell(
    ptr: *mut SimulationController,
    x: i32,
    y: i32,
    state: u8,
) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let Ok(state) = CellState::try_from(state) else {
        tracing::warn!(state, "lt_set_cell: unknown state byte");
        return 2;
    };

    (*ptr).field_mut().set(x, y, state);
    0
}

/// Returns 1 if the cell is alive, 0 otherwise (including null ptr).
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_is_alive(ptr: *const SimulationController, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).field().is_alive(x, y) as u8
}

/// Counts alive cells in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_population(ptr: *const SimulationController) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).field().population() as u64
}

/// Sets every cell to empty. Generation and history are kept; use
/// `lt_reset` to restart both.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_clear(ptr: *mut SimulationController) {
    if ptr.is_null() {
        return;
    }
    (*ptr).field_mut().clear();
}

/// Seeds the field with roughly `density_percent` alive cells.
///
/// The same seed always produces the same field.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_randomize(ptr: *mut SimulationController, seed: u32, density_percent: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).field_mut().randomize(seed, density_percent);
}
