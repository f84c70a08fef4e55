//! Pause, step, timed updates, speed, and cell selection.

use crate::automaton::SimulationController;

/// Flips between paused and running.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 1 if now paused, 0 if now running, -1 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_toggle_pause(ptr: *mut SimulationController) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).toggle_pause() as i32
}

/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 1 if paused, 0 if running, -1 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_is_paused(ptr: *const SimulationController) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).is_paused() as i32
}

/// Advances one generation while paused.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 1 if a generation was computed, 0 if running (no-op), -1 on null ptr.
#[no_mangle]
pub unsafe extern "C" fn lt_step(ptr: *mut SimulationController) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).step() as i32
}

/// Advances one generation if running and more than `seconds_per_tick`
/// has passed since the last one. `now` is the host clock in seconds.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 1 if a generation was computed, 0 if not, -1 on null ptr.
#[no_mangle]
pub unsafe extern "C" fn lt_update(ptr: *mut SimulationController, now: f64) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).update(now) as i32
}

/// Like `lt_update`, using the time elapsed since creation as the clock.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_update_now(ptr: *mut SimulationController) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).update_now() as i32
}

/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 0 on success, 1 if ptr is null, 2 if `seconds` is not positive and finite.
#[no_mangle]
pub unsafe extern "C" fn lt_set_seconds_per_tick(ptr: *mut SimulationController, seconds: f64) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    match (*ptr).set_seconds_per_tick(seconds) {
        Ok(()) => 0,
        Err(err) => {
            tracing::warn!(%err, "lt_set_seconds_per_tick rejected");
            2
        }
    }
}

/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// The tick interval in seconds, or 0.0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_seconds_per_tick(ptr: *const SimulationController) -> f64 {
    if ptr.is_null() {
        return 0.0;
    }
    (*ptr).seconds_per_tick()
}

/// Selects the cell under a pointer position while paused.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 1 if a cell is now selected, 0 if not (running or bad input), -1 if ptr
/// is null.
#[no_mangle]
pub unsafe extern "C" fn lt_select_at(
    ptr: *mut SimulationController,
    px: f32,
    py: f32,
    cell_size: f32,
) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).select_at(px, py, cell_size).is_some() as i32
}

/// Writes the selected cell into `out_x` / `out_y`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
/// - `out_x` and `out_y` must be valid for writes, or null
///
/// # Returns
/// 1 if written, 0 if nothing is selected, -1 on a null pointer.
#[no_mangle]
pub unsafe extern "C" fn lt_get_selected(
    ptr: *const SimulationController,
    out_x: *mut u32,
    out_y: *mut u32,
) -> i32 {
    if ptr.is_null() || out_x.is_null() || out_y.is_null() {
        return -1;
    }
    match (*ptr).selected() {
        Some((x, y)) => {
            *out_x = x;
            *out_y = y;
            1
        }
        None => 0,
    }
}

/// Toggles the selected cell between alive and dead while paused.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// 1 if toggled, 0 if not (running or no selection), -1 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_toggle_selected(ptr: *mut SimulationController) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).toggle_selected().is_some() as i32
}
