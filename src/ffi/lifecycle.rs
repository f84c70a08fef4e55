//! Simulation creation, destruction, and generation queries.

use crate::automaton::SimulationController;
use crate::config::SimulationConfig;

/// Creates a new paused simulation and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new SimulationController, or null if the configuration is
/// invalid (zero stride, zero capacity, non-positive tick interval).
///
/// # Safety
/// The returned pointer must eventually be freed with `lt_destroy()`.
#[no_mangle]
pub extern "C" fn lt_create(
    stride: u32,
    history_capacity: u32,
    seconds_per_tick: f64,
) -> *mut SimulationController {
    let config = SimulationConfig::new(stride, history_capacity, seconds_per_tick);
    match SimulationController::new(config) {
        Ok(ctrl) => Box::into_raw(Box::new(ctrl)),
        Err(err) => {
            tracing::error!(%err, "lt_create failed");
            std::ptr::null_mut()
        }
    }
}

/// Creates a simulation from a UTF-8 JSON config.
///
/// Missing keys take their defaults, e.g. `{"stride": 32}`.
///
/// # Safety
/// - `json` must point to at least `len` readable bytes, or be null
///
/// # Returns
/// A pointer to a new SimulationController, or null on a null pointer,
/// invalid UTF-8, malformed JSON, or an invalid configuration.
#[no_mangle]
pub unsafe extern "C" fn lt_create_from_json(
    json: *const u8,
    len: usize,
) -> *mut SimulationController {
    if json.is_null() {
        return std::ptr::null_mut();
    }

    let bytes = std::slice::from_raw_parts(json, len);
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(%err, "lt_create_from_json: config is not UTF-8");
            return std::ptr::null_mut();
        }
    };

    let created = SimulationConfig::from_json(text).and_then(SimulationController::new);
    match created {
        Ok(ctrl) => Box::into_raw(Box::new(ctrl)),
        Err(err) => {
            tracing::error!(%err, "lt_create_from_json failed");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its field and history.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lt_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lt_destroy(ptr: *mut SimulationController) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lt_get_generation(ptr: *const SimulationController) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Resets the simulation: empty field, empty history, paused.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationController, or null
#[no_mangle]
pub unsafe extern "C" fn lt_reset(ptr: *mut SimulationController) {
    if ptr.is_null() {
        return;
    }
    (*ptr).reset();
}

/// Installs a `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
///
/// # Returns
/// 0 if installed, 1 if a global subscriber already exists.
#[no_mangle]
pub extern "C" fn lt_init_logging() -> i32 {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
