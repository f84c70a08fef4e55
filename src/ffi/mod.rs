//! C FFI layer for host render loops.
//!
//! This module exports C ABI functions so a host written in C, Lua (LuaJIT
//! FFI) or anything else with a C FFI can drive the simulation once per
//! frame. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin
//! wrappers that handle null checks, pointer safety, and turning errors into
//! status codes. Nothing here panics across the boundary.

pub mod controller;
pub mod field;
pub mod history;
pub mod lifecycle;
pub mod region;

pub use controller::{
    lt_get_selected, lt_is_paused, lt_seconds_per_tick, lt_select_at, lt_set_seconds_per_tick,
    lt_step, lt_toggle_pause, lt_toggle_selected, lt_update, lt_update_now,
};
pub use field::{
    lt_clear, lt_get_cell, lt_is_alive, lt_population, lt_randomize, lt_set_cell, lt_stride,
};
pub use history::{lt_history_capacity, lt_history_count, lt_history_extract, lt_history_get_cell};
pub use lifecycle::{
    lt_create, lt_create_from_json, lt_destroy, lt_get_generation, lt_init_logging, lt_reset,
};
pub use region::{lt_extract_region, lt_import_region};
