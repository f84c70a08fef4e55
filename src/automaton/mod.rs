//! Core simulation logic.
//!
//! This module contains the cell lifecycle, the field and its transition
//! rule, the history ring and the controller that ties them together.
//! The FFI layer in `ffi/` calls into these types.

pub mod cell;
pub mod controller;
pub mod field;
pub mod history;
pub mod region;
pub mod rule;
pub mod spans;

pub use cell::CellState;
pub use controller::{SimulationController, MIN_SECONDS_PER_TICK};
pub use field::{Field, MAX_STRIDE};
pub use history::History;
pub use region::{extract_history_layer, extract_region, import_region};
pub use rule::next_state;
pub use spans::{SpanRecord, SpanStack};
