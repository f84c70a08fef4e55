//! Life Tower - Game of Life engine with a generation history
//!
//! The engine keeps a toroidal field of four-phase cells (alive, dying, dead,
//! empty) and a bounded ring of past generations that a renderer stacks into
//! a 3D tower. A host render loop drives it either through the Rust API in
//! `automaton` or through the C ABI in `ffi`.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;

pub use automaton::{CellState, Field, History, SimulationController};
pub use config::SimulationConfig;
pub use error::{LifeError, Result};
