//! Error types for the simulation engine.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors raised while wiring up or driving a simulation.
///
/// Every variant is a configuration problem. Lookback past the retained
/// history is not an error; `History::get` returns `None` for that.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("field stride must be non-zero")]
    ZeroStride,

    #[error("field stride {0} exceeds the maximum of {}", crate::automaton::field::MAX_STRIDE)]
    StrideTooLarge(u32),

    #[error("history capacity must be non-zero")]
    ZeroCapacity,

    #[error("history entry size must be non-zero")]
    ZeroEntrySize,

    #[error("history of {capacity} entries of {entry_size} cells does not fit in memory")]
    HistoryTooLarge { entry_size: usize, capacity: usize },

    #[error("seconds per tick must be positive and finite, got {0}")]
    InvalidTickInterval(f64),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        LifeError::Config(err.to_string())
    }
}
