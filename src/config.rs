//! Construction-time simulation parameters.

use serde::{Deserialize, Serialize};

use crate::automaton::field::MAX_STRIDE;
use crate::error::{LifeError, Result};

/// Parameters fixed for the lifetime of a simulation.
///
/// Changing any of them requires tearing the simulation down and creating a
/// new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side length of the square field.
    pub stride: u32,
    /// Number of past generations kept for the history tower.
    pub history_capacity: u32,
    /// Initial interval between automatic ticks while running.
    pub seconds_per_tick: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            stride: 64,
            history_capacity: 64,
            seconds_per_tick: 0.1,
        }
    }
}

impl SimulationConfig {
    pub fn new(stride: u32, history_capacity: u32, seconds_per_tick: f64) -> Self {
        Self {
            stride,
            history_capacity,
            seconds_per_tick,
        }
    }

    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            return Err(LifeError::ZeroStride);
        }
        if self.stride > MAX_STRIDE {
            return Err(LifeError::StrideTooLarge(self.stride));
        }
        if self.history_capacity == 0 {
            return Err(LifeError::ZeroCapacity);
        }
        validate_tick_interval(self.seconds_per_tick)
    }

    /// Number of cells in one field snapshot.
    pub fn entry_size(&self) -> usize {
        self.stride as usize * self.stride as usize
    }
}

pub(crate) fn validate_tick_interval(seconds: f64) -> Result<()> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(LifeError::InvalidTickInterval(seconds))
    }
}
