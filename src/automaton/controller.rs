//! Pause/step/tick orchestration over a field and its history.
//!
//! The host loop feeds input and timestamps in; the controller decides when a
//! generation happens. Every advancement pushes the current field into the
//! history first and then advances the field, so history entry `count() - 1`
//! is always the generation just before the one on screen.

use std::time::Instant;

use super::cell::CellState;
use super::field::Field;
use super::history::History;
use super::spans::{SpanRecord, SpanStack};
use crate::config::{validate_tick_interval, SimulationConfig};
use crate::error::Result;

/// Smallest interval `adjust_seconds_per_tick` will go down to.
pub const MIN_SECONDS_PER_TICK: f64 = 0.001;

pub struct SimulationController {
    field: Field,
    history: History,
    paused: bool,
    seconds_per_tick: f64,
    last_tick: f64,
    selected: Option<(u32, u32)>,
    clock_origin: Instant,
    spans: Option<SpanStack>,
}

impl SimulationController {
    /// Build a paused simulation with an empty field and history.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let field = Field::new(config.stride)?;
        let history = History::new(config.entry_size(), config.history_capacity as usize)?;

        tracing::info!(
            stride = config.stride,
            history_capacity = config.history_capacity,
            seconds_per_tick = config.seconds_per_tick,
            "simulation created"
        );

        Ok(SimulationController {
            field,
            history,
            paused: true,
            seconds_per_tick: config.seconds_per_tick,
            last_tick: 0.0,
            selected: None,
            clock_origin: Instant::now(),
            spans: None,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Direct field access for seeding patterns.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.field.generation()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip between paused and running. Returns the new paused flag.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Selection only exists while paused, so resuming drops it.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if !paused {
            self.selected = None;
        }
    }

    pub fn seconds_per_tick(&self) -> f64 {
        self.seconds_per_tick
    }

    pub fn set_seconds_per_tick(&mut self, seconds: f64) -> Result<()> {
        validate_tick_interval(seconds)?;
        self.seconds_per_tick = seconds;
        Ok(())
    }

    /// Nudge the interval by `delta`, never below `MIN_SECONDS_PER_TICK`.
    pub fn adjust_seconds_per_tick(&mut self, delta: f64) -> f64 {
        let next = self.seconds_per_tick + delta;
        if next.is_finite() {
            self.seconds_per_tick = next.max(MIN_SECONDS_PER_TICK);
        }
        self.seconds_per_tick
    }

    /// Advance exactly one generation while paused.
    ///
    /// Returns `false` without touching anything while running.
    pub fn step(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.advance();
        true
    }

    /// Time-based advancement for a running simulation.
    ///
    /// `now` is the host clock in seconds. At most one generation per call,
    /// however long it has been since the last one. A non-finite clock never
    /// advances.
    pub fn update(&mut self, now: f64) -> bool {
        if self.paused {
            return false;
        }
        if !now.is_finite() || now - self.last_tick <= self.seconds_per_tick {
            return false;
        }
        self.advance();
        self.last_tick = now;
        true
    }

    /// `update` against the controller's own clock.
    pub fn update_now(&mut self) -> bool {
        let now = self.clock_origin.elapsed().as_secs_f64();
        self.update(now)
    }

    /// Map a pointer position to a cell and select it.
    ///
    /// The position is floored to the cell below it, then wrapped. Only
    /// possible while paused; while running this clears the selection.
    pub fn select_at(&mut self, px: f32, py: f32, cell_size: f32) -> Option<(u32, u32)> {
        if !self.paused || !(cell_size > 0.0) || !px.is_finite() || !py.is_finite() {
            self.selected = None;
            return None;
        }

        let cx = (px as f64 / cell_size as f64).floor() as i64;
        let cy = (py as f64 / cell_size as f64).floor() as i64;
        let cell = (self.field.wrap(cx), self.field.wrap(cy));
        self.selected = Some(cell);
        self.selected
    }

    pub fn selected(&self) -> Option<(u32, u32)> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Toggle the selected cell between alive and dead while paused.
    pub fn toggle_selected(&mut self) -> Option<CellState> {
        if !self.paused {
            return None;
        }
        let (x, y) = self.selected?;
        Some(self.field.toggle(x as i32, y as i32))
    }

    /// Empty the field and history, drop the selection and pause.
    pub fn reset(&mut self) {
        self.field.reset();
        self.history.clear();
        self.selected = None;
        self.paused = true;
        self.last_tick = 0.0;
        tracing::info!("simulation reset");
    }

    /// Record timing spans for each advancement.
    pub fn enable_profiling(&mut self, enabled: bool) {
        self.spans = if enabled { Some(SpanStack::new()) } else { None };
    }

    /// Spans recorded since the last call. Empty when profiling is off.
    pub fn take_timings(&mut self) -> Vec<SpanRecord> {
        self.spans
            .as_mut()
            .map(SpanStack::take_records)
            .unwrap_or_default()
    }

    fn advance(&mut self) {
        match self.spans.as_mut() {
            Some(spans) => {
                spans.begin("tick");
                spans.measure("history_push", || self.history.push(&self.field));
                spans.measure("field_advance", || self.field.advance());
                spans.end();
            }
            None => {
                self.history.push(&self.field);
                self.field.advance();
            }
        }

        tracing::debug!(
            generation = self.field.generation(),
            history = self.history.count(),
            population = self.field.population(),
            "advanced"
        );
    }
}
