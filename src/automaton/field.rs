//! Toroidal, double-buffered cell field.
//!
//! Cells live in a flat row-major buffer (`y * stride + x`). Every public
//! coordinate is wrapped with floored modulo, so `-1` addresses the last
//! column or row rather than falling off the edge.
//!
//! `advance` reads only the current buffer and writes only the scratch
//! buffer, then swaps the two. No neighbour read ever sees a value from the
//! generation being computed.

use super::cell::CellState;
use super::rule::next_state;
use crate::error::{LifeError, Result};

/// Largest supported side length.
pub const MAX_STRIDE: u32 = 4096;

/// A square toroidal grid of cells.
#[derive(Clone, Debug)]
pub struct Field {
    stride: u32,
    cells: Vec<CellState>,
    scratch: Vec<CellState>,
    generation: u64,
}

impl Field {
    /// Allocate an all-`Empty` field of `stride * stride` cells.
    pub fn new(stride: u32) -> Result<Field> {
        if stride == 0 {
            return Err(LifeError::ZeroStride);
        }
        if stride > MAX_STRIDE {
            return Err(LifeError::StrideTooLarge(stride));
        }

        let size = stride as usize * stride as usize;
        Ok(Field {
            stride,
            cells: vec![CellState::Empty; size],
            scratch: vec![CellState::Empty; size],
            generation: 0,
        })
    }

    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of cells (`stride²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Completed `advance` calls since creation or the last `reset`.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation in row-major order.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Wrap a coordinate onto `0..stride` using floored modulo.
    #[inline]
    pub fn wrap(&self, coord: i64) -> u32 {
        coord.rem_euclid(self.stride as i64) as u32
    }

    /// Linear index of a (wrapped) coordinate.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> usize {
        let x = self.wrap(x as i64) as usize;
        let y = self.wrap(y as i64) as usize;
        y * self.stride as usize + x
    }

    pub fn get(&self, x: i32, y: i32) -> CellState {
        self.cells[self.index_of(x, y)]
    }

    /// Write into the current buffer. Does not touch the scratch buffer.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        let idx = self.index_of(x, y);
        self.cells[idx] = state;
    }

    #[inline]
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_alive()
    }

    /// Flip a cell between `Alive` and `Dead`, bypassing the rule.
    ///
    /// Any non-alive cell becomes `Alive`. Returns the new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> CellState {
        let idx = self.index_of(x, y);
        let next = if self.cells[idx].is_alive() {
            CellState::Dead
        } else {
            CellState::Alive
        };
        self.cells[idx] = next;
        next
    }

    /// Count alive cells among the 8 Moore offsets, wrapped.
    ///
    /// On very small fields the same cell can sit at several offsets; it is
    /// counted once per offset.
    pub fn count_alive_neighbors(&self, x: i32, y: i32) -> u8 {
        let stride = self.stride as usize;
        let x = self.wrap(x as i64) as usize;
        let y = self.wrap(y as i64) as usize;
        count_neighbors(&self.cells, stride, x, y)
    }

    /// Number of `Alive` cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Set every cell to `Empty`. The generation counter keeps running.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Empty the field and restart the generation count at 0.
    pub fn reset(&mut self) {
        self.clear();
        self.generation = 0;
    }

    /// Seed the field deterministically.
    ///
    /// Roughly `density_percent` of the cells become `Alive`, the rest
    /// `Empty`. The generation counter is left untouched.
    pub fn randomize(&mut self, seed: u32, density_percent: u8) {
        let density = density_percent.min(100) as u32;
        let mut rng = if seed == 0 { 0x9E37_79B9 } else { seed };
        for cell in self.cells.iter_mut() {
            *cell = if xorshift32(&mut rng) % 100 < density {
                CellState::Alive
            } else {
                CellState::Empty
            };
        }
    }

    /// Compute the next generation and make it current.
    pub fn advance(&mut self) {
        let stride = self.stride as usize;
        let cells = &self.cells;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.scratch
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| compute_row(cells, stride, y, row));
        }

        #[cfg(not(feature = "parallel"))]
        for (y, row) in self.scratch.chunks_mut(stride).enumerate() {
            compute_row(cells, stride, y, row);
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }
}

/// Moore neighbour count for an already wrapped coordinate.
#[inline]
fn count_neighbors(cells: &[CellState], stride: usize, x: usize, y: usize) -> u8 {
    let rows = [(y + stride - 1) % stride, y, (y + 1) % stride];
    let cols = [(x + stride - 1) % stride, x, (x + 1) % stride];

    let mut count = 0;
    for (dy, &ny) in rows.iter().enumerate() {
        for (dx, &nx) in cols.iter().enumerate() {
            // Skip the center offset
            if dy == 1 && dx == 1 {
                continue;
            }
            if cells[ny * stride + nx].is_alive() {
                count += 1;
            }
        }
    }

    count
}

/// Fill one row of the next generation from the current buffer.
fn compute_row(cells: &[CellState], stride: usize, y: usize, row: &mut [CellState]) {
    let base = y * stride;
    for (x, next) in row.iter_mut().enumerate() {
        let neighbors = count_neighbors(cells, stride, x, y);
        *next = next_state(neighbors, cells[base + x]);
    }
}

/// Random number generator (xorshift32)
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(stride: u32, alive: &[(i32, i32)]) -> Field {
        let mut field = Field::new(stride).unwrap();
        for &(x, y) in alive {
            field.set(x, y, CellState::Alive);
        }
        field
    }

    #[test]
    fn test_create_field() {
        let field = Field::new(8).unwrap();
        assert_eq!(field.stride(), 8);
        assert_eq!(field.len(), 64);
        assert_eq!(field.generation(), 0);
        assert!(field.cells().iter().all(|&c| c == CellState::Empty));
    }

    #[test]
    fn test_create_rejects_bad_stride() {
        assert_eq!(Field::new(0).unwrap_err(), LifeError::ZeroStride);
        assert_eq!(
            Field::new(MAX_STRIDE + 1).unwrap_err(),
            LifeError::StrideTooLarge(MAX_STRIDE + 1)
        );
    }

    #[test]
    fn test_index_of() {
        let field = Field::new(4).unwrap();
        assert_eq!(field.index_of(0, 0), 0);
        assert_eq!(field.index_of(3, 3), 15);
        assert_eq!(field.index_of(1, 0), 1);
        assert_eq!(field.index_of(0, 1), 4);
        assert_eq!(field.index_of(-1, 0), 3);
        assert_eq!(field.index_of(0, -1), 12);
        assert_eq!(field.index_of(4, 4), 0);
    }

    #[test]
    fn test_wrap_is_floored() {
        let field = Field::new(5).unwrap();
        assert_eq!(field.wrap(-1), 4);
        assert_eq!(field.wrap(-5), 0);
        assert_eq!(field.wrap(-6), 4);
        assert_eq!(field.wrap(7), 2);
        assert_eq!(field.wrap(i64::MIN), (i64::MIN).rem_euclid(5) as u32);
    }

    #[test]
    fn test_wrapping_periodicity() {
        let stride = 5;
        let mut field = Field::new(stride as u32).unwrap();
        field.set(1, 3, CellState::Alive);
        field.set(4, 0, CellState::Dying);
        field.set(0, 2, CellState::Dead);

        for y in 0..stride {
            for x in 0..stride {
                let expected = field.get(x, y);
                for k in -3..=3 {
                    for m in -3..=3 {
                        assert_eq!(field.get(x + k * stride, y + m * stride), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_set_wraps_negative() {
        let mut field = Field::new(4).unwrap();
        field.set(-1, -1, CellState::Alive);
        assert!(field.is_alive(3, 3));
        assert_eq!(field.population(), 1);
    }

    #[test]
    fn test_count_neighbors_wraps() {
        let field = field_with(4, &[(3, 3), (0, 3), (3, 0)]);
        // All three sit around (0, 0) through the edges
        assert_eq!(field.count_alive_neighbors(0, 0), 3);
        assert_eq!(field.count_alive_neighbors(2, 2), 1);
    }

    #[test]
    fn test_single_cell_torus_counts_itself() {
        let mut field = field_with(1, &[(0, 0)]);
        assert_eq!(field.count_alive_neighbors(0, 0), 8);
        field.advance();
        assert_eq!(field.get(0, 0), CellState::Dying);
    }

    #[test]
    fn test_blinker_scenario() {
        // Vertical blinker away from the edges
        let mut field = field_with(5, &[(2, 1), (2, 2), (2, 3)]);
        field.advance();

        assert_eq!(field.get(1, 2), CellState::Alive);
        assert_eq!(field.get(3, 2), CellState::Alive);
        assert_eq!(field.get(2, 2), CellState::Alive);
        assert_eq!(field.get(2, 1), CellState::Dying);
        assert_eq!(field.get(2, 3), CellState::Dying);
        assert_eq!(field.population(), 3);
        assert_eq!(field.generation(), 1);
    }

    #[test]
    fn test_blinker_on_three_torus_fills_field() {
        // On a 3x3 torus every other cell is a neighbour, so the column
        // feeds itself and every empty cell sees exactly three.
        let mut field = field_with(3, &[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(field.count_alive_neighbors(1, 0), 2);
        assert_eq!(field.count_alive_neighbors(0, 1), 3);

        field.advance();
        assert_eq!(field.population(), 9);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut field = field_with(6, &[(2, 1), (2, 2), (2, 3)]);
        field.advance();
        field.advance();
        assert!(field.is_alive(2, 1));
        assert!(field.is_alive(2, 2));
        assert!(field.is_alive(2, 3));
        assert_eq!(field.population(), 3);
        // Horizontal arms from the previous phase faded one step
        assert_eq!(field.get(1, 2), CellState::Dying);
        assert_eq!(field.get(3, 2), CellState::Dying);
    }

    #[test]
    fn test_decay_chain_isolated_cell() {
        let mut field = field_with(5, &[(2, 2)]);
        field.advance();
        assert_eq!(field.get(2, 2), CellState::Dying);
        field.advance();
        assert_eq!(field.get(2, 2), CellState::Dead);
        for _ in 0..5 {
            field.advance();
            assert_eq!(field.get(2, 2), CellState::Dead);
        }
    }

    #[test]
    fn test_block_is_stable() {
        let mut field = field_with(6, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        for _ in 0..4 {
            field.advance();
        }
        for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert!(field.is_alive(x, y));
        }
        assert_eq!(field.population(), 4);
    }

    #[test]
    fn test_birth_revives_dead() {
        let mut field = field_with(6, &[(0, 0), (2, 0), (1, 2)]);
        field.set(1, 1, CellState::Dead);
        field.advance();
        assert_eq!(field.get(1, 1), CellState::Alive);
    }

    #[test]
    fn test_glider_crosses_edge() {
        // Glider heading down-right; after 4 generations it shifts by (1, 1)
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let offset = 6;
        let mut field = Field::new(8).unwrap();
        for &(x, y) in &glider {
            field.set(x + offset, y + offset, CellState::Alive);
        }
        for _ in 0..4 {
            field.advance();
        }
        for &(x, y) in &glider {
            assert!(field.is_alive(x + offset + 1, y + offset + 1));
        }
        assert_eq!(field.population(), 5);
    }

    #[test]
    fn test_toggle() {
        let mut field = Field::new(4).unwrap();
        assert_eq!(field.toggle(1, 1), CellState::Alive);
        assert_eq!(field.toggle(1, 1), CellState::Dead);
        assert_eq!(field.toggle(1, 1), CellState::Alive);
        field.set(2, 2, CellState::Dying);
        assert_eq!(field.toggle(2, 2), CellState::Alive);
    }

    #[test]
    fn test_clear_and_randomize() {
        let mut field = Field::new(16).unwrap();
        field.randomize(42, 30);
        let seeded = field.population();
        assert!(seeded > 0 && seeded < 256);

        let mut again = Field::new(16).unwrap();
        again.randomize(42, 30);
        assert_eq!(field.cells(), again.cells());

        field.advance();
        field.clear();
        assert_eq!(field.population(), 0);
        assert_eq!(field.generation(), 1);

        field.randomize(42, 30);
        field.reset();
        assert_eq!(field.population(), 0);
        assert_eq!(field.generation(), 0);

        field.randomize(7, 0);
        assert_eq!(field.population(), 0);
        field.randomize(7, 100);
        assert_eq!(field.population(), 256);
    }
}
