//! Fixed-capacity ring of past field generations.
//!
//! Backed by one contiguous allocation of `capacity * entry_size` cells.
//! `start` and `end` are logical cursors that only ever grow; the physical
//! slot of logical index `i` is `i % capacity`. Once the ring is full each
//! push advances `start`, and the evicted slot is simply overwritten by the
//! push that reaches it.

use super::cell::CellState;
use super::field::Field;
use crate::error::{LifeError, Result};

pub struct History {
    entry_size: usize,
    capacity: usize,
    storage: Vec<CellState>,
    start: u64,
    end: u64,
}

impl History {
    /// Allocate a ring holding `capacity` snapshots of `entry_size` cells.
    pub fn new(entry_size: usize, capacity: usize) -> Result<History> {
        if entry_size == 0 {
            return Err(LifeError::ZeroEntrySize);
        }
        if capacity == 0 {
            return Err(LifeError::ZeroCapacity);
        }

        let total = entry_size
            .checked_mul(capacity)
            .ok_or(LifeError::HistoryTooLarge {
                entry_size,
                capacity,
            })?;

        Ok(History {
            entry_size,
            capacity,
            storage: vec![CellState::Empty; total],
            start: 0,
            end: 0,
        })
    }

    #[inline]
    pub fn entry_size(&self) -> usize {
        self.entry_size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained generations (`end - start`).
    #[inline]
    pub fn count(&self) -> u32 {
        (self.end - self.start) as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Total pushes since creation or the last `clear`.
    #[inline]
    pub fn total_pushed(&self) -> u64 {
        self.end
    }

    /// Copy the field's current generation into the next slot.
    ///
    /// # Panics
    /// If the field does not match the configured entry size. The controller
    /// sizes both from one config, so this only fires on a wiring bug.
    pub fn push(&mut self, field: &Field) {
        let cells = field.cells();
        assert_eq!(
            cells.len(),
            self.entry_size,
            "history entry size does not match field size"
        );

        let slot = self.slot_range(self.end);
        self.storage[slot].copy_from_slice(cells);
        self.end += 1;

        let retained = self.end - self.start;
        if retained > self.capacity as u64 {
            self.start += retained - self.capacity as u64;
        }
    }

    /// Snapshot at logical offset `index`, where 0 is the oldest retained
    /// generation and `count() - 1` the newest.
    ///
    /// The slice borrows the ring, so it cannot outlive the next `push`.
    pub fn get(&self, index: u32) -> Option<&[CellState]> {
        if index >= self.count() {
            return None;
        }
        Some(&self.storage[self.slot_range(self.start + index as u64)])
    }

    /// Most recently pushed generation.
    pub fn newest(&self) -> Option<&[CellState]> {
        self.count().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Retained generations, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[CellState]> + '_ {
        (self.start..self.end).map(move |logical| &self.storage[self.slot_range(logical)])
    }

    /// Forget every retained generation. Storage is kept for reuse.
    pub fn clear(&mut self) {
        self.start = 0;
        self.end = 0;
    }

    #[inline]
    fn slot_range(&self, logical: u64) -> std::ops::Range<usize> {
        let slot = (logical % self.capacity as u64) as usize;
        let offset = slot * self.entry_size;
        offset..offset + self.entry_size
    }
}
