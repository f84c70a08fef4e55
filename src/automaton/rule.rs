//! The fixed transition rule.

use super::cell::CellState;

/// Compute the next state of a cell from its alive neighbour count.
///
/// Birth on 3, survival on 2 or 3. A cell that fails both decays one step
/// along `Alive -> Dying -> Dead`. `Dead` stays `Dead` until a birth;
/// `Empty` stays `Empty`.
#[inline]
pub fn next_state(alive_neighbors: u8, current: CellState) -> CellState {
    match (alive_neighbors, current) {
        (3, _) | (2, CellState::Alive) => CellState::Alive,
        (_, CellState::Alive) => CellState::Dying,
        (_, CellState::Dying) | (_, CellState::Dead) => CellState::Dead,
        (_, CellState::Empty) => CellState::Empty,
    }
}
