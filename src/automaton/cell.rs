//! Four-phase cell lifecycle.

/// State of a single cell.
///
/// Classic Life is binary. Here a cell that stops living fades through
/// `Dying` into `Dead` so the renderer can show a trail. `Empty` is the
/// zero value, so a freshly zeroed buffer is an empty field.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty = 0,
    Alive = 1,
    Dying = 2,
    Dead = 3,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::Empty,
        CellState::Alive,
        CellState::Dying,
        CellState::Dead,
    ];

    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a host byte where any non-zero unknown value means alive.
    #[inline]
    pub fn from_u8_lossy(value: u8) -> CellState {
        CellState::try_from(value).unwrap_or(CellState::Alive)
    }
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Alive),
            2 => Ok(CellState::Dying),
            3 => Ok(CellState::Dead),
            other => Err(other),
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> u8 {
        state as u8
    }
}
