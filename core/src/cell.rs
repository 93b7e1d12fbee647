use serde::{Deserialize, Serialize};

/// One board position.
///
/// `adjacent_mines` is only meaningful when the cell is not a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn new(is_mine: bool) -> Self {
        Self {
            is_mine,
            revealed: false,
            flagged: false,
            adjacent_mines: 0,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// Neither revealed nor flagged, so a reveal may act on it.
    pub const fn is_revealable(self) -> bool {
        !self.revealed && !self.flagged
    }
}
