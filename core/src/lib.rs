#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use hunter::*;
pub use reveal::*;
pub use snapshot::*;
pub use state::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod hunter;
mod reveal;
mod snapshot;
mod state;
mod types;

/// Whether a hunter chases the player, and whether fog hides it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HunterMode {
    #[default]
    Disabled,
    /// Hunter is always visible.
    Hunter,
    /// Hunter is only visible inside the vision radius.
    CaveHunter,
}

impl HunterMode {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub const fn hides_in_fog(self) -> bool {
        matches!(self, Self::CaveHunter)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mine_chance: f64,
    pub vision_radius: Option<Coord>,
    pub hunter: HunterMode,
}

impl GameConfig {
    /// Validated configuration without fog or hunter.
    pub fn new(cols: Coord, rows: Coord, mine_chance: f64) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if !(0.0..=1.0).contains(&mine_chance) {
            return Err(GameError::InvalidMineChance);
        }
        Ok(Self {
            size: (cols, rows),
            mine_chance,
            vision_radius: None,
            hunter: HunterMode::Disabled,
        })
    }

    pub const fn with_vision_radius(mut self, vision_radius: Option<Coord>) -> Self {
        self.vision_radius = vision_radius;
        self
    }

    pub const fn with_hunter(mut self, hunter: HunterMode) -> Self {
        self.hunter = hunter;
        self
    }

    /// Checks a configuration that may have been built field by field.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.size.0, self.size.1, self.mine_chance).map(|_| ())
    }

    pub const fn cols(&self) -> Coord {
        self.size.0
    }

    pub const fn rows(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Blocked by the board edge.
    NoChange,
    Moved(Coord2),
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Moved(_))
    }
}
