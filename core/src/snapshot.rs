use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunterView {
    pub position: Coord2,
    pub visible: bool,
}

/// Read-only view of a [`GameState`] for drivers to render from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub cells: Array2<Cell>,
    /// Fog of war, `true` where the player can see.
    pub visible: Array2<bool>,
    pub player: Coord2,
    pub hunter: Option<HunterView>,
    pub elapsed_seconds: u32,
    pub status: GameStatus,
    pub vision_radius: Option<Coord>,
    pub triggered_mine: Option<Coord2>,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        let size = state.size();
        let cells = state.grid().cells().clone();
        let mut visible = Array2::from_elem(size.to_nd_index(), true);

        if state.vision_radius().is_some() {
            let (x_end, y_end) = size;
            for x in 0..x_end {
                for y in 0..y_end {
                    let coords = (x, y);
                    visible[coords.to_nd_index()] = state.is_cell_visible(coords);
                }
            }
        }

        Self {
            size,
            cells,
            visible,
            player: state.player(),
            hunter: state.hunter().map(|hunter| HunterView {
                position: hunter.position(),
                visible: state.is_hunter_visible(),
            }),
            elapsed_seconds: state.elapsed_seconds(),
            status: state.status(),
            vision_radius: state.vision_radius(),
            triggered_mine: state.triggered_mine(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn is_visible(&self, coords: Coord2) -> bool {
        self.visible[coords.to_nd_index()]
    }
}
