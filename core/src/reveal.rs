use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was out of bounds, already revealed, or flagged.
    NoChange,
    Safe,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Safe => true,
            HitMine => true,
        }
    }
}

/// Reveals `coords` on `grid`.
///
/// A mine target leaves the grid untouched and reports [`RevealOutcome::HitMine`]. On a first click the fill is
/// started from the target and from each of its neighbours, so even a numbered cell opens a small area. The caller is
/// responsible for making the first-click target safe beforehand.
pub fn reveal(grid: &mut Grid, coords: Coord2, is_first_click: bool) -> RevealOutcome {
    if !grid.contains(coords) || !grid[coords].is_revealable() {
        return RevealOutcome::NoChange;
    }

    if grid[coords].is_mine {
        return RevealOutcome::HitMine;
    }

    if is_first_click {
        let mut opened = flood_reveal(grid, coords);
        for neighbor in grid.iter_neighbors(coords) {
            opened += flood_reveal(grid, neighbor);
        }
        log::debug!("First click at {:?} opened {} cells", coords, opened);
    } else {
        let opened = flood_reveal(grid, coords);
        log::debug!("Reveal at {:?} opened {} cells", coords, opened);
    }

    RevealOutcome::Safe
}

/// Breadth-first reveal starting at `start`, returning how many cells were opened.
///
/// Mines and flagged cells are skipped, numbered cells are opened without expanding. An out-of-bounds `start` opens
/// nothing.
pub fn flood_reveal(grid: &mut Grid, start: Coord2) -> CellCount {
    if !grid.contains(start) {
        return 0;
    }

    let mut opened = 0;
    let mut visited = BTreeSet::from([start]);
    let mut to_visit = VecDeque::from([start]);

    while let Some(visit_coords) = to_visit.pop_front() {
        let cell = grid[visit_coords];
        if cell.revealed || cell.flagged || cell.is_mine {
            log::trace!("Skipping cell at {:?}", visit_coords);
            continue;
        }

        grid[visit_coords].revealed = true;
        opened += 1;
        log::trace!(
            "Flood opened cell at {:?}, mine count: {}",
            visit_coords,
            cell.adjacent_mines
        );

        // only zero cells spread
        if cell.adjacent_mines == 0 {
            for neighbor in grid.iter_neighbors(visit_coords) {
                if visited.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }
        }
    }

    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: Coord2, mines: &[Coord2]) -> Grid {
        Grid::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn mine_target_changes_nothing() {
        let mut board = grid((3, 3), &[(1, 1)]);
        let before = board.clone();

        assert_eq!(reveal(&mut board, (1, 1), false), RevealOutcome::HitMine);
        assert_eq!(board, before);
    }

    #[test]
    fn numbered_target_does_not_expand() {
        let mut board = grid((3, 3), &[(2, 2)]);

        assert_eq!(reveal(&mut board, (1, 1), false), RevealOutcome::Safe);
        assert_eq!(board.revealed_count(), 1);
        assert!(board[(1, 1)].is_revealed());
    }

    #[test]
    fn zero_target_floods_until_numbers() {
        // 4x1 strip: . . 1 *
        let mut board = grid((4, 1), &[(3, 0)]);

        assert_eq!(reveal(&mut board, (0, 0), false), RevealOutcome::Safe);
        assert!(board[(0, 0)].is_revealed());
        assert!(board[(1, 0)].is_revealed());
        assert!(board[(2, 0)].is_revealed());
        assert!(!board[(3, 0)].is_revealed());
    }

    #[test]
    fn flood_stops_at_walls_of_numbers() {
        // a vertical wall of mines on column 2 cuts the board in two
        let mut board = grid((5, 3), &[(2, 0), (2, 1), (2, 2)]);

        reveal(&mut board, (0, 1), false);

        for y in 0..3 {
            assert!(board[(0, y)].is_revealed());
            assert!(board[(1, y)].is_revealed());
            assert!(!board[(2, y)].is_revealed());
            assert!(!board[(3, y)].is_revealed());
            assert!(!board[(4, y)].is_revealed());
        }
    }

    #[test]
    fn flagged_cells_block_reveal_and_flood() {
        let mut board = grid((3, 1), &[]);
        board.toggle_flag((1, 0));

        assert_eq!(reveal(&mut board, (1, 0), false), RevealOutcome::NoChange);
        assert_eq!(reveal(&mut board, (0, 0), false), RevealOutcome::Safe);
        assert!(board[(0, 0)].is_revealed());
        assert!(!board[(1, 0)].is_revealed());
        assert!(board[(1, 0)].is_flagged());
        assert!(!board[(2, 0)].is_revealed());
    }

    #[test]
    fn reveal_twice_is_idempotent() {
        let mut board = grid((4, 4), &[(3, 3)]);

        reveal(&mut board, (0, 0), false);
        let after_first = board.clone();

        assert_eq!(reveal(&mut board, (0, 0), false), RevealOutcome::NoChange);
        assert_eq!(board, after_first);
    }

    #[test]
    fn out_of_bounds_is_no_op() {
        let mut board = grid((2, 2), &[]);
        assert_eq!(reveal(&mut board, (2, 0), false), RevealOutcome::NoChange);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn flood_from_outside_board_opens_nothing() {
        let mut board = Grid::empty((3, 3));

        assert_eq!(flood_reveal(&mut board, (5, 5)), 0);
        assert_eq!(flood_reveal(&mut board, (3, 0)), 0);
        assert_eq!(board.revealed_count(), 0);
        assert_eq!(reveal(&mut board, (5, 5), true), RevealOutcome::NoChange);
    }

    #[test]
    fn outcomes_report_updates() {
        let mut board = grid((3, 1), &[(2, 0)]);

        assert!(reveal(&mut board, (0, 0), false).has_update());
        assert!(!reveal(&mut board, (0, 0), false).has_update());
        assert!(reveal(&mut board, (2, 0), false).has_update());
    }

    #[test]
    fn first_click_opens_neighbourhood_of_numbered_cell() {
        // mines on both sides of the middle row make (1, 1) a "2"
        let mut board = grid((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(reveal(&mut board, (1, 1), true), RevealOutcome::Safe);

        for (coords, cell) in board.iter() {
            assert_eq!(cell.is_revealed(), !cell.is_mine(), "cell {:?}", coords);
        }
    }

    #[test]
    fn first_click_still_skips_flagged_neighbours() {
        let mut board = grid((3, 3), &[(0, 0)]);
        board.toggle_flag((2, 2));

        reveal(&mut board, (1, 1), true);

        assert!(!board[(2, 2)].is_revealed());
        assert!(!board[(0, 0)].is_revealed());
        assert!(board[(2, 1)].is_revealed());
    }
}
