use alloc::vec::Vec;

use super::*;

/// Places mines at exact coordinates, ignoring the RNG. Used for scripted boards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedLayout {
    mines: Vec<Coord2>,
}

impl FixedLayout {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl GridGenerator for FixedLayout {
    fn generate<R: Rng + ?Sized>(&self, size: Coord2, _rng: &mut R) -> Result<Grid> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Grid::from_mine_coords(size, &self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn places_exact_mines() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = FixedLayout::new([(4, 4)])
            .generate((5, 5), &mut rng)
            .unwrap();

        assert_eq!(grid.mine_count(), 1);
        assert!(grid[(4, 4)].is_mine());
        assert_eq!(grid[(3, 3)].adjacent_mines(), 1);
    }

    #[test]
    fn rejects_mine_outside_board() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            FixedLayout::new([(5, 0)]).generate((5, 5), &mut rng),
            Err(GameError::InvalidCoords)
        );
    }
}
