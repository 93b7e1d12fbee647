use super::*;

/// Generation strategy where every cell is independently a mine with probability `mine_chance`.
///
/// There is no guarantee on the total mine count, and the start cell is not protected here: that is done lazily on
/// the first reveal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BernoulliGenerator {
    mine_chance: f64,
}

impl BernoulliGenerator {
    pub fn new(mine_chance: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mine_chance) {
            return Err(GameError::InvalidMineChance);
        }
        Ok(Self { mine_chance })
    }
}

impl GridGenerator for BernoulliGenerator {
    fn generate<R: Rng + ?Sized>(&self, size: Coord2, rng: &mut R) -> Result<Grid> {
        use ndarray::Array2;

        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mine_mask = Array2::from_shape_simple_fn(size.to_nd_index(), || {
            rng.random_bool(self.mine_chance)
        });
        let grid = Grid::from_mine_mask(&mine_mask);

        log::debug!(
            "Generated {}x{} grid with {} mines (chance {})",
            size.0,
            size.1,
            grid.mine_count(),
            self.mine_chance
        );
        Ok(grid)
    }
}
