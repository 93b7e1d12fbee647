use rand::Rng;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces a populated [`Grid`] with adjacency already computed.
pub trait GridGenerator {
    fn generate<R: Rng + ?Sized>(&self, size: Coord2, rng: &mut R) -> Result<Grid>;
}
