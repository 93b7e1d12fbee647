use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be at least 1x1")]
    InvalidDimensions,
    #[error("Mine chance must be within [0, 1]")]
    InvalidMineChance,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No position on the board is far enough from the player to spawn the hunter")]
    NoHunterSpawn,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
