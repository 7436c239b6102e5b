//! Game constants

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Board side length used when the player gives no usable size
pub const DEFAULT_SIZE: usize = 4;

/// Smallest board side length the engine accepts
pub const MIN_SIZE: usize = 2;

/// A spawned tile is a 4 with probability 1 in SPAWN_FOUR_ODDS, else a 2
pub const SPAWN_FOUR_ODDS: u32 = 10;
