//! t48-core: Core game logic for the 2048 puzzle
//!
//! This crate contains the board engine and game loop with no I/O
//! dependencies. It is designed to be pure and testable.

pub mod board;

mod consts;
mod gameloop;
mod rng;

pub use board::{Board, BoardError, Direction, map_index};
pub use consts::*;
pub use gameloop::{Command, GameLoop, GameLoopResult, GameState};
pub use rng::GameRng;
