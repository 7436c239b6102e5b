//! Board grid and scoreboard widgets

mod board;
mod scoreboard;

pub use board::BoardWidget;
pub use scoreboard::ScoreboardWidget;
