//! Turn-by-turn game loop and session state

use crate::board::{Board, BoardError, Direction};
use crate::rng::GameRng;

/// A player command, already confirmed where confirmation applies.
///
/// Quit/restart confirmation prompts live in the UI layer; the loop only
/// ever sees the confirmed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// A winning tile appeared for the first time this game
    Won,
    /// Board is full and no move can change it
    GameOver,
    /// Start a fresh game, keeping the best score
    Restart,
    /// End the session
    Quit,
}

/// Session state for one run of the program
///
/// Per-game fields reset on restart; `best_score` persists for the whole
/// process and is carried here rather than in module-level state so the
/// loop is testable without global fixtures.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The tile grid
    pub board: Board,

    /// Score of the current game
    pub score: u32,

    /// Highest score reached across all games this run
    pub best_score: u32,

    /// Turns that actually changed the board
    pub move_count: u32,

    /// Whether the win banner was already shown this game
    pub win_announced: bool,

    /// Random number generator for tile spawns
    pub rng: GameRng,
}

impl GameState {
    /// Create a new game on a zero-filled board with two spawned tiles
    pub fn new(size: usize, rng: GameRng) -> Result<Self, BoardError> {
        let mut state = Self {
            board: Board::new(size)?,
            score: 0,
            best_score: 0,
            move_count: 0,
            win_announced: false,
            rng,
        };
        state.board.spawn_random(&mut state.rng);
        state.board.spawn_random(&mut state.rng);
        Ok(state)
    }

    /// Start a fresh game, preserving only the best score
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.move_count = 0;
        self.win_announced = false;
        self.board.spawn_random(&mut self.rng);
        self.board.spawn_random(&mut self.rng);
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Execute a single game tick
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        match command {
            Command::Quit => GameLoopResult::Quit,
            Command::Restart => GameLoopResult::Restart,
            Command::Move(direction) => self.do_move(direction),
        }
    }

    /// Apply one directional move: slide, score, spawn, win/loss checks.
    ///
    /// A move that leaves the board unchanged is a silent no-op turn: no
    /// spawn, no move_count increment.
    fn do_move(&mut self, direction: Direction) -> GameLoopResult {
        let state = &mut self.state;
        let before = state.board.clone();

        state.score += state.board.slide(direction);
        if state.score > state.best_score {
            state.best_score = state.score;
        }

        if state.board != before {
            state.board.spawn_random(&mut state.rng);
            state.move_count += 1;
        }

        if !state.win_announced && state.board.has_winning_tile() {
            state.win_announced = true;
            return GameLoopResult::Won;
        }

        if state.board.is_game_over() {
            return GameLoopResult::GameOver;
        }

        GameLoopResult::Continue
    }
}
