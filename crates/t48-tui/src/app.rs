//! Application state machine
//!
//! Wraps the core game loop with the UI modes: normal play, the quit and
//! restart confirmations, the win prompt and the end-of-game prompt.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
};
use t48_core::{Command, GameLoop, GameLoopResult, GameState};

use crate::input::key_to_direction;
use crate::theme::Theme;
use crate::widgets::{BoardWidget, ScoreboardWidget};

/// What the UI is currently asking of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal play, movement keys active
    Playing,
    /// "Are you sure you want to quit?" after pressing q
    ConfirmQuit,
    /// "Do you want to restart?" after pressing r
    ConfirmRestart,
    /// The 2048 tile was just built, offer to keep playing
    WinPrompt,
    /// The game ended, offer a fresh board
    EndPrompt { reason: EndReason },
}

/// Why the end prompt is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// No move can change the board
    GameOver,
    /// The player won and declined to continue
    WinDeclined,
}

/// Terminal decision of a session, consumed by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Quit,
    Restart,
}

/// Main application state
pub struct App {
    game_loop: GameLoop,
    mode: UiMode,
    theme: Theme,
    outcome: Option<SessionOutcome>,
}

impl App {
    pub fn new(state: GameState, theme: Theme) -> Self {
        Self {
            game_loop: GameLoop::new(state),
            mode: UiMode::Playing,
            theme,
            outcome: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        self.game_loop.state_mut()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Take the pending session outcome, if any. The event loop calls this
    /// once per iteration and either breaks (quit) or rebuilds the board
    /// (restart).
    pub fn take_outcome(&mut self) -> Option<SessionOutcome> {
        self.outcome.take()
    }

    /// Begin a fresh game on the same board size. Best score survives.
    pub fn restart(&mut self) {
        self.state_mut().restart();
        self.mode = UiMode::Playing;
        self.outcome = None;
    }

    /// Translate a terminal event into a game command, updating the UI mode
    /// along the way. Returns None when the event was consumed by the UI
    /// (or ignored).
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match self.mode {
            UiMode::Playing => match key.code {
                KeyCode::Char('q') => {
                    self.mode = UiMode::ConfirmQuit;
                    None
                }
                KeyCode::Char('r') => {
                    self.mode = UiMode::ConfirmRestart;
                    None
                }
                _ => key_to_direction(key).map(Command::Move),
            },
            UiMode::ConfirmQuit => match confirm(key) {
                Some(true) => Some(Command::Quit),
                Some(false) => {
                    self.mode = UiMode::Playing;
                    None
                }
                None => None,
            },
            UiMode::ConfirmRestart => match confirm(key) {
                Some(true) => Some(Command::Restart),
                Some(false) => {
                    self.mode = UiMode::Playing;
                    None
                }
                None => None,
            },
            UiMode::WinPrompt => match confirm(key) {
                Some(true) => {
                    self.resume_after_win();
                    None
                }
                Some(false) => {
                    self.mode = UiMode::EndPrompt {
                        reason: EndReason::WinDeclined,
                    };
                    None
                }
                None => None,
            },
            UiMode::EndPrompt { .. } => match confirm(key) {
                Some(true) => Some(Command::Restart),
                Some(false) => Some(Command::Quit),
                None => None,
            },
        }
    }

    /// Run a command through the game loop and update the UI mode from the
    /// result.
    pub fn execute(&mut self, command: Command) {
        match self.game_loop.tick(command) {
            GameLoopResult::Continue => {}
            GameLoopResult::Won => {
                self.mode = UiMode::WinPrompt;
            }
            GameLoopResult::GameOver => {
                self.mode = UiMode::EndPrompt {
                    reason: EndReason::GameOver,
                };
            }
            GameLoopResult::Restart => {
                self.outcome = Some(SessionOutcome::Restart);
            }
            GameLoopResult::Quit => {
                self.outcome = Some(SessionOutcome::Quit);
            }
        }
    }

    /// The winning merge can also fill the board. Only hand control back to
    /// the player when a move is still possible.
    fn resume_after_win(&mut self) {
        if self.state().board.is_game_over() {
            self.mode = UiMode::EndPrompt {
                reason: EndReason::GameOver,
            };
        } else {
            self.mode = UiMode::Playing;
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let size = self.state().board.size() as u16;
        let layout = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(2 * size + 1),
            Constraint::Length(1),
            Constraint::Min(2),
        ])
        .split(frame.area());

        frame.render_widget(ScoreboardWidget::new(self.state(), &self.theme), layout[0]);
        frame.render_widget(
            BoardWidget::new(&self.state().board, &self.theme),
            layout[1],
        );

        let lines = self.footer_lines();
        frame.render_widget(ratatui::text::Text::from(lines), layout[3]);
    }

    fn footer_lines(&self) -> Vec<Line<'static>> {
        match self.mode {
            UiMode::Playing => vec![Line::styled(
                "w/a/s/d or arrows to move, q to quit, r to restart",
                Style::new().fg(self.theme.text_dim),
            )],
            UiMode::ConfirmQuit => vec![self.prompt_line("Are you sure you want to quit? [Y/n]")],
            UiMode::ConfirmRestart => vec![self.prompt_line("Do you want to restart? [Y/n]")],
            UiMode::WinPrompt => vec![
                Line::styled(
                    "You win!! Congratulations!",
                    Style::new().fg(self.theme.good).bold(),
                ),
                self.prompt_line("Continue playing the current game? [Y/n]"),
            ],
            UiMode::EndPrompt {
                reason: EndReason::GameOver,
            } => vec![
                Line::styled(
                    "Game over! Have another try?",
                    Style::new().fg(self.theme.bad).bold(),
                ),
                self.prompt_line("Do you want to restart? [Y/n]"),
            ],
            UiMode::EndPrompt {
                reason: EndReason::WinDeclined,
            } => vec![self.prompt_line("Do you want to restart? [Y/n]")],
        }
    }

    fn prompt_line(&self, text: &str) -> Line<'static> {
        Line::styled(text.to_string(), Style::new().fg(self.theme.text).bold())
    }
}

/// y/Y confirms, n/N declines, anything else keeps the prompt up
fn confirm(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(false),
        _ => None,
    }
}
