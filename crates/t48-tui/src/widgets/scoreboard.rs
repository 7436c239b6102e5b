//! Scoreboard widget
//!
//! A small boxed header showing score, best score and move count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    widgets::Widget,
};
use t48_core::GameState;

use crate::theme::Theme;

pub struct ScoreboardWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> ScoreboardWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ScoreboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = Style::new().fg(self.theme.border);
        let text = Style::new().fg(self.theme.text).bold();

        let lines = [
            ("┌───────────────────────────┐".to_string(), border),
            (format!("│ SCORE: {:>18} │", self.state.score), text),
            (
                format!("│ BEST SCORE: {:>13} │", self.state.best_score),
                text,
            ),
            (format!("│ MOVES: {:>18} │", self.state.move_count), text),
            ("└───────────────────────────┘".to_string(), border),
        ];

        for (i, (line, style)) in lines.into_iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_string(area.x, y, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use t48_core::{GameRng, GameState};

    #[test]
    fn test_renders_score_lines() {
        let mut state = GameState::new(4, GameRng::new(3)).unwrap();
        state.score = 42;
        state.best_score = 100;
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        ScoreboardWidget::new(&state, &theme).render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..29)
                .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                .collect()
        };
        assert_eq!(row(1), format!("│ SCORE: {:>18} │", 42));
        assert_eq!(row(2), format!("│ BEST SCORE: {:>13} │", 100));
    }

    #[test]
    fn test_stops_at_area_bottom() {
        let state = GameState::new(4, GameRng::new(3)).unwrap();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);

        ScoreboardWidget::new(&state, &theme).render(area, &mut buf);
    }
}
