//! Board grid widget
//!
//! Draws the tile grid with box-drawing borders. Each cell is six columns
//! wide plus its border, and tile values are right-aligned and colored by
//! their exponent.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    widgets::Widget,
};
use t48_core::Board;

use crate::theme::Theme;

/// Width of one cell including the border column to its left
const CELL_WIDTH: u16 = 7;

pub struct BoardWidget<'a> {
    board: &'a Board,
    theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self { board, theme }
    }
}

/// Horizontal rule, e.g. "├──────┼──────┤" for size 2
fn rule(size: usize, left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for col in 0..size {
        line.push_str("──────");
        line.push(if col + 1 == size { right } else { mid });
    }
    line
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.board.size();
        let border = Style::new().fg(self.theme.border);

        let mut y = area.y;
        if y >= area.bottom() {
            return;
        }
        buf.set_string(area.x, y, rule(size, '┌', '┬', '┐'), border);
        y += 1;

        for row in 0..size {
            if y >= area.bottom() {
                return;
            }
            for col in 0..size {
                let x = area.x + col as u16 * CELL_WIDTH;
                buf.set_string(x, y, "│", border);
                let value = self.board.get(row, col);
                if value != 0 {
                    let style = Style::new().fg(self.theme.tile_color(value)).bold();
                    buf.set_string(x + 1, y, format!(" {value:>4}"), style);
                }
            }
            buf.set_string(area.x + size as u16 * CELL_WIDTH, y, "│", border);
            y += 1;

            if y >= area.bottom() {
                return;
            }
            let sep = if row + 1 == size {
                rule(size, '└', '┴', '┘')
            } else {
                rule(size, '├', '┼', '┤')
            };
            buf.set_string(area.x, y, sep, border);
            y += 1;
        }
    }
}
