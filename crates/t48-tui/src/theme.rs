//! Terminal color theme
//!
//! Adaptive palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with the
//! T48_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Number of entries in the tile palette
const TILE_PALETTE_LEN: usize = 11;

/// Color theme for the terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (key help footer)
    pub text_dim: Color,
    /// Grid and header borders
    pub border: Color,
    /// Win banner
    pub good: Color,
    /// Game-over banner
    pub bad: Color,
    /// Tile colors, indexed by tile exponent (see [`Theme::tile_color`])
    pub tiles: [Color; TILE_PALETTE_LEN],
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            good: Color::Green,
            bad: Color::Red,
            tiles: [
                Color::Red,
                Color::Green,
                Color::Yellow,
                Color::Blue,
                Color::Magenta,
                Color::Cyan,
                Color::Gray,
                Color::DarkGray,
                Color::LightRed,
                Color::LightGreen,
                Color::LightYellow,
            ],
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            good: Color::Green,
            bad: Color::Red,
            // Low-contrast entries swapped for their saturated cousins
            tiles: [
                Color::Red,
                Color::Green,
                Color::Yellow,
                Color::Blue,
                Color::Magenta,
                Color::Blue,
                Color::DarkGray,
                Color::DarkGray,
                Color::Red,
                Color::Green,
                Color::Yellow,
            ],
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and the T48_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Color for a nonzero tile value.
    ///
    /// Keeps the original renderer's index formula for visual fidelity:
    /// with `y = floor(log2(value))`, the palette index is `y - 1` below
    /// 4096 and `y % 12 - 1` from there on, wrapped into the palette. As a
    /// result 4096 shares 2048's color before the cycle restarts at 8192.
    pub fn tile_color(&self, value: u32) -> Color {
        let y = value.ilog2() as i32;
        let index = if y < 12 { y - 1 } else { y % 12 - 1 };
        self.tiles[index.rem_euclid(TILE_PALETTE_LEN as i32) as usize]
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("T48_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        // Light backgrounds typically have bg index >= 7 (excluding 8 which is bright black)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
