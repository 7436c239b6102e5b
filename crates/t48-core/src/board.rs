//! Tile grid and the slide-and-merge engine
//!
//! The board is a flat row-major grid of cell values; 0 is empty, nonzero
//! cells are powers of two. All four move directions share one compaction
//! pass parameterized by an outer axis (the line held fixed), an inner axis
//! (the line being compacted) and a scan direction.

use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::consts::{MIN_SIZE, SPAWN_FOUR_ODDS, WIN_TILE};
use crate::rng::GameRng;

/// Errors from board construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size must be at least {MIN_SIZE}, got {0}")]
    SizeTooSmall(usize),
    #[error("expected {expected} cells for a size-{size} board, got {got}")]
    CellCountMismatch {
        size: usize,
        expected: usize,
        got: usize,
    },
}

/// A move direction
///
/// Up/Down operate along columns, Left/Right along rows. Up/Left compact
/// tiles toward index 0, Down/Right toward index size-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// True if the compacted line is a column (outer axis = column index)
    pub fn along_columns(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True if the inner axis is scanned from index 0 toward size-1
    pub fn scans_ascending(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

/// Convert a conceptual (outer, inner) pair to a flat board index.
///
/// For Up/Down the inner axis is the row, so the index is
/// `inner * size + outer`; for Left/Right it is `outer * size + inner`.
pub fn map_index(direction: Direction, outer: usize, inner: usize, size: usize) -> usize {
    if direction.along_columns() {
        inner * size + outer
    } else {
        outer * size + inner
    }
}

/// The tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create a zero-filled board with the given side length
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_SIZE {
            return Err(BoardError::SizeTooSmall(size));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Create a board from explicit row-major cell values
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Result<Self, BoardError> {
        if size < MIN_SIZE {
            return Err(BoardError::SizeTooSmall(size));
        }
        if cells.len() != size * size {
            return Err(BoardError::CellCountMismatch {
                size,
                expected: size * size,
                got: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell values
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Zero-fill every cell (restart)
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Flat indices of all empty cells
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// True if any cell holds the winning tile
    pub fn has_winning_tile(&self) -> bool {
        self.cells.contains(&WIN_TILE)
    }

    /// Place a 2 (9/10) or a 4 (1/10) on a uniformly chosen empty cell.
    ///
    /// Callers guarantee at least one empty cell; a full board is a no-op.
    pub fn spawn_random(&mut self, rng: &mut GameRng) {
        let empties = self.empty_cells();
        let Some(&pos) = rng.choose(&empties) else {
            return;
        };
        self.cells[pos] = if rng.one_in(SPAWN_FOUR_ODDS) { 4 } else { 2 };
    }

    /// Apply one directional move to every line of the board.
    ///
    /// Tiles slide toward the target edge; the first pair of equal values
    /// encountered per tile merges into a doubled tile, and each tile merges
    /// at most once per move. Returns the total score gained (the sum of all
    /// newly merged tile values), which is 0 for a pure slide.
    pub fn slide(&mut self, direction: Direction) -> u32 {
        let size = self.size as isize;
        let (start, end, step): (isize, isize, isize) = if direction.scans_ascending() {
            (0, size - 1, 1)
        } else {
            (size - 1, 0, -1)
        };

        let mut score = 0;
        for outer in 0..self.size {
            // p is the write cursor; j scans the rest of the line
            let mut p = start;
            let mut j = start + step;
            while if step > 0 { j <= end } else { j >= end } {
                let ij = map_index(direction, outer, j as usize, self.size);
                if self.cells[ij] == 0 {
                    j += step;
                    continue;
                }
                let ip = map_index(direction, outer, p as usize, self.size);
                if self.cells[ip] != 0 && self.cells[ip] != self.cells[ij] {
                    // Blocked slide: advance the cursor, pull the tile up to it
                    p += step;
                    let dest = map_index(direction, outer, p as usize, self.size);
                    self.cells[dest] = self.cells[ij];
                    if p != j {
                        self.cells[ij] = 0;
                    }
                } else {
                    if self.cells[ip] == 0 {
                        // Pure slide into the cursor cell
                        self.cells[ip] = self.cells[ij];
                    } else {
                        // Merge: the cursor tile doubles and closes
                        self.cells[ip] *= 2;
                        score += self.cells[ip];
                        p += step;
                    }
                    self.cells[ij] = 0;
                }
                j += step;
            }
        }
        score
    }

    /// Game over holds iff the board is full and no direction would change it.
    ///
    /// Each direction is trial-applied to a scratch copy.
    pub fn is_game_over(&self) -> bool {
        if self.cells.iter().any(|&v| v == 0) {
            return false;
        }
        for direction in Direction::iter() {
            let mut probe = self.clone();
            if probe.slide(direction) > 0 || probe != *self {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(cells: Vec<u32>) -> Board {
        let size = (cells.len() as f64).sqrt() as usize;
        Board::from_cells(size, cells).unwrap()
    }

    #[test]
    fn test_new_rejects_degenerate_size() {
        assert_eq!(Board::new(0), Err(BoardError::SizeTooSmall(0)));
        assert_eq!(Board::new(1), Err(BoardError::SizeTooSmall(1)));
        assert!(Board::new(2).is_ok());
    }

    #[test]
    fn test_from_cells_rejects_length_mismatch() {
        assert_eq!(
            Board::from_cells(3, vec![0; 8]),
            Err(BoardError::CellCountMismatch {
                size: 3,
                expected: 9,
                got: 8,
            })
        );
    }

    #[test]
    fn test_map_index_rows_and_columns() {
        // Left/Right: outer = row, inner = col
        assert_eq!(map_index(Direction::Left, 1, 2, 4), 6);
        assert_eq!(map_index(Direction::Right, 1, 2, 4), 6);
        // Up/Down: outer = col, inner = row
        assert_eq!(map_index(Direction::Up, 1, 2, 4), 9);
        assert_eq!(map_index(Direction::Down, 1, 2, 4), 9);
    }

    #[test]
    fn test_spec_example_size_two() {
        let mut board = Board::from_cells(2, vec![2, 2, 0, 0]).unwrap();
        let score = board.slide(Direction::Left);
        assert_eq!(board.cells(), &[4, 0, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_at_most_one_merge_per_tile() {
        let mut board = row_board(vec![
            2, 2, 2, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let score = board.slide(Direction::Left);
        assert_eq!(&board.cells()[0..4], &[4, 2, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_merge_chain_resolves_pairwise() {
        let mut board = row_board(vec![
            2, 2, 2, 2, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let score = board.slide(Direction::Left);
        assert_eq!(&board.cells()[0..4], &[4, 4, 0, 0]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_slide_right_merges_at_far_edge() {
        let mut board = row_board(vec![
            2, 2, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let score = board.slide(Direction::Right);
        assert_eq!(&board.cells()[0..4], &[0, 0, 0, 4]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_slide_up_operates_on_columns() {
        let mut board = row_board(vec![
            2, 0, 0, 0, //
            2, 0, 0, 0, //
            4, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let score = board.slide(Direction::Up);
        assert_eq!(board.get(0, 0), 4);
        assert_eq!(board.get(1, 0), 4);
        assert_eq!(board.get(2, 0), 0);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_slide_down_compacts_toward_bottom() {
        let mut board = row_board(vec![
            4, 0, 0, 0, //
            2, 0, 0, 0, //
            2, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let score = board.slide(Direction::Down);
        assert_eq!(board.get(3, 0), 4);
        assert_eq!(board.get(2, 0), 4);
        assert_eq!(board.get(1, 0), 0);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_blocked_slide_is_noop() {
        let mut board = row_board(vec![
            2, 4, 8, 16, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let before = board.clone();
        let score = board.slide(Direction::Left);
        assert_eq!(board, before);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_blocked_slide_idempotence() {
        let mut board = row_board(vec![
            2, 2, 4, 0, //
            0, 8, 0, 8, //
            0, 0, 2, 0, //
            4, 0, 0, 4,
        ]);
        board.slide(Direction::Left);
        let after_first = board.clone();
        let score = board.slide(Direction::Left);
        assert_eq!(board, after_first);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_pure_slide_scores_zero() {
        let mut board = row_board(vec![
            0, 0, 0, 2, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let score = board.slide(Direction::Left);
        assert_eq!(&board.cells()[0..4], &[2, 0, 0, 0]);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_lines_compact_independently() {
        let mut board = row_board(vec![
            2, 2, 0, 0, //
            4, 0, 4, 0, //
            8, 0, 0, 8, //
            2, 4, 2, 4,
        ]);
        let score = board.slide(Direction::Left);
        assert_eq!(&board.cells()[0..4], &[4, 0, 0, 0]);
        assert_eq!(&board.cells()[4..8], &[8, 0, 0, 0]);
        assert_eq!(&board.cells()[8..12], &[16, 0, 0, 0]);
        assert_eq!(&board.cells()[12..16], &[2, 4, 2, 4]);
        assert_eq!(score, 28);
    }

    #[test]
    fn test_game_over_checkerboard() {
        let board = row_board(vec![
            2, 4, 2, 4, //
            4, 2, 4, 2, //
            2, 4, 2, 4, //
            4, 2, 4, 2,
        ]);
        assert!(board.is_game_over());
    }

    #[test]
    fn test_not_game_over_with_empty_cell() {
        let mut cells = vec![
            2, 4, 2, 4, //
            4, 2, 4, 2, //
            2, 4, 2, 4, //
            4, 2, 4, 2,
        ];
        cells[5] = 0;
        let board = Board::from_cells(4, cells).unwrap();
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_not_game_over_with_mergeable_pair() {
        let board = row_board(vec![
            2, 2, 4, 8, //
            4, 8, 16, 32, //
            8, 16, 32, 64, //
            16, 32, 64, 128,
        ]);
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_spawn_adds_exactly_one_small_tile() {
        let mut rng = GameRng::new(42);
        let mut board = Board::new(4).unwrap();
        board.spawn_random(&mut rng);
        let nonzero: Vec<u32> = board.cells().iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(nonzero.len(), 1);
        assert!(nonzero[0] == 2 || nonzero[0] == 4);
    }

    #[test]
    fn test_spawn_on_full_board_is_noop() {
        let mut rng = GameRng::new(42);
        let mut board = row_board(vec![
            2, 4, 2, 4, //
            4, 2, 4, 2, //
            2, 4, 2, 4, //
            4, 2, 4, 2,
        ]);
        let before = board.clone();
        board.spawn_random(&mut rng);
        assert_eq!(board, before);
    }

    #[test]
    fn test_spawn_distribution_roughly_nine_to_one() {
        let mut rng = GameRng::new(1234);
        let mut fours = 0;
        for _ in 0..2000 {
            let mut board = Board::new(2).unwrap();
            board.spawn_random(&mut rng);
            if board.cells().contains(&4) {
                fours += 1;
            }
        }
        // 10% of 2000 is 200; allow a wide band
        assert!((100..320).contains(&fours), "got {} fours", fours);
    }

    #[test]
    fn test_win_tile_detection() {
        let mut board = Board::new(4).unwrap();
        assert!(!board.has_winning_tile());
        let cells = {
            let mut c = vec![0; 16];
            c[7] = WIN_TILE;
            c
        };
        board = Board::from_cells(4, cells).unwrap();
        assert!(board.has_winning_tile());
    }

    #[test]
    fn test_clear_zero_fills() {
        let mut board = row_board(vec![2; 16]);
        board.clear();
        assert!(board.cells().iter().all(|&v| v == 0));
    }
}
