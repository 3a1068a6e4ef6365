//! 3x3 sticker grids.
//!
//! Each physical face owns one `StickerGrid`. Grids are plain values
//! (`Copy`), so no two faces can ever alias the same storage.
//!
//! Indices are `(row, col)`, row-major, both in `0..3`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;
use crate::moves::RotationDirection;

/// Side length of a face.
pub const GRID_SIZE: usize = 3;

/// A single row or column of three stickers.
pub type Strip = [Color; GRID_SIZE];

/// A 3x3 grid of stickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickerGrid {
    cells: [[Color; GRID_SIZE]; GRID_SIZE],
}

impl StickerGrid {
    /// Create a grid with every sticker set to `color`.
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            cells: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Color; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// All rows, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[Color; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Copy of row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Strip {
        self.cells[row]
    }

    /// Copy of column `col`, top to bottom.
    #[must_use]
    pub fn col(&self, col: usize) -> Strip {
        [self.cells[0][col], self.cells[1][col], self.cells[2][col]]
    }

    /// Overwrite row `row`, left to right.
    pub fn set_row(&mut self, row: usize, strip: Strip) {
        self.cells[row] = strip;
    }

    /// Overwrite column `col`, top to bottom.
    pub fn set_col(&mut self, col: usize, strip: Strip) {
        for (r, color) in strip.into_iter().enumerate() {
            self.cells[r][col] = color;
        }
    }

    /// Return this grid turned a quarter in `direction`.
    ///
    /// Clockwise: `out[i][j] = in[2 - j][i]`.
    /// Counter-clockwise: `out[i][j] = in[j][2 - i]`.
    ///
    /// The result is built into a fresh grid; `self` is untouched.
    #[must_use]
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        let last = GRID_SIZE - 1;
        let mut out = *self;
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                out.cells[i][j] = match direction {
                    RotationDirection::Clockwise => self.cells[last - j][i],
                    RotationDirection::CounterClockwise => self.cells[j][last - i],
                };
            }
        }
        out
    }

    /// True if all nine stickers equal the top-left sticker.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let first = self.cells[0][0];
        self.cells.iter().flatten().all(|&c| c == first)
    }

    /// Iterate over all nine stickers, row-major.
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flatten().copied()
    }
}

impl Index<(usize, usize)> for StickerGrid {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for StickerGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[row][col]
    }
}

/// One line per row, stickers separated by single spaces.
impl std::fmt::Display for StickerGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn numbered() -> StickerGrid {
        StickerGrid::from_rows([
            [Red, Green, Blue],
            [Yellow, White, Orange],
            [Green, Blue, Red],
        ])
    }

    #[test]
    fn test_filled_is_uniform() {
        assert!(StickerGrid::filled(Blue).is_uniform());
        assert!(!numbered().is_uniform());
    }

    #[test]
    fn test_row_and_col() {
        let grid = numbered();
        assert_eq!(grid.row(1), [Yellow, White, Orange]);
        assert_eq!(grid.col(2), [Blue, Orange, Red]);
    }

    #[test]
    fn test_set_row_and_col() {
        let mut grid = StickerGrid::filled(White);
        grid.set_row(0, [Red, Green, Blue]);
        grid.set_col(2, [Yellow, Yellow, Orange]);

        assert_eq!(grid.row(0), [Red, Green, Yellow]);
        assert_eq!(grid.col(2), [Yellow, Yellow, Orange]);
        assert_eq!(grid[(1, 0)], White);
    }

    #[test]
    fn test_rotated_clockwise() {
        let grid = numbered();
        let turned = grid.rotated(RotationDirection::Clockwise);

        assert_eq!(turned.row(0), [grid[(2, 0)], grid[(1, 0)], grid[(0, 0)]]);
        assert_eq!(turned.row(1), [grid[(2, 1)], grid[(1, 1)], grid[(0, 1)]]);
        assert_eq!(turned.row(2), [grid[(2, 2)], grid[(1, 2)], grid[(0, 2)]]);
    }

    #[test]
    fn test_rotated_counter_clockwise() {
        let grid = numbered();
        let turned = grid.rotated(RotationDirection::CounterClockwise);

        assert_eq!(turned.row(0), [grid[(0, 2)], grid[(1, 2)], grid[(2, 2)]]);
        assert_eq!(turned.row(1), [grid[(0, 1)], grid[(1, 1)], grid[(2, 1)]]);
        assert_eq!(turned.row(2), [grid[(0, 0)], grid[(1, 0)], grid[(2, 0)]]);
    }

    #[test]
    fn test_rotated_four_times_is_identity() {
        let grid = numbered();
        let mut turned = grid;
        for _ in 0..4 {
            turned = turned.rotated(RotationDirection::Clockwise);
        }
        assert_eq!(turned, grid);
    }

    #[test]
    fn test_display() {
        let grid = StickerGrid::filled(Green);
        assert_eq!(grid.to_string(), "green green green\n".repeat(3));
    }
}
