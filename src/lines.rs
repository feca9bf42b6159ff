//! Heuristic scoring lines.
//!
//! The evaluator looks along four directions from every occupied cell; this
//! module builds those lines, clipped at the board edges and in a fixed
//! order. The column line runs from the pivot cell downwards only: pieces
//! above the pivot are picked up when the scan pivots on them instead.

use crate::grid::{Cell, Grid};

/// A scan direction through a pivot cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Row,
    Column,
    DiagonalDown,
    DiagonalUp,
}

/// Every direction, in the order the evaluator scans them.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Row,
    Direction::Column,
    Direction::DiagonalDown,
    Direction::DiagonalUp,
];

/// The ordered cells of the scoring line through `(row, column)`.
///
/// Rows read left to right, columns from the pivot down, and both diagonals
/// in order of increasing column across the full board.
pub fn line_through(grid: &Grid, row: usize, column: usize, direction: Direction) -> Vec<Cell> {
    match direction {
        Direction::Row => (0..grid.columns()).map(|c| grid.cell(row, c)).collect(),
        Direction::Column => (row..grid.rows()).map(|r| grid.cell(r, column)).collect(),
        Direction::DiagonalDown => {
            // back up towards the top-left corner, then collect down-right
            let offset = row.min(column);
            let (mut r, mut c) = (row - offset, column - offset);
            let mut line = Vec::new();
            while r < grid.rows() && c < grid.columns() {
                line.push(grid.cell(r, c));
                r += 1;
                c += 1;
            }
            line
        }
        Direction::DiagonalUp => {
            // back up towards the bottom-left corner, then collect up-right
            let offset = (grid.rows() - 1 - row).min(column);
            let (mut r, mut c) = (row + offset, column - offset);
            let mut line = Vec::new();
            loop {
                line.push(grid.cell(r, c));
                if r == 0 || c + 1 == grid.columns() {
                    break;
                }
                r -= 1;
                c += 1;
            }
            line
        }
    }
}
