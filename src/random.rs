//! Uniformly random move selection, the weakest baseline opponent.

use rand::seq::SliceRandom;

use crate::grid::{Grid, Move};

/// Picks a uniformly random legal column, or `None` when the board is full.
pub fn legal_move(grid: &Grid) -> Option<Move> {
    let column = *grid.legal_columns().choose(&mut rand::thread_rng())?;
    let row = grid.landing_row(column)?;
    Some(Move { column, row })
}
