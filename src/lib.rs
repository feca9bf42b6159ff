//! A minimax agent for playing generalised N-in-a-row connection games
//!
//! The agent searches the full game tree to a fixed depth and scores the
//! leaves with a static positional evaluator, trading perfect play for a
//! bounded, predictable amount of work per move.
//!
//! # Basic Usage
//!
//! ```
//! use connectn_ai::grid::{Grid, Player};
//! use connectn_ai::search::Searcher;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut grid = Grid::new(7, 6);
//! for column in 1..4 {
//!     grid.drop_piece(column, Player::One)?;
//! }
//!
//! // three in a row, open at both ends: the search finds a winning drop
//! let mut searcher = Searcher::new(4, 4)?;
//! let best_move = searcher.choose_move(&grid, Player::One)?;
//!
//! assert!(best_move.column == 0 || best_move.column == 4);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod grid;

pub mod lines;

pub mod eval;

pub mod search;

pub mod random;

pub mod session;


/// The number of rows on a default game board
pub const DEFAULT_ROWS: usize = 7;

/// The number of columns on a default game board
pub const DEFAULT_COLUMNS: usize = 6;

/// The connection length that wins a default game
pub const DEFAULT_N_IN_ROW: usize = 4;

/// How many plies the search looks ahead by default
pub const DEFAULT_SEARCH_DEPTH: i32 = 4;

// a default board must fit a connection along both axes
const_assert!(DEFAULT_N_IN_ROW <= DEFAULT_ROWS);
const_assert!(DEFAULT_N_IN_ROW <= DEFAULT_COLUMNS);
const_assert!(DEFAULT_SEARCH_DEPTH > 0);
