//! Game-session state machine shared by the interactive and batch front-ends.

use anyhow::{anyhow, Result};

use crate::grid::{Grid, Player};

/// Where a game stands after the latest move.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// A running game: the grid, whose turn it is and the record so far.
pub struct Session {
    grid: Grid,
    current: Player,
    n_in_row: usize,
    /// Move record as 1-indexed column numbers, oldest first.
    pub game: String,
    pub state: GameState,
}

impl Session {
    /// Starts a game on a fresh `rows x columns` grid. Both dimensions must
    /// fit at least one `n_in_row` connection; player one moves first.
    pub fn new(rows: usize, columns: usize, n_in_row: usize) -> Result<Self> {
        if n_in_row < 2 {
            return Err(anyhow!(
                "connection length must be at least 2, got {}",
                n_in_row
            ));
        }
        if rows < n_in_row || columns < n_in_row {
            return Err(anyhow!(
                "a {}x{} board cannot fit {} in a row",
                rows,
                columns,
                n_in_row
            ));
        }
        Ok(Self {
            grid: Grid::new(rows, columns),
            current: Player::One,
            n_in_row,
            game: String::new(),
            state: GameState::Playing,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Plays the current player's piece into a 1-indexed column, then
    /// updates the state: a completed connection wins, a full grid draws,
    /// and otherwise the turn passes to the other player.
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("the game is already over"));
        }
        if column_one_indexed < 1 || column_one_indexed > self.grid.columns() {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.grid.columns()
            ));
        }

        let mv = self.grid.drop_piece(column_one_indexed - 1, self.current)?;
        self.game.push_str(&column_one_indexed.to_string());

        self.state = if self.grid.is_connected(mv, self.n_in_row) {
            GameState::Won(self.current)
        } else if self.grid.is_full() {
            GameState::Draw
        } else {
            self.current = self.current.opponent();
            GameState::Playing
        };
        Ok(self.state)
    }

    /// Clears the board for a rematch; player one starts again.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.grid.rows(), self.grid.columns());
        self.current = Player::One;
        self.game.clear();
        self.state = GameState::Playing;
    }
}
