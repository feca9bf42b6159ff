use anyhow::{anyhow, Result};

/// One of the two sides in a game.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based side index, for name and colour lookup tables.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Piece(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(player) => Some(*player),
        }
    }
}

/// A piece landing spot: the column it was dropped into and the row it
/// settled in.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub column: usize,
    pub row: usize,
}

/// A rectangular playing grid with gravity along the columns.
///
/// Row 0 is the top of the board and row `rows - 1` the bottom, so a dropped
/// piece settles in the highest-numbered empty row of its column.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: Vec<Cell>, // row-major, top row first
    rows: usize,
    columns: usize,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; rows * columns],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    /// The row a piece dropped into `column` would settle in: the first
    /// empty cell scanning up from the bottom. Always recomputed from the
    /// live cells. `None` when the column is full or does not exist.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cell(row, column).is_empty())
    }

    /// Writes `player`'s piece directly into a cell. The search pairs every
    /// `place` with one [`remove`] on the same cell before its frame
    /// returns; real game turns go through [`drop_piece`] instead.
    ///
    /// [`remove`]: #method.remove
    /// [`drop_piece`]: #method.drop_piece
    pub fn place(&mut self, row: usize, column: usize, player: Player) {
        self.cells[row * self.columns + column] = Cell::Piece(player);
    }

    /// Clears a cell back to empty, undoing a [`place`].
    ///
    /// [`place`]: #method.place
    pub fn remove(&mut self, row: usize, column: usize) {
        self.cells[row * self.columns + column] = Cell::Empty;
    }

    /// The columns that still accept a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.landing_row(column).is_some())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Plays a validated game turn: finds the landing row for `column`,
    /// writes the piece and reports where it settled.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<Move> {
        if column >= self.columns {
            return Err(anyhow!(
                "Invalid move, no column {} on a {}-column board",
                column + 1,
                self.columns
            ));
        }
        let row = self
            .landing_row(column)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column + 1))?;
        self.place(row, column, player);
        Ok(Move { column, row })
    }

    /// True when the owner of the piece at `mv` has `run_length` connected
    /// pieces through that cell along a row, column or diagonal. An empty
    /// or out-of-range cell never connects.
    pub fn is_connected(&self, mv: Move, run_length: usize) -> bool {
        if mv.row >= self.rows || mv.column >= self.columns {
            return false;
        }
        let player = match self.cell(mv.row, mv.column).player() {
            Some(player) => player,
            None => return false,
        };

        for &(delta_row, delta_column) in [(0i32, 1i32), (1, 0), (1, 1), (1, -1)].iter() {
            // the played cell itself, plus the run continuing both ways
            let mut run = 1;
            for &sign in [-1i32, 1].iter() {
                let mut row = mv.row as i32 + sign * delta_row;
                let mut column = mv.column as i32 + sign * delta_column;
                loop {
                    if row < 0
                        || row >= self.rows as i32
                        || column < 0
                        || column >= self.columns as i32
                        || self.cell(row as usize, column as usize).player() != Some(player)
                    {
                        break;
                    }
                    run += 1;
                    row += sign * delta_row;
                    column += sign * delta_column;
                }
            }
            if run >= run_length {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn pieces_stack_from_the_bottom() -> Result<()> {
        let mut grid = Grid::new(7, 6);
        assert_eq!(grid.landing_row(2), Some(6));

        let first = grid.drop_piece(2, Player::One)?;
        assert_eq!(first, Move { column: 2, row: 6 });
        assert_eq!(grid.landing_row(2), Some(5));

        let second = grid.drop_piece(2, Player::Two)?;
        assert_eq!(second, Move { column: 2, row: 5 });
        assert_eq!(grid.cell(6, 2), Cell::Piece(Player::One));
        assert_eq!(grid.cell(5, 2), Cell::Piece(Player::Two));
        Ok(())
    }

    #[test]
    fn full_column_rejects_further_drops() -> Result<()> {
        let mut grid = Grid::new(7, 6);
        for _ in 0..7 {
            grid.drop_piece(3, Player::One)?;
        }
        assert_eq!(grid.landing_row(3), None);
        assert!(grid.drop_piece(3, Player::Two).is_err());
        Ok(())
    }

    #[test]
    fn nonexistent_column_rejected() {
        let mut grid = Grid::new(7, 6);
        assert_eq!(grid.landing_row(6), None);
        assert!(grid.drop_piece(6, Player::One).is_err());
    }

    #[test]
    fn legal_columns_ascend_and_skip_full_ones() -> Result<()> {
        let mut grid = Grid::new(7, 6);
        for _ in 0..7 {
            grid.drop_piece(1, Player::One)?;
            grid.drop_piece(4, Player::Two)?;
        }
        assert_eq!(grid.legal_columns(), vec![0, 2, 3, 5]);
        Ok(())
    }

    #[test]
    fn remove_undoes_place() {
        let mut grid = Grid::new(7, 6);
        let fresh = grid.clone();

        grid.place(6, 0, Player::One);
        assert_ne!(grid, fresh);
        grid.remove(6, 0);
        assert_eq!(grid, fresh);
    }

    #[test]
    fn board_fills_up() -> Result<()> {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.is_full());
        for column in 0..2 {
            grid.drop_piece(column, Player::One)?;
            grid.drop_piece(column, Player::Two)?;
        }
        assert!(grid.is_full());
        assert!(grid.legal_columns().is_empty());
        Ok(())
    }

    #[test]
    fn connection_along_a_row() -> Result<()> {
        let mut grid = Grid::new(7, 6);
        let mut last = Move { column: 0, row: 0 };
        for column in 1..5 {
            last = grid.drop_piece(column, Player::One)?;
        }
        assert!(grid.is_connected(last, 4));
        // a run of four is not a run of five
        assert!(!grid.is_connected(last, 5));
        Ok(())
    }

    #[test]
    fn connection_from_the_middle_of_a_run() -> Result<()> {
        let mut grid = Grid::new(7, 6);
        grid.drop_piece(0, Player::One)?;
        grid.drop_piece(1, Player::One)?;
        grid.drop_piece(3, Player::One)?;
        // dropping into the gap closes the run; the oracle counts both ways
        let gap = grid.drop_piece(2, Player::One)?;
        assert!(grid.is_connected(gap, 4));
        Ok(())
    }

    #[test]
    fn connection_up_a_column() -> Result<()> {
        let mut grid = Grid::new(7, 6);
        let mut last = Move { column: 0, row: 0 };
        for _ in 0..4 {
            last = grid.drop_piece(5, Player::Two)?;
        }
        assert!(grid.is_connected(last, 4));
        Ok(())
    }

    #[test]
    fn connection_across_a_diagonal() {
        let mut grid = Grid::new(7, 6);
        // rising staircase for player one
        grid.place(6, 0, Player::One);
        grid.place(5, 1, Player::One);
        grid.place(4, 2, Player::One);
        grid.place(3, 3, Player::One);
        assert!(grid.is_connected(Move { column: 1, row: 5 }, 4));

        // falling staircase for player two
        grid.place(3, 0, Player::Two);
        grid.place(4, 1, Player::Two);
        grid.place(5, 2, Player::Two);
        grid.place(6, 3, Player::Two);
        assert!(grid.is_connected(Move { column: 3, row: 6 }, 4));
    }

    #[test]
    fn opposing_pieces_break_a_run() -> Result<()> {
        let mut grid = Grid::new(7, 6);
        grid.drop_piece(0, Player::One)?;
        grid.drop_piece(1, Player::One)?;
        grid.drop_piece(2, Player::Two)?;
        let last = grid.drop_piece(3, Player::One)?;
        assert!(!grid.is_connected(last, 4));
        Ok(())
    }

    #[test]
    fn empty_cell_never_connects() {
        let grid = Grid::new(7, 6);
        assert!(!grid.is_connected(Move { column: 0, row: 6 }, 4));
        assert!(!grid.is_connected(Move { column: 9, row: 9 }, 4));
    }
}
