//! Static position evaluation.
//!
//! Every occupied cell contributes the scores of its four lines, once for
//! each side, and pieces in the middle row(s) earn a flat control bonus. The
//! final value is the difference between the two sides' totals, always from
//! one fixed perspective.

use crate::grid::{Cell, Grid, Player};
use crate::lines::{line_through, DIRECTIONS};

/// Score paid out for a window saturated with one side's pieces.
pub const WIN_SCORE: i32 = 100_000;

/// Bonus per piece sitting in a middle row.
pub const MIDDLE_ROW_BONUS: i32 = 4;

/// Scores `line` for `player` by sliding a window of `n_in_row` cells from
/// the head of the line.
///
/// A window of only the player's pieces and gaps earns [`WIN_SCORE`] when
/// saturated, otherwise its piece count when at least two pieces are
/// present. An opposing piece inside the window stops the whole scan and
/// pays out just the current window's multi-piece count. Once fewer than a
/// full window of cells remains, a single opposing piece in the remainder
/// voids it; otherwise the remainder shrinks from the left, paying counts
/// the same way (a saturated span pays the count on top of [`WIN_SCORE`]).
pub fn score_line(line: &[Cell], player: Player, n_in_row: usize) -> i32 {
    if line.len() < 2 {
        return 0;
    }

    let mut score = 0;
    let mut rest = line;

    while rest.len() > n_in_row {
        let mut discs = 0usize;
        for cell in rest[..n_in_row].iter() {
            match cell.player() {
                None => {}
                Some(owner) if owner == player => discs += 1,
                Some(_) => {
                    // blocked: a run of at least two still pays, a lone
                    // piece does not
                    return score + if discs > 1 { discs as i32 } else { 0 };
                }
            }
        }
        rest = &rest[1..];
        if discs == n_in_row {
            score += WIN_SCORE;
        } else if discs > 1 {
            score += discs as i32;
        }
    }

    if rest
        .iter()
        .any(|cell| cell.player().map_or(false, |owner| owner != player))
    {
        return score;
    }
    while rest.len() > 1 {
        let discs = rest
            .iter()
            .filter(|cell| cell.player() == Some(player))
            .count();
        if discs > 1 {
            if discs == n_in_row {
                score += WIN_SCORE;
            }
            score += discs as i32;
        }
        rest = &rest[1..];
    }

    score
}

/// Static evaluator for whole positions.
pub struct Evaluator {
    n_in_row: usize,
}

impl Evaluator {
    pub fn new(n_in_row: usize) -> Self {
        Self { n_in_row }
    }

    /// Evaluates `grid` from `player`'s fixed perspective: line scores plus
    /// middle-row bonuses for `player`, minus the same totals for the
    /// opponent. Completed runs dominate everything else through
    /// [`WIN_SCORE`].
    pub fn evaluate(&self, grid: &Grid, player: Player) -> i32 {
        let opponent = player.opponent();
        let mut own = 0;
        let mut other = 0;

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                if grid.cell(row, column).is_empty() {
                    continue;
                }
                for &direction in DIRECTIONS.iter() {
                    let line = line_through(grid, row, column, direction);
                    own += score_line(&line, player, self.n_in_row);
                    other += score_line(&line, opponent, self.n_in_row);
                }
            }
        }

        for row in middle_rows(grid.rows()) {
            for column in 0..grid.columns() {
                match grid.cell(row, column).player() {
                    Some(owner) if owner == player => own += MIDDLE_ROW_BONUS,
                    Some(_) => other += MIDDLE_ROW_BONUS,
                    None => {}
                }
            }
        }

        own - other
    }
}

/// The rows paying the middle-row bonus: row `rows / 2` alone for odd row
/// counts, rows `rows / 2` and `rows / 2 + 1` for even counts.
fn middle_rows(rows: usize) -> impl Iterator<Item = usize> {
    let extra = if rows % 2 == 0 { Some(rows / 2 + 1) } else { None };
    std::iter::once(rows / 2)
        .chain(extra)
        .filter(move |&row| row < rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Cell = Cell::Piece(Player::One);
    const B: Cell = Cell::Piece(Player::Two);
    const E: Cell = Cell::Empty;

    #[test]
    fn short_lines_score_nothing() {
        assert_eq!(score_line(&[], Player::One, 4), 0);
        assert_eq!(score_line(&[A], Player::One, 4), 0);
    }

    #[test]
    fn lone_pieces_score_nothing() {
        assert_eq!(score_line(&[A, E, E, E], Player::One, 4), 0);
        assert_eq!(score_line(&[E, E, A, E, E, E], Player::One, 4), 0);
    }

    #[test]
    fn broken_window_scores_nothing_for_either_side() {
        let line = [A, A, B, A];
        assert_eq!(score_line(&line, Player::One, 4), 0);
        assert_eq!(score_line(&line, Player::Two, 4), 0);
    }

    #[test]
    fn open_pair_scores_its_count() {
        let line = [A, A, E, E];
        assert_eq!(score_line(&line, Player::One, 4), 2);
        assert_eq!(score_line(&line, Player::Two, 4), 0);
    }

    #[test]
    fn blocked_pair_still_pays_on_the_way_out() {
        // the scan stops at the opposing piece but keeps the pair's count
        assert_eq!(score_line(&[A, A, B, E, E], Player::One, 4), 2);
        // a lone piece before the block pays nothing
        assert_eq!(score_line(&[A, E, B, E, E], Player::One, 4), 0);
    }

    #[test]
    fn saturated_window_dominates() {
        // tail accounting: 100000 + 4, then the shrinking spans pay 3 and 2
        assert_eq!(score_line(&[A, A, A, A], Player::One, 4), 100_009);
        // window walk: 3 for the leading open three, 100000 for the run,
        // then 3 and 2 from the tail spans
        assert_eq!(score_line(&[E, A, A, A, A, E], Player::One, 4), 100_008);
    }

    #[test]
    fn pair_in_a_tiny_line_still_counts() {
        // spans shorter than the winning length still pay piece counts
        assert_eq!(score_line(&[A, A], Player::One, 4), 2);
    }

    #[test]
    fn empty_grid_evaluates_to_zero() {
        let grid = Grid::new(7, 6);
        let evaluator = Evaluator::new(4);
        assert_eq!(evaluator.evaluate(&grid, Player::One), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut grid = Grid::new(7, 6);
        grid.drop_piece(2, Player::One).unwrap();
        grid.drop_piece(3, Player::Two).unwrap();
        grid.drop_piece(2, Player::One).unwrap();
        grid.drop_piece(4, Player::Two).unwrap();
        grid.drop_piece(1, Player::One).unwrap();

        let evaluator = Evaluator::new(4);
        assert_eq!(
            evaluator.evaluate(&grid, Player::One),
            -evaluator.evaluate(&grid, Player::Two)
        );
    }

    #[test]
    fn middle_row_bonus_on_odd_boards() {
        let evaluator = Evaluator::new(4);

        // a lone piece scores no lines, so the bonus is the whole value
        let mut grid = Grid::new(7, 6);
        grid.place(3, 2, Player::One);
        assert_eq!(evaluator.evaluate(&grid, Player::One), 4);

        let mut off_middle = Grid::new(7, 6);
        off_middle.place(6, 2, Player::One);
        assert_eq!(evaluator.evaluate(&off_middle, Player::One), 0);
    }

    #[test]
    fn middle_row_bonus_on_even_boards() {
        let evaluator = Evaluator::new(4);

        for (row, expected) in [(2usize, 0i32), (3, 4), (4, 4), (5, 0)].iter() {
            let mut grid = Grid::new(6, 6);
            grid.place(*row, 1, Player::Two);
            assert_eq!(evaluator.evaluate(&grid, Player::Two), *expected);
        }
    }

    #[test]
    fn completed_run_dominates_positional_credit() {
        let mut grid = Grid::new(7, 6);
        for column in 0..4 {
            grid.place(6, column, Player::One);
        }
        // give the opponent some scattered material
        grid.place(5, 0, Player::Two);
        grid.place(3, 5, Player::Two);

        let evaluator = Evaluator::new(4);
        assert!(evaluator.evaluate(&grid, Player::One) >= WIN_SCORE);
    }
}
