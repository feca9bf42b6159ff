//! A fixed-depth minimax agent for N-in-a-row games

use anyhow::{anyhow, Result};

use crate::eval::Evaluator;
use crate::grid::{Grid, Move, Player};

/// Which way the node to move drives the score.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    fn flip(self) -> Self {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }
}

/// An agent choosing moves by bounded look-ahead
///
/// # Notes
/// The search walks the full game tree to a fixed depth with no pruning and
/// no memoisation: every legal column of every node is expanded depth first
/// on a single scratch grid, simulating each move in place and undoing it
/// before trying the next. A node is terminal once a move led into it and
/// either the horizon is spent or that move completed a connection; terminal
/// nodes are scored with the static [`Evaluator`].
///
/// # Position Scoring
/// Scores are the evaluator's numbers from the searching player's fixed
/// perspective at every node; the minimizer picks the smallest of the same
/// numbers rather than negating them. A connection inside the horizon
/// dominates through [`WIN_SCORE`]. Equally scored columns resolve to the
/// highest column, because later branches overwrite on equality.
///
/// [`WIN_SCORE`]: crate::eval::WIN_SCORE
pub struct Searcher {
    n_in_row: usize,
    depth: i32,
    evaluator: Evaluator,

    /// The number of nodes visited by the most recent search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a searcher for `n_in_row` connections looking `depth` plies
    /// ahead. Fails on a depth below 1 or a connection length below 2.
    pub fn new(n_in_row: usize, depth: i32) -> Result<Self> {
        if n_in_row < 2 {
            return Err(anyhow!(
                "connection length must be at least 2, got {}",
                n_in_row
            ));
        }
        if depth < 1 {
            return Err(anyhow!("search depth must be at least 1, got {}", depth));
        }
        Ok(Self {
            n_in_row,
            depth,
            evaluator: Evaluator::new(n_in_row),
            node_count: 0,
        })
    }

    /// Scores the position and picks `player`'s best move
    ///
    /// The caller's grid is only read: simulation happens on a scratch copy.
    /// Fails when no column is open.
    pub fn search(&mut self, grid: &Grid, player: Player) -> Result<(i32, Move)> {
        if grid.legal_columns().is_empty() {
            return Err(anyhow!("no legal moves: every column is full"));
        }

        self.node_count = 0;
        let mut scratch = grid.clone();
        let (score, best) = self.minimax(&mut scratch, self.depth, Role::Maximizer, player, None);

        let best = best.ok_or_else(|| anyhow!("search found no move on a playable board"))?;
        Ok((score, best))
    }

    /// Like [`search`], returning just the move
    ///
    /// [`search`]: #method.search
    pub fn choose_move(&mut self, grid: &Grid, player: Player) -> Result<Move> {
        let (_score, best) = self.search(grid, player)?;
        Ok(best)
    }

    fn minimax(
        &mut self,
        grid: &mut Grid,
        depth: i32,
        role: Role,
        player: Player,
        latest: Option<Move>,
    ) -> (i32, Option<Move>) {
        self.node_count += 1;

        // the root carries no latest move and is never terminal
        if let Some(mv) = latest {
            if depth <= 0 || grid.is_connected(mv, self.n_in_row) {
                return (self.evaluator.evaluate(grid, player), Some(mv));
            }
        }

        let mover = match role {
            Role::Maximizer => player,
            Role::Minimizer => player.opponent(),
        };
        let columns = grid.legal_columns();

        match role {
            Role::Maximizer => {
                let mut best = i32::MIN;
                let mut best_move = None;
                for column in columns {
                    if let Some(row) = grid.landing_row(column) {
                        let mv = Move { column, row };
                        grid.place(mv.row, mv.column, mover);
                        let (value, _) =
                            self.minimax(grid, depth - 1, role.flip(), player, Some(mv));
                        grid.remove(mv.row, mv.column);
                        // >= keeps the later column on equal scores
                        if value >= best {
                            best = value;
                            best_move = Some(mv);
                        }
                    }
                }
                (best, best_move)
            }
            Role::Minimizer => {
                let mut best = i32::MAX;
                let mut best_move = None;
                for column in columns {
                    if let Some(row) = grid.landing_row(column) {
                        let mv = Move { column, row };
                        grid.place(mv.row, mv.column, mover);
                        let (value, _) =
                            self.minimax(grid, depth - 1, role.flip(), player, Some(mv));
                        grid.remove(mv.row, mv.column);
                        if value <= best {
                            best = value;
                            best_move = Some(mv);
                        }
                    }
                }
                (best, best_move)
            }
        }
    }
}
