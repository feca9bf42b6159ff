//! Exhibition harness: the minimax agent (player one) against the random
//! baseline (player two) over many games in parallel.
//!
//! Usage: `selfplay [games] [depth]`

use anyhow::{anyhow, Result};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::sync::mpsc::channel;
use std::thread;
use std::time::Instant;

use connectn_ai::grid::Player;
use connectn_ai::random;
use connectn_ai::search::Searcher;
use connectn_ai::session::{GameState, Session};
use connectn_ai::{DEFAULT_COLUMNS, DEFAULT_N_IN_ROW, DEFAULT_ROWS, DEFAULT_SEARCH_DEPTH};

struct Outcome {
    winner: Option<Player>,
    moves: usize,
}

enum Message {
    Game(Result<Outcome>),
    Finish,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let games: usize = match args.get(0) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow!("invalid game count: {}", raw))?,
        None => 100,
    };
    let depth: i32 = match args.get(1) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow!("invalid search depth: {}", raw))?,
        None => DEFAULT_SEARCH_DEPTH,
    };
    if games == 0 {
        return Err(anyhow!("game count must be at least 1"));
    }

    println!(
        "Playing {} games: depth-{} search vs. random moves",
        games, depth
    );

    let start = Instant::now();

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let (tx, rx) = channel();
    thread::spawn(move || {
        (0..games)
            .into_par_iter()
            .for_each_with(tx.clone(), |tx, _| {
                tx.send(Message::Game(play_game(depth))).unwrap();
            });
        tx.send(Message::Finish).unwrap();
    });

    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    let mut total_moves = 0usize;

    loop {
        match rx.recv()? {
            Message::Finish => break,
            Message::Game(outcome) => {
                let outcome = outcome?;
                match outcome.winner {
                    Some(player) => wins[player.index()] += 1,
                    None => draws += 1,
                }
                total_moves += outcome.moves;
                progress.inc(1);
            }
        }
    }
    progress.finish();

    println!(
        "Search wins: {} ({:.1}%), random wins: {}, draws: {}",
        wins[0],
        wins[0] as f64 * 100.0 / games as f64,
        wins[1],
        draws,
    );
    println!(
        "Average game length: {:.1} moves, completed in {}",
        total_moves as f64 / games as f64,
        HumanDuration(start.elapsed())
    );

    Ok(())
}

fn play_game(depth: i32) -> Result<Outcome> {
    let mut session = Session::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_N_IN_ROW)?;
    let mut searcher = Searcher::new(DEFAULT_N_IN_ROW, depth)?;
    let mut moves = 0;

    loop {
        match session.state {
            GameState::Playing => {
                let column = match session.current() {
                    Player::One => searcher.choose_move(session.grid(), Player::One)?.column,
                    Player::Two => {
                        random::legal_move(session.grid())
                            .ok_or_else(|| anyhow!("no legal move in a live game"))?
                            .column
                    }
                };
                session.play_checked(column + 1)?;
                moves += 1;
            }
            GameState::Won(winner) => {
                return Ok(Outcome {
                    winner: Some(winner),
                    moves,
                })
            }
            GameState::Draw => return Ok(Outcome { winner: None, moves }),
        }
    }
}
