use anyhow::{anyhow, Result};
use crossterm::style::Color;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Stdin, Write};
use std::thread;
use std::time::Duration;

use connectn_ai::eval::WIN_SCORE;
use connectn_ai::random;
use connectn_ai::search::Searcher;
use connectn_ai::session::{GameState, Session};
use connectn_ai::{DEFAULT_COLUMNS, DEFAULT_N_IN_ROW, DEFAULT_ROWS, DEFAULT_SEARCH_DEPTH};

mod display;

/// How long the AI lingers before announcing its move.
const MOVE_REPORT_DELAY: Duration = Duration::from_secs(1);

#[derive(Copy, Clone)]
enum Controller {
    Human,
    Minimax,
    Random,
}

fn main() -> Result<()> {
    let stdin = stdin();

    let mut session = Session::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_N_IN_ROW)?;
    let mut searcher = Searcher::new(DEFAULT_N_IN_ROW, DEFAULT_SEARCH_DEPTH)?;

    println!("Welcome to Connect {}\n", DEFAULT_N_IN_ROW);

    let controllers = [
        prompt_controller(&stdin, 1)?,
        prompt_controller(&stdin, 2)?,
    ];

    // game loop
    loop {
        display::draw(session.grid())?;

        match session.state {
            GameState::Playing => {
                let player = session.current();
                let next_move = match controllers[player.index()] {
                    Controller::Human => {
                        print!("Move input > ");
                        stdout().flush().expect("failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                    Controller::Minimax => {
                        println!("AI is thinking...");
                        stdout().flush().expect("failed to flush to stdout!");

                        let (score, best_move) = searcher.search(session.grid(), player)?;

                        // let the result land at a human pace
                        thread::sleep(MOVE_REPORT_DELAY);

                        match score.cmp(&0) {
                            Ordering::Greater if score >= WIN_SCORE => {
                                println!("AI sees a winning connection ahead.")
                            }
                            Ordering::Greater => println!("AI likes this position ({:+}).", score),
                            Ordering::Less if score <= -WIN_SCORE => {
                                println!("AI is bracing to lose.")
                            }
                            Ordering::Less => {
                                println!("AI dislikes this position ({:+}).", score)
                            }
                            Ordering::Equal => println!("AI calls this position level."),
                        }
                        println!("AI plays column {}", best_move.column + 1);
                        best_move.column + 1
                    }
                    Controller::Random => {
                        let mv = random::legal_move(session.grid())
                            .ok_or_else(|| anyhow!("no legal move in a live game"))?;
                        println!("Random player drops into column {}", mv.column + 1);
                        mv.column + 1
                    }
                };

                if let Err(err) = session.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::Won(winner) => {
                display::banner(
                    &format!("Player {} wins!", winner.index() + 1),
                    display::player_color(winner),
                )?;
                println!("Game record: {}\n", session.game);

                if prompt_replay(&stdin)? {
                    session.reset();
                } else {
                    break;
                }
            }
            GameState::Draw => {
                display::banner("Draw!", Color::White)?;
                println!("Game record: {}\n", session.game);

                if prompt_replay(&stdin)? {
                    session.reset();
                } else {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn prompt_controller(stdin: &Stdin, player_number: usize) -> Result<Controller> {
    loop {
        let mut buffer = String::new();
        print!(
            "Is player {} human, AI or random controlled? h/a/r: ",
            player_number
        );
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'h') => return Ok(Controller::Human),
            Some(_letter @ 'a') => return Ok(Controller::Minimax),
            Some(_letter @ 'r') => return Ok(Controller::Random),
            _ => println!("Unknown answer given"),
        }
    }
}

fn prompt_replay(stdin: &Stdin) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("Play again? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
