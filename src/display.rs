use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connectn_ai::grid::{Cell, Grid, Player};

/// The board colour of each side, also used for banners.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Draws the grid: column numbers on top, bold pieces on a dark blue board.
pub fn draw(grid: &Grid) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=grid.columns()).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..grid.rows() {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let (pos_x, pos_y) = (
                origin_x + column as u16,
                origin_y - (grid.rows() - 1 - row) as u16,
            );

            stdout.queue(MoveTo(pos_x, pos_y))?.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match grid.cell(row, column) {
                        Cell::Piece(player) => player_color(player),
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + grid.columns() as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

/// Prints a bold one-line banner in the given colour.
pub fn banner(text: &str, color: Color) -> Result<()> {
    let mut stdout = stdout();
    stdout.queue(PrintStyledContent(
        style(text).attribute(Attribute::Bold).with(color),
    ))?;
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
