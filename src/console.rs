#![cfg(feature = "std")]

//! Terminal front end: command parsing, board rendering and the input loop.

use std::io::{BufRead, Write};
use std::string::String;

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::game::{Action, Event, Game, Phase, Volley};
use crate::grid::Cell;

pub const INSTRUCTIONS: &str = "\
Welcome to Broadside!
Instructions:
1. Type 'shuffle' until you are happy with your fleet.
2. Type 'select' to lock it in and start the game.
3. Attack the enemy board by typing a cell, e.g. A5.
4. The bot answers every shot on your board automatically.
5. The first to sink all ships wins!
Type 'restart' for a new game, 'quit' to leave, 'help' at any time.
Good luck!";

/// Format a coordinate as column letter plus 1-based row, e.g. `(0, 4)` → `A5`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    let col = (b'A' + x as u8) as char;
    std::format!("{}{}", col, y + 1)
}

/// Parse `A5`-style input into (`x`, `y`) for a `size`×`size` board.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), String> {
    let last_col = (b'A' + size.saturating_sub(1) as u8) as char;
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch, last_col
        ));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= size {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch, last_col
        ));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((x, row - 1))
}

/// Map one line of user input to a game [`Action`].
pub fn parse_command(input: &str, size: usize) -> Result<Action, String> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "shuffle" | "s" => Ok(Action::Shuffle),
        "select" | "lock" | "start" => Ok(Action::Select),
        "quit" | "q" | "exit" => Ok(Action::Quit),
        "restart" | "r" => Ok(Action::Restart),
        _ => parse_coord(input, size).map(|(x, y)| Action::Fire { x, y }),
    }
}

/// Render a board as text. With `reveal` unfired ship cells are shown as `S`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let size = board.size();
    let border = "═".repeat(2 * size + 4);
    let mut out = String::new();
    out.push_str(&format!("    ╔{}╗\n", border));
    out.push_str("    ║   ");
    for x in 0..size {
        out.push_str(&format!(" {}", (b'A' + x as u8) as char));
    }
    out.push_str(" ║\n");
    out.push_str(&format!("    ╠{}╣\n", border));
    for y in 0..size {
        out.push_str(&format!("    ║ {:2}", y + 1));
        for x in 0..size {
            let ship = board.cell(x, y) == Some(Cell::Ship);
            let ch = match (board.is_fired(x, y), ship) {
                (true, true) => 'X',
                (true, false) => 'o',
                (false, true) if reveal => 'S',
                _ => '.',
            };
            out.push_str(&format!(" {}", ch));
        }
        out.push_str(" ║\n");
    }
    out.push_str(&format!("    ╚{}╝\n", border));
    if reveal {
        out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Scoreline, both boards and the game-over banner when the game has ended.
pub fn render_view(game: &Game) -> String {
    let score = game.score();
    let mut out = format!(
        "Player Hits: {} | Bot Hits: {}\n",
        score.player_hits, score.bot_hits
    );
    out.push_str("\nYour board:\n");
    out.push_str(&render_board(game.player_board(), true));
    out.push_str("\nEnemy board:\n");
    out.push_str(&render_board(game.bot_board(), false));
    if let Some(winner) = game.winner() {
        out.push_str(&format!("\nGame Over! Winner: {}\n", winner));
    }
    out
}

/// One or two lines describing the player's shot and the bot's answer.
pub fn describe_volley(volley: &Volley) -> String {
    let target = coord_to_string(volley.x, volley.y);
    let mut out = match volley.outcome {
        ShotOutcome::Hit => format!("HIT! Your shot at {} struck an enemy ship!", target),
        ShotOutcome::Miss => format!("Miss. Your shot at {} hit only water.", target),
        ShotOutcome::AlreadyFired => {
            format!("You already fired at {}! Choose another target.", target)
        }
    };
    if let Some(reply) = volley.reply {
        let at = coord_to_string(reply.x, reply.y);
        out.push('\n');
        out.push_str(&match reply.outcome {
            ShotOutcome::Hit => format!("ENEMY HIT! The bot struck your ship at {}", at),
            _ => format!("The bot missed at {}", at),
        });
    }
    out
}

fn prompt(phase: Phase) -> &'static str {
    match phase {
        Phase::Placement => "[shuffle/select/quit] > ",
        Phase::Battle => "Enter target (e.g. A5) > ",
        Phase::Over(_) => "[restart/quit] > ",
    }
}

/// Drive `game` from line-oriented `input` until the player quits or input ends.
pub fn run<R, I, O>(game: &mut Game, rng: &mut R, mut input: I, mut output: O) -> anyhow::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}\n", INSTRUCTIONS)?;
    writeln!(output, "{}", render_view(game))?;
    loop {
        write!(output, "{}", prompt(game.phase()))?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("help") {
            writeln!(output, "{}", INSTRUCTIONS)?;
            continue;
        }
        let action = match parse_command(line, game.config().grid_size()) {
            Ok(action) => action,
            Err(e) => {
                writeln!(output, "✗ Invalid command: {}", e)?;
                continue;
            }
        };
        match game.handle(action, rng) {
            Ok(Event::Quit) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Ok(Event::Shuffled) => writeln!(output, "Fleet reshuffled.")?,
            Ok(Event::Started) => writeln!(output, "Fleet locked in. Open fire!")?,
            Ok(Event::Restarted) => writeln!(output, "New game dealt.")?,
            Ok(Event::Fired(volley)) => writeln!(output, "{}", describe_volley(&volley))?,
            Err(e) => {
                warn!("rejected {:?}: {}", action, e);
                writeln!(output, "✗ {}", e)?;
                continue;
            }
        }
        writeln!(output, "{}", render_view(game))?;
    }
    Ok(())
}
