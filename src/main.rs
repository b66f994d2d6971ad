//! Terminal driver for the variant chess board
//!
//! Reads one command per line from stdin:
//!
//! - `<from_rank> <from_file> <to_rank> <to_file>` - attempt a move
//! - `moves <rank> <file>` - list legal destinations of a piece
//! - `undo` / `redo`
//! - `show` / `history`
//! - `quit`
//!
//! Log output goes to stderr and is controlled through `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use variant_chess::{Board, BoardConfig, SetupMode};

#[derive(Parser, Debug)]
#[command(name = "variant_chess", about = "Play variant chess in the terminal")]
struct Args {
    /// Setup mode: 0 standard, 1 empty, 2 custom (Mimic and Bastion)
    #[arg(short, long, default_value_t = 0)]
    mode: u8,

    /// JSON board config; overrides --mode
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut board = match &args.config {
        Some(path) => {
            let config = BoardConfig::load(path)
                .with_context(|| format!("failed to load board config from {}", path.display()))?;
            Board::from_config(&config)?
        }
        None => Board::new(SetupMode::try_from(args.mode)?),
    };
    info!(
        "[MAIN] Started {}x{} board",
        board.rank_size(),
        board.file_size()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", board)?;
    prompt(&mut stdout, &board)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["show"] => write!(stdout, "{}", board)?,
            ["history"] => {
                for (number, movement) in board.history().iter().enumerate() {
                    let marker = if movement.is_capture() { "x" } else { "-" };
                    writeln!(stdout, "{:>3}. {} {} {}", number + 1, movement.from, marker, movement.to)?;
                }
            }
            ["undo"] => {
                let done = board.undo_movement();
                report(&mut stdout, &board, done, "nothing to undo")?
            }
            ["redo"] => {
                let done = board.redo_movement();
                report(&mut stdout, &board, done, "nothing to redo")?
            }
            ["moves", rank, file] => match parse_coords(&[rank, file]) {
                Some(coords) => {
                    let destinations: Vec<String> = board
                        .legal_destinations(coords[0], coords[1])
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    writeln!(stdout, "{}", destinations.join(" "))?;
                }
                None => writeln!(stdout, "expected: moves <rank> <file>")?,
            },
            [a, b, c, d] => match parse_coords(&[a, b, c, d]) {
                Some(coords) => {
                    let moved = board.attempt_move(coords[0], coords[1], coords[2], coords[3]);
                    report(&mut stdout, &board, moved, "illegal move")?
                }
                None => writeln!(stdout, "expected four integers")?,
            },
            _ => {
                warn!("[MAIN] Unrecognized command: {}", line);
                writeln!(stdout, "unknown command")?;
            }
        }

        if board.is_checkmate() {
            writeln!(stdout, "checkmate, {} wins", board.current_turn_color().opposite())?;
        } else if board.is_stalemate() {
            writeln!(stdout, "stalemate")?;
        } else if board.is_check() {
            writeln!(stdout, "check")?;
        }
        prompt(&mut stdout, &board)?;
    }

    Ok(())
}

fn parse_coords(words: &[&&str]) -> Option<Vec<i32>> {
    words.iter().map(|w| w.parse().ok()).collect()
}

/// Print the board after a change, or the reason nothing happened
fn report(out: &mut impl Write, board: &Board, changed: bool, failure: &str) -> io::Result<()> {
    if changed {
        write!(out, "{}", board)
    } else {
        writeln!(out, "{}", failure)
    }
}

fn prompt(out: &mut impl Write, board: &Board) -> io::Result<()> {
    write!(out, "{} to move> ", board.current_turn_color())?;
    out.flush()
}
