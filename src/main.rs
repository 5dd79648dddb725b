//! Headless match-three runner (default binary).
//!
//! Creates a session, autoplays a number of moves and prints the board after each
//! one. There is no interactive front-end: the rule engine is meant to be driven by
//! an external presentation layer, and this binary exercises it end to end.

use anyhow::Result;

use match_three::cli::{parse_args, USAGE};
use match_three::core::GameSession;
use match_three::runner::{autoplay, picker_for};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(opts) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = opts.session_config()?;
    let mut session = GameSession::new(config)?;
    if opts.verbose {
        let (rows, cols) = session.board_view().dimensions();
        eprintln!(
            "[Runner] {}x{} board, {} colors, seed {}",
            rows,
            cols,
            session.config().palette_size,
            session.seed()
        );
    }
    if !opts.quiet {
        println!("{}", session.board_view());
    }

    let mut picker = picker_for(&session);
    let log = autoplay(&mut session, opts.moves, &mut picker, |turn, session| {
        if opts.verbose {
            eprintln!(
                "[Runner] move {}: {} <-> {} +{} (passes: {}, score: {})",
                turn.index, turn.from, turn.to, turn.points, turn.depth, turn.score
            );
        }
        if !opts.quiet {
            println!("move {}: {} <-> {}", turn.index, turn.from, turn.to);
            println!("{}", session.board_view());
        }
    })?;

    if (log.len() as u32) < opts.moves && opts.verbose {
        eprintln!("[Runner] no moves left after {} moves", log.len());
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!("score: {} after {} moves", session.score(), session.moves());
    }

    Ok(())
}
