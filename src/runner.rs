//! Headless autoplay: picks committing swaps with a seeded picker and plays them.

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::{GameSession, TurnOutcome};
use crate::types::Coord;

/// Mixed into the session seed so the move picker does not mirror the tile stream
const PICKER_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// One autoplayed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnLog {
    /// 1-based move number
    pub index: u32,
    pub from: Coord,
    pub to: Coord,
    pub points: u32,
    /// Passes in the cascade, 1 when there was no chain reaction
    pub depth: usize,
    pub score: u32,
}

/// Picker seeded from the session, so a replay with the same seed plays the same moves
pub fn picker_for(session: &GameSession) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(session.seed() ^ PICKER_SALT)
}

/// Play up to `max_moves` committing swaps, calling `on_turn` after each one.
///
/// Stops early when the board has no committing swap left. Returns the log of
/// every move played.
pub fn autoplay(
    session: &mut GameSession,
    max_moves: u32,
    picker: &mut ChaCha8Rng,
    mut on_turn: impl FnMut(&TurnLog, &GameSession),
) -> Result<Vec<TurnLog>> {
    let mut log = Vec::new();

    for index in 1..=max_moves {
        let swaps = session.valid_swaps();
        if swaps.is_empty() {
            break;
        }
        let (from, to) = swaps[picker.gen_range(0..swaps.len())];

        session.select(from)?;
        let (points, depth) = match session.swap_with(to)? {
            TurnOutcome::Committed(report) => (report.total_points(), report.depth()),
            // valid_swaps only lists committing swaps
            TurnOutcome::Reverted => (0, 0),
        };

        let entry = TurnLog {
            index,
            from,
            to,
            points,
            depth,
            score: session.score(),
        };
        on_turn(&entry, session);
        log.push(entry);
    }

    Ok(log)
}
