//! Swap controller - tentative two-cell exchanges
//!
//! A swap is only legal between edge-adjacent cells. It is applied, the board is
//! checked for matches, and it either stays (`Committed`) or is undone
//! (`Reverted`). Resolving the resulting matches is the caller's job.

use serde::Serialize;

use crate::board::Board;
use crate::error::GameError;
use crate::matcher::has_match;
use crate::types::{Coord, SwapOutcome};

/// The last swap a session attempted, for renderers that animate it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapRecord {
    pub from: Coord,
    pub to: Coord,
    pub outcome: SwapOutcome,
}

/// Validate and tentatively apply a swap of `a` and `b`.
///
/// Fails with `OutOfBounds` or `InvalidSwap` without touching the board.
pub fn request_swap(board: &mut Board, a: Coord, b: Coord) -> Result<SwapOutcome, GameError> {
    board.check(a)?;
    board.check(b)?;
    if !a.is_adjacent(b) {
        return Err(GameError::InvalidSwap { a, b });
    }

    board.swap(a, b)?;
    if has_match(board) {
        return Ok(SwapOutcome::Committed);
    }

    board.swap(a, b)?;
    Ok(SwapOutcome::Reverted)
}

/// Every adjacent swap that would commit, each pair listed once with the
/// upper/left cell first, in row-major order.
pub fn find_valid_swaps(board: &Board) -> Vec<(Coord, Coord)> {
    let (rows, cols) = board.dimensions();
    let mut scratch = board.clone();
    let mut found = Vec::new();

    for a in board.coords() {
        let right = (a.col + 1 < cols).then(|| Coord::new(a.row, a.col + 1));
        let down = (a.row + 1 < rows).then(|| Coord::new(a.row + 1, a.col));

        for b in [right, down].into_iter().flatten() {
            if board.cell(a.row, a.col) == board.cell(b.row, b.col) {
                continue;
            }
            if let Ok(SwapOutcome::Committed) = request_swap(&mut scratch, a, b) {
                found.push((a, b));
                // Undo the committed swap so the scratch board stays a copy.
                scratch.swap_cells(a, b);
            }
        }
    }

    found
}
