//! Gravity and refill
//!
//! Each column is compacted independently: filled tiles slide down to the bottom
//! keeping their relative order, vacated cells at the top become empty, then every
//! empty cell receives a fresh color. Columns are processed left to right and each
//! column is refilled top to bottom, so a seeded [`ColorSource`] replays exactly.

use crate::board::Board;
use crate::rng::ColorSource;
use crate::types::Cell;

/// Compact every column downward. Returns the number of cells left empty at the top.
pub fn compact(board: &mut Board) -> usize {
    let (rows, cols) = board.dimensions();
    let mut vacated = 0;

    for col in 0..cols {
        // Two-pointer scan from the bottom: `write` is the next slot to fill.
        let mut write = rows;
        for read in (0..rows).rev() {
            let cell = board.cell(read, col);
            if cell.is_filled() {
                write -= 1;
                if write != read {
                    board.put(write, col, cell);
                    board.put(read, col, Cell::Empty);
                }
            }
        }
        vacated += write;
    }

    vacated
}

/// Replace every empty cell with a color from `source`. Returns the number of tiles created.
pub fn refill<S: ColorSource + ?Sized>(board: &mut Board, source: &mut S) -> usize {
    let (rows, cols) = board.dimensions();
    let mut created = 0;

    for col in 0..cols {
        for row in 0..rows {
            if board.cell(row, col).is_empty() {
                board.put(row, col, Cell::Filled(source.next_color()));
                created += 1;
            }
        }
    }

    created
}

/// Apply gravity then refill; afterwards the board has no empty cells.
pub fn apply<S: ColorSource + ?Sized>(board: &mut Board, source: &mut S) -> usize {
    compact(board);
    refill(board, source)
}
