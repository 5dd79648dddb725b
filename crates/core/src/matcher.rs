//! Match detection - finds runs of three or more same-colored tiles
//!
//! Rows are scanned left to right and columns top to bottom. A run opens as soon as
//! three consecutive cells share a color, extends greedily while the color continues,
//! and scanning resumes after it, so runs on one line never overlap. Horizontal and
//! vertical runs are reported independently; a tile in an L or T shape shows up in
//! two matches and is deduplicated later through [`MatchSet`].

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Cell, Color, Coord, Orientation, MIN_RUN};

/// A maximal straight run of same-colored tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    color: Color,
    orientation: Orientation,
    /// Coordinates in increasing col (horizontal) or row (vertical) order
    cells: Vec<Coord>,
}

impl Match {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for detected matches; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First coordinate of the run (leftmost or topmost)
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Union of every coordinate covered by a set of matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    coords: BTreeSet<Coord>,
}

impl MatchSet {
    pub fn from_matches(matches: &[Match]) -> Self {
        Self {
            coords: matches
                .iter()
                .flat_map(|m| m.cells.iter().copied())
                .collect(),
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Coord;
    type IntoIter = std::collections::btree_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// Report every match on the board: horizontal runs row by row, then vertical
/// runs column by column. Does not mutate the board.
pub fn detect(board: &Board) -> Vec<Match> {
    let (rows, cols) = board.dimensions();
    let mut matches = Vec::new();

    for row in 0..rows {
        scan_line(
            board,
            Orientation::Horizontal,
            (0..cols).map(|col| Coord::new(row, col)),
            &mut matches,
        );
    }
    for col in 0..cols {
        scan_line(
            board,
            Orientation::Vertical,
            (0..rows).map(|row| Coord::new(row, col)),
            &mut matches,
        );
    }

    matches
}

/// True when at least one match exists. Stops at the first run found.
pub fn has_match(board: &Board) -> bool {
    let (rows, cols) = board.dimensions();
    (0..rows).any(|row| line_has_run(board, (0..cols).map(|col| (row, col))))
        || (0..cols).any(|col| line_has_run(board, (0..rows).map(|row| (row, col))))
}

fn scan_line(
    board: &Board,
    orientation: Orientation,
    line: impl Iterator<Item = Coord>,
    out: &mut Vec<Match>,
) {
    let mut run: Vec<Coord> = Vec::new();
    let mut run_color: Option<Color> = None;

    for coord in line {
        let color = board.cell(coord.row, coord.col).color();
        if color.is_some() && color == run_color {
            run.push(coord);
            continue;
        }

        flush_run(orientation, run_color, &mut run, out);
        run_color = color;
        if color.is_some() {
            run.push(coord);
        }
    }
    flush_run(orientation, run_color, &mut run, out);
}

fn flush_run(
    orientation: Orientation,
    color: Option<Color>,
    run: &mut Vec<Coord>,
    out: &mut Vec<Match>,
) {
    if let Some(color) = color {
        if run.len() >= MIN_RUN {
            out.push(Match {
                color,
                orientation,
                cells: std::mem::take(run),
            });
            return;
        }
    }
    run.clear();
}

fn line_has_run(board: &Board, line: impl Iterator<Item = (usize, usize)>) -> bool {
    let mut prev = Cell::Empty;
    let mut len = 0usize;
    for (row, col) in line {
        let cell = board.cell(row, col);
        if cell.is_filled() && cell == prev {
            len += 1;
            if len >= MIN_RUN {
                return true;
            }
        } else {
            prev = cell;
            len = usize::from(cell.is_filled());
        }
    }
    false
}
