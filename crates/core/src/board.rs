//! Board module - manages the tile grid
//!
//! The board is an R x C grid where each cell is either empty or filled with a color.
//! Uses a flat vector (row-major) for cache locality; dimensions are fixed at
//! construction and never change for the lifetime of a board.
//! Coordinates: (row, col) where row 0 is the top row and col 0 the leftmost column.

use std::fmt;

use crate::error::GameError;
use crate::rng::ColorSource;
use crate::types::{Cell, Color, Coord};

/// The game board - rows x cols using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Create a board where every cell is drawn from `source`, row by row
    pub fn random<S: ColorSource + ?Sized>(rows: usize, cols: usize, source: &mut S) -> Self {
        let cells = (0..rows * cols)
            .map(|_| Cell::Filled(source.next_color()))
            .collect();
        Self { rows, cols, cells }
    }

    /// Build a board from rows of cells.
    ///
    /// Fails with `InvalidConfig` when the rows are ragged or the grid is empty.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GameError::InvalidConfig("board must not be empty".into()));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(GameError::InvalidConfig(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a board from one string per row, one letter per cell (`.` = empty).
    ///
    /// Whitespace inside a row is ignored, so `"R G B"` and `"RGB"` are equivalent.
    pub fn from_letters(rows: &[&str]) -> Result<Self, GameError> {
        let parsed = rows
            .iter()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '.' => Ok(Cell::Empty),
                        _ => Color::from_letter(c)
                            .map(Cell::Filled)
                            .ok_or_else(|| {
                                GameError::InvalidConfig(format!("unknown tile letter '{}'", c))
                            }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(parsed)
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        self.index(row, col).ok_or(GameError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at (row, col). The color is not validated.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Get the cell at a coordinate
    pub fn at(&self, coord: Coord) -> Result<Cell, GameError> {
        self.get(coord.row, coord.col)
    }

    /// Fail with `OutOfBounds` unless the coordinate addresses a cell
    pub fn check(&self, coord: Coord) -> Result<(), GameError> {
        self.checked_index(coord.row, coord.col).map(|_| ())
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord.row, coord.col).is_some()
    }

    /// Exchange the contents of two cells
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<(), GameError> {
        let ia = self.checked_index(a.row, a.col)?;
        let ib = self.checked_index(b.row, b.col)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        Some(self.row_cells(row))
    }

    /// Every row in order; a zero-width board still yields `rows` empty slices
    fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |row| self.row_cells(row))
    }

    #[inline(always)]
    fn row_cells(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_filled())
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Convert to rows of compact cell codes (0 = empty, color index + 1)
    pub fn to_u8_rows(&self) -> Vec<Vec<u8>> {
        self.row_slices()
            .map(|row| row.iter().map(|c| c.to_u8()).collect())
            .collect()
    }

    /// Write compact cell codes into an existing buffer, reusing its allocation
    pub fn write_u8_rows(&self, out: &mut Vec<Vec<u8>>) {
        out.resize_with(self.rows, Vec::new);
        for (dst, src) in out.iter_mut().zip(self.row_slices()) {
            dst.clear();
            dst.extend(src.iter().map(|c| c.to_u8()));
        }
    }

    /// Convert to a 2D vector of cells
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.row_slices().map(<[Cell]>::to_vec).collect()
    }

    /// Unchecked read for internal loops that stay in bounds by construction
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Unchecked exchange for coordinates already known to be on the board
    #[inline(always)]
    pub(crate) fn swap_cells(&mut self, a: Coord, b: Coord) {
        self.cells
            .swap(a.row * self.cols + a.col, b.row * self.cols + b.col);
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.letter())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
