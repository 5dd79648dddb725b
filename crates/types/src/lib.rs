//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (rule engine, renderer, headless runner).
//!
//! # Board Geometry
//!
//! - **Rows**: indexed top to bottom, row 0 is the top row
//! - **Columns**: indexed left to right
//! - **Gravity**: tiles fall toward the highest row index
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 8 | Board height |
//! | `DEFAULT_COLS` | 8 | Board width |
//! | `DEFAULT_PALETTE_SIZE` | 6 | Number of distinct tile colors |
//! | `MAX_DIMENSION` | 256 | Largest board height or width |
//! | `MIN_RUN` | 3 | Shortest run that counts as a match |
//!
//! # Examples
//!
//! ```
//! use match_three_types::{Cell, Color, Coord};
//!
//! let cell = Cell::Filled(Color::RED);
//! assert_eq!(cell.color(), Some(Color::RED));
//! assert!(Cell::Empty.is_empty());
//!
//! let a = Coord::new(2, 3);
//! assert!(a.is_adjacent(Coord::new(2, 4)));
//! assert!(!a.is_adjacent(Coord::new(3, 4)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default board height in cells
pub const DEFAULT_ROWS: usize = 8;

/// Default board width in cells
pub const DEFAULT_COLS: usize = 8;

/// Default number of tile colors
pub const DEFAULT_PALETTE_SIZE: u8 = 6;

/// Smallest board dimension a session accepts
pub const MIN_DIMENSION: usize = 3;

/// Largest board dimension a session accepts
pub const MAX_DIMENSION: usize = 256;

/// Smallest palette a session accepts
pub const MIN_PALETTE_SIZE: u8 = 3;

/// Largest palette a session accepts (one letter per color when printed)
pub const MAX_PALETTE_SIZE: u8 = 16;

/// Shortest run of same-colored tiles that forms a match
pub const MIN_RUN: usize = 3;

/// Default points per match, indexed by run length 3, 4 and 5+
pub const DEFAULT_MATCH_SCORES: [u32; 3] = [10, 25, 50];

const COLOR_LETTERS: [char; MAX_PALETTE_SIZE as usize] = [
    'R', 'G', 'B', 'Y', 'M', 'C', 'O', 'P', 'W', 'K', 'T', 'L', 'N', 'V', 'S', 'A',
];

/// Tile color, an opaque index into the session palette.
///
/// The first six indices carry the names of the default palette; the renderer
/// decides what they actually look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u8);

impl Color {
    pub const RED: Color = Color(0);
    pub const GREEN: Color = Color(1);
    pub const BLUE: Color = Color(2);
    pub const YELLOW: Color = Color(3);
    pub const MAGENTA: Color = Color(4);
    pub const CYAN: Color = Color(5);

    /// Create a color from its palette index
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Palette index of this color
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single-letter label used by text renderings
    ///
    /// ```
    /// use match_three_types::Color;
    ///
    /// assert_eq!(Color::RED.letter(), 'R');
    /// assert_eq!(Color::CYAN.letter(), 'C');
    /// assert_eq!(Color::new(200).letter(), '?');
    /// ```
    pub fn letter(self) -> char {
        COLOR_LETTERS.get(self.0 as usize).copied().unwrap_or('?')
    }

    /// Parse a color from its letter (case-insensitive)
    pub fn from_letter(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        COLOR_LETTERS
            .iter()
            .position(|&l| l == upper)
            .map(|i| Color(i as u8))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single board cell
///
/// `Empty` only exists transiently while a cascade is removing and refilling
/// tiles; a settled board is completely filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    /// Color of the tile, `None` for an empty cell
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Filled(color) => Some(color),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(self) -> bool {
        !self.is_empty()
    }

    /// Compact encoding: 0 = empty, palette index + 1 otherwise
    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(color) => color.index().saturating_add(1),
        }
    }

    /// Letter used by text renderings, `.` for empty
    pub fn letter(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Filled(color) => color.letter(),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Filled(color)
    }
}

/// Board coordinate (row, col), row 0 at the top
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two coordinates
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the two coordinates share an edge
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis along which a match runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Result of a tentative swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapOutcome {
    /// The swap produced at least one match and stays applied
    Committed,
    /// The swap produced no match and was undone
    Reverted,
}

impl SwapOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SwapOutcome::Committed)
    }
}

/// Cascade state machine phases
///
/// The cycle is `Idle -> Matching -> Resolving -> Filling -> Matching -> ... -> Idle`.
/// The only way back to `Idle` is a detection pass that finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverState {
    /// Board settled, awaiting player action
    #[default]
    Idle,
    /// About to scan the board for matches
    Matching,
    /// Matches found; removing and scoring them
    Resolving,
    /// Applying gravity and refilling empty cells
    Filling,
}

impl ResolverState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverState::Idle => "idle",
            ResolverState::Matching => "matching",
            ResolverState::Resolving => "resolving",
            ResolverState::Filling => "filling",
        }
    }

    /// True when the presentation layer may submit a new swap
    pub fn accepts_input(&self) -> bool {
        matches!(self, ResolverState::Idle)
    }
}
