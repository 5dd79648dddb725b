use serde::Serialize;

use crate::swap::SwapRecord;
use crate::types::{Coord, ResolverState};

/// Renderer-facing copy of a session, refreshed once per frame.
///
/// Board cells are encoded as `0` for empty and palette index + 1 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub board: Vec<Vec<u8>>,
    /// FNV-1a of the board codes, row-major
    pub board_hash: u64,
    pub score: u32,
    pub moves: u32,
    pub seed: u64,
    pub palette_size: u8,
    pub selected: Option<Coord>,
    pub state: ResolverState,
    /// In-flight swap descriptor for animating the last move
    pub last_swap: Option<SwapRecord>,
    /// Passes in the last committed cascade (0 before the first move)
    pub last_cascade_depth: usize,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.board.clear();
        self.board_hash = board_hash(&self.board);
        self.score = 0;
        self.moves = 0;
        self.seed = 0;
        self.palette_size = 0;
        self.selected = None;
        self.state = ResolverState::Idle;
        self.last_swap = None;
        self.last_cascade_depth = 0;
    }

    /// True when the presentation layer may submit a swap
    pub fn playable(&self) -> bool {
        self.state.accepts_input()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            rows: 0,
            cols: 0,
            board: Vec::new(),
            board_hash: 0,
            score: 0,
            moves: 0,
            seed: 0,
            palette_size: 0,
            selected: None,
            state: ResolverState::Idle,
            last_swap: None,
            last_cascade_depth: 0,
        };
        s.clear();
        s
    }
}

/// FNV-1a 64-bit over the board codes in row-major order
pub fn board_hash(board: &[Vec<u8>]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in board.iter().flat_map(|row| row.iter().copied()) {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}
