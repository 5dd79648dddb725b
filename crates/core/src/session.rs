//! Game session - owns one board, its score and the player's selection
//!
//! A session ties together the board, the seeded tile generator, the swap
//! controller and the cascade resolver. All mutation goes through it, one call at a
//! time; a multi-threaded host must guard each session behind its own lock.
//!
//! The player interaction is the two-click model: the first click selects a tile,
//! the second click on an adjacent tile swaps them. Any committed swap is resolved
//! to a settled board before the call returns.

use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::GameError;
use crate::matcher::has_match;
use crate::resolver::{CascadeReport, Resolver};
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::swap::{find_valid_swaps, request_swap, SwapRecord};
use crate::types::{Coord, ResolverState, SwapOutcome};

/// Result of a swap attempt that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No match: the tiles went back where they were
    Reverted,
    /// The swap stayed and the cascade ran to completion
    Committed(CascadeReport),
}

impl TurnOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, TurnOutcome::Committed(_))
    }

    /// Points gained by this turn
    pub fn points(&self) -> u32 {
        match self {
            TurnOutcome::Reverted => 0,
            TurnOutcome::Committed(report) => report.total_points(),
        }
    }
}

/// Result of a click in the two-click model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click: the tile is now selected
    Selected(Coord),
    /// Clicked the selected tile again
    Deselected,
    /// Second click on an adjacent tile
    Turn(TurnOutcome),
}

/// One running game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    score: u32,
    selected: Option<Coord>,
    resolver: Resolver,
    tiles: TileRng,
    /// Committed swaps so far
    moves: u32,
    last_swap: Option<SwapRecord>,
    last_cascade: Option<CascadeReport>,
}

/// Create a session with default scoring.
///
/// Fails with `InvalidConfig` if either dimension or the palette is below three.
pub fn new_session(
    rows: usize,
    cols: usize,
    palette_size: u8,
    rng_seed: Option<u64>,
) -> Result<GameSession, GameError> {
    GameSession::new(SessionConfig {
        rows,
        cols,
        palette_size,
        seed: rng_seed,
        ..SessionConfig::default()
    })
}

fn tiles_for(config: &SessionConfig) -> TileRng {
    match config.seed {
        Some(seed) => TileRng::new(seed, config.palette_size),
        None => TileRng::from_entropy(config.palette_size),
    }
}

impl GameSession {
    /// Create a session with a randomly filled, settled board and a score of zero
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut tiles = tiles_for(&config);
        let board = Board::random(config.rows, config.cols, &mut tiles);
        Self::assemble(config, board, tiles)
    }

    /// Create a session around an existing board (dimensions come from the board).
    ///
    /// Refills still draw from the configured seed. A board with empty cells or
    /// matches is settled first, without scoring. Every tile must use a color
    /// inside the configured palette.
    pub fn with_board(config: SessionConfig, board: Board) -> Result<Self, GameError> {
        let (rows, cols) = board.dimensions();
        let config = SessionConfig {
            rows,
            cols,
            ..config
        };
        config.validate()?;
        if let Some(color) = board
            .cells()
            .iter()
            .filter_map(|c| c.color())
            .find(|c| c.index() >= config.palette_size)
        {
            return Err(GameError::InvalidConfig(format!(
                "tile color {} is outside the {}-color palette",
                color.index(),
                config.palette_size
            )));
        }
        let tiles = tiles_for(&config);
        Self::assemble(config, board, tiles)
    }

    fn assemble(
        config: SessionConfig,
        mut board: Board,
        mut tiles: TileRng,
    ) -> Result<Self, GameError> {
        let mut resolver = Resolver::new(config.scoring);

        // The opening board must be settled; clearing it earns nothing.
        if !board.is_full() {
            crate::gravity::apply(&mut board, &mut tiles);
        }
        let mut discarded = 0;
        resolver.resolve_cascade(&mut board, &mut discarded, &mut tiles)?;

        Ok(Self {
            config,
            board,
            score: 0,
            selected: None,
            resolver,
            tiles,
            moves: 0,
            last_swap: None,
            last_cascade: None,
        })
    }

    /// Record the first tile of a swap
    pub fn select(&mut self, coord: Coord) -> Result<(), GameError> {
        self.board.check(coord)?;
        self.selected = Some(coord);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Swap the selected tile with `coord` and resolve the result.
    ///
    /// The selection is consumed even when the swap is rejected.
    pub fn swap_with(&mut self, coord: Coord) -> Result<TurnOutcome, GameError> {
        let from = self.selected.take().ok_or(GameError::NoSelection)?;
        self.swap(from, coord)
    }

    /// Two-click driver: select, deselect, or swap depending on the current selection
    pub fn click(&mut self, coord: Coord) -> Result<ClickOutcome, GameError> {
        match self.selected {
            None => {
                self.select(coord)?;
                Ok(ClickOutcome::Selected(coord))
            }
            Some(selected) if selected == coord => {
                self.selected = None;
                Ok(ClickOutcome::Deselected)
            }
            Some(_) => self.swap_with(coord).map(ClickOutcome::Turn),
        }
    }

    /// Swap two adjacent tiles directly and, if the swap commits, resolve the cascade.
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<TurnOutcome, GameError> {
        let outcome = request_swap(&mut self.board, a, b)?;
        self.last_swap = Some(SwapRecord {
            from: a,
            to: b,
            outcome,
        });

        match outcome {
            SwapOutcome::Reverted => Ok(TurnOutcome::Reverted),
            SwapOutcome::Committed => {
                self.moves = self.moves.saturating_add(1);
                let report = self.resolver.resolve_cascade(
                    &mut self.board,
                    &mut self.score,
                    &mut self.tiles,
                )?;
                self.last_cascade = Some(report.clone());
                Ok(TurnOutcome::Committed(report))
            }
        }
    }

    /// Read-only view of the board for renderers
    pub fn board_view(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Cascade phase; always `Idle` between calls
    pub fn resolver_state(&self) -> ResolverState {
        self.resolver.state()
    }

    /// Seed that reproduces this session's tile stream
    pub fn seed(&self) -> u64 {
        self.tiles.seed()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The most recent validated swap and whether it stayed
    pub fn last_swap(&self) -> Option<SwapRecord> {
        self.last_swap
    }

    /// Report of the most recent committed turn
    pub fn last_cascade(&self) -> Option<&CascadeReport> {
        self.last_cascade.as_ref()
    }

    /// True when the board is settled: full and without matches
    pub fn is_settled(&self) -> bool {
        self.board.is_full() && !has_match(&self.board)
    }

    /// Adjacent swaps that would commit on the current board
    pub fn valid_swaps(&self) -> Vec<(Coord, Coord)> {
        find_valid_swaps(&self.board)
    }

    /// True when at least one swap would commit
    pub fn has_moves(&self) -> bool {
        !self.valid_swaps().is_empty()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let (rows, cols) = self.board.dimensions();
        self.board.write_u8_rows(&mut out.board);
        out.rows = rows;
        out.cols = cols;
        out.board_hash = crate::snapshot::board_hash(&out.board);
        out.score = self.score;
        out.moves = self.moves;
        out.seed = self.seed();
        out.palette_size = self.config.palette_size;
        out.selected = self.selected;
        out.state = self.resolver.state();
        out.last_swap = self.last_swap;
        out.last_cascade_depth = self.last_cascade.as_ref().map_or(0, CascadeReport::depth);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
