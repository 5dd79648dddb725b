//! Cascade resolver - the match/remove/fall/refill state machine
//!
//! ```text
//!   Idle ──begin──▶ Matching ──matches──▶ Resolving ──▶ Filling ──▶ Matching ...
//!                      │
//!                      └──no matches──▶ Idle
//! ```
//!
//! [`Resolver::step`] performs exactly one transition so a presentation layer can
//! animate each pass; [`Resolver::resolve_cascade`] drives the machine until it is
//! back in `Idle`. A detection pass that finds nothing is the only exit, so the loop
//! tolerates any number of chained passes.

use crate::board::Board;
use crate::error::GameError;
use crate::gravity;
use crate::matcher::{detect, Match, MatchSet};
use crate::rng::ColorSource;
use crate::scoring::ScoringTable;
use crate::types::{Cell, ResolverState};

/// What one pass of the cascade removed and scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Matches found by this pass, horizontal first
    pub matches: Vec<Match>,
    /// Number of distinct cells removed (overlaps counted once)
    pub cleared: usize,
    /// Points added by this pass
    pub points: u32,
}

/// Every pass of one cascade, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub passes: Vec<PassReport>,
}

impl CascadeReport {
    /// Number of passes that removed tiles (1 = no chain reaction)
    pub fn depth(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn total_points(&self) -> u32 {
        self.passes
            .iter()
            .fold(0u32, |acc, p| acc.saturating_add(p.points))
    }

    pub fn total_cleared(&self) -> usize {
        self.passes.iter().map(|p| p.cleared).sum()
    }

    pub fn match_count(&self) -> usize {
        self.passes.iter().map(|p| p.matches.len()).sum()
    }
}

/// Cascade state machine
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    state: ResolverState,
    scoring: ScoringTable,
    /// Matches found by the last `Matching` step, consumed by `Resolving`
    pending: Vec<Match>,
    report: CascadeReport,
}

impl Resolver {
    pub fn new(scoring: ScoringTable) -> Self {
        Self {
            scoring,
            ..Self::default()
        }
    }

    /// Current phase; `Idle` whenever no cascade is in progress
    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn scoring(&self) -> &ScoringTable {
        &self.scoring
    }

    /// Start a cascade: `Idle -> Matching`. No-op if one is already running.
    pub fn begin(&mut self) {
        if self.state == ResolverState::Idle {
            self.state = ResolverState::Matching;
            self.pending.clear();
            self.report = CascadeReport::default();
        }
    }

    /// Perform one transition and return the new state.
    ///
    /// In `Idle` this does nothing. Points are added to `score` during the
    /// `Resolving -> Filling` transition.
    pub fn step<S: ColorSource + ?Sized>(
        &mut self,
        board: &mut Board,
        score: &mut u32,
        source: &mut S,
    ) -> Result<ResolverState, GameError> {
        let result = self.transition(board, score, source);
        if result.is_err() {
            // A failed transition leaves nothing sensible to resume.
            self.state = ResolverState::Idle;
            self.pending.clear();
        }
        result
    }

    fn transition<S: ColorSource + ?Sized>(
        &mut self,
        board: &mut Board,
        score: &mut u32,
        source: &mut S,
    ) -> Result<ResolverState, GameError> {
        self.state = match self.state {
            ResolverState::Idle => ResolverState::Idle,
            ResolverState::Matching => {
                self.pending = detect(board);
                if self.pending.is_empty() {
                    ResolverState::Idle
                } else {
                    ResolverState::Resolving
                }
            }
            ResolverState::Resolving => {
                let matches = std::mem::take(&mut self.pending);
                let set = MatchSet::from_matches(&matches);
                let points = self.scoring.score_matches(&matches);

                for coord in set.iter() {
                    board.set(coord.row, coord.col, Cell::Empty)?;
                }
                *score = score.saturating_add(points);

                self.report.passes.push(PassReport {
                    matches,
                    cleared: set.len(),
                    points,
                });
                ResolverState::Filling
            }
            ResolverState::Filling => {
                gravity::apply(board, source);
                ResolverState::Matching
            }
        };
        Ok(self.state)
    }

    /// Take the report of the cascade driven so far, leaving an empty one
    pub fn take_report(&mut self) -> CascadeReport {
        std::mem::take(&mut self.report)
    }

    /// Run a full cascade to completion.
    ///
    /// On return the state is `Idle` and the board has no matches and no empty
    /// cells. A board that starts without matches returns an empty report.
    pub fn resolve_cascade<S: ColorSource + ?Sized>(
        &mut self,
        board: &mut Board,
        score: &mut u32,
        source: &mut S,
    ) -> Result<CascadeReport, GameError> {
        self.begin();
        while self.step(board, score, source)? != ResolverState::Idle {}
        Ok(self.take_report())
    }
}
