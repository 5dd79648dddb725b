//! Core rule engine - pure, deterministic, and testable
//!
//! This crate owns the rules of a tile-matching puzzle: the board, match detection,
//! gravity and refill, the cascade state machine, swaps, and scoring.
//! It has **zero dependencies** on UI, timing, or I/O beyond loading a config file:
//!
//! - **Deterministic**: the same seed and the same swaps produce identical boards
//! - **Synchronous**: a swap and its whole cascade resolve within one call
//! - **Testable**: colors come from an injectable [`ColorSource`]
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of cells with bounds-checked accessors
//! - [`matcher`]: detection of horizontal and vertical runs of three or more
//! - [`gravity`]: per-column compaction and random refill
//! - [`resolver`]: the `Idle -> Matching -> Resolving -> Filling` cascade machine
//! - [`swap`]: adjacency validation and commit/revert of tentative swaps
//! - [`scoring`]: points per match (10 / 25 / 50 for 3 / 4 / 5+)
//! - [`session`]: [`GameSession`], the owner of one board and its score
//! - [`snapshot`]: renderer-facing export of a session
//!
//! # Game Rules
//!
//! - A swap is only legal between edge-adjacent tiles
//! - A swap that creates no match is undone
//! - Every match scores on its own; overlapping tiles are removed once
//! - Removed tiles are replaced by gravity and fresh random tiles, and the board is
//!   scanned again until no match remains
//!
//! # Example
//!
//! ```
//! use match_three_core::{new_session, TurnOutcome};
//!
//! let mut session = new_session(8, 8, 6, Some(12345)).unwrap();
//! assert_eq!(session.score(), 0);
//!
//! // Play the first available move
//! let (a, b) = session.valid_swaps()[0];
//! session.select(a).unwrap();
//! let outcome = session.swap_with(b).unwrap();
//!
//! assert!(matches!(outcome, TurnOutcome::Committed(_)));
//! assert!(session.score() >= 10);
//! assert!(session.is_settled());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod gravity;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod swap;

pub use match_three_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::SessionConfig;
pub use error::{ConfigError, GameError};
pub use matcher::{detect, has_match, Match, MatchSet};
pub use resolver::{CascadeReport, PassReport, Resolver};
pub use rng::{ColorSource, ScriptedColors, TileRng};
pub use scoring::ScoringTable;
pub use session::{new_session, ClickOutcome, GameSession, TurnOutcome};
pub use snapshot::GameSnapshot;
pub use swap::{find_valid_swaps, request_swap, SwapRecord};
