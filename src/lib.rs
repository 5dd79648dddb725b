//! Match-three (workspace facade crate).
//!
//! This package exposes the rule engine as `match_three::{core, types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the argument
//! handling and autoplay loop of the headless runner binary.

pub mod cli;
pub mod runner;

pub use match_three_core as core;
pub use match_three_types as types;
