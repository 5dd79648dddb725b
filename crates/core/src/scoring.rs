//! Scoring module - points per match
//!
//! Every match is scored on its own length, even when it shares tiles with another
//! match of the same pass (an L or T shape scores twice but is removed once).
//! There is no cascade multiplier: a chained pass scores exactly like the first.

use serde::{Deserialize, Serialize};

use crate::matcher::Match;
use crate::types::{DEFAULT_MATCH_SCORES, MIN_RUN};

/// Points awarded per match, by run length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTable {
    /// Run of exactly three
    pub three: u32,
    /// Run of exactly four
    pub four: u32,
    /// Run of five or more
    pub five_plus: u32,
}

impl ScoringTable {
    pub const fn new(three: u32, four: u32, five_plus: u32) -> Self {
        Self {
            three,
            four,
            five_plus,
        }
    }

    /// Points for a single run of `len` tiles; runs shorter than three score nothing
    pub fn points_for(&self, len: usize) -> u32 {
        match len {
            0..=2 => 0,
            3 => self.three,
            4 => self.four,
            _ => self.five_plus,
        }
    }

    /// Sum of the points of every match, each counted independently
    pub fn score_matches(&self, matches: &[Match]) -> u32 {
        matches
            .iter()
            .filter(|m| m.len() >= MIN_RUN)
            .fold(0u32, |acc, m| acc.saturating_add(self.points_for(m.len())))
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        let [three, four, five_plus] = DEFAULT_MATCH_SCORES;
        Self::new(three, four, five_plus)
    }
}
