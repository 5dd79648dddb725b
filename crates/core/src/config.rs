use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GameError};
use crate::scoring::ScoringTable;
use crate::types::{
    DEFAULT_COLS, DEFAULT_PALETTE_SIZE, DEFAULT_ROWS, MAX_DIMENSION, MAX_PALETTE_SIZE,
    MIN_DIMENSION, MIN_PALETTE_SIZE,
};

/// Session configuration, loadable from TOML.
///
/// ```toml
/// rows = 8
/// cols = 8
/// palette_size = 6
/// seed = 12345
/// require_seed = true
///
/// [scoring]
/// three = 10
/// four = 25
/// five_plus = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub palette_size: u8,
    /// Seed for tile generation; drawn at random when absent
    pub seed: Option<u64>,
    /// Reject configurations without an explicit seed
    pub require_seed: bool,
    pub scoring: ScoringTable,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: None,
            require_seed: false,
            scoring: ScoringTable::default(),
        }
    }
}

impl SessionConfig {
    /// Default board with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        SessionConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows < MIN_DIMENSION {
            return Err(GameError::InvalidConfig(format!(
                "rows must be >= {}, got {}",
                MIN_DIMENSION, self.rows
            )));
        }
        if self.cols < MIN_DIMENSION {
            return Err(GameError::InvalidConfig(format!(
                "cols must be >= {}, got {}",
                MIN_DIMENSION, self.cols
            )));
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(GameError::InvalidConfig(format!(
                "board must be at most {}x{}, got {}x{}",
                MAX_DIMENSION, MAX_DIMENSION, self.rows, self.cols
            )));
        }
        if self.palette_size < MIN_PALETTE_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "palette_size must be >= {}, got {}",
                MIN_PALETTE_SIZE, self.palette_size
            )));
        }
        if self.palette_size > MAX_PALETTE_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "palette_size must be <= {}, got {}",
                MAX_PALETTE_SIZE, self.palette_size
            )));
        }
        if self.require_seed && self.seed.is_none() {
            return Err(GameError::InvalidConfig(
                "a seed is required for deterministic sessions".into(),
            ));
        }
        Ok(())
    }
}
