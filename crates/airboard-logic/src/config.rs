//! Cabin dimensions and their validation.
//!
//! A cabin is a fixed grid of `rows × seats_per_row` seats. The shape is
//! chosen once, before the cabin is built, either from defaults, from a
//! JSON file, or from command-line overrides applied on top of either.
//!
//! ```
//! use airboard_logic::config::{validate_config, CabinConfig};
//!
//! let config = CabinConfig::from_json(r#"{ "rows": 10, "seats_per_row": 6 }"#).unwrap();
//! assert_eq!(config.total_seats(), 60);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound on seats in a single cabin.
pub const MAX_SEATS: usize = 10_000;

/// Default number of rows.
pub const DEFAULT_ROWS: u32 = 3;

/// Default number of seats in each row.
pub const DEFAULT_SEATS_PER_ROW: u32 = 4;

/// Shape of the seat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinConfig {
    /// Number of rows (≥ 1).
    pub rows: u32,
    /// Seats in each row (≥ 1).
    pub seats_per_row: u32,
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
        }
    }
}

impl CabinConfig {
    /// Total seat count, saturating at `usize::MAX` on overflow.
    pub fn total_seats(&self) -> usize {
        (self.rows as usize).saturating_mul(self.seats_per_row as usize)
    }

    /// Parse a config from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Validate a cabin config, returning all errors found.
pub fn validate_config(config: &CabinConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.rows == 0 {
        errors.push(ConfigError::ZeroRows);
    }
    if config.seats_per_row == 0 {
        errors.push(ConfigError::ZeroSeatsPerRow);
    }

    let total = config.total_seats();
    if total > MAX_SEATS {
        errors.push(ConfigError::TooManySeats(total));
    }

    errors
}
