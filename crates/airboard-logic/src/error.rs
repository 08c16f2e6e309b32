//! Error types.
//!
//! Every [`CabinError`] is an expected, recoverable condition: the cabin is
//! left exactly as it was and the caller decides how to report it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a cabin operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CabinError {
    /// Name was empty after trimming.
    #[error("passenger name cannot be empty")]
    InvalidName,
    /// Board requested with nobody in line.
    #[error("the boarding line is empty")]
    NoPassengersWaiting,
    /// Board requested with no free seat. The passenger stays in line.
    #[error("the cabin is full; {next_in_line} could not be seated")]
    CabinFull { next_in_line: String },
    /// Disembark requested with nobody seated.
    #[error("the cabin is empty")]
    CabinEmpty,
}

/// Cabin config rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cabin must have at least one row")]
    ZeroRows,
    #[error("each row must have at least one seat")]
    ZeroSeatsPerRow,
    #[error("cabin of {0} seats exceeds the limit of {max}", max = crate::config::MAX_SEATS)]
    TooManySeats(usize),
    #[error("invalid cabin config: {0}")]
    Parse(String),
}

/// A broken link between the seat grid, the free-seat pool and the
/// fill-order stack. Reaching one is a bug in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("seat {index} is empty but missing from the free-seat pool")]
    EmptySeatNotFree { index: usize },
    #[error("seat {index} is occupied but missing from the fill-order stack")]
    OccupiedSeatNotStacked { index: usize },
    #[error("seat {index} appears in both the free-seat pool and the fill-order stack")]
    BothFreeAndStacked { index: usize },
    #[error("seat {index} appears more than once in the free-seat pool")]
    DuplicateFree { index: usize },
    #[error("seat {index} appears more than once in the fill-order stack")]
    DuplicateStacked { index: usize },
    #[error("seat {index} is outside the grid")]
    OutOfRange { index: usize },
}
