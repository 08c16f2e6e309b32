//! Read-only seat snapshots.
//!
//! A snapshot is a copy taken at call time: later cabin operations never
//! change a snapshot already handed out.

use serde::{Deserialize, Serialize};

/// One seat as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    /// Row number, starting at 1.
    pub row: usize,
    /// Seat number within the row, starting at 1.
    pub column: usize,
    /// Passenger in the seat, `None` when empty.
    pub occupant: Option<String>,
}

impl SeatView {
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Row-major seat snapshot with the grid width attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinLayout {
    pub seats_per_row: usize,
    pub seats: Vec<SeatView>,
}

impl CabinLayout {
    /// Seats grouped into rows, front row first.
    pub fn rows(&self) -> impl Iterator<Item = &[SeatView]> {
        self.seats.chunks(self.seats_per_row.max(1))
    }

    pub fn row_count(&self) -> usize {
        self.seats.len().div_ceil(self.seats_per_row.max(1))
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_empty()).count()
    }
}
