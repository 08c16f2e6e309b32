//! Seat addressing.
//!
//! Seats are stored in one flat sequence. Index `i` sits in zero-based row
//! `i / seats_per_row` and column `i % seats_per_row`; everything that leaves
//! this crate uses one-based row and column numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A seat's flat index together with its one-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatPosition {
    /// Flat index into the seat grid (zero-based).
    pub index: usize,
    /// Row number, starting at 1.
    pub row: usize,
    /// Seat number within the row, starting at 1.
    pub column: usize,
}

impl SeatPosition {
    /// Position of `index` in a grid with `seats_per_row` columns.
    pub fn from_index(index: usize, seats_per_row: usize) -> Self {
        debug_assert!(seats_per_row > 0);
        Self {
            index,
            row: index / seats_per_row + 1,
            column: index % seats_per_row + 1,
        }
    }

    /// Flat index of a one-based `(row, column)`, or `None` if either is zero
    /// or the column does not exist.
    pub fn to_index(row: usize, column: usize, seats_per_row: usize) -> Option<usize> {
        if row == 0 || column == 0 || column > seats_per_row {
            return None;
        }
        (row - 1)
            .checked_mul(seats_per_row)?
            .checked_add(column - 1)
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {} Seat {}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seat_is_row_one_column_one() {
        let pos = SeatPosition::from_index(0, 4);
        assert_eq!((pos.row, pos.column), (1, 1));
    }

    #[test]
    fn wraps_to_next_row() {
        let pos = SeatPosition::from_index(4, 4);
        assert_eq!((pos.row, pos.column), (2, 1));
        let pos = SeatPosition::from_index(11, 4);
        assert_eq!((pos.row, pos.column), (3, 4));
    }

    #[test]
    fn single_column_grid() {
        for i in 0..5 {
            let pos = SeatPosition::from_index(i, 1);
            assert_eq!((pos.row, pos.column), (i + 1, 1));
        }
    }

    #[test]
    fn to_index_inverts_from_index() {
        for i in 0..30 {
            let pos = SeatPosition::from_index(i, 6);
            assert_eq!(SeatPosition::to_index(pos.row, pos.column, 6), Some(i));
        }
    }

    #[test]
    fn to_index_rejects_bad_coordinates() {
        assert_eq!(SeatPosition::to_index(0, 1, 4), None);
        assert_eq!(SeatPosition::to_index(1, 0, 4), None);
        assert_eq!(SeatPosition::to_index(1, 5, 4), None);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(SeatPosition::from_index(5, 4).to_string(), "Row 2 Seat 2");
    }
}
