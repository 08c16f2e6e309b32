//! The cabin engine.
//!
//! A [`Cabin`] owns four structures that move together:
//!
//! | Structure | Container | Order |
//! |-----------|-----------|-------|
//! | Boarding line | `VecDeque<String>` | FIFO, head boards next |
//! | Seat grid | `Vec<Option<String>>` | flat, row-major |
//! | Free-seat pool | `VecDeque<usize>` | FIFO, starts ascending, vacated seats rejoin at the tail |
//! | Fill-order stack | `Vec<usize>` | LIFO, top disembarks next |
//!
//! After every operation each seat index is either empty and in the pool
//! exactly once, or occupied and on the stack exactly once. A refused
//! operation leaves the cabin as it found it.
//!
//! Seat choice never scans the grid: boarding takes the pool head, so once
//! seats have been vacated and refilled, rows no longer fill in ascending
//! order. That is the defined policy, not a defect.
//!
//! ```
//! use airboard_logic::cabin::Cabin;
//! use airboard_logic::config::CabinConfig;
//!
//! let mut cabin = Cabin::new(&CabinConfig { rows: 2, seats_per_row: 2 }).unwrap();
//! for name in ["Ada", "Grace", "Linus"] {
//!     cabin.enqueue(name).unwrap();
//! }
//! cabin.board_next().unwrap();
//! cabin.board_next().unwrap();
//! let off = cabin.disembark_last().unwrap();
//! assert_eq!(off.passenger, "Grace");
//! assert_eq!(cabin.queue_len(), 1);
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{validate_config, CabinConfig};
use crate::error::{CabinError, ConfigError, InvariantViolation};
use crate::layout::{CabinLayout, SeatView};
use crate::seat::SeatPosition;

/// A passenger accepted into the boarding line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enqueued {
    /// Trimmed name as stored.
    pub name: String,
    /// Line length after the append.
    pub queue_len: usize,
}

/// A passenger moved from the line into a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boarded {
    pub passenger: String,
    pub seat: SeatPosition,
}

/// A passenger removed from a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disembarked {
    pub passenger: String,
    pub seat: SeatPosition,
}

/// Fixed-size airplane cabin.
#[derive(Debug, Clone)]
pub struct Cabin {
    rows: usize,
    seats_per_row: usize,
    line: VecDeque<String>,
    seats: Vec<Option<String>>,
    free: VecDeque<usize>,
    fill_order: Vec<usize>,
}

impl Cabin {
    /// Build an empty cabin. Every seat starts in the free-seat pool in
    /// ascending index order.
    pub fn new(config: &CabinConfig) -> Result<Self, ConfigError> {
        if let Some(err) = validate_config(config).into_iter().next() {
            return Err(err);
        }

        let total = config.total_seats();
        Ok(Self {
            rows: config.rows as usize,
            seats_per_row: config.seats_per_row as usize,
            line: VecDeque::new(),
            seats: vec![None; total],
            free: (0..total).collect(),
            fill_order: Vec::with_capacity(total),
        })
    }

    /// Append a passenger to the tail of the boarding line.
    ///
    /// Surrounding whitespace is stripped; a name that is empty afterwards is
    /// refused with [`CabinError::InvalidName`]. Duplicate names are allowed.
    pub fn enqueue(&mut self, name: &str) -> Result<Enqueued, CabinError> {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("enqueue refused: empty name");
            return Err(CabinError::InvalidName);
        }

        self.line.push_back(name.to_string());
        log::debug!("enqueued {name:?}, line length {}", self.line.len());
        Ok(Enqueued {
            name: name.to_string(),
            queue_len: self.line.len(),
        })
    }

    /// Seat the passenger at the head of the line in the seat at the head of
    /// the free-seat pool.
    ///
    /// An empty line is checked before a full cabin. When the cabin is full
    /// the head passenger is reported and stays in line.
    pub fn board_next(&mut self) -> Result<Boarded, CabinError> {
        let Some(passenger) = self.line.pop_front() else {
            log::debug!("board refused: line empty");
            return Err(CabinError::NoPassengersWaiting);
        };
        let Some(index) = self.free.pop_front() else {
            log::debug!("board refused: cabin full, {passenger:?} keeps waiting");
            let next_in_line = passenger.clone();
            self.line.push_front(passenger);
            return Err(CabinError::CabinFull { next_in_line });
        };

        self.seats[index] = Some(passenger.clone());
        self.fill_order.push(index);

        let seat = self.position(index);
        log::debug!("boarded {passenger:?} at {seat} (index {index})");
        Ok(Boarded { passenger, seat })
    }

    /// Remove the most recently seated passenger and return the seat to the
    /// tail of the free-seat pool.
    pub fn disembark_last(&mut self) -> Result<Disembarked, CabinError> {
        let Some(index) = self.fill_order.pop() else {
            log::debug!("disembark refused: cabin empty");
            return Err(CabinError::CabinEmpty);
        };
        let Some(passenger) = self.seats[index].take() else {
            unreachable!("stacked seat {index} has no occupant");
        };
        self.free.push_back(index);

        let seat = self.position(index);
        log::debug!("disembarked {passenger:?} from {seat} (index {index})");
        Ok(Disembarked { passenger, seat })
    }

    /// Row-major copy of every seat as it is right now.
    pub fn snapshot_layout(&self) -> CabinLayout {
        let seats = self
            .seats
            .iter()
            .enumerate()
            .map(|(index, occupant)| {
                let pos = self.position(index);
                SeatView {
                    row: pos.row,
                    column: pos.column,
                    occupant: occupant.clone(),
                }
            })
            .collect();
        CabinLayout {
            seats_per_row: self.seats_per_row,
            seats,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// Passengers waiting to board, head of line first.
    pub fn waiting(&self) -> impl Iterator<Item = &str> {
        self.line.iter().map(String::as_str)
    }

    pub fn queue_len(&self) -> usize {
        self.line.len()
    }

    pub fn next_in_line(&self) -> Option<&str> {
        self.line.front().map(String::as_str)
    }

    /// Number of empty seats.
    pub fn free_seats(&self) -> usize {
        self.free.len()
    }

    /// Number of occupied seats.
    pub fn occupied(&self) -> usize {
        self.fill_order.len()
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.fill_order.is_empty()
    }

    /// Passenger in seat `index`, `None` if empty or out of range.
    pub fn occupant(&self, index: usize) -> Option<&str> {
        self.seats.get(index)?.as_deref()
    }

    /// Occupied seat indices, oldest fill first. The last item disembarks next.
    pub fn fill_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.fill_order.iter().copied()
    }

    /// Free seat indices, the first item is assigned next.
    pub fn free_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.free.iter().copied()
    }

    /// One-based position of a seat index in this cabin.
    pub fn position(&self, index: usize) -> SeatPosition {
        SeatPosition::from_index(index, self.seats_per_row)
    }

    /// Verify that the free-seat pool and the fill-order stack partition the
    /// seat indices and agree with the grid.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let capacity = self.seats.len();
        let mut in_free = vec![false; capacity];
        let mut in_stack = vec![false; capacity];

        for &index in &self.free {
            let slot = in_free
                .get_mut(index)
                .ok_or(InvariantViolation::OutOfRange { index })?;
            if *slot {
                return Err(InvariantViolation::DuplicateFree { index });
            }
            *slot = true;
        }
        for &index in &self.fill_order {
            let slot = in_stack
                .get_mut(index)
                .ok_or(InvariantViolation::OutOfRange { index })?;
            if *slot {
                return Err(InvariantViolation::DuplicateStacked { index });
            }
            *slot = true;
        }

        for (index, occupant) in self.seats.iter().enumerate() {
            match (occupant.is_some(), in_free[index], in_stack[index]) {
                (false, true, false) | (true, false, true) => {}
                (_, true, true) => return Err(InvariantViolation::BothFreeAndStacked { index }),
                (false, false, _) => return Err(InvariantViolation::EmptySeatNotFree { index }),
                (true, _, false) => {
                    return Err(InvariantViolation::OccupiedSeatNotStacked { index })
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabin(rows: u32, seats_per_row: u32) -> Cabin {
        Cabin::new(&CabinConfig {
            rows,
            seats_per_row,
        })
        .unwrap()
    }

    #[test]
    fn new_cabin_pool_is_ascending() {
        let c = cabin(3, 4);
        assert_eq!(c.capacity(), 12);
        assert_eq!(c.free_order().collect::<Vec<_>>(), (0..12).collect::<Vec<_>>());
        assert!(c.is_empty());
        assert!(!c.is_full());
        assert_eq!(c.queue_len(), 0);
        c.check_invariants().unwrap();
    }

    #[test]
    fn new_rejects_zero_rows() {
        let err = Cabin::new(&CabinConfig {
            rows: 0,
            seats_per_row: 4,
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroRows);
    }

    #[test]
    fn enqueue_trims_name() {
        let mut c = cabin(1, 1);
        let e = c.enqueue("  Alice \t").unwrap();
        assert_eq!(e.name, "Alice");
        assert_eq!(e.queue_len, 1);
        assert_eq!(c.board_next().unwrap().passenger, "Alice");
        assert_eq!(c.occupant(0), Some("Alice"));
    }

    #[test]
    fn enqueue_blank_is_invalid_and_line_unchanged() {
        let mut c = cabin(1, 1);
        c.enqueue("Bob").unwrap();
        assert_eq!(c.enqueue("   "), Err(CabinError::InvalidName));
        assert_eq!(c.enqueue(""), Err(CabinError::InvalidName));
        assert_eq!(c.waiting().collect::<Vec<_>>(), vec!["Bob"]);
    }

    #[test]
    fn duplicate_names_get_distinct_seats() {
        let mut c = cabin(1, 2);
        c.enqueue("Sam").unwrap();
        c.enqueue("Sam").unwrap();
        let a = c.board_next().unwrap();
        let b = c.board_next().unwrap();
        assert_ne!(a.seat.index, b.seat.index);
        assert_eq!(c.disembark_last().unwrap().seat.index, b.seat.index);
    }

    #[test]
    fn board_on_fresh_cabin_has_no_one_waiting() {
        let mut c = cabin(2, 2);
        assert_eq!(c.board_next(), Err(CabinError::NoPassengersWaiting));
        c.check_invariants().unwrap();
    }

    #[test]
    fn empty_line_reported_before_full_cabin() {
        let mut c = cabin(1, 1);
        c.enqueue("A").unwrap();
        c.board_next().unwrap();
        assert!(c.is_full());
        assert_eq!(c.board_next(), Err(CabinError::NoPassengersWaiting));
    }

    #[test]
    fn full_cabin_keeps_passenger_in_line() {
        let mut c = cabin(1, 2);
        for n in ["A", "B", "C"] {
            c.enqueue(n).unwrap();
        }
        let a = c.board_next().unwrap();
        assert_eq!((a.passenger.as_str(), a.seat.index, a.seat.row, a.seat.column), ("A", 0, 1, 1));
        let b = c.board_next().unwrap();
        assert_eq!((b.passenger.as_str(), b.seat.index, b.seat.row, b.seat.column), ("B", 1, 1, 2));

        assert_eq!(
            c.board_next(),
            Err(CabinError::CabinFull {
                next_in_line: "C".into()
            })
        );
        assert_eq!(c.next_in_line(), Some("C"));
        assert_eq!(c.queue_len(), 1);
        c.check_invariants().unwrap();
    }

    #[test]
    fn disembark_on_fresh_cabin_is_empty() {
        let mut c = cabin(2, 2);
        assert_eq!(c.disembark_last(), Err(CabinError::CabinEmpty));
        assert_eq!(c.free_seats(), 4);
    }

    #[test]
    fn disembark_is_lifo() {
        let mut c = cabin(2, 3);
        let names = ["A", "B", "C", "D"];
        for n in names {
            c.enqueue(n).unwrap();
            c.board_next().unwrap();
        }
        let off: Vec<_> = (0..4)
            .map(|_| c.disembark_last().unwrap().passenger)
            .collect();
        assert_eq!(off, vec!["D", "C", "B", "A"]);
        assert!(c.is_empty());
    }

    #[test]
    fn vacated_seat_rejoins_pool_tail() {
        let mut c = cabin(1, 3);
        for n in ["A", "B", "C", "D"] {
            c.enqueue(n).unwrap();
        }
        c.board_next().unwrap(); // A -> 0
        c.disembark_last().unwrap(); // 0 freed, pool = [1, 2, 0]
        assert_eq!(c.free_order().collect::<Vec<_>>(), vec![1, 2, 0]);

        assert_eq!(c.board_next().unwrap().seat.index, 1);
        assert_eq!(c.board_next().unwrap().seat.index, 2);
        let d = c.board_next().unwrap();
        assert_eq!((d.passenger.as_str(), d.seat.index), ("D", 0));
        c.check_invariants().unwrap();
    }

    #[test]
    fn disembark_reports_position() {
        let mut c = cabin(3, 4);
        for i in 0..6 {
            c.enqueue(&format!("P{i}")).unwrap();
            c.board_next().unwrap();
        }
        let d = c.disembark_last().unwrap();
        assert_eq!(d.passenger, "P5");
        assert_eq!(d.seat, SeatPosition { index: 5, row: 2, column: 2 });
        assert_eq!(c.occupant(5), None);
    }

    #[test]
    fn snapshot_is_row_major_and_detached() {
        let mut c = cabin(2, 2);
        c.enqueue("A").unwrap();
        c.board_next().unwrap();
        let snap = c.snapshot_layout();
        assert_eq!(snap.seats.len(), 4);
        assert_eq!(snap.seats[0].occupant.as_deref(), Some("A"));
        assert_eq!((snap.seats[3].row, snap.seats[3].column), (2, 2));

        c.disembark_last().unwrap();
        assert_eq!(snap.seats[0].occupant.as_deref(), Some("A"));
        assert!(c.snapshot_layout().seats.iter().all(SeatView::is_empty));
    }

    #[test]
    fn occupant_out_of_range_is_none() {
        let c = cabin(1, 1);
        assert_eq!(c.occupant(99), None);
    }

    #[test]
    fn invariant_check_catches_duplicate_free_index() {
        let mut c = cabin(1, 2);
        c.free.push_back(0);
        assert_eq!(
            c.check_invariants(),
            Err(InvariantViolation::DuplicateFree { index: 0 })
        );
    }

    #[test]
    fn invariant_check_catches_unstacked_occupant() {
        let mut c = cabin(1, 2);
        c.free.retain(|&i| i != 1);
        c.seats[1] = Some("Ghost".into());
        assert_eq!(
            c.check_invariants(),
            Err(InvariantViolation::OccupiedSeatNotStacked { index: 1 })
        );
    }

    #[test]
    fn invariant_check_catches_seat_in_both() {
        let mut c = cabin(1, 2);
        c.fill_order.push(0);
        assert_eq!(
            c.check_invariants(),
            Err(InvariantViolation::BothFreeAndStacked { index: 0 })
        );
    }

    #[test]
    fn invariant_check_catches_out_of_range() {
        let mut c = cabin(1, 2);
        c.fill_order.push(7);
        assert_eq!(
            c.check_invariants(),
            Err(InvariantViolation::OutOfRange { index: 7 })
        );
    }

    #[test]
    fn invariant_check_catches_lost_seat() {
        let mut c = cabin(1, 2);
        c.free.pop_back();
        assert_eq!(
            c.check_invariants(),
            Err(InvariantViolation::EmptySeatNotFree { index: 1 })
        );
    }
}
