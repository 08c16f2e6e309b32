//! Pure seating logic for Airboard.
//!
//! This crate holds the cabin engine and nothing else: no terminal I/O,
//! no process exit, no logger installation. Operations take plain data and
//! return structured outcomes, so the interactive shell, the headless
//! harness and the tests all drive the same code.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`cabin`] | Boarding line, seat grid, free-seat pool, fill-order stack |
//! | [`config`] | Cabin dimensions, JSON loading and validation |
//! | [`error`] | Recoverable operation errors and config errors |
//! | [`layout`] | Read-only seat snapshots for renderers |
//! | [`seat`] | Linear index to one-based row/column math |
//!
//! ```
//! use airboard_logic::cabin::Cabin;
//! use airboard_logic::config::CabinConfig;
//! use airboard_logic::error::CabinError;
//!
//! let mut cabin = Cabin::new(&CabinConfig { rows: 1, seats_per_row: 2 }).unwrap();
//! cabin.enqueue(" Ada ").unwrap();
//! let boarded = cabin.board_next().unwrap();
//! assert_eq!(boarded.passenger, "Ada");
//! assert_eq!((boarded.seat.row, boarded.seat.column), (1, 1));
//! assert_eq!(cabin.board_next(), Err(CabinError::NoPassengersWaiting));
//! ```

pub mod cabin;
pub mod config;
pub mod error;
pub mod layout;
pub mod seat;
