//! Text rendering of cabin outcomes.
//!
//! The engine returns structured values; everything the user reads is
//! produced here.

use airboard_logic::cabin::{Boarded, Disembarked, Enqueued};
use airboard_logic::error::CabinError;
use airboard_logic::layout::CabinLayout;

/// Width of one seat cell, excluding the brackets.
pub const CELL_WIDTH: usize = 12;

/// Marker printed for an unoccupied seat.
pub const EMPTY_MARKER: &str = "Empty";

pub const RULE: &str = "---------------------------------------------------------";
pub const BANNER_RULE: &str = "===================================================";

pub fn enqueued(e: &Enqueued) -> String {
    format!("{} has been added to the boarding queue.", e.name)
}

pub fn boarded(b: &Boarded) -> String {
    format!("{} has been seated at {}", b.passenger, b.seat)
}

pub fn disembarked(d: &Disembarked) -> String {
    format!("{} (from {}) has disembarked.", d.passenger, d.seat)
}

pub fn cabin_error(err: &CabinError) -> String {
    match err {
        CabinError::InvalidName => "Passenger name cannot be empty.".to_string(),
        CabinError::NoPassengersWaiting => {
            "The boarding queue is empty. No passengers to board.".to_string()
        }
        CabinError::CabinFull { next_in_line } => {
            format!("The airplane is full. {next_in_line} could not be seated at this time.")
        }
        CabinError::CabinEmpty => {
            "The airplane is empty. All passengers have disembarked.".to_string()
        }
    }
}

/// Render any outcome of a cabin call.
pub fn outcome<T>(result: &Result<T, CabinError>, ok: impl FnOnce(&T) -> String) -> String {
    match result {
        Ok(value) => ok(value),
        Err(err) => cabin_error(err),
    }
}

/// Fixed-width seat map, one line per row. Names longer than a cell are cut.
pub fn layout(layout: &CabinLayout) -> String {
    let mut out = String::new();
    out.push_str("\nCurrent Airplane Seat Layout:\n");
    out.push_str(RULE);
    out.push('\n');

    for (r, seats) in layout.rows().enumerate() {
        let cells: Vec<String> = seats
            .iter()
            .map(|s| {
                let name = s.occupant.as_deref().unwrap_or(EMPTY_MARKER);
                format!("[{name:>w$.w$}]", w = CELL_WIDTH)
            })
            .collect();
        out.push_str(&format!("Row{:<2}: {}\n", r + 1, cells.join(" ")));
    }

    out.push_str(RULE);
    out
}

/// Rule-framed one-line notice.
pub fn framed(message: &str) -> String {
    format!("{BANNER_RULE}\n{message}\n{BANNER_RULE}")
}
