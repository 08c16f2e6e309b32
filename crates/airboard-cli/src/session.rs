//! The interactive menu loop.
//!
//! A session owns nothing global: it takes a [`Cabin`], drives it from a
//! line-based reader, writes everything to a writer, and hands the cabin
//! back when the user exits or input ends.

use std::io::{self, BufRead, Write};

use airboard_logic::cabin::Cabin;
use rand::Rng;

use crate::names::generate_name;
use crate::render;

/// Largest batch accepted by "Create Passengers".
pub const MAX_BULK: usize = 1_000;

/// Menu entries, numbered 1 to 6 on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPassenger,
    Board,
    Disembark,
    ShowLayout,
    CreatePassengers,
    Exit,
}

/// Why a menu line was not a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange(i64),
}

impl MenuChoice {
    pub fn parse(line: &str) -> Result<Self, ChoiceError> {
        let n: i64 = line.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        match n {
            1 => Ok(Self::AddPassenger),
            2 => Ok(Self::Board),
            3 => Ok(Self::Disembark),
            4 => Ok(Self::ShowLayout),
            5 => Ok(Self::CreatePassengers),
            6 => Ok(Self::Exit),
            other => Err(ChoiceError::OutOfRange(other)),
        }
    }
}

fn menu() -> String {
    format!(
        "{rule}\n     Airplane Boarding and Disembarking Menu\n{rule}\n\
         1. Add Passenger to Boarding Queue\n\
         2. Board Passenger\n\
         3. Disembark Passenger\n\
         4. Display Current Seat Layout\n\
         5. Create Passengers\n\
         6. Exit\n\
         Enter your choice (1-6): ",
        rule = render::BANNER_RULE
    )
}

pub fn banner(cabin: &Cabin) -> String {
    format!(
        "{rule}\nAirplane Boarding Simulator\n\
         Cabin: {} rows x {} seats ({} total)\n{rule}\n",
        cabin.rows(),
        cabin.seats_per_row(),
        cabin.capacity(),
        rule = render::BANNER_RULE
    )
}

/// Interactive session over arbitrary I/O.
pub struct Session<R, W, G> {
    cabin: Cabin,
    input: R,
    out: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(cabin: Cabin, input: R, out: W, rng: G) -> Self {
        Self {
            cabin,
            input,
            out,
            rng,
        }
    }

    /// Run until the user picks Exit or input ends, then return the cabin.
    pub fn run(mut self) -> io::Result<Cabin> {
        write!(self.out, "{}", banner(&self.cabin))?;

        loop {
            write!(self.out, "{}", menu())?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(ChoiceError::NotANumber) => {
                    log::debug!("menu input {line:?} is not a number");
                    writeln!(self.out, "{}\n", render::framed("Invalid input. Please enter a number."))?;
                    continue;
                }
                Err(ChoiceError::OutOfRange(n)) => {
                    log::debug!("menu choice {n} out of range");
                    writeln!(
                        self.out,
                        "{}\n",
                        render::framed("Invalid choice. Please enter a number between 1 and 6.")
                    )?;
                    continue;
                }
            };

            if !self.dispatch(choice)? {
                break;
            }
            writeln!(self.out)?;
        }

        writeln!(
            self.out,
            "{}",
            render::framed("Exiting application. Goodbye!")
        )?;
        self.out.flush()?;
        Ok(self.cabin)
    }

    /// Perform one menu action. Returns `false` when the session should end.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::AddPassenger => {
                write!(self.out, "Enter passenger name: ")?;
                self.out.flush()?;
                let Some(name) = self.read_line()? else {
                    return Ok(false);
                };
                let result = self.cabin.enqueue(&name);
                writeln!(self.out, "{}", render::outcome(&result, render::enqueued))?;
            }
            MenuChoice::Board => {
                let result = self.cabin.board_next();
                writeln!(self.out, "{}", render::outcome(&result, render::boarded))?;
            }
            MenuChoice::Disembark => {
                let result = self.cabin.disembark_last();
                writeln!(self.out, "{}", render::outcome(&result, render::disembarked))?;
            }
            MenuChoice::ShowLayout => {
                writeln!(self.out, "{}", render::layout(&self.cabin.snapshot_layout()))?;
            }
            MenuChoice::CreatePassengers => {
                write!(self.out, "How many passengers should be created: ")?;
                self.out.flush()?;
                let Some(line) = self.read_line()? else {
                    return Ok(false);
                };
                match line.trim().parse::<usize>() {
                    Ok(count) if count <= MAX_BULK => self.create_passengers(count)?,
                    Ok(_) => writeln!(
                        self.out,
                        "{}",
                        render::framed(&format!(
                            "Too many passengers. Please enter a number up to {MAX_BULK}."
                        ))
                    )?,
                    Err(_) => writeln!(
                        self.out,
                        "{}",
                        render::framed("Invalid input. Please enter a number.")
                    )?,
                }
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn create_passengers(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            let name = generate_name(&mut self.rng);
            let result = self.cabin.enqueue(&name);
            writeln!(self.out, "{}", render::outcome(&result, render::enqueued))?;
        }
        log::info!("created {count} random passengers, line length {}", self.cabin.queue_len());
        writeln!(
            self.out,
            "\nSuccessfully added {count} random passengers to the queue."
        )
    }

    /// Next input line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}
