//! A library to total up league points from plain-text match results.
//!
//! A stats file holds one finished match per line, host team first:
//!
//! ```text
//! Arsenal - Chelsea 2:1
//! ```
//!
//! A `Season` is read from such a file and queried for the points a single
//! team earned across it: three for a win, one for a draw, zero for a loss.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate regex;

mod game;
mod season;

pub use crate::game::{Game, Score};
pub use crate::season::Season;

/// Crate-specific errors.
#[derive(Debug, Fail)]
pub enum Error {
    /// This line of the stats file could not be parsed as a match result.
    #[fail(display = "invalid result line: {}", _0)]
    InvalidResultLine(String),
}
