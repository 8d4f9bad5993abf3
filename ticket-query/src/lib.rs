//! Railway seat availability lookup.
//!
//! Answers "which trains from A to B on this date still have seats" against
//! the 12306 ticketing service: station names are resolved to codes through a
//! cached directory, dates are normalized, and the loosely-shaped reply is
//! filtered down to legs that can actually be booked.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod locate;
pub mod stations;
pub mod tickets;
