//! Domain types for the availability lookup.
//!
//! Types here enforce their invariants at construction time: a
//! `StationCode` is always three uppercase letters and a `QueryDate` is
//! always a real, canonical date.

mod date;
mod station;
mod ticket;

pub use date::{DateError, QueryDate, normalize, normalize_at};
pub use station::{InvalidStationCode, StationCode};
pub use ticket::{FareClass, SeatCount, TicketRecord, UNAVAILABLE};
