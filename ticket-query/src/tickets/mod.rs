//! Seat availability queries.
//!
//! Builds the availability request from resolved station codes, then turns
//! the loosely-shaped JSON reply into [`TicketRecord`](crate::domain::TicketRecord)s:
//!
//! - seat fields become [`SeatCount`](crate::domain::SeatCount)s at the parsing boundary
//! - legs of multi-stop runs that board elsewhere are dropped
//! - legs with no real seat count in either class are dropped

mod client;
mod convert;
mod error;
mod service;
mod types;

pub use client::{QueryParams, TicketClient, TicketClientConfig, TicketSource};
pub use convert::{convert_ticket, parse_query_body, select_tickets};
pub use error::QueryError;
pub use service::TicketQueryService;
pub use types::{QueryData, QueryResponse, RawTicket};
