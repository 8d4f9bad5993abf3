//! Conversion from availability DTOs to ticket records.
//!
//! This is where raw seat strings become [`SeatCount`]s and where legs that
//! cannot be booked from the requested station are dropped.

use serde_json::Value;
use tracing::debug;

use crate::domain::{SeatCount, TicketRecord};

use super::error::QueryError;
use super::types::{QueryResponse, RawTicket};

/// Failure value the service sends instead of an object.
const FAILURE_SENTINEL: i64 = -1;

/// Parse a response body into raw ticket entries.
///
/// An empty body, the `-1` sentinel, `null`, a missing results collection,
/// or an empty one all mean there is no service, not a malformed reply.
pub fn parse_query_body(body: &str) -> Result<Vec<RawTicket>, QueryError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(QueryError::NoService);
    }

    let value: Value = serde_json::from_str(body).map_err(|e| QueryError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    if value.is_null() || value.as_i64() == Some(FAILURE_SENTINEL) {
        return Err(QueryError::NoService);
    }

    let response: QueryResponse = serde_json::from_value(value).map_err(|e| QueryError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    match response.data.and_then(|d| d.datas) {
        Some(datas) if !datas.is_empty() => Ok(datas),
        _ => Err(QueryError::NoService),
    }
}

/// Convert a single raw entry to a ticket record.
pub fn convert_ticket(raw: RawTicket) -> TicketRecord {
    TicketRecord {
        first_class: SeatCount::parse(&raw.zy_num),
        second_class: SeatCount::parse(&raw.ze_num),
        train_no: raw.train_no,
        start_station: raw.start_station_name,
        board_station: raw.from_station_name,
        to_station: raw.to_station_name,
        arrive_time: raw.arrive_time,
    }
}

/// Keep the entries that can actually be booked from `board_station`.
///
/// An entry survives when at least one class has a real seat count and it
/// boards at exactly `board_station`. The service's order is preserved.
pub fn select_tickets(raw: Vec<RawTicket>, board_station: &str) -> Vec<TicketRecord> {
    raw.into_iter()
        .map(convert_ticket)
        .filter(|record| {
            let keep = record.has_seats() && record.board_station == board_station;
            if !keep {
                debug!(
                    train = %record.train_no,
                    board = %record.board_station,
                    "dropping leg"
                );
            }
            keep
        })
        .collect()
}
