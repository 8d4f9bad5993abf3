//! Availability response DTOs.
//!
//! These map directly to the JSON returned by the query endpoint. Fields the
//! service sometimes omits are `Option` or defaulted.

use serde::Deserialize;

/// Top-level query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Result payload. Absent when the service has nothing to say.
    pub data: Option<QueryData>,
}

/// The `data` object of a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryData {
    /// One entry per train leg.
    pub datas: Option<Vec<RawTicket>>,
}

/// One train leg as sent by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTicket {
    /// Internal train number.
    pub train_no: String,

    /// Station where the train run starts.
    pub start_station_name: String,

    /// Station where this leg boards.
    pub from_station_name: String,

    /// Station where this leg alights.
    pub to_station_name: String,

    /// Scheduled arrival at `to_station_name`.
    pub arrive_time: String,

    /// First-class seats: digits or a marker such as `无`.
    #[serde(default)]
    pub zy_num: String,

    /// Second-class seats: digits or a marker such as `无`.
    #[serde(default)]
    pub ze_num: String,
}
