//! Ticket availability types.

use std::fmt;

/// Text shown in place of a seat count when no seats can be bought.
pub const UNAVAILABLE: &str = "无";

/// Remaining seats in one class of a train.
///
/// The ticketing service sends counts as strings and mixes real numbers with
/// markers such as `无` or `--`. Any plain run of ASCII digits is a count
/// (saturating at `u32::MAX`); everything else is treated as unavailable.
///
/// # Examples
///
/// ```
/// use ticket_query::domain::SeatCount;
///
/// assert_eq!(SeatCount::parse("257"), SeatCount::Count(257));
/// assert_eq!(SeatCount::parse("无"), SeatCount::Unavailable);
/// assert_eq!(SeatCount::parse("--"), SeatCount::Unavailable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatCount {
    Count(u32),
    Unavailable,
}

impl SeatCount {
    /// Classify a raw seat field from the service.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return SeatCount::Unavailable;
        }
        SeatCount::Count(raw.parse().unwrap_or(u32::MAX))
    }

    /// Whether this is a real number of seats (possibly zero).
    pub fn is_count(&self) -> bool {
        matches!(self, SeatCount::Count(_))
    }
}

impl fmt::Display for SeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatCount::Count(n) => write!(f, "{n}"),
            SeatCount::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// Pricing tier requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FareClass {
    #[default]
    Adult,
    /// Student fares.
    Discounted,
}

impl FareClass {
    /// The service's `purpose_codes` value.
    pub fn purpose_code(&self) -> &'static str {
        match self {
            FareClass::Adult => "ADULT",
            FareClass::Discounted => "0X00",
        }
    }
}

/// One bookable train leg returned by an availability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    /// Opaque train number, e.g. `6e000C761003`.
    pub train_no: String,
    /// Where the train run starts.
    pub start_station: String,
    /// Where the passenger boards.
    pub board_station: String,
    /// Where the passenger alights.
    pub to_station: String,
    /// Scheduled arrival, `HH:MM`.
    pub arrive_time: String,
    pub first_class: SeatCount,
    pub second_class: SeatCount,
}

impl TicketRecord {
    /// Whether at least one class has a real seat count.
    pub fn has_seats(&self) -> bool {
        self.first_class.is_count() || self.second_class.is_count()
    }
}
