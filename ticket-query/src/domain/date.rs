//! Travel date normalization.
//!
//! Users type dates loosely (`8-26`, `2016:8:14`, `2016\8\14`, or nothing at
//! all). The availability endpoint only accepts `YYYY-MM-DD`, so every date
//! passes through [`normalize_at`] before it reaches a query.

use std::fmt;
use std::sync::OnceLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

/// Error returned when a date string cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid date format: {0:?} (expected e.g. 2016-08-14 or 8-14)")]
    InvalidFormat(String),
}

/// A canonical travel date.
///
/// Only produced by [`normalize`]/[`normalize_at`], so holding one means the
/// date is real and renders as zero-padded `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ticket_query::domain::normalize_at;
///
/// let today = NaiveDate::from_ymd_opt(2016, 8, 1).unwrap();
/// assert_eq!(normalize_at(Some("8-26"), today).unwrap().to_string(), "2016-08-26");
/// assert_eq!(normalize_at(Some("2016:8:14"), today).unwrap().to_string(), "2016-08-14");
/// assert_eq!(normalize_at(None, today).unwrap().to_string(), "2016-08-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryDate(NaiveDate);

impl QueryDate {
    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for QueryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Optional year plus separator, month, separator, day.
fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:([0-9]{4})([-\\:]))?([0-9]{1,2})([-\\:])([0-9]{2})$")
            .expect("date pattern is valid")
    })
}

/// Normalize user input against the local calendar date.
pub fn normalize(input: Option<&str>) -> Result<QueryDate, DateError> {
    normalize_at(input, Local::now().date_naive())
}

/// Normalize user input against an explicit `today`.
///
/// Empty input means `today`. A missing year is taken from `today`. When a
/// year is given, both separators must be the same character.
pub fn normalize_at(input: Option<&str>, today: NaiveDate) -> Result<QueryDate, DateError> {
    let input = input.map(str::trim).unwrap_or_default();
    if input.is_empty() {
        return Ok(QueryDate(today));
    }

    let invalid = || DateError::InvalidFormat(input.to_string());

    let caps = date_pattern().captures(input).ok_or_else(invalid)?;

    if let Some(year_sep) = caps.get(2)
        && year_sep.as_str() != &caps[4]
    {
        return Err(invalid());
    }

    let year = match caps.get(1) {
        Some(y) => y.as_str().parse().map_err(|_| invalid())?,
        None => today.year(),
    };
    let month: u32 = caps[3].parse().map_err(|_| invalid())?;
    let day: u32 = caps[5].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(QueryDate)
        .ok_or_else(invalid)
}
