//! Interactive prompts used when no query flags are given.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::domain::{FareClass, QueryDate, normalize_at};
use crate::stations::StationTable;

use super::error::CliError;

/// A query assembled from the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideAnswers {
    pub from_city: String,
    pub to_city: String,
    pub date: QueryDate,
    pub fare: FareClass,
}

/// Keep a located city as the origin default only if it names a station.
pub fn default_origin(located: Option<String>, table: &StationTable) -> Option<String> {
    located.filter(|city| table.contains(city))
}

/// Ask for origin, destination, date and fare class.
///
/// `default_origin` is offered for an empty origin answer; without one the
/// origin is asked again until non-empty. The destination is always required.
/// An empty date means `today`.
pub fn run_guide<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_origin: Option<&str>,
    today: NaiveDate,
) -> Result<GuideAnswers, CliError> {
    let from_city = match default_origin {
        Some(city) => {
            let answer = prompt(input, output, &format!("Origin station (Enter for {city}): "))?;
            if answer.is_empty() {
                city.to_string()
            } else {
                answer
            }
        }
        None => prompt_non_empty(input, output, "Origin station: ")?,
    };

    let to_city = prompt_non_empty(input, output, "Destination station: ")?;

    let today_text = today.format("%Y-%m-%d");
    let date_text = prompt(
        input,
        output,
        &format!("Departure date (Enter for {today_text}): "),
    )?;
    let date = normalize_at(Some(&date_text), today)?;

    let fare = loop {
        let answer = prompt(input, output, "Adult ticket? Press Enter for yes, n for no: ")?;
        match answer.as_str() {
            "" => break FareClass::Adult,
            "n" | "N" => break FareClass::Discounted,
            _ => continue,
        }
    };

    Ok(GuideAnswers {
        from_city,
        to_city,
        date,
        fare,
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the query was complete",
        ));
    }
    Ok(line.trim().to_string())
}

fn prompt_non_empty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    loop {
        let answer = prompt(input, output, message)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
    }
}
