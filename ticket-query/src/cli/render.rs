//! Plain-text output.

use std::io::{self, Write};

use crate::domain::TicketRecord;

/// Column header for ticket listings.
pub const HEADER: &str = "Train        Start->Board->To Arrive 1st 2nd";

/// Write a ticket listing: the header, then one line per record.
pub fn render_tickets<W: Write>(out: &mut W, records: &[TicketRecord]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for r in records {
        writeln!(
            out,
            "{} {}->{}->{} {}  {}   {}",
            r.train_no,
            r.start_station,
            r.board_station,
            r.to_station,
            r.arrive_time,
            r.first_class,
            r.second_class
        )?;
    }
    Ok(())
}

/// Write station names on one line, space separated.
pub fn render_stations<'a, W, I>(out: &mut W, names: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    let mut first = true;
    for name in names {
        if !first {
            write!(out, " ")?;
        }
        write!(out, "{name}")?;
        first = false;
    }
    writeln!(out)
}
