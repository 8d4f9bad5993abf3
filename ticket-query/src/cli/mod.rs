//! Command-line front end.
//!
//! Turns flags (or interactive answers) into calls on the station directory
//! and the query service, and writes the results. Nothing in here exits the
//! process; `main` maps the returned error to a message and status.

mod args;
mod error;
mod guide;
mod render;

use std::io::{self, Write};

use chrono::Local;
use tracing::info;

use crate::locate::OriginLocator;
use crate::stations::{StationCache, StationClient, StationDirectory};
use crate::tickets::{TicketClient, TicketQueryService};

pub use args::{Args, Mode};
pub use error::CliError;
pub use guide::{GuideAnswers, default_origin, run_guide};
pub use render::{HEADER, render_stations, render_tickets};

/// Run one invocation.
pub async fn run(args: Args) -> Result<(), CliError> {
    let mode = args.mode()?;
    let config = args.config();

    let directory = StationDirectory::new(
        StationClient::new(config.station_client())?,
        StationCache::new(config.station_cache()),
    );
    if args.refresh {
        let count = directory.refresh().await?;
        info!(stations = count, "station table refreshed");
    }

    let service = TicketQueryService::new(directory, TicketClient::new(config.ticket_client())?);
    let mut stdout = io::stdout().lock();

    match mode {
        Mode::ListStations => {
            let stations = service.directory().list_all().await?;
            render_stations(&mut stdout, stations.iter().map(|(name, _)| name.as_str()))?;
        }
        Mode::Query {
            from_city,
            to_city,
            date,
            fare,
        } => {
            let records = service.query(&from_city, &to_city, &date, fare).await?;
            render_tickets(&mut stdout, &records)?;
        }
        Mode::Guide => {
            // Load the table first so a station-list failure stops us before
            // any prompt.
            let table = service.directory().table().await?;
            let located = match OriginLocator::new(config.locator()) {
                Ok(locator) => locator.guess(false).await,
                Err(e) => {
                    tracing::warn!(error = %e, "origin locator unavailable");
                    None
                }
            };
            let origin = default_origin(located, &table);

            let answers = {
                let mut stdin = io::stdin().lock();
                run_guide(
                    &mut stdin,
                    &mut stdout,
                    origin.as_deref(),
                    Local::now().date_naive(),
                )?
            };

            writeln!(stdout, "Querying...\n")?;
            let records = service
                .query(&answers.from_city, &answers.to_city, &answers.date, answers.fare)
                .await?;
            render_tickets(&mut stdout, &records)?;
        }
    }

    Ok(())
}
