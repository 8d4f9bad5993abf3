//! Command-line flags.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::config::AppConfig;
use crate::domain::{FareClass, QueryDate, normalize_at};

use super::error::CliError;

/// Query remaining seats on 12306 trains.
#[derive(Debug, Parser)]
#[command(name = "left-ticket", version, about)]
pub struct Args {
    /// Origin station, e.g. 唐家湾
    #[arg(short = 'f', long = "from-city", visible_alias = "from_city")]
    pub from_city: Option<String>,

    /// Destination station, e.g. 广州南
    #[arg(short = 't', long = "to-city", visible_alias = "to_city")]
    pub to_city: Option<String>,

    /// Travel date, e.g. 2016-08-14 or 8-14 (year defaults to this year)
    #[arg(short = 'd', long)]
    pub date: Option<String>,

    /// Student tickets
    #[arg(short = 's', long)]
    pub student: bool,

    /// List supported stations
    #[arg(short = 'l', long = "list-city", visible_alias = "list_city")]
    pub list_city: bool,

    /// Refetch the station list even if a cached copy exists
    #[arg(long)]
    pub refresh: bool,

    /// Directory holding the station and address caches
    #[arg(long, env = "TICKET_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Override the station-list URL
    #[arg(long, env = "TICKET_STATION_LIST_URL", hide = true)]
    pub station_list_url: Option<String>,

    /// Override the availability endpoint URL
    #[arg(long, env = "TICKET_QUERY_URL", hide = true)]
    pub query_url: Option<String>,
}

/// What a run should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print every known station.
    ListStations,
    /// Query with everything given on the command line.
    Query {
        from_city: String,
        to_city: String,
        date: QueryDate,
        fare: FareClass,
    },
    /// Ask for the query interactively.
    Guide,
}

impl Args {
    /// Decide the mode from the flag combination.
    pub fn mode(&self) -> Result<Mode, CliError> {
        self.mode_at(Local::now().date_naive())
    }

    /// Decide the mode against an explicit `today`.
    ///
    /// `--date` is checked first, whatever the mode, so a bad date always
    /// ends the run. No origin, destination, or listing flag starts the
    /// guide; listing wins over a query; a query needs both ends.
    pub fn mode_at(&self, today: NaiveDate) -> Result<Mode, CliError> {
        let date = normalize_at(self.date.as_deref(), today)?;

        if self.list_city {
            return Ok(Mode::ListStations);
        }

        match (&self.from_city, &self.to_city) {
            (None, None) => Ok(Mode::Guide),
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => Ok(Mode::Query {
                from_city: from.clone(),
                to_city: to.clone(),
                date,
                fare: self.fare(),
            }),
            _ => Err(CliError::InvalidArguments(
                "both --from-city and --to-city are required",
            )),
        }
    }

    /// Fare class selected by `--student`.
    pub fn fare(&self) -> FareClass {
        if self.student {
            FareClass::Discounted
        } else {
            FareClass::Adult
        }
    }

    /// Build the application config from flags and environment.
    pub fn config(&self) -> AppConfig {
        let mut config = match &self.cache_dir {
            Some(dir) => AppConfig::new(dir),
            None => AppConfig::default(),
        };
        if let Some(url) = &self.station_list_url {
            config = config.with_station_list_url(url);
        }
        if let Some(url) = &self.query_url {
            config = config.with_query_url(url);
        }
        config
    }
}
