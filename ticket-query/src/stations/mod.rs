//! Station directory.
//!
//! Provides station name → code lookup. The table is scraped from the
//! ticketing service's station-list script and cached on disk; the cache is
//! reused until it is removed or explicitly refreshed.

mod cache;
mod client;
mod directory;
mod error;
mod table;

pub use cache::{CACHE_FILE_NAME, CacheLoad, StationCache, StationCacheConfig};
pub use client::{StationClient, StationClientConfig, StationSource};
pub use directory::{StationDirectory, TableSource};
pub use error::StationError;
pub use table::{StationTable, parse_station_list};
