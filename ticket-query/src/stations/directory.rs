//! Station name lookup.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::StationCode;

use super::cache::{CacheLoad, StationCache};
use super::client::StationSource;
use super::error::StationError;
use super::table::{StationTable, parse_station_list};

/// Where the current table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    /// Read from the cache file.
    Cache,
    /// Fetched from the station list during this run.
    Live,
    /// Supplied by the caller.
    Preloaded,
}

#[derive(Debug)]
struct Loaded {
    table: Arc<StationTable>,
    source: TableSource,
}

/// Station name → code lookup.
///
/// The table is loaded lazily on first use and kept for the rest of the
/// process: from the cache file when it holds a usable table, otherwise from
/// the live station list (which is then written back to the cache).
#[derive(Clone)]
pub struct StationDirectory<S> {
    inner: Arc<RwLock<Option<Loaded>>>,
    source: S,
    cache: StationCache,
}

impl<S: StationSource> StationDirectory<S> {
    /// Create a directory that loads on first lookup.
    pub fn new(source: S, cache: StationCache) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            source,
            cache,
        }
    }

    /// Create a directory around an already-built table.
    ///
    /// The cache is only touched by an explicit [`refresh`](Self::refresh).
    pub fn preloaded(source: S, cache: StationCache, table: StationTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Loaded {
                table: Arc::new(table),
                source: TableSource::Preloaded,
            }))),
            source,
            cache,
        }
    }

    /// Get the table, loading it if this is the first use.
    pub async fn table(&self) -> Result<Arc<StationTable>, StationError> {
        if let Some(loaded) = self.inner.read().await.as_ref() {
            return Ok(loaded.table.clone());
        }

        let mut guard = self.inner.write().await;
        if let Some(loaded) = guard.as_ref() {
            return Ok(loaded.table.clone());
        }

        let loaded = match self.cache.load() {
            CacheLoad::Hit(table) => {
                debug!(
                    path = %self.cache.path().display(),
                    stations = table.len(),
                    "using cached station table"
                );
                Loaded {
                    table: Arc::new(table),
                    source: TableSource::Cache,
                }
            }
            CacheLoad::Missing => {
                debug!(path = %self.cache.path().display(), "no station cache");
                self.fetch_live().await?
            }
            CacheLoad::Invalid(reason) => {
                warn!(
                    path = %self.cache.path().display(),
                    %reason,
                    "station cache unusable, refetching"
                );
                self.fetch_live().await?
            }
        };

        let table = loaded.table.clone();
        *guard = Some(loaded);
        Ok(table)
    }

    /// Where the current table came from, if one is loaded.
    pub async fn source(&self) -> Option<TableSource> {
        self.inner.read().await.as_ref().map(|l| l.source)
    }

    /// Resolve a station name to its code.
    ///
    /// Matching is exact; there is no fuzzy fallback.
    pub async fn resolve(&self, name: &str) -> Result<StationCode, StationError> {
        self.table()
            .await?
            .get(name)
            .ok_or_else(|| StationError::UnknownStation(name.to_string()))
    }

    /// Whether `name` is a known station.
    pub async fn contains(&self, name: &str) -> Result<bool, StationError> {
        Ok(self.table().await?.contains(name))
    }

    /// Every known station, each exactly once.
    pub async fn list_all(&self) -> Result<Vec<(String, StationCode)>, StationError> {
        let table = self.table().await?;
        Ok(table
            .iter()
            .map(|(name, code)| (name.to_string(), code))
            .collect())
    }

    /// Refetch the station list and replace the table and the cache file.
    ///
    /// On failure the existing table and cache file are left as they were.
    pub async fn refresh(&self) -> Result<usize, StationError> {
        let loaded = self.fetch_live().await?;
        let count = loaded.table.len();

        let mut guard = self.inner.write().await;
        *guard = Some(loaded);

        Ok(count)
    }

    async fn fetch_live(&self) -> Result<Loaded, StationError> {
        let script = self.source.fetch_station_list().await?;
        let table = parse_station_list(&script);
        if table.is_empty() {
            return Err(StationError::EmptyList);
        }

        info!(stations = table.len(), "fetched station list");

        // The fetched table is still good for this run if persisting fails.
        if let Err(e) = self.cache.save(&table) {
            warn!(path = %self.cache.path().display(), error = %e, "failed to write station cache");
        }

        Ok(Loaded {
            table: Arc::new(table),
            source: TableSource::Live,
        })
    }
}
