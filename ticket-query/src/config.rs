//! Application configuration.
//!
//! One place that knows where the cache files live and which endpoints to
//! talk to, and hands out the per-component configs.

use std::path::{Path, PathBuf};

use crate::locate::LocatorConfig;
use crate::stations::{StationCacheConfig, StationClientConfig};
use crate::tickets::TicketClientConfig;

/// Top-level configuration for a run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `.cities` and `.addr`.
    pub cache_dir: PathBuf,
    /// Station-list URL override.
    pub station_list_url: Option<String>,
    /// Availability endpoint override.
    pub query_url: Option<String>,
}

impl AppConfig {
    /// Config with caches in `cache_dir` and the public endpoints.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            station_list_url: None,
            query_url: None,
        }
    }

    pub fn with_station_list_url(mut self, url: impl Into<String>) -> Self {
        self.station_list_url = Some(url.into());
        self
    }

    pub fn with_query_url(mut self, url: impl Into<String>) -> Self {
        self.query_url = Some(url.into());
        self
    }

    pub fn station_client(&self) -> StationClientConfig {
        match &self.station_list_url {
            Some(url) => StationClientConfig::new().with_url(url),
            None => StationClientConfig::new(),
        }
    }

    pub fn station_cache(&self) -> StationCacheConfig {
        StationCacheConfig::in_dir(&self.cache_dir)
    }

    pub fn ticket_client(&self) -> TicketClientConfig {
        match &self.query_url {
            Some(url) => TicketClientConfig::new().with_url(url),
            None => TicketClientConfig::new(),
        }
    }

    pub fn locator(&self) -> LocatorConfig {
        LocatorConfig::in_dir(&self.cache_dir)
    }
}

impl Default for AppConfig {
    /// Caches sit next to the executable, like the tool's other files.
    fn default() -> Self {
        Self::new(default_cache_dir())
    }
}

fn default_cache_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
