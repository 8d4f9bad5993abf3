//! Default origin guess from the caller's public IP.
//!
//! Best effort only: any failure yields no guess, and the guide simply asks
//! for an origin without offering a default.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default address cache file name, placed in the cache directory.
pub const ADDR_CACHE_FILE_NAME: &str = ".addr";

const DEFAULT_IP_URL: &str = "http://jsonip.com";
const DEFAULT_INFO_URL: &str = "http://ip.taobao.com/service/getIpInfo.php";

/// Errors from a geolocation attempt.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no IP address in response")]
    NoIp,

    #[error("no city in response: {0}")]
    NoCity(String),
}

/// Configuration for the origin locator.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Service that echoes the caller's public IP
    pub ip_url: String,
    /// Service that maps an IP to a city
    pub info_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Plain-text cache of the last guess
    pub cache_path: PathBuf,
}

impl LocatorConfig {
    /// Public services, with the cache file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            ip_url: DEFAULT_IP_URL.to_string(),
            info_url: DEFAULT_INFO_URL.to_string(),
            timeout_secs: 5,
            cache_path: dir.as_ref().join(ADDR_CACHE_FILE_NAME),
        }
    }

    /// Set custom service URLs (for testing).
    pub fn with_urls(mut self, ip_url: impl Into<String>, info_url: impl Into<String>) -> Self {
        self.ip_url = ip_url.into();
        self.info_url = info_url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct IpInfo {
    data: IpInfoData,
}

#[derive(Debug, Deserialize)]
struct IpInfoData {
    city: Option<String>,
}

/// Guesses the caller's city.
#[derive(Debug, Clone)]
pub struct OriginLocator {
    http: reqwest::Client,
    config: LocatorConfig,
}

impl OriginLocator {
    /// Create a locator.
    pub fn new(config: LocatorConfig) -> Result<Self, LocateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Guess the caller's city.
    ///
    /// Unless `fresh` is set, a non-empty cached guess is returned without
    /// touching the network. A new guess is written back to the cache.
    pub async fn guess(&self, fresh: bool) -> Option<String> {
        if !fresh && let Some(city) = self.cached() {
            debug!(%city, "using cached origin guess");
            return Some(city);
        }

        match self.lookup().await {
            Ok(city) => {
                if let Err(e) = std::fs::write(&self.config.cache_path, &city) {
                    warn!(path = %self.config.cache_path.display(), error = %e, "failed to write address cache");
                }
                Some(city)
            }
            Err(e) => {
                warn!(error = %e, "could not guess origin city");
                None
            }
        }
    }

    fn cached(&self) -> Option<String> {
        let city = std::fs::read_to_string(&self.config.cache_path).ok()?;
        let city = city.trim();
        (!city.is_empty()).then(|| city.to_string())
    }

    async fn lookup(&self) -> Result<String, LocateError> {
        let body = self.http.get(&self.config.ip_url).send().await?.text().await?;
        let ip = parse_ip(&body).ok_or(LocateError::NoIp)?;

        let body = self
            .http
            .get(&self.config.info_url)
            .query(&[("ip", ip)])
            .send()
            .await?
            .text()
            .await?;
        parse_city(&body)
    }
}

/// First dotted-quad in an IP echo response.
pub fn parse_ip(body: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+").expect("ip pattern is valid")
    });
    re.find(body).map(|m| m.as_str())
}

/// City name from an IP info response, without the trailing `市`.
pub fn parse_city(body: &str) -> Result<String, LocateError> {
    let info: IpInfo =
        serde_json::from_str(body).map_err(|e| LocateError::NoCity(e.to_string()))?;
    let city = info
        .data
        .city
        .map(|c| c.trim().trim_end_matches('市').to_string())
        .unwrap_or_default();

    if city.is_empty() {
        return Err(LocateError::NoCity("empty city".to_string()));
    }
    Ok(city)
}
