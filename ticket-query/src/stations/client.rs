//! Station-list client.

use super::error::StationError;

/// Default URL of the station-list script.
const DEFAULT_URL: &str = "https://kyfw.12306.cn/otn/resources/js/framework/station_name.js";

/// Something that can produce the raw station-list script.
///
/// The live implementation is [`StationClient`]; tests substitute in-memory
/// sources.
#[allow(async_fn_in_trait)]
pub trait StationSource {
    /// Fetch the station-list script body.
    async fn fetch_station_list(&self) -> Result<String, StationError>;
}

/// Configuration for the station-list client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL of the station-list script
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a config pointing at the public station list.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the station-list script.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new station-list client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The URL this client fetches.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StationSource for StationClient {
    async fn fetch_station_list(&self) -> Result<String, StationError> {
        tracing::debug!(url = %self.url, "fetching station list");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(response.text().await?)
    }
}
