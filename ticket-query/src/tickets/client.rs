//! Availability query HTTP client.

use crate::domain::{FareClass, QueryDate, StationCode};

use super::error::QueryError;

/// Default availability endpoint.
const DEFAULT_URL: &str = "https://kyfw.12306.cn/otn/lcxxcx/query";

/// Default request timeout. A query gets exactly one attempt.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fully resolved query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams {
    pub from: StationCode,
    pub to: StationCode,
    pub date: QueryDate,
    pub fare: FareClass,
}

impl QueryParams {
    /// Query-string pairs in the order the endpoint documents them.
    pub fn to_query(&self) -> [(&'static str, String); 4] {
        [
            ("purpose_codes", self.fare.purpose_code().to_string()),
            ("queryDate", self.date.to_string()),
            ("from_station", self.from.to_string()),
            ("to_station", self.to.to_string()),
        ]
    }
}

/// Something that can answer an availability query with a raw body.
///
/// The live implementation is [`TicketClient`]; tests substitute canned
/// responses.
#[allow(async_fn_in_trait)]
pub trait TicketSource {
    /// Run the query and return the response body.
    async fn fetch_tickets(&self, params: &QueryParams) -> Result<String, QueryError>;
}

/// Configuration for the availability client.
#[derive(Debug, Clone)]
pub struct TicketClientConfig {
    /// Endpoint URL, without query string
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TicketClientConfig {
    /// Create a config pointing at the public endpoint.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
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

impl Default for TicketClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the availability endpoint.
#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::Client,
    url: String,
}

impl TicketClient {
    /// Create a new availability client.
    pub fn new(config: TicketClientConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }
}

impl TicketSource for TicketClient {
    async fn fetch_tickets(&self, params: &QueryParams) -> Result<String, QueryError> {
        tracing::debug!(
            from = %params.from,
            to = %params.to,
            date = %params.date,
            fare = params.fare.purpose_code(),
            "querying availability"
        );

        let response = self
            .http
            .get(&self.url)
            .query(&params.to_query())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(response.text().await?)
    }
}
