//! CoinGecko markets provider.
//!
//! Issues a single GET against the `coins/markets` endpoint and decodes the
//! body as a JSON array of objects. There is no retry: a non-success status is
//! reported and returned as [`FetchError::Status`].

use super::provider::{DataSource, FetchError, FetchResult, MarketDataProvider, MarketQuery, RawRecord};
use tracing::{debug, info, warn};

/// Public CoinGecko API root.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko `coins/markets` provider.
pub struct CoinGeckoProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("coinlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::NetworkUnreachable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Provider pointed at the public API.
    pub fn public() -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL)
    }

    fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.base_url.trim_end_matches('/'))
    }
}

impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "coingecko"
    }

    fn fetch(&self, query: &MarketQuery) -> Result<FetchResult, FetchError> {
        let url = self.markets_url();
        debug!(%url, per_page = query.per_page, page = query.page, "requesting markets snapshot");

        let resp = self
            .client
            .get(&url)
            .query(&query.params())
            .send()
            .map_err(|e| FetchError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "markets request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let records: Vec<RawRecord> = resp
            .json()
            .map_err(|e| FetchError::Decode(format!("expected a JSON array of objects: {e}")))?;

        info!(count = records.len(), "fetched market records");
        Ok(FetchResult {
            records,
            source: DataSource::CoinGecko,
        })
    }
}
