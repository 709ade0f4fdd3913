//! Market data provider trait and structured error types.
//!
//! The MarketDataProvider trait abstracts over data sources (CoinGecko HTTP,
//! local JSON snapshot) so the pipeline can run offline and be mocked in tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One undecoded object from the upstream response. May carry arbitrary extra fields.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Query parameters for a markets snapshot request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketQuery {
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self {
            vs_currency: "usd".into(),
            order: "market_cap_desc".into(),
            per_page: 50,
            page: 1,
            sparkline: false,
        }
    }
}

impl MarketQuery {
    /// Query string pairs, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("order", self.order.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", self.sparkline.to_string()),
        ]
    }
}

/// Structured error types for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("response could not be decoded: {0}")]
    Decode(String),

    #[error("snapshot file error: {0}")]
    Io(String),
}

/// Where the records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    CoinGecko,
    JsonFile,
}

/// Result of a successful fetch. `records` may be empty.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub records: Vec<RawRecord>,
    pub source: DataSource,
}

/// Trait for market data providers.
pub trait MarketDataProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch one snapshot. A non-success upstream status is an error, not an empty result.
    fn fetch(&self, query: &MarketQuery) -> Result<FetchResult, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_matches_snapshot_parameters() {
        let params = MarketQuery::default().params();
        assert_eq!(
            params,
            vec![
                ("vs_currency", "usd".to_string()),
                ("order", "market_cap_desc".to_string()),
                ("per_page", "50".to_string()),
                ("page", "1".to_string()),
                ("sparkline", "false".to_string()),
            ]
        );
    }

    #[test]
    fn status_error_displays_code() {
        let err = FetchError::Status { status: 429 };
        assert_eq!(err.to_string(), "HTTP status 429");
    }
}
