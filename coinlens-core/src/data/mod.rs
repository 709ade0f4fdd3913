//! Market data acquisition

pub mod coingecko;
pub mod json_file;
pub mod provider;

pub use coingecko::{CoinGeckoProvider, DEFAULT_BASE_URL};
pub use json_file::JsonFileProvider;
pub use provider::{
    DataSource, FetchError, FetchResult, MarketDataProvider, MarketQuery, RawRecord,
};
