//! Coinlens Core — market snapshot domain types, providers, shaping and summaries.
//!
//! This crate contains the data side of the pipeline:
//! - Domain types (market records, tables, summary rows)
//! - Market data providers (CoinGecko HTTP, local JSON snapshot)
//! - Shaping of raw upstream objects into fixed-schema records
//! - Summary statistics (top by market cap, mean price, 24h change extremes)
//! - Polars presentation frame with schema validation

pub mod data;
pub mod domain;
pub mod schema;
pub mod shape;
pub mod summary;

pub use data::{FetchError, MarketDataProvider, MarketQuery, RawRecord};
pub use domain::{MarketRecord, MarketTable, SummaryStat};
pub use shape::{shape, ShapeError};
pub use summary::{summarize, summarize_with, MarketSummary, SummaryError};
