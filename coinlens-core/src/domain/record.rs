//! MarketRecord — one tracked asset in a market snapshot.

use serde::{Deserialize, Serialize};

/// Upstream field names, in projection order.
pub const SOURCE_FIELDS: [&str; 6] = [
    "name",
    "symbol",
    "current_price",
    "market_cap",
    "total_volume",
    "price_change_percentage_24h",
];

/// Presentation labels, in the same order as [`SOURCE_FIELDS`].
///
/// This is also the column order of every exported table.
pub const COLUMN_LABELS: [&str; 6] = [
    "Cryptocurrency Name",
    "Symbol",
    "Current Price (USD)",
    "Market Cap (USD)",
    "24h Trading Volume (USD)",
    "24h Price Change (%)",
];

/// A single asset in the snapshot, projected down to the six tracked fields.
///
/// Values are USD except `price_change_percentage_24h`, which is a signed percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub price_change_percentage_24h: f64,
}

/// Ordered collection of records, kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketTable {
    records: Vec<MarketRecord>,
}

impl MarketTable {
    pub fn new(records: Vec<MarketRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MarketRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<MarketRecord> {
        self.records
    }
}

impl FromIterator<MarketRecord> for MarketTable {
    fn from_iter<I: IntoIterator<Item = MarketRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MarketTable {
    type Item = &'a MarketRecord;
    type IntoIter = std::slice::Iter<'a, MarketRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A named metric/value row of the summary sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub metric: String,
    pub value: f64,
}

impl SummaryStat {
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
        }
    }
}
