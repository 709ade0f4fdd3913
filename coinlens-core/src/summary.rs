//! Summary statistics over a shaped market table.
//!
//! All derivations are read-only views computed over the full table. Ties in
//! selection are resolved by table order (first wins).

use crate::domain::{MarketRecord, MarketTable, SummaryStat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of the top-by-market-cap subset.
pub const TOP_N: usize = 5;

pub const AVERAGE_PRICE_LABEL: &str = "Average Price (USD)";
pub const HIGHEST_CHANGE_LABEL: &str = "Highest 24h Change (%)";
pub const LOWEST_CHANGE_LABEL: &str = "Lowest 24h Change (%)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("cannot compute {metric} over an empty table")]
    EmptyTable { metric: &'static str },
}

/// The four views produced for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub top: MarketTable,
    pub mean_price: f64,
    pub highest_change: MarketRecord,
    pub lowest_change: MarketRecord,
}

impl MarketSummary {
    /// Rows of the summary sheet, in display order.
    pub fn stats(&self) -> [SummaryStat; 3] {
        [
            SummaryStat::new(AVERAGE_PRICE_LABEL, self.mean_price),
            SummaryStat::new(
                HIGHEST_CHANGE_LABEL,
                self.highest_change.price_change_percentage_24h,
            ),
            SummaryStat::new(
                LOWEST_CHANGE_LABEL,
                self.lowest_change.price_change_percentage_24h,
            ),
        ]
    }
}

/// Compute every view over `table` with the standard top-5 subset.
pub fn summarize(table: &MarketTable) -> Result<MarketSummary, SummaryError> {
    summarize_with(table, TOP_N)
}

/// Compute every view over `table`, keeping the `top_n` largest by market cap.
pub fn summarize_with(table: &MarketTable, top_n: usize) -> Result<MarketSummary, SummaryError> {
    Ok(MarketSummary {
        top: top_by_market_cap(table, top_n),
        mean_price: mean_price(table)?,
        highest_change: max_change(table)?.clone(),
        lowest_change: min_change(table)?.clone(),
    })
}

/// The `n` records with the largest market cap, largest first.
///
/// Upstream ordering is not trusted: the table is stably sorted before
/// truncation, so equal caps keep their table order. A table with fewer than
/// `n` rows is returned whole, in table order.
pub fn top_by_market_cap(table: &MarketTable, n: usize) -> MarketTable {
    if table.len() < n {
        return table.clone();
    }

    let mut ranked: Vec<&MarketRecord> = table.iter().collect();
    ranked.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));
    ranked.into_iter().take(n).cloned().collect()
}

/// Arithmetic mean of `current_price`.
pub fn mean_price(table: &MarketTable) -> Result<f64, SummaryError> {
    if table.is_empty() {
        return Err(SummaryError::EmptyTable {
            metric: AVERAGE_PRICE_LABEL,
        });
    }
    let total: f64 = table.iter().map(|r| r.current_price).sum();
    Ok(total / table.len() as f64)
}

/// Record with the greatest 24h change; first in table order on ties.
pub fn max_change(table: &MarketTable) -> Result<&MarketRecord, SummaryError> {
    select_first_by(table, HIGHEST_CHANGE_LABEL, |candidate, best| candidate > best)
}

/// Record with the least 24h change; first in table order on ties.
pub fn min_change(table: &MarketTable) -> Result<&MarketRecord, SummaryError> {
    select_first_by(table, LOWEST_CHANGE_LABEL, |candidate, best| candidate < best)
}

/// Scan in table order, replacing the current pick only on a strict improvement.
fn select_first_by<'a, F>(
    table: &'a MarketTable,
    metric: &'static str,
    improves: F,
) -> Result<&'a MarketRecord, SummaryError>
where
    F: Fn(f64, f64) -> bool,
{
    let mut records = table.iter();
    let first = records.next().ok_or(SummaryError::EmptyTable { metric })?;
    Ok(records.fold(first, |best, candidate| {
        if improves(
            candidate.price_change_percentage_24h,
            best.price_change_percentage_24h,
        ) {
            candidate
        } else {
            best
        }
    }))
}
