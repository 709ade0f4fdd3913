//! Domain types for market snapshots

pub mod record;

pub use record::{MarketRecord, MarketTable, SummaryStat, COLUMN_LABELS, SOURCE_FIELDS};
