//! Single-run pipeline: fetch → shape → summarize → export.

use crate::config::RunConfig;
use crate::export::{export_workbook, ExportError};
use coinlens_core::data::{FetchError, MarketDataProvider};
use coinlens_core::{shape, summarize_with, MarketSummary, ShapeError, SummaryError};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("error fetching data: {0}")]
    Fetch(#[from] FetchError),

    #[error("shaping failed: {0}")]
    Shape(#[from] ShapeError),

    #[error("summary failed: {0}")]
    Summary(#[from] SummaryError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The workbook was written.
    Exported {
        path: PathBuf,
        rows: usize,
        summary: MarketSummary,
    },
    /// The provider returned no records; nothing was shaped or written.
    NothingToProcess,
}

/// Run every stage once against `provider`.
///
/// Stages run strictly in order and each consumes the previous stage's
/// output. Any stage error ends the run before the export step, so no file is
/// touched unless the whole table shaped and summarized cleanly.
pub fn run_pipeline(
    provider: &dyn MarketDataProvider,
    config: &RunConfig,
) -> Result<RunOutcome, PipelineError> {
    let fetched = provider.fetch(&config.source.query())?;
    if fetched.records.is_empty() {
        warn!(provider = provider.name(), "no market records returned; skipping export");
        return Ok(RunOutcome::NothingToProcess);
    }
    info!(
        provider = provider.name(),
        source = ?fetched.source,
        count = fetched.records.len(),
        "snapshot received"
    );

    let table = shape(&fetched.records)?;
    let summary = summarize_with(&table, config.output.top_n)?;
    info!(
        mean_price = summary.mean_price,
        highest = %summary.highest_change.symbol,
        lowest = %summary.lowest_change.symbol,
        "summary computed"
    );

    let path = export_workbook(&config.output.path, &table, &summary)?;
    Ok(RunOutcome::Exported {
        path,
        rows: table.len(),
        summary,
    })
}
