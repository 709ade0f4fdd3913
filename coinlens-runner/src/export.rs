//! Workbook export — the full table, the top subset and the summary rows.
//!
//! The workbook is assembled in memory, serialized once, written to a staging
//! file beside the target and renamed into place. A failed export leaves the
//! target path as it was.

use coinlens_core::domain::{MarketTable, COLUMN_LABELS};
use coinlens_core::MarketSummary;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const FULL_TABLE_SHEET: &str = "Top 50 Cryptos";
pub const TOP_SHEET: &str = "Top 5 Cryptos";
pub const SUMMARY_SHEET: &str = "Summary";

/// Header labels of the summary sheet.
pub const SUMMARY_HEADERS: [&str; 2] = ["Metric", "Value"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("write {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

impl From<XlsxError> for ExportError {
    fn from(e: XlsxError) -> Self {
        ExportError::Workbook(e.to_string())
    }
}

/// Write the three-sheet workbook to `path`, replacing any existing file.
///
/// Returns the path written.
pub fn export_workbook(
    path: &Path,
    table: &MarketTable,
    summary: &MarketSummary,
) -> Result<PathBuf, ExportError> {
    let mut workbook = build_workbook(table, summary)?;
    let bytes = workbook.save_to_buffer()?;
    debug!(bytes = bytes.len(), "workbook serialized");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    write_replacing(path, &bytes)?;

    info!(path = %path.display(), rows = table.len(), "workbook written");
    Ok(path.to_path_buf())
}

fn build_workbook(table: &MarketTable, summary: &MarketSummary) -> Result<Workbook, ExportError> {
    let header = Format::new().set_bold();

    let full = table_sheet(FULL_TABLE_SHEET, table, &header)?;
    let top = table_sheet(TOP_SHEET, &summary.top, &header)?;
    let stats = summary_sheet(summary, &header)?;

    let mut workbook = Workbook::new();
    workbook.push_worksheet(full);
    workbook.push_worksheet(top);
    workbook.push_worksheet(stats);
    Ok(workbook)
}

fn table_sheet(name: &str, table: &MarketTable, header: &Format) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;

    for (col, label) in COLUMN_LABELS.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *label, header)?;
    }

    for (i, record) in table.iter().enumerate() {
        let row = (i + 1) as RowNum;
        sheet.write_string(row, 0, record.name.as_str())?;
        sheet.write_string(row, 1, record.symbol.as_str())?;
        sheet.write_number(row, 2, record.current_price)?;
        sheet.write_number(row, 3, record.market_cap)?;
        sheet.write_number(row, 4, record.total_volume)?;
        sheet.write_number(row, 5, record.price_change_percentage_24h)?;
    }

    sheet.autofit();
    Ok(sheet)
}

fn summary_sheet(summary: &MarketSummary, header: &Format) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET)?;

    for (col, label) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *label, header)?;
    }

    for (i, stat) in summary.stats().iter().enumerate() {
        let row = (i + 1) as RowNum;
        sheet.write_string(row, 0, stat.metric.as_str())?;
        sheet.write_number(row, 1, stat.value)?;
    }

    sheet.autofit();
    Ok(sheet)
}

/// Write to a staging file next to `path`, then rename over it.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let staging = staging_path(path);

    if let Err(e) = std::fs::write(&staging, bytes) {
        let _ = std::fs::remove_file(&staging);
        return Err(io_error(&staging, e));
    }
    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(io_error(path, e));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workbook.xlsx".into());
    path.with_file_name(format!(".{file_name}.partial"))
}

fn io_error(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
