//! Shaping — project raw upstream objects onto the fixed six-field record.
//!
//! Every selected field must be present, non-null and of the right JSON type.
//! A single bad record fails the whole table; nothing is defaulted.

use crate::data::RawRecord;
use crate::domain::{MarketRecord, MarketTable};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("record {row}: missing field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("record {row}: field '{field}' is null")]
    NullField { row: usize, field: &'static str },

    #[error("record {row}: field '{field}' is not a {expected}")]
    WrongType {
        row: usize,
        field: &'static str,
        expected: &'static str,
    },
}

/// Shape every record, in order. Fails on the first record that does not project.
pub fn shape(records: &[RawRecord]) -> Result<MarketTable, ShapeError> {
    records
        .iter()
        .enumerate()
        .map(|(row, raw)| shape_record(row, raw))
        .collect()
}

/// Project a single raw object. `row` is only used for error reporting.
pub fn shape_record(row: usize, raw: &RawRecord) -> Result<MarketRecord, ShapeError> {
    Ok(MarketRecord {
        name: string_field(row, raw, "name")?,
        symbol: string_field(row, raw, "symbol")?,
        current_price: number_field(row, raw, "current_price")?,
        market_cap: number_field(row, raw, "market_cap")?,
        total_volume: number_field(row, raw, "total_volume")?,
        price_change_percentage_24h: number_field(row, raw, "price_change_percentage_24h")?,
    })
}

fn present<'a>(row: usize, raw: &'a RawRecord, field: &'static str) -> Result<&'a Value, ShapeError> {
    match raw.get(field) {
        None => Err(ShapeError::MissingField { row, field }),
        Some(Value::Null) => Err(ShapeError::NullField { row, field }),
        Some(value) => Ok(value),
    }
}

fn string_field(row: usize, raw: &RawRecord, field: &'static str) -> Result<String, ShapeError> {
    present(row, raw, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or(ShapeError::WrongType {
            row,
            field,
            expected: "string",
        })
}

fn number_field(row: usize, raw: &RawRecord, field: &'static str) -> Result<f64, ShapeError> {
    present(row, raw, field)?
        .as_f64()
        .ok_or(ShapeError::WrongType {
            row,
            field,
            expected: "number",
        })
}
