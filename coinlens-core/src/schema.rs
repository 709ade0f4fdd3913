//! Polars view of a market table, labeled for presentation.

use crate::domain::{MarketTable, COLUMN_LABELS};
use polars::prelude::*;

/// Expected schema of a presentation frame.
pub struct TableSchema;

impl TableSchema {
    /// Columns in display order with their dtypes.
    pub fn schema() -> Schema {
        Schema::from_iter(vec![
            Field::new(COLUMN_LABELS[0].into(), DataType::String),
            Field::new(COLUMN_LABELS[1].into(), DataType::String),
            Field::new(COLUMN_LABELS[2].into(), DataType::Float64),
            Field::new(COLUMN_LABELS[3].into(), DataType::Float64),
            Field::new(COLUMN_LABELS[4].into(), DataType::Float64),
            Field::new(COLUMN_LABELS[5].into(), DataType::Float64),
        ])
    }

    /// Validate a DataFrame against the schema.
    pub fn validate(df: &DataFrame) -> Result<(), SchemaError> {
        let expected = Self::schema();
        let actual = df.schema();

        for field in expected.iter_fields() {
            let actual_dtype = actual
                .get(field.name())
                .ok_or_else(|| SchemaError::MissingColumn(field.name().to_string()))?;
            if actual_dtype != field.dtype() {
                return Err(SchemaError::TypeMismatch {
                    column: field.name().to_string(),
                    expected: field.dtype().clone(),
                    actual: actual_dtype.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Build a frame whose column names are the presentation labels.
pub fn to_frame(table: &MarketTable) -> Result<DataFrame, SchemaError> {
    let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
    let symbols: Vec<&str> = table.iter().map(|r| r.symbol.as_str()).collect();
    let prices: Vec<f64> = table.iter().map(|r| r.current_price).collect();
    let caps: Vec<f64> = table.iter().map(|r| r.market_cap).collect();
    let volumes: Vec<f64> = table.iter().map(|r| r.total_volume).collect();
    let changes: Vec<f64> = table
        .iter()
        .map(|r| r.price_change_percentage_24h)
        .collect();

    let df = DataFrame::new(vec![
        Column::new(COLUMN_LABELS[0].into(), names),
        Column::new(COLUMN_LABELS[1].into(), symbols),
        Column::new(COLUMN_LABELS[2].into(), prices),
        Column::new(COLUMN_LABELS[3].into(), caps),
        Column::new(COLUMN_LABELS[4].into(), volumes),
        Column::new(COLUMN_LABELS[5].into(), changes),
    ])
    .map_err(|e| SchemaError::Frame(e.to_string()))?;

    TableSchema::validate(&df)?;
    Ok(df)
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Type mismatch in column {column}: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        actual: DataType,
    },

    #[error("Frame construction failed: {0}")]
    Frame(String),
}
