//! Coinlens Runner — configuration, workbook export and pipeline orchestration.
//!
//! This crate builds on `coinlens-core` to provide:
//! - TOML run configuration with defaults for the standard snapshot
//! - Three-sheet xlsx export with replace-on-success semantics
//! - The single-run fetch → shape → summarize → export pipeline

pub mod config;
pub mod export;
pub mod pipeline;

pub use config::{ConfigError, OutputConfig, RunConfig, SourceConfig, DEFAULT_OUTPUT};
pub use export::{export_workbook, ExportError, FULL_TABLE_SHEET, SUMMARY_SHEET, TOP_SHEET};
pub use pipeline::{run_pipeline, PipelineError, RunOutcome};
