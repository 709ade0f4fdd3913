//! Offline provider reading a saved `coins/markets` response from disk.

use super::provider::{DataSource, FetchError, FetchResult, MarketDataProvider, MarketQuery, RawRecord};
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads a JSON array of market objects from a local file.
///
/// Query parameters are not applied; the file is taken as-is.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "json_file"
    }

    fn fetch(&self, query: &MarketQuery) -> Result<FetchResult, FetchError> {
        debug!(path = %self.path.display(), ?query, "loading snapshot file; query ignored");

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| FetchError::Io(format!("read {}: {e}", self.path.display())))?;
        let records: Vec<RawRecord> = serde_json::from_str(&content)
            .map_err(|e| FetchError::Decode(format!("{}: {e}", self.path.display())))?;

        info!(count = records.len(), path = %self.path.display(), "loaded market records");
        Ok(FetchResult {
            records,
            source: DataSource::JsonFile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_array_of_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markets.json");
        std::fs::write(&path, r#"[{"name":"Bitcoin","symbol":"btc","extra":[1,2]}]"#).unwrap();

        let result = JsonFileProvider::new(&path)
            .fetch(&MarketQuery::default())
            .unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.source, DataSource::JsonFile);
        assert_eq!(result.records[0]["symbol"], "btc");
    }

    #[test]
    fn empty_array_is_a_successful_empty_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        let result = JsonFileProvider::new(&path)
            .fetch(&MarketQuery::default())
            .unwrap();
        assert!(result.records.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileProvider::new(dir.path().join("nope.json"))
            .fetch(&MarketQuery::default())
            .unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[test]
    fn non_array_body_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{"error":"rate limited"}"#).unwrap();

        let err = JsonFileProvider::new(&path)
            .fetch(&MarketQuery::default())
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
