//! Video data file loading.
//!
//! The data file is a JSON array. The array itself must parse or the whole
//! run stops; each element is decoded into a [`VideoRecord`] separately so a
//! single malformed entry only fails that entry.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use vidpages_core::{VideoRecord, record::UNKNOWN_RECORD};

/// Data file errors. All of them are fatal for a run.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document is valid JSON but not an array.
    #[error("{path} must contain a JSON array of records")]
    NotAList { path: PathBuf },
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// One undecoded element of the data array.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord(Value);

impl RawRecord {
    /// Wrap a JSON value.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Decode into a [`VideoRecord`].
    pub fn decode(&self) -> std::result::Result<VideoRecord, serde_json::Error> {
        serde_json::from_value(self.0.clone())
    }

    /// The `url` string if the element has one, for error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        self.0
            .get("url")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_RECORD)
    }
}

/// Parse a data document.
pub fn parse_records(text: &str, path: &Path) -> Result<Vec<RawRecord>> {
    let document: Value = serde_json::from_str(text).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        Value::Array(items) => Ok(items.into_iter().map(RawRecord::new).collect()),
        _ => Err(DataError::NotAList {
            path: path.to_path_buf(),
        }),
    }
}

/// Read and parse the data file at `path`.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text, path)?;
    debug!(path = %path.display(), count = records.len(), "loaded video data");
    Ok(records)
}
