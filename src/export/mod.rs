//! Export of flattened focus records
//!
//! The flattener exists so downstream systems can query boolean columns; this
//! module writes its records out as CSV (tabular/analytics stores) or JSON
//! (document hand-off with dataset metadata).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod csv;
pub mod json;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Metadata attached to an exported dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Number of records in the dataset
    pub record_count: usize,

    /// Flattener schema version the records were produced with
    pub flatten_version: String,
}

impl DatasetMetadata {
    pub fn new(record_count: usize) -> Self {
        DatasetMetadata {
            generated_at: Utc::now(),
            record_count,
            flatten_version: crate::flatten::FLATTEN_SCHEMA_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("parquet").is_err());
    }

    #[test]
    fn test_dataset_metadata() {
        let meta = DatasetMetadata::new(3);
        assert_eq!(meta.record_count, 3);
        assert_eq!(meta.flatten_version, crate::flatten::FLATTEN_SCHEMA_VERSION);
    }
}
