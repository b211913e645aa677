//! JSON export for flattened focus records

use super::{DatasetMetadata, ExportError};
use crate::flatten::FlattenedFocusRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// A JSON dataset: metadata plus the flattened records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenedDataset {
    pub metadata: DatasetMetadata,
    pub records: Vec<FlattenedFocusRecord>,
}

impl FlattenedDataset {
    pub fn new(records: Vec<FlattenedFocusRecord>) -> Self {
        FlattenedDataset {
            metadata: DatasetMetadata::new(records.len()),
            records,
        }
    }
}

/// Export flattened records (with dataset metadata) to a JSON file
pub fn export_records<P: AsRef<Path>>(
    records: Vec<FlattenedFocusRecord>,
    output_path: P,
) -> Result<(), ExportError> {
    let dataset = FlattenedDataset::new(records);
    export_json(&dataset, output_path)
}

/// Export any serializable data structure to pretty-printed JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::{FocusFlattener, FocusInput};
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_dataset() {
        let record = FocusFlattener::flatten_focus_data(Some(&FocusInput::Legacy(
            "cardio".to_string(),
        )))
        .unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        export_records(vec![record], temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"record_count\": 1"));
        assert!(content.contains("\"focus_cardio_endurance\": true"));
        assert!(content.contains("\"flatten_version\""));
    }

    #[test]
    fn test_dataset_round_trip() {
        let record = FocusFlattener::flatten_focus_data(None).unwrap();
        let dataset = FlattenedDataset::new(vec![record]);

        let json = serde_json::to_string(&dataset).unwrap();
        let parsed: FlattenedDataset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dataset);
    }
}
