//! CSV export for flattened focus records
//!
//! One row per record, one column per flattened field, header row from the
//! record's field names. Suited to loading into tabular analytics stores.

use super::ExportError;
use crate::flatten::FlattenedFocusRecord;
use csv::Writer;
use std::path::Path;

/// Export flattened records to a CSV file
pub fn export_records<P: AsRef<Path>>(
    records: &[FlattenedFocusRecord],
    output_path: P,
) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(output_path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render flattened records as a CSV string
pub fn records_to_string(records: &[FlattenedFocusRecord]) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::{FocusFlattener, FocusInput};
    use crate::focus::FocusBuilder;
    use tempfile::NamedTempFile;

    fn sample_records() -> Vec<FlattenedFocusRecord> {
        let structured = FocusBuilder::build_focus_configuration(
            "hiit",
            "HIIT",
            Some("tabata"),
            Some("Tabata"),
        );
        vec![
            FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(structured)))
                .unwrap(),
            FocusFlattener::flatten_focus_data(Some(&FocusInput::Legacy(
                "strength".to_string(),
            )))
            .unwrap(),
        ]
    }

    #[test]
    fn test_export_to_file() {
        let temp_file = NamedTempFile::new().unwrap();
        export_records(&sample_records(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("focus_hiit"));
        assert!(header.contains("format_hiit_tabata"));
        assert!(header.contains("score_complexity"));
        assert!(header.contains("flatten_version"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_csv_row_values() {
        let csv = records_to_string(&sample_records()).unwrap();
        let rows: Vec<&str> = csv.lines().collect();

        let header: Vec<&str> = rows[0].split(',').collect();
        let hiit_row: Vec<&str> = rows[1].split(',').collect();
        let focus_hiit_idx = header.iter().position(|h| *h == "focus_hiit").unwrap();
        assert_eq!(hiit_row[focus_hiit_idx], "true");

        let score_idx = header
            .iter()
            .position(|h| *h == "score_time_efficiency")
            .unwrap();
        assert_eq!(hiit_row[score_idx], "100");
    }
}
