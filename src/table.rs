//! CSV table loading.
//!
//! The only real I/O in the pipeline. Missing files are the caller's
//! problem (they report "not found" in the envelope); a file that exists
//! but cannot be parsed is a hard failure with a descriptive error.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::Value;

use crate::models::Row;

/// Load a CSV table into field-name → value rows.
///
/// The header row supplies field names; every value is kept as a string.
/// Short records simply omit their trailing columns — no placeholder
/// values are invented.
pub fn load_table(path: &Path) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open table: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row: {}", path.display()))?
        .clone();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header is line 1, data starts at line 2.
        let record = record
            .with_context(|| format!("malformed row {} in {}", index + 2, path.display()))?;

        let mut row = Row::new();
        for (name, value) in headers.iter().zip(record.iter()) {
            row.insert(name.to_string(), Value::String(value.to_string()));
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_headers_and_rows_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("components.csv");
        fs::write(
            &path,
            "Component,Platform,Best Practices\n\
             Button,cross-platform,Use 48dp touch targets\n\
             FAB,android,One primary action per screen\n",
        )
        .unwrap();

        let rows = load_table(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(field(&rows[0], "Component"), "Button");
        assert_eq!(field(&rows[1], "Best Practices"), "One primary action per screen");

        // preserve_order keeps fields in header order
        let keys: Vec<&String> = rows[0].keys().collect();
        assert_eq!(keys, vec!["Component", "Platform", "Best Practices"]);
    }

    #[test]
    fn short_records_omit_missing_columns() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("short.csv");
        fs::write(&path, "A,B,C\nonly-a\n").unwrap();

        let rows = load_table(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(field(&rows[0], "A"), "only-a");
        assert!(rows[0].get("B").is_none());
    }

    #[test]
    fn quoted_fields_with_commas_survive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quoted.csv");
        fs::write(&path, "Name,Notes\nCard,\"elevated, outlined, filled\"\n").unwrap();

        let rows = load_table(&path).unwrap();
        assert_eq!(field(&rows[0], "Notes"), "elevated, outlined, filled");
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_table(&tmp.path().join("nope.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to open table"));
    }

    #[test]
    fn invalid_utf8_is_a_descriptive_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.csv");
        fs::write(&path, b"A,B\n\xff\xfe,value\n").unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(err.to_string().contains("malformed row 2"));
    }
}
