//! CSV file writing in header order.

use std::fs::File;
use std::path::Path;

use contact_model::Row;
use csv::{Terminator, WriterBuilder};

use crate::error::{IngestError, Result};

use super::CSV_DELIMITER;

/// Writes rows as a semicolon-delimited CSV file with `\r\n` line endings.
///
/// Columns follow `headers`; row columns not in `headers` are ignored and
/// header columns missing from a row are written empty. An empty `rows`
/// slice writes nothing and creates no file.
///
/// Returns the number of data rows written.
pub fn write_csv_rows(path: &Path, headers: &[String], rows: &[Row]) -> Result<usize> {
    if rows.is_empty() {
        tracing::debug!(path = %path.display(), "No rows to write, skipping file creation");
        return Ok(0);
    }

    let write_error = |source: std::io::Error| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    writer
        .write_record(headers)
        .map_err(|e| write_error(e.into()))?;
    for row in rows {
        writer
            .write_record(headers.iter().map(|h| row.get(h).unwrap_or("")))
            .map_err(|e| write_error(e.into()))?;
    }
    writer.flush().map_err(write_error)?;

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        "Wrote CSV file"
    );
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_write_in_header_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![
            Row::new()
                .with("phone", "+971585108603")
                .with("dob", "2001-02-13")
                .with("name", "Ann"),
        ];

        let written = write_csv_rows(&path, &headers(&["name", "phone", "dob"]), &rows).unwrap();

        assert_eq!(written, 1);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name;phone;dob\r\nAnn;+971585108603;2001-02-13\r\n");
    }

    #[test]
    fn test_missing_and_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![Row::new().with("name", "Ann").with_none("dob").with("extra", "x")];

        write_csv_rows(&path, &headers(&["name", "dob", "phone"]), &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name;dob;phone\r\nAnn;;\r\n");
    }

    #[test]
    fn test_quotes_delimiter_in_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![Row::new().with("note", "a;b")];

        write_csv_rows(&path, &headers(&["note"]), &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "note\r\n\"a;b\"\r\n");
    }

    #[test]
    fn test_empty_rows_create_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let written = write_csv_rows(&path, &headers(&["name"]), &[]).unwrap();

        assert_eq!(written, 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let rows = vec![Row::new().with("name", "Ann")];

        let result = write_csv_rows(&path, &headers(&["name"]), &rows);
        assert!(matches!(result, Err(IngestError::FileWrite { .. })));
    }
}
