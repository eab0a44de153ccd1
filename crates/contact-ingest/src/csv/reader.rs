//! CSV file reading with a single header row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use contact_model::Row;
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::CSV_DELIMITER;

/// Rows read from a CSV file, with the header that defines their columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Column names in file order.
    pub headers: Vec<String>,
    /// One row per record, columns in header order.
    pub rows: Vec<Row>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads a semicolon-delimited CSV file into rows keyed by header.
///
/// - Empty cells are read as empty strings.
/// - Records shorter than the header leave the missing columns without a value.
/// - Fields beyond the header are dropped.
pub fn read_csv_rows(path: &Path) -> Result<CsvTable> {
    validate_encoding(path)?;

    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(open(path)?);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(parse_error)?;
        if record.len() > headers.len() {
            tracing::debug!(
                path = %path.display(),
                record = index + 1,
                extra_fields = record.len() - headers.len(),
                "Dropping fields beyond the header"
            );
        }

        let mut row = Row::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            row.insert(header.as_str(), record.get(idx).map(str::to_string));
        }
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "Read CSV file"
    );

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_rows() {
        let file = create_temp_csv(b"name;phone;dob\nAnn;0585108603;13/02/2001\nBob;;09/09/90\n");
        let table = read_csv_rows(file.path()).unwrap();

        assert_eq!(table.headers, vec!["name", "phone", "dob"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("phone"), Some("0585108603"));
        assert_eq!(table.rows[1].get("phone"), Some(""));
    }

    #[test]
    fn test_short_record_leaves_columns_without_value() {
        let file = create_temp_csv(b"name;phone;dob\nAnn;0585108603\n");
        let table = read_csv_rows(file.path()).unwrap();

        let row = &table.rows[0];
        assert!(row.contains("dob"));
        assert_eq!(row.get("dob"), None);
    }

    #[test]
    fn test_extra_fields_dropped() {
        let file = create_temp_csv(b"name;phone\nAnn;0585108603;extra\n");
        let table = read_csv_rows(file.path()).unwrap();
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn test_values_not_trimmed() {
        let file = create_temp_csv(b"phone\n  058-510-8603  \n");
        let table = read_csv_rows(file.path()).unwrap();
        assert_eq!(table.rows[0].get("phone"), Some("  058-510-8603  "));
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let file = create_temp_csv("\u{feff}name;phone\nAnn;1\n".as_bytes());
        let table = read_csv_rows(file.path()).unwrap();
        assert_eq!(table.headers, vec!["name", "phone"]);
    }

    #[test]
    fn test_utf16_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'n', 0x00]);
        let result = read_csv_rows(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_csv_rows(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_blank_header() {
        let file = create_temp_csv(b";;\n1;2;3\n");
        let result = read_csv_rows(file.path());
        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_rows(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
