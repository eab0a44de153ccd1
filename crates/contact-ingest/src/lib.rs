//! Contact data ingestion and output.
//!
//! This crate moves contact rows between semicolon-delimited CSV files and
//! [`contact_model::Row`] values. It never touches normalization logic.
//!
//! # Features
//!
//! - **CSV Loading**: Read a `;`-delimited file with a header row into rows
//! - **CSV Writing**: Write rows back using the original header order
//! - **Output Naming**: Timestamped `normalized_contacts_*.csv` file names
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use contact_ingest::{read_csv_rows, timestamped_output_path, write_csv_rows};
//!
//! let table = read_csv_rows(Path::new("contacts.csv"))?;
//! let output = timestamped_output_path(Path::new("results"), chrono::Local::now().naive_local());
//! write_csv_rows(&output, &table.headers, &table.rows)?;
//! ```

mod csv;
mod error;
mod naming;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use self::csv::{CSV_DELIMITER, CsvTable, read_csv_rows, validate_encoding, write_csv_rows};

// === Output Naming ===
pub use naming::{
    DEFAULT_OUTPUT_DIR, OUTPUT_FILE_PREFIX, ensure_output_dir, output_file_name,
    timestamped_output_path,
};
