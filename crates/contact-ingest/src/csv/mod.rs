//! Semicolon-delimited CSV utilities.

mod reader;
mod writer;

/// Field delimiter for contact files.
pub const CSV_DELIMITER: u8 = b';';

pub use reader::{CsvTable, read_csv_rows, validate_encoding};
pub use writer::write_csv_rows;
