//! Output file naming.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{IngestError, Result};

/// Directory normalized files are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// File name prefix for normalized output.
pub const OUTPUT_FILE_PREFIX: &str = "normalized_contacts";

/// `normalized_contacts_{YYYYMMDD_HHMMSS}.csv` for the given local time.
pub fn output_file_name(now: NaiveDateTime) -> String {
    format!("{OUTPUT_FILE_PREFIX}_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Timestamped output path inside `dir`.
pub fn timestamped_output_path(dir: &Path, now: NaiveDateTime) -> PathBuf {
    dir.join(output_file_name(now))
}

/// Create the output directory (and parents) if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| IngestError::DirectoryCreate {
        path: dir.to_path_buf(),
        source: e,
    })
}
