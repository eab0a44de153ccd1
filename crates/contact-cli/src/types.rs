use std::path::PathBuf;

use contact_normalization::NormalizationOutput;

/// Outcome of the `normalize` command.
#[derive(Debug)]
pub struct NormalizeResult {
    pub input: PathBuf,
    /// Where normalized rows were written; `None` for a dry run or when no
    /// row was normalized.
    pub output_path: Option<PathBuf>,
    pub output: NormalizationOutput,
    pub dry_run: bool,
}

/// Result of normalizing one ad-hoc value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub input: String,
    pub result: Result<String, String>,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
