use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{debug, info, info_span, warn};

use contact_ingest::{
    DEFAULT_OUTPUT_DIR, ensure_output_dir, read_csv_rows, timestamped_output_path, write_csv_rows,
};
use contact_model::redact_value;
use contact_normalization::{
    DOB_COLUMN, NormalizationOutput, Normalizer, NormalizerRegistry, PHONE_COLUMN,
};

use crate::cli::{CheckArgs, NormalizeArgs};
use crate::config::options_from_args;
use crate::types::{CheckOutcome, NormalizeResult};

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let span = info_span!("normalize", input = %args.input.display());
    let _guard = span.enter();

    let options = options_from_args(&args.options).context("load configuration")?;
    debug!(?options, "Resolved normalizer options");

    let table = read_csv_rows(&args.input)
        .with_context(|| format!("read input {}", args.input.display()))?;
    info!(rows = table.len(), columns = table.headers.len(), "Loaded contacts");

    let normalizer = Normalizer::with_options(&options);
    let output = normalizer.normalize_data(table.rows);
    log_skipped(&output);

    let output_path = if args.dry_run {
        info!("Dry run, output not written");
        None
    } else {
        let path = resolve_output_path(args);
        write_output(&path, &table.headers, &output)?
    };

    Ok(NormalizeResult {
        input: args.input.clone(),
        output_path,
        output,
        dry_run: args.dry_run,
    })
}

pub fn run_check_phone(args: &CheckArgs) -> Result<Vec<CheckOutcome>> {
    run_check(args, PHONE_COLUMN)
}

pub fn run_check_date(args: &CheckArgs) -> Result<Vec<CheckOutcome>> {
    run_check(args, DOB_COLUMN)
}

fn run_check(args: &CheckArgs, column: &str) -> Result<Vec<CheckOutcome>> {
    let options = options_from_args(&args.options).context("load configuration")?;
    let registry = NormalizerRegistry::with_defaults(&options);
    let normalizer = registry
        .get(column)
        .ok_or_else(|| anyhow!("no normalizer registered for column '{column}'"))?;

    let outcomes: Vec<CheckOutcome> = args
        .values
        .iter()
        .map(|value| CheckOutcome {
            input: value.clone(),
            result: normalizer.normalize(value).map_err(|e| e.to_string()),
        })
        .collect();
    let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();
    info!(column, checked = outcomes.len(), failed, "Check complete");
    Ok(outcomes)
}

/// `--output` wins; otherwise a timestamped file in `--output-dir` (default `results`).
fn resolve_output_path(args: &NormalizeArgs) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    let dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    timestamped_output_path(&dir, Local::now().naive_local())
}

fn write_output(
    path: &Path,
    headers: &[String],
    output: &NormalizationOutput,
) -> Result<Option<PathBuf>> {
    if output.normalized.is_empty() {
        warn!("No rows normalized, output file not written");
        return Ok(None);
    }
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        ensure_output_dir(dir).context("create output directory")?;
    }
    let written = write_csv_rows(path, headers, &output.normalized)
        .with_context(|| format!("write output {}", path.display()))?;
    info!(path = %path.display(), rows = written, "Wrote normalized contacts");
    Ok(Some(path.to_path_buf()))
}

fn log_skipped(output: &NormalizationOutput) {
    for record in &output.skipped {
        let row = record.row.to_string();
        warn!(
            row = %redact_value(&row),
            columns = ?record.errors.keys().collect::<Vec<_>>(),
            "Row skipped"
        );
    }
}
