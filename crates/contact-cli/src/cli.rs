//! CLI argument definitions for the contact normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-normalizer",
    version,
    about = "Normalize contact phone numbers (E.164) and dates of birth (ISO 8601)",
    long_about = "Normalize contact records from a semicolon-delimited CSV file.\n\n\
                  Phone numbers are converted to E.164, dates of birth to ISO 8601.\n\
                  Rows that fail are reported with a reason per failing column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw contact values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a contacts CSV file and write the normalized rows.
    Normalize(NormalizeArgs),

    /// Normalize ad-hoc phone numbers and print the results.
    CheckPhone(CheckArgs),

    /// Normalize ad-hoc dates of birth and print the results.
    CheckDate(CheckArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Semicolon-delimited CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the timestamped output file (default: results).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Exact output file path (overrides --output-dir).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Normalize and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub options: NormalizerArgs,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Values to normalize.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub options: NormalizerArgs,
}

/// Normalizer settings shared by all subcommands.
///
/// Flags take precedence over the config file, which takes precedence over
/// built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct NormalizerArgs {
    /// TOML config file with [phone] and [date] sections.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Country code applied to local numbers starting with 0 (e.g. +971).
    #[arg(long = "country-code", value_name = "CODE")]
    pub country_code: Option<String>,

    /// Two-digit years at or below this map to 20YY, above it to 19YY.
    #[arg(long = "pivot-year", value_name = "N")]
    pub pivot_year: Option<u32>,

    /// chrono format tried before free-text date parsing (e.g. %d/%m/%Y).
    #[arg(long = "date-format", value_name = "FMT")]
    pub date_format: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
