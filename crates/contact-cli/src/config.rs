//! TOML configuration file and option resolution.
//!
//! ```toml
//! [phone]
//! default_country_code = "+971"
//! known_codes = ["971", "91", "1", "44", "380", "49", "81", "7"]
//!
//! [date]
//! pivot_year = 25
//! default_format = "%d/%m/%Y"
//! ```
//!
//! Every key is optional. Precedence: CLI flag, then config file, then the
//! built-in default.

use std::path::{Path, PathBuf};

use contact_normalization::{DateOptions, NormalizerOptions, PhoneOptions};
use serde::Deserialize;
use thiserror::Error;

use crate::cli::NormalizerArgs;

/// Highest accepted two-digit-year pivot.
pub const MAX_PIVOT_YEAR: u32 = 99;

/// Errors loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub phone: PhoneSection,
    pub date: DateSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhoneSection {
    pub default_country_code: Option<String>,
    pub known_codes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateSection {
    pub pivot_year: Option<u32>,
    pub default_format: Option<String>,
}

/// Read and parse a config file.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path)
}

/// Parse config file contents; `path` is only used in errors.
pub fn parse_config(text: &str, path: &Path) -> Result<FileConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the file named by `--config` (if any) and merge it with the flags.
pub fn options_from_args(args: &NormalizerArgs) -> Result<NormalizerOptions, ConfigError> {
    let file = match &args.config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };
    resolve_options(args, &file)
}

/// Merge flags over file settings over defaults, then validate.
pub fn resolve_options(
    args: &NormalizerArgs,
    file: &FileConfig,
) -> Result<NormalizerOptions, ConfigError> {
    let mut phone = PhoneOptions::default();
    if let Some(code) = args
        .country_code
        .as_ref()
        .or(file.phone.default_country_code.as_ref())
    {
        phone = phone.with_default_country_code(validate_country_code(code)?);
    }
    if let Some(codes) = &file.phone.known_codes {
        for code in codes {
            validate_known_code(code)?;
        }
        phone = phone.with_known_codes(codes.iter().cloned());
    }

    let mut date = DateOptions::default();
    if let Some(pivot) = args.pivot_year.or(file.date.pivot_year) {
        date = date.with_pivot_year(validate_pivot_year(pivot)?);
    }
    if let Some(format) = args
        .date_format
        .as_ref()
        .or(file.date.default_format.as_ref())
    {
        date = date.with_default_format(Some(format.clone()));
    }

    Ok(NormalizerOptions::new().with_phone(phone).with_date(date))
}

fn validate_country_code(code: &str) -> Result<String, ConfigError> {
    let valid = code
        .strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    if valid {
        Ok(code.to_string())
    } else {
        Err(ConfigError::InvalidValue {
            field: "country code",
            value: code.to_string(),
            reason: "expected '+' followed by digits",
        })
    }
}

fn validate_known_code(code: &str) -> Result<(), ConfigError> {
    if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: "known calling code",
            value: code.to_string(),
            reason: "expected digits only",
        })
    }
}

fn validate_pivot_year(pivot: u32) -> Result<u32, ConfigError> {
    if pivot <= MAX_PIVOT_YEAR {
        Ok(pivot)
    } else {
        Err(ConfigError::InvalidValue {
            field: "pivot year",
            value: pivot.to_string(),
            reason: "expected a two-digit year (0-99)",
        })
    }
}
