//! Date-of-birth normalization to ISO 8601 (`YYYY-MM-DD`).
//!
//! Parsing is attempted in order:
//! 1. **Numeric fast path**: `D/M/Y` shaped input with any of `/ - . _` as
//!    delimiter. Day-first unless the second component exceeds 12; year
//!    strings of 1-4 digits with a two-digit-year pivot.
//! 2. **Format hint**: the configured chrono format, if any.
//! 3. **Fuzzy text**: month names, ordinal days, year-first ISO, compact
//!    `YYYYMMDD`; unknown words are ignored.
//!
//! Output is always zero-padded `YYYY-MM-DD`.

mod fuzzy;
mod numeric;

use chrono::{Datelike, NaiveDate};
use contact_model::{NormalizationError, Result, redact_value};

use crate::options::DateOptions;
use crate::strategy::ColumnNormalizer;

pub use fuzzy::parse_fuzzy_date;
pub use numeric::{NumericDate, match_numeric_date};

/// Years representable as zero-padded `YYYY`.
const ISO_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Normalizes dates of birth to ISO 8601.
#[derive(Debug, Clone, Default)]
pub struct DateNormalizer {
    options: DateOptions,
}

impl DateNormalizer {
    pub fn new(options: DateOptions) -> Self {
        Self { options }
    }

    /// Normalizer with a custom two-digit-year pivot, other options default.
    pub fn with_pivot_year(pivot_year: u32) -> Self {
        Self::new(DateOptions::default().with_pivot_year(pivot_year))
    }

    pub fn options(&self) -> &DateOptions {
        &self.options
    }

    /// Fallback after the numeric fast path: format hint, then fuzzy text.
    fn parse_fallback(&self, cleaned: &str) -> Option<NaiveDate> {
        let hinted = self
            .options
            .default_format
            .as_deref()
            .and_then(|format| NaiveDate::parse_from_str(cleaned, format).ok());

        let date = match hinted {
            Some(date) if (0..100).contains(&date.year()) => {
                let year = resolve_two_digit_year(date.year().unsigned_abs(), self.options.pivot_year);
                date.with_year(i32::try_from(year).ok()?)
            }
            Some(date) => Some(date),
            None => parse_fuzzy_date(cleaned, self.options.pivot_year),
        }?;

        // Years that would not format as four plain digits.
        ISO_YEAR_RANGE.contains(&date.year()).then_some(date)
    }
}

impl ColumnNormalizer for DateNormalizer {
    fn description(&self) -> &'static str {
        "ISO 8601 date-of-birth normalizer"
    }

    fn normalize(&self, raw: &str) -> Result<String> {
        if raw.is_empty() {
            return Err(NormalizationError::missing("Date of birth is missing."));
        }

        let cleaned = clean_date_text(raw);

        if let Some(numeric) = match_numeric_date(&cleaned) {
            tracing::trace!(dob = %redact_value(&cleaned), "Numeric date fast path");
            let date = numeric.resolve(self.options.pivot_year, &cleaned)?;
            return Ok(format_iso8601_date(date));
        }

        match self.parse_fallback(&cleaned) {
            Some(date) => {
                tracing::trace!(dob = %redact_value(&cleaned), "Parsed date via fallback");
                Ok(format_iso8601_date(date))
            }
            None => Err(NormalizationError::unrecognized(format!(
                "Invalid date format: {cleaned}. Supported: ISO, numeric, month name \
                 formats, and natural language dates."
            ))),
        }
    }
}

/// Trim, unify `/ - . _` into `/`, and collapse whitespace runs.
pub fn clean_date_text(raw: &str) -> String {
    let unified: String = raw
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '-' | '.' | '_') { '/' } else { c })
        .collect();
    unified.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a two-digit year onto 19YY/20YY: `yy <= pivot` is 20YY.
pub fn resolve_two_digit_year(two_digit: u32, pivot_year: u32) -> u32 {
    if two_digit <= pivot_year {
        2000 + two_digit
    } else {
        1900 + two_digit
    }
}

/// Format a NaiveDate to ISO 8601 date string.
pub fn format_iso8601_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
