//! Numeric `D/M/Y` fast path.

use std::sync::LazyLock;

use chrono::NaiveDate;
use contact_model::{NormalizationError, Result};
use regex::Regex;

use super::resolve_two_digit_year;

/// Cleaned input shaped like `D/M/Y`: 1-2 digit components, any-length year.
static NUMERIC_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]+)$").expect("Invalid numeric date regex")
});

/// Components captured by the numeric fast path, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericDate {
    pub first: u32,
    pub second: u32,
    pub year_text: String,
}

/// Match cleaned date text against the numeric shape.
pub fn match_numeric_date(cleaned: &str) -> Option<NumericDate> {
    let caps = NUMERIC_DATE_REGEX.captures(cleaned)?;
    Some(NumericDate {
        first: caps.get(1)?.as_str().parse().ok()?,
        second: caps.get(2)?.as_str().parse().ok()?,
        year_text: caps.get(3)?.as_str().to_string(),
    })
}

impl NumericDate {
    /// Interpret the components as a calendar date.
    ///
    /// Day-first by default; when the second component exceeds 12 it must be
    /// the day, so the order flips to month-first. `dob` is the cleaned input
    /// and only appears in error reasons.
    pub fn resolve(&self, pivot_year: u32, dob: &str) -> Result<NaiveDate> {
        let year = self.resolve_year(pivot_year, dob)?;

        let (day, month) = if self.second > 12 {
            (self.second, self.first)
        } else {
            (self.first, self.second)
        };

        i32::try_from(year)
            .ok()
            .filter(|y| *y >= 1)
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .ok_or_else(|| {
                NormalizationError::invalid_value(format!(
                    "Invalid date: {dob} (day={day}, month={month}, year={year})"
                ))
            })
    }

    /// 1 digit is zero-padded, 3 digits keep the last two under 19xx,
    /// 2 digits go through the pivot, 4 digits are taken as-is.
    fn resolve_year(&self, pivot_year: u32, dob: &str) -> Result<u32> {
        let text = match self.year_text.len() {
            1 => format!("0{}", self.year_text),
            3 => format!("19{}", &self.year_text[1..]),
            _ => self.year_text.clone(),
        };

        let invalid_length = || {
            NormalizationError::invalid_format(format!(
                "Year must be 2 or 4 digits, got {} digits in '{dob}'",
                text.len()
            ))
        };

        match text.len() {
            2 => {
                let yy: u32 = text.parse().map_err(|_| invalid_length())?;
                Ok(resolve_two_digit_year(yy, pivot_year))
            }
            4 => text.parse().map_err(|_| invalid_length()),
            _ => Err(invalid_length()),
        }
    }
}
