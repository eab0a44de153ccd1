//! Configuration options for contact normalization.

use serde::{Deserialize, Serialize};

/// Column carrying the phone number.
pub const PHONE_COLUMN: &str = "phone";

/// Column carrying the date of birth.
pub const DOB_COLUMN: &str = "dob";

/// Country code applied to local numbers (UAE).
pub const DEFAULT_COUNTRY_CODE: &str = "+971";

/// Calling codes recognised as "already international" when the number has
/// no `+` or `00` prefix.
///
/// Matching is first-match-wins in this exact order, so a number starting
/// with `1` is claimed by NANP before any longer code is considered. This is
/// a known fragility kept for compatibility with existing outputs.
pub const KNOWN_CALLING_CODES: &[&str] = &["971", "91", "1", "44", "380", "49", "81", "7"];

/// Two-digit years at or below this value map to 20YY, above it to 19YY.
pub const DEFAULT_PIVOT_YEAR: u32 = 25;

/// Format hint tried before fuzzy parsing (chrono syntax).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Inclusive digit-count bounds for an E.164 number.
pub const MIN_PHONE_DIGITS: usize = 8;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Options for the E.164 phone normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneOptions {
    /// Prefix applied to local numbers starting with `0` (e.g. "+971").
    pub default_country_code: String,

    /// Known calling codes, checked in order.
    pub known_codes: Vec<String>,

    /// OCR-prone characters and their digit replacements.
    pub char_replacements: Vec<(char, char)>,
}

impl Default for PhoneOptions {
    fn default() -> Self {
        Self {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            known_codes: KNOWN_CALLING_CODES.iter().map(|c| (*c).to_string()).collect(),
            char_replacements: vec![('O', '0'), ('o', '0')],
        }
    }
}

impl PhoneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_country_code(mut self, code: impl Into<String>) -> Self {
        self.default_country_code = code.into();
        self
    }

    pub fn with_known_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_codes = codes.into_iter().map(Into::into).collect();
        self
    }
}

/// Options for the date-of-birth normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOptions {
    /// Two-digit-year pivot: `yy <= pivot` is 20yy, otherwise 19yy.
    pub pivot_year: u32,

    /// Format hint tried on the fallback path before fuzzy parsing.
    /// Unused by the numeric fast path.
    pub default_format: Option<String>,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            pivot_year: DEFAULT_PIVOT_YEAR,
            default_format: Some(DEFAULT_DATE_FORMAT.to_string()),
        }
    }
}

impl DateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivot_year(mut self, pivot_year: u32) -> Self {
        self.pivot_year = pivot_year;
        self
    }

    pub fn with_default_format(mut self, format: Option<String>) -> Self {
        self.default_format = format;
        self
    }
}

/// Which registered strategies the row loop invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApplyMode {
    /// Only `phone` and `dob`, in that order. Strategies registered for other
    /// columns are kept but never invoked.
    #[default]
    PhoneAndDob,
    /// `phone`, `dob`, then every other present column with a registered
    /// strategy, in row column order.
    AllRegistered,
}

/// Options for building a [`crate::Normalizer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    pub phone: PhoneOptions,
    pub date: DateOptions,
    pub apply_mode: ApplyMode,
}

impl NormalizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phone(mut self, phone: PhoneOptions) -> Self {
        self.phone = phone;
        self
    }

    pub fn with_date(mut self, date: DateOptions) -> Self {
        self.date = date;
        self
    }

    pub fn with_apply_mode(mut self, mode: ApplyMode) -> Self {
        self.apply_mode = mode;
        self
    }
}
