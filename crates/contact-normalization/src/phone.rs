//! E.164 phone number normalization.
//!
//! Rules, applied in order:
//! - Numbers that already carry a country code (leading `+`, leading `00`,
//!   or a known calling code) keep it; only the format is normalized.
//! - Local numbers starting with `0` drop the `0` and get the configured
//!   default country code (UAE `+971` unless overridden).
//! - Anything else fails with a reason.

use contact_model::{NormalizationError, Result, redact_value};

use crate::options::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS, PhoneOptions};
use crate::strategy::ColumnNormalizer;

/// Normalizes phone numbers into E.164 format.
#[derive(Debug, Clone, Default)]
pub struct E164PhoneNormalizer {
    options: PhoneOptions,
}

impl E164PhoneNormalizer {
    pub fn new(options: PhoneOptions) -> Self {
        Self { options }
    }

    /// Normalizer for a given default country code, other options default.
    pub fn with_country_code(code: impl Into<String>) -> Self {
        Self::new(PhoneOptions::default().with_default_country_code(code))
    }

    pub fn options(&self) -> &PhoneOptions {
        &self.options
    }

    /// Replace OCR-prone letters, keep only digits and `+`, and collapse
    /// repeated `+` into a single leading one.
    pub fn clean_raw(&self, raw: &str) -> String {
        let cleaned: String = raw
            .chars()
            .map(|c| self.replacement_for(c))
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        if cleaned.matches('+').count() > 1 {
            let digits: String = cleaned.chars().filter(|c| *c != '+').collect();
            return format!("+{digits}");
        }
        cleaned
    }

    /// Returns true if the cleaned number already carries a country code.
    pub fn has_country_code(&self, phone: &str) -> bool {
        if phone.starts_with('+') || phone.starts_with("00") {
            return true;
        }
        self.matched_known_code(phone).is_some()
    }

    /// First known calling code (in configured order) the number starts with.
    fn matched_known_code(&self, phone: &str) -> Option<&str> {
        self.options
            .known_codes
            .iter()
            .map(String::as_str)
            .find(|code| phone.starts_with(code))
    }

    fn replacement_for(&self, c: char) -> char {
        self.options
            .char_replacements
            .iter()
            .find(|(bad, _)| *bad == c)
            .map_or(c, |(_, good)| *good)
    }
}

impl ColumnNormalizer for E164PhoneNormalizer {
    fn description(&self) -> &'static str {
        "E.164 phone normalizer"
    }

    fn normalize(&self, raw: &str) -> Result<String> {
        if raw.is_empty() {
            return Err(NormalizationError::missing("Phone number is missing."));
        }

        let phone = self.clean_raw(raw);
        let digit_count = phone.chars().filter(char::is_ascii_digit).count();
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digit_count) {
            return Err(NormalizationError::invalid_value(format!(
                "Phone number length invalid: {digit_count} digits \
                 (must be {MIN_PHONE_DIGITS}-{MAX_PHONE_DIGITS})"
            )));
        }

        if self.has_country_code(&phone) {
            tracing::trace!(
                phone = %redact_value(&phone),
                "Phone number already carries a country code"
            );
            if let Some(rest) = phone.strip_prefix("00") {
                return Ok(format!("+{rest}"));
            }
            if phone.starts_with('+') {
                return Ok(phone);
            }
            return Ok(format!("+{phone}"));
        }

        if let Some(local) = phone.strip_prefix('0') {
            tracing::trace!(
                phone = %redact_value(&phone),
                country_code = %self.options.default_country_code,
                "Applying default country code to local number"
            );
            return Ok(format!("{}{local}", self.options.default_country_code));
        }

        Err(NormalizationError::invalid_format(format!(
            "Phone number must include a country code or start with 0 for local \
             numbers (default country code {}).",
            self.options.default_country_code
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> E164PhoneNormalizer {
        E164PhoneNormalizer::default()
    }

    #[test]
    fn test_clean_raw_ocr_letters() {
        assert_eq!(normalizer().clean_raw("o522458591"), "0522458591");
        assert_eq!(normalizer().clean_raw("O5O"), "050");
    }

    #[test]
    fn test_clean_raw_strips_separators() {
        assert_eq!(normalizer().clean_raw("  058-510-8603  "), "0585108603");
        assert_eq!(normalizer().clean_raw("(+1) 415.555.2671"), "+14155552671");
    }

    #[test]
    fn test_clean_raw_collapses_plus() {
        assert_eq!(normalizer().clean_raw("++971 58+5108603"), "+971585108603");
    }

    #[test]
    fn test_has_country_code() {
        let n = normalizer();
        assert!(n.has_country_code("+971585108603"));
        assert!(n.has_country_code("00971585108603"));
        assert!(n.has_country_code("971585108603"));
        assert!(n.has_country_code("4402079460958"));
        assert!(!n.has_country_code("0585108603"));
        assert!(!n.has_country_code("563341057"));
    }

    #[test]
    fn test_known_code_priority_is_first_match() {
        // "1" is listed before "44" and "380"; a number starting with 1 is
        // claimed by it regardless of what follows.
        let n = normalizer();
        assert_eq!(n.matched_known_code("14155552671"), Some("1"));
        assert_eq!(n.matched_known_code("971585108603"), Some("971"));
        assert_eq!(n.matched_known_code("919876543210"), Some("91"));
    }

    #[test]
    fn test_local_number_gets_default_code() {
        assert_eq!(normalizer().normalize("0585108603").unwrap(), "+971585108603");
    }

    #[test]
    fn test_custom_default_code() {
        let n = E164PhoneNormalizer::with_country_code("+44");
        assert_eq!(n.normalize("02079460958").unwrap(), "+442079460958");
    }

    #[test]
    fn test_double_zero_prefix() {
        assert_eq!(normalizer().normalize("00971585108603").unwrap(), "+971585108603");
    }

    #[test]
    fn test_missing() {
        let err = normalizer().normalize("").unwrap_err();
        assert!(matches!(err, NormalizationError::Missing(_)));
    }

    #[test]
    fn test_length_reason_names_count() {
        let err = normalizer().normalize("054123").unwrap_err();
        assert_eq!(
            err.reason(),
            "Phone number length invalid: 6 digits (must be 8-15)"
        );
    }

    #[test]
    fn test_no_country_code_not_local() {
        let err = normalizer().normalize("563341057").unwrap_err();
        assert!(err.reason().contains("country code"));
    }
}
