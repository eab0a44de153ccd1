//! Normalization failure type.

use thiserror::Error;

/// Failure raised by a column normalizer.
///
/// Every variant renders to its human-readable reason; the variant only
/// classifies the failure. There are no error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// Required value is empty or absent.
    #[error("{0}")]
    Missing(String),

    /// Value has a structurally malformed shape (e.g. a year with 5 digits).
    #[error("{0}")]
    InvalidFormat(String),

    /// Value is well-formed but semantically impossible (e.g. Feb 30).
    #[error("{0}")]
    InvalidValue(String),

    /// Value exhausted every parse strategy.
    #[error("{0}")]
    Unrecognized(String),
}

impl NormalizationError {
    pub fn missing(reason: impl Into<String>) -> Self {
        Self::Missing(reason.into())
    }

    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }

    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue(reason.into())
    }

    pub fn unrecognized(reason: impl Into<String>) -> Self {
        Self::Unrecognized(reason.into())
    }

    /// Returns the reason string carried by this error.
    pub fn reason(&self) -> &str {
        match self {
            Self::Missing(reason)
            | Self::InvalidFormat(reason)
            | Self::InvalidValue(reason)
            | Self::Unrecognized(reason) => reason,
        }
    }
}

/// Result type for column normalizers.
pub type Result<T> = std::result::Result<T, NormalizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_reason() {
        let err = NormalizationError::missing("Phone number is missing.");
        assert_eq!(err.to_string(), "Phone number is missing.");
        assert_eq!(err.reason(), "Phone number is missing.");
    }

    #[test]
    fn test_variants_keep_kind() {
        let err = NormalizationError::invalid_value("Invalid date: 31/02/2001");
        assert!(matches!(err, NormalizationError::InvalidValue(_)));
        let err = NormalizationError::unrecognized("nope");
        assert!(matches!(err, NormalizationError::Unrecognized(_)));
    }
}
