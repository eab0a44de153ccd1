//! Column normalizer trait.
//!
//! A column normalizer is a strategy with one operation: transform a raw
//! cell value into its canonical form, or fail with a reason. Strategies are
//! bound to column names in a [`crate::NormalizerRegistry`], which lets
//! callers plug in normalizers for additional columns without touching the
//! row loop.
//!
//! # Example
//!
//! ```ignore
//! use contact_normalization::{ColumnNormalizer, NormalizationError};
//!
//! struct UppercaseName;
//!
//! impl ColumnNormalizer for UppercaseName {
//!     fn normalize(&self, raw: &str) -> Result<String, NormalizationError> {
//!         if raw.trim().is_empty() {
//!             return Err(NormalizationError::missing("Name is missing."));
//!         }
//!         Ok(raw.trim().to_uppercase())
//!     }
//! }
//! ```

use contact_model::Result;

/// Trait for column-level normalization strategies.
///
/// Implementations must be pure: the result depends only on `raw` and the
/// strategy's own configuration, never on state mutated during `normalize`.
pub trait ColumnNormalizer: Send + Sync {
    /// Returns a human-readable description of the strategy.
    fn description(&self) -> &'static str {
        "Column normalizer"
    }

    /// Normalize a raw cell value.
    ///
    /// # Errors
    ///
    /// Returns a [`contact_model::NormalizationError`] carrying the reason
    /// the value cannot be normalized.
    fn normalize(&self, raw: &str) -> Result<String>;
}

/// Adapts a closure to the [`ColumnNormalizer`] trait.
pub struct FnNormalizer<F> {
    normalize_fn: F,
}

impl<F> FnNormalizer<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    pub fn new(normalize_fn: F) -> Self {
        Self { normalize_fn }
    }
}

impl<F> ColumnNormalizer for FnNormalizer<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn description(&self) -> &'static str {
        "Function-based normalizer"
    }

    fn normalize(&self, raw: &str) -> Result<String> {
        (self.normalize_fn)(raw)
    }
}
