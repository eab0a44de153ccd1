//! Column name to strategy registry.

use std::collections::HashMap;
use std::fmt;

use crate::date::DateNormalizer;
use crate::options::{DOB_COLUMN, NormalizerOptions, PHONE_COLUMN};
use crate::phone::E164PhoneNormalizer;
use crate::strategy::ColumnNormalizer;

/// Registry of column normalizers indexed by column name.
///
/// Owned by a single [`crate::Normalizer`]; there is no process-wide default
/// registry, so runs with different options never observe each other.
pub struct NormalizerRegistry {
    normalizers: HashMap<String, Box<dyn ColumnNormalizer>>,
}

impl NormalizerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            normalizers: HashMap::new(),
        }
    }

    /// Creates a registry with the `phone` and `dob` strategies configured
    /// from `options`.
    pub fn with_defaults(options: &NormalizerOptions) -> Self {
        let mut registry = Self::new();
        registry.register(
            PHONE_COLUMN,
            Box::new(E164PhoneNormalizer::new(options.phone.clone())),
        );
        registry.register(
            DOB_COLUMN,
            Box::new(DateNormalizer::new(options.date.clone())),
        );
        registry
    }

    /// Registers a strategy for a column.
    ///
    /// If a strategy for this column is already registered, it is replaced.
    pub fn register(&mut self, column: impl Into<String>, normalizer: Box<dyn ColumnNormalizer>) {
        let column = column.into();
        tracing::debug!(
            column = %column,
            strategy = normalizer.description(),
            "Registered column normalizer"
        );
        self.normalizers.insert(column, normalizer);
    }

    /// Removes and returns the strategy for a column.
    pub fn remove(&mut self, column: &str) -> Option<Box<dyn ColumnNormalizer>> {
        self.normalizers.remove(column)
    }

    /// Gets the strategy for a column.
    pub fn get(&self, column: &str) -> Option<&dyn ColumnNormalizer> {
        self.normalizers.get(column).map(|n| n.as_ref())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.normalizers.contains_key(column)
    }

    /// Returns the number of registered strategies.
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    /// Returns true if no strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }

    /// Registered column names, sorted.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self.normalizers.keys().map(String::as_str).collect();
        columns.sort_unstable();
        columns
    }
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        Self::with_defaults(&NormalizerOptions::default())
    }
}

impl fmt::Debug for NormalizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for column in self.columns() {
            if let Some(normalizer) = self.get(column) {
                map.entry(&column, &normalizer.description());
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::FnNormalizer;

    #[test]
    fn test_default_registry() {
        let registry = NormalizerRegistry::default();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.columns(), vec!["dob", "phone"]);
        assert_eq!(
            registry.get("phone").map(|n| n.description()),
            Some("E.164 phone normalizer")
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = NormalizerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("phone").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = NormalizerRegistry::default();
        registry.register("phone", Box::new(FnNormalizer::new(|_: &str| Ok("X".to_string()))));
        assert_eq!(registry.len(), 2);
        let phone = registry.get("phone").unwrap();
        assert_eq!(phone.description(), "Function-based normalizer");
        assert_eq!(phone.normalize("anything").unwrap(), "X");
    }

    #[test]
    fn test_remove() {
        let mut registry = NormalizerRegistry::default();
        assert!(registry.remove("dob").is_some());
        assert!(!registry.contains("dob"));
        assert!(registry.remove("dob").is_none());
    }

    #[test]
    fn test_debug_lists_columns() {
        let rendered = format!("{:?}", NormalizerRegistry::default());
        assert!(rendered.contains("\"dob\""));
        assert!(rendered.contains("E.164 phone normalizer"));
    }
}
